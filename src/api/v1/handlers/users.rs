/*
 * Responsibility
 * - /users 系 CRUD handler
 * - Path/Json を extractor で受け、DTO validation → repo 呼び出し
 * - /users/me はゲートが extensions に載せた identity をそのまま返す
 */
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;
use uuid::Uuid;

use crate::{
    api::v1::dto::users::{CreateUserRequest, UpdateUserRequest, UserResponse},
    api::v1::extractors::CurrentUserExtractor,
    error::AppError,
    repos::user_repo::hash_password,
    state::AppState,
};

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let rows = state.users.list().await?;
    Ok(Json(rows.into_iter().map(UserResponse::from).collect()))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<UserResponse>, AppError> {
    let row = state.users.get(user_id).await?.ok_or(AppError::NotFound)?;
    Ok(Json(row.into()))
}

/// The identity the gate attached for this request. With auth disabled no
/// identity is ever attached and the extractor rejects with 404.
pub async fn get_me(CurrentUserExtractor(current): CurrentUserExtractor) -> Json<UserResponse> {
    Json(current.user.into())
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    req.validate()
        .map_err(|msg| AppError::BadRequest(msg.to_string()))?;

    let row = state
        .users
        .create(
            &req.email,
            &hash_password(&req.password),
            req.first_name.as_deref(),
            req.last_name.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(row.into())))
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let row = state
        .users
        .update(user_id, req.first_name.as_deref(), req.last_name.as_deref())
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(row.into()))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let deleted = state.users.delete(user_id).await?;
    if !deleted {
        return Err(AppError::NotFound);
    }

    Ok(Json(json!({})))
}
