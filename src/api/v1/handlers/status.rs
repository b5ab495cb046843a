/*
 * Responsibility
 * - GET /status (疎通用) と GET /stats (件数)
 * - /unauthorized, /forbidden はエラーハンドラ確認用に必ず 401/403 を返す
 *   (どちらもデフォルトの除外パスなのでゲートには掛からない)
 */
use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

pub async fn status() -> impl IntoResponse {
    Json(json!({"status": "OK"}))
}

pub async fn stats(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = state.users.count().await?;
    Ok(Json(json!({"users": users})))
}

/// Always 401; exercises the error body end to end.
pub async fn unauthorized() -> AppError {
    AppError::Unauthorized
}

/// Always 403.
pub async fn forbidden() -> AppError {
    AppError::Forbidden
}
