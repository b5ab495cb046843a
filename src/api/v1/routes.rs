/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - /status, /stats, /unauthorized, /forbidden, /users を定義
 * - 認証ゲートは app.rs 側で nest 全体に適用する (除外パスで素通し)
 */
use axum::{Router, routing::get};

use crate::state::AppState;

use crate::api::v1::handlers::{
    status::{forbidden, stats, status, unauthorized},
    users::{create_user, delete_user, get_me, get_user, list_users, update_user},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/status", get(status))
        .route("/stats", get(stats))
        .route("/unauthorized", get(unauthorized))
        .route("/forbidden", get(forbidden))
        .route("/users", get(list_users).post(create_user))
        .route("/users/me", get(get_me))
        .route(
            "/users/{user_id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}
