/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - users: UserRepo, auth: 起動時に選択した AuthPolicy
 * - Clone 前提で持つ (内部は PgPool/Arc で Clone cheap)
 */
use std::sync::Arc;

use crate::repos::user_repo::UserRepo;
use crate::services::auth::AuthPolicy;

#[derive(Clone)]
pub struct AppState {
    pub users: UserRepo,
    pub auth: Arc<AuthPolicy>,
}

impl AppState {
    pub fn new(users: UserRepo, auth: Arc<AuthPolicy>) -> Self {
        Self { users, auth }
    }
}
