/// Factory: build the process-wide `AuthPolicy` from application `Config`.
use std::sync::Arc;

use crate::config::{AuthMode, Config};
use crate::repos::user_repo::UserRepo;
use crate::services::auth::{AuthPolicy, BasicAuth};

pub fn build_auth_policy(config: &Config, users: UserRepo) -> Arc<AuthPolicy> {
    match config.auth_mode {
        AuthMode::Disabled => Arc::new(AuthPolicy::NoAuth),
        AuthMode::Basic => {
            if config.auth_excluded_paths.is_empty() {
                // 空の除外リストは fail-safe 側に倒れる: /api/v1/status を含む
                // 全パスが credentials 必須になる。
                tracing::warn!(
                    "basic auth enabled with an empty exclusion list; every route will require credentials"
                );
            }

            Arc::new(AuthPolicy::Basic(BasicAuth::new(
                config.auth_excluded_paths.clone(),
                Arc::new(users),
            )))
        }
    }
}
