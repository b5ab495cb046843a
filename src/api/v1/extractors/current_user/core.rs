use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::state::AppState;

use super::CurrentUser;

/// Handler で CurrentUser を受け取るための extractor
/// gate が CurrentUser を request.extensions() に insert 済みである前提
/// 見つからない場合 (auth 無効・除外パスで素通しなど) は 404 を返す
pub struct CurrentUserExtractor(pub CurrentUser);

impl FromRequestParts<AppState> for CurrentUserExtractor
where
    AppState: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .map(CurrentUserExtractor)
            .ok_or(AppError::NotFound)
    }
}
