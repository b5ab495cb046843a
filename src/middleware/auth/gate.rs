//! Request gate: path exclusion → Basic credentials → identity, before any
//! `/api/v1` handler runs.
//!
//! Outcomes per request:
//! - excluded path → pass through unauthenticated
//! - auth required, no Authorization header → 401
//! - header present but no identity resolves → 403
//! - identity resolved → `CurrentUser` in request extensions, handler runs
//!
//! This is the only place that turns an absent value from the auth core
//! into an HTTP status, and the only place that logs a denial.

use axum::{
    Router,
    body::Body,
    extract::{OriginalUri, State},
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::CurrentUser;
use crate::error::AppError;
use crate::services::auth::policy::authorization_header;
use crate::state::AppState;

/// `/api/v1/*` に認証を掛けるための middleware を適用する。
///
/// axum 0.8 の from_fn は State extractor を受け取れないため、
/// `from_fn_with_state` で明示的に state を渡す
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router.layer(middleware::from_fn_with_state(state, gate_middleware))
}

async fn gate_middleware(
    State(state): State<AppState>,
    OriginalUri(original_uri): OriginalUri,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    // nested router 内では req.uri() から prefix が落ちるので OriginalUri を使う
    let path = original_uri.path();

    if !state.auth.requires_auth(path) {
        return Ok(next.run(req).await);
    }

    if authorization_header(req.headers()).is_none() {
        tracing::warn!(path = %path, "missing authorization header");
        return Err(AppError::Unauthorized);
    }

    let Some(user) = state.auth.current_user(req.headers()).await else {
        tracing::warn!(path = %path, "credentials did not resolve to a user");
        return Err(AppError::Forbidden);
    };

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(CurrentUser { user });

    Ok(next.run(req).await)
}
