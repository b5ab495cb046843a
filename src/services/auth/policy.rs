//! Path-exclusion policy and the process-wide auth scheme.
//!
//! Responsibility:
//! - decide whether a request path is gated at all (`require_auth`)
//! - expose the raw Authorization header without validating it
//! - hold the scheme selected once at startup (`AuthPolicy`)
//!
//! Nothing in here mutates shared state after construction; the policy is
//! held as `Arc<AuthPolicy>` and read concurrently by in-flight requests.

use axum::http::{HeaderMap, header};

use crate::repos::user_repo::UserRow;
use crate::services::auth::basic::BasicAuth;

/// Exclusion check for a request path.
///
/// Returns `true` when the path must be authenticated. An empty `path` or an
/// empty `excluded_paths` requires auth: missing configuration gates
/// everything rather than opening everything.
///
/// The path is normalized with a trailing slash before comparing, so
/// `/api/v1/status` and `/api/v1/status/` match the same patterns. A pattern
/// ending in `*` matches by prefix and wins immediately; otherwise the
/// normalized path must be an exact member of the list to be excluded.
pub fn require_auth(path: &str, excluded_paths: &[String]) -> bool {
    if path.is_empty() || excluded_paths.is_empty() {
        return true;
    }

    let normalized = if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{path}/")
    };

    for excluded in excluded_paths {
        if let Some(prefix) = excluded.strip_suffix('*')
            && normalized.starts_with(prefix)
        {
            return false;
        }
    }

    !excluded_paths.iter().any(|p| p == &normalized)
}

/// Raw `Authorization` header value, if the request carries one.
/// No format validation happens here; non-UTF-8 values read as absent.
pub fn authorization_header(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
}

/// Auth scheme selected once at startup (from `AUTH_TYPE`) and shared
/// read-only for the process lifetime.
pub enum AuthPolicy {
    /// No gate: nothing is excluded, nothing is authenticated, every request
    /// passes through unauthenticated.
    NoAuth,
    /// HTTP Basic (RFC 7617) against the user store.
    Basic(BasicAuth),
}

impl AuthPolicy {
    pub fn requires_auth(&self, path: &str) -> bool {
        match self {
            Self::NoAuth => false,
            Self::Basic(basic) => require_auth(path, basic.excluded_paths()),
        }
    }

    /// Resolve the identity for a protected request.
    ///
    /// `None` means the gate should deny; which status that maps to depends
    /// on whether the header was present at all, and that distinction is the
    /// gate's business, not ours.
    pub async fn current_user(&self, headers: &HeaderMap) -> Option<UserRow> {
        match self {
            Self::NoAuth => None,
            Self::Basic(basic) => basic.current_user(headers).await,
        }
    }
}
