//! HTTP Basic credentials: header parsing, base64 decoding, and
//! credential-to-user resolution.
//!
//! Every stage collapses failure into `None` (wrong scheme, broken base64,
//! non-UTF-8 bytes, missing colon, store errors). Nothing here logs or
//! surfaces an error; the gate alone decides what a missing value means for
//! the response.

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::HeaderMap;
use base64::{Engine, engine::general_purpose::STANDARD};

use crate::repos::error::RepoError;
use crate::repos::user_repo::UserRow;
use crate::services::auth::policy::authorization_header;

/// Lookup interface for the external user store.
///
/// `UserRepo` implements this against Postgres; tests substitute an
/// in-memory store. Password verification stays on the returned rows.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn search_by_email(&self, email: &str) -> Result<Vec<UserRow>, RepoError>;
}

pub struct BasicAuth {
    excluded_paths: Vec<String>,
    store: Arc<dyn UserStore>,
}

impl BasicAuth {
    pub fn new(excluded_paths: Vec<String>, store: Arc<dyn UserStore>) -> Self {
        Self {
            excluded_paths,
            store,
        }
    }

    pub fn excluded_paths(&self) -> &[String] {
        &self.excluded_paths
    }

    /// `Basic <payload>` → the undecoded payload.
    ///
    /// The scheme token is matched case-insensitively; the payload is the
    /// second whitespace-delimited token, returned verbatim. A bare scheme
    /// with no payload reads as absent.
    pub fn extract_base64_payload(header: &str) -> Option<&str> {
        let mut tokens = header.split_whitespace();
        let scheme = tokens.next()?;
        if !scheme.eq_ignore_ascii_case("basic") {
            return None;
        }
        tokens.next()
    }

    /// Standard base64 → UTF-8 text. Any decode failure reads as absent.
    pub fn decode_base64(payload: &str) -> Option<String> {
        let bytes = STANDARD.decode(payload).ok()?;
        String::from_utf8(bytes).ok()
    }

    /// `user:pass` → (user, pass), splitting on the FIRST colon only so the
    /// password may itself contain colons. Substrings are kept verbatim,
    /// no trimming.
    pub fn split_credentials(decoded: &str) -> Option<(String, String)> {
        decoded
            .split_once(':')
            .map(|(user, pass)| (user.to_string(), pass.to_string()))
    }

    /// First stored identity for `email` whose verifier accepts `password`,
    /// in store-return order.
    ///
    /// Store failures are swallowed here and indistinguishable from
    /// "no match" for the caller.
    pub async fn resolve_user(&self, email: &str, password: &str) -> Option<UserRow> {
        if email.is_empty() || password.is_empty() {
            return None;
        }

        let users = self.store.search_by_email(email).await.ok()?;
        users.into_iter().find(|u| u.is_valid_password(password))
    }

    /// The full pipeline: header → payload → decoded text → credentials →
    /// store lookup. Scoped to one request; the returned row is dropped with
    /// it.
    pub async fn current_user(&self, headers: &HeaderMap) -> Option<UserRow> {
        let header = authorization_header(headers)?;
        let payload = Self::extract_base64_payload(header)?;
        let decoded = Self::decode_base64(payload)?;
        let (email, password) = Self::split_credentials(&decoded)?;
        self.resolve_user(&email, &password).await
    }
}
