/*
 * Responsibility
 * - users テーブル向け SQLx 操作 (UserRepo)
 * - パスワード検証 (sha256 hex) は store 側の責務としてここに置く
 * - DB エラーは RepoError に変換して返す
 */
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::RepoError;
use crate::services::auth::basic::UserStore;

/// Digest stored in `users.password_hash`: lowercase sha256 hex of the
/// plaintext.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl UserRow {
    /// Verifier the resolver calls per candidate row. The stored hex is
    /// compared case-insensitively.
    pub fn is_valid_password(&self, password: &str) -> bool {
        self.password_hash
            .eq_ignore_ascii_case(&hash_password(password))
    }
}

#[derive(Clone, Debug)]
pub struct UserRepo {
    pool: PgPool,
}

impl UserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<UserRow>, RepoError> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, password_hash, first_name, last_name, created_at
            FROM users
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn count(&self) -> Result<i64, RepoError> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM users
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    pub async fn create(
        &self,
        email: &str,
        password_hash: &str,
        first_name: Option<&str>,
        last_name: Option<&str>,
    ) -> Result<UserRow, RepoError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (email, password_hash, first_name, last_name)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, password_hash, first_name, last_name, created_at
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .bind(first_name)
        .bind(last_name)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get(&self, user_id: Uuid) -> Result<Option<UserRow>, RepoError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, password_hash, first_name, last_name, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn update(
        &self,
        user_id: Uuid,
        first_name: Option<&str>,
        last_name: Option<&str>,
    ) -> Result<Option<UserRow>, RepoError> {
        // email/password はこの経路では更新しない
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users
            SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name)
            WHERE id = $1
            RETURNING id, email, password_hash, first_name, last_name, created_at
            "#,
        )
        .bind(user_id)
        .bind(first_name)
        .bind(last_name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn delete(&self, user_id: Uuid) -> Result<bool, RepoError> {
        let result = sqlx::query(
            r#"
            DELETE FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn search_by_email(&self, email: &str) -> Result<Vec<UserRow>, RepoError> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, password_hash, first_name, last_name, created_at
            FROM users
            WHERE email = $1
            ORDER BY created_at
            "#,
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

#[async_trait]
impl UserStore for UserRepo {
    async fn search_by_email(&self, email: &str) -> Result<Vec<UserRow>, RepoError> {
        UserRepo::search_by_email(self, email).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(password_hash: &str) -> UserRow {
        UserRow {
            id: Uuid::new_v4(),
            email: "bob@example.com".to_string(),
            password_hash: password_hash.to_string(),
            first_name: None,
            last_name: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn hash_password_is_lowercase_sha256_hex() {
        let digest = hash_password("H0lberton School 98!");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(digest, digest.to_lowercase());
    }

    #[test]
    fn verifier_accepts_matching_password() {
        let user = row(&hash_password("secret"));
        assert!(user.is_valid_password("secret"));
        assert!(!user.is_valid_password("Secret"));
        assert!(!user.is_valid_password(""));
    }

    #[test]
    fn verifier_ignores_stored_hash_case() {
        let user = row(&hash_password("secret").to_uppercase());
        assert!(user.is_valid_password("secret"));
    }
}
