/*
 * Responsibility
 * - 環境変数や設定の読み込み (PORT, DATABASE_URL, AUTH_TYPE, 除外パスなど)
 * - 設定値のバリデーション (不足なら起動失敗)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

/// Paths the gate never intercepts unless overridden via
/// `AUTH_EXCLUDED_PATHS`. Trailing slashes matter for exact patterns;
/// matching itself is slash-insensitive on the request side.
pub const DEFAULT_EXCLUDED_PATHS: [&str; 3] = [
    "/api/v1/status/",
    "/api/v1/unauthorized/",
    "/api/v1/forbidden/",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        match std::env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// No request gate at all.
    Disabled,
    /// HTTP Basic authentication on every non-excluded path.
    Basic,
}

impl AuthMode {
    pub fn from_env() -> Self {
        // 認識できる値は "basic_auth" のみ。それ以外 (未設定含む) はゲート無効。
        match std::env::var("AUTH_TYPE").as_deref() {
            Ok("basic_auth") => Self::Basic,
            _ => Self::Disabled,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub database_url: String,

    pub app_env: AppEnv,
    pub cors_allowed_origins: Vec<String>,

    pub auth_mode: AuthMode,
    pub auth_excluded_paths: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;

        let app_env = AppEnv::from_env();

        let cors_allowed_origins = std::env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        let auth_mode = AuthMode::from_env();

        // 未設定ならデフォルトの診断系 3 パス。設定が空文字なら空リストになる
        // (その場合は全パスがゲート対象。factory 側で warn を出す)。
        let auth_excluded_paths = match std::env::var("AUTH_EXCLUDED_PATHS") {
            Ok(raw) => raw
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            Err(_) => DEFAULT_EXCLUDED_PATHS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        };

        Ok(Self {
            addr,
            database_url,
            app_env,
            cors_allowed_origins,
            auth_mode,
            auth_excluded_paths,
        })
    }
}
