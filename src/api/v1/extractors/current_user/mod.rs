mod core;
mod types;

pub use self::core::CurrentUserExtractor;
pub use self::types::CurrentUser;
