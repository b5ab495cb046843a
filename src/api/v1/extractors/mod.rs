/*!
 * Current-user extractor
 *
 * Responsibility:
 * - 認証ゲートが extensions に載せた識別情報（CurrentUser）を handler に渡す
 * - HTTP / axum 依存は core に閉じ込め、型定義は types に分離する
 *
 * Public API:
 * - CurrentUser
 * - CurrentUserExtractor
 */

mod current_user;

pub use current_user::{CurrentUser, CurrentUserExtractor};
