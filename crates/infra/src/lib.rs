//! # FormRelay インフラ層
//!
//! 外部システム（SMTP サーバー）との通信を担当するインフラストラクチャ層。
//!
//! ## 設計方針
//!
//! このクレートはドメイン層で組み立てた通知メールを実際に配送する実装を提供する。
//! 配送手段の詳細は [`notification::NotificationSender`] trait の裏側に閉じ込め、
//! サービス層は trait オブジェクト越しにのみ利用する。
//!
//! ## 依存関係
//!
//! ```text
//! apps → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`error`] - インフラ層エラー定義
//! - [`notification`] - 通知送信 trait と SMTP / Noop 実装
//! - `mock` - テスト用の記録付き送信実装（`test-utils` feature）
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use formrelay_infra::notification::{SmtpNotificationSender, SmtpSettings, SmtpTlsMode};
//!
//! fn setup() -> Result<SmtpNotificationSender, formrelay_infra::InfraError> {
//!     let settings = SmtpSettings {
//!         host:        "smtp.gmail.com".to_string(),
//!         port:        587,
//!         tls:         SmtpTlsMode::StartTls,
//!         credentials: None,
//!     };
//!     SmtpNotificationSender::new(&settings)
//! }
//! ```

pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod notification;

pub use error::InfraError;
