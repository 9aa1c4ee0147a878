//! # FormRelay 共有ユーティリティ
//!
//! このクレートは、FormRelay の各クレートから使用される共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - ドメイン（domain）・インフラ（infra）・サービス（apps）のいずれからも依存される
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum には依存しない（レスポンス型は `Serialize` のみ提供する）
//!
//! ## モジュール構成
//!
//! - [`message_response`] - `{ "message": ... }` 形式のレスポンス
//! - [`health`] - ヘルスチェックレスポンス
//! - [`event_log`] - ビジネスイベントログのマクロと定数
//! - `observability` - トレーシング初期化（`observability` feature）
//! - `canonical_log` - Canonical Log Line ミドルウェア（`observability` feature）

#[cfg(feature = "observability")]
pub mod canonical_log;
pub mod event_log;
pub mod health;
pub mod message_response;
pub mod observability;

pub use health::HealthResponse;
pub use message_response::MessageResponse;
