//! # インフラ層エラー定義
//!
//! 外部サービスとの接続準備で発生するエラーを表現する。
//!
//! 送信時のエラーはドメイン層の
//! [`NotificationError`](formrelay_domain::notification::NotificationError) で表し、
//! こちらは起動時（トランスポート構築時）のエラーのみを扱う。

use thiserror::Error;

/// インフラ層で発生するエラー
#[derive(Debug, Error)]
pub enum InfraError {
    /// SMTP トランスポートの構築に失敗
    ///
    /// TLS 設定の初期化失敗など。
    #[error("SMTP トランスポートの構築に失敗: {0}")]
    SmtpTransport(#[from] lettre::transport::smtp::Error),
}
