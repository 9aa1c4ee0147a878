//! Noop 通知送信実装
//!
//! メールを実際に送信せず、ログ出力のみ行う。
//! ローカル確認や通知無効化時に使用する。

use async_trait::async_trait;
use formrelay_domain::notification::{NotificationError, NotificationPayload};

use super::NotificationSender;

/// Noop 通知送信（ログ出力のみ）
#[derive(Debug, Clone)]
pub struct NoopNotificationSender;

#[async_trait]
impl NotificationSender for NoopNotificationSender {
    async fn send_notification(
        &self,
        payload: &NotificationPayload,
    ) -> Result<(), NotificationError> {
        tracing::info!(
            to = %payload.to_address,
            subject = %payload.subject,
            "Noop: メール送信をスキップ"
        );
        Ok(())
    }
}
