//! # テスト用モック送信実装
//!
//! ユースケース・ハンドラテストで使用するインメモリの通知送信。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! formrelay-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use formrelay_domain::notification::{NotificationError, NotificationPayload};

use crate::notification::NotificationSender;

// ===== MockNotificationSender =====

/// 送信内容を記録する通知送信
///
/// `failing` で作成した場合は常に `NotificationError::SendFailed` を返し、何も記録しない。
#[derive(Clone, Default)]
pub struct MockNotificationSender {
    sent:    Arc<Mutex<Vec<NotificationPayload>>>,
    failure: Option<String>,
}

impl MockNotificationSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// 常に失敗する送信を作成する
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            sent:    Arc::new(Mutex::new(Vec::new())),
            failure: Some(message.into()),
        }
    }

    /// 送信済みの通知
    pub fn sent_notifications(&self) -> Vec<NotificationPayload> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationSender for MockNotificationSender {
    async fn send_notification(
        &self,
        payload: &NotificationPayload,
    ) -> Result<(), NotificationError> {
        if let Some(message) = &self.failure {
            return Err(NotificationError::SendFailed(message.clone()));
        }
        self.sent.lock().unwrap().push(payload.clone());
        Ok(())
    }
}
