//! # フォーム送信ユースケース
//!
//! 受信 → 検証 → 通知組み立て → 送信 の流れを 1 リクエスト内で同期的に実行する。
//!
//! ```text
//! Received ─┬─ 検証失敗 → Rejected（400）
//!           └─ 検証成功 → Composed ─┬─ 送信成功 → Sent（200）
//!                                   └─ 送信失敗 → SendFailed（500）
//! ```
//!
//! リトライは行わない。ログにはフィールド名と件数のみを出力し、値は出力しない。

use std::sync::Arc;

use formrelay_domain::{
    form::{FormKind, FormSchemas, SubmissionPayload, validate},
    notification::compose,
};
use formrelay_infra::notification::NotificationSender;
use formrelay_shared::{
    event_log::{error, event},
    log_business_event,
};

use crate::error::SubmissionError;

/// 受付完了
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionAccepted {
    /// レスポンスで返す固定文言
    pub message: &'static str,
}

/// フォーム送信ユースケースの実装
pub struct SubmissionUseCaseImpl {
    sender:            Arc<dyn NotificationSender>,
    schemas:           FormSchemas,
    from_address:      String,
    recipient_address: String,
}

impl SubmissionUseCaseImpl {
    /// 新しいユースケースインスタンスを作成
    pub fn new(
        sender: Arc<dyn NotificationSender>,
        schemas: FormSchemas,
        from_address: impl Into<String>,
        recipient_address: impl Into<String>,
    ) -> Self {
        Self {
            sender,
            schemas,
            from_address: from_address.into(),
            recipient_address: recipient_address.into(),
        }
    }

    /// フォーム送信を処理する
    pub async fn handle(
        &self,
        kind: FormKind,
        payload: SubmissionPayload,
    ) -> Result<SubmissionAccepted, SubmissionError> {
        log_business_event!(
            event.category = event::category::SUBMISSION,
            event.action = event::action::SUBMISSION_RECEIVED,
            form.kind = %kind,
            form.fields = ?payload.field_names(),
            "フォーム送信を受信"
        );

        let submission = match validate(&payload, self.schemas.get(kind)) {
            Ok(submission) => submission,
            Err(errors) => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
                log_business_event!(
                    event.category = event::category::SUBMISSION,
                    event.action = event::action::SUBMISSION_REJECTED,
                    event.result = event::result::FAILURE,
                    form.kind = %kind,
                    form.error_count = errors.len(),
                    form.error_fields = ?fields,
                    "フォーム送信を拒否"
                );
                return Err(SubmissionError::Validation(errors));
            }
        };

        let notification = compose(
            &submission,
            kind,
            &self.from_address,
            &self.recipient_address,
        );

        match self.sender.send_notification(&notification).await {
            Ok(()) => {
                log_business_event!(
                    event.category = event::category::NOTIFICATION,
                    event.action = event::action::NOTIFICATION_SENT,
                    event.result = event::result::SUCCESS,
                    form.kind = %kind,
                    notification.recipient = %self.recipient_address,
                    "通知メール送信成功"
                );
                Ok(SubmissionAccepted {
                    message: kind.success_message(),
                })
            }
            Err(e) => {
                tracing::error!(
                    error.category = error::category::EXTERNAL_SERVICE,
                    error.kind = error::kind::NOTIFICATION_SEND,
                    form.kind = %kind,
                    "通知メール送信で内部エラー: {}",
                    e
                );
                log_business_event!(
                    event.category = event::category::NOTIFICATION,
                    event.action = event::action::NOTIFICATION_FAILED,
                    event.result = event::result::FAILURE,
                    form.kind = %kind,
                    notification.recipient = %self.recipient_address,
                    error = %e,
                    "通知メール送信失敗"
                );
                Err(SubmissionError::SendFailed { kind, source: e })
            }
        }
    }
}
