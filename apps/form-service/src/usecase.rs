//! # ユースケース層
//!
//! フォーム送信の受付から通知送信までを実装する。
//!
//! ## 設計方針
//!
//! - **トレイトベースの設計**: ハンドラテストでスタブに差し替えられるようトレイトを定義
//! - **依存性注入**: 通知送信は `Arc<dyn NotificationSender>` として外部から注入
//! - **薄いハンドラ**: ハンドラは薄く保ち、ロジックはユースケースに集約

pub mod submission;

use async_trait::async_trait;
use formrelay_domain::form::{FormKind, SubmissionPayload};
pub use submission::{SubmissionAccepted, SubmissionUseCaseImpl};

use crate::error::SubmissionError;

/// フォーム送信ユースケーストレイト
#[async_trait]
pub trait SubmissionUseCase: Send + Sync {
    /// フォーム送信を処理する
    ///
    /// ## 戻り値
    ///
    /// - `Ok(SubmissionAccepted)`: 検証と通知送信に成功
    /// - `Err(SubmissionError)`: 検証エラーまたは送信失敗
    async fn handle(
        &self,
        kind: FormKind,
        payload: SubmissionPayload,
    ) -> Result<SubmissionAccepted, SubmissionError>;
}

/// SubmissionUseCaseImpl に SubmissionUseCase トレイトを実装
#[async_trait]
impl SubmissionUseCase for SubmissionUseCaseImpl {
    async fn handle(
        &self,
        kind: FormKind,
        payload: SubmissionPayload,
    ) -> Result<SubmissionAccepted, SubmissionError> {
        self.handle(kind, payload).await
    }
}
