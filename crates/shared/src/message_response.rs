//! # メッセージレスポンス
//!
//! フォーム送信 API の成功・失敗レスポンス形式 `{ "message": "..." }` を提供する。

use serde::{Deserialize, Serialize};

/// 人間が読める 1 文だけを返すレスポンス型
///
/// 送信成功（200）と送信失敗（500）の両方で使用する。
/// 500 の場合でも内部エラーの詳細は含めず、固定文言のみを入れる。
///
/// ## 使用例
///
/// ```
/// use formrelay_shared::MessageResponse;
///
/// let response = MessageResponse::new("Message sent successfully!");
/// assert_eq!(response.message, "Message sent successfully!");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    /// 新しい `MessageResponse` を作成する
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
