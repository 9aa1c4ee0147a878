//! # Form Service エラー定義
//!
//! フォーム送信で発生するエラーと、HTTP レスポンスへの変換を定義する。
//!
//! | エラー | ステータス | ボディ |
//! |-------|-----------|-------|
//! | `Validation` | 400 | `{"errors": [{"field", "message"}, ...]}` |
//! | `MalformedBody` | 400 | `{"errors": [{"field": "body", "message": "body is invalid"}]}` |
//! | `PayloadTooLarge` | 413 | `{"errors": [{"field": "body", "message": "body is too large"}]}` |
//! | `SendFailed` | 500 | `{"message": <種別ごとの固定文言>}` |
//!
//! 送信失敗の詳細はログにのみ出力し、レスポンスには含めない。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use formrelay_domain::{
    form::{FormKind, ValidationError},
    notification::NotificationError,
};
use formrelay_shared::MessageResponse;
use serde::Serialize;
use thiserror::Error;

/// 検証エラーレスポンス
#[derive(Debug, Serialize)]
pub struct ValidationErrorResponse {
    pub errors: Vec<ValidationError>,
}

/// フォーム送信で発生するエラー
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// 入力値の検証エラー
    #[error("入力値が不正です（{}件）", .0.len())]
    Validation(Vec<ValidationError>),

    /// リクエストボディが JSON オブジェクトではない
    #[error("リクエストボディが不正です")]
    MalformedBody,

    /// リクエストボディがサイズ上限を超えている
    #[error("リクエストボディが大きすぎます")]
    PayloadTooLarge,

    /// 通知メールの送信に失敗
    #[error("{kind} の通知送信に失敗: {source}")]
    SendFailed {
        kind:   FormKind,
        #[source]
        source: NotificationError,
    },
}

impl IntoResponse for SubmissionError {
    fn into_response(self) -> Response {
        match self {
            SubmissionError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorResponse { errors }),
            )
                .into_response(),
            SubmissionError::MalformedBody => {
                body_error(StatusCode::BAD_REQUEST, "body is invalid")
            }
            SubmissionError::PayloadTooLarge => {
                body_error(StatusCode::PAYLOAD_TOO_LARGE, "body is too large")
            }
            SubmissionError::SendFailed { kind, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MessageResponse::new(kind.failure_message())),
            )
                .into_response(),
        }
    }
}

fn body_error(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ValidationErrorResponse {
            errors: vec![ValidationError {
                field:   "body".to_string(),
                message: message.to_string(),
            }],
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    use super::*;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_検証エラーは400でエラー一覧を返す() {
        let error = SubmissionError::Validation(vec![ValidationError {
            field:   "email".to_string(),
            message: "email is required".to_string(),
        }]);

        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"errors": [{"field": "email", "message": "email is required"}]})
        );
    }

    #[tokio::test]
    async fn test_不正なボディは400でbodyフィールドのエラーを返す() {
        let response = SubmissionError::MalformedBody.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"errors": [{"field": "body", "message": "body is invalid"}]})
        );
    }

    #[tokio::test]
    async fn test_サイズ超過のボディは413を返す() {
        let response = SubmissionError::PayloadTooLarge.into_response();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(
            body_json(response).await,
            json!({"errors": [{"field": "body", "message": "body is too large"}]})
        );
    }

    #[tokio::test]
    async fn test_送信失敗は500で固定文言のみを返す() {
        let error = SubmissionError::SendFailed {
            kind:   FormKind::Internship,
            source: NotificationError::SendFailed("535 authentication failed".to_string()),
        };

        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(
            body,
            json!({"message": "Unable to submit your application. Please try again later."})
        );
        assert!(!body.to_string().contains("535"));
    }
}
