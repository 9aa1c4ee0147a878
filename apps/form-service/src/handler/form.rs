//! # フォーム送信ハンドラ
//!
//! フォーム送信エンドポイントを提供する。
//!
//! ## エンドポイント
//!
//! - `POST /api/contact` - お問い合わせ
//! - `POST /api/internship` - インターン応募
//! - `POST /api/project` - プロジェクト相談
//!
//! リクエストボディは JSON オブジェクト。ボディが JSON として解釈できない場合や
//! オブジェクト以外（配列など）の場合は、検証エラーと同じ形式の 400 を返す。
//! ボディサイズの上限（axum 既定の 2 MB）を超えた場合は同じ形式の 413 を返す。

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use formrelay_domain::form::{FormKind, SubmissionPayload};
use formrelay_shared::MessageResponse;
use serde_json::Value;

use crate::{error::SubmissionError, usecase::SubmissionUseCase};

/// フォーム送信ハンドラの共有状態
pub struct FormState {
    pub usecase: Arc<dyn SubmissionUseCase>,
}

// --- ハンドラ ---

/// POST /api/contact
pub async fn submit_contact(
    State(state): State<Arc<FormState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<MessageResponse>, SubmissionError> {
    submit(&state, FormKind::Contact, body).await
}

/// POST /api/internship
pub async fn submit_internship(
    State(state): State<Arc<FormState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<MessageResponse>, SubmissionError> {
    submit(&state, FormKind::Internship, body).await
}

/// POST /api/project
pub async fn submit_project(
    State(state): State<Arc<FormState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<MessageResponse>, SubmissionError> {
    submit(&state, FormKind::ProjectInquiry, body).await
}

async fn submit(
    state: &FormState,
    kind: FormKind,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<MessageResponse>, SubmissionError> {
    let payload = into_payload(kind, body)?;
    let accepted = state.usecase.handle(kind, payload).await?;
    Ok(Json(MessageResponse::new(accepted.message)))
}

/// リクエストボディを送信ペイロードに変換する
fn into_payload(
    kind: FormKind,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<SubmissionPayload, SubmissionError> {
    match body {
        Ok(Json(Value::Object(object))) => Ok(SubmissionPayload::from_json_object(object)),
        Ok(Json(other)) => {
            tracing::debug!(
                form.kind = %kind,
                body.json_type = json_type(&other),
                "ボディが JSON オブジェクトではない"
            );
            Err(SubmissionError::MalformedBody)
        }
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            tracing::debug!(form.kind = %kind, "ボディがサイズ上限を超えている");
            Err(SubmissionError::PayloadTooLarge)
        }
        Err(rejection) => {
            tracing::debug!(
                form.kind = %kind,
                "JSON ボディの解釈に失敗: {}",
                rejection.body_text()
            );
            Err(SubmissionError::MalformedBody)
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
