//! # フォーム
//!
//! 受け付けるフォームの種別と、その検証に関するドメインモデルを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 説明 |
//! |---|------------|------|
//! | [`FormKind`] | フォーム種別 | お問い合わせ / インターン応募 / プロジェクト相談 |
//! | [`FormSchema`] | スキーマ | フォームごとの必須項目・制約の宣言 |
//! | [`SubmissionPayload`] | 送信ペイロード | 受信したままの未検証の値 |
//! | [`ValidatedSubmission`] | 検証済み送信 | すべての規則を満たした値 |
//! | [`ValidationError`] | 検証エラー | 1 フィールド分の入力誤り |
//!
//! ## 設計方針
//!
//! - **フォームごとの分岐をデータに寄せる**: 必須項目や制約の追加はスキーマの変更で済み、
//!   検証コードは増えない
//! - **全件報告**: 検証は最初のエラーで止めず、すべての問題を一度に返す

mod payload;
mod schema;
mod validator;

use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

pub use payload::{SubmissionPayload, ValidatedField, ValidatedSubmission};
pub use schema::{FieldConstraint, FieldSpec, FormSchema, FormSchemas, SchemaOptions};
pub use validator::{ValidationError, validate};

/// フォーム種別
///
/// 文字列表現（ルートのパス要素、ログの `form.kind`）は
/// `contact` / `internship` / `project`。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    IntoStaticStr,
    strum::Display,
    strum::EnumString,
    strum::VariantArray,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FormKind {
    /// お問い合わせ
    Contact,
    /// インターン応募
    Internship,
    /// プロジェクト相談
    #[serde(rename = "project")]
    #[strum(serialize = "project")]
    ProjectInquiry,
}

impl FormKind {
    /// 送信成功時に返す固定文言
    pub fn success_message(self) -> &'static str {
        match self {
            Self::Contact => "Message sent successfully!",
            Self::Internship => "Application submitted successfully!",
            Self::ProjectInquiry => "Thank you for your inquiry! We’ll get back to you soon.",
        }
    }

    /// 送信失敗時に返す固定文言
    ///
    /// 失敗理由（SMTP のエラー内容など）は含めない。
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Contact => "Failed to send message. Please try again later.",
            Self::Internship => "Unable to submit your application. Please try again later.",
            Self::ProjectInquiry => "Failed to send your message. Please try again later.",
        }
    }
}
