//! # 通知
//!
//! 検証済みの送信内容から、送信するメール（[`NotificationPayload`]）を組み立てる。
//!
//! ## 本文の形式
//!
//! ```text
//! You have received a new contact form submission:
//!
//! First Name: Aiko
//! Email: aiko@example.com
//! Message: Hello
//! ```
//!
//! 種別ごとの導入文、空行、スキーマ順の `ラベル: 値` 行で構成する。
//! 値はエスケープしない。件名と宛先は固定値または設定値のみで、
//! 利用者の入力がメールヘッダーに入ることはない。

use thiserror::Error;

use crate::form::{FormKind, ValidatedSubmission};

/// 通知エラー
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotificationError {
    /// メール送信に失敗
    #[error("メール送信に失敗: {0}")]
    SendFailed(String),
}

/// 送信するメール
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationPayload {
    /// 送信元メールアドレス
    pub from_address: String,
    /// 送信先メールアドレス
    pub to_address:   String,
    /// 件名
    pub subject:      String,
    /// プレーンテキスト本文
    pub body_text:    String,
}

impl FormKind {
    /// 通知メールの件名
    pub fn notification_subject(self) -> &'static str {
        match self {
            Self::Contact => "New Contact Form Submission",
            Self::Internship => "New Internship Application",
            Self::ProjectInquiry => "New Project Inquiry",
        }
    }

    fn notification_intro(self) -> &'static str {
        match self {
            Self::Contact => "You have received a new contact form submission:",
            Self::Internship => "You have received a new internship application:",
            Self::ProjectInquiry => "You have a new project inquiry:",
        }
    }
}

/// 検証済みの送信内容から通知メールを組み立てる
///
/// 同じ入力からは常に同じ出力を返す。
pub fn compose(
    submission: &ValidatedSubmission,
    kind: FormKind,
    sender_address: &str,
    recipient_address: &str,
) -> NotificationPayload {
    let mut body_text = String::from(kind.notification_intro());
    body_text.push('\n');
    for field in submission.fields() {
        body_text.push('\n');
        body_text.push_str(field.label);
        body_text.push_str(": ");
        body_text.push_str(&field.value);
    }

    NotificationPayload {
        from_address: sender_address.to_string(),
        to_address: recipient_address.to_string(),
        subject: kind.notification_subject().to_string(),
        body_text,
    }
}
