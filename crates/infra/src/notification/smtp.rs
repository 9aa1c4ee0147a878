//! SMTP 通知送信実装
//!
//! lettre の `AsyncSmtpTransport` を使用してメールを送信する。
//! TLS の方式と認証情報は設定で切り替える。

use async_trait::async_trait;
use formrelay_domain::notification::{NotificationError, NotificationPayload};
use lettre::{
    AsyncSmtpTransport,
    AsyncTransport,
    Tokio1Executor,
    message::{Message, header::ContentType},
    transport::smtp::authentication::Credentials,
};

use super::NotificationSender;
use crate::InfraError;

/// SMTP 接続の TLS 方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum SmtpTlsMode {
    /// 平文で接続後 STARTTLS で昇格する（587 番ポート）
    #[default]
    StartTls,
    /// 接続時から TLS（465 番ポート）
    Tls,
    /// TLS なし（Mailpit 等のローカル SMTP 向け）
    None,
}

/// SMTP 認証情報
#[derive(Clone, PartialEq, Eq)]
pub struct SmtpCredentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for SmtpCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpCredentials")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}

/// SMTP 接続設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpSettings {
    pub host:        String,
    pub port:        u16,
    pub tls:         SmtpTlsMode,
    pub credentials: Option<SmtpCredentials>,
}

/// SMTP 通知送信
///
/// `lettre::AsyncSmtpTransport<Tokio1Executor>` をラップする。
/// 送信元・宛先は [`NotificationPayload`] に含まれるものを使う。
pub struct SmtpNotificationSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpNotificationSender {
    /// 新しい SMTP 送信インスタンスを作成
    ///
    /// 接続はここでは行わず、最初の送信時に確立される。
    ///
    /// # エラー
    ///
    /// TLS 設定の初期化に失敗した場合は `InfraError::SmtpTransport`
    pub fn new(settings: &SmtpSettings) -> Result<Self, InfraError> {
        let builder = match settings.tls {
            SmtpTlsMode::StartTls => {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)?
            }
            SmtpTlsMode::Tls => AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)?,
            SmtpTlsMode::None => {
                AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(settings.host.as_str())
            }
        };

        let builder = builder.port(settings.port);
        let builder = match &settings.credentials {
            Some(c) => builder.credentials(Credentials::new(c.username.clone(), c.password.clone())),
            None => builder,
        };

        Ok(Self {
            transport: builder.build(),
        })
    }
}

/// 通知ペイロードを lettre のメッセージに変換する
///
/// 本文はプレーンテキストの単一パート。
fn build_message(payload: &NotificationPayload) -> Result<Message, NotificationError> {
    Message::builder()
        .from(
            payload
                .from_address
                .parse()
                .map_err(|e| NotificationError::SendFailed(format!("送信元アドレス不正: {e}")))?,
        )
        .to(payload
            .to_address
            .parse()
            .map_err(|e| NotificationError::SendFailed(format!("宛先アドレス不正: {e}")))?)
        .subject(&payload.subject)
        .header(ContentType::TEXT_PLAIN)
        .body(payload.body_text.clone())
        .map_err(|e| NotificationError::SendFailed(format!("メッセージ構築失敗: {e}")))
}

#[async_trait]
impl NotificationSender for SmtpNotificationSender {
    async fn send_notification(
        &self,
        payload: &NotificationPayload,
    ) -> Result<(), NotificationError> {
        let message = build_message(payload)?;

        self.transport
            .send(message)
            .await
            .map_err(|e| NotificationError::SendFailed(format!("SMTP 送信失敗: {e}")))?;

        Ok(())
    }
}
