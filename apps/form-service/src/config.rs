//! # Form Service 設定
//!
//! 環境変数から Form Service の設定を読み込む。
//!
//! 読み込みは起動時の 1 回のみ。必須項目の欠落や不正な値は起動エラーとする。
//! テストから実環境変数に触れずに検証できるよう、値の取得は
//! [`RelayConfig::from_lookup`] に関数として注入する。

use std::{env, str::FromStr};

use formrelay_domain::form::SchemaOptions;
use formrelay_infra::notification::{
    NotificationBackend,
    SmtpCredentials,
    SmtpSettings,
    SmtpTlsMode,
};
use thiserror::Error;

/// 許可オリジンの既定値
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:5000,https://cyberbind.in";

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// 必須の環境変数が未設定
    #[error("{0} が設定されていません")]
    Missing(&'static str),

    /// 環境変数の値が不正
    #[error("{var} の値が不正です: {value}")]
    Invalid { var: &'static str, value: String },

    /// SMTP_USERNAME と SMTP_PASSWORD の片方のみ設定されている
    #[error("SMTP_USERNAME と SMTP_PASSWORD は両方設定するか、両方未設定にしてください")]
    IncompleteCredentials,
}

/// Form Service の設定
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// バインドアドレス
    pub host:            String,
    /// ポート番号
    pub port:            u16,
    /// 通知の宛先
    pub recipient_email: String,
    /// CORS で許可するオリジン
    pub allowed_origins: Vec<String>,
    /// スキーマの切り替え
    pub schema_options:  SchemaOptions,
    /// 通知設定
    pub notification:    NotificationConfig,
}

/// 通知機能の設定
///
/// `NOTIFICATION_BACKEND` 環境変数で送信バックエンドを切り替える:
/// - `smtp`: SMTP サーバー経由で送信
/// - `noop`: 送信しない（ログ出力のみ）
#[derive(Debug, Clone)]
pub struct NotificationConfig {
    pub backend:      NotificationBackend,
    /// 送信元メールアドレス
    pub from_address: String,
    /// SMTP 接続設定（backend=smtp の場合に使用）
    pub smtp:         SmtpSettings,
}

impl RelayConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の取得関数から設定を読み込む
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let vars = Vars { lookup };

        Ok(Self {
            host:            vars.or("FORM_HOST", "0.0.0.0"),
            port:            vars.parse_or("PORT", 5000)?,
            recipient_email: vars.required("RECIPIENT_EMAIL")?,
            allowed_origins: parse_origins(&vars.or("ALLOWED_ORIGINS", DEFAULT_ALLOWED_ORIGINS)),
            schema_options:  SchemaOptions {
                contact_last_name_required:   vars
                    .parse_or("CONTACT_LAST_NAME_REQUIRED", false)?,
                internship_duration_required: vars
                    .parse_or("INTERNSHIP_DURATION_REQUIRED", false)?,
                email_format_on_all_forms:    vars.parse_or("EMAIL_FORMAT_ALL_FORMS", false)?,
            },
            notification:    NotificationConfig::from_vars(&vars)?,
        })
    }
}

impl NotificationConfig {
    fn from_vars<F>(vars: &Vars<F>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let credentials = match (vars.get("SMTP_USERNAME"), vars.get("SMTP_PASSWORD")) {
            (Some(username), Some(password)) => Some(SmtpCredentials { username, password }),
            (None, None) => None,
            _ => return Err(ConfigError::IncompleteCredentials),
        };

        Ok(Self {
            backend:      vars.parse_or("NOTIFICATION_BACKEND", NotificationBackend::Smtp)?,
            from_address: vars.required("NOTIFICATION_FROM_ADDRESS")?,
            smtp:         SmtpSettings {
                host: vars.or("SMTP_HOST", "smtp.gmail.com"),
                port: vars.parse_or("SMTP_PORT", 587)?,
                tls: vars.parse_or("SMTP_TLS", SmtpTlsMode::StartTls)?,
                credentials,
            },
        })
    }
}

/// 環境変数の取得ヘルパー
///
/// 空文字列は未設定と同じ扱いにする。
struct Vars<F> {
    lookup: F,
}

impl<F> Vars<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, name: &str) -> Option<String> {
        (self.lookup)(name).filter(|v| !v.is_empty())
    }

    fn required(&self, name: &'static str) -> Result<String, ConfigError> {
        self.get(name).ok_or(ConfigError::Missing(name))
    }

    fn or(&self, name: &str, default: &str) -> String {
        self.get(name).unwrap_or_else(|| default.to_string())
    }

    fn parse_or<T: FromStr>(&self, name: &'static str, default: T) -> Result<T, ConfigError> {
        match self.get(name) {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::Invalid { var: name, value }),
            None => Ok(default),
        }
    }
}

/// カンマ区切りのオリジン一覧を分解する
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}
