//! # Form Service サーバー
//!
//! Web サイトのフォーム（お問い合わせ・インターン応募・プロジェクト相談）を受け付け、
//! 検証して通知メールとして担当者に中継する。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `FORM_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `PORT` | No | ポート番号（デフォルト: `5000`） |
//! | `RECIPIENT_EMAIL` | **Yes** | 通知の宛先 |
//! | `NOTIFICATION_FROM_ADDRESS` | **Yes** | 通知の送信元 |
//! | `ALLOWED_ORIGINS` | No | CORS 許可オリジン（カンマ区切り） |
//! | `NOTIFICATION_BACKEND` | No | `smtp`（デフォルト）または `noop` |
//! | `SMTP_HOST` / `SMTP_PORT` / `SMTP_TLS` | No | SMTP 接続設定 |
//! | `SMTP_USERNAME` / `SMTP_PASSWORD` | No | SMTP 認証情報（両方設定するか両方未設定） |
//! | `CONTACT_LAST_NAME_REQUIRED` | No | お問い合わせの `lastName` を必須にする |
//! | `INTERNSHIP_DURATION_REQUIRED` | No | インターン応募の `duration` を必須にする |
//! | `LOG_FORMAT` | No | `json` または `pretty` |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（メールを送らずログのみ）
//! NOTIFICATION_BACKEND=noop RECIPIENT_EMAIL=team@example.com \
//!   NOTIFICATION_FROM_ADDRESS=noreply@example.com cargo run -p formrelay-service
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context as _;
use formrelay_infra::notification::{
    NoopNotificationSender,
    NotificationBackend,
    NotificationSender,
    SmtpNotificationSender,
};
use formrelay_service::{
    app_builder::build_app,
    config::{NotificationConfig, RelayConfig},
};
use formrelay_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

/// Form Service サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    init_tracing(TracingConfig::from_env("form-service"));
    let _tracing_guard = tracing::info_span!("app", service = "form-service").entered();

    // 設定読み込み
    let config = RelayConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        "Form Service サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    let sender = notification_sender(&config.notification)?;
    let app = build_app(&config, sender)?;

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("アドレスのパースに失敗しました")?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Form Service サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// 設定に従って通知送信の実装を選択する
fn notification_sender(config: &NotificationConfig) -> anyhow::Result<Arc<dyn NotificationSender>> {
    let sender: Arc<dyn NotificationSender> = match config.backend {
        NotificationBackend::Smtp => {
            tracing::info!(
                host = %config.smtp.host,
                port = config.smtp.port,
                tls = %config.smtp.tls,
                "SMTP で通知を送信します"
            );
            Arc::new(
                SmtpNotificationSender::new(&config.smtp)
                    .context("SMTP 送信の初期化に失敗しました")?,
            )
        }
        NotificationBackend::Noop => {
            tracing::warn!("NOTIFICATION_BACKEND=noop: 通知メールは送信されません");
            Arc::new(NoopNotificationSender)
        }
    };
    Ok(sender)
}
