//! # Form Service アプリケーション構築
//!
//! DI（スキーマ・ユースケース・State）の初期化とルーター構築を担当する。
//! `main.rs` は設定読み込み、通知送信の選択、サーバー起動に集中する。

use std::sync::Arc;

use anyhow::Context as _;
use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use formrelay_domain::form::FormSchemas;
use formrelay_infra::notification::NotificationSender;
use formrelay_shared::{
    canonical_log::CanonicalLogLineLayer,
    observability::{MakeRequestUuidV7, make_request_span},
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    config::RelayConfig,
    handler::{FormState, health_check, submit_contact, submit_internship, submit_project},
    usecase::SubmissionUseCaseImpl,
};

/// DI コンテナの構築とルーター定義を行う
///
/// 通知送信は呼び出し側で選択したものを受け取る。
///
/// # エラー
///
/// スキーマ定義の誤り、または許可オリジンがヘッダー値として不正な場合
pub fn build_app(config: &RelayConfig, sender: Arc<dyn NotificationSender>) -> anyhow::Result<Router> {
    let schemas = FormSchemas::new(config.schema_options).context("フォームスキーマの構築に失敗しました")?;

    let form_state = Arc::new(FormState {
        usecase: Arc::new(SubmissionUseCaseImpl::new(
            sender,
            schemas,
            config.notification.from_address.clone(),
            config.recipient_email.clone(),
        )),
    });

    let cors = cors_layer(&config.allowed_origins)?;

    let app = Router::new()
        .route("/health", get(health_check))
        .route("/api/contact", post(submit_contact))
        .route("/api/internship", post(submit_internship))
        .route("/api/project", post(submit_project))
        .with_state(form_state)
        .layer(cors)
        // Request ID レイヤー（レイヤー順序が重要: 下に書いたものが外側）
        // 1. SetRequestIdLayer（最外）: リクエスト受信時に UUID v7 を生成（またはクライアント提供値を使用）
        // 2. TraceLayer: カスタムスパンに request_id を含め、全ログに自動注入
        // 3. CanonicalLogLineLayer: リクエスト完了時に 1 行のサマリーログを出力
        // 4. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(CanonicalLogLineLayer)
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7));

    Ok(app)
}

/// 許可オリジン一覧から CORS レイヤーを構築する
fn cors_layer(origins: &[String]) -> anyhow::Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .with_context(|| format!("ALLOWED_ORIGINS に不正なオリジンがあります: {origin}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true))
}
