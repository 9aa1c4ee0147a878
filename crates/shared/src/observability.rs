//! # ログ出力の初期化とリクエスト識別
//!
//! Form Service のログは stdout に 1 本で流し、リバースプロキシ配下の本番では
//! `LOG_FORMAT=json` で 1 行 1 イベントの JSON にする。
//!
//! 1 回のフォーム送信は 1 リクエストで完結するため、送信単位の追跡は
//! `X-Request-Id` だけで足りる。ID はリクエストスパンに載せ、
//! 受信・拒否・送信のビジネスイベントと Canonical Log Line を同じ ID で束ねる。
//!
//! フォームの値はどのログにも出さない。リクエストスパンにも
//! クエリ文字列を含めないよう、記録するのはパスのみとする。

/// Request ID を運ぶ HTTP ヘッダー名
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// `RUST_LOG` 未設定時のフィルタ（FormRelay の各クレートのみ debug）
#[cfg(feature = "observability")]
const DEFAULT_ENV_FILTER: &str = "info,formrelay=debug";

/// ログ出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// 1 行 1 イベントの JSON
    Json,
    /// 端末で読む開発用の形式
    #[default]
    Pretty,
}

impl LogFormat {
    /// `LOG_FORMAT` の値を解釈する
    ///
    /// 大文字小文字は区別しない。解釈できない値は開発用の形式に倒し、
    /// トレーシング初期化前なので警告は stderr に直接書く。
    pub fn parse(s: &str) -> Self {
        let value = s.trim();
        if value.eq_ignore_ascii_case("json") {
            Self::Json
        } else if value.eq_ignore_ascii_case("pretty") {
            Self::Pretty
        } else {
            eprintln!("WARNING: LOG_FORMAT={s:?} is not json or pretty; using pretty");
            Self::Pretty
        }
    }

    /// 環境変数 `LOG_FORMAT` から読み取る（未設定なら既定値）
    pub fn from_env() -> Self {
        std::env::var("LOG_FORMAT")
            .map(|val| Self::parse(&val))
            .unwrap_or_default()
    }
}

/// トレーシング初期化設定
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// 起動ログに出すサービス名
    pub service_name: String,
    pub log_format:   LogFormat,
}

impl TracingConfig {
    pub fn new(service_name: impl Into<String>, log_format: LogFormat) -> Self {
        Self {
            service_name: service_name.into(),
            log_format,
        }
    }

    /// 出力形式だけを環境変数から決める
    pub fn from_env(service_name: impl Into<String>) -> Self {
        Self::new(service_name, LogFormat::from_env())
    }
}

/// グローバルサブスクライバーを登録する
///
/// プロセスで 1 回だけ呼ぶ。フィルタは `RUST_LOG` が優先で、
/// 未設定なら [`DEFAULT_ENV_FILTER`]。
#[cfg(feature = "observability")]
pub fn init_tracing(config: TracingConfig) {
    use tracing_subscriber::{Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_ENV_FILTER.into());

    // JSON ではイベントのフィールドを最上位に展開し、現在のスパン（request_id）のみ添える
    let output = match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer().with_target(false).boxed(),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(output)
        .init();

    tracing::debug!(
        service = %config.service_name,
        log.format = ?config.log_format,
        "ログ出力を初期化"
    );
}

/// 送信ごとの Request ID を UUID v7 で採番する
///
/// `SetRequestIdLayer` 用。クライアントが `X-Request-Id` を付けてきた場合は採番しない。
#[cfg(feature = "observability")]
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuidV7;

#[cfg(feature = "observability")]
impl tower_http::request_id::MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(
        &mut self,
        _request: &http::Request<B>,
    ) -> Option<tower_http::request_id::RequestId> {
        http::HeaderValue::from_str(&uuid::Uuid::now_v7().to_string())
            .ok()
            .map(tower_http::request_id::RequestId::new)
    }
}

/// `TraceLayer::make_span_with` 用のリクエストスパン
///
/// ヘッダーがない場合の `request_id` は `-`。
#[cfg(feature = "observability")]
pub fn make_request_span<B>(request: &http::Request<B>) -> tracing::Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "request",
        http.method = %request.method(),
        http.path = %request.uri().path(),
        request_id = %request_id,
    )
}
