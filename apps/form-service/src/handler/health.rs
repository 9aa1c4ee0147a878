//! # ヘルスチェックハンドラ
//!
//! Form Service の稼働状態を確認するためのエンドポイント。
//!
//! レスポンス型は [`formrelay_shared::HealthResponse`] を参照。

use axum::Json;
use formrelay_shared::HealthResponse;

/// Form Service のヘルスチェックエンドポイント
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}
