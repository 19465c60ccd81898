/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - /health は公開、それ以外は API key middleware の内側に置く
 */
use axum::{Router, routing::get};

use crate::api::v1::handlers::{health::health, whoami::whoami};
use crate::middleware;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    let protected = Router::new().route("/whoami", get(whoami));
    let protected = middleware::auth::api_key::apply(protected);

    Router::new()
        .route("/health", get(health))
        .merge(protected)
}
