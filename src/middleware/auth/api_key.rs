//! `Authorization: ApiKey <key>` 抽出 → ApiKey を extensions に入れる
//!
//! - 抽出ロジックそのものは `services::auth::api_key` (pure function)
//! - ここは HTTP との接着のみ: 失敗時のログと 401 への変換
//! - key が「正しいか」の検証はしない (ストアを持たない)

use axum::{
    Router,
    body::Body,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::error::AppError;
use crate::services::auth::api_key;
use crate::state::AppState;

/// Wrap every route of `router` with API key extraction.
///
/// ```ignore
/// let protected = middleware::auth::api_key::apply(protected);
/// app = app.merge(protected);
/// ```
pub fn apply(router: Router<AppState>) -> Router<AppState> {
    // key の照合をしないので state は不要 (from_fn で足りる)
    router.layer(middleware::from_fn(api_key_middleware))
}

async fn api_key_middleware(
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let key = match api_key::extract_api_key(req.headers()) {
        Ok(key) => key,
        Err(err) => {
            tracing::warn!(
                error = %err,
                method = %req.method(),
                path = %req.uri().path(),
                "api key extraction failed"
            );
            return Err(err.into());
        }
    };

    tracing::debug!(key_fingerprint = %key.fingerprint(), "api key presented");

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(key);

    Ok(next.run(req).await)
}
