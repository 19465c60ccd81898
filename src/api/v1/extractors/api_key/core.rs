use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::services::auth::ApiKey;
use crate::state::AppState;

/// Handler で ApiKey を受け取るための extractor
/// middleware が ApiKey を request.extensions() に insert 済みである前提
/// 見つからない場合は 401（middleware 未設定のルート）
pub struct ApiKeyExtractor(pub ApiKey);

impl FromRequestParts<AppState> for ApiKeyExtractor
where
    AppState: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<ApiKey>()
            .cloned()
            .map(ApiKeyExtractor)
            .ok_or_else(|| AppError::unauthorized("UNAUTHORIZED", "api key required"))
    }
}
