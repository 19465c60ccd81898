/*
 * Responsibility
 * - GET /api/v1/whoami (API key 必須)
 * - 提示された key の fingerprint だけを返す。key そのものは返さない
 */
use axum::Json;
use serde::Serialize;

use crate::api::v1::extractors::ApiKeyExtractor;

#[derive(Debug, Serialize)]
pub struct WhoAmIResponse {
    pub key_fingerprint: String,
}

pub async fn whoami(ApiKeyExtractor(key): ApiKeyExtractor) -> Json<WhoAmIResponse> {
    Json(WhoAmIResponse {
        key_fingerprint: key.fingerprint(),
    })
}
