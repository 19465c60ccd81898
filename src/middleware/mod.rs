/*
 * Responsibility
 * - middleware の公開インターフェース
 * - auth (API key 抽出), http (request-id / limit / timeout / trace)
 */
pub mod auth;
pub mod http;
