/*!
 * API key extractor
 *
 * Responsibility:
 * - middleware が extensions に入れた ApiKey を handler に渡す
 * - ヘッダのパースはしない (services::auth::api_key の責務)
 */

mod core;

pub use self::core::ApiKeyExtractor;
