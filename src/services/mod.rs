/*
 * Responsibility
 * - HTTP に依存しないドメインロジック (auth など)
 * - middleware / extractor はこの層を呼ぶだけにする
 */
pub mod auth;
