/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 * - API key の検証ストアは持たない (extract のみ)。増えたらここに足す
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
#[derive(Clone, Debug, Default)]
pub struct AppState;

impl AppState {
    pub fn new() -> Self {
        Self
    }
}
