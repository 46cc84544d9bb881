use thiserror::Error;

/// candsync 統一エラー型
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP error: {url} (status: {status})")]
    HttpStatus { url: String, status: u16 },

    #[error("Invalid resource location: {0}")]
    InvalidLocation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, SyncError>;

/// インポート失敗の分類
///
/// 利用者には一つの定型メッセージしか見せないが、ログには原因を残す。
#[derive(Debug, Error)]
pub enum ImportFailure {
    /// リソースの取得に失敗（未発見、非2xx、通信エラー）
    #[error("resource unavailable: {location}: {source}")]
    ResourceUnavailable {
        location: String,
        #[source]
        source: SyncError,
    },

    /// レスポンス本文が JSON として不正
    #[error("invalid response body: {reason}")]
    InvalidResponseBody { reason: String },

    /// 保存済みの状態が JSON オブジェクトとして読めない
    #[error("invalid stored state under '{key}': {reason}")]
    InvalidStoredState { key: String, reason: String },

    /// ストアへの読み書き自体の失敗
    #[error("store access failed: {0}")]
    Store(#[source] SyncError),
}

impl ImportFailure {
    /// ログ・テスト用の短い種別名
    pub fn kind(&self) -> &'static str {
        match self {
            ImportFailure::ResourceUnavailable { .. } => "resource_unavailable",
            ImportFailure::InvalidResponseBody { .. } => "invalid_response_body",
            ImportFailure::InvalidStoredState { .. } => "invalid_stored_state",
            ImportFailure::Store(_) => "store",
        }
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
