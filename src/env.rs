use std::path::PathBuf;

/// ストアファイルのパス
pub const STORE_ENV: &str = "CANDSYNC_STORE";
/// 相対リソースの基準 URL
pub const BASE_URL_ENV: &str = "CANDSYNC_BASE_URL";
/// 状態キー
pub const KEY_ENV: &str = "CANDSYNC_KEY";
/// ログフィルタ
pub const LOG_ENV: &str = "CANDSYNC_LOG";

/// 環境変数ユーティリティ
pub struct EnvVar;

impl EnvVar {
    /// 環境変数を取得（空文字列はNoneとして扱う）
    pub fn get(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.trim().is_empty())
    }

    /// パスとして取得
    pub fn get_path(key: &str) -> Option<PathBuf> {
        Self::get(key).map(PathBuf::from)
    }

    /// ホームディレクトリ
    pub fn home_dir() -> Option<PathBuf> {
        Self::get_path("HOME").or_else(|| Self::get_path("USERPROFILE"))
    }
}

#[cfg(test)]
#[path = "env_test.rs"]
mod tests;
