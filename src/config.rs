//! HTTP設定と同期設定

use crate::env::{EnvVar, BASE_URL_ENV, KEY_ENV, STORE_ENV};
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;

/// 既定のリソースパス
pub const DEFAULT_RESOURCE: &str = "candidatures.json";
/// 既定の状態キー
pub const DEFAULT_STATE_KEY: &str = "alternance_bot";
/// 既定のストアファイル名
const STORE_DIR: &str = ".candsync";
const STORE_FILE: &str = "storage.json";

/// HTTP設定
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// タイムアウト（None なら無制限）
    pub timeout: Option<Duration>,
    /// User-Agent
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: format!("candsync/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpConfig {
    /// reqwest::Client を構築
    pub fn build_client(&self) -> Client {
        let mut builder = Client::builder().user_agent(&self.user_agent);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder.build().unwrap_or_else(|_| Client::new())
    }
}

/// 同期設定
///
/// 優先順位: CLI 引数 > 環境変数 > 既定値
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// 取得するリソース（URL またはパス）
    pub resource: String,
    /// 相対リソースを解決する基準 URL
    pub base_url: Option<String>,
    /// 状態を保存するキー
    pub state_key: String,
    /// ストアファイルのパス
    pub store_path: PathBuf,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            resource: DEFAULT_RESOURCE.to_string(),
            base_url: None,
            state_key: DEFAULT_STATE_KEY.to_string(),
            store_path: default_store_path(),
        }
    }
}

impl SyncConfig {
    /// 環境変数を反映した設定
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(path) = EnvVar::get_path(STORE_ENV) {
            config.store_path = path;
        }
        if let Some(url) = EnvVar::get(BASE_URL_ENV) {
            config.base_url = Some(url);
        }
        if let Some(key) = EnvVar::get(KEY_ENV) {
            config.state_key = key;
        }
        config
    }

    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = resource.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_state_key(mut self, key: impl Into<String>) -> Self {
        self.state_key = key.into();
        self
    }

    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = path.into();
        self
    }
}

/// `$HOME/.candsync/storage.json`、HOME が無ければカレント配下
fn default_store_path() -> PathBuf {
    EnvVar::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(STORE_DIR)
        .join(STORE_FILE)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
