//! リソース取得
//!
//! インポート元の JSON ドキュメントを URL またはローカルファイルから読み込む。

use crate::config::HttpConfig;
use crate::error::{Result, SyncError};
use crate::fs::FileSystem;
use crate::http;
use reqwest::{Client, Url};
use std::fmt;
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::sync::Arc;

/// リソースの所在
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceLocation {
    Url(Url),
    File(PathBuf),
}

impl ResourceLocation {
    /// 入力文字列を解釈する
    ///
    /// - `http://` / `https://` で始まればそのまま URL
    /// - 基準 URL があればそれに対する相対パスとして解決
    /// - それ以外はローカルファイル
    pub fn parse(input: &str, base_url: Option<&str>) -> Result<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(SyncError::InvalidLocation("empty resource".to_string()));
        }

        if is_http(input) {
            let url = Url::parse(input)
                .map_err(|e| SyncError::InvalidLocation(format!("{input}: {e}")))?;
            return Ok(Self::Url(url));
        }

        match base_url {
            Some(base) => {
                let base = Url::parse(&with_trailing_slash(base))
                    .map_err(|e| SyncError::InvalidLocation(format!("{base}: {e}")))?;
                let url = base
                    .join(input)
                    .map_err(|e| SyncError::InvalidLocation(format!("{input}: {e}")))?;
                Ok(Self::Url(url))
            }
            None => Ok(Self::File(PathBuf::from(input))),
        }
    }
}

impl fmt::Display for ResourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceLocation::Url(url) => write!(f, "{url}"),
            ResourceLocation::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn is_http(input: &str) -> bool {
    let lower = input.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// ディレクトリ扱いにするため末尾に `/` を補う
fn with_trailing_slash(base: &str) -> String {
    if base.ends_with('/') {
        base.to_string()
    } else {
        format!("{base}/")
    }
}

/// リソース取得 trait
pub trait ResourceFetcher: Send + Sync {
    /// リソース本文をバイト列で取得
    fn fetch<'a>(
        &'a self,
        location: &'a ResourceLocation,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<u8>>> + Send + 'a>>;
}

/// HTTP とローカルファイルの両方を扱う標準の取得実装
pub struct DefaultFetcher {
    client: Client,
    fs: Arc<dyn FileSystem>,
}

impl DefaultFetcher {
    pub fn new(config: &HttpConfig, fs: Arc<dyn FileSystem>) -> Self {
        Self {
            client: config.build_client(),
            fs,
        }
    }
}

impl ResourceFetcher for DefaultFetcher {
    fn fetch<'a>(
        &'a self,
        location: &'a ResourceLocation,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<u8>>> + Send + 'a>> {
        Box::pin(async move {
            match location {
                ResourceLocation::Url(url) => {
                    http::get_with_spinner(&self.client, url.as_str()).await
                }
                // 文字コードの検証は JSON の解釈に任せる
                ResourceLocation::File(path) => self.fs.read(path),
            }
        })
    }
}

#[cfg(test)]
#[path = "resource_test.rs"]
mod tests;
