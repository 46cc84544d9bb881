//! 共通HTTPヘルパー

use crate::error::{Result, SyncError};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;

/// スピナー付きで GET し、本文を返す
///
/// 2xx 以外は `SyncError::HttpStatus`。
pub async fn get_with_spinner(client: &Client, url: &str) -> Result<Vec<u8>> {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(format!("Fetching {url}"));

    let result = get(client, url).await;
    pb.finish_and_clear();
    result
}

async fn get(client: &Client, url: &str) -> Result<Vec<u8>> {
    let response = client.get(url).send().await?;
    let status = response.status();

    if !status.is_success() {
        return Err(SyncError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let bytes = response.bytes().await?;
    Ok(bytes.to_vec())
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
