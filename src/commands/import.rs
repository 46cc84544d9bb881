//! candsync import コマンド
//!
//! 静的 JSON リソースから candidatures を取り込み、ストアの状態を更新する。

use crate::cli::StoreArgs;
use crate::config::{HttpConfig, SyncConfig};
use crate::fs::RealFs;
use crate::importer::{ImportOutcome, Importer};
use crate::notify::ConsoleNotifier;
use crate::resource::DefaultFetcher;
use crate::store::FileStore;
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Parser)]
pub struct Args {
    /// Resource to import: URL, or path (resolved against --base-url when set)
    #[arg(value_name = "RESOURCE")]
    pub resource: Option<String>,

    #[command(flatten)]
    pub store: StoreArgs,

    /// Base URL for a relative resource (e.g. http://localhost:8766/)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds (no timeout by default)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Wait for Enter after the result message
    #[arg(long)]
    pub wait: bool,
}

impl Args {
    /// 環境変数と引数から設定を組み立てる
    pub fn sync_config(&self) -> SyncConfig {
        let mut config = self.store.apply(SyncConfig::from_env());
        if let Some(resource) = &self.resource {
            config = config.with_resource(resource.clone());
        }
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url.clone());
        }
        config
    }

    pub fn http_config(&self) -> HttpConfig {
        HttpConfig {
            timeout: self.timeout.map(Duration::from_secs),
            ..HttpConfig::default()
        }
    }
}

pub async fn run(args: Args) -> Result<(), String> {
    let config = args.sync_config();
    let fs = Arc::new(RealFs);
    let store = FileStore::new(fs.clone(), &config.store_path);
    let fetcher = DefaultFetcher::new(&args.http_config(), fs);
    let notifier = ConsoleNotifier::new(args.wait);

    tracing::debug!(store = %store.path().display(), key = %config.state_key, "using store");

    let outcome = Importer::new(&fetcher, &store, &notifier)
        .with_resource(config.resource, config.base_url)
        .with_state_key(config.state_key)
        .import_candidatures()
        .await;

    // 失敗はすでに通知済みなので終了コードだけ変える
    match outcome {
        ImportOutcome::Imported { .. } => Ok(()),
        ImportOutcome::Failed(failure) => Err(format!("import failed ({})", failure.kind())),
    }
}

#[cfg(test)]
#[path = "import_test.rs"]
mod tests;
