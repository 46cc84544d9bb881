use clap::{Parser, Subcommand};

use crate::commands::{import, reset, show};

#[derive(Debug, Parser)]
#[command(name = "candsync")]
#[command(about = "Import candidatures from a static JSON file into local state", long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Import candidatures from the JSON resource
    Import(import::Args),

    /// Show stored candidatures
    Show(show::Args),

    /// Remove the stored state
    Reset(reset::Args),
}

/// ストア位置の共通引数
#[derive(Debug, Clone, clap::Args)]
pub struct StoreArgs {
    /// Store file (default: $CANDSYNC_STORE or ~/.candsync/storage.json)
    #[arg(long, value_name = "PATH")]
    pub store: Option<std::path::PathBuf>,

    /// State key inside the store (default: $CANDSYNC_KEY or alternance_bot)
    #[arg(long, value_name = "KEY")]
    pub key: Option<String>,
}

impl StoreArgs {
    /// 環境変数の設定に引数を重ねる
    pub fn apply(&self, mut config: crate::config::SyncConfig) -> crate::config::SyncConfig {
        if let Some(path) = &self.store {
            config = config.with_store_path(path.clone());
        }
        if let Some(key) = &self.key {
            config = config.with_state_key(key.clone());
        }
        config
    }
}
