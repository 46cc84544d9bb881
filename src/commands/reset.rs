//! candsync reset コマンド

use crate::cli::StoreArgs;
use crate::config::SyncConfig;
use crate::fs::RealFs;
use crate::store::{FileStore, KeyValueStore};
use clap::Parser;
use owo_colors::OwoColorize;
use std::sync::Arc;

#[derive(Debug, Parser)]
pub struct Args {
    #[command(flatten)]
    pub store: StoreArgs,
}

pub async fn run(args: Args) -> Result<(), String> {
    let config = args.store.apply(SyncConfig::from_env());
    let store = FileStore::new(Arc::new(RealFs), &config.store_path);

    store
        .remove(&config.state_key)
        .map_err(|e| e.to_string())?;

    tracing::info!(key = %config.state_key, "state removed");
    println!(
        "{} Removed '{}' from {}",
        "✓".green(),
        config.state_key,
        store.path().display()
    );
    Ok(())
}
