//! ログ初期化

use crate::env::{EnvVar, LOG_ENV};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// 既定のフィルタ
const DEFAULT_FILTER: &str = "info";

/// stderr 向けの tracing subscriber を設定する
///
/// `CANDSYNC_LOG` があればフィルタとして使い、`verbose` なら debug まで出す。
pub fn init(verbose: bool) {
    let directive = if verbose {
        "debug".to_string()
    } else {
        EnvVar::get(LOG_ENV).unwrap_or_else(|| DEFAULT_FILTER.to_string())
    };

    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // 二重初期化はテストで起こり得るので無視する
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();
}
