//! candsync show コマンド

use crate::cli::StoreArgs;
use crate::config::SyncConfig;
use crate::fs::RealFs;
use crate::importer::CANDIDATURES_FIELD;
use crate::store::{FileStore, KeyValueStore};
use crate::tracker::{parse_records, TrackerRecord, TrackerStats};
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use owo_colors::OwoColorize;
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, Parser)]
pub struct Args {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Print the stored array as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: Args) -> Result<(), String> {
    let config = args.store.apply(SyncConfig::from_env());
    let store = FileStore::new(Arc::new(RealFs), &config.store_path);

    let raw = store.get(&config.state_key).map_err(|e| e.to_string())?;
    let candidatures = stored_candidatures(raw.as_deref())?;

    if args.json {
        let json = serde_json::to_string_pretty(&Value::Array(candidatures))
            .map_err(|e| e.to_string())?;
        println!("{json}");
        return Ok(());
    }

    if candidatures.is_empty() {
        println!("No candidatures stored.");
        return Ok(());
    }

    println!("{}", render_table(&candidatures));
    if let Some(records) = parse_records(&candidatures) {
        println!("\n{}", render_stats(&TrackerStats::from_records(&records)));
    }
    println!(
        "\n{} candidature(s) in {}",
        candidatures.len().to_string().green(),
        store.path().display().to_string().cyan()
    );
    Ok(())
}

/// 保存値から candidatures 配列を取り出す
///
/// 未保存・フィールド無し・配列以外は空配列（インポート時の件数と同じ扱い）。
pub fn stored_candidatures(raw: Option<&str>) -> Result<Vec<Value>, String> {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Ok(Vec::new()),
    };

    let state: Value =
        serde_json::from_str(raw).map_err(|e| format!("Stored state is not valid JSON: {e}"))?;

    match state.get(CANDIDATURES_FIELD) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => Ok(items.clone()),
        Some(_) => Ok(Vec::new()),
    }
}

/// candidatures を表にする
///
/// 全件がトラッカーレコードなら列ごとに、そうでなければ1行のコンパクト JSON で並べる。
pub fn render_table(candidatures: &[Value]) -> Table {
    match parse_records(candidatures) {
        Some(records) => render_tracker_table(&records),
        None => render_raw_table(candidatures),
    }
}

fn render_tracker_table(records: &[TrackerRecord]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        "#", "Company", "Email", "City", "Status", "Sent", "Follow-up", "Reply",
    ]);

    for (index, record) in records.iter().enumerate() {
        let id = record.id.map_or_else(|| (index + 1).to_string(), |id| id.to_string());
        table.add_row(vec![
            id,
            cell(&record.entreprise),
            cell(&record.email),
            cell(&record.ville),
            cell(&record.statut),
            cell(&record.date_envoi),
            cell(&record.date_relance),
            cell(&record.reponse),
        ]);
    }

    table
}

fn render_raw_table(candidatures: &[Value]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["#", "Record"]);

    for (index, record) in candidatures.iter().enumerate() {
        table.add_row(vec![(index + 1).to_string(), record.to_string()]);
    }

    table
}

fn cell(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// 集計を数行のテキストにする
pub fn render_stats(stats: &TrackerStats) -> String {
    let rate = stats
        .reply_rate()
        .map_or_else(|| "-".to_string(), |rate| format!("{rate:.1}%"));

    let mut lines = vec![
        format!("  Total       : {}", stats.total),
        format!("  Sent        : {}", stats.sent),
        format!("  Replies     : {}", stats.replies),
        format!("  Reply rate  : {rate}"),
        format!("  Errors      : {}", stats.errors),
    ];

    if !stats.by_status.is_empty() {
        lines.push("\n  By status:".to_string());
        for (status, count) in &stats.by_status {
            lines.push(format!("    {status:<25} : {count}"));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
#[path = "show_test.rs"]
mod tests;
