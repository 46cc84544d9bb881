//! 送信トラッカーのレコード
//!
//! candidatures の各要素は不透明な JSON だが、送信ツールが書き出す形
//! （`id`, `date_envoi`, `entreprise`, `email`, `ville`, `statut`,
//! `date_relance`, `reponse`）であれば列として表示できる。

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// 送信成功を表す statut
pub const STATUS_SENT: &str = "envoyé";
/// 送信失敗を表す statut
pub const STATUS_ERROR: &str = "erreur";

/// トラッカー1件分
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerRecord {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub date_envoi: Option<String>,
    #[serde(default)]
    pub entreprise: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub ville: Option<String>,
    #[serde(default)]
    pub statut: Option<String>,
    #[serde(default)]
    pub date_relance: Option<String>,
    #[serde(default)]
    pub reponse: Option<String>,
}

impl TrackerRecord {
    /// JSON 値をレコードとして解釈する
    ///
    /// オブジェクトでない、型が合わない、既知のフィールドが1つも無い場合は None。
    pub fn from_value(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        let record: Self = serde_json::from_value(value.clone()).ok()?;
        if record == Self::default() {
            return None;
        }
        Some(record)
    }

    /// 返信を受け取っているか
    pub fn has_reply(&self) -> bool {
        self.reponse.as_deref().is_some_and(|r| !r.trim().is_empty())
    }

    fn status_is(&self, status: &str) -> bool {
        self.statut.as_deref() == Some(status)
    }
}

/// 全要素がトラッカーレコードなら一覧を返す
pub fn parse_records(candidatures: &[Value]) -> Option<Vec<TrackerRecord>> {
    candidatures.iter().map(TrackerRecord::from_value).collect()
}

/// トラッカーの集計
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackerStats {
    pub total: usize,
    pub sent: usize,
    pub replies: usize,
    pub errors: usize,
    /// statut ごとの件数（statut 無しは除く）
    pub by_status: BTreeMap<String, usize>,
}

impl TrackerStats {
    pub fn from_records(records: &[TrackerRecord]) -> Self {
        let mut stats = Self {
            total: records.len(),
            ..Self::default()
        };

        for record in records {
            if record.status_is(STATUS_SENT) {
                stats.sent += 1;
            }
            if record.status_is(STATUS_ERROR) {
                stats.errors += 1;
            }
            if record.has_reply() {
                stats.replies += 1;
            }
            if let Some(status) = record.statut.as_deref().filter(|s| !s.is_empty()) {
                *stats.by_status.entry(status.to_string()).or_insert(0) += 1;
            }
        }

        stats
    }

    /// 送信済みに対する返信率（%）。送信が無ければ None
    pub fn reply_rate(&self) -> Option<f64> {
        if self.sent == 0 {
            return None;
        }
        Some(self.replies as f64 / self.sent as f64 * 100.0)
    }
}

#[cfg(test)]
#[path = "tracker_test.rs"]
mod tests;
