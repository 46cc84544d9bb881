//! candidatures のインポート
//!
//! 静的 JSON リソースの `candidatures` 配列を取得し、ストアに保存された
//! 状態オブジェクトの同名フィールドだけを置き換える。
//!
//! 手順:
//! 1. リソースを取得し JSON として解釈
//! 2. 状態キーの値を読む（無ければ `{}`、壊れていれば失敗）
//! 3. `candidatures` を上書き（無い・null なら `[]`）
//! 4. 状態を書き戻す（これが最後の手順なので途中失敗では状態は変わらない）
//! 5. 成功・失敗いずれも通知1件とログ1行

use crate::config::{DEFAULT_RESOURCE, DEFAULT_STATE_KEY};
use crate::error::ImportFailure;
use crate::notify::{Notification, Notifier};
use crate::resource::{ResourceFetcher, ResourceLocation};
use crate::store::KeyValueStore;
use serde_json::{Map, Value};

/// 状態オブジェクト内で置き換えるフィールド
pub const CANDIDATURES_FIELD: &str = "candidatures";

/// 失敗時の通知文（原因によらず共通）
pub const FAILURE_NOTICE: &str = "❌ Erreur : Fichier candidatures.json introuvable ou invalide.";

/// 成功時の通知文
pub fn success_notice(count: usize) -> String {
    format!("✅ Synchronisation réussie !\n{count} candidatures importées.")
}

/// インポートの結果
#[derive(Debug)]
pub enum ImportOutcome {
    Imported { count: usize },
    Failed(ImportFailure),
}

impl ImportOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ImportOutcome::Imported { .. })
    }

    /// 取り込んだ件数（失敗時は None）
    pub fn count(&self) -> Option<usize> {
        match self {
            ImportOutcome::Imported { count } => Some(*count),
            ImportOutcome::Failed(_) => None,
        }
    }
}

/// インポーター
pub struct Importer<'a> {
    fetcher: &'a dyn ResourceFetcher,
    store: &'a dyn KeyValueStore,
    notifier: &'a dyn Notifier,
    resource: String,
    base_url: Option<String>,
    state_key: String,
}

impl<'a> Importer<'a> {
    pub fn new(
        fetcher: &'a dyn ResourceFetcher,
        store: &'a dyn KeyValueStore,
        notifier: &'a dyn Notifier,
    ) -> Self {
        Self {
            fetcher,
            store,
            notifier,
            resource: DEFAULT_RESOURCE.to_string(),
            base_url: None,
            state_key: DEFAULT_STATE_KEY.to_string(),
        }
    }

    /// 取得するリソースと、相対パスを解決する基準 URL
    ///
    /// 解決はインポート時に行い、失敗は取得失敗として扱う。
    pub fn with_resource(mut self, resource: impl Into<String>, base_url: Option<String>) -> Self {
        self.resource = resource.into();
        self.base_url = base_url;
        self
    }

    pub fn with_state_key(mut self, key: impl Into<String>) -> Self {
        self.state_key = key.into();
        self
    }

    /// インポートを1回実行する
    ///
    /// エラーは呼び出し側に伝播せず、ログと通知に吸収される。
    pub async fn import_candidatures(&self) -> ImportOutcome {
        match self.try_import().await {
            Ok(count) => {
                tracing::info!(count, "✅ {} candidatures importées !", count);
                self.notifier.notify(&Notification::success(success_notice(count)));
                ImportOutcome::Imported { count }
            }
            Err(failure) => {
                tracing::error!(kind = failure.kind(), "❌ Erreur: {}", failure);
                self.notifier.notify(&Notification::failure(FAILURE_NOTICE));
                ImportOutcome::Failed(failure)
            }
        }
    }

    async fn try_import(&self) -> Result<usize, ImportFailure> {
        let location = ResourceLocation::parse(&self.resource, self.base_url.as_deref())
            .map_err(|source| ImportFailure::ResourceUnavailable {
                location: self.resource.clone(),
                source,
            })?;

        tracing::debug!(location = %location, "fetching resource");
        let body = self.fetcher.fetch(&location).await.map_err(|source| {
            ImportFailure::ResourceUnavailable {
                location: location.to_string(),
                source,
            }
        })?;

        let document = parse_document(&body)?;
        let mut state = self.load_state()?;

        let candidatures = match document.get(CANDIDATURES_FIELD) {
            None | Some(Value::Null) => Value::Array(Vec::new()),
            Some(value) => value.clone(),
        };
        let count = candidatures.as_array().map_or(0, Vec::len);
        state.insert(CANDIDATURES_FIELD.to_string(), candidatures);

        let serialized = Value::Object(state).to_string();
        self.store
            .set(&self.state_key, &serialized)
            .map_err(ImportFailure::Store)?;

        Ok(count)
    }

    /// 現在の状態を読む
    ///
    /// 未設定（空文字列を含む）は空オブジェクト。JSON として壊れている値は
    /// 空オブジェクトにはせず失敗とする。
    fn load_state(&self) -> Result<Map<String, Value>, ImportFailure> {
        let raw = self
            .store
            .get(&self.state_key)
            .map_err(ImportFailure::Store)?;

        let raw = match raw {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Ok(Map::new()),
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(other) => Err(ImportFailure::InvalidStoredState {
                key: self.state_key.clone(),
                reason: format!("expected a JSON object, found {}", json_type(&other)),
            }),
            Err(e) => Err(ImportFailure::InvalidStoredState {
                key: self.state_key.clone(),
                reason: e.to_string(),
            }),
        }
    }
}

/// レスポンス本文を解釈する
///
/// オブジェクト以外（配列など）は `candidatures` を持たないだけとして扱うが、
/// `null` 本文はフィールド参照ができないので不正とする。
fn parse_document(body: &[u8]) -> Result<Value, ImportFailure> {
    let document: Value =
        serde_json::from_slice(body).map_err(|e| ImportFailure::InvalidResponseBody {
            reason: e.to_string(),
        })?;

    if document.is_null() {
        return Err(ImportFailure::InvalidResponseBody {
            reason: "document is null".to_string(),
        });
    }

    Ok(document)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "importer_test.rs"]
mod tests;
