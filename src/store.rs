//! キー・バリューストア
//!
//! ブラウザのローカルストレージと同じ形（文字列キー → 文字列値）の永続領域。
//! インポート処理はこのトレイト越しにのみ状態へアクセスする。

#[cfg(test)]
mod memory;

#[cfg(test)]
pub use memory::MemoryStore;

use crate::error::{Result, SyncError};
use crate::fs::FileSystem;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// 文字列キーと文字列値のストア
pub trait KeyValueStore: Send + Sync {
    /// 値を取得（存在しなければ None）
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// 値を設定（既存値は完全に上書き）
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// 値を削除（存在しなければ何もしない）
    fn remove(&self, key: &str) -> Result<()>;
}

/// JSON ファイル1つをストレージ領域として扱うストア
///
/// ファイルは `{"key": "value", ...}` 形式。値は常に文字列。
pub struct FileStore {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
}

impl FileStore {
    pub fn new(fs: Arc<dyn FileSystem>, path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            path: path.into(),
        }
    }

    /// ストアファイルのパス
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Map<String, Value>> {
        if !self.fs.exists(&self.path) {
            return Ok(Map::new());
        }

        let content = self.fs.read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(SyncError::Store(format!(
                "{} is not a JSON object",
                self.path.display()
            ))),
            Err(e) => Err(SyncError::Store(format!(
                "{} is corrupted: {}",
                self.path.display(),
                e
            ))),
        }
    }

    fn save(&self, map: &Map<String, Value>) -> Result<()> {
        let content = serde_json::to_string_pretty(map)?;
        self.fs.write(&self.path, content.as_bytes())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let map = self.load()?;
        match map.get(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            // 手で編集された非文字列値は JSON テキストとして返す
            Some(other) => Ok(Some(other.to_string())),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut map = self.load()?;
        map.insert(key.to_string(), Value::String(value.to_string()));
        self.save(&map)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut map = self.load()?;
        if map.shift_remove(key).is_none() {
            return Ok(());
        }

        // 最後のキーを消したらファイルごと削除
        if map.is_empty() {
            self.fs.remove_file(&self.path)
        } else {
            self.save(&map)
        }
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
