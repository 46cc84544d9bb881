//! テスト用モックファイルシステム

use super::*;
use std::collections::HashMap;
use std::sync::RwLock;

/// テスト用モックファイルシステム
pub struct MockFs {
    files: RwLock<HashMap<String, Vec<u8>>>,
    fail_writes: RwLock<bool>,
}

impl MockFs {
    pub fn new() -> Self {
        Self {
            files: RwLock::new(HashMap::new()),
            fail_writes: RwLock::new(false),
        }
    }

    /// ファイルを追加
    pub fn add_file(&self, path: &str, content: &str) {
        self.files
            .write()
            .unwrap()
            .insert(path.to_string(), content.as_bytes().to_vec());
    }

    /// バイト列のファイルを追加（UTF-8 でない内容用）
    pub fn add_file_bytes(&self, path: &str, content: &[u8]) {
        self.files
            .write()
            .unwrap()
            .insert(path.to_string(), content.to_vec());
    }

    /// 以降の write を失敗させる
    pub fn fail_writes(&self) {
        *self.fail_writes.write().unwrap() = true;
    }

    /// 書き込み済みの内容を取得
    pub fn content(&self, path: &str) -> Option<String> {
        self.files
            .read()
            .unwrap()
            .get(path)
            .map(|c| String::from_utf8_lossy(c).to_string())
    }
}

impl Default for MockFs {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFs {
    fn exists(&self, path: &Path) -> bool {
        self.files
            .read()
            .unwrap()
            .contains_key(path.to_string_lossy().as_ref())
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        self.files
            .read()
            .unwrap()
            .get(path.to_string_lossy().as_ref())
            .cloned()
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::NotFound, "not found").into())
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        let bytes = self.read(path)?;
        String::from_utf8(bytes).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.utf8_error()).into()
        })
    }

    fn write(&self, path: &Path, content: &[u8]) -> Result<()> {
        if *self.fail_writes.read().unwrap() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only mock",
            )
            .into());
        }
        self.files
            .write()
            .unwrap()
            .insert(path.to_string_lossy().to_string(), content.to_vec());
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> Result<()> {
        self.files
            .write()
            .unwrap()
            .remove(path.to_string_lossy().as_ref());
        Ok(())
    }
}
