//! ファイルシステム抽象化
//!
//! ファイルストアとファイルリソース読み込みが使う最小限の操作。
//! テスト時に MockFs を注入してファイル操作をモック化できる。

use crate::error::Result;
use std::path::Path;

/// ファイルシステム操作を抽象化するトレイト
///
/// 本番コードでは RealFs を使用する。
pub trait FileSystem: Send + Sync {
    /// パスが存在するか（シンボリックリンク追従）
    fn exists(&self, path: &Path) -> bool;

    /// ファイル内容をバイト列のまま読み込み
    fn read(&self, path: &Path) -> Result<Vec<u8>>;

    /// ファイル内容を読み込み
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// ファイルに書き込み
    ///
    /// - 親ディレクトリは自動作成
    /// - 既存ファイルは上書き
    /// - 一時ファイル経由でリネームする
    fn write(&self, path: &Path, content: &[u8]) -> Result<()>;

    /// ファイルを削除
    ///
    /// - 存在しない場合は Ok(())
    fn remove_file(&self, path: &Path) -> Result<()>;
}

/// 本番用ファイルシステム実装
pub struct RealFs;

impl FileSystem for RealFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        Ok(std::fs::read(path)?)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn write(&self, path: &Path, content: &[u8]) -> Result<()> {
        // 親ディレクトリを作成
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut tmp = path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = std::path::PathBuf::from(tmp);

        std::fs::write(&tmp, content)?;
        std::fs::rename(&tmp, path)?;
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Ok(());
        }
        if path.is_dir() {
            return Err(crate::error::SyncError::Io(std::io::Error::new(
                std::io::ErrorKind::IsADirectory,
                "Cannot remove directory with remove_file",
            )));
        }
        std::fs::remove_file(path)?;
        Ok(())
    }
}

#[cfg(test)]
pub mod mock;

#[cfg(test)]
#[path = "fs_test.rs"]
mod tests;
