use std::path::PathBuf;

use log::debug;
use tempfile::{Builder, TempDir};

use crate::error::Result;

/// 名稱中的隨機位元組數（128 位元）
const RAND_BYTES: usize = 16;

/// 追蹤並清理轉換過程中建立的暫存目錄
///
/// 清理為盡力而為，失敗只記錄不回報；物件被丟棄時 `TempDir` 會刪除尚未清理的目錄。
#[derive(Debug)]
pub struct TempDirs {
    root: PathBuf,
    dirs: Vec<TempDir>,
}

impl TempDirs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        TempDirs {
            root: root.into(),
            dirs: Vec::new(),
        }
    }

    /// 建立新的唯一暫存目錄
    pub fn allocate(&mut self) -> Result<PathBuf> {
        let dir = Builder::new()
            .prefix("pdftocairo-")
            .rand_bytes(RAND_BYTES)
            .tempdir_in(&self.root)?;
        debug!("建立暫存目錄：{}", dir.path().display());
        let path = dir.path().to_path_buf();
        self.dirs.push(dir);
        Ok(path)
    }

    #[cfg(test)]
    fn paths(&self) -> Vec<&std::path::Path> {
        self.dirs.iter().map(TempDir::path).collect()
    }

    /// 刪除所有已建立的暫存目錄
    pub fn cleanup(&mut self) {
        for dir in self.dirs.drain(..) {
            let path = dir.path().to_path_buf();
            if let Err(e) = dir.close() {
                debug!("刪除暫存目錄 {} 失敗（忽略）：{}", path.display(), e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocate_and_cleanup() {
        let root = tempfile::tempdir().unwrap();
        let mut temps = TempDirs::new(root.path());

        let first = temps.allocate().unwrap();
        let second = temps.allocate().unwrap();
        assert!(first.is_dir());
        assert!(second.is_dir());
        assert_ne!(first, second);
        assert!(first.starts_with(root.path()));
        assert_eq!(temps.paths(), vec![first.as_path(), second.as_path()]);

        std::fs::write(first.join("result-1.png"), b"png").unwrap();
        temps.cleanup();

        assert!(!first.exists());
        assert!(!second.exists());
        assert!(temps.paths().is_empty());
    }

    #[test]
    fn drop_removes_leftovers() {
        let root = tempfile::tempdir().unwrap();
        let dir = {
            let mut temps = TempDirs::new(root.path());
            let dir = temps.allocate().unwrap();
            std::fs::write(dir.join("result.svg"), b"<svg/>").unwrap();
            dir
        };
        assert!(!dir.exists());
        assert_eq!(std::fs::read_dir(root.path()).unwrap().count(), 0);
    }

    #[test]
    fn cleanup_ignores_missing_dirs() {
        let root = tempfile::tempdir().unwrap();
        let mut temps = TempDirs::new(root.path());
        let dir = temps.allocate().unwrap();
        std::fs::remove_dir(&dir).unwrap();
        temps.cleanup();
        assert!(temps.paths().is_empty());
    }

    #[test]
    fn allocate_fails_when_root_is_missing() {
        let root = tempfile::tempdir().unwrap();
        let mut temps = TempDirs::new(root.path().join("missing"));
        assert!(temps.allocate().is_err());
        assert!(temps.paths().is_empty());
    }
}
