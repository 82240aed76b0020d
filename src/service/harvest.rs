use std::path::{Path, PathBuf};

use log::{debug, info};
use regex::Regex;

use crate::error::Result;
use crate::utils::utils::format_file_size;

/// 讀回 pdftocairo 在 `dir` 中以 `base` 為開頭產生的檔案
///
/// 依檔名中的頁碼（`<base>-<N>.<ext>`）排序，頁碼相同或無頁碼時依完整路徑的
/// 字典序排序。找不到任何檔案時回傳空集合而非錯誤。
pub async fn harvest(dir: &Path, base: &str) -> Result<Vec<Vec<u8>>> {
    let files = find_files(dir, base).await?;
    if files.is_empty() {
        debug!("{} 中沒有以 {} 開頭的輸出檔", dir.display(), base);
    }

    let mut buffers = Vec::with_capacity(files.len());
    let mut total_size = 0;
    for file in &files {
        let data = tokio::fs::read(file).await?;
        total_size += data.len();
        buffers.push(data);
    }
    info!(
        "讀回 {} 個輸出檔，總大小：{}",
        buffers.len(),
        format_file_size(total_size)
    );
    Ok(buffers)
}

/// 找出並排序符合 `base` 前綴的檔案
pub async fn find_files(dir: &Path, base: &str) -> Result<Vec<PathBuf>> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let name = entry.file_name();
        let matches = name
            .to_str()
            .map_or(false, |name| name.starts_with(base));
        if matches && entry.file_type().await?.is_file() {
            files.push(entry.path());
        }
    }
    sort_by_page(&mut files, base);
    Ok(files)
}

fn sort_by_page(files: &mut [PathBuf], base: &str) {
    let pattern = page_pattern(base);
    files.sort_by_cached_key(|path| {
        let page = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| pattern.as_ref()?.captures(name))
            .and_then(|caps| caps.get(1))
            .and_then(|digits| digits.as_str().parse::<u64>().ok())
            .unwrap_or(0);
        (page, path.clone())
    });
}

fn page_pattern(base: &str) -> Option<Regex> {
    let pattern = format!(r"^{}-(\d+)(?:\.[^.]*)?$", regex::escape(base));
    Regex::new(&pattern)
        .map_err(|e| log::warn!("無效的頁碼模式: {}，改用字典序", e))
        .ok()
}
