use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{ConvertError, Result};

/// 代表「從標準輸入讀取 PDF」的參數
pub const STDIN_ARG: &str = "-";

/// 轉換輸入：檔案路徑或記憶體中的 PDF 內容
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Path(PathBuf),
    Buffer(Vec<u8>),
}

impl Input {
    /// 傳給 pdftocairo 的輸入參數
    pub fn argument(&self) -> OsString {
        match self {
            Input::Path(path) => path.as_os_str().to_owned(),
            Input::Buffer(_) => OsString::from(STDIN_ARG),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Input::Path(path) => path.display().to_string(),
            Input::Buffer(data) => format!("<stdin: {} bytes>", data.len()),
        }
    }
}

impl From<PathBuf> for Input {
    fn from(path: PathBuf) -> Self {
        Input::Path(path)
    }
}

impl From<&Path> for Input {
    fn from(path: &Path) -> Self {
        Input::Path(path.to_path_buf())
    }
}

impl From<&str> for Input {
    fn from(path: &str) -> Self {
        Input::Path(PathBuf::from(path))
    }
}

impl From<String> for Input {
    fn from(path: String) -> Self {
        Input::Path(PathBuf::from(path))
    }
}

impl From<Vec<u8>> for Input {
    fn from(data: Vec<u8>) -> Self {
        Input::Buffer(data)
    }
}

impl From<&[u8]> for Input {
    fn from(data: &[u8]) -> Self {
        Input::Buffer(data.to_vec())
    }
}

/// 單次外部程式呼叫
#[derive(Debug, Clone)]
pub struct Invocation {
    pub bin: PathBuf,
    pub args: Vec<OsString>,
    /// 有值時寫入子行程的標準輸入後關閉
    pub stdin: Option<Vec<u8>>,
    pub timeout: Option<Duration>,
}

/// 子行程結束狀態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutcome {
    /// 結束碼；被訊號終止時為 None
    pub code: Option<i32>,
    pub stderr: String,
}

impl ProcessOutcome {
    pub fn new(code: Option<i32>, stderr: impl Into<String>) -> Self {
        ProcessOutcome {
            code,
            stderr: stderr.into(),
        }
    }

    pub fn from_output(code: Option<i32>, stderr: &[u8]) -> Self {
        ProcessOutcome::new(code, String::from_utf8_lossy(stderr))
    }

    /// 依 pdftocairo 結束碼表判定成功或失敗
    pub fn into_result(self) -> Result<ProcessOutcome> {
        match ConvertError::from_exit(self.code, self.stderr.clone()) {
            Some(err) => Err(err),
            None => Ok(self),
        }
    }
}
