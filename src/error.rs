//! 轉換錯誤型別

use std::io;
use std::time::Duration;

use thiserror::Error;

/// 轉換結果型別
pub type Result<T> = std::result::Result<T, ConvertError>;

/// pdftocairo 結束碼分類
///
/// 對照表來自 pdftocairo 手冊：1 開啟 PDF 失敗、2 開啟輸出檔失敗、
/// 3 權限錯誤、4 ICC 設定檔錯誤、99 其他錯誤。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitKind {
    InputOpen,
    OutputOpen,
    Permissions,
    ColorProfile,
    Other,
}

impl ExitKind {
    /// 將結束碼轉為分類；0 代表成功，回傳 None
    pub fn from_code(code: Option<i32>) -> Option<Self> {
        match code {
            Some(0) => None,
            Some(1) => Some(ExitKind::InputOpen),
            Some(2) => Some(ExitKind::OutputOpen),
            Some(3) => Some(ExitKind::Permissions),
            Some(4) => Some(ExitKind::ColorProfile),
            _ => Some(ExitKind::Other),
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ExitKind::InputOpen => "Error opening a PDF file.",
            ExitKind::OutputOpen => "Error opening an output file.",
            ExitKind::Permissions => "Error related to PDF permissions.",
            ExitKind::ColorProfile => "Error related to ICC profile.",
            ExitKind::Other => "Other error.",
        }
    }
}

/// 轉換過程中可能發生的錯誤
#[derive(Error, Debug)]
pub enum ConvertError {
    /// 外部程式以非零結束碼結束
    #[error("{}", describe_exit(.kind, .code, .stderr))]
    Exit {
        kind: ExitKind,
        code: Option<i32>,
        stderr: String,
    },

    /// 無法啟動外部程式（找不到或無法執行）
    #[error("failed to start `{bin}`: {source}")]
    Spawn {
        bin: String,
        #[source]
        source: io::Error,
    },

    /// 超過設定的執行時間
    #[error("pdftocairo did not finish within {0:?}")]
    Timeout(Duration),

    /// IO 錯誤
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl ConvertError {
    /// 由結束碼與 stderr 建立錯誤；結束碼為 0 時回傳 None
    pub fn from_exit(code: Option<i32>, stderr: impl Into<String>) -> Option<Self> {
        ExitKind::from_code(code).map(|kind| ConvertError::Exit {
            kind,
            code,
            stderr: stderr.into(),
        })
    }

    pub fn exit_kind(&self) -> Option<ExitKind> {
        match self {
            ConvertError::Exit { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

fn describe_exit(kind: &ExitKind, code: &Option<i32>, stderr: &str) -> String {
    let mut message = kind.message().to_string();
    let listed = matches!(code, Some(1..=4) | Some(99));
    match code {
        Some(c) if !listed => message.push_str(&format!(" (exit code {})", c)),
        None => message.push_str(" (terminated by signal)"),
        _ => {}
    }
    let stderr = stderr.trim();
    if !stderr.is_empty() {
        message.push_str(": ");
        message.push_str(stderr);
    }
    message
}

impl From<ConvertError> for io::Error {
    fn from(e: ConvertError) -> Self {
        match e {
            ConvertError::Io(inner) => inner,
            ConvertError::Spawn { source, bin } => {
                io::Error::new(source.kind(), format!("failed to start `{}`: {}", bin, source))
            }
            ConvertError::Timeout(limit) => io::Error::new(
                io::ErrorKind::TimedOut,
                format!("pdftocairo did not finish within {:?}", limit),
            ),
            other => io::Error::new(io::ErrorKind::Other, other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_table() {
        assert_eq!(ExitKind::from_code(Some(0)), None);
        assert_eq!(ExitKind::from_code(Some(1)), Some(ExitKind::InputOpen));
        assert_eq!(ExitKind::from_code(Some(2)), Some(ExitKind::OutputOpen));
        assert_eq!(ExitKind::from_code(Some(3)), Some(ExitKind::Permissions));
        assert_eq!(ExitKind::from_code(Some(4)), Some(ExitKind::ColorProfile));
        assert_eq!(ExitKind::from_code(Some(99)), Some(ExitKind::Other));
        assert_eq!(ExitKind::from_code(Some(7)), Some(ExitKind::Other));
        assert_eq!(ExitKind::from_code(None), Some(ExitKind::Other));
    }

    #[test]
    fn listed_code_uses_table_text() {
        let err = ConvertError::from_exit(Some(1), "").unwrap();
        assert_eq!(err.to_string(), "Error opening a PDF file.");
        assert_eq!(err.exit_kind(), Some(ExitKind::InputOpen));
    }

    #[test]
    fn unknown_code_reports_code_and_stderr() {
        let err = ConvertError::from_exit(Some(42), "Syntax Error: bad xref\n").unwrap();
        assert_eq!(
            err.to_string(),
            "Other error. (exit code 42): Syntax Error: bad xref"
        );
    }

    #[test]
    fn success_is_not_an_error() {
        assert!(ConvertError::from_exit(Some(0), "noise").is_none());
    }

    #[test]
    fn converts_into_io_error() {
        let err: io::Error = ConvertError::Timeout(Duration::from_secs(3)).into();
        assert_eq!(err.kind(), io::ErrorKind::TimedOut);
    }
}
