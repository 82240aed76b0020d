use std::path::PathBuf;
use std::time::Duration;

/// 預設的外部程式名稱，由 PATH 解析
pub const DEFAULT_BIN: &str = "pdftocairo";

/// 覆寫外部程式路徑的環境變數
pub const BIN_ENV: &str = "PDFTOCAIRO_PATH";

// 轉換器執行環境設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    pub bin: PathBuf,
    /// 暫存目錄的上層目錄
    pub temp_root: PathBuf,
    pub timeout: Option<Duration>,
}

// 配置來源的 Port
pub trait ConfigPort {
    fn get_config(&self) -> ConverterConfig;
}
