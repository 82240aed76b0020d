use std::env;
use std::path::PathBuf;

use crate::config::ports::{ConfigPort, ConverterConfig, BIN_ENV, DEFAULT_BIN};

// 配置服務，負責選擇適當的配置適配器
pub struct ConfigService {
    config_port: Box<dyn ConfigPort>,
}

impl ConfigService {
    pub fn new(config_port: Box<dyn ConfigPort>) -> Self {
        ConfigService { config_port }
    }

    pub fn get_config(&self) -> ConverterConfig {
        self.config_port.get_config()
    }
}

// 預設配置適配器：PATH 上的 pdftocairo、系統暫存目錄、不設逾時
pub struct DefaultConfigAdapter;

impl ConfigPort for DefaultConfigAdapter {
    fn get_config(&self) -> ConverterConfig {
        ConverterConfig {
            bin: PathBuf::from(DEFAULT_BIN),
            temp_root: env::temp_dir(),
            timeout: None,
        }
    }
}

// 環境變數配置適配器，PDFTOCAIRO_PATH 覆寫預設程式路徑
pub struct EnvConfigAdapter;

impl EnvConfigAdapter {
    fn bin_from_env() -> Option<PathBuf> {
        env::var_os(BIN_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    }
}

impl ConfigPort for EnvConfigAdapter {
    fn get_config(&self) -> ConverterConfig {
        let mut config = DefaultConfigAdapter.get_config();
        if let Some(bin) = Self::bin_from_env() {
            log::debug!("使用環境變數 {} 指定的程式：{}", BIN_ENV, bin.display());
            config.bin = bin;
        }
        config
    }
}
