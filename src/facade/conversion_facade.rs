use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::info;

use crate::config::ports::ConverterConfig;
use crate::error::{ConvertError, Result};
use crate::models::conversion::{Input, Invocation};
use crate::models::options::Options;
use crate::service::args::build_args;
use crate::service::config_service::{ConfigService, EnvConfigAdapter};
use crate::service::harvest::harvest;
use crate::service::process::TokioRunner;
use crate::service::temp::TempDirs;
use crate::service::traits::i_service::ProcessRunner;

/// 暫存目錄中輸出檔的固定前綴，pdftocairo 會再加上頁碼與副檔名
pub const OUTPUT_BASENAME: &str = "result";

/// 建立轉換器
///
/// ```no_run
/// use pdf_to_image::{input, Format, Options};
///
/// # async fn run() -> pdf_to_image::Result<()> {
/// let pages = input("sample.pdf", Options::new(Format::Png)).output().await?;
/// println!("{} pages", pages.len());
/// # Ok(())
/// # }
/// ```
pub fn input(file: impl Into<Input>, options: Options) -> PdfToCairo {
    PdfToCairo::new(file, options)
}

/// 單次 PDF 轉換
///
/// `output` 與 `output_to` 會消耗此物件，每次轉換都需要建立新的轉換器。
pub struct PdfToCairo {
    input: Input,
    options: Options,
    config: ConverterConfig,
    runner: Box<dyn ProcessRunner>,
}

impl PdfToCairo {
    pub fn new(file: impl Into<Input>, options: Options) -> Self {
        let config = ConfigService::new(Box::new(EnvConfigAdapter)).get_config();
        Self::with_config(file, options, config)
    }

    pub fn with_config(file: impl Into<Input>, options: Options, config: ConverterConfig) -> Self {
        PdfToCairo {
            input: file.into(),
            options,
            config,
            runner: Box::new(TokioRunner),
        }
    }

    /// 指定 pdftocairo 路徑，優先於 PDFTOCAIRO_PATH
    pub fn bin(mut self, bin: impl Into<PathBuf>) -> Self {
        self.config.bin = bin.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    pub fn temp_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.config.temp_root = root.into();
        self
    }

    pub fn runner(mut self, runner: Box<dyn ProcessRunner>) -> Self {
        self.runner = runner;
        self
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// 轉換並以記憶體內容回傳所有輸出檔，依頁序排列
    pub async fn output(self) -> Result<Vec<Vec<u8>>> {
        let mut temps = TempDirs::new(&self.config.temp_root);
        let dir = temps.allocate()?;
        let base = dir.join(OUTPUT_BASENAME);

        let result = match self.execute(&base).await {
            Ok(()) => harvest(&dir, OUTPUT_BASENAME).await,
            Err(e) => Err(e),
        };
        temps.cleanup();
        result
    }

    /// 轉換並將輸出檔寫到 `path`（pdftocairo 依格式加上頁碼與副檔名）
    pub async fn output_to(self, path: impl AsRef<Path>) -> Result<()> {
        self.execute(path.as_ref()).await
    }

    async fn execute(self, output_path: &Path) -> Result<()> {
        let PdfToCairo {
            input,
            options,
            config,
            runner,
        } = self;

        let description = input.describe();
        let invocation = build_invocation(input, &options, &config, output_path);
        runner.run(invocation).await?;
        info!(
            "轉換完成：{} -> {}（格式：{:?}）",
            description,
            output_path.display(),
            options.format
        );
        Ok(())
    }
}

/// 組合完整參數：選項參數、輸入參數、輸出路徑
pub fn build_invocation(
    input: Input,
    options: &Options,
    config: &ConverterConfig,
    output_path: &Path,
) -> Invocation {
    let mut args: Vec<OsString> = build_args(options).into_iter().map(OsString::from).collect();
    args.push(input.argument());
    args.push(output_path.as_os_str().to_owned());

    let stdin = match input {
        Input::Buffer(data) => Some(data),
        Input::Path(_) => None,
    };

    Invocation {
        bin: config.bin.clone(),
        args,
        stdin,
        timeout: config.timeout,
    }
}

/// 取得 pdftocairo 版本資訊（輸出於 stderr）
pub async fn version() -> Result<String> {
    let config = ConfigService::new(Box::new(EnvConfigAdapter)).get_config();
    version_with(&TokioRunner, &config).await
}

pub async fn version_with(runner: &dyn ProcessRunner, config: &ConverterConfig) -> Result<String> {
    let invocation = Invocation {
        bin: config.bin.clone(),
        args: vec![OsString::from("-v")],
        stdin: None,
        timeout: config.timeout,
    };
    // 部分 poppler 版本印出版本後以非零結束碼結束
    let banner = match runner.run(invocation).await {
        Ok(outcome) => outcome.stderr,
        Err(ConvertError::Exit { stderr, .. }) if !stderr.trim().is_empty() => stderr,
        Err(e) => return Err(e),
    };
    Ok(banner.trim().to_string())
}
