use std::io;
use std::time::Duration;

use clap::Parser;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use crate::config::config::{validate_input_path, Cli};
use crate::config::ports::{ConfigPort, ConverterConfig};
use crate::facade::conversion_facade::{version_with, PdfToCairo};
use crate::models::conversion::{Input, STDIN_ARG};
use crate::models::options::{Crop, Options, Paper, PageFilter, PageRange, PsLevel, Resolution, Scale};
use crate::service::config_service::{ConfigService, EnvConfigAdapter};
use crate::service::process::TokioRunner;
use crate::utils::utils::{format_file_size, setup_logging};

pub async fn process_args() -> io::Result<String> {
    let cli = Cli::parse();
    setup_logging(&cli.log_level)?;
    process_cli_mode(cli).await
}

pub async fn process_cli_mode(cli: Cli) -> io::Result<String> {
    let config = ConfigService::new(Box::new(CliConfigAdapter::new(cli.clone()))).get_config();

    if cli.tool_version {
        let banner = version_with(&TokioRunner, &config).await?;
        return Ok(banner);
    }

    let input_arg = cli.input.as_deref().unwrap_or(STDIN_ARG);
    let input = read_input(input_arg).await?;
    let options = options_from_cli(&cli);
    log::info!(
        "開始轉換，輸入：{}，格式：{:?}，程式：{}",
        input.describe(),
        options.format,
        config.bin.display()
    );

    let converter = PdfToCairo::with_config(input, options, config);
    match &cli.output {
        Some(output) => {
            converter.output_to(output).await?;
            Ok(format!("輸出檔案位於：{}*", output.display()))
        }
        None => {
            let pages = converter.output().await?;
            let total: usize = pages.iter().map(Vec::len).sum();
            let mut stdout = tokio::io::stdout();
            for page in &pages {
                stdout.write_all(page).await?;
            }
            stdout.flush().await?;
            Ok(format!(
                "已寫出 {} 個檔案至標準輸出，總大小：{}",
                pages.len(),
                format_file_size(total)
            ))
        }
    }
}

async fn read_input(input: &str) -> io::Result<Input> {
    if input == STDIN_ARG {
        let mut data = Vec::new();
        tokio::io::stdin().read_to_end(&mut data).await?;
        log::info!("從標準輸入讀取 {}", format_file_size(data.len()));
        return Ok(Input::Buffer(data));
    }
    let path = validate_input_path(input)?;
    Ok(Input::from(path))
}

pub fn options_from_cli(cli: &Cli) -> Options {
    let mut options = Options::new(cli.format);

    if cli.first.is_some() || cli.last.is_some() {
        options.range = Some(PageRange {
            first: cli.first,
            last: cli.last,
        });
    }
    options.filter = if cli.odd {
        Some(PageFilter::Odd)
    } else if cli.even {
        Some(PageFilter::Even)
    } else {
        None
    };
    options.single_file = cli.singlefile;

    options.resolution = match (cli.resolution, cli.resolution_x, cli.resolution_y) {
        (Some(dpi), _, _) => Some(Resolution::Uniform(dpi)),
        (None, None, None) => None,
        (None, x, y) => Some(Resolution::Axes { x, y }),
    };
    options.scale = match (cli.scale_to, cli.scale_to_x, cli.scale_to_y) {
        (Some(size), _, _) => Some(Scale::Uniform(size)),
        (None, None, None) => None,
        (None, x, y) => Some(Scale::Axes { x, y }),
    };
    options.paper = match (cli.paper, cli.paper_width, cli.paper_height) {
        (Some(size), _, _) => Some(Paper::Named(size)),
        (None, None, None) => None,
        (None, width, height) => Some(Paper::Size { width, height }),
    };

    let crop = Crop {
        x: cli.crop_x,
        y: cli.crop_y,
        width: cli.crop_width,
        height: cli.crop_height,
        size: cli.crop_size,
    };
    if crop != Crop::default() {
        options.crop = Some(crop);
    }
    options.crop_box = cli.cropbox;

    options.mono = cli.mono;
    options.gray = cli.gray;
    options.transparent = cli.transparent;
    options.antialias = cli.antialias;
    options.icc = cli.icc.clone();
    options.jpeg_options = cli.jpeg_options.clone();
    options.level = if cli.level2 {
        Some(PsLevel::Level2)
    } else if cli.level3 {
        Some(PsLevel::Level3)
    } else {
        None
    };
    options.original_page_sizes = cli.orig_page_sizes;
    options.no_crop = cli.no_crop;
    options.expand = cli.expand;
    options.no_shrink = cli.no_shrink;
    options.no_center = cli.no_center;
    options.duplex = cli.duplex;
    options.owner_password = cli.owner_password.clone();
    options.user_password = cli.user_password.clone();
    options
}

// CLI 配置適配器：--bin / --timeout 覆寫環境變數與預設值
pub struct CliConfigAdapter {
    cli: Cli,
}

impl CliConfigAdapter {
    pub fn new(cli: Cli) -> Self {
        CliConfigAdapter { cli }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> ConverterConfig {
        let mut config = EnvConfigAdapter.get_config();
        if let Some(bin) = &self.cli.bin {
            config.bin = bin.clone();
        }
        if let Some(secs) = self.cli.timeout {
            config.timeout = Some(Duration::from_secs(secs));
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::options::{Format, PaperSize};
    use crate::service::args::build_args;
    use std::path::PathBuf;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("pdf_to_image").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_to_png_without_extra_flags() {
        let cli = parse(&["sample.pdf"]);
        let options = options_from_cli(&cli);
        assert_eq!(options, Options::new(Format::Png));
        assert_eq!(build_args(&options), vec!["-png", "-q"]);
    }

    #[test]
    fn maps_flags_to_options() {
        let cli = parse(&[
            "sample.pdf",
            "--format",
            "pdf",
            "-f",
            "1",
            "-l",
            "1",
            "--even",
            "--resolution-x",
            "120",
            "--scale-to-y",
            "-1",
            "--paper",
            "A3",
            "--crop-size",
            "50",
            "--gray",
            "--level3",
            "--owner-password",
            "secret",
        ]);
        let options = options_from_cli(&cli);
        assert_eq!(options.format, Format::Pdf);
        assert_eq!(options.range, Some(PageRange::new(1, 1)));
        assert_eq!(options.filter, Some(PageFilter::Even));
        assert_eq!(
            options.resolution,
            Some(Resolution::Axes { x: Some(120.0), y: None })
        );
        assert_eq!(options.scale, Some(Scale::Axes { x: None, y: Some(-1) }));
        assert_eq!(options.paper, Some(Paper::Named(PaperSize::A3)));
        assert_eq!(options.crop.and_then(|c| c.size), Some(50));
        assert!(options.gray);
        assert_eq!(options.level, Some(PsLevel::Level3));
        assert_eq!(options.owner_password.as_deref(), Some("secret"));
    }

    #[test]
    fn uniform_flags_win() {
        let cli = parse(&["sample.pdf", "-r", "150", "--scale-to", "800"]);
        let options = options_from_cli(&cli);
        assert_eq!(options.resolution, Some(Resolution::Uniform(150.0)));
        assert_eq!(options.scale, Some(Scale::Uniform(800)));
    }

    #[test]
    fn odd_and_even_conflict() {
        let result = Cli::try_parse_from(["pdf_to_image", "sample.pdf", "--odd", "--even"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_overrides_bin_and_timeout() {
        let cli = parse(&["sample.pdf", "--bin", "/opt/pdftocairo", "--timeout", "9"]);
        let config = CliConfigAdapter::new(cli).get_config();
        assert_eq!(config.bin, PathBuf::from("/opt/pdftocairo"));
        assert_eq!(config.timeout, Some(Duration::from_secs(9)));
    }

    #[test]
    fn tool_version_needs_no_input() {
        let cli = parse(&["--tool-version"]);
        assert!(cli.tool_version);
        assert!(cli.input.is_none());
    }

    #[test]
    fn missing_input_file_is_rejected() {
        let err = validate_input_path("/definitely/not/here.pdf").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(validate_input_path(STDIN_ARG).is_ok());
    }
}
