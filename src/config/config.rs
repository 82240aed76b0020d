use clap::Parser;
use std::io;
use std::path::{Path, PathBuf};

use crate::models::conversion::STDIN_ARG;
use crate::models::options::{Antialias, Format, PaperSize};

#[derive(Parser, Clone, Debug)]
#[command(
    name = "pdf_to_image",
    about = "透過 pdftocairo 將 PDF 轉換為 PNG/JPEG/TIFF/PS/EPS/PDF/SVG",
    long_about = "呼叫 pdftocairo 將 PDF 轉換為圖片或向量格式。\n輸入為 `-` 時從標準輸入讀取 PDF；未指定 --output 時，所有輸出檔依頁序寫到標準輸出。\n可用 --bin 或環境變數 PDFTOCAIRO_PATH 指定 pdftocairo 路徑。",
    arg_required_else_help = true
)]
pub struct Cli {
    /// 輸入 PDF 路徑，`-` 代表標準輸入
    #[arg(required_unless_present = "tool_version")]
    pub input: Option<String>,
    /// 輸出檔前綴；pdftocairo 會加上頁碼與副檔名
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    #[arg(long, value_enum, default_value = "png")]
    pub format: Format,

    #[arg(short = 'f', long)]
    pub first: Option<u32>,
    #[arg(short = 'l', long)]
    pub last: Option<u32>,
    #[arg(long, conflicts_with = "even")]
    pub odd: bool,
    #[arg(long)]
    pub even: bool,
    #[arg(long)]
    pub singlefile: bool,

    #[arg(short = 'r', long, conflicts_with_all = ["resolution_x", "resolution_y"])]
    pub resolution: Option<f64>,
    #[arg(long)]
    pub resolution_x: Option<f64>,
    #[arg(long)]
    pub resolution_y: Option<f64>,

    #[arg(long, allow_negative_numbers = true, conflicts_with_all = ["scale_to_x", "scale_to_y"])]
    pub scale_to: Option<i32>,
    #[arg(long, allow_negative_numbers = true)]
    pub scale_to_x: Option<i32>,
    #[arg(long, allow_negative_numbers = true)]
    pub scale_to_y: Option<i32>,

    #[arg(long, value_enum, conflicts_with_all = ["paper_width", "paper_height"])]
    pub paper: Option<PaperSize>,
    #[arg(long)]
    pub paper_width: Option<u32>,
    #[arg(long)]
    pub paper_height: Option<u32>,

    #[arg(long)]
    pub crop_x: Option<i32>,
    #[arg(long)]
    pub crop_y: Option<i32>,
    #[arg(long)]
    pub crop_width: Option<i32>,
    #[arg(long)]
    pub crop_height: Option<i32>,
    #[arg(long)]
    pub crop_size: Option<i32>,
    #[arg(long)]
    pub cropbox: bool,

    #[arg(long)]
    pub mono: bool,
    #[arg(long)]
    pub gray: bool,
    #[arg(long)]
    pub transparent: bool,
    #[arg(long, value_enum)]
    pub antialias: Option<Antialias>,
    #[arg(long)]
    pub icc: Option<PathBuf>,
    #[arg(long)]
    pub jpeg_options: Option<String>,

    #[arg(long, conflicts_with = "level3")]
    pub level2: bool,
    #[arg(long)]
    pub level3: bool,
    #[arg(long)]
    pub orig_page_sizes: bool,
    #[arg(long)]
    pub no_crop: bool,
    #[arg(long)]
    pub expand: bool,
    #[arg(long)]
    pub no_shrink: bool,
    #[arg(long)]
    pub no_center: bool,
    #[arg(long)]
    pub duplex: bool,

    #[arg(long)]
    pub owner_password: Option<String>,
    #[arg(long)]
    pub user_password: Option<String>,

    /// pdftocairo 路徑，優先於 PDFTOCAIRO_PATH
    #[arg(long)]
    pub bin: Option<PathBuf>,
    /// 逾時秒數
    #[arg(long)]
    pub timeout: Option<u64>,
    #[arg(long, default_value = "info", value_parser = ["debug", "info", "warn", "error"])]
    pub log_level: String,
    /// 顯示 pdftocairo 版本後結束
    #[arg(long, default_value_t = false)]
    pub tool_version: bool,
}

pub fn validate_input_path(input: &str) -> io::Result<&Path> {
    let path = Path::new(input);
    if input != STDIN_ARG && !path.is_file() {
        log::error!("輸入檔案不存在：{}", input);
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("輸入檔案 '{}' 不存在", input),
        ));
    }
    Ok(path)
}
