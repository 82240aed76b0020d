use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;

/// 輸出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Png,
    Jpeg,
    Tiff,
    Ps,
    Eps,
    Pdf,
    Svg,
}

impl Format {
    pub fn flag(&self) -> &'static str {
        match self {
            Format::Png => "-png",
            Format::Jpeg => "-jpeg",
            Format::Tiff => "-tiff",
            Format::Ps => "-ps",
            Format::Eps => "-eps",
            Format::Pdf => "-pdf",
            Format::Svg => "-svg",
        }
    }
}

/// 頁面範圍（1 起算，含首尾）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageRange {
    pub first: Option<u32>,
    pub last: Option<u32>,
}

impl PageRange {
    pub fn new(first: u32, last: u32) -> Self {
        PageRange {
            first: Some(first),
            last: Some(last),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PageFilter {
    Odd,
    Even,
}

/// 解析度（DPI）：單一數值或分別指定 x/y
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution {
    Uniform(f64),
    Axes { x: Option<f64>, y: Option<f64> },
}

/// 縮放至指定像素：單一數值或分別指定 x/y（-1 表示依比例）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Uniform(i32),
    Axes { x: Option<i32>, y: Option<i32> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PaperSize {
    Letter,
    Legal,
    #[value(name = "A4", alias = "a4")]
    A4,
    #[value(name = "A3", alias = "a3")]
    A3,
    Match,
}

impl fmt::Display for PaperSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaperSize::Letter => "letter",
            PaperSize::Legal => "legal",
            PaperSize::A4 => "A4",
            PaperSize::A3 => "A3",
            PaperSize::Match => "match",
        };
        f.write_str(name)
    }
}

/// 紙張大小（僅 PS/EPS/PDF 輸出有效），單位為點
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paper {
    Named(PaperSize),
    Size { width: Option<u32>, height: Option<u32> },
}

/// 裁切區域，單位為像素
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Crop {
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    /// 正方形裁切邊長（-sz），覆蓋 width/height
    pub size: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Antialias {
    Default,
    None,
    Gray,
    Subpixel,
    Fast,
    Good,
    Best,
}

impl fmt::Display for Antialias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Antialias::Default => "default",
            Antialias::None => "none",
            Antialias::Gray => "gray",
            Antialias::Subpixel => "subpixel",
            Antialias::Fast => "fast",
            Antialias::Good => "good",
            Antialias::Best => "best",
        };
        f.write_str(name)
    }
}

/// PostScript 語言等級
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PsLevel {
    Level2,
    Level3,
}

/// pdftocairo 轉換選項
///
/// 除了 `format` 以外皆為選填；未設定的選項不會產生任何命令列參數。
/// 選項之間不做互斥檢查，不合法的組合交由 pdftocairo 的結束碼回報。
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub format: Format,
    pub range: Option<PageRange>,
    pub filter: Option<PageFilter>,
    pub single_file: bool,
    pub resolution: Option<Resolution>,
    pub scale: Option<Scale>,
    pub paper: Option<Paper>,
    pub crop: Option<Crop>,
    pub crop_box: bool,
    pub mono: bool,
    pub gray: bool,
    pub transparent: bool,
    pub antialias: Option<Antialias>,
    pub icc: Option<PathBuf>,
    pub jpeg_options: Option<String>,
    pub level: Option<PsLevel>,
    pub original_page_sizes: bool,
    pub no_crop: bool,
    pub expand: bool,
    pub no_shrink: bool,
    pub no_center: bool,
    pub duplex: bool,
    pub owner_password: Option<String>,
    pub user_password: Option<String>,
}

impl Options {
    pub fn new(format: Format) -> Self {
        Options {
            format,
            range: None,
            filter: None,
            single_file: false,
            resolution: None,
            scale: None,
            paper: None,
            crop: None,
            crop_box: false,
            mono: false,
            gray: false,
            transparent: false,
            antialias: None,
            icc: None,
            jpeg_options: None,
            level: None,
            original_page_sizes: false,
            no_crop: false,
            expand: false,
            no_shrink: false,
            no_center: false,
            duplex: false,
            owner_password: None,
            user_password: None,
        }
    }

    pub fn with_range(mut self, first: u32, last: u32) -> Self {
        self.range = Some(PageRange::new(first, last));
        self
    }

    pub fn with_filter(mut self, filter: PageFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn with_single_file(mut self, single_file: bool) -> Self {
        self.single_file = single_file;
        self
    }

    pub fn with_resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = Some(resolution);
        self
    }

    pub fn with_scale(mut self, scale: Scale) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn with_paper(mut self, paper: Paper) -> Self {
        self.paper = Some(paper);
        self
    }

    pub fn with_crop(mut self, crop: Crop) -> Self {
        self.crop = Some(crop);
        self
    }

    pub fn with_crop_box(mut self, crop_box: bool) -> Self {
        self.crop_box = crop_box;
        self
    }

    pub fn with_mono(mut self, mono: bool) -> Self {
        self.mono = mono;
        self
    }

    pub fn with_gray(mut self, gray: bool) -> Self {
        self.gray = gray;
        self
    }

    pub fn with_transparent(mut self, transparent: bool) -> Self {
        self.transparent = transparent;
        self
    }

    pub fn with_antialias(mut self, antialias: Antialias) -> Self {
        self.antialias = Some(antialias);
        self
    }

    pub fn with_icc(mut self, icc: impl Into<PathBuf>) -> Self {
        self.icc = Some(icc.into());
        self
    }

    pub fn with_jpeg_options(mut self, jpeg_options: impl Into<String>) -> Self {
        self.jpeg_options = Some(jpeg_options.into());
        self
    }

    pub fn with_level(mut self, level: PsLevel) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_original_page_sizes(mut self, original_page_sizes: bool) -> Self {
        self.original_page_sizes = original_page_sizes;
        self
    }

    pub fn with_no_crop(mut self, no_crop: bool) -> Self {
        self.no_crop = no_crop;
        self
    }

    pub fn with_expand(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }

    pub fn with_no_shrink(mut self, no_shrink: bool) -> Self {
        self.no_shrink = no_shrink;
        self
    }

    pub fn with_no_center(mut self, no_center: bool) -> Self {
        self.no_center = no_center;
        self
    }

    pub fn with_duplex(mut self, duplex: bool) -> Self {
        self.duplex = duplex;
        self
    }

    pub fn with_owner_password(mut self, password: impl Into<String>) -> Self {
        self.owner_password = Some(password.into());
        self
    }

    pub fn with_user_password(mut self, password: impl Into<String>) -> Self {
        self.user_password = Some(password.into());
        self
    }
}

impl From<Format> for Options {
    fn from(format: Format) -> Self {
        Options::new(format)
    }
}
