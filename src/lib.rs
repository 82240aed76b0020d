//! 透過 pdftocairo 將 PDF 轉換為圖片或向量格式
//!
//! 以路徑或記憶體內容作為輸入，輸出可以是寫到指定路徑的檔案，
//! 或是依頁序排列的記憶體內容。

pub mod error;

pub mod config {
    pub mod config;
    pub mod ports;
}

pub mod models {
    pub mod conversion;
    pub mod options;
}

pub mod service {
    pub mod args;
    pub mod config_service;
    pub mod harvest;
    pub mod process;
    pub mod temp;

    pub mod traits {
        pub mod i_service;
    }
}

pub mod facade {
    pub mod conversion_facade;
}

pub mod action {
    pub mod cli;
}

pub mod utils {
    pub mod utils;
}

pub use error::{ConvertError, ExitKind, Result};
pub use facade::conversion_facade::{input, version, PdfToCairo};
pub use models::conversion::Input;
pub use models::options::{
    Antialias, Crop, Format, Options, PageFilter, PageRange, Paper, PaperSize, PsLevel,
    Resolution, Scale,
};
pub use service::args::build_args;
