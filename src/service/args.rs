use crate::models::options::{Options, Paper, PageFilter, PsLevel, Resolution, Scale};

/// 將轉換選項轉為 pdftocairo 命令列參數
///
/// 參數順序固定：格式、頁面範圍、奇偶頁、單檔、解析度、縮放、紙張、裁切、
/// 外觀選項、PostScript 選項、版面選項、密碼，最後固定加上 `-q`。
/// 不檢查數值範圍或互斥關係。
pub fn build_args(options: &Options) -> Vec<String> {
    let mut args = vec![options.format.flag().to_string()];

    if let Some(range) = &options.range {
        push_value(&mut args, "-f", range.first);
        push_value(&mut args, "-l", range.last);
    }

    match options.filter {
        Some(PageFilter::Odd) => args.push("-o".to_string()),
        Some(PageFilter::Even) => args.push("-e".to_string()),
        None => {}
    }
    push_flag(&mut args, "-singlefile", options.single_file);

    match options.resolution {
        Some(Resolution::Uniform(dpi)) => push_value(&mut args, "-r", Some(dpi)),
        Some(Resolution::Axes { x, y }) => {
            push_value(&mut args, "-rx", x);
            push_value(&mut args, "-ry", y);
        }
        None => {}
    }

    match options.scale {
        Some(Scale::Uniform(size)) => push_value(&mut args, "-scale-to", Some(size)),
        Some(Scale::Axes { x, y }) => {
            push_value(&mut args, "-scale-to-x", x);
            push_value(&mut args, "-scale-to-y", y);
        }
        None => {}
    }

    match options.paper {
        Some(Paper::Named(size)) => push_value(&mut args, "-paper", Some(size)),
        Some(Paper::Size { width, height }) => {
            push_value(&mut args, "-paperw", width);
            push_value(&mut args, "-paperh", height);
        }
        None => {}
    }

    if let Some(crop) = &options.crop {
        push_value(&mut args, "-x", crop.x);
        push_value(&mut args, "-y", crop.y);
        push_value(&mut args, "-W", crop.width);
        push_value(&mut args, "-H", crop.height);
        push_value(&mut args, "-sz", crop.size);
    }
    push_flag(&mut args, "-cropbox", options.crop_box);

    push_flag(&mut args, "-mono", options.mono);
    push_flag(&mut args, "-gray", options.gray);
    push_flag(&mut args, "-transp", options.transparent);
    push_value(&mut args, "-antialias", options.antialias);
    push_value(
        &mut args,
        "-icc",
        options.icc.as_ref().map(|path| path.display()),
    );
    push_value(&mut args, "-jpegopt", options.jpeg_options.as_deref());

    match options.level {
        Some(PsLevel::Level2) => args.push("-level2".to_string()),
        Some(PsLevel::Level3) => args.push("-level3".to_string()),
        None => {}
    }
    push_flag(&mut args, "-origpagesizes", options.original_page_sizes);

    push_flag(&mut args, "-nocrop", options.no_crop);
    push_flag(&mut args, "-expand", options.expand);
    push_flag(&mut args, "-noshrink", options.no_shrink);
    push_flag(&mut args, "-nocenter", options.no_center);
    push_flag(&mut args, "-duplex", options.duplex);

    push_value(&mut args, "-opw", options.owner_password.as_deref());
    push_value(&mut args, "-upw", options.user_password.as_deref());

    args.push("-q".to_string());
    args
}

fn push_flag(args: &mut Vec<String>, flag: &str, enabled: bool) {
    if enabled {
        args.push(flag.to_string());
    }
}

fn push_value<T: std::fmt::Display>(args: &mut Vec<String>, flag: &str, value: Option<T>) {
    if let Some(value) = value {
        args.push(flag.to_string());
        args.push(value.to_string());
    }
}
