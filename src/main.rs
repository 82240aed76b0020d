use std::io;

use pdf_to_image::action::cli::process_args;

#[tokio::main]
async fn main() -> io::Result<()> {
    let summary = process_args().await?;
    log::info!("程式執行完成：{}", summary);
    eprintln!("{}", summary);
    Ok(())
}
