use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "imresize", version, about = "Resize a JPEG or PNG image to exact pixel dimensions")]
pub struct CliArgs {
    /// Input image path (jpeg, jpg or png, matched by extension)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output image path (always written as PNG)
    #[arg(short, long)]
    pub output: PathBuf,

    /// Target dimensions, formatted as WIDTHxHEIGHT (e.g. 800x600).
    /// Aspect ratio is not preserved.
    #[arg(short, long)]
    pub dimensions: String,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
