use std::time::Instant;

use tracing::info;

use imresize::api::resize_file_to_path;
use imresize::{Dimensions, ResizeParams};

use super::args::CliArgs;

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let start = Instant::now();

    // Dimensions are validated before any file is touched.
    let dimensions: Dimensions = args.dimensions.parse()?;

    info!(
        "Resizing {:?} -> {:?} to {}",
        args.input, args.output, dimensions
    );

    resize_file_to_path(&args.input, &args.output, &ResizeParams::new(dimensions))?;

    println!("done resizing image in {:.2?} ✨✨✨", start.elapsed());
    Ok(())
}
