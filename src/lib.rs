#![doc = r#"
imresize — resize one raster image to exact pixel dimensions.

This crate decodes a JPEG or PNG file, resamples it to caller-specified
dimensions with nearest-neighbor scaling, and encodes the result as PNG.
It powers the imresize CLI and can be embedded in your own Rust applications.

The output always has exactly the requested width and height; aspect ratio is
not preserved. The output is always PNG, regardless of the output path's
extension.

Quick start: resize a file to a file
------------------------------------
```rust,no_run
use std::path::Path;
use imresize::{Dimensions, ResizeParams, resize_file_to_path};

fn main() -> imresize::Result<()> {
    let params = ResizeParams::new(Dimensions::new(800, 600));
    resize_file_to_path(Path::new("in.jpg"), Path::new("out.png"), &params)
}
```

Resize in-memory to `ResizedImage`
----------------------------------
```rust,no_run
use std::path::Path;
use imresize::{Dimensions, resize_file_to_buffer};

fn main() -> imresize::Result<()> {
    let img = resize_file_to_buffer(Path::new("in.png"), Dimensions::new(256, 256))?;
    // `img.pixels` is interleaved RGBA8 of size 256 x 256.
    assert_eq!((img.width, img.height), (256, 256));
    Ok(())
}
```

Error handling
--------------
All public functions return `imresize::Result<T>`; match on `imresize::Error`
to handle specific cases, e.g. unsupported input formats.

```rust,no_run
use std::path::Path;
use imresize::{Dimensions, Error, resize_file_to_buffer};

fn main() {
    match resize_file_to_buffer(Path::new("photo.gif"), Dimensions::new(64, 64)) {
        Ok(_) => {}
        Err(Error::UnsupportedFormat { extension }) => {
            eprintln!("cannot decode .{extension} files")
        }
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — core types (`Dimensions`, `InputFormat`, `OutputFormat`).
- [`io`] — image reader and PNG writer.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use core::params::ResizeParams;
pub use error::{Error, Result};
pub use types::{Dimensions, InputFormat, OutputFormat};

// Reader and writer helpers
pub use io::reader::decode_image;
pub use io::writers::png::write_rgba_png;

// High-level API re-exports
pub use api::{ResizedImage, resize_file_to_buffer, resize_file_to_path};
