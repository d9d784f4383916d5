//! I/O layer: extension-dispatched image decoding and the PNG writer.
pub mod reader;
pub use reader::decode_image;

pub mod writers;
