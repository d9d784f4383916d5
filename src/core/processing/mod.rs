pub mod resize;
pub mod save;
