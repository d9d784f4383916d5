//! Core processing building blocks: the nearest-neighbor resampler and save
//! helpers. These are internal primitives consumed by the high-level `api`
//! module.
pub mod params;
pub mod processing;
