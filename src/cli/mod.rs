//! Command Line Interface (CLI) layer for imresize.
//!
//! This module defines argument parsing (`args`) and the orchestration logic
//! (`runner`) for the decode, resample, encode sequence. It wires
//! user-provided options to the underlying library functionality exposed via
//! `imresize::api`.
//!
//! If you are embedding imresize into another application, prefer using the
//! high-level `imresize::api` module instead of calling the CLI code.
pub mod args;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
