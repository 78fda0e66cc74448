//! # colgraph
//!
//! Dataset loader and inspection commands built on `colgraph-core`.
//!
//! - [`dataset`]: TOML dataset layout and the fixed dataset schema
//! - [`cli`]: clap commands and their reports
//! - [`error`]: `CliError`

pub mod cli;
pub mod dataset;
pub mod error;

pub use error::CliError;
