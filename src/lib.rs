//! taskchart library
//!
//! This library exposes the chart renderer and CLI commands for use in
//! integration tests. The binary is in `main.rs` and uses this library.

pub mod chart;
pub mod commands;
pub mod error;
pub mod float;
pub mod menu;
pub mod model;

pub use commands::*;
pub use error::{ChartError, ChartResult};
