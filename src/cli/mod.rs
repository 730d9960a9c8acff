//! Command-line interface module.

mod args;
pub mod check;
pub mod common;
pub mod merge;
pub mod resolve;
pub mod show;

pub use args::{Cli, Commands, OutputArgs};
