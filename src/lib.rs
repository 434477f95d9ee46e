//! rccmd - command table for a programmable RC controller
//!
//! Each controller command has a fixed wire code and an image index. The
//! table is immutable and can be read from any thread.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;

pub use commands::{Command, CommandEntry, CommandError, CommandTable};
pub use error::{AppError, Result};
