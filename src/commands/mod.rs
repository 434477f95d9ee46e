//! Controller commands.
//!
//! This module provides:
//! - The closed set of commands with their codes and image indices
//! - Decoding of raw codes and names at the crate boundary

mod table;

pub use table::{Command, CommandEntry, CommandError, CommandTable};
