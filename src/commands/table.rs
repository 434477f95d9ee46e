//! The RC controller command table.
//!
//! Every command the controller understands carries a wire code and an
//! image index. The set is closed: a [`Command`] value is always one of the
//! five tabulated entries, so lookups never fail. Only raw codes and names
//! arriving from outside the type system go through the fallible decoders.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use strum::{EnumCount, EnumIter, IntoEnumIterator};
use thiserror::Error;
use tracing::debug;

/// Errors raised while decoding raw input into a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The value is not one of the tabulated command codes. Holds the
    /// value as it was given.
    #[error("Unknown command code: {0}")]
    UnknownCommand(String),

    /// The string is not one of the symbolic command names.
    #[error("Unknown command name: '{0}'")]
    UnknownName(String),
}

/// A controller command.
///
/// Variant order matches the table order and is relied on by
/// [`CommandTable::entry`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumCount,
    Serialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Command {
    /// Placeholder for an unset or unusable command.
    Invalid,
    /// Live driving.
    Drive,
    /// Start recording a manoeuvre.
    Record,
    /// Replay the recorded manoeuvre.
    Replay,
    /// Stop whatever is running.
    Stop,
}

impl Command {
    /// The command code sent to the controller.
    pub fn code(self) -> u8 {
        CommandTable::entry(self).code
    }

    /// The image slot associated with this command.
    pub fn image_index(self) -> usize {
        CommandTable::entry(self).image_index
    }

    /// The upper-case symbolic name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Invalid => "INVALID",
            Self::Drive => "DRIVE",
            Self::Record => "RECORD",
            Self::Replay => "REPLAY",
            Self::Stop => "STOP",
        }
    }

    /// Decode a command from its wire code.
    pub fn from_code(code: u8) -> Result<Self, CommandError> {
        CommandTable::entries()
            .iter()
            .find(|entry| entry.code == code)
            .map(|entry| entry.command)
            .ok_or_else(|| {
                debug!(code, "Rejected unknown command code");
                CommandError::UnknownCommand(code.to_string())
            })
    }
}

impl TryFrom<u8> for Command {
    type Error = CommandError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = CommandError;

    /// Parse a symbolic name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::iter()
            .find(|cmd| cmd.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                debug!(name, "Rejected unknown command name");
                CommandError::UnknownName(name.to_string())
            })
    }
}

/// One row of the command table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommandEntry {
    /// The command this row describes.
    #[serde(rename = "name")]
    pub command: Command,
    /// Wire code.
    pub code: u8,
    /// Image slot.
    pub image_index: usize,
}

impl CommandEntry {
    const fn new(command: Command, code: u8, image_index: usize) -> Self {
        Self {
            command,
            code,
            image_index,
        }
    }
}

static ENTRIES: [CommandEntry; Command::COUNT] = [
    CommandEntry::new(Command::Invalid, 0, 0),
    CommandEntry::new(Command::Drive, 10, 0),
    CommandEntry::new(Command::Record, 18, 0),
    CommandEntry::new(Command::Replay, 96, 1),
    CommandEntry::new(Command::Stop, 129, 2),
];

/// Read-only view over the command table.
pub struct CommandTable;

impl CommandTable {
    /// All entries in declaration order.
    pub fn entries() -> &'static [CommandEntry] {
        &ENTRIES
    }

    /// The row for a command.
    pub fn entry(command: Command) -> CommandEntry {
        ENTRIES[command as usize]
    }

    /// Number of commands. Always [`Command::COUNT`].
    pub fn len() -> usize {
        ENTRIES.len()
    }

    /// Command code for `command`.
    pub fn code_of(command: Command) -> u8 {
        command.code()
    }

    /// Image index for `command`.
    pub fn image_index_of(command: Command) -> usize {
        command.image_index()
    }

    /// Decode an integer from an untyped source.
    ///
    /// Values outside the `u8` range can never be a command code and are
    /// reported the same way as unused codes.
    pub fn decode(value: i64) -> Result<Command, CommandError> {
        match u8::try_from(value) {
            Ok(code) => Command::from_code(code),
            Err(_) => {
                debug!(value, "Rejected out-of-range command code");
                Err(CommandError::UnknownCommand(value.to_string()))
            }
        }
    }

    /// Decode a code given as text, e.g. on the command line.
    ///
    /// Text that is not an integer, or does not fit in an `i64`, is an
    /// unknown code like any other.
    pub fn decode_str(raw: &str) -> Result<Command, CommandError> {
        let raw = raw.trim();
        match raw.parse::<i64>() {
            Ok(value) => Self::decode(value),
            Err(_) => {
                debug!(raw, "Rejected non-numeric command code");
                Err(CommandError::UnknownCommand(raw.to_string()))
            }
        }
    }
}
