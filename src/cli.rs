//! Command line interface.
//!
//! Subcommands only inspect the command table. Execution produces a
//! [`Report`], and [`render`] turns it into text in the chosen format.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};

use crate::commands::{Command, CommandEntry, CommandTable};
use crate::config::OutputFormat;
use crate::error::{AppError, Result};

#[derive(Debug, Parser)]
#[command(name = "rccmd")]
#[command(about = "Inspect the RC controller command table")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub action: Action,

    /// Output format (defaults to the configured one)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Config file to use instead of the default location
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Action {
    /// List every command with its code and image index
    List,

    /// Print the command code for a name
    Code {
        /// Command name, case-insensitive
        name: String,
    },

    /// Print the image index for a name
    Image {
        /// Command name, case-insensitive
        name: String,
    },

    /// Look up the command for a numeric code
    Decode {
        /// Numeric code; anything that is not a tabulated code is rejected
        #[arg(allow_negative_numbers = true)]
        code: String,
    },
}

/// The result of running an [`Action`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Report {
    Entries(Vec<CommandEntry>),
    Code {
        #[serde(rename = "name")]
        command: Command,
        code: u8,
    },
    ImageIndex {
        #[serde(rename = "name")]
        command: Command,
        image_index: usize,
    },
}

#[derive(Serialize)]
struct TomlEntries<'a> {
    command: &'a [CommandEntry],
}

/// Run an action against the command table.
pub fn execute(action: &Action) -> Result<Report> {
    info!(?action, "Running action");

    let report = match action {
        Action::List => Report::Entries(CommandTable::entries().to_vec()),
        Action::Code { name } => {
            let command: Command = name.parse()?;
            Report::Code {
                command,
                code: CommandTable::code_of(command),
            }
        }
        Action::Image { name } => {
            let command: Command = name.parse()?;
            Report::ImageIndex {
                command,
                image_index: CommandTable::image_index_of(command),
            }
        }
        Action::Decode { code } => {
            let command = CommandTable::decode_str(code)?;
            Report::Entries(vec![CommandTable::entry(command)])
        }
    };

    debug!(?report, "Action finished");
    Ok(report)
}

/// Render a report. The returned text has no trailing newline.
pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(report)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).map_err(|e| AppError::other(e.to_string()))
        }
        OutputFormat::Toml => {
            let text = match report {
                Report::Entries(entries) => toml::to_string(&TomlEntries { command: entries }),
                other => toml::to_string(other),
            };
            text.map(|t| t.trim_end().to_string())
                .map_err(|e| AppError::other(e.to_string()))
        }
    }
}

fn render_table(report: &Report) -> String {
    match report {
        Report::Entries(entries) => {
            let mut lines = vec![format!("{:<8} {:>4} {:>5}", "NAME", "CODE", "IMAGE")];
            lines.extend(entries.iter().map(|e| {
                format!("{:<8} {:>4} {:>5}", e.command.name(), e.code, e.image_index)
            }));
            lines.join("\n")
        }
        Report::Code { code, .. } => code.to_string(),
        Report::ImageIndex { image_index, .. } => image_index.to_string(),
    }
}
