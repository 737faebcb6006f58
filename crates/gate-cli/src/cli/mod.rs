use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::{AuthorizeUrlArgs, Commands, SchemaArgs, SchemaType};
pub use subcommands::{OrgCommands, OrgDecodeArgs, OrgListArgs};

/// Top-level CLI parser for the `gate` binary.
#[derive(Debug, Parser)]
#[command(name = "gate", version, about = "Gatehouse - Clerk OAuth and organization tooling")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only in logs)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
        }
    }
}
