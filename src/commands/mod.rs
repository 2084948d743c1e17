//! Command definitions and implementations.
//!
//! Each command is defined in its own module with:
//! - The command struct with clap attributes for CLI parsing
//! - An `Execute` impl that loads the schema and writes the artifacts
//!
//! The generator commands share their argument groups and plumbing through
//! the `generate` module.

pub mod generate;
mod model;
mod proto;
mod rapier;
mod sql;

pub use model::ModelCmd;
pub use proto::ProtoCmd;
pub use rapier::RapierCmd;
pub use sql::SqlCmd;

use clap::Subcommand;
use std::error::Error;

use crate::config::ConfigFile;
use crate::dialect::DialectRegistry;
use crate::output::{OutputFormat, Outputable};

/// Everything a command needs besides its own arguments.
#[derive(Debug)]
pub struct RunContext {
    pub registry: DialectRegistry,
    pub config: ConfigFile,
}

/// Trait for executing commands with command-specific result types.
pub trait Execute {
    type Output: Outputable;

    fn execute(self, ctx: &RunContext) -> Result<Self::Output, Box<dyn Error>>;
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate gorm model structs
    Model(ModelCmd),

    /// Generate protobuf messages, one file per table
    Proto(ProtoCmd),

    /// Generate CREATE TABLE statements
    Sql(SqlCmd),

    /// Generate rapier query-builder field descriptors
    Rapier(RapierCmd),

    /// Catch-all for unknown commands
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

impl Command {
    /// Execute the command and return formatted output
    pub fn run(self, ctx: &RunContext, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        match self {
            Command::Model(cmd) => {
                let result = cmd.execute(ctx)?;
                Ok(result.format(format))
            }
            Command::Proto(cmd) => {
                let result = cmd.execute(ctx)?;
                Ok(result.format(format))
            }
            Command::Sql(cmd) => {
                let result = cmd.execute(ctx)?;
                Ok(result.format(format))
            }
            Command::Rapier(cmd) => {
                let result = cmd.execute(ctx)?;
                Ok(result.format(format))
            }
            Command::Unknown(args) => {
                Err(format!("Unknown command: {}", args.first().unwrap_or(&String::new())).into())
            }
        }
    }
}
