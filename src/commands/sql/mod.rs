mod execute;

use clap::Args;

use super::generate::{OptionArgs, SourceArgs};

const DEFAULT_OUT: &str = "./migration";
const DEFAULT_FILENAME: &str = "create_table";

/// Generate CREATE TABLE statements
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  ormat sql -i schema.json                  # One .sql file per table in ./migration
  ormat sql -i schema.json --merge          # Everything in ./migration/create_table.sql
  ormat sql -i schema.json --exclude 'tmp_.*'")]
pub struct SqlCmd {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub options: OptionArgs,

    /// Write every statement into a single file
    #[arg(long, default_value_t = false)]
    pub merge: bool,

    /// Base name of the merged file
    #[arg(long)]
    pub filename: Option<String>,
}
