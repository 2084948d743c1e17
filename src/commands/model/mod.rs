mod cli_tests;
mod execute;

use clap::Args;

use super::generate::{OptionArgs, SourceArgs};

const DEFAULT_OUT: &str = "./model";
const DEFAULT_FILENAME: &str = "model";

/// Generate gorm model structs
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  ormat model -i schema.json                      # One .go file per table in ./model
  ormat model -i schema.json -t user -t post      # Only these tables
  ormat model -i schema.json --merge              # Every struct in ./model/model.go
  ormat model -i schema.json -K json=snakeCase    # snake_case json tags
  ormat model -i a.json b.json -s tidb --keep-going")]
pub struct ModelCmd {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub options: OptionArgs,

    /// Go package name (defaults to the output directory name)
    #[arg(short, long)]
    pub package: Option<String>,

    /// Write every struct into a single file
    #[arg(long, default_value_t = false)]
    pub merge: bool,

    /// Base name of the merged file
    #[arg(long)]
    pub filename: Option<String>,
}
