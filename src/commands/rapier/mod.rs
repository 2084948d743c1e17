mod cli_tests;
mod execute;

use clap::Args;

use super::generate::{OptionArgs, SourceArgs};

const DEFAULT_OUT: &str = "./repository";

/// Generate rapier query-builder field descriptors
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  ormat rapier -i schema.json                                           # ./repository/<table>.rapier.gen.go
  ormat rapier -i schema.json --model-import-path example.com/app/model # Qualify the model type")]
pub struct RapierCmd {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub options: OptionArgs,

    /// Go package name (defaults to the output directory name)
    #[arg(short, long)]
    pub package: Option<String>,

    /// Import path of the package holding the model structs
    #[arg(long)]
    pub model_import_path: Option<String>,
}
