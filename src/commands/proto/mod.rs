mod execute;

use clap::Args;

use super::generate::{OptionArgs, SourceArgs, parse_key_value};

const DEFAULT_OUT: &str = "./mapper";

/// Generate protobuf messages, one file per table
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  ormat proto -i schema.json                                  # One .proto per table in ./mapper
  ormat proto -i schema.json --options go_package=app/mapper  # File option
  ormat proto -i schema.json --style snakeCase                # snake_case field names
  ormat proto -i schema.json --disable-timestamp              # Time as int64")]
pub struct ProtoCmd {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub options: OptionArgs,

    /// Proto package name (defaults to the output directory name)
    #[arg(short, long)]
    pub package: Option<String>,

    /// File option as KEY=VALUE (repeatable)
    #[arg(long = "options", value_parser = parse_key_value)]
    pub file_options: Vec<(String, String)>,

    /// Field naming style: smallCamelCase, camelCase, snakeCase or kebab
    #[arg(long)]
    pub style: Option<String>,

    /// Render bool fields as int32
    #[arg(long, default_value_t = false)]
    pub disable_bool: bool,

    /// Render time fields as int64 instead of google.protobuf.Timestamp
    #[arg(long, default_value_t = false)]
    pub disable_timestamp: bool,
}
