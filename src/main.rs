use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ormat::cli::Args;
use ormat::commands::RunContext;
use ormat::config::ConfigFile;
use ormat::dialect::DialectRegistry;

fn setup_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<String, Box<dyn Error>> {
    let ctx = RunContext {
        registry: DialectRegistry::with_builtins(),
        config: ConfigFile::load(args.config.as_deref())?,
    };
    args.command.run(&ctx, args.format)
}

fn main() -> ExitCode {
    let args = Args::parse();
    setup_logging(&args.log_level);

    match run(args) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
