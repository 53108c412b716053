use anyhow::Result;
use clap::Parser;
use phrasemap::cli::{Cli, Commands};
use phrasemap::commands::AnalyzeOptions;
use phrasemap::errors::exit_code;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:?}", err);
            ExitCode::from(exit_code(&err))
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze {
            path,
            format,
            output,
            config,
            min_len,
            max_len,
            min_occurrences,
            top,
            parallel,
            plain,
            verbosity,
        } => {
            init_logging(verbosity);
            phrasemap::commands::handle_analyze(AnalyzeOptions {
                path,
                format,
                output,
                config,
                min_len,
                max_len,
                min_occurrences,
                top,
                parallel,
                plain,
            })
        }
        Commands::Init { force } => {
            init_logging(0);
            phrasemap::commands::init::init_config(force)
        }
    }
}

// RUST_LOG, when set, takes precedence over -v
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
