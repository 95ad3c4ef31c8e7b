use std::path::PathBuf;

use clap::*;
use colored::Colorize;
use encode::{execute, load_options, GeneralConfig};
use tracing::debug;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

mod encode;

#[derive(Parser)]
#[clap(
    name = env!("CARGO_BIN_NAME"),
    about = "Translates the theory statements of a grounded logic program into SMT-LIB assertions. Statements that do not fit the selected theory fragment are reported and skipped",
    rename_all = "kebab-case",
    author,
    version = env!("CARGO_PKG_VERSION"),
)]
pub struct Args {
    /// Statement file, one [[statement]] table per theory statement
    pub input: PathBuf,

    /// Options file (toml)
    #[clap(long = "config", short = 'c')]
    pub config: Option<PathBuf>,

    /// General options
    #[clap(flatten)]
    pub general_config: GeneralConfig,
}

fn tracing_level(level: log::LevelFilter) -> LevelFilter {
    match level {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    }
}

fn fail(err: anyhow::Error) -> ! {
    let err = format!("{:?}", err);
    eprintln!("{}", err.bold().red());
    std::process::exit(1);
}

fn main() {
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).unwrap();

    let args = Args::parse();

    let options = match load_options(args.config.as_deref(), &args.general_config) {
        Ok(options) => options,
        Err(err) => fail(err),
    };

    let filter = EnvFilter::builder()
        .with_default_directive(tracing_level(options.verbosity_level).into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!("smt-encode version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(err) = execute(&args.input, &options) {
        fail(err);
    }
}
