//! `moapp` entry-point: parse flags, load configuration, print the report.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*};

use moapp::cli::Cli;
use moapp::error::Result;
use moapp::report::print_report;
use moose_config::Configurator;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(&cli);
    run(&cli).map_err(color_eyre::eyre::Report::from)
}

fn init_tracing(cli: &Cli) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = cli.log_filter(rust_log.as_deref());
    let _unused = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

fn run(cli: &Cli) -> Result<()> {
    let cfg = Configurator::builder(cli.name.as_str())
        .defaults(moapp::cli::demo_defaults())
        .options(cli.load_options()?)
        .load()?;
    print_report(&cfg)?;
    Ok(())
}
