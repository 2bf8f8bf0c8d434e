//! `huepath`: search a coloured grid from the command line.

use clap::Parser;
use env_logger::Env;
use huepath_demos::{Args, run};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();
    log::debug!("{args:?}");

    let stdout = std::io::stdout();
    run(&args, &mut stdout.lock())
}
