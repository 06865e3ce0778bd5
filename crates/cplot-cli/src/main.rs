//! cplot - chart batch computation cost measurements from a CSV log

use anyhow::Result;
use clap::{CommandFactory, Parser};
use cplot_cli::{run, Args};
use cplot_common::{init_logging, CplotError, LoggingConfig};

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&LoggingConfig {
        level: args.log_level.clone(),
        ..LoggingConfig::default()
    })
    .map_err(|err| anyhow::anyhow!(err))?;

    match run(&args) {
        Ok(output) => {
            println!("Plot saved to {}", output.display());
            Ok(())
        }
        // Usage text goes to standard output; the run wrote no file.
        Err(CplotError::Usage { .. }) => {
            Args::command().print_help()?;
            std::process::exit(1);
        }
        Err(err) => Err(err.into()),
    }
}
