//! Command line interface for the cplot chart pipeline

use clap::Parser;
use cplot_common::{CplotError, Result};
use cplot_graphs::PlotPipeline;
use std::path::PathBuf;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "cplot", author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input CSV file (header-less `aggregate_count,computation` rows)
    pub csv_file: Option<PathBuf>,

    /// Log level
    #[arg(short, long, default_value = "warn")]
    pub log_level: String,
}

/// Execute one invocation: resolve the input path and run the pipeline.
///
/// A bare invocation (no positional argument) is a [`CplotError::Usage`];
/// the binary turns that into usage text on standard output.
pub fn run(args: &Args) -> Result<PathBuf> {
    let csv_file = args
        .csv_file
        .as_deref()
        .ok_or_else(|| CplotError::usage("expected a <CSV_FILE> argument"))?;

    tracing::debug!("charting {}", csv_file.display());
    PlotPipeline::new().run(csv_file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_without_input_file() {
        let args = Args::try_parse_from(["cplot"]).unwrap();
        assert!(args.csv_file.is_none());
        assert_eq!(args.log_level, "warn");
    }

    #[test]
    fn test_args_with_input_file() {
        let args = Args::try_parse_from(["cplot", "bench.csv"]).unwrap();
        assert_eq!(args.csv_file, Some(PathBuf::from("bench.csv")));
    }

    #[test]
    fn test_args_reject_extra_positionals() {
        assert!(Args::try_parse_from(["cplot", "a.csv", "b.csv"]).is_err());
    }

    #[test]
    fn test_args_log_level_override() {
        let args = Args::try_parse_from(["cplot", "--log-level", "debug", "bench.csv"]).unwrap();
        assert_eq!(args.log_level, "debug");
    }

    #[test]
    fn test_run_without_input_is_usage_error() {
        let args = Args::try_parse_from(["cplot"]).unwrap();
        let error = run(&args).unwrap_err();
        assert!(matches!(error, CplotError::Usage { .. }));
    }
}
