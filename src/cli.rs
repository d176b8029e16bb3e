//! CLI argument parsing for ngram-gap

use crate::config::GapConfig;
use crate::error::Result;
use crate::pipeline::{CorpusSource, RunConfig};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ngram-gap")]
#[command(version)]
#[command(
    about = "Rank n-grams over- or under-represented in one text corpus relative to another",
    long_about = None
)]
pub struct Cli {
    /// First corpus (.csv or .xlsx with header row, or .jsonl)
    #[arg(long = "data1", value_name = "PATH")]
    pub data1: PathBuf,

    /// Name of the text column in the first corpus
    #[arg(long = "text-column1", value_name = "NAME", default_value = "text")]
    pub text_column1: String,

    /// Second corpus (.csv or .xlsx with header row, or .jsonl)
    #[arg(long = "data2", value_name = "PATH")]
    pub data2: PathBuf,

    /// Name of the text column in the second corpus
    #[arg(long = "text-column2", value_name = "NAME", default_value = "text")]
    pub text_column2: String,

    /// Shortest n-gram to extract (default: 1)
    #[arg(long = "min-ngram-length", value_name = "N")]
    pub min_ngram_length: Option<usize>,

    /// Longest n-gram to extract (default: 3)
    #[arg(long = "max-ngram-length", value_name = "N")]
    pub max_ngram_length: Option<usize>,

    /// Keep at most this many unique n-grams, most frequent first (default: 1000000)
    #[arg(long = "max-unique-ngrams", value_name = "N")]
    pub max_unique_ngrams: Option<usize>,

    /// TOML file with n-gram settings; flags take precedence
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write the report as CSV
    #[arg(long = "csv", value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Write the report as JSON
    #[arg(long = "json", value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Write the report as an XLSX spreadsheet
    #[arg(long = "xlsx", value_name = "PATH")]
    pub xlsx: Option<PathBuf>,

    /// Enable trace-level logging
    #[arg(short, long)]
    pub debug: bool,

    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "debug")]
    pub quiet: bool,
}

impl Cli {
    /// Resolve n-gram settings: defaults, then config file, then flags
    pub fn gap_config(&self) -> Result<GapConfig> {
        let mut config = match &self.config {
            Some(path) => GapConfig::from_file(path)?,
            None => GapConfig::default(),
        };

        if let Some(min) = self.min_ngram_length {
            config.min_ngram_length = min;
        }
        if let Some(max) = self.max_ngram_length {
            config.max_ngram_length = max;
        }
        if let Some(ceiling) = self.max_unique_ngrams {
            config.max_unique_ngrams = ceiling;
        }

        config.validate()?;
        Ok(config)
    }

    /// Build a validated run configuration
    pub fn run_config(&self) -> Result<RunConfig> {
        let config = RunConfig {
            data1: CorpusSource::new(&self.data1, &self.text_column1),
            data2: CorpusSource::new(&self.data2, &self.text_column2),
            gap: self.gap_config()?,
            csv: self.csv.clone(),
            json: self.json.clone(),
            xlsx: self.xlsx.clone(),
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GapError;

    fn base_args() -> Vec<&'static str> {
        vec![
            "ngram-gap",
            "--data1",
            "tickets.csv",
            "--data2",
            "docs.jsonl",
            "--csv",
            "gap.csv",
        ]
    }

    fn parse(extra: &[&str]) -> Cli {
        let mut args = base_args();
        args.extend_from_slice(extra);
        Cli::parse_from(args)
    }

    #[test]
    fn test_cli_parses_sources() {
        let cli = parse(&[]);
        assert_eq!(cli.data1, PathBuf::from("tickets.csv"));
        assert_eq!(cli.data2, PathBuf::from("docs.jsonl"));
        assert_eq!(cli.text_column1, "text");
        assert_eq!(cli.text_column2, "text");
    }

    #[test]
    fn test_cli_requires_both_sources() {
        let result = Cli::try_parse_from(["ngram-gap", "--data1", "a.csv"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_text_columns() {
        let cli = parse(&["--text-column1", "body", "--text-column2", "content"]);
        assert_eq!(cli.text_column1, "body");
        assert_eq!(cli.text_column2, "content");
    }

    #[test]
    fn test_cli_defaults_resolve() {
        let config = parse(&[]).gap_config().unwrap();
        assert_eq!(config, GapConfig::default());
    }

    #[test]
    fn test_cli_length_overrides() {
        let config = parse(&["--min-ngram-length", "2", "--max-ngram-length", "2"])
            .gap_config()
            .unwrap();
        assert_eq!(config.min_ngram_length, 2);
        assert_eq!(config.max_ngram_length, 2);
    }

    #[test]
    fn test_cli_inverted_lengths_rejected() {
        let result = parse(&["--min-ngram-length", "3", "--max-ngram-length", "1"]).gap_config();
        assert!(matches!(result, Err(GapError::Config(_))));
    }

    #[test]
    fn test_cli_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gap.toml");
        std::fs::write(&path, "min_ngram_length = 2\nmax_ngram_length = 4\n").unwrap();

        let config = parse(&[
            "--config",
            path.to_str().unwrap(),
            "--max-ngram-length",
            "5",
        ])
        .gap_config()
        .unwrap();
        assert_eq!(config.min_ngram_length, 2);
        assert_eq!(config.max_ngram_length, 5);
    }

    #[test]
    fn test_cli_run_config_requires_output() {
        let cli = Cli::parse_from(["ngram-gap", "--data1", "a.csv", "--data2", "b.csv"]);
        assert!(matches!(cli.run_config(), Err(GapError::Config(_))));
    }

    #[test]
    fn test_cli_xlsx_output_alone_is_enough() {
        let cli = Cli::parse_from([
            "ngram-gap", "--data1", "a.xlsx", "--data2", "b.csv", "--xlsx", "gap.xlsx",
        ]);
        let config = cli.run_config().unwrap();
        assert_eq!(config.xlsx, Some(PathBuf::from("gap.xlsx")));
        assert!(config.csv.is_none());
    }

    #[test]
    fn test_cli_debug_and_quiet_conflict() {
        let mut args = base_args();
        args.extend_from_slice(&["--debug", "--quiet"]);
        assert!(Cli::try_parse_from(args).is_err());
    }
}
