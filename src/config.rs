//! Command-line configuration
//!
//! [`Args`] is the raw `clap` surface; [`Config`] is what the driver acts on.

use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// nextr evaluates arithmetic expressions of the NextR language, one line at
/// a time.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Evaluate this expression once and exit.
    #[arg(short, long, value_name = "TEXT")]
    pub expr: Option<String>,

    /// Read lines from stdin and print one result per line instead of
    /// starting the interactive workbench.
    #[arg(long, conflicts_with = "expr")]
    pub plain: bool,

    /// Print the syntax tree before each result (plain and one-shot modes).
    #[arg(long)]
    pub tree: bool,

    /// Print the token list before each result (plain and one-shot modes).
    #[arg(long)]
    pub tokens: bool,

    /// Prompt shown before each line in plain mode.
    #[arg(long, default_value = "> ")]
    pub prompt: String,

    /// Write log records to this file instead of stderr.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Minimum level of log records to emit.
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    pub log_level: LevelFilter,
}

/// How the driver feeds lines to the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// ratatui workbench
    Interactive,
    /// stdin/stdout line loop
    Plain,
    /// a single expression from the command line
    Once(String),
}

/// Where log records go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
    pub show_tree: bool,
    pub show_tokens: bool,
    pub prompt: String,
    pub log_target: LogTarget,
    pub log_level: LevelFilter,
}

impl Config {
    /// Parse the process arguments.
    pub fn from_env() -> Self {
        Self::from_args(Args::parse())
    }

    pub fn try_from_iter<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Args::try_parse_from(iter).map(Self::from_args)
    }

    pub fn from_args(args: Args) -> Self {
        let mode = match args.expr {
            Some(expr) => Mode::Once(expr),
            None if args.plain => Mode::Plain,
            None => Mode::Interactive,
        };

        // The workbench owns the terminal, so it may only log to a file.
        let log_target = match (args.log_file, &mode) {
            (Some(path), _) => LogTarget::File(path),
            (None, Mode::Interactive) => LogTarget::Disabled,
            (None, _) => LogTarget::Stderr,
        };

        Config {
            mode,
            show_tree: args.tree,
            show_tokens: args.tokens,
            prompt: args.prompt,
            log_target,
            log_level: args.log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_interactive_without_logging() {
        let config = Config::try_from_iter(["nextr"]).unwrap();
        assert_eq!(config.mode, Mode::Interactive);
        assert_eq!(config.log_target, LogTarget::Disabled);
        assert_eq!(config.log_level, LevelFilter::Warn);
        assert_eq!(config.prompt, "> ");
    }

    #[test]
    fn test_once_mode() {
        let config = Config::try_from_iter(["nextr", "-e", "1 + 2", "--tree"]).unwrap();
        assert_eq!(config.mode, Mode::Once("1 + 2".to_string()));
        assert!(config.show_tree);
        assert!(!config.show_tokens);
        assert_eq!(config.log_target, LogTarget::Stderr);
    }

    #[test]
    fn test_plain_mode_with_log_file() {
        let config = Config::try_from_iter([
            "nextr",
            "--plain",
            "--log-file",
            "nextr.log",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(config.mode, Mode::Plain);
        assert_eq!(config.log_target, LogTarget::File(PathBuf::from("nextr.log")));
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_plain_conflicts_with_expr() {
        assert!(Config::try_from_iter(["nextr", "--plain", "-e", "1"]).is_err());
        assert!(Config::try_from_iter(["nextr", "--log-level", "loud"]).is_err());
    }
}
