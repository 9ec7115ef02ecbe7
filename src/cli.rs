//! Command-line interface for speakdrill
//!
//! Provides argument parsing using clap derive macros.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Speaking-practice trainer for the terminal
#[derive(Parser, Debug)]
#[command(
    name = "speakdrill",
    version,
    about = "Speaking-practice trainer for the terminal"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suppress status output (quiet mode)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose output (-v: live transcript updates, -vv: full diagnostics)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Practice topic (default: Hometown). See `speakdrill topics`
    #[arg(long, short = 't', value_name = "TOPIC")]
    pub topic: Option<String>,

    /// Session duration (default: 60s). Examples: 60, 90s, 2m
    #[arg(long, short = 'd', value_name = "DURATION", value_parser = parse_duration_secs)]
    pub duration: Option<u32>,

    /// Language tag passed to the recognizer (default: en-US)
    #[arg(long, value_name = "LANG")]
    pub language: Option<String>,

    /// Recognizer command override (a program streaming one segment per line)
    #[arg(long, value_name = "COMMAND")]
    pub recognizer: Option<String>,

    /// Exit after one session (default: prompt to retry)
    #[arg(long)]
    pub once: bool,
}

/// Parse a duration string into whole seconds.
///
/// Supports any duration format accepted by `humantime`: bare numbers
/// (seconds), single-unit (`60s`, `2m`), and compound (`1m30s`).
fn parse_duration_secs(s: &str) -> Result<u32, String> {
    let s = s.trim();
    // Bare number → seconds
    if let Ok(secs) = s.parse::<u32>() {
        return Ok(secs);
    }
    humantime::parse_duration(s)
        .map_err(|e| e.to_string())
        .and_then(|d| u32::try_from(d.as_secs()).map_err(|_| "duration too large".to_string()))
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List available practice topics
    Topics,

    /// Analyse a transcript from a file (or stdin when omitted)
    Analyse {
        /// Transcript file (reads stdin when omitted)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Emit the report as an HTML fragment
        #[arg(long)]
        html: bool,

        /// Emit the report as JSON
        #[arg(long, conflicts_with = "html")]
        json: bool,
    },

    /// Check that the configured recognizer is available
    Check,

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_duration_bare_number() {
        assert_eq!(parse_duration_secs("60"), Ok(60));
        assert_eq!(parse_duration_secs(" 45 "), Ok(45));
    }

    #[test]
    fn test_parse_duration_with_units() {
        assert_eq!(parse_duration_secs("90s"), Ok(90));
        assert_eq!(parse_duration_secs("2m"), Ok(120));
        assert_eq!(parse_duration_secs("1m30s"), Ok(90));
    }

    #[test]
    fn test_parse_duration_rejects_garbage() {
        assert!(parse_duration_secs("soon").is_err());
        assert!(parse_duration_secs("").is_err());
    }

    #[test]
    fn test_default_invocation_has_no_subcommand() {
        let cli = Cli::parse_from(["speakdrill"]);
        assert!(cli.command.is_none());
        assert!(cli.topic.is_none());
        assert!(cli.duration.is_none());
        assert!(!cli.once);
    }

    #[test]
    fn test_practice_flags_parse() {
        let cli = Cli::parse_from([
            "speakdrill",
            "--topic",
            "Travel",
            "--duration",
            "90s",
            "--once",
            "-v",
        ]);
        assert_eq!(cli.topic.as_deref(), Some("Travel"));
        assert_eq!(cli.duration, Some(90));
        assert!(cli.once);
        assert_eq!(cli.verbose, 1);
    }

    #[test]
    fn test_analyse_subcommand_parses() {
        let cli = Cli::parse_from(["speakdrill", "analyse", "transcript.txt", "--json"]);
        match cli.command {
            Some(Commands::Analyse { file, html, json }) => {
                assert_eq!(file, Some(PathBuf::from("transcript.txt")));
                assert!(!html);
                assert!(json);
            }
            other => panic!("expected Analyse, got {other:?}"),
        }
    }

    #[test]
    fn test_analyse_html_and_json_conflict() {
        let result =
            Cli::try_parse_from(["speakdrill", "analyse", "--html", "--json"]);
        assert!(result.is_err());
    }
}
