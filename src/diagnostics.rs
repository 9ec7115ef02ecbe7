//! System diagnostics and dependency checking.
//!
//! Verifies that the configured recognizer command is installed and
//! reachable before a session depends on it.

use crate::config::Config;
use std::process::Command;

const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Result of a dependency check.
#[derive(Debug, PartialEq)]
pub enum CheckResult {
    /// Tool is installed and working
    Ok,
    /// Tool is not found
    NotFound,
    /// Tool is found but has issues
    Warning(String),
}

/// Check if a command exists and is executable.
///
/// Probes with `--help`; a non-zero exit is tolerated (many recognizer
/// bridges exit non-zero on `--help` but still work).
pub fn check_command(command: &str) -> CheckResult {
    match Command::new(command).arg("--help").output() {
        Ok(_) => CheckResult::Ok,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => CheckResult::NotFound,
        Err(e) => CheckResult::Warning(format!("Error checking '{}': {}", command, e)),
    }
}

/// Check the configured recognizer capability.
///
/// An unset command is reported as `NotFound` — sessions still run, but
/// they analyse an empty transcript.
pub fn check_recognizer(config: &Config) -> CheckResult {
    match config.recognizer.command.as_deref() {
        Some(command) => check_command(command),
        None => CheckResult::NotFound,
    }
}

/// Print a dependency report for the current configuration.
pub fn check_dependencies(config: &Config) {
    println!("speakdrill dependency check");
    println!();

    match config.recognizer.command.as_deref() {
        None => {
            println!(
                "{YELLOW}!{RESET} recognizer: no command configured \
                 (sessions will analyse an empty transcript)"
            );
            println!("  Set [recognizer].command in the config file or SPEAKDRILL_RECOGNIZER.");
        }
        Some(command) => match check_command(command) {
            CheckResult::Ok => {
                println!("{GREEN}✓{RESET} recognizer: '{command}' found");
            }
            CheckResult::NotFound => {
                println!("{RED}✗{RESET} recognizer: '{command}' not found in PATH");
            }
            CheckResult::Warning(message) => {
                println!("{YELLOW}!{RESET} recognizer: {message}");
            }
        },
    }

    println!();
    println!("language: {}", config.recognizer.language);
    println!("session duration: {}s", config.session.duration_secs);
}
