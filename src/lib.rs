//! speakdrill - speaking-practice trainer for the terminal
//!
//! Presents a topic prompt, runs a timed practice session against a
//! pluggable speech recognizer, and produces a heuristic feedback report:
//! word and filler counts, per-sentence notes, fluency/grammar labels, and
//! an estimated band range.

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::let_underscore_must_use)]

pub mod analysis;
pub mod app;
pub mod cli;
pub mod config;
pub mod defaults;
pub mod diagnostics;
pub mod error;
pub mod html;
pub mod output;
pub mod session;
pub mod speech;
pub mod topics;

// Core analysis surface
pub use analysis::{AnalysisReport, FluencyLabel, GrammarLabel, analyse, analyse_with_rng};

// Session and recognizer (source → session → report)
pub use session::{PracticeSession, SessionEvent, SessionHandle};
pub use speech::{CommandRecognizer, MockRecognizer, Recognizer, TranscriptUpdate};

// Error handling
pub use error::{Result, SpeakdrillError};

// Config
pub use config::Config;

/// Build version string with optional git commit hash.
///
/// Returns `"0.1.0+abc1234"` when git hash is available, `"0.1.0"` otherwise.
pub fn version_string() -> String {
    let version = env!("CARGO_PKG_VERSION");
    match option_env!("GIT_HASH") {
        Some(hash) if !hash.is_empty() => format!("{}+{}", version, hash),
        _ => version.to_string(),
    }
}
