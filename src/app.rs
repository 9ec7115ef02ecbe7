//! Speaking-practice application entry points.
//!
//! Orchestrates the complete flow:
//! prompt → record → analyse → render

use crate::analysis::{self, AnalysisReport};
use crate::config::Config;
use crate::error::{Result, SpeakdrillError};
use crate::session::{PracticeSession, SessionEvent};
use crate::speech::{CommandRecognizer, Recognizer, UnconfiguredRecognizer};
use crate::topics::{self, Topic};
use crate::{html, output};
use std::io::Read;
use std::path::PathBuf;
use tokio::sync::mpsc;

/// Run the practice command: prompt → countdown/record → analyse → render.
///
/// # Arguments
/// * `config` - Base configuration (can be overridden by CLI args)
/// * `topic` - Optional topic override from CLI
/// * `duration` - Optional duration override (seconds) from CLI
/// * `language` - Optional language override from CLI
/// * `recognizer` - Optional recognizer command override from CLI
/// * `quiet` - Suppress status messages and the live countdown
/// * `verbosity` - Verbosity level (0=default, 1=live transcript, 2=diagnostics)
/// * `once` - Exit after one session (default: prompt to retry)
#[allow(clippy::too_many_arguments)]
pub async fn run_practice_command(
    mut config: Config,
    topic: Option<String>,
    duration: Option<u32>,
    language: Option<String>,
    recognizer: Option<String>,
    quiet: bool,
    verbosity: u8,
    once: bool,
) -> Result<()> {
    // Apply CLI overrides
    if let Some(t) = topic {
        config.practice.topic = t;
    }
    if let Some(d) = duration {
        config.session.duration_secs = d;
    }
    if let Some(l) = language {
        config.recognizer.language = l;
    }
    if let Some(r) = recognizer {
        config.recognizer.command = Some(r);
    }
    config.validate()?;

    let topic = topics::get_topic(&config.practice.topic).ok_or_else(|| {
        SpeakdrillError::TopicNotFound {
            name: config.practice.topic.clone(),
        }
    })?;

    if verbosity >= 2 {
        eprintln!(
            "recognizer: {}",
            config.recognizer.command.as_deref().unwrap_or("(none)")
        );
        eprintln!("language: {}", config.recognizer.language);
    }

    loop {
        show_prompt(topic, quiet);

        let transcript = run_one_session(&config, quiet, verbosity).await?;
        let report = analysis::analyse(&transcript);
        output::render_report(&report, config.session.duration_secs);

        if once {
            break;
        }
        if !prompt_retry().await? {
            break;
        }
        // Retry: the next loop iteration starts a fresh session with an
        // empty transcript buffer.
    }

    Ok(())
}

/// Run one countdown/recording session and return the final transcript.
async fn run_one_session(config: &Config, quiet: bool, verbosity: u8) -> Result<String> {
    let recognizer: Box<dyn Recognizer> = match config.recognizer.command.as_deref() {
        Some(command) => Box::new(CommandRecognizer::new(command, &config.recognizer.language)),
        None => Box::new(UnconfiguredRecognizer),
    };

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let renderer = tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            if quiet {
                continue;
            }
            if matches!(event, SessionEvent::TranscriptUpdate { .. }) && verbosity == 0 {
                continue;
            }
            output::render_event(&event);
        }
    });

    let session = PracticeSession::new(recognizer)
        .with_duration_secs(config.session.duration_secs)
        .with_event_sender(event_tx);

    let transcript = session.run().await?;

    // The session (and its sender) is gone; let the renderer drain.
    renderer.await.ok();
    if !quiet {
        output::clear_line();
    }

    Ok(transcript)
}

/// Show the question and hint for a topic.
fn show_prompt(topic: &Topic, quiet: bool) {
    if quiet {
        return;
    }
    eprintln!();
    eprintln!("{}", topic.question);
    eprintln!("Hint: {}", topic.hint);
    eprintln!();
}

/// Ask whether to run another session. Returns false to quit.
async fn prompt_retry() -> Result<bool> {
    eprint!("Press Enter to retry, q to quit: ");
    let line = tokio::task::spawn_blocking(|| {
        let mut line = String::new();
        std::io::stdin().read_line(&mut line).map(|_| line)
    })
    .await
    .map_err(|e| SpeakdrillError::Other(format!("stdin task failed: {e}")))??;

    Ok(!line.trim().eq_ignore_ascii_case("q"))
}

/// Run the analyse command: read a transcript, analyse it, render the report.
///
/// Reads from `file` when given, stdin otherwise (pipe mode).
pub async fn run_analyse_command(
    config: Config,
    file: Option<PathBuf>,
    as_html: bool,
    as_json: bool,
) -> Result<()> {
    let transcript = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let report = analysis::analyse(&transcript);
    print_report(&report, &config, as_html, as_json)
}

fn print_report(report: &AnalysisReport, config: &Config, as_html: bool, as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else if as_html {
        println!("{}", html::render_report(report, config.session.duration_secs));
    } else {
        output::render_report(report, config.session.duration_secs);
    }
    Ok(())
}
