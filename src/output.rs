//! Shared event and report rendering for terminal output.
//!
//! Session events go to stderr (live countdown line, state changes); the
//! final report goes to stdout.

use crate::analysis::{AnalysisReport, FluencyLabel, GrammarLabel};
use crate::html::{NO_ISSUES_PLACEHOLDER, NO_SPEECH_PLACEHOLDER};
use crate::session::SessionEvent;
use std::io::{self, Write};

const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Clear the current terminal line (replaces the countdown line).
pub fn clear_line() {
    eprint!("\r\x1b[2K");
}

/// Return the ANSI color code for a fluency label.
fn fluency_color(fluency: FluencyLabel) -> &'static str {
    match fluency {
        FluencyLabel::Basic => YELLOW,
        FluencyLabel::Good => "", // default terminal color
        FluencyLabel::Strong => GREEN,
    }
}

/// Return the ANSI color code for a grammar label.
fn grammar_color(grammar: GrammarLabel) -> &'static str {
    match grammar {
        GrammarLabel::Good => GREEN,
        GrammarLabel::NeedsImprovement => YELLOW,
    }
}

/// Render a session event to stderr.
pub fn render_event(event: &SessionEvent) {
    match event {
        SessionEvent::Countdown { seconds_left } => {
            eprint!("\r\x1b[2K⏱ {seconds_left}s");
            io::stderr().flush().ok();
        }
        SessionEvent::ListeningChanged { listening } => {
            clear_line();
            if *listening {
                eprintln!("Listening...");
            } else {
                eprintln!("Done");
            }
        }
        SessionEvent::TranscriptUpdate { text } => {
            clear_line();
            eprintln!("{DIM}{text}{RESET}");
        }
        SessionEvent::RecognizerUnavailable { message } => {
            clear_line();
            eprintln!("{DIM}{message} (continuing without speech input){RESET}");
        }
    }
}

/// Render a report to stdout.
pub fn render_report(report: &AnalysisReport, duration_secs: u32) {
    println!();
    println!("{BOLD}Results ({duration_secs} seconds){RESET}");
    println!();
    println!("Words: {}", report.word_count);
    println!("Fillers: {}", report.filler_count);
    println!();
    println!(
        "Fluency: {}{}{RESET}",
        fluency_color(report.fluency),
        report.fluency
    );
    println!(
        "Grammar: {}{}{RESET}",
        grammar_color(report.grammar),
        report.grammar
    );
    println!("Estimated Band (Part 1): {BOLD}{}{RESET}", report.band);
    println!();
    println!("Grammar Issues (if any):");
    let issues = report.issues();
    if issues.is_empty() {
        println!("  {DIM}{NO_ISSUES_PLACEHOLDER}{RESET}");
    } else {
        for note in issues {
            println!("  - {note}");
        }
    }
    println!();
    println!("Transcript:");
    if report.sentences.is_empty() {
        println!("  {DIM}{NO_SPEECH_PLACEHOLDER}{RESET}");
    } else {
        let annotated = report
            .sentences
            .iter()
            .map(|sentence| {
                if sentence.flagged {
                    format!("{RED}{}{RESET}", sentence.text)
                } else {
                    sentence.text.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        println!("  {annotated}");
    }
    println!();
    println!("{DIM}✨ {}{RESET}", report.quote);
}
