//! HTML results fragment.
//!
//! Renders an [`AnalysisReport`] as the self-contained fragment the web
//! front end embeds in its results pane. Label and placeholder wording is
//! fixed; downstream styling keys off the `bad` and `quote` class names.

use crate::analysis::AnalysisReport;

/// Shown in the issues list when no grammar notes were produced.
pub const NO_ISSUES_PLACEHOLDER: &str = "No major issues detected";

/// Shown in place of the transcript when nothing was recognized.
pub const NO_SPEECH_PLACEHOLDER: &str = "No speech detected.";

/// Escape text for safe interpolation into the fragment.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render the annotated transcript: flagged sentences wrapped in a `bad` span.
///
/// Returns the empty string when there are no sentences; the caller decides
/// on the placeholder.
pub fn highlighted_transcript(report: &AnalysisReport) -> String {
    report
        .sentences
        .iter()
        .map(|sentence| {
            let text = escape(&sentence.text);
            if sentence.flagged {
                format!("<span class=\"bad\">{text}</span>")
            } else {
                text
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the full results fragment.
pub fn render_report(report: &AnalysisReport, duration_secs: u32) -> String {
    let issues = report.issues();
    let issues_html = if issues.is_empty() {
        format!("<li>{NO_ISSUES_PLACEHOLDER}</li>")
    } else {
        issues
            .iter()
            .map(|note| format!("<li>{}</li>", escape(note)))
            .collect::<String>()
    };

    let transcript = highlighted_transcript(report);
    let transcript_html = if transcript.is_empty() {
        NO_SPEECH_PLACEHOLDER.to_string()
    } else {
        transcript
    };

    format!(
        "<strong>Results ({duration_secs} seconds)</strong><br><br>\n\
         Words: {words}<br>\n\
         Fillers: {fillers}<br><br>\n\
         <strong>Fluency:</strong> {fluency}<br>\n\
         <strong>Grammar:</strong> {grammar}<br>\n\
         <strong>Estimated Band (Part 1):</strong> {band}<br><br>\n\
         <strong>Grammar Issues (if any):</strong>\n\
         <ul>{issues_html}</ul>\n\
         <strong>Transcript:</strong><br>{transcript_html}\n\
         <div class=\"quote\">✨ {quote}</div>",
        words = report.word_count,
        fillers = report.filler_count,
        fluency = report.fluency,
        grammar = report.grammar,
        band = report.band,
        quote = escape(&report.quote),
    )
}
