//! Report types produced by transcript analysis.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fluency label derived from word and filler counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FluencyLabel {
    Basic,
    Good,
    Strong,
}

impl fmt::Display for FluencyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FluencyLabel::Basic => write!(f, "Basic"),
            FluencyLabel::Good => write!(f, "Good"),
            FluencyLabel::Strong => write!(f, "Strong"),
        }
    }
}

/// Grammar label derived from the raw note count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrammarLabel {
    Good,
    NeedsImprovement,
}

impl fmt::Display for GrammarLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarLabel::Good => write!(f, "Good"),
            GrammarLabel::NeedsImprovement => write!(f, "Needs Improvement"),
        }
    }
}

/// One sentence of the transcript with its defect flag.
///
/// `text` is the original segment with a trailing period restored; `flagged`
/// is true when any per-sentence rule fired on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceAnnotation {
    pub text: String,
    pub flagged: bool,
}

/// Structured feedback for one transcript.
///
/// Created fresh per analysis call and never mutated afterwards.
/// `grammar_notes` keeps raw rule hits in order, duplicates included — the
/// grammar label thresholds on this raw count, while [`AnalysisReport::issues`]
/// deduplicates for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Number of non-empty whitespace-delimited tokens in the transcript
    pub word_count: usize,
    /// Whole-word filler matches (um, uh, erm, like), case-insensitive
    pub filler_count: usize,
    /// Raw per-sentence rule hits, in sentence order, duplicates retained
    pub grammar_notes: Vec<String>,
    /// One annotation per non-empty sentence segment, original order
    pub sentences: Vec<SentenceAnnotation>,
    pub fluency: FluencyLabel,
    pub grammar: GrammarLabel,
    /// Estimated band range from the fixed (fluency, grammar) table
    pub band: String,
    /// One encouragement quote from the fixed pool
    pub quote: String,
}

impl AnalysisReport {
    /// Displayed issue list: order-preserving, first-occurrence dedup of the
    /// raw notes.
    pub fn issues(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for note in &self.grammar_notes {
            if !seen.contains(&note.as_str()) {
                seen.push(note.as_str());
            }
        }
        seen
    }
}

/// Band estimate lookup.
///
/// Total over all six label pairs; the range strings are fixed and not
/// derived from any certified rubric.
pub fn band_estimate(fluency: FluencyLabel, grammar: GrammarLabel) -> &'static str {
    match (fluency, grammar) {
        (FluencyLabel::Basic, GrammarLabel::NeedsImprovement) => "5.5 – 6",
        (FluencyLabel::Basic, GrammarLabel::Good) => "6 – 6.5",
        (FluencyLabel::Good, GrammarLabel::NeedsImprovement) => "6.5 – 7",
        (FluencyLabel::Good, GrammarLabel::Good) => "7 – 7.5",
        (FluencyLabel::Strong, GrammarLabel::NeedsImprovement) => "7 – 7.5",
        (FluencyLabel::Strong, GrammarLabel::Good) => "7.5 – 8",
    }
}
