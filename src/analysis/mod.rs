//! Transcript analysis: the deterministic feedback core.
//!
//! [`analyse`] maps a raw transcript string to an [`AnalysisReport`]. It is
//! total — any string input, including the empty string, produces a report —
//! and pure except for the quote pick, which is injectable through
//! [`analyse_with_rng`].

pub mod quotes;
mod report;

pub use report::{AnalysisReport, FluencyLabel, GrammarLabel, SentenceAnnotation, band_estimate};

use crate::defaults;
use rand::Rng;

/// Note emitted for a sentence shorter than the word floor.
pub const SHORT_SENTENCE_NOTE: &str = "Short sentence detected.";

/// Note emitted for a sentence longer than the word ceiling.
pub const LONG_SENTENCE_NOTE: &str = "Very long sentence detected.";

/// Note emitted when a sentence leans too hard on and/so.
pub const CONNECTOR_NOTE: &str = "Overuse of simple connectors (and / so).";

/// Analyse a transcript with the process RNG picking the quote.
pub fn analyse(transcript: &str) -> AnalysisReport {
    analyse_with_rng(transcript, &mut rand::thread_rng())
}

/// Analyse a transcript with an explicit RNG for the quote pick.
///
/// Everything except the quote is a deterministic function of the input.
pub fn analyse_with_rng<R: Rng + ?Sized>(transcript: &str, rng: &mut R) -> AnalysisReport {
    let word_count = transcript.split_whitespace().count();
    let filler_count = count_whole_words(transcript, defaults::FILLER_WORDS);

    let segments = split_sentences(transcript);
    let total_sentences = segments.len();

    let mut grammar_notes: Vec<String> = Vec::new();
    let mut sentences: Vec<SentenceAnnotation> = Vec::with_capacity(total_sentences);

    for segment in segments {
        let words = segment.split_whitespace().count();
        let mut flagged = false;

        if words < defaults::SHORT_SENTENCE_WORDS && total_sentences > 2 {
            grammar_notes.push(SHORT_SENTENCE_NOTE.to_string());
            flagged = true;
        }
        if words > defaults::LONG_SENTENCE_WORDS {
            grammar_notes.push(LONG_SENTENCE_NOTE.to_string());
            flagged = true;
        }
        if count_whole_words(segment, defaults::CONNECTOR_WORDS) > defaults::CONNECTOR_LIMIT {
            grammar_notes.push(CONNECTOR_NOTE.to_string());
            flagged = true;
        }

        sentences.push(SentenceAnnotation {
            text: format!("{segment}."),
            flagged,
        });
    }

    // The filler override is checked first: heavy hesitation caps the label
    // at Basic no matter how many words were produced.
    let fluency = if word_count < defaults::BASIC_WORD_LIMIT
        || filler_count > defaults::FILLER_LIMIT
    {
        FluencyLabel::Basic
    } else if word_count < defaults::GOOD_WORD_LIMIT {
        FluencyLabel::Good
    } else {
        FluencyLabel::Strong
    };

    // Thresholds on the raw note count, duplicates included.
    let grammar = if grammar_notes.len() > defaults::GRAMMAR_NOTE_LIMIT {
        GrammarLabel::NeedsImprovement
    } else {
        GrammarLabel::Good
    };

    let band = band_estimate(fluency, grammar).to_string();
    let quote = quotes::QUOTES[rng.gen_range(0..quotes::QUOTES.len())].to_string();

    AnalysisReport {
        word_count,
        filler_count,
        grammar_notes,
        sentences,
        fluency,
        grammar,
        band,
        quote,
    }
}

/// Split a transcript into sentence segments on `.`, `!`, `?`.
///
/// Segments that are empty after trimming are dropped; the surviving
/// segments keep their original text (whitespace included) and order.
fn split_sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .collect()
}

/// Word characters for boundary detection, mirroring `\b` semantics.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Count whole-word, case-insensitive occurrences of any of `words` in `text`.
///
/// A match must sit on word boundaries on both sides: the preceding and
/// following characters (if any) must not be word characters. Matches are
/// non-overlapping by construction — the scan resumes after a matched word.
fn count_whole_words(text: &str, words: &[&str]) -> usize {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    let mut count = 0;
    let mut i = 0;

    while i < len {
        let mut matched_len = 0;

        if i == 0 || !is_word_char(chars[i - 1]) {
            for word in words {
                let wlen = word.chars().count();
                if i + wlen > len {
                    continue;
                }
                let text_matches = chars[i..i + wlen]
                    .iter()
                    .zip(word.chars())
                    .all(|(c, w)| c.to_ascii_lowercase() == w);
                if !text_matches {
                    continue;
                }
                if i + wlen < len && is_word_char(chars[i + wlen]) {
                    continue;
                }
                matched_len = wlen;
                break;
            }
        }

        if matched_len > 0 {
            count += 1;
            i += matched_len;
        } else {
            i += 1;
        }
    }

    count
}
