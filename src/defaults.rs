//! Default configuration constants for speakdrill.
//!
//! This module provides shared constants used across different configuration
//! types to ensure consistency and eliminate duplication.

/// Default practice session duration in seconds.
///
/// One minute matches the short-answer speaking format the trainer drills:
/// long enough for a few connected sentences, short enough to repeat often.
pub const SESSION_SECS: u32 = 60;

/// Countdown tick interval in milliseconds.
///
/// The session displays the counter once per tick. Tests shrink this via
/// `PracticeSession::with_tick_interval` to run in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 1000;

/// Default language tag passed to the recognizer.
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Default practice topic name. Must exist in the topic catalog.
pub const DEFAULT_TOPIC: &str = "Hometown";

/// Hesitation markers counted as fillers, matched as whole words,
/// case-insensitive.
pub const FILLER_WORDS: &[&str] = &["um", "uh", "erm", "like"];

/// Simple connectors whose overuse within one sentence is flagged.
pub const CONNECTOR_WORDS: &[&str] = &["and", "so"];

/// Sentences with fewer words than this are flagged as short
/// (only when the transcript has more than two sentences overall).
pub const SHORT_SENTENCE_WORDS: usize = 3;

/// Sentences with more words than this are flagged as very long.
pub const LONG_SENTENCE_WORDS: usize = 40;

/// More than this many connector words in one sentence triggers the
/// overuse note.
pub const CONNECTOR_LIMIT: usize = 6;

/// Transcripts below this word count are labeled Basic fluency.
pub const BASIC_WORD_LIMIT: usize = 80;

/// Transcripts below this word count (and at or above the Basic limit)
/// are labeled Good fluency; at or above, Strong.
pub const GOOD_WORD_LIMIT: usize = 130;

/// More than this many fillers forces the Basic fluency label regardless
/// of word count.
pub const FILLER_LIMIT: usize = 12;

/// More than this many raw grammar notes (duplicates included) downgrades
/// the grammar label to Needs Improvement.
pub const GRAMMAR_NOTE_LIMIT: usize = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_limits_are_ordered() {
        assert!(
            BASIC_WORD_LIMIT < GOOD_WORD_LIMIT,
            "fluency thresholds must be strictly increasing"
        );
    }

    #[test]
    fn vocabularies_are_lowercase() {
        for word in FILLER_WORDS.iter().chain(CONNECTOR_WORDS) {
            assert_eq!(
                *word,
                word.to_lowercase(),
                "vocabulary entries are matched lowercased"
            );
        }
    }
}
