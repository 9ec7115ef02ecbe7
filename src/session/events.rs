//! JSON-serializable progress events emitted by a running session.

use serde::{Deserialize, Serialize};

/// Events the session emits for display while it runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// Countdown display update (counts from the full duration down to 0)
    Countdown { seconds_left: i64 },
    /// Recognition started or stopped
    ListeningChanged { listening: bool },
    /// The transcript buffer was rebuilt from a recognition update
    TranscriptUpdate { text: String },
    /// The recognizer could not be started; the session continues and will
    /// analyse an empty transcript
    RecognizerUnavailable { message: String },
}

impl SessionEvent {
    /// Serialize event to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize event from JSON string.
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}
