//! Practice topic catalog.
//!
//! A fixed, read-only list of speaking prompts. Each topic pairs a question
//! with a hint nudging the speaker toward one minute of connected speech.

/// A speaking-practice prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct Topic {
    /// Topic identifier shown in the selector (e.g., "Hometown")
    pub name: &'static str,
    /// The question the speaker answers
    pub question: &'static str,
    /// A hint with directions worth covering in the answer
    pub hint: &'static str,
}

/// Catalog of practice topics.
pub const TOPICS: &[Topic] = &[
    Topic {
        name: "Hometown",
        question: "Do you like your hometown?",
        hint: "Talk about its location, culture, or your favorite places.",
    },
    Topic {
        name: "Study",
        question: "What subject are you studying?",
        hint: "Mention your favorite topics, why you chose it, and any interesting aspects.",
    },
    Topic {
        name: "Free Time",
        question: "What do you usually do in your free time?",
        hint: "Talk about hobbies, sports, reading, or social activities.",
    },
    Topic {
        name: "Music",
        question: "What kind of music do you enjoy?",
        hint: "Mention genres, artists, concerts, or when you listen to music.",
    },
    Topic {
        name: "Food",
        question: "What is your favourite food?",
        hint: "Describe the taste, where you eat it, or why you like it.",
    },
    Topic {
        name: "Technology",
        question: "How often do you use your phone?",
        hint: "Talk about apps, social media, or reasons for using technology.",
    },
    Topic {
        name: "Friends",
        question: "Do you spend a lot of time with your friends?",
        hint: "Mention activities, frequency, and why it's important.",
    },
    Topic {
        name: "Travel",
        question: "Do you like travelling?",
        hint: "Talk about places you've been, dream destinations, or experiences.",
    },
];

/// Find a topic by name (case-insensitive).
pub fn get_topic(name: &str) -> Option<&'static Topic> {
    TOPICS.iter().find(|t| t.name.eq_ignore_ascii_case(name))
}

/// Get all topics in catalog order.
pub fn list_topics() -> &'static [Topic] {
    TOPICS
}

/// Get the default topic.
pub fn default_topic() -> &'static Topic {
    &TOPICS[0]
}
