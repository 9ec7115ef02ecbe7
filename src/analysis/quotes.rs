//! Encouragement quotes appended to every report.

/// Fixed pool of encouragement lines. One is chosen uniformly at random
/// per report (the only non-deterministic part of analysis).
pub const QUOTES: &[&str] = &[
    "You're improving every time you speak.",
    "Mistakes are part of fluency.",
    "Confidence matters more than perfection.",
    "IELTS rewards communication, not perfection.",
    "You're building real speaking confidence.",
];
