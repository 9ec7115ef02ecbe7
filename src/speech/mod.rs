//! Speech recognition capability, treated as an opaque collaborator.
//!
//! The session layer only sees the [`Recognizer`] trait: start a continuous
//! recognition stream, receive transcript updates, stop. How speech is
//! actually captured is an implementation detail behind the trait.

mod command;
mod recognizer;

pub use command::CommandRecognizer;
pub use recognizer::{MockRecognizer, Recognizer, TranscriptUpdate, UnconfiguredRecognizer};
