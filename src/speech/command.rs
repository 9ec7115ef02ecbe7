//! External recognizer process adapter.
//!
//! The platform speech capability is an external program. The contract is
//! small: it is launched with `--language <tag>`, prints one finalized
//! segment per stdout line, and keeps running until killed. Anything that
//! honors this (a cloud STT bridge, a local model wrapper, `cat` in a demo)
//! can serve as the recognizer.

use crate::error::{Result, SpeakdrillError};
use crate::speech::recognizer::{Recognizer, TranscriptUpdate};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::{Child, Command};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Recognizer backed by an external process streaming segments on stdout.
pub struct CommandRecognizer {
    command: String,
    language: String,
    child: Option<Child>,
    reader_task: Option<JoinHandle<()>>,
}

impl CommandRecognizer {
    /// Create a recognizer for the given command and language tag.
    pub fn new(command: &str, language: &str) -> Self {
        Self {
            command: command.to_string(),
            language: language.to_string(),
            child: None,
            reader_task: None,
        }
    }
}

#[async_trait]
impl Recognizer for CommandRecognizer {
    async fn start(&mut self) -> Result<mpsc::Receiver<TranscriptUpdate>> {
        let mut child = Command::new(&self.command)
            .arg("--language")
            .arg(&self.language)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| SpeakdrillError::RecognizerUnavailable {
                message: format!("failed to launch '{}': {}", self.command, e),
            })?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| SpeakdrillError::RecognizerFailed {
                message: format!("no stdout pipe from '{}'", self.command),
            })?;

        let (tx, rx) = mpsc::channel(16);

        self.reader_task = Some(tokio::spawn(async move {
            let mut lines = BufReader::new(stdout).lines();
            let mut segments: Vec<String> = Vec::new();

            while let Ok(Some(line)) = lines.next_line().await {
                let line = line.trim().to_string();
                if line.is_empty() {
                    continue;
                }
                segments.push(line);
                // Cumulative snapshot: the receiver rebuilds the whole
                // buffer from every update.
                let update = TranscriptUpdate::new(segments.clone());
                if tx.send(update).await.is_err() {
                    break;
                }
            }
        }));

        self.child = Some(child);
        Ok(rx)
    }

    async fn stop(&mut self) -> Result<()> {
        if let Some(task) = self.reader_task.take() {
            task.abort();
        }
        if let Some(mut child) = self.child.take() {
            child
                .kill()
                .await
                .map_err(|e| SpeakdrillError::RecognizerFailed {
                    message: format!("failed to stop '{}': {}", self.command, e),
                })?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        &self.command
    }
}
