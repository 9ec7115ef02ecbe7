use crate::error::{Result, SpeakdrillError};
use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// One recognition update: the full list of finalized segments observed
/// since recognition started.
///
/// Updates are cumulative snapshots, not deltas. The transcript buffer is
/// rebuilt from the whole list on every update, so the last update received
/// before stop wins.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptUpdate {
    pub segments: Vec<String>,
}

impl TranscriptUpdate {
    pub fn new(segments: Vec<String>) -> Self {
        Self { segments }
    }

    /// Rebuild the transcript buffer: all segments, space-joined.
    pub fn text(&self) -> String {
        self.segments.join(" ")
    }
}

/// Trait for continuous speech recognition.
///
/// This trait allows swapping implementations (external recognizer process
/// vs mock).
#[async_trait]
pub trait Recognizer: Send {
    /// Begin continuous recognition.
    ///
    /// # Returns
    /// A stream of transcript updates. Every update carries the full segment
    /// list observed so far. The channel closes when recognition ends on its
    /// own; otherwise updates flow until [`Recognizer::stop`].
    async fn start(&mut self) -> Result<mpsc::Receiver<TranscriptUpdate>>;

    /// Stop recognition. Updates already queued may still be drained.
    async fn stop(&mut self) -> Result<()>;

    /// Implementation name for diagnostics.
    fn name(&self) -> &str;
}

/// Implement Recognizer for Box<dyn Recognizer> so call sites can pick an
/// implementation at runtime.
#[async_trait]
impl Recognizer for Box<dyn Recognizer> {
    async fn start(&mut self) -> Result<mpsc::Receiver<TranscriptUpdate>> {
        (**self).start().await
    }

    async fn stop(&mut self) -> Result<()> {
        (**self).stop().await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Placeholder used when no recognizer command is configured.
///
/// `start` fails with `RecognizerUnavailable`; the session reports that and
/// runs the countdown with an empty transcript.
#[derive(Debug, Default)]
pub struct UnconfiguredRecognizer;

#[async_trait]
impl Recognizer for UnconfiguredRecognizer {
    async fn start(&mut self) -> Result<mpsc::Receiver<TranscriptUpdate>> {
        Err(SpeakdrillError::RecognizerUnavailable {
            message: "no recognizer command configured".to_string(),
        })
    }

    async fn stop(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "unconfigured"
    }
}

/// Mock recognizer for testing.
///
/// Plays back a scripted sequence of updates on a fixed interval.
#[derive(Debug)]
pub struct MockRecognizer {
    name: String,
    script: Vec<TranscriptUpdate>,
    update_interval: Duration,
    should_fail: bool,
    task: Option<JoinHandle<()>>,
}

impl MockRecognizer {
    /// Create a new mock recognizer with an empty script.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            script: Vec::new(),
            update_interval: Duration::from_millis(1),
            should_fail: false,
            task: None,
        }
    }

    /// Configure the scripted updates to play back.
    pub fn with_script(mut self, script: Vec<TranscriptUpdate>) -> Self {
        self.script = script;
        self
    }

    /// Configure the delay between scripted updates.
    pub fn with_update_interval(mut self, interval: Duration) -> Self {
        self.update_interval = interval;
        self
    }

    /// Configure the mock to fail on start.
    pub fn with_failure(mut self) -> Self {
        self.should_fail = true;
        self
    }
}

#[async_trait]
impl Recognizer for MockRecognizer {
    async fn start(&mut self) -> Result<mpsc::Receiver<TranscriptUpdate>> {
        if self.should_fail {
            return Err(SpeakdrillError::RecognizerUnavailable {
                message: "mock recognizer configured to fail".to_string(),
            });
        }

        let (tx, rx) = mpsc::channel(16);
        let script = self.script.clone();
        let interval = self.update_interval;

        self.task = Some(tokio::spawn(async move {
            for update in script {
                tokio::time::sleep(interval).await;
                if tx.send(update).await.is_err() {
                    break;
                }
            }
        }));

        Ok(rx)
    }

    async fn stop(&mut self) -> Result<()> {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_text_joins_segments_with_spaces() {
        let update = TranscriptUpdate::new(vec![
            "hello there".to_string(),
            "how are you".to_string(),
        ]);
        assert_eq!(update.text(), "hello there how are you");
    }

    #[test]
    fn test_update_text_empty() {
        assert_eq!(TranscriptUpdate::new(vec![]).text(), "");
    }

    #[tokio::test]
    async fn test_mock_recognizer_plays_back_script() {
        let script = vec![
            TranscriptUpdate::new(vec!["one".to_string()]),
            TranscriptUpdate::new(vec!["one".to_string(), "two".to_string()]),
        ];
        let mut recognizer = MockRecognizer::new("mock").with_script(script.clone());

        let mut rx = recognizer.start().await.expect("start should succeed");
        let mut received = Vec::new();
        while let Some(update) = rx.recv().await {
            received.push(update);
        }
        assert_eq!(received, script);
    }

    #[tokio::test]
    async fn test_mock_recognizer_fails_when_configured() {
        let mut recognizer = MockRecognizer::new("mock").with_failure();
        let result = recognizer.start().await;
        match result {
            Err(SpeakdrillError::RecognizerUnavailable { message }) => {
                assert_eq!(message, "mock recognizer configured to fail");
            }
            other => panic!("expected RecognizerUnavailable, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_mock_recognizer_stop_is_idempotent() {
        let mut recognizer = MockRecognizer::new("mock");
        let _rx = recognizer.start().await.expect("start should succeed");
        assert!(recognizer.stop().await.is_ok());
        assert!(recognizer.stop().await.is_ok());
    }

    #[tokio::test]
    async fn test_unconfigured_recognizer_reports_unavailable() {
        let mut recognizer = UnconfiguredRecognizer;
        assert!(matches!(
            recognizer.start().await,
            Err(SpeakdrillError::RecognizerUnavailable { .. })
        ));
        assert!(recognizer.stop().await.is_ok());
    }

    #[tokio::test]
    async fn test_recognizer_trait_is_object_safe() {
        let mut recognizer: Box<dyn Recognizer> = Box::new(
            MockRecognizer::new("boxed").with_script(vec![TranscriptUpdate::new(vec![
                "boxed test".to_string(),
            ])]),
        );
        assert_eq!(recognizer.name(), "boxed");

        let mut rx = recognizer.start().await.expect("start should succeed");
        let update = rx.recv().await.expect("one update expected");
        assert_eq!(update.text(), "boxed test");
    }
}
