use async_trait::async_trait;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::SampleBuffer;

/// Engine that reports the shape of the audio it was handed instead of
/// running a model. Used in tests and as a wiring check.
pub struct MockTranscriptionEngine;

#[async_trait]
impl TranscriptionEngine for MockTranscriptionEngine {
    async fn transcribe(&self, audio: &SampleBuffer) -> Result<String, TranscriptionError> {
        Ok(format!(
            "[mock transcript: {} samples at {} Hz]",
            audio.len(),
            audio.sample_rate()
        ))
    }
}
