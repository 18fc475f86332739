use std::path::Path;
use std::sync::Arc;

use crate::application::ports::{
    AudioDecoder, DecodeError, DecodeWarning, TranscriptionEngine, TranscriptionError,
};

/// Result of a completed pipeline run: the recognized text plus any decode
/// warnings the caller should surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    pub text: String,
    pub warnings: Vec<DecodeWarning>,
    pub audio_duration_secs: f64,
}

pub struct TranscriptionService<D>
where
    D: AudioDecoder,
{
    decoder: Arc<D>,
    engine: Arc<dyn TranscriptionEngine>,
}

impl<D> TranscriptionService<D>
where
    D: AudioDecoder,
{
    pub fn new(decoder: Arc<D>, engine: Arc<dyn TranscriptionEngine>) -> Self {
        Self { decoder, engine }
    }

    pub async fn transcribe_file(
        &self,
        path: &Path,
    ) -> Result<Transcript, TranscriptionPipelineError> {
        let data = tokio::fs::read(path).await?;
        tracing::debug!(path = %path.display(), bytes = data.len(), "Read audio file");
        self.transcribe_bytes(&data).await
    }

    pub async fn transcribe_bytes(
        &self,
        data: &[u8],
    ) -> Result<Transcript, TranscriptionPipelineError> {
        let decoded = self
            .decoder
            .decode(data)
            .map_err(TranscriptionPipelineError::Decoding)?;

        for warning in &decoded.warnings {
            match warning {
                DecodeWarning::NonNativeSampleRate { declared } => {
                    tracing::warn!(
                        declared,
                        "Audio is not at the model's native sample rate; recognition quality may degrade"
                    );
                }
            }
        }

        if decoded.buffer.is_empty() {
            return Err(TranscriptionPipelineError::EmptyResult);
        }

        let duration_secs = decoded.buffer.duration_secs();
        let text = self
            .engine
            .transcribe(&decoded.buffer)
            .await
            .map_err(TranscriptionPipelineError::Engine)?;

        tracing::info!(
            chars = text.len(),
            duration_secs,
            "Transcription completed"
        );

        Ok(Transcript {
            text,
            warnings: decoded.warnings,
            audio_duration_secs: duration_secs,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionPipelineError {
    #[error("failed to read audio source: {0}")]
    Io(#[from] std::io::Error),
    #[error("audio decoding failed: {0}")]
    Decoding(#[source] DecodeError),
    #[error("decoded audio contains no samples")]
    EmptyResult,
    #[error("transcription engine failed: {0}")]
    Engine(#[source] TranscriptionError),
}
