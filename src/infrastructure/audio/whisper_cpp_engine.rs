use async_trait::async_trait;
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::SampleBuffer;

/// Local whisper.cpp engine. The context owns the loaded model for the
/// lifetime of the engine and releases it on drop.
pub struct WhisperCppEngine {
    context: WhisperContext,
}

impl WhisperCppEngine {
    pub fn new(model_path: &str) -> Result<Self, TranscriptionError> {
        tracing::info!(model = model_path, "Loading whisper.cpp model");

        let context =
            WhisperContext::new_with_params(model_path, WhisperContextParameters::default())
                .map_err(|e| TranscriptionError::ModelLoadFailed(e.to_string()))?;

        Ok(Self { context })
    }
}

#[async_trait]
impl TranscriptionEngine for WhisperCppEngine {
    async fn transcribe(&self, audio: &SampleBuffer) -> Result<String, TranscriptionError> {
        let mut state = self
            .context
            .create_state()
            .map_err(|e| TranscriptionError::TranscriptionFailed(format!("state: {}", e)))?;

        let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 1 });
        params.set_print_special(false);
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);

        state
            .full(params, audio.samples())
            .map_err(|e| TranscriptionError::TranscriptionFailed(format!("inference: {}", e)))?;

        let segment_count = state
            .full_n_segments()
            .map_err(|e| TranscriptionError::TranscriptionFailed(format!("segments: {}", e)))?;

        let mut segments = Vec::with_capacity(segment_count as usize);
        for i in 0..segment_count {
            let text = state
                .full_get_segment_text(i)
                .map_err(|e| TranscriptionError::TranscriptionFailed(format!("segment {}: {}", i, e)))?;
            let text = text.trim().to_string();
            if !text.is_empty() {
                segments.push(text);
            }
        }

        let transcript = segments.join(" ");
        tracing::info!(
            segments = segments.len(),
            chars = transcript.len(),
            "whisper.cpp transcription completed"
        );

        Ok(transcript)
    }
}
