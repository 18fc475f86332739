use std::sync::Arc;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::presentation::config::TranscriptionProvider;

use super::mock_transcription_engine::MockTranscriptionEngine;
use super::openai_whisper_engine::OpenAiWhisperEngine;
#[cfg(feature = "whisper-cpp")]
use super::whisper_cpp_engine::WhisperCppEngine;

pub struct TranscriptionEngineFactory;

impl TranscriptionEngineFactory {
    pub fn create(
        provider: TranscriptionProvider,
        model: &str,
        api_key: Option<String>,
        base_url: Option<String>,
    ) -> Result<Arc<dyn TranscriptionEngine>, TranscriptionError> {
        match provider {
            #[cfg(feature = "whisper-cpp")]
            TranscriptionProvider::Local => {
                let engine = WhisperCppEngine::new(model)?;
                Ok(Arc::new(engine))
            }
            #[cfg(not(feature = "whisper-cpp"))]
            TranscriptionProvider::Local => Err(TranscriptionError::ModelLoadFailed(
                "built without the whisper-cpp feature; no local engine available".to_string(),
            )),
            TranscriptionProvider::OpenAi => {
                let key = api_key.filter(|k| !k.is_empty()).ok_or_else(|| {
                    TranscriptionError::ModelLoadFailed(
                        "API key required for the Whisper API engine".to_string(),
                    )
                })?;
                tracing::info!(model = model, "Using remote Whisper API engine");
                Ok(Arc::new(OpenAiWhisperEngine::new(
                    key,
                    base_url,
                    Some(model.to_string()),
                )))
            }
            TranscriptionProvider::Mock => Ok(Arc::new(MockTranscriptionEngine)),
        }
    }
}
