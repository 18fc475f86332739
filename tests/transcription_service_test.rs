use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use sonoscribe::application::ports::{
    DecodeError, DecodeWarning, TranscriptionEngine, TranscriptionError,
};
use sonoscribe::application::services::{TranscriptionPipelineError, TranscriptionService};
use sonoscribe::domain::SampleBuffer;
use sonoscribe::infrastructure::audio::WavPcmDecoder;

fn build_wav(sample_rate: u32, samples: &[i16]) -> Vec<u8> {
    let data_size = (samples.len() * 2) as u32;
    let byte_rate = sample_rate * 2;

    let mut wav = Vec::with_capacity(44 + data_size as usize);
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(36 + data_size).to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes());
    wav.extend_from_slice(&sample_rate.to_le_bytes());
    wav.extend_from_slice(&byte_rate.to_le_bytes());
    wav.extend_from_slice(&2u16.to_le_bytes());
    wav.extend_from_slice(&16u16.to_le_bytes());
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_size.to_le_bytes());
    for &s in samples {
        wav.extend_from_slice(&s.to_le_bytes());
    }
    wav
}

struct RecordingEngine {
    received: Mutex<Option<SampleBuffer>>,
}

impl RecordingEngine {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            received: Mutex::new(None),
        })
    }
}

#[async_trait]
impl TranscriptionEngine for RecordingEngine {
    async fn transcribe(&self, audio: &SampleBuffer) -> Result<String, TranscriptionError> {
        *self.received.lock().unwrap() = Some(audio.clone());
        Ok("hello world".to_string())
    }
}

struct FailingEngine;

#[async_trait]
impl TranscriptionEngine for FailingEngine {
    async fn transcribe(&self, _audio: &SampleBuffer) -> Result<String, TranscriptionError> {
        Err(TranscriptionError::TranscriptionFailed(
            "inference blew up".to_string(),
        ))
    }
}

fn service_with(
    engine: Arc<dyn TranscriptionEngine>,
) -> TranscriptionService<WavPcmDecoder> {
    TranscriptionService::new(Arc::new(WavPcmDecoder::new()), engine)
}

#[tokio::test]
async fn given_valid_wav_when_transcribing_then_engine_text_is_returned() {
    let engine = RecordingEngine::new();
    let service = service_with(engine.clone());
    let wav = build_wav(16_000, &[100, -100, 3000, -3000]);

    let transcript = service.transcribe_bytes(&wav).await.unwrap();

    assert_eq!(transcript.text, "hello world");
    assert!(transcript.warnings.is_empty());

    let received = engine.received.lock().unwrap().clone().unwrap();
    assert_eq!(received.len(), 4);
    assert_eq!(received.sample_rate(), 16_000);
}

#[tokio::test]
async fn given_empty_data_chunk_when_transcribing_then_empty_result_without_engine_call() {
    let engine = RecordingEngine::new();
    let service = service_with(engine.clone());
    let wav = build_wav(16_000, &[]);

    let result = service.transcribe_bytes(&wav).await;

    assert!(matches!(result, Err(TranscriptionPipelineError::EmptyResult)));
    assert!(engine.received.lock().unwrap().is_none());
}

#[tokio::test]
async fn given_malformed_container_when_transcribing_then_decoding_error_surfaces() {
    let service = service_with(RecordingEngine::new());

    let result = service.transcribe_bytes(b"definitely not a wav file").await;

    assert!(matches!(
        result,
        Err(TranscriptionPipelineError::Decoding(
            DecodeError::InvalidContainer
        ))
    ));
}

#[tokio::test]
async fn given_failing_engine_when_transcribing_then_engine_error_surfaces() {
    let service = service_with(Arc::new(FailingEngine));
    let wav = build_wav(16_000, &[1, 2]);

    let result = service.transcribe_bytes(&wav).await;

    assert!(matches!(
        result,
        Err(TranscriptionPipelineError::Engine(
            TranscriptionError::TranscriptionFailed(_)
        ))
    ));
}

#[tokio::test]
async fn given_non_native_sample_rate_when_transcribing_then_warning_is_carried_through() {
    let service = service_with(RecordingEngine::new());
    let wav = build_wav(44_100, &[1, 2, 3]);

    let transcript = service.transcribe_bytes(&wav).await.unwrap();

    assert_eq!(
        transcript.warnings,
        vec![DecodeWarning::NonNativeSampleRate { declared: 44_100 }]
    );
}

#[tokio::test]
async fn given_wav_on_disk_when_transcribing_by_path_then_text_is_returned() {
    let service = service_with(RecordingEngine::new());
    let wav = build_wav(16_000, &[500, -500]);

    let file = tempfile::Builder::new().suffix(".wav").tempfile().unwrap();
    std::fs::write(file.path(), &wav).unwrap();

    let transcript = service.transcribe_file(file.path()).await.unwrap();

    assert_eq!(transcript.text, "hello world");
}

#[tokio::test]
async fn given_missing_file_when_transcribing_by_path_then_io_error_surfaces() {
    let service = service_with(RecordingEngine::new());

    let result = service
        .transcribe_file(std::path::Path::new("/nonexistent/audio.wav"))
        .await;

    assert!(matches!(result, Err(TranscriptionPipelineError::Io(_))));
}
