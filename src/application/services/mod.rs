mod transcription_service;

pub use transcription_service::{Transcript, TranscriptionPipelineError, TranscriptionService};
