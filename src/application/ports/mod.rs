mod audio_decoder;
mod decode_observer;
mod transcription_engine;

pub use audio_decoder::{AudioDecoder, DecodeError, DecodeWarning, DecodedAudio};
pub use decode_observer::{DecodeEvent, DecodeObserver, NullObserver};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
