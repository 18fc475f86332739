mod mock_transcription_engine;
mod openai_whisper_engine;
mod riff_reader;
mod transcription_engine_factory;
mod wav_pcm_decoder;
#[cfg(feature = "whisper-cpp")]
mod whisper_cpp_engine;

pub use mock_transcription_engine::MockTranscriptionEngine;
pub use openai_whisper_engine::OpenAiWhisperEngine;
pub use riff_reader::RiffReader;
pub use transcription_engine_factory::TranscriptionEngineFactory;
pub use wav_pcm_decoder::WavPcmDecoder;
#[cfg(feature = "whisper-cpp")]
pub use whisper_cpp_engine::WhisperCppEngine;
