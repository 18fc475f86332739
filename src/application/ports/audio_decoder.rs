use crate::domain::{FormatDescriptor, SampleBuffer};

/// Decodes a complete audio container into normalized PCM samples.
///
/// Decoding is a pure, single-pass transform over an immutable input: the
/// same bytes always yield the same result, and no partial buffer is ever
/// returned on a failure path.
pub trait AudioDecoder: Send + Sync {
    fn decode(&self, data: &[u8]) -> Result<DecodedAudio, DecodeError>;
}

/// Successful decode output: the sample buffer, the parameters it was
/// decoded under, and any non-fatal parameter warnings.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedAudio {
    pub buffer: SampleBuffer,
    pub format: FormatDescriptor,
    pub warnings: Vec<DecodeWarning>,
}

/// Conditions that degrade recognition quality without preventing decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeWarning {
    /// Sample rate differs from the rate the recognition model expects.
    /// Decoding proceeds without resampling.
    NonNativeSampleRate { declared: u32 },
}

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("not a RIFF/WAVE container")]
    InvalidContainer,
    #[error("stream ended before a required field could be read")]
    UnexpectedEof,
    #[error("data chunk appears before any fmt chunk")]
    DataBeforeFormat,
    #[error("container has no fmt chunk")]
    MissingFormatChunk,
    #[error("container has no data chunk")]
    MissingDataChunk,
    #[error("unsupported audio format code: {0} (only linear PCM is accepted)")]
    UnsupportedCodec(u16),
    #[error("unsupported channel count: {0} (only mono is accepted)")]
    UnsupportedChannelLayout(u16),
    #[error("unsupported bit depth: {0} (only 16-bit is accepted)")]
    UnsupportedBitDepth(u16),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
