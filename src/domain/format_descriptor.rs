/// Audio parameters recorded in the `fmt ` chunk of a WAVE container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatDescriptor {
    pub audio_format: u16,
    pub channel_count: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
}

impl FormatDescriptor {
    /// Format code for linear PCM.
    pub const PCM: u16 = 1;
    /// Sample rate the recognition model was trained on.
    pub const NATIVE_SAMPLE_RATE: u32 = 16_000;
    /// The only bit depth the decoder has a decode path for.
    pub const NATIVE_BIT_DEPTH: u16 = 16;

    /// Parses the fixed 16-byte PCM format block. Byte rate and block align
    /// occupy bytes 8..14 and are not retained.
    pub fn from_bytes(body: &[u8; 16]) -> Self {
        Self {
            audio_format: u16::from_le_bytes([body[0], body[1]]),
            channel_count: u16::from_le_bytes([body[2], body[3]]),
            sample_rate: u32::from_le_bytes([body[4], body[5], body[6], body[7]]),
            bits_per_sample: u16::from_le_bytes([body[14], body[15]]),
        }
    }

    pub fn is_pcm(&self) -> bool {
        self.audio_format == Self::PCM
    }

    pub fn is_mono(&self) -> bool {
        self.channel_count == 1
    }

    pub fn is_native_rate(&self) -> bool {
        self.sample_rate == Self::NATIVE_SAMPLE_RATE
    }
}
