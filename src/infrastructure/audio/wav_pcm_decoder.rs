use std::io::Cursor;
use std::sync::Arc;

use crate::application::ports::{
    AudioDecoder, DecodeError, DecodeEvent, DecodeObserver, DecodeWarning, DecodedAudio,
    NullObserver,
};
use crate::domain::{FormatDescriptor, SampleBuffer};

use super::riff_reader::RiffReader;

/// Length of the PCM format block read from a `fmt ` chunk. Larger declared
/// sizes are tolerated; the remainder is skipped.
const FORMAT_BLOCK_LEN: usize = 16;
const BYTES_PER_SAMPLE: u32 = 2;
const SAMPLE_MAGNITUDE: f32 = 32_768.0;

/// Decoder for canonical RIFF/WAVE files carrying 16-bit mono linear PCM.
///
/// Chunk order is not assumed beyond the one structural rule the format
/// imposes: a `fmt ` chunk must precede the `data` chunk that gets decoded.
/// The first `fmt ` chunk encountered is authoritative; later ones are
/// skipped unread.
pub struct WavPcmDecoder {
    observer: Arc<dyn DecodeObserver>,
}

impl WavPcmDecoder {
    pub fn new() -> Self {
        Self {
            observer: Arc::new(NullObserver),
        }
    }

    pub fn with_observer(observer: Arc<dyn DecodeObserver>) -> Self {
        Self { observer }
    }

    /// Scans the chunk sequence for the authoritative `fmt ` chunk and the
    /// `data` chunk, returning the format and the data chunk's byte size.
    /// The reader is left positioned at the first byte of sample data.
    fn scan_chunks(
        &self,
        reader: &mut RiffReader<Cursor<&[u8]>>,
    ) -> Result<(FormatDescriptor, u32), DecodeError> {
        let mut format: Option<FormatDescriptor> = None;

        while let Some(header) = reader.next_chunk()? {
            if header.is_format() {
                if format.is_some() {
                    reader.skip(header.size)?;
                    continue;
                }
                let mut block = [0u8; FORMAT_BLOCK_LEN];
                reader.read_into(&mut block)?;
                let descriptor = FormatDescriptor::from_bytes(&block);
                self.observer.on_event(DecodeEvent::FormatResolved {
                    format: descriptor,
                });
                if header.size as usize > FORMAT_BLOCK_LEN {
                    reader.skip(header.size - FORMAT_BLOCK_LEN as u32)?;
                }
                format = Some(descriptor);
            } else if header.is_data() {
                return match format {
                    None => Err(DecodeError::DataBeforeFormat),
                    Some(descriptor) => Ok((descriptor, header.size)),
                };
            } else {
                self.observer.on_event(DecodeEvent::ChunkSkipped {
                    id: header.id,
                    size: header.size,
                });
                reader.skip(header.size)?;
            }
        }

        match format {
            None => Err(DecodeError::MissingFormatChunk),
            Some(_) => Err(DecodeError::MissingDataChunk),
        }
    }

    fn validate(&self, format: &FormatDescriptor) -> Result<Vec<DecodeWarning>, DecodeError> {
        if !format.is_pcm() {
            return Err(DecodeError::UnsupportedCodec(format.audio_format));
        }
        if !format.is_mono() {
            // Downmixing would alter signal content the caller did not ask
            // for, so multi-channel input is refused outright.
            return Err(DecodeError::UnsupportedChannelLayout(format.channel_count));
        }
        if format.bits_per_sample != FormatDescriptor::NATIVE_BIT_DEPTH {
            return Err(DecodeError::UnsupportedBitDepth(format.bits_per_sample));
        }

        let mut warnings = Vec::new();
        if !format.is_native_rate() {
            self.observer.on_event(DecodeEvent::NonNativeSampleRate {
                declared: format.sample_rate,
                native: FormatDescriptor::NATIVE_SAMPLE_RATE,
            });
            warnings.push(DecodeWarning::NonNativeSampleRate {
                declared: format.sample_rate,
            });
        }
        Ok(warnings)
    }
}

impl Default for WavPcmDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioDecoder for WavPcmDecoder {
    fn decode(&self, data: &[u8]) -> Result<DecodedAudio, DecodeError> {
        let mut reader = RiffReader::open(Cursor::new(data))?;
        self.observer.on_event(DecodeEvent::ContainerOpened {
            declared_size: reader.declared_size(),
        });

        let (format, data_size) = self.scan_chunks(&mut reader)?;
        let warnings = self.validate(&format)?;

        let sample_count = (data_size / BYTES_PER_SAMPLE) as usize;
        let payload = reader.read_exact(sample_count * BYTES_PER_SAMPLE as usize)?;

        let mut samples = Vec::with_capacity(sample_count);
        for pair in payload.chunks_exact(2) {
            let value = i16::from_le_bytes([pair[0], pair[1]]);
            samples.push(f32::from(value) / SAMPLE_MAGNITUDE);
        }

        self.observer.on_event(DecodeEvent::SamplesDecoded {
            count: samples.len(),
        });

        Ok(DecodedAudio {
            buffer: SampleBuffer::new(samples, format.sample_rate),
            format,
            warnings,
        })
    }
}
