use crate::application::ports::{DecodeEvent, DecodeObserver};
use crate::domain::ChunkHeader;

/// Observer that forwards decode events to the tracing subscriber.
pub struct TracingObserver;

impl DecodeObserver for TracingObserver {
    fn on_event(&self, event: DecodeEvent) {
        match event {
            DecodeEvent::ContainerOpened { declared_size } => {
                tracing::debug!(declared_size, "Opened RIFF/WAVE container");
            }
            DecodeEvent::ChunkSkipped { id, size } => {
                let header = ChunkHeader { id, size };
                tracing::debug!(id = %header.id_display(), size, "Skipped unknown chunk");
            }
            DecodeEvent::FormatResolved { format } => {
                tracing::debug!(
                    audio_format = format.audio_format,
                    channels = format.channel_count,
                    sample_rate = format.sample_rate,
                    bits_per_sample = format.bits_per_sample,
                    "Resolved fmt chunk"
                );
            }
            DecodeEvent::NonNativeSampleRate { declared, native } => {
                tracing::warn!(
                    declared,
                    native,
                    "Sample rate differs from model native rate; recognition quality may degrade"
                );
            }
            DecodeEvent::SamplesDecoded { count } => {
                tracing::debug!(samples = count, "Decoded PCM samples");
            }
        }
    }
}
