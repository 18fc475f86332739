use crate::domain::FormatDescriptor;

/// Structured progress events emitted while decoding a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeEvent {
    ContainerOpened { declared_size: u32 },
    ChunkSkipped { id: [u8; 4], size: u32 },
    FormatResolved { format: FormatDescriptor },
    NonNativeSampleRate { declared: u32, native: u32 },
    SamplesDecoded { count: usize },
}

/// Sink for decode diagnostics. The decoder itself stays silent; callers
/// that want logging or metrics inject an observer.
pub trait DecodeObserver: Send + Sync {
    fn on_event(&self, event: DecodeEvent);
}

/// Observer that discards every event.
pub struct NullObserver;

impl DecodeObserver for NullObserver {
    fn on_event(&self, _event: DecodeEvent) {}
}
