mod chunk_header;
mod format_descriptor;
mod sample_buffer;

pub use chunk_header::ChunkHeader;
pub use format_descriptor::FormatDescriptor;
pub use sample_buffer::SampleBuffer;
