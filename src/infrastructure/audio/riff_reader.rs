use std::io::{ErrorKind, Read, Seek, SeekFrom};

use crate::application::ports::DecodeError;
use crate::domain::ChunkHeader;

const ENVELOPE_LEN: usize = 12;
const CHUNK_HEADER_LEN: usize = 8;

/// Cursor over the chunk sequence of a RIFF/WAVE container.
///
/// `open` consumes the fixed 12-byte envelope; afterwards the reader sits at
/// the first chunk header. Nothing beyond the envelope lives at a fixed
/// offset: chunk bodies are consumed only by their declared size, so
/// metadata chunks inserted by editors can appear anywhere and are skipped
/// without interpretation.
pub struct RiffReader<R> {
    source: R,
    declared_size: u32,
}

impl<R: Read + Seek> RiffReader<R> {
    pub fn open(mut source: R) -> Result<Self, DecodeError> {
        let mut envelope = [0u8; ENVELOPE_LEN];
        source.read_exact(&mut envelope).map_err(map_read_error)?;

        if &envelope[0..4] != b"RIFF" || &envelope[8..12] != b"WAVE" {
            return Err(DecodeError::InvalidContainer);
        }

        let declared_size = u32::from_le_bytes([envelope[4], envelope[5], envelope[6], envelope[7]]);
        Ok(Self {
            source,
            declared_size,
        })
    }

    /// Overall size recorded in the envelope. Informational only; chunk
    /// iteration trusts the stream, not this field.
    pub fn declared_size(&self) -> u32 {
        self.declared_size
    }

    /// Reads the next 8-byte chunk header and advances past it.
    ///
    /// Returns `None` when fewer than 8 bytes remain before end of stream,
    /// which is normal termination rather than an error.
    pub fn next_chunk(&mut self) -> Result<Option<ChunkHeader>, DecodeError> {
        let mut header = [0u8; CHUNK_HEADER_LEN];
        let mut filled = 0;
        while filled < header.len() {
            let n = self.source.read(&mut header[filled..]).map_err(DecodeError::Io)?;
            if n == 0 {
                return Ok(None);
            }
            filled += n;
        }

        Ok(Some(ChunkHeader {
            id: [header[0], header[1], header[2], header[3]],
            size: u32::from_le_bytes([header[4], header[5], header[6], header[7]]),
        }))
    }

    /// Advances the cursor past `n` bytes of chunk body without reading them.
    pub fn skip(&mut self, n: u32) -> Result<(), DecodeError> {
        self.source
            .seek(SeekFrom::Current(i64::from(n)))
            .map_err(DecodeError::Io)?;
        Ok(())
    }

    /// Fills `buf` verbatim from the current cursor.
    pub fn read_into(&mut self, buf: &mut [u8]) -> Result<(), DecodeError> {
        self.source.read_exact(buf).map_err(map_read_error)
    }

    /// Reads exactly `n` bytes of chunk body.
    pub fn read_exact(&mut self, n: usize) -> Result<Vec<u8>, DecodeError> {
        let mut buf = vec![0u8; n];
        self.read_into(&mut buf)?;
        Ok(buf)
    }
}

fn map_read_error(err: std::io::Error) -> DecodeError {
    if err.kind() == ErrorKind::UnexpectedEof {
        DecodeError::UnexpectedEof
    } else {
        DecodeError::Io(err)
    }
}
