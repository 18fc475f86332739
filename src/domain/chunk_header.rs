/// Header of a single RIFF chunk: four-byte tag plus the declared byte
/// length of the body that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
    pub id: [u8; 4],
    pub size: u32,
}

impl ChunkHeader {
    pub const FORMAT: [u8; 4] = *b"fmt ";
    pub const DATA: [u8; 4] = *b"data";

    pub fn is_format(&self) -> bool {
        self.id == Self::FORMAT
    }

    pub fn is_data(&self) -> bool {
        self.id == Self::DATA
    }

    /// Tag as printable text for diagnostics; non-ASCII bytes are escaped.
    pub fn id_display(&self) -> String {
        self.id
            .iter()
            .map(|&b| {
                if b.is_ascii_graphic() || b == b' ' {
                    (b as char).to_string()
                } else {
                    format!("\\x{:02x}", b)
                }
            })
            .collect()
    }
}
