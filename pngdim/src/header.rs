use std::io::{Cursor, Read};

use crate::{Dimensions, Error};

pub const MAGIC_BYTES: &[u8] = &[137, 80, 78, 71, 13, 10, 26, 10];

/// Number of bytes read from the start of a file
///
/// Covers the magic bytes, the length and type of the first chunk, and the
/// width and height fields.
pub const HEADER_LEN: usize = 26;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    chunk_length: u32,
    chunk_type: [u8; 4],
    width: u32,
    height: u32,
}

/// Decoded prefix of a PNG image
impl Header {
    /// Returns the decoded header
    ///
    /// * `data`: PNG image data starting with the magic bytes, at least 24
    ///   bytes
    pub fn new(data: &[u8]) -> Result<Self, Error> {
        let mut cur = Cursor::new(data);

        let magic_bytes = &mut [0; MAGIC_BYTES.len()];
        cur.read_exact(magic_bytes)
            .map_err(|_| Error::UnexpectedEof)?;

        if magic_bytes != MAGIC_BYTES {
            return Err(Error::InvalidMagicBytes(magic_bytes.to_vec()));
        }

        // First 4 bytes after the magic bytes are the length of the first
        // chunk
        let length_data = &mut [0; 4];
        cur.read_exact(length_data)
            .map_err(|_| Error::UnexpectedEof)?;
        let chunk_length = u32::from_be_bytes(*length_data);

        // Next 4 bytes are the chunk type, IHDR in well-formed images
        let chunk_type = &mut [0; 4];
        cur.read_exact(chunk_type)
            .map_err(|_| Error::UnexpectedEof)?;

        // Width and height are the first two fields of the header chunk
        let width_data = &mut [0; 4];
        cur.read_exact(width_data)
            .map_err(|_| Error::UnexpectedEof)?;
        let width = u32::from_be_bytes(*width_data);

        let height_data = &mut [0; 4];
        cur.read_exact(height_data)
            .map_err(|_| Error::UnexpectedEof)?;
        let height = u32::from_be_bytes(*height_data);

        Ok(Self {
            chunk_length,
            chunk_type: *chunk_type,
            width,
            height,
        })
    }

    /// Checks if passed data have PNG magic bytes
    pub fn is_filetype(data: &[u8]) -> bool {
        data.starts_with(MAGIC_BYTES)
    }

    /// Length field of the first chunk
    pub fn chunk_length(&self) -> u32 {
        self.chunk_length
    }

    /// Type of the first chunk
    ///
    /// Stored as read, without validation.
    pub fn chunk_type(&self) -> [u8; 4] {
        self.chunk_type
    }

    /// Image width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.width,
            height: self.height,
        }
    }
}
