use std::fmt::Display;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::{Dimensions, Error, Header, HEADER_LEN};

/// Outcome of inspecting a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The file is a PNG with the given dimensions
    Png(Dimensions),
    /// The file does not start with PNG magic bytes
    NotPng,
}

impl Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Png(dimensions) => write!(f, "{dimensions}"),
            Self::NotPng => f.write_str("Not a PNG"),
        }
    }
}

/// Determines whether the file at `path` is a PNG and reads its dimensions
///
/// Reads at most [`HEADER_LEN`] bytes. Data that do not start with
/// [`MAGIC_BYTES`](crate::MAGIC_BYTES) give [`Verdict::NotPng`], including
/// empty files. Data that have the magic bytes but end before the height
/// field are an error.
pub fn inspect(path: impl AsRef<Path>) -> Result<Verdict, Error> {
    let data = read_header(path.as_ref())?;

    if !Header::is_filetype(&data) {
        tracing::debug!("No magic bytes, read: {}", hex::encode(&data));
        return Ok(Verdict::NotPng);
    }

    let header = Header::new(&data)?;

    tracing::debug!(
        "First chunk '{}' with length {}",
        String::from_utf8_lossy(&header.chunk_type()),
        header.chunk_length()
    );

    Ok(Verdict::Png(header.dimensions()))
}

/// Reads up to [`HEADER_LEN`] bytes from the start of the file
fn read_header(path: &Path) -> Result<Vec<u8>, Error> {
    let file = File::open(path)?;

    let mut data = Vec::with_capacity(HEADER_LEN);
    file.take(HEADER_LEN as u64).read_to_end(&mut data)?;

    Ok(data)
}
