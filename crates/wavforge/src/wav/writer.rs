//! Header + body assembly.

use std::io::{self, Write};

use super::header::{WavHeader, HEADER_LEN};

/// Writes a complete WAVE file to a writer.
///
/// # Arguments
/// * `writer` - Output writer
/// * `header` - Header describing `body`
/// * `body` - Interleaved PCM sample bytes
pub fn write_wav<W: Write>(writer: &mut W, header: &WavHeader, body: &[u8]) -> io::Result<()> {
    if body.len() != header.data_size as usize {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "body is {} bytes but header declares {}",
                body.len(),
                header.data_size
            ),
        ));
    }

    writer.write_all(&header.to_bytes())?;
    writer.write_all(body)?;
    Ok(())
}

/// Concatenates a header and body into one in-memory file.
pub fn assemble(header: &WavHeader, body: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(HEADER_LEN + body.len());
    buffer.extend_from_slice(&header.to_bytes());
    buffer.extend_from_slice(body);
    buffer
}
