//! Canonical 44-byte PCM WAVE container.
//!
//! The container is a RIFF header with one `fmt ` chunk and one `data` chunk.
//! Nothing time-dependent is written, so identical bodies always produce
//! identical files.

mod header;
mod result;
mod writer;


// Re-export public API
pub use header::{WavHeader, HEADER_LEN, MAX_DATA_SIZE};
pub use result::{compute_pcm_hash, WavResult};
pub use writer::{assemble, write_wav};
