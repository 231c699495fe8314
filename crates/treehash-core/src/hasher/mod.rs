/// Streaming SHA-256 digesting.
///
/// The hasher never opens or closes files — it consumes any [`Read`] and the
/// caller owns the stream's lifetime. This keeps the function trivially
/// testable against in-memory buffers and keeps file-handle hygiene in the
/// worker, where the open happens.
use sha2::{Digest, Sha256};
use std::io::{self, Read};

/// Digest an entire byte stream, returning the lowercase hex SHA-256.
///
/// Deterministic and chunk-size independent: identical bytes yield an
/// identical digest no matter how the reader batches them. Zero-length
/// streams are valid and produce the well-known empty-input digest.
pub fn digest_stream<R: Read>(reader: &mut R) -> io::Result<String> {
    let mut hasher = Sha256::new();
    // Sha256 implements io::Write, so io::copy streams without slurping
    // the whole file into memory.
    io::copy(reader, &mut hasher)?;
    Ok(format!("{:x}", hasher.finalize()))
}
