use log::warn;
use crate::error::LoadError;
use crate::hal::U12;

/// 6144 words of 12 bits, shipped as big-endian byte pairs.
pub const ROM_MAX_SIZE: usize = 12288;

/// Repacks a ROM dump into 12-bit program words.
///
/// Each word is stored in two bytes, high nibble first; the top nibble of the
/// first byte is unused.
pub fn repack(bytes: &[u8]) -> Result<Vec<U12>, LoadError> {
    if bytes.is_empty() {
        return Err(LoadError::Empty);
    }
    if bytes.len() > ROM_MAX_SIZE {
        return Err(LoadError::TooLarge { size: bytes.len(), max: ROM_MAX_SIZE });
    }

    let words = bytes.chunks_exact(2);
    if !words.remainder().is_empty() {
        warn!("ROM has an odd length ({} bytes), dropping the last byte", bytes.len());
    }

    Ok(words.map(|pair| pair[1] as U12 | ((pair[0] & 0xF) as U12) << 8).collect())
}
