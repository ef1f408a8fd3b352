//! Slicing the entropy+checksum bit string into 11-bit word indices.

use wordseed_types::constants::BITS_PER_WORD;
use wordseed_types::error::WordseedError;
use wordseed_types::primitives::WordIndex;

use crate::checksum::ExtendedBits;

const WORD_MASK: u32 = (1 << BITS_PER_WORD) - 1;

/// Read the 11-bit group starting at bit `start`.
///
/// An 11-bit window starting at any bit offset spans at most three bytes.
fn read_group(bytes: &[u8], start: usize) -> WordIndex {
    let first = start / 8;
    let offset = start % 8;
    let window = (0..3).fold(0u32, |acc, k| {
        (acc << 8) | u32::from(bytes.get(first + k).copied().unwrap_or(0))
    });
    ((window >> (24 - BITS_PER_WORD - offset)) & WORD_MASK) as WordIndex
}

/// Split `bits` into 11-bit word indices, most-significant group first.
///
/// The final group carries the checksum bits, so only the last word depends
/// on the checksum.
///
/// # Errors
/// [`WordseedError::MalformedBitLength`] if the length is not a multiple of
/// 11. Buffers built by [`crate::checksum::append_checksum`] always satisfy it.
pub fn extract_indices(bits: &ExtendedBits) -> Result<Vec<WordIndex>, WordseedError> {
    if bits.len() % BITS_PER_WORD != 0 {
        return Err(WordseedError::MalformedBitLength {
            bit_len: bits.len(),
        });
    }
    let bytes = bits.as_bytes();
    let indices = (0..bits.len() / BITS_PER_WORD)
        .map(|group| read_group(bytes, group * BITS_PER_WORD))
        .collect();
    Ok(indices)
}
