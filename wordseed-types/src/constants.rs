// ─── Word List Parameters ────────────────────────────────────────────────────

/// Number of entries in every word list.
pub const WORDLIST_SIZE: usize = 2048;

/// Width of one word index in bits (2^11 = 2048).
pub const BITS_PER_WORD: usize = 11;

/// Largest valid word index.
pub const MAX_WORD_INDEX: u16 = (WORDLIST_SIZE - 1) as u16;

// ─── Entropy Parameters ──────────────────────────────────────────────────────

/// Smallest supported entropy size in bits (12 words).
pub const MIN_ENTROPY_BITS: usize = 128;

/// Largest supported entropy size in bits (24 words).
pub const MAX_ENTROPY_BITS: usize = 256;

/// Entropy sizes must be a multiple of this many bits.
pub const ENTROPY_BITS_MULTIPLE: usize = 32;

// ─── Checksum Parameters ─────────────────────────────────────────────────────

/// One checksum bit is appended per this many entropy bits.
pub const CHECKSUM_DIVISOR: usize = 32;

/// Checksum bits never exceed one digest byte.
pub const MAX_CHECKSUM_BITS: usize = 8;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_bits_cover_wordlist() {
        assert_eq!(1usize << BITS_PER_WORD, WORDLIST_SIZE);
        assert_eq!(MAX_WORD_INDEX, 2047);
    }

    #[test]
    fn test_max_entropy_fits_one_checksum_byte() {
        assert!(MAX_ENTROPY_BITS / CHECKSUM_DIVISOR <= MAX_CHECKSUM_BITS);
    }
}
