//! Checksum derivation and the entropy+checksum bit buffer.
//!
//! The checksum is the leading `bits / 32` bits of SHA-256(entropy). Rather
//! than treating entropy and checksum as one big integer, the two are laid
//! out in an explicit MSB-first bit buffer ([`ExtendedBits`]) that the word
//! index extractor slices by position.

use std::fmt;

use sha2::{Digest, Sha256};
use wordseed_types::constants::MAX_CHECKSUM_BITS;
use wordseed_types::error::WordseedError;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::entropy::Entropy;

/// Mask keeping the `n` most-significant bits of a byte.
fn high_bits_mask(n: usize) -> u8 {
    if n == 0 {
        0
    } else {
        0xFF << (8 - n)
    }
}

/// Compute the checksum bits for `entropy`, left-aligned in a byte.
///
/// Only the first digest byte is consulted; the low `8 - checksum_bits`
/// bits of the result are always zero.
pub fn checksum_bits(entropy: &Entropy) -> u8 {
    let len = entropy.strength().checksum_bits();
    assert!(
        len <= MAX_CHECKSUM_BITS,
        "checksum of {len} bits does not fit in the first digest byte"
    );
    let digest = Sha256::digest(entropy.as_bytes());
    digest[0] & high_bits_mask(len)
}

/// An MSB-first bit string backed by bytes.
///
/// Bits past `len()` in the final byte are ignored by every accessor.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct ExtendedBits {
    bytes: Vec<u8>,
    #[zeroize(skip)]
    bit_len: usize,
}

impl ExtendedBits {
    /// Wrap `bytes` as a bit string of exactly `bit_len` bits.
    ///
    /// # Errors
    /// [`WordseedError::MalformedBitLength`] if `bytes` holds fewer than
    /// `bit_len` bits.
    pub fn new(bytes: Vec<u8>, bit_len: usize) -> Result<Self, WordseedError> {
        if bit_len > bytes.len() * 8 {
            return Err(WordseedError::MalformedBitLength { bit_len });
        }
        Ok(Self { bytes, bit_len })
    }

    pub fn len(&self) -> usize {
        self.bit_len
    }

    pub fn is_empty(&self) -> bool {
        self.bit_len == 0
    }

    /// Backing bytes, first bit in the most-significant position of byte 0.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The bit at position `i`, counting from the most-significant end.
    pub fn bit(&self, i: usize) -> Option<bool> {
        if i >= self.bit_len {
            return None;
        }
        Some(self.bytes[i / 8] & (0x80 >> (i % 8)) != 0)
    }

    /// The bit string read as a big-endian unsigned integer, left-padded with
    /// zero bits to a whole number of bytes.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let out_len = self.bit_len.div_ceil(8);
        let pad = out_len * 8 - self.bit_len;
        let mut out = vec![0u8; out_len];
        for i in 0..self.bit_len {
            if self.bit(i) == Some(true) {
                let p = pad + i;
                out[p / 8] |= 0x80 >> (p % 8);
            }
        }
        out
    }
}

impl fmt::Debug for ExtendedBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtendedBits")
            .field("bit_len", &self.bit_len)
            .finish_non_exhaustive()
    }
}

/// Append the checksum bits to the entropy bits.
///
/// The result holds `entropy_bits + entropy_bits / 32` bits, which is always a
/// whole number of 11-bit words for a valid [`Entropy`].
pub fn append_checksum(entropy: &Entropy) -> ExtendedBits {
    let checksum = checksum_bits(entropy);
    let mut bytes = Vec::with_capacity(entropy.as_bytes().len() + 1);
    bytes.extend_from_slice(entropy.as_bytes());
    bytes.push(checksum);
    ExtendedBits {
        bytes,
        bit_len: entropy.strength().total_bits(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_bits_mask() {
        assert_eq!(high_bits_mask(0), 0x00);
        assert_eq!(high_bits_mask(4), 0xF0);
        assert_eq!(high_bits_mask(5), 0xF8);
        assert_eq!(high_bits_mask(8), 0xFF);
    }

    #[test]
    fn test_checksum_zero_entropy_128() {
        // SHA-256 of 16 zero bytes starts with 0x37.
        let entropy = Entropy::from_bytes(&[0u8; 16]).unwrap();
        assert_eq!(checksum_bits(&entropy), 0x30);
    }

    #[test]
    fn test_checksum_zero_entropy_256() {
        // SHA-256 of 32 zero bytes starts with 0x66.
        let entropy = Entropy::from_bytes(&[0u8; 32]).unwrap();
        assert_eq!(checksum_bits(&entropy), 0x66);
    }

    #[test]
    fn test_checksum_uses_only_leading_bits() {
        for (len, mask) in [(16, 0xF0u8), (20, 0xF8), (24, 0xFC), (28, 0xFE), (32, 0xFF)] {
            let entropy = Entropy::from_bytes(&vec![0x5Au8; len]).unwrap();
            let full = Sha256::digest(entropy.as_bytes())[0];
            assert_eq!(checksum_bits(&entropy), full & mask);
        }
    }

    #[test]
    fn test_append_checksum_lengths() {
        for (len, bits) in [(16, 132), (20, 165), (24, 198), (28, 231), (32, 264)] {
            let entropy = Entropy::from_bytes(&vec![1u8; len]).unwrap();
            let ext = append_checksum(&entropy);
            assert_eq!(ext.len(), bits);
            assert_eq!(ext.len() % 11, 0);
            assert_eq!(&ext.as_bytes()[..len], entropy.as_bytes());
        }
    }

    #[test]
    fn test_to_be_bytes_is_left_padded_integer() {
        // 0 * 2^4 + 0b0011 as a 132-bit value: 17 bytes, value 3.
        let entropy = Entropy::from_bytes(&[0u8; 16]).unwrap();
        let ext = append_checksum(&entropy);
        let mut expected = vec![0u8; 17];
        expected[16] = 0x03;
        assert_eq!(ext.to_be_bytes(), expected);
    }

    #[test]
    fn test_to_be_bytes_full_entropy() {
        // 0xFF..FF * 2^4 + checksum: the top nibble of the padded form is zero.
        let entropy = Entropy::from_bytes(&[0xFFu8; 16]).unwrap();
        let ext = append_checksum(&entropy);
        let be = ext.to_be_bytes();
        assert_eq!(be.len(), 17);
        assert_eq!(be[0], 0x0F);
        assert!(be[1..16].iter().all(|b| *b == 0xFF));
        assert_eq!(be[16] & 0xF0, 0xF0);
        assert_eq!(be[16] & 0x0F, checksum_bits(&entropy) >> 4);
    }

    #[test]
    fn test_bit_accessor() {
        let ext = ExtendedBits::new(vec![0b1010_0000], 3).unwrap();
        assert_eq!(ext.bit(0), Some(true));
        assert_eq!(ext.bit(1), Some(false));
        assert_eq!(ext.bit(2), Some(true));
        assert_eq!(ext.bit(3), None);
    }

    #[test]
    fn test_new_rejects_oversized_length() {
        assert_eq!(
            ExtendedBits::new(vec![0u8; 2], 17),
            Err(WordseedError::MalformedBitLength { bit_len: 17 })
        );
    }

    #[test]
    fn test_checksum_changes_with_entropy() {
        let a = Entropy::from_bytes(&[0u8; 32]).unwrap();
        let mut flipped = [0u8; 32];
        flipped[31] = 1;
        let b = Entropy::from_bytes(&flipped).unwrap();
        assert_ne!(checksum_bits(&a), checksum_bits(&b));
    }
}
