use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{
    BITS_PER_WORD, CHECKSUM_DIVISOR, ENTROPY_BITS_MULTIPLE, MAX_ENTROPY_BITS, MIN_ENTROPY_BITS,
};
use crate::error::WordseedError;

/// Index of a word in a 2048-entry word list (11 significant bits).
pub type WordIndex = u16;

/// Supported entropy sizes.
///
/// Serialized as the entropy size in bits (e.g. `256`).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "usize", into = "usize")]
pub enum Strength {
    Bits128,
    Bits160,
    Bits192,
    Bits224,
    #[default]
    Bits256,
}

impl Strength {
    /// Every supported strength, weakest first.
    pub const ALL: [Strength; 5] = [
        Strength::Bits128,
        Strength::Bits160,
        Strength::Bits192,
        Strength::Bits224,
        Strength::Bits256,
    ];

    /// Validate an entropy size in bits.
    pub fn from_bits(bits: usize) -> Result<Self, WordseedError> {
        if bits % ENTROPY_BITS_MULTIPLE != 0 || !(MIN_ENTROPY_BITS..=MAX_ENTROPY_BITS).contains(&bits)
        {
            return Err(WordseedError::InvalidEntropyLength { bits });
        }
        match bits {
            128 => Ok(Strength::Bits128),
            160 => Ok(Strength::Bits160),
            192 => Ok(Strength::Bits192),
            224 => Ok(Strength::Bits224),
            256 => Ok(Strength::Bits256),
            _ => Err(WordseedError::InvalidEntropyLength { bits }),
        }
    }

    /// Look up the strength that yields `count` words.
    pub fn from_word_count(count: usize) -> Result<Self, WordseedError> {
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.word_count() == count)
            .ok_or(WordseedError::InvalidWordCount { count })
    }

    /// Entropy size in bits.
    pub const fn bits(self) -> usize {
        match self {
            Strength::Bits128 => 128,
            Strength::Bits160 => 160,
            Strength::Bits192 => 192,
            Strength::Bits224 => 224,
            Strength::Bits256 => 256,
        }
    }

    /// Entropy size in bytes.
    pub const fn byte_len(self) -> usize {
        self.bits() / 8
    }

    /// Number of checksum bits appended to the entropy.
    pub const fn checksum_bits(self) -> usize {
        self.bits() / CHECKSUM_DIVISOR
    }

    /// Length of entropy plus checksum in bits.
    pub const fn total_bits(self) -> usize {
        self.bits() + self.checksum_bits()
    }

    /// Number of words in the resulting mnemonic.
    pub const fn word_count(self) -> usize {
        self.total_bits() / BITS_PER_WORD
    }
}

impl TryFrom<usize> for Strength {
    type Error = WordseedError;

    fn try_from(bits: usize) -> Result<Self, Self::Error> {
        Strength::from_bits(bits)
    }
}

impl From<Strength> for usize {
    fn from(strength: Strength) -> usize {
        strength.bits()
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bits", self.bits())
    }
}
