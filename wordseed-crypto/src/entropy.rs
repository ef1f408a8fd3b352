//! Secure entropy generation.
//!
//! [`Entropy`] is the validated random input to the mnemonic pipeline. It is
//! produced by an [`EntropySource`]; failures of the source are surfaced to
//! the caller and never replaced by zeroed or partially filled buffers.

use std::fmt;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use wordseed_types::error::WordseedError;
use wordseed_types::primitives::Strength;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A source of cryptographically secure random bytes.
pub trait EntropySource {
    /// Fill `dest` completely or fail with [`WordseedError::RandomSourceFailure`].
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), WordseedError>;
}

/// The operating system CSPRNG. Safe to use from any thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), WordseedError> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| WordseedError::RandomSourceFailure {
                reason: e.to_string(),
            })
    }
}

/// Adapts any cryptographically secure [`RngCore`] into an [`EntropySource`].
#[derive(Debug)]
pub struct RngEntropy<R>(pub R);

impl<R: RngCore + CryptoRng> EntropySource for RngEntropy<R> {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), WordseedError> {
        self.0
            .try_fill_bytes(dest)
            .map_err(|e| WordseedError::RandomSourceFailure {
                reason: e.to_string(),
            })
    }
}

/// Validated entropy bytes. Zeroized on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Entropy {
    bytes: Vec<u8>,
    #[zeroize(skip)]
    strength: Strength,
}

impl Entropy {
    /// Draw `bits` bits of entropy from `source`.
    ///
    /// # Errors
    /// [`WordseedError::InvalidEntropyLength`] if `bits` is not a supported
    /// strength, or whatever error `source` reports.
    pub fn generate<S: EntropySource + ?Sized>(
        bits: usize,
        source: &mut S,
    ) -> Result<Self, WordseedError> {
        let strength = Strength::from_bits(bits)?;
        let mut bytes = vec![0u8; strength.byte_len()];
        if let Err(e) = source.fill(&mut bytes) {
            bytes.zeroize();
            return Err(e);
        }
        Ok(Self { bytes, strength })
    }

    /// Wrap existing entropy bytes, validating their length.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, WordseedError> {
        let strength = Strength::from_bits(bytes.len() * 8)?;
        Ok(Self {
            bytes: bytes.to_vec(),
            strength,
        })
    }

    pub fn strength(&self) -> Strength {
        self.strength
    }

    pub fn bit_len(&self) -> usize {
        self.bytes.len() * 8
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for Entropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entropy")
            .field("bits", &self.bit_len())
            .finish_non_exhaustive()
    }
}
