use thiserror::Error;

/// All error kinds produced while turning entropy into a mnemonic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordseedError {
    // ─── Input Errors ────────────────────────────────────────────────────────
    #[error("invalid entropy length: {bits} bits (must be 128..=256 and a multiple of 32)")]
    InvalidEntropyLength { bits: usize },

    #[error("invalid word count: {count} (must be 12, 15, 18, 21 or 24)")]
    InvalidWordCount { count: usize },

    #[error("unknown word list language: {0}")]
    UnknownLanguage(String),

    // ─── Randomness Errors ───────────────────────────────────────────────────
    #[error("random source failure: {reason}")]
    RandomSourceFailure { reason: String },

    // ─── Internal Invariants ─────────────────────────────────────────────────
    #[error("malformed bit length: {bit_len} bits is not a whole number of 11-bit words")]
    MalformedBitLength { bit_len: usize },

    // ─── Word List Errors ────────────────────────────────────────────────────
    #[error("word index {index} out of range for word list of {len} entries")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("word list not loaded: {reason}")]
    WordlistNotLoaded { reason: String },

    #[error("invalid word list: {reason}")]
    InvalidWordlist { reason: String },
}
