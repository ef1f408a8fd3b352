//! One-call mnemonic generation against the English word list.

use wordseed_types::error::WordseedError;
use wordseed_types::language::Language;
use wordseed_types::primitives::Strength;

use crate::encoder::MnemonicEncoder;

/// Generate a new English mnemonic phrase from `bits` bits of entropy.
///
/// `bits` must be one of 128, 160, 192, 224 or 256.
pub fn generate_mnemonic(bits: usize) -> Result<String, WordseedError> {
    let encoder = MnemonicEncoder::for_language(Language::English)?;
    Ok(encoder.generate(bits)?.phrase())
}

/// Generate a new 12-word English mnemonic (128 bits of entropy).
pub fn generate_12_word_mnemonic() -> Result<String, WordseedError> {
    generate_mnemonic(Strength::Bits128.bits())
}

/// Generate a new 24-word English mnemonic (256 bits of entropy).
pub fn generate_24_word_mnemonic() -> Result<String, WordseedError> {
    generate_mnemonic(Strength::Bits256.bits())
}
