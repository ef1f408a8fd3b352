//! Entropy-to-mnemonic encoding.
//!
//! The pipeline draws entropy, appends a SHA-256 checksum, slices the result
//! into 11-bit word indices and maps each index through a word list:
//!
//! ```
//! use wordseed_crypto::encoder::MnemonicEncoder;
//! use wordseed_types::language::Language;
//!
//! let encoder = MnemonicEncoder::for_language(Language::English)?;
//! let mnemonic = encoder.encode_bytes(&[0u8; 16])?;
//! assert!(mnemonic.phrase().ends_with("abandon about"));
//! # Ok::<(), wordseed_types::error::WordseedError>(())
//! ```

pub mod checksum;
pub mod encoder;
pub mod entropy;
pub mod extract;
pub mod phrase;
pub mod wordlist;

pub use encoder::{Mnemonic, MnemonicEncoder};
pub use phrase::{generate_12_word_mnemonic, generate_24_word_mnemonic, generate_mnemonic};
