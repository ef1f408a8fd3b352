//! The entropy → checksum → word index → word pipeline.

use std::fmt;

use wordseed_types::error::WordseedError;
use wordseed_types::language::Language;
use wordseed_types::primitives::{Strength, WordIndex};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::checksum::append_checksum;
use crate::entropy::{Entropy, EntropySource, OsEntropy};
use crate::extract::extract_indices;
use crate::wordlist::WordList;

/// A generated mnemonic: an ordered word sequence. Zeroized on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Mnemonic {
    words: Vec<String>,
    indices: Vec<WordIndex>,
    #[zeroize(skip)]
    strength: Strength,
}

impl Mnemonic {
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Word list positions of each word, in phrase order.
    pub fn indices(&self) -> &[WordIndex] {
        &self.indices
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn strength(&self) -> Strength {
        self.strength
    }

    /// The words joined by single ASCII spaces.
    pub fn phrase(&self) -> String {
        self.words.join(" ")
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(word)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mnemonic")
            .field("word_count", &self.words.len())
            .field("strength", &self.strength)
            .finish_non_exhaustive()
    }
}

/// Turns entropy into mnemonics against one word list.
#[derive(Debug, Clone, Copy)]
pub struct MnemonicEncoder<'a> {
    wordlist: &'a WordList,
}

impl<'a> MnemonicEncoder<'a> {
    pub fn new(wordlist: &'a WordList) -> Self {
        Self { wordlist }
    }

    pub fn wordlist(&self) -> &'a WordList {
        self.wordlist
    }

    /// Generate a mnemonic from `bits` bits of operating system entropy.
    pub fn generate(&self, bits: usize) -> Result<Mnemonic, WordseedError> {
        self.generate_with(bits, &mut OsEntropy)
    }

    /// Generate a mnemonic from `bits` bits drawn from `source`.
    pub fn generate_with<S: EntropySource + ?Sized>(
        &self,
        bits: usize,
        source: &mut S,
    ) -> Result<Mnemonic, WordseedError> {
        let entropy = Entropy::generate(bits, source)?;
        self.encode(&entropy)
    }

    /// Encode existing entropy. Deterministic for a given word list.
    pub fn encode(&self, entropy: &Entropy) -> Result<Mnemonic, WordseedError> {
        let extended = append_checksum(entropy);
        let indices = extract_indices(&extended)?;
        let words = indices
            .iter()
            .map(|&index| self.wordlist.word_at(index).map(str::to_owned))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            words = words.len(),
            bits = entropy.bit_len(),
            "encoded mnemonic"
        );

        Ok(Mnemonic {
            words,
            indices,
            strength: entropy.strength(),
        })
    }

    /// Encode raw entropy bytes, validating their length first.
    pub fn encode_bytes(&self, bytes: &[u8]) -> Result<Mnemonic, WordseedError> {
        let entropy = Entropy::from_bytes(bytes)?;
        self.encode(&entropy)
    }
}

impl MnemonicEncoder<'static> {
    /// An encoder over the built-in table for `language`.
    pub fn for_language(language: Language) -> Result<Self, WordseedError> {
        Ok(Self::new(WordList::builtin(language)?))
    }
}
