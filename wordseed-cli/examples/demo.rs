//! Pipeline walkthrough: run with `cargo run --example demo -p wordseed-cli`
//!
//! Shows each stage for one fresh 128-bit mnemonic:
//! 1. Draw entropy from the OS
//! 2. Append the SHA-256 checksum bits
//! 3. Slice the bit string into 11-bit word indices
//! 4. Look each index up in the English word list

use wordseed_crypto::checksum::{append_checksum, checksum_bits};
use wordseed_crypto::entropy::{Entropy, OsEntropy};
use wordseed_crypto::extract::extract_indices;
use wordseed_crypto::wordlist::WordList;
use wordseed_crypto::MnemonicEncoder;
use wordseed_types::error::WordseedError;

fn main() -> Result<(), WordseedError> {
    let entropy = Entropy::generate(128, &mut OsEntropy)?;
    println!("entropy:   {} bits", entropy.bit_len());

    let checksum = checksum_bits(&entropy);
    println!(
        "checksum:  {:0width$b} ({} bits)",
        checksum >> (8 - entropy.strength().checksum_bits()),
        entropy.strength().checksum_bits(),
        width = entropy.strength().checksum_bits()
    );

    let extended = append_checksum(&entropy);
    let indices = extract_indices(&extended)?;
    println!("indices:   {:?}", indices);

    let list = WordList::english()?;
    let mnemonic = MnemonicEncoder::new(list).encode(&entropy)?;
    for (index, word) in indices.iter().zip(mnemonic.words()) {
        println!("  {:>4} -> {}", index, word);
    }
    println!("mnemonic:  {}", mnemonic);

    Ok(())
}
