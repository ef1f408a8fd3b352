use wordseed_crypto::encoder::MnemonicEncoder;
use wordseed_types::primitives::Strength;

use super::{resolve_wordlist, wordlist_label};
use crate::config::WordseedConfig;
use crate::error::CliError;
use crate::format::{print_mnemonic_box, render_json, OutputFormat};

/// Pick the entropy strength from `--words`, `--bits` or the config.
pub fn resolve_strength(
    config: &WordseedConfig,
    words: Option<usize>,
    bits: Option<usize>,
) -> Result<Strength, CliError> {
    match (words, bits) {
        (Some(count), _) => Ok(Strength::from_word_count(count)?),
        (None, Some(bits)) => Ok(Strength::from_bits(bits)?),
        (None, None) => Ok(config.mnemonic.strength),
    }
}

pub fn run(
    config: &WordseedConfig,
    words: Option<usize>,
    bits: Option<usize>,
    language: Option<&str>,
    wordlist: Option<&str>,
    count: usize,
    format: OutputFormat,
) -> Result<(), CliError> {
    if count == 0 {
        return Err(CliError::InvalidArgument {
            reason: "--count must be at least 1".to_string(),
        });
    }

    let strength = resolve_strength(config, words, bits)?;
    let list = resolve_wordlist(config, language, wordlist)?;
    let label = wordlist_label(&list);
    let encoder = MnemonicEncoder::new(&list);

    tracing::debug!(
        count,
        bits = strength.bits(),
        language = %label,
        "generating mnemonics"
    );

    for _ in 0..count {
        let mnemonic = encoder.generate(strength.bits())?;
        match format {
            OutputFormat::Plain => println!("{}", mnemonic),
            OutputFormat::Boxed => print_mnemonic_box(mnemonic.words()),
            OutputFormat::Json => println!("{}", render_json(&mnemonic, &label)?),
        }
    }

    Ok(())
}
