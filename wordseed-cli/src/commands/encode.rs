use wordseed_crypto::encoder::{Mnemonic, MnemonicEncoder};
use wordseed_crypto::wordlist::WordList;
use zeroize::Zeroizing;

use super::{resolve_wordlist, wordlist_label};
use crate::config::WordseedConfig;
use crate::error::CliError;
use crate::format::{print_mnemonic_box, render_json, OutputFormat};

/// Decode hex entropy, accepting an optional `0x` prefix.
pub fn parse_entropy_hex(input: &str) -> Result<Zeroizing<Vec<u8>>, CliError> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    hex::decode(digits)
        .map(Zeroizing::new)
        .map_err(|e| CliError::InvalidArgument {
            reason: format!("entropy is not valid hex: {}", e),
        })
}

/// Encode hex entropy with `list`.
pub fn encode_hex(list: &WordList, entropy_hex: &str) -> Result<Mnemonic, CliError> {
    let bytes = parse_entropy_hex(entropy_hex)?;
    Ok(MnemonicEncoder::new(list).encode_bytes(&bytes)?)
}

pub fn run(
    config: &WordseedConfig,
    entropy_hex: &str,
    language: Option<&str>,
    wordlist: Option<&str>,
    format: OutputFormat,
) -> Result<(), CliError> {
    let list = resolve_wordlist(config, language, wordlist)?;
    let mnemonic = encode_hex(&list, entropy_hex)?;

    match format {
        OutputFormat::Plain => println!("{}", mnemonic),
        OutputFormat::Boxed => print_mnemonic_box(mnemonic.words()),
        OutputFormat::Json => println!("{}", render_json(&mnemonic, &wordlist_label(&list))?),
    }

    Ok(())
}
