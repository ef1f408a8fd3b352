use clap::{Parser, Subcommand};

use crate::commands;
use crate::config::WordseedConfig;
use crate::error::CliError;
use crate::format::OutputFormat;

#[derive(Parser)]
#[command(
    name = "wordseed",
    about = "Encode secure random entropy as a checksummed word phrase",
    version
)]
pub struct Cli {
    /// Path to config file (defaults to ./wordseed.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate new mnemonics from fresh entropy
    Generate {
        /// Number of words: 12, 15, 18, 21 or 24
        #[arg(short, long, conflicts_with = "bits")]
        words: Option<usize>,
        /// Entropy size in bits: 128, 160, 192, 224 or 256
        #[arg(short, long)]
        bits: Option<usize>,
        /// Built-in word list language
        #[arg(short, long)]
        language: Option<String>,
        /// Custom word list file (one word per line)
        #[arg(long, conflicts_with = "language")]
        wordlist: Option<String>,
        /// How many mnemonics to generate
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Plain)]
        format: OutputFormat,
    },
    /// Encode given hex entropy as a mnemonic
    Encode {
        /// Hex-encoded entropy (16, 20, 24, 28 or 32 bytes)
        #[arg(short, long)]
        entropy: String,
        /// Built-in word list language
        #[arg(short, long)]
        language: Option<String>,
        /// Custom word list file (one word per line)
        #[arg(long, conflicts_with = "language")]
        wordlist: Option<String>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Plain)]
        format: OutputFormat,
    },
    /// Print or validate a word list
    Wordlist {
        /// Built-in word list language
        #[arg(short, long)]
        language: Option<String>,
        /// Word list file to load instead of a built-in table
        #[arg(long, conflicts_with = "language")]
        file: Option<String>,
        /// Only validate the list and report its size
        #[arg(long)]
        check: bool,
    },
    /// Write a default configuration file
    Init {
        /// Output directory
        #[arg(short, long, default_value = ".")]
        dir: String,
    },
}

pub fn run(cli: Cli, config: &WordseedConfig) -> Result<(), CliError> {
    match cli.command {
        Command::Generate {
            words,
            bits,
            language,
            wordlist,
            count,
            format,
        } => commands::generate::run(
            config,
            words,
            bits,
            language.as_deref(),
            wordlist.as_deref(),
            count,
            format,
        ),
        Command::Encode {
            entropy,
            language,
            wordlist,
            format,
        } => commands::encode::run(
            config,
            &entropy,
            language.as_deref(),
            wordlist.as_deref(),
            format,
        ),
        Command::Wordlist {
            language,
            file,
            check,
        } => commands::wordlist::run(config, language.as_deref(), file.as_deref(), check),
        Command::Init { dir } => commands::init::run(&dir),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate_defaults() {
        let cli = Cli::try_parse_from(["wordseed", "generate"]).unwrap();
        match cli.command {
            Command::Generate {
                words,
                bits,
                count,
                format,
                ..
            } => {
                assert!(words.is_none());
                assert!(bits.is_none());
                assert_eq!(count, 1);
                assert_eq!(format, OutputFormat::Plain);
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_parse_generate_options() {
        let cli = Cli::try_parse_from([
            "wordseed", "generate", "--words", "24", "-l", "french", "-n", "3", "-f", "json",
        ])
        .unwrap();
        match cli.command {
            Command::Generate {
                words,
                language,
                count,
                format,
                ..
            } => {
                assert_eq!(words, Some(24));
                assert_eq!(language.as_deref(), Some("french"));
                assert_eq!(count, 3);
                assert_eq!(format, OutputFormat::Json);
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_words_and_bits_conflict() {
        let result =
            Cli::try_parse_from(["wordseed", "generate", "--words", "12", "--bits", "128"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_config_flag() {
        let cli =
            Cli::try_parse_from(["wordseed", "encode", "-e", "00", "--config", "alt.toml"])
                .unwrap();
        assert_eq!(cli.config.as_deref(), Some("alt.toml"));
    }

    #[test]
    fn test_parse_wordlist_check() {
        let cli = Cli::try_parse_from(["wordseed", "wordlist", "--check"]).unwrap();
        assert!(matches!(cli.command, Command::Wordlist { check: true, .. }));
    }
}
