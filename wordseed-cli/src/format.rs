use clap::ValueEnum;
use console::{measure_text_width, Style};
use serde::Serialize;
use wordseed_crypto::encoder::Mnemonic;

use crate::error::CliError;

// ── Styles ──────────────────────────────────────────────────────────────────

pub fn style_success() -> Style {
    Style::new().green()
}

pub fn style_warn() -> Style {
    Style::new().yellow()
}

pub fn style_bold() -> Style {
    Style::new().bold()
}

pub fn style_dim() -> Style {
    Style::new().dim()
}

// ── Output formats ──────────────────────────────────────────────────────────

/// How generated mnemonics are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The bare phrase, one per line
    #[default]
    Plain,
    /// A numbered word grid in a box
    Boxed,
    /// A JSON object per mnemonic
    Json,
}

/// JSON shape of a generated mnemonic.
#[derive(Debug, Serialize)]
pub struct MnemonicOutput<'a> {
    pub phrase: String,
    pub words: &'a [String],
    pub word_count: usize,
    pub strength_bits: usize,
    pub language: &'a str,
}

impl<'a> MnemonicOutput<'a> {
    pub fn new(mnemonic: &'a Mnemonic, language: &'a str) -> Self {
        Self {
            phrase: mnemonic.phrase(),
            words: mnemonic.words(),
            word_count: mnemonic.word_count(),
            strength_bits: mnemonic.strength().bits(),
            language,
        }
    }
}

pub fn render_json(mnemonic: &Mnemonic, language: &str) -> Result<String, CliError> {
    Ok(serde_json::to_string(&MnemonicOutput::new(mnemonic, language))?)
}

// ── Mnemonic box ────────────────────────────────────────────────────────────

const WORDS_PER_ROW: usize = 4;
const WORD_COLUMN: usize = 12;
/// "   " + 4 * "NN. word________" joined by two spaces + "   "
const INNER_WIDTH: usize = 3 + WORDS_PER_ROW * (4 + WORD_COLUMN) + (WORDS_PER_ROW - 1) * 2 + 3;

fn boxed_line(content: &str) -> String {
    let padding = INNER_WIDTH.saturating_sub(measure_text_width(content));
    format!("║{}{}║", content, " ".repeat(padding))
}

fn pad_word(word: &str) -> String {
    let padding = WORD_COLUMN.saturating_sub(measure_text_width(word));
    format!("{}{}", word, " ".repeat(padding))
}

/// The numbered grid rows, without borders.
pub fn word_grid(words: &[String]) -> Vec<String> {
    words
        .chunks(WORDS_PER_ROW)
        .enumerate()
        .map(|(row, chunk)| {
            let entries: Vec<String> = chunk
                .iter()
                .enumerate()
                .map(|(col, word)| {
                    format!("{:>2}. {}", row * WORDS_PER_ROW + col + 1, pad_word(word))
                })
                .collect();
            format!("   {}", entries.join("  ").trim_end())
        })
        .collect()
}

/// Render the full box, border lines included.
pub fn mnemonic_box(words: &[String]) -> Vec<String> {
    let rule = "═".repeat(INNER_WIDTH);
    let mut lines = vec![
        format!("╔{}╗", rule),
        boxed_line(&format!("  IMPORTANT: Write down these {} words.", words.len())),
        boxed_line("  They are the ONLY way to restore the key they back up."),
        boxed_line("  Store them safely offline."),
        format!("╠{}╣", rule),
        boxed_line(""),
    ];
    lines.extend(word_grid(words).iter().map(|row| boxed_line(row)));
    lines.push(boxed_line(""));
    lines.push(format!("╚{}╝", rule));
    lines
}

pub fn print_mnemonic_box(words: &[String]) {
    let warn = style_warn();
    let bold = style_bold();
    let grid_rows = words.len().div_ceil(WORDS_PER_ROW);

    println!();
    for (i, line) in mnemonic_box(words).iter().enumerate() {
        // Rows 6.. (after the header and blank spacer) hold the words.
        if (6..6 + grid_rows).contains(&i) {
            println!("  {}", bold.apply_to(line));
        } else {
            println!("  {}", warn.apply_to(line));
        }
    }
    println!();
}

pub fn print_success(msg: &str) {
    println!("  {} {}", style_success().apply_to("✓"), msg);
}
