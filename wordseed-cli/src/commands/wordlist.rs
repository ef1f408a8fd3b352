use super::{resolve_wordlist, wordlist_label};
use crate::config::WordseedConfig;
use crate::error::CliError;
use crate::format::{print_success, style_dim};

pub fn run(
    config: &WordseedConfig,
    language: Option<&str>,
    file: Option<&str>,
    check: bool,
) -> Result<(), CliError> {
    // Loading validates size, emptiness and uniqueness.
    let list = resolve_wordlist(config, language, file)?;

    if check {
        print_success(&format!(
            "{} word list: {} unique words",
            wordlist_label(&list),
            list.len()
        ));
        if let (Some(first), Some(last)) = (list.iter().next(), list.iter().last()) {
            println!(
                "  {}",
                style_dim().apply_to(format!("first: {}  last: {}", first, last))
            );
        }
        return Ok(());
    }

    for word in list.iter() {
        println!("{}", word);
    }
    Ok(())
}
