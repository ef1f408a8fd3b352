pub mod encode;
pub mod generate;
pub mod init;
pub mod wordlist;

use std::borrow::Cow;

use wordseed_crypto::wordlist::WordList;
use wordseed_types::language::Language;

use crate::config::WordseedConfig;
use crate::error::CliError;

/// Pick the word list for a command.
///
/// Precedence: `--wordlist` file, `--language`, configured `wordlist_path`,
/// configured `language`.
pub fn resolve_wordlist(
    config: &WordseedConfig,
    language: Option<&str>,
    file: Option<&str>,
) -> Result<Cow<'static, WordList>, CliError> {
    if let Some(path) = file {
        return Ok(Cow::Owned(WordList::from_file(path)?));
    }
    if let Some(name) = language {
        let language: Language = name.parse()?;
        return Ok(Cow::Borrowed(WordList::builtin(language)?));
    }
    if let Some(path) = config.mnemonic.wordlist_path.as_deref() {
        return Ok(Cow::Owned(WordList::from_file(path)?));
    }
    Ok(Cow::Borrowed(WordList::builtin(config.mnemonic.language)?))
}

/// Human-readable name of a word list for output.
pub fn wordlist_label(list: &WordList) -> String {
    list.language()
        .map(|l| l.to_string())
        .unwrap_or_else(|| "custom".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use wordseed_types::constants::WORDLIST_SIZE;

    fn write_custom_list() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for i in 0..WORDLIST_SIZE {
            writeln!(file, "x{}", i).unwrap();
        }
        file
    }

    #[test]
    fn test_defaults_to_config_language() {
        let mut config = WordseedConfig::default();
        config.mnemonic.language = Language::Italian;
        let list = resolve_wordlist(&config, None, None).unwrap();
        assert_eq!(list.language(), Some(Language::Italian));
    }

    #[test]
    fn test_language_flag_overrides_config() {
        let mut config = WordseedConfig::default();
        config.mnemonic.language = Language::Italian;
        let list = resolve_wordlist(&config, Some("czech"), None).unwrap();
        assert_eq!(list.language(), Some(Language::Czech));
    }

    #[test]
    fn test_file_flag_wins() {
        let file = write_custom_list();
        let config = WordseedConfig::default();
        let list =
            resolve_wordlist(&config, Some("korean"), Some(file.path().to_str().unwrap()))
                .unwrap();
        assert_eq!(list.language(), None);
        assert_eq!(wordlist_label(&list), "custom");
    }

    #[test]
    fn test_config_wordlist_path_overrides_config_language() {
        let file = write_custom_list();
        let mut config = WordseedConfig::default();
        config.mnemonic.wordlist_path = Some(file.path().to_str().unwrap().to_string());
        let list = resolve_wordlist(&config, None, None).unwrap();
        assert_eq!(list.word_at(1).unwrap(), "x1");
    }

    #[test]
    fn test_unknown_language_flag() {
        let config = WordseedConfig::default();
        let err = resolve_wordlist(&config, Some("dothraki"), None).unwrap_err();
        assert!(err.to_string().contains("dothraki"));
    }
}
