//! Word lists: validated, immutable 2048-entry tables.
//!
//! Built-in tables come from the published BIP-39 lists and are loaded once
//! per process. Custom tables can be loaded from a file with one word per
//! line; a table that is not exactly 2048 unique words is rejected.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

use wordseed_types::constants::WORDLIST_SIZE;
use wordseed_types::error::WordseedError;
use wordseed_types::language::Language;
use wordseed_types::primitives::WordIndex;

#[allow(clippy::declare_interior_mutable_const)]
const UNLOADED: OnceLock<WordList> = OnceLock::new();

static BUILTIN: [OnceLock<WordList>; Language::ALL.len()] = [UNLOADED; Language::ALL.len()];

fn bip39_language(language: Language) -> bip39::Language {
    match language {
        Language::English => bip39::Language::English,
        Language::ChineseSimplified => bip39::Language::SimplifiedChinese,
        Language::ChineseTraditional => bip39::Language::TraditionalChinese,
        Language::Czech => bip39::Language::Czech,
        Language::French => bip39::Language::French,
        Language::Italian => bip39::Language::Italian,
        Language::Japanese => bip39::Language::Japanese,
        Language::Korean => bip39::Language::Korean,
        Language::Spanish => bip39::Language::Spanish,
    }
}

/// An ordered table of exactly 2048 distinct words.
#[derive(Clone)]
pub struct WordList {
    words: Vec<Cow<'static, str>>,
    index: HashMap<Cow<'static, str>, WordIndex>,
    language: Option<Language>,
}

impl WordList {
    /// Build a word list from an ordered sequence of words.
    ///
    /// # Errors
    /// [`WordseedError::InvalidWordlist`] if there are not exactly 2048 words,
    /// or any word is empty, contains whitespace, or appears twice.
    pub fn from_words<I, W>(words: I) -> Result<Self, WordseedError>
    where
        I: IntoIterator<Item = W>,
        W: Into<Cow<'static, str>>,
    {
        let words: Vec<Cow<'static, str>> = words.into_iter().map(Into::into).collect();
        if words.len() != WORDLIST_SIZE {
            return Err(WordseedError::InvalidWordlist {
                reason: format!("expected {} words, got {}", WORDLIST_SIZE, words.len()),
            });
        }

        let mut index = HashMap::with_capacity(WORDLIST_SIZE);
        for (i, word) in words.iter().enumerate() {
            if word.is_empty() {
                return Err(WordseedError::InvalidWordlist {
                    reason: format!("empty word at position {}", i),
                });
            }
            if word.chars().any(char::is_whitespace) {
                return Err(WordseedError::InvalidWordlist {
                    reason: format!("word {:?} at position {} contains whitespace", word, i),
                });
            }
            if let Some(first) = index.insert(word.clone(), i as WordIndex) {
                return Err(WordseedError::InvalidWordlist {
                    reason: format!(
                        "duplicate word {:?} at positions {} and {}",
                        word, first, i
                    ),
                });
            }
        }

        Ok(Self {
            words,
            index,
            language: None,
        })
    }

    /// The built-in table for `language`, loaded on first use and shared for
    /// the rest of the process.
    pub fn builtin(language: Language) -> Result<&'static WordList, WordseedError> {
        let cell = &BUILTIN[language.ordinal()];
        if let Some(list) = cell.get() {
            return Ok(list);
        }

        let table = bip39_language(language).word_list();
        let mut list = WordList::from_words(table.iter().copied())?;
        list.language = Some(language);
        tracing::debug!(%language, "loaded built-in word list");

        Ok(cell.get_or_init(|| list))
    }

    /// Shorthand for the built-in English table.
    pub fn english() -> Result<&'static WordList, WordseedError> {
        Self::builtin(Language::English)
    }

    /// Load a custom table from a text file with one word per line.
    ///
    /// Surrounding whitespace is trimmed and blank lines are skipped.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, WordseedError> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|e| WordseedError::WordlistNotLoaded {
                reason: format!("failed to read '{}': {}", path.display(), e),
            })?;
        let list = Self::from_words(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_owned),
        )?;
        tracing::debug!(path = %path.display(), "loaded custom word list");
        Ok(list)
    }

    /// The word at `index`.
    pub fn word_at(&self, index: WordIndex) -> Result<&str, WordseedError> {
        self.words
            .get(usize::from(index))
            .map(|w| w.as_ref())
            .ok_or(WordseedError::IndexOutOfRange {
                index: usize::from(index),
                len: self.words.len(),
            })
    }

    /// The position of `word` in the table, if present.
    pub fn index_of(&self, word: &str) -> Option<WordIndex> {
        self.index.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|w| w.as_ref())
    }

    /// The built-in language, or `None` for a custom table.
    pub fn language(&self) -> Option<Language> {
        self.language
    }
}

impl fmt::Debug for WordList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordList")
            .field("language", &self.language)
            .field("len", &self.words.len())
            .finish()
    }
}
