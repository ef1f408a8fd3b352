use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::WordseedError;

/// Built-in word list languages.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Language {
    #[default]
    English,
    ChineseSimplified,
    ChineseTraditional,
    Czech,
    French,
    Italian,
    Japanese,
    Korean,
    Spanish,
}

impl Language {
    pub const ALL: [Language; 9] = [
        Language::English,
        Language::ChineseSimplified,
        Language::ChineseTraditional,
        Language::Czech,
        Language::French,
        Language::Italian,
        Language::Japanese,
        Language::Korean,
        Language::Spanish,
    ];

    /// Kebab-case name used in config files and on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::ChineseSimplified => "chinese-simplified",
            Language::ChineseTraditional => "chinese-traditional",
            Language::Czech => "czech",
            Language::French => "french",
            Language::Italian => "italian",
            Language::Japanese => "japanese",
            Language::Korean => "korean",
            Language::Spanish => "spanish",
        }
    }

    /// Position of this language in [`Language::ALL`].
    pub const fn ordinal(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = WordseedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Language::ALL
            .iter()
            .copied()
            .find(|lang| lang.name() == wanted)
            .ok_or_else(|| WordseedError::UnknownLanguage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::English);
    }

    #[test]
    fn test_parse_names() {
        for lang in Language::ALL {
            assert_eq!(lang.name().parse::<Language>().unwrap(), lang);
        }
        assert_eq!("English".parse::<Language>().unwrap(), Language::English);
    }

    #[test]
    fn test_unknown_language() {
        assert_eq!(
            "klingon".parse::<Language>(),
            Err(WordseedError::UnknownLanguage("klingon".to_string()))
        );
    }

    #[test]
    fn test_ordinal_matches_all() {
        for (i, lang) in Language::ALL.iter().enumerate() {
            assert_eq!(lang.ordinal(), i);
        }
    }

    #[test]
    fn test_serde_kebab_case() {
        let json = serde_json::to_string(&Language::ChineseSimplified).unwrap();
        assert_eq!(json, "\"chinese-simplified\"");
    }
}
