//! The closed set of report languages and their speech locale tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Languages the analysis service can produce a report in.
///
/// The set is closed: the backend contract, the speech locale table, and the
/// CLI flag all enumerate exactly these eight names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Hindi,
    Telugu,
    Tamil,
    Kannada,
    Malayalam,
    Marathi,
    Bengali,
}

impl Language {
    /// Every supported language, in display order.
    pub const ALL: [Self; 8] = [
        Self::English,
        Self::Hindi,
        Self::Telugu,
        Self::Tamil,
        Self::Kannada,
        Self::Malayalam,
        Self::Marathi,
        Self::Bengali,
    ];

    /// The display name, which is also the exact string sent on the wire.
    pub const fn name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "Hindi",
            Self::Telugu => "Telugu",
            Self::Tamil => "Tamil",
            Self::Kannada => "Kannada",
            Self::Malayalam => "Malayalam",
            Self::Marathi => "Marathi",
            Self::Bengali => "Bengali",
        }
    }

    /// The speech-synthesis locale tag for this language.
    ///
    /// English maps to the regional `en-IN` variant, never bare `en`.
    pub const fn locale_tag(self) -> &'static str {
        match self {
            Self::English => "en-IN",
            Self::Hindi => "hi-IN",
            Self::Telugu => "te-IN",
            Self::Tamil => "ta-IN",
            Self::Kannada => "kn-IN",
            Self::Malayalam => "ml-IN",
            Self::Marathi => "mr-IN",
            Self::Bengali => "bn-IN",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown language name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language: {0}")]
pub struct ParseLanguageError(String);

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|language| language.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseLanguageError(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_table_covers_every_language() {
        let expected = [
            (Language::English, "en-IN"),
            (Language::Hindi, "hi-IN"),
            (Language::Telugu, "te-IN"),
            (Language::Tamil, "ta-IN"),
            (Language::Kannada, "kn-IN"),
            (Language::Malayalam, "ml-IN"),
            (Language::Marathi, "mr-IN"),
            (Language::Bengali, "bn-IN"),
        ];
        assert_eq!(expected.len(), Language::ALL.len());
        for (language, tag) in expected {
            assert_eq!(language.locale_tag(), tag);
        }
    }

    #[test]
    fn default_language_is_english_with_regional_locale() {
        assert_eq!(Language::default(), Language::English);
        assert_eq!(Language::default().locale_tag(), "en-IN");
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("hindi".parse::<Language>().unwrap(), Language::Hindi);
        assert_eq!("MALAYALAM".parse::<Language>().unwrap(), Language::Malayalam);
        assert_eq!(" Tamil ".parse::<Language>().unwrap(), Language::Tamil);
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "Klingon".parse::<Language>().unwrap_err();
        assert!(err.to_string().contains("Klingon"));
    }

    #[test]
    fn display_matches_wire_names() {
        assert_eq!(Language::English.to_string(), "English");
        assert_eq!(Language::Bengali.to_string(), "Bengali");
    }
}
