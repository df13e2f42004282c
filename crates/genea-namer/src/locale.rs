//! Output language selection.

use crate::error::NamerError;
use crate::vocabulary::{English, Spanish, Vocabulary};
use serde::{Deserialize, Serialize};

static SPANISH: Spanish = Spanish;
static ENGLISH: English = English;

/// Language of rendered labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Spanish (default)
    #[default]
    #[serde(alias = "es")]
    Spanish,
    /// English
    #[serde(alias = "en")]
    English,
}

impl Locale {
    /// Get the locale name
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Spanish => "spanish",
            Locale::English => "english",
        }
    }

    /// Parse a locale from a name or language code
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "es" | "spanish" | "español" | "espanol" => Some(Locale::Spanish),
            "en" | "english" => Some(Locale::English),
            _ => None,
        }
    }

    /// Vocabulary used to spell labels in this locale
    pub fn vocabulary(&self) -> &'static dyn Vocabulary {
        match self {
            Locale::Spanish => &SPANISH,
            Locale::English => &ENGLISH,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Locale {
    type Err = NamerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| NamerError::UnknownLocale(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codes() {
        assert_eq!(Locale::parse("es"), Some(Locale::Spanish));
        assert_eq!(Locale::parse("English"), Some(Locale::English));
        assert!(matches!("fr".parse::<Locale>(), Err(NamerError::UnknownLocale(_))));
    }

    #[test]
    fn test_default_is_spanish() {
        assert_eq!(Locale::default(), Locale::Spanish);
    }

    #[test]
    fn test_serde_aliases() {
        let locale: Locale = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(locale, Locale::English);
        assert_eq!(serde_json::to_string(&Locale::Spanish).unwrap(), "\"spanish\"");
    }
}
