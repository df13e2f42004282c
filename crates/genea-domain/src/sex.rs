//! Sex of a person, used to pick the grammatical gender of a kinship term

/// Sex of a person
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
    /// Male
    Male,
    /// Female
    Female,
}

impl Sex {
    /// Parse a strict sex code (`M`/`F`, also `male`/`female`)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "m" | "male" => Some(Sex::Male),
            "f" | "female" => Some(Sex::Female),
            _ => None,
        }
    }

    /// Lenient decoding used at the wire boundary: only `M` is male.
    ///
    /// Undefined (`U`) and absent values fall on the female form, which is how
    /// search results have always been labelled.
    pub fn from_code(code: Option<&str>) -> Self {
        match code {
            Some(c) if c.eq_ignore_ascii_case("M") => Sex::Male,
            _ => Sex::Female,
        }
    }
}

impl std::str::FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid sex: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_parse() {
        assert_eq!(Sex::parse("M"), Some(Sex::Male));
        assert_eq!(Sex::parse("female"), Some(Sex::Female));
        assert_eq!(Sex::parse("U"), None);
        assert!("x".parse::<Sex>().is_err());
    }

    #[test]
    fn test_lenient_code() {
        assert_eq!(Sex::from_code(Some("M")), Sex::Male);
        assert_eq!(Sex::from_code(Some("F")), Sex::Female);
        assert_eq!(Sex::from_code(Some("U")), Sex::Female);
        assert_eq!(Sex::from_code(None), Sex::Female);
    }
}
