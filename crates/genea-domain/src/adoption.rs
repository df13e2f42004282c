//! Adoption module

/// How a first-generation parent/child link was established
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdoptionType {
    /// Legal adoption
    Adoptive,
    /// Foster care / upbringing
    Foster,
}

impl AdoptionType {
    /// Parse an adoption type from its wire name
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "ADOPTIVE" | "ADOPTED" => Some(AdoptionType::Adoptive),
            "FOSTER" => Some(AdoptionType::Foster),
            _ => None,
        }
    }
}

impl std::str::FromStr for AdoptionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid adoption type: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(AdoptionType::parse("ADOPTIVE"), Some(AdoptionType::Adoptive));
        assert_eq!(AdoptionType::parse("foster"), Some(AdoptionType::Foster));
        assert_eq!(AdoptionType::parse(""), None);
    }
}
