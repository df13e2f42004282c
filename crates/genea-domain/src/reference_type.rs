//! Reference type module - the kind of kinship being described

/// Kind of relationship between the root person and a relative
///
/// Collateral kinds are generalized to any depth:
/// - Pibling: parent's sibling, or the sibling of any ancestor
/// - Nibling: sibling's child, or any descendant of a sibling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceType {
    /// The root person itself
    Oneself,

    /// Husband, wife or partner of the root person
    Spouse,

    /// Direct ancestor (parent, grandparent, ...)
    Parent,

    /// Direct descendant (child, grandchild, ...)
    Child,

    /// Shares at least one parent
    Sibling,

    /// Shares an ancestor at the same generation depth
    Cousin,

    /// Aunt/uncle line
    Pibling,

    /// Niece/nephew line
    Nibling,

    /// Generic relative, used for any kind without a dedicated term
    Relative,
}

impl ReferenceType {
    /// Get the wire name of the reference type
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceType::Oneself => "SELF",
            ReferenceType::Spouse => "SPOUSE",
            ReferenceType::Parent => "PARENT",
            ReferenceType::Child => "CHILD",
            ReferenceType::Sibling => "SIBLING",
            ReferenceType::Cousin => "COUSIN",
            ReferenceType::Pibling => "PIBLING",
            ReferenceType::Nibling => "NIBLING",
            ReferenceType::Relative => "RELATIVE",
        }
    }

    /// Parse a reference type from its wire name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "SELF" => Some(ReferenceType::Oneself),
            "SPOUSE" => Some(ReferenceType::Spouse),
            "PARENT" => Some(ReferenceType::Parent),
            "CHILD" => Some(ReferenceType::Child),
            "SIBLING" => Some(ReferenceType::Sibling),
            "COUSIN" => Some(ReferenceType::Cousin),
            "PIBLING" => Some(ReferenceType::Pibling),
            "NIBLING" => Some(ReferenceType::Nibling),
            "RELATIVE" | "FAMILY" => Some(ReferenceType::Relative),
            _ => None,
        }
    }

    /// Whether the kind is measured in generations (direct or collateral lines)
    pub fn uses_generation(&self) -> bool {
        matches!(
            self,
            ReferenceType::Parent
                | ReferenceType::Child
                | ReferenceType::Pibling
                | ReferenceType::Nibling
        )
    }

    /// Whether the kind is measured in collateral grades
    pub fn uses_grade(&self) -> bool {
        matches!(
            self,
            ReferenceType::Cousin | ReferenceType::Pibling | ReferenceType::Nibling
        )
    }
}

impl std::fmt::Display for ReferenceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ReferenceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid reference type: {}", s))
    }
}
