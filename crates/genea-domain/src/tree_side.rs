//! Tree side module - which parent's side of the tree a relative sits on

/// One side of the root person's tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeSide {
    /// Father's side
    Father,
    /// Mother's side
    Mother,
}

impl TreeSide {
    /// Parse a tree side from its wire name
    ///
    /// Other sides reported by the backend (spouse, descendant) carry no
    /// meaning for naming and yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "FATHER" => Some(TreeSide::Father),
            "MOTHER" => Some(TreeSide::Mother),
            _ => None,
        }
    }
}

impl std::str::FromStr for TreeSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid tree side: {}", s))
    }
}

/// Set of tree sides
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TreeSides {
    father: bool,
    mother: bool,
}

impl TreeSides {
    /// Empty set
    pub fn none() -> Self {
        Self::default()
    }

    /// Both sides
    pub fn both() -> Self {
        Self {
            father: true,
            mother: true,
        }
    }

    /// Add a side
    pub fn insert(&mut self, side: TreeSide) {
        match side {
            TreeSide::Father => self.father = true,
            TreeSide::Mother => self.mother = true,
        }
    }

    /// Check membership
    pub fn contains(&self, side: TreeSide) -> bool {
        match side {
            TreeSide::Father => self.father,
            TreeSide::Mother => self.mother,
        }
    }

    /// True when no side is known
    pub fn is_empty(&self) -> bool {
        !self.father && !self.mother
    }
}

impl FromIterator<TreeSide> for TreeSides {
    fn from_iter<I: IntoIterator<Item = TreeSide>>(iter: I) -> Self {
        let mut sides = TreeSides::none();
        for side in iter {
            sides.insert(side);
        }
        sides
    }
}

impl From<TreeSide> for TreeSides {
    fn from(side: TreeSide) -> Self {
        std::iter::once(side).collect()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn side() -> impl Strategy<Value = TreeSide> {
        prop_oneof![Just(TreeSide::Father), Just(TreeSide::Mother)]
    }

    proptest! {
        /// Property: a collected set holds exactly the sides that were seen
        #[test]
        fn test_collect_matches_membership(sides in prop::collection::vec(side(), 0..8)) {
            let set: TreeSides = sides.iter().copied().collect();
            for candidate in [TreeSide::Father, TreeSide::Mother] {
                prop_assert_eq!(set.contains(candidate), sides.contains(&candidate));
            }
            prop_assert_eq!(set.is_empty(), sides.is_empty());
        }

        /// Property: wire names outside FATHER/MOTHER never parse
        #[test]
        fn test_unknown_wire_sides_rejected(name in "[A-Z]{1,12}") {
            prop_assume!(name != "FATHER" && name != "MOTHER");
            prop_assert!(name.parse::<TreeSide>().is_err());
        }
    }
}
