//! Relationship descriptor - the structured input of the relationship namer

use crate::{AdoptionType, ReferenceType, Sex, TreeSides};

/// Structured description of how a relative relates to the root person
///
/// Generation and grade combinations outside a kind's natural range are not
/// validated; renderers must stay total over every value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelationshipDescriptor {
    /// Kind of relationship
    pub reference_type: ReferenceType,

    /// Direct-line distance (1 = parent/child, 2 = grandparent/grandchild)
    pub generation: u32,

    /// Collateral distance (1 = first cousin / aunt / niece)
    pub grade: u32,

    /// Shares only one parent
    pub is_half: bool,

    /// Related through a spouse rather than by blood
    pub is_in_law: bool,

    /// The connecting spousal relationship has ended
    pub is_separated: bool,

    /// Sex of the person being named
    pub person_sex: Sex,

    /// Sex of the blood relative on the other side of the marriage (in-law only)
    pub spouse_sex: Sex,

    /// Which parent's side of the tree the relative belongs to
    pub tree_sides: TreeSides,

    /// Adoption of the first-generation parent/child link
    pub adoption_type: Option<AdoptionType>,
}

impl RelationshipDescriptor {
    /// Create a descriptor for a blood relative with no modifiers
    pub fn new(reference_type: ReferenceType, person_sex: Sex) -> Self {
        Self {
            reference_type,
            generation: 0,
            grade: 0,
            is_half: false,
            is_in_law: false,
            is_separated: false,
            person_sex,
            spouse_sex: Sex::Female,
            tree_sides: TreeSides::none(),
            adoption_type: None,
        }
    }

    /// Set the generation distance
    pub fn with_generation(mut self, generation: u32) -> Self {
        self.generation = generation;
        self
    }

    /// Set the collateral grade
    pub fn with_grade(mut self, grade: u32) -> Self {
        self.grade = grade;
        self
    }

    /// Mark as a half relationship
    pub fn half(mut self) -> Self {
        self.is_half = true;
        self
    }

    /// Mark as an in-law relationship through a spouse of the given sex
    pub fn in_law(mut self, spouse_sex: Sex) -> Self {
        self.is_in_law = true;
        self.spouse_sex = spouse_sex;
        self
    }

    /// Mark the connecting spousal relationship as ended
    pub fn separated(mut self) -> Self {
        self.is_separated = true;
        self
    }

    /// Set the tree sides
    pub fn with_tree_sides(mut self, tree_sides: impl Into<TreeSides>) -> Self {
        self.tree_sides = tree_sides.into();
        self
    }

    /// Set the adoption type
    pub fn with_adoption(mut self, adoption_type: AdoptionType) -> Self {
        self.adoption_type = Some(adoption_type);
        self
    }

    /// Sex that drives the grammatical gender of the term.
    ///
    /// For in-law relationships the noun names the blood relative across the
    /// marriage ("spouse of *mother*"), so the spouse's sex applies.
    pub fn effective_sex(&self) -> Sex {
        if self.is_in_law {
            self.spouse_sex
        } else {
            self.person_sex
        }
    }
}
