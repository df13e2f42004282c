//! Lexical tables for each locale.
//!
//! The composer in [`crate::namer`] decides *which* pieces a label is made of;
//! a [`Vocabulary`] decides how each piece is spelled and where ordinals and
//! adoption qualifiers attach.

mod english;
mod spanish;

pub use english::English;
pub use spanish::Spanish;

use genea_domain::{AdoptionType, Sex};

/// Grammatical gender of a generated noun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    /// Male form
    Masculine,
    /// Female form
    Feminine,
    /// Form that covers both ("abuelo/a", "grandparent")
    Common,
}

impl From<Sex> for Gender {
    fn from(sex: Sex) -> Self {
        match sex {
            Sex::Male => Gender::Masculine,
            Sex::Female => Gender::Feminine,
        }
    }
}

/// Base kinship nouns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Noun {
    /// The root person
    Oneself,
    /// Partner
    Spouse,
    /// First-generation ancestor
    Parent,
    /// First-generation descendant
    Child,
    /// Sibling
    Sibling,
    /// Cousin
    Cousin,
    /// Spouse of a child
    ChildInLaw,
    /// Spouse of a sibling
    SiblingInLaw,
    /// Generic relative
    Relative,
}

/// Direction of a line of descent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    /// Towards ancestors
    Ascending,
    /// Towards descendants
    Descending,
}

/// Named lineage stems for generations 2 to 5.
///
/// Generations beyond 5 keep the last stem; the remaining distance is carried
/// by an ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stem {
    /// Generation 2
    Grand,
    /// Generation 3
    GreatGrand,
    /// Generation 4
    GreatGreatGrand,
    /// Generation 5 and beyond
    GreatGreatGreatGrand,
}

impl Stem {
    /// Stem for a generation distance, `None` for the first generation.
    pub fn for_generation(generation: u32) -> Option<Self> {
        match generation {
            0 | 1 => None,
            2 => Some(Stem::Grand),
            3 => Some(Stem::GreatGrand),
            4 => Some(Stem::GreatGreatGrand),
            _ => Some(Stem::GreatGreatGreatGrand),
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Stem::Grand => 0,
            Stem::GreatGrand => 1,
            Stem::GreatGreatGrand => 2,
            Stem::GreatGreatGreatGrand => 3,
        }
    }
}

/// Spelling rules of one language.
pub trait Vocabulary: Send + Sync {
    /// A base noun in the given gender.
    fn noun(&self, noun: Noun, gender: Gender) -> String;

    /// Direct-line term for generation 2 and beyond ("abuelo", "great-grandson").
    fn lineage(&self, line: Line, stem: Stem, gender: Gender) -> String;

    /// Aunt/uncle (ascending) or niece/nephew (descending) line term, optionally
    /// compounded with a lineage stem ("tío-abuelo", "granduncle").
    fn collateral(&self, line: Line, stem: Option<Stem>, gender: Gender) -> String;

    /// Attach the collateral ordinal for `grade` to a term. Grades up to 1 leave
    /// the term unchanged.
    fn graded(&self, term: String, grade: u32, gender: Gender) -> String;

    /// Qualify a first-generation parent/child term with its adoption type.
    fn adopted(&self, term: String, line: Line, adoption: AdoptionType, gender: Gender) -> String;

    /// Note spelling out the exact depth of a distant direct relationship.
    fn direct_line(&self, line: Line, generation: u32) -> String;

    /// Label for "either parent", used when both or no tree sides are known.
    fn either_parent(&self) -> &'static str;

    /// Prefix for ended relationships ("ex-").
    fn separated_prefix(&self) -> &'static str;

    /// Prefix for half relationships.
    fn half_prefix(&self) -> &'static str;

    /// Prefix naming the spouse of a blood relative, including trailing space.
    fn spouse_of(&self) -> &'static str;

    /// Connector between a relative and the person it hangs from, spaces included.
    fn of(&self) -> &'static str;
}
