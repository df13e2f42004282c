//! English kinship terms.

use super::{Gender, Line, Noun, Stem, Vocabulary};
use genea_domain::AdoptionType;

const STEM_PREFIXES: [&str; 4] = ["grand", "great-grand", "great-great-grand", "great-great-great-grand"];

const ORDINALS: [&str; 8] = [
    "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth", "ninth",
];

/// English vocabulary.
#[derive(Debug, Clone, Copy, Default)]
pub struct English;

fn pick(gender: Gender, masculine: &'static str, feminine: &'static str, common: &'static str) -> &'static str {
    match gender {
        Gender::Masculine => masculine,
        Gender::Feminine => feminine,
        Gender::Common => common,
    }
}

/// `1st`, `2nd`, `11th`, `23rd`, ...
fn numeric_ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

impl Vocabulary for English {
    fn noun(&self, noun: Noun, gender: Gender) -> String {
        let word = match noun {
            Noun::Oneself => "this person",
            Noun::Spouse => "spouse",
            Noun::Parent => pick(gender, "father", "mother", "parent"),
            Noun::Child => pick(gender, "son", "daughter", "child"),
            Noun::Sibling => pick(gender, "brother", "sister", "sibling"),
            Noun::Cousin => "cousin",
            Noun::ChildInLaw => pick(gender, "son-in-law", "daughter-in-law", "child-in-law"),
            Noun::SiblingInLaw => pick(gender, "brother-in-law", "sister-in-law", "sibling-in-law"),
            Noun::Relative => "relative",
        };
        word.to_string()
    }

    fn lineage(&self, line: Line, stem: Stem, gender: Gender) -> String {
        let base = match line {
            Line::Ascending => pick(gender, "father", "mother", "parent"),
            Line::Descending => pick(gender, "son", "daughter", "child"),
        };
        format!("{}{}", STEM_PREFIXES[stem.index()], base)
    }

    fn collateral(&self, line: Line, stem: Option<Stem>, gender: Gender) -> String {
        let prefix = stem.map_or("", |s| STEM_PREFIXES[s.index()]);
        let (masculine, feminine) = match line {
            Line::Ascending => ("uncle", "aunt"),
            Line::Descending => ("nephew", "niece"),
        };
        match gender {
            Gender::Masculine => format!("{}{}", prefix, masculine),
            Gender::Feminine => format!("{}{}", prefix, feminine),
            Gender::Common => format!("{}{} or {}{}", prefix, feminine, prefix, masculine),
        }
    }

    fn graded(&self, term: String, grade: u32, _gender: Gender) -> String {
        match grade {
            0 | 1 => term,
            2..=9 => format!("{} {}", ORDINALS[grade as usize - 2], term),
            _ => format!("{} of the {} degree", term, numeric_ordinal(grade)),
        }
    }

    fn adopted(&self, term: String, line: Line, adoption: AdoptionType, _gender: Gender) -> String {
        let qualifier = match (adoption, line) {
            (AdoptionType::Adoptive, Line::Ascending) => "adoptive",
            (AdoptionType::Adoptive, Line::Descending) => "adopted",
            (AdoptionType::Foster, _) => "foster",
        };
        format!("{} {}", qualifier, term)
    }

    fn direct_line(&self, line: Line, generation: u32) -> String {
        match line {
            Line::Ascending => format!("direct ancestor of {} generations", generation),
            Line::Descending => format!("direct descendant of {} generations", generation),
        }
    }

    fn either_parent(&self) -> &'static str {
        "father or mother"
    }

    fn separated_prefix(&self) -> &'static str {
        "ex-"
    }

    fn half_prefix(&self) -> &'static str {
        "half-"
    }

    fn spouse_of(&self) -> &'static str {
        "spouse of "
    }

    fn of(&self) -> &'static str {
        " of "
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_ordinal() {
        assert_eq!(numeric_ordinal(10), "10th");
        assert_eq!(numeric_ordinal(11), "11th");
        assert_eq!(numeric_ordinal(12), "12th");
        assert_eq!(numeric_ordinal(21), "21st");
        assert_eq!(numeric_ordinal(22), "22nd");
        assert_eq!(numeric_ordinal(103), "103rd");
        assert_eq!(numeric_ordinal(111), "111th");
    }

    #[test]
    fn test_graded_placement() {
        let en = English;
        assert_eq!(en.graded("cousin".into(), 1, Gender::Common), "cousin");
        assert_eq!(en.graded("cousin".into(), 2, Gender::Common), "second cousin");
        assert_eq!(en.graded("cousin".into(), 11, Gender::Common), "cousin of the 11th degree");
    }

    #[test]
    fn test_lineage_and_collateral() {
        let en = English;
        assert_eq!(en.lineage(Line::Ascending, Stem::Grand, Gender::Masculine), "grandfather");
        assert_eq!(en.lineage(Line::Descending, Stem::GreatGrand, Gender::Feminine), "great-granddaughter");
        assert_eq!(en.lineage(Line::Ascending, Stem::GreatGreatGrand, Gender::Common), "great-great-grandparent");
        assert_eq!(en.collateral(Line::Ascending, None, Gender::Feminine), "aunt");
        assert_eq!(en.collateral(Line::Descending, Some(Stem::Grand), Gender::Masculine), "grandnephew");
        assert_eq!(en.collateral(Line::Ascending, Some(Stem::Grand), Gender::Common), "grandaunt or granduncle");
    }

    #[test]
    fn test_adoption_qualifiers() {
        let en = English;
        assert_eq!(en.adopted("mother".into(), Line::Ascending, AdoptionType::Adoptive, Gender::Feminine), "adoptive mother");
        assert_eq!(en.adopted("son".into(), Line::Descending, AdoptionType::Adoptive, Gender::Masculine), "adopted son");
        assert_eq!(en.adopted("father".into(), Line::Ascending, AdoptionType::Foster, Gender::Masculine), "foster father");
    }
}
