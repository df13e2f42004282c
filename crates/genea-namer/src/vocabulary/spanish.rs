//! Spanish kinship terms.
//!
//! Most nouns are a root plus a gender ending (`abuel` + `o`/`a`/`o/a`);
//! ordinals and adoption qualifiers follow the noun.

use super::{Gender, Line, Noun, Stem, Vocabulary};
use genea_domain::AdoptionType;

const ASCENDING_STEMS: [&str; 4] = ["abuel", "bisabuel", "tatarabuel", "trastatarabuel"];
const DESCENDING_STEMS: [&str; 4] = ["niet", "bisniet", "tataraniet", "trastataraniet"];

const ORDINALS: [&str; 8] = [
    "segund", "tercer", "cuart", "quint", "sext", "séptim", "octav", "noven",
];

/// Spanish vocabulary (the canonical wording of search results).
#[derive(Debug, Clone, Copy, Default)]
pub struct Spanish;

fn ending(gender: Gender) -> &'static str {
    match gender {
        Gender::Masculine => "o",
        Gender::Feminine => "a",
        Gender::Common => "o/a",
    }
}

fn pick(gender: Gender, masculine: &str, feminine: &str) -> String {
    match gender {
        Gender::Masculine => masculine.to_string(),
        Gender::Feminine => feminine.to_string(),
        Gender::Common => format!("{}/{}", masculine, feminine),
    }
}

impl Spanish {
    /// Ordinal suffix for a collateral grade, leading space included.
    ///
    /// `1` and below have no suffix; `2..=9` use the gendered ordinal word;
    /// larger grades use the generic `de N° grado` form.
    pub fn ordinal_suffix(grade: u32, gender: Gender) -> String {
        match grade {
            0 | 1 => String::new(),
            2..=9 => format!(" {}{}", ORDINALS[grade as usize - 2], ending(gender)),
            _ => format!(" de {}° grado", grade),
        }
    }

    /// Adoption suffix, leading space included. Foster wording is not gendered.
    pub fn adoption_suffix(adoption: AdoptionType, gender: Gender) -> String {
        match adoption {
            AdoptionType::Adoptive => format!(" adoptiv{}", ending(gender)),
            AdoptionType::Foster => " de crianza".to_string(),
        }
    }
}

impl Vocabulary for Spanish {
    fn noun(&self, noun: Noun, gender: Gender) -> String {
        match noun {
            Noun::Oneself => "esta persona".to_string(),
            Noun::Spouse => "pareja".to_string(),
            Noun::Parent => pick(gender, "padre", "madre"),
            Noun::Child => format!("hij{}", ending(gender)),
            Noun::Sibling => format!("herman{}", ending(gender)),
            Noun::Cousin => format!("prim{}", ending(gender)),
            Noun::ChildInLaw => pick(gender, "yerno", "nuera"),
            Noun::SiblingInLaw => format!("cuñad{}", ending(gender)),
            Noun::Relative => "familiar".to_string(),
        }
    }

    fn lineage(&self, line: Line, stem: Stem, gender: Gender) -> String {
        let roots = match line {
            Line::Ascending => &ASCENDING_STEMS,
            Line::Descending => &DESCENDING_STEMS,
        };
        format!("{}{}", roots[stem.index()], ending(gender))
    }

    fn collateral(&self, line: Line, stem: Option<Stem>, gender: Gender) -> String {
        let base = match line {
            Line::Ascending => format!("tí{}", ending(gender)),
            Line::Descending => format!("sobrin{}", ending(gender)),
        };
        match stem {
            Some(stem) => format!("{}-{}", base, self.lineage(line, stem, gender)),
            None => base,
        }
    }

    fn graded(&self, term: String, grade: u32, gender: Gender) -> String {
        term + &Self::ordinal_suffix(grade, gender)
    }

    fn adopted(&self, term: String, _line: Line, adoption: AdoptionType, gender: Gender) -> String {
        term + &Self::adoption_suffix(adoption, gender)
    }

    fn direct_line(&self, line: Line, generation: u32) -> String {
        match line {
            Line::Ascending => format!("ancestro directo de {} generaciones", generation),
            Line::Descending => format!("descendiente directo de {} generaciones", generation),
        }
    }

    fn either_parent(&self) -> &'static str {
        "padre/madre"
    }

    fn separated_prefix(&self) -> &'static str {
        "ex-"
    }

    fn half_prefix(&self) -> &'static str {
        "medio-"
    }

    fn spouse_of(&self) -> &'static str {
        "pareja de "
    }

    fn of(&self) -> &'static str {
        " de "
    }
}
