//! Localized display of the person fields that accompany a relationship.
//!
//! Search results obfuscate private data with ASCII placeholders (`<private>`,
//! `<no name>`) and carry dates as raw GEDCOM phrases (`ABT 12 JAN 1850`).

use crate::locale::Locale;
use crate::wire::PersonDto;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static QUALIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(BET|AND|ABT|EST|BEF|AFT)\b").expect("valid qualifier regex"));

static MONTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:(\d{1,2}) )?(JAN|FEB|MAR|APR|MAY|JUN|JUL|AUG|SEP|OCT|NOV|DEC)\b")
        .expect("valid month regex")
});

const MONTH_CODES: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];
const SPANISH_MONTHS: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic",
];
const ENGLISH_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Replace obfuscation placeholders in a person name.
///
/// Only the given name is ever private; surnames pass through unchanged.
/// Every occurrence of a placeholder is replaced, not only the first.
pub fn display_name(name: &str, locale: Locale) -> String {
    let (private, unknown, no_spouse) = match locale {
        Locale::Spanish => ("<nombre privado>", "<nombre desconocido>", "<sin pareja>"),
        Locale::English => ("<private name>", "<unknown name>", "<no spouse>"),
    };
    name.replace("<private>", private)
        .replace("<no name>", unknown)
        .replace("<no spouse>", no_spouse)
}

/// Localize a GEDCOM date phrase.
///
/// A fully private date (only the date of birth is ever obfuscated) becomes a
/// localized placeholder; otherwise qualifiers and month codes are translated
/// and everything else is kept.
pub fn display_date(date: &str, locale: Locale) -> String {
    if date == "<private>" {
        return match locale {
            Locale::Spanish => "<fecha de nac. privada>".to_string(),
            Locale::English => "<private birth date>".to_string(),
        };
    }

    let date = QUALIFIER.replace_all(date, |caps: &Captures| qualifier(&caps[1], locale).to_string());

    MONTH
        .replace_all(&date, |caps: &Captures| {
            let month = month_name(&caps[2], locale);
            match (caps.get(1), locale) {
                (Some(day), Locale::Spanish) => format!("{} de {} de", day.as_str(), month),
                (Some(day), Locale::English) => format!("{} {}", day.as_str(), month),
                (None, Locale::Spanish) => format!("{} de", month),
                (None, Locale::English) => month.to_string(),
            }
        })
        .into_owned()
}

/// Birth and death summary of a person: `n. 1850 - f. 1910`, `n. 1850 - Vive`.
///
/// Without a date of death the person's living status is shown instead; an
/// unknown status reads as deceased.
pub fn display_lifespan(person: &PersonDto, locale: Locale) -> String {
    let (born, died, living, deceased) = match locale {
        Locale::Spanish => (
            "n.",
            "f.",
            "Vive",
            if person.sex.as_deref() == Some("F") { "Fallecida" } else { "Fallecido" },
        ),
        Locale::English => ("b.", "d.", "Living", "Deceased"),
    };

    let birth = person.date_of_birth.as_deref();
    let death = person.date_of_death.as_deref();

    let mut out = match (birth, death) {
        (Some(date), _) => format!("{} {}", born, display_date(date, locale)),
        (None, Some(_)) => "?".to_string(),
        (None, None) => String::new(),
    };

    match death {
        Some(date) => out.push_str(&format!(" - {} {}", died, display_date(date, locale))),
        None => {
            if birth.is_some() {
                out.push_str(" - ");
            }
            out.push_str(if person.is_alive.unwrap_or(false) { living } else { deceased });
        }
    }
    out
}

fn qualifier(code: &str, locale: Locale) -> &'static str {
    match (code, locale) {
        ("BET", Locale::Spanish) => "entre",
        ("AND", Locale::Spanish) => "y",
        ("ABT", Locale::Spanish) => "aprox.",
        ("EST", Locale::Spanish) => "se estima",
        ("BEF", Locale::Spanish) => "antes de",
        ("AFT", Locale::Spanish) => "después de",
        ("BET", Locale::English) => "between",
        ("AND", Locale::English) => "and",
        ("ABT", Locale::English) => "about",
        ("EST", Locale::English) => "estimated",
        ("BEF", Locale::English) => "before",
        ("AFT", Locale::English) => "after",
        _ => "",
    }
}

fn month_name(code: &str, locale: Locale) -> &'static str {
    let index = MONTH_CODES.iter().position(|m| *m == code).unwrap_or(0);
    match locale {
        Locale::Spanish => SPANISH_MONTHS[index],
        Locale::English => ENGLISH_MONTHS[index],
    }
}
