//! Relationship namer - descriptor to kinship label
//!
//! A label is assembled from a fixed set of parts:
//!
//! ```text
//! [spouse prefix][half prefix]<term>[ordinal]   (note: alternate phrasing)
//! ```
//!
//! The spouse prefix ("pareja de ", "ex-pareja de ") appears for in-law
//! relatives, who are named as the spouse of the blood relative. Which term,
//! ordinal and note apply depends on the reference type; spelling is delegated
//! to the locale's [`Vocabulary`].

use crate::label::Label;
use crate::locale::Locale;
use crate::vocabulary::{Gender, Line, Noun, Stem, Vocabulary};
use genea_domain::{ReferenceType, RelationshipDescriptor, TreeSide, TreeSides};

/// Generation from which direct-line labels carry an explicit depth note.
pub const DIRECT_LINE_NOTE_FROM: u32 = 6;

/// Generations covered by named stems before ordinals take over.
const NAMED_STEM_DEPTH: u32 = 4;

/// Renders relationship descriptors as kinship labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelationshipNamer {
    locale: Locale,
}

impl RelationshipNamer {
    /// Create a namer for a locale
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Locale of rendered labels
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Render a descriptor. Total: every descriptor yields a label.
    pub fn render(&self, descriptor: &RelationshipDescriptor) -> Label {
        Composer {
            vocab: self.locale.vocabulary(),
            d: descriptor,
        }
        .compose()
    }
}

/// Render a descriptor with the given locale.
pub fn render(descriptor: &RelationshipDescriptor, locale: Locale) -> Label {
    RelationshipNamer::new(locale).render(descriptor)
}

struct Composer<'a> {
    vocab: &'a dyn Vocabulary,
    d: &'a RelationshipDescriptor,
}

impl Composer<'_> {
    fn compose(&self) -> Label {
        match self.d.reference_type {
            ReferenceType::Oneself => Label::new(self.vocab.noun(Noun::Oneself, self.gender())),
            ReferenceType::Spouse => Label::new(format!(
                "{}{}",
                self.separated(),
                self.vocab.noun(Noun::Spouse, self.gender())
            )),
            ReferenceType::Parent => self.direct(Line::Ascending),
            ReferenceType::Child => self.direct(Line::Descending),
            ReferenceType::Sibling => self.sibling(),
            ReferenceType::Cousin => self.cousin(),
            ReferenceType::Pibling => self.collateral(Line::Ascending),
            ReferenceType::Nibling => self.collateral(Line::Descending),
            ReferenceType::Relative => Label::new(self.vocab.noun(Noun::Relative, self.gender())),
        }
    }

    /// Gender of the term: the spouse's sex for in-laws, the person's otherwise.
    fn gender(&self) -> Gender {
        self.d.effective_sex().into()
    }

    /// Gender for terms that name the in-law directly (son-in-law, sister-in-law).
    fn own_gender(&self) -> Gender {
        self.d.person_sex.into()
    }

    fn separated(&self) -> &'static str {
        if self.d.is_separated {
            self.vocab.separated_prefix()
        } else {
            ""
        }
    }

    fn spouse_prefix(&self) -> String {
        if self.d.is_in_law {
            format!("{}{}", self.separated(), self.vocab.spouse_of())
        } else {
            String::new()
        }
    }

    fn half(&self) -> &'static str {
        if self.d.is_half {
            self.vocab.half_prefix()
        } else {
            ""
        }
    }

    fn direct(&self, line: Line) -> Label {
        let gender = self.gender();
        let prefix = self.spouse_prefix();

        let Some(stem) = Stem::for_generation(self.d.generation) else {
            return self.first_generation(line, gender, &prefix);
        };

        let term = self.vocab.graded(
            self.vocab.lineage(line, stem, gender),
            self.d.generation.saturating_sub(NAMED_STEM_DEPTH),
            gender,
        );
        let label = Label::new(format!("{}{}", prefix, term));

        if self.d.generation >= DIRECT_LINE_NOTE_FROM {
            label.with_note(format!(
                "{}{}",
                prefix,
                self.vocab.direct_line(line, self.d.generation)
            ))
        } else {
            label
        }
    }

    fn first_generation(&self, line: Line, gender: Gender, prefix: &str) -> Label {
        if line == Line::Descending && self.d.is_in_law && self.d.adoption_type.is_none() {
            return Label::new(format!(
                "{}{}",
                self.separated(),
                self.vocab.noun(Noun::ChildInLaw, self.own_gender())
            ));
        }

        let noun = match line {
            Line::Ascending => Noun::Parent,
            Line::Descending => Noun::Child,
        };
        let mut term = self.vocab.noun(noun, gender);
        if let Some(adoption) = self.d.adoption_type {
            term = self.vocab.adopted(term, line, adoption, gender);
        }
        Label::new(format!("{}{}", prefix, term))
    }

    fn sibling(&self) -> Label {
        // the only term rendered without emphasis
        if self.d.is_in_law && !self.d.is_half {
            return Label::plain(format!(
                "{}{}",
                self.separated(),
                self.vocab.noun(Noun::SiblingInLaw, self.own_gender())
            ));
        }

        Label::new(format!(
            "{}{}{}",
            self.spouse_prefix(),
            self.half(),
            self.vocab.noun(Noun::Sibling, self.gender())
        ))
    }

    fn cousin(&self) -> Label {
        let gender = self.gender();
        let term = format!("{}{}", self.half(), self.vocab.noun(Noun::Cousin, gender));
        Label::new(format!(
            "{}{}",
            self.spouse_prefix(),
            self.vocab.graded(term, self.d.grade, gender)
        ))
    }

    fn collateral(&self, line: Line) -> Label {
        let gender = self.gender();
        let prefix = self.spouse_prefix();
        let stem = Stem::for_generation(self.d.generation);

        let term = format!("{}{}", self.half(), self.vocab.collateral(line, stem, gender));
        let label = Label::new(format!(
            "{}{}",
            prefix,
            self.vocab.graded(term, self.d.grade, gender)
        ));

        if stem.is_none() && self.d.grade < 2 {
            return label;
        }

        let note = match line {
            Line::Ascending => self.pibling_note(stem, gender),
            Line::Descending => self.nibling_note(stem, gender),
        };
        label.with_note(format!("{}{}", prefix, note))
    }

    /// "{sibling|cousin of grade-1} of {ancestor}"
    fn pibling_note(&self, stem: Option<Stem>, gender: Gender) -> String {
        let relative = format!("{}{}", self.half(), self.vocab.noun(self.collateral_noun(), gender));
        let ancestor = match stem {
            Some(stem) => self.vocab.lineage(Line::Ascending, stem, Gender::Common),
            None => self.tree_side_label(self.vocab.either_parent()),
        };
        format!(
            "{}{}{}",
            self.vocab.graded(relative, self.d.grade.saturating_sub(1), gender),
            self.vocab.of(),
            ancestor
        )
    }

    /// "{child-equivalent} of {sibling|cousin of grade-1}"
    fn nibling_note(&self, stem: Option<Stem>, gender: Gender) -> String {
        let descendant = match stem {
            Some(stem) => self.vocab.lineage(Line::Descending, stem, gender),
            None => self.vocab.noun(Noun::Child, gender),
        };
        let relative = format!(
            "{}{}",
            self.half(),
            self.vocab.noun(self.collateral_noun(), Gender::Common)
        );
        format!(
            "{}{}{}",
            descendant,
            self.vocab.of(),
            self.vocab.graded(relative, self.d.grade.saturating_sub(1), Gender::Common)
        )
    }

    /// A first-grade pibling/nibling hangs from a sibling, deeper grades from a cousin.
    fn collateral_noun(&self) -> Noun {
        if self.d.grade <= 1 {
            Noun::Sibling
        } else {
            Noun::Cousin
        }
    }

    fn tree_side_label(&self, default: &str) -> String {
        tree_side_label(self.vocab, self.d.tree_sides, default)
    }
}

/// Which parent a collateral relative hangs from, falling back to `default`
/// when no side is known.
pub fn tree_side_label(vocab: &dyn Vocabulary, sides: TreeSides, default: &str) -> String {
    match (sides.contains(TreeSide::Father), sides.contains(TreeSide::Mother)) {
        (true, true) => vocab.either_parent().to_string(),
        (true, false) => vocab.noun(Noun::Parent, Gender::Masculine),
        (false, true) => vocab.noun(Noun::Parent, Gender::Feminine),
        (false, false) => default.to_string(),
    }
}
