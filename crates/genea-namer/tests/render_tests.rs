//! Rendering tests across locales
//!
//! These tests exercise the public API the way a search-result view does:
//! build (or decode) a descriptor, render it, read text and note.

use genea_domain::{AdoptionType, ReferenceType, RelationshipDescriptor, Sex, TreeSide, TreeSides};
use genea_namer::wire::RelationshipDto;
use genea_namer::{render, Label, Locale, RelationshipNamer};

fn en(d: &RelationshipDescriptor) -> String {
    render(d, Locale::English).to_string()
}

fn es(d: &RelationshipDescriptor) -> String {
    render(d, Locale::Spanish).to_string()
}

fn desc(kind: ReferenceType, sex: Sex) -> RelationshipDescriptor {
    RelationshipDescriptor::new(kind, sex)
}

#[test]
fn test_self_ignores_every_modifier() {
    let loaded = desc(ReferenceType::Oneself, Sex::Female)
        .with_generation(9)
        .with_grade(4)
        .half()
        .in_law(Sex::Male)
        .separated()
        .with_tree_sides(TreeSides::both())
        .with_adoption(AdoptionType::Foster);

    assert_eq!(es(&loaded), "esta persona");
    assert_eq!(en(&loaded), "this person");
}

#[test]
fn test_parents_by_sex() {
    let father = desc(ReferenceType::Parent, Sex::Male).with_generation(1);
    let mother = desc(ReferenceType::Parent, Sex::Female).with_generation(1);
    assert_eq!(en(&father), "father");
    assert_eq!(en(&mother), "mother");
    assert_eq!(es(&father), "padre");
    assert_eq!(es(&mother), "madre");
}

#[test]
fn test_ancestor_depths() {
    let at = |generation| desc(ReferenceType::Parent, Sex::Male).with_generation(generation);

    assert_eq!(en(&at(2)), "grandfather");
    assert_eq!(en(&at(3)), "great-grandfather");
    assert_eq!(en(&at(5)), "great-great-great-grandfather");

    let sixth = render(&at(6), Locale::English);
    assert_eq!(sixth.text, "second great-great-great-grandfather");
    assert_eq!(sixth.note.as_deref(), Some("direct ancestor of 6 generations"));

    // generation 5 is the last named stem and carries no ordinal
    let fifth = render(&at(5), Locale::Spanish);
    assert_eq!(fifth, Label::new("trastatarabuelo"));
}

#[test]
fn test_cousin_grades() {
    let cousin = |grade| desc(ReferenceType::Cousin, Sex::Male).with_grade(grade);
    assert_eq!(en(&cousin(1)), "cousin");
    assert_eq!(en(&cousin(2)), "second cousin");
    assert_eq!(en(&cousin(9)), "ninth cousin");
    assert_eq!(en(&cousin(11)), "cousin of the 11th degree");
    assert_eq!(es(&cousin(11)), "primo de 11° grado");
}

#[test]
fn test_sibling_modifiers() {
    let half = desc(ReferenceType::Sibling, Sex::Male).half();
    assert_eq!(en(&half), "half-brother");

    let in_law = desc(ReferenceType::Sibling, Sex::Female).in_law(Sex::Male);
    assert_eq!(en(&in_law), "sister-in-law");
    assert_eq!(es(&in_law), "cuñada");

    let ex = in_law.separated();
    assert_eq!(en(&ex), "ex-sister-in-law");
}

#[test]
fn test_pibling_note_rules() {
    let aunt = desc(ReferenceType::Pibling, Sex::Female).with_generation(1).with_grade(1);
    let label = render(&aunt, Locale::English);
    assert_eq!(label.text, "aunt");
    assert!(label.note.is_none());

    let second = desc(ReferenceType::Pibling, Sex::Male)
        .with_generation(1)
        .with_grade(2)
        .with_tree_sides(TreeSides::both());
    let label = render(&second, Locale::English);
    assert_eq!(label.text, "second uncle");
    assert_eq!(label.note.as_deref(), Some("cousin of father or mother"));

    let unknown_side = desc(ReferenceType::Pibling, Sex::Male).with_generation(1).with_grade(2);
    assert_eq!(es(&unknown_side), "tío segundo (primo de padre/madre)");

    let maternal = unknown_side.with_tree_sides(TreeSide::Mother);
    assert_eq!(es(&maternal), "tío segundo (primo de madre)");

    let great = desc(ReferenceType::Pibling, Sex::Male).with_generation(3).with_grade(2);
    assert_eq!(
        en(&great),
        "second great-granduncle (cousin of great-grandparent)"
    );
}

#[test]
fn test_nibling_notes() {
    let grandniece = desc(ReferenceType::Nibling, Sex::Female).with_generation(2).with_grade(1);
    assert_eq!(en(&grandniece), "grandniece (granddaughter of sibling)");

    let second = desc(ReferenceType::Nibling, Sex::Male).with_generation(1).with_grade(3).half();
    assert_eq!(en(&second), "third half-nephew (son of second half-cousin)");
    assert_eq!(
        es(&second),
        "medio-sobrino tercero (hijo de medio-primo/a segundo/a)"
    );
}

#[test]
fn test_adoption_in_both_directions() {
    let foster_parent = desc(ReferenceType::Parent, Sex::Male)
        .with_generation(1)
        .with_adoption(AdoptionType::Foster);
    let foster_child = desc(ReferenceType::Child, Sex::Female)
        .with_generation(1)
        .with_adoption(AdoptionType::Foster);
    let adopted_child = desc(ReferenceType::Child, Sex::Male)
        .with_generation(1)
        .with_adoption(AdoptionType::Adoptive);

    assert_eq!(en(&foster_parent), "foster father");
    assert_eq!(en(&foster_child), "foster daughter");
    assert_eq!(en(&adopted_child), "adopted son");
    assert_eq!(es(&foster_parent), "padre de crianza");
    assert_eq!(es(&foster_child), "hija de crianza");
    assert_eq!(es(&adopted_child), "hijo adoptivo");

    // adoption only qualifies the first generation
    let grandparent = desc(ReferenceType::Parent, Sex::Male)
        .with_generation(2)
        .with_adoption(AdoptionType::Adoptive);
    assert_eq!(en(&grandparent), "grandfather");
}

#[test]
fn test_in_law_parent_is_spouse_of_blood_relative() {
    let d = desc(ReferenceType::Parent, Sex::Male)
        .with_generation(1)
        .in_law(Sex::Female)
        .separated();
    assert_eq!(en(&d), "ex-spouse of mother");
    assert_eq!(es(&d), "ex-pareja de madre");
}

#[test]
fn test_decoded_payload_renders() {
    let dto: RelationshipDto = serde_json::from_str(
        r#"{"referenceType": "NIBLING", "generation": 1, "grade": 1, "personSex": "F", "treeSides": null}"#,
    )
    .unwrap();
    let namer = RelationshipNamer::new(Locale::Spanish);
    assert_eq!(namer.render(&dto.into()), Label::new("sobrina"));

    let unknown: RelationshipDto = serde_json::from_str(r#"{"referenceType": "GODPARENT"}"#).unwrap();
    assert_eq!(namer.render(&unknown.into()).text, "familiar");
}

#[test]
fn test_html_surface() {
    let d = desc(ReferenceType::Parent, Sex::Female).with_generation(6);
    assert_eq!(
        render(&d, Locale::Spanish).to_html(),
        "<b>trastatarabuela segunda</b><br>&nbsp; (ancestro directo de 6 generaciones)"
    );
}
