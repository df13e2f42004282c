//! Wire types of the person search payload and their conversion to domain types.
//!
//! Every field is optional on the wire. Conversion never fails: absent values
//! mean "not applicable", negative counters clamp to zero and unrecognized
//! enum names degrade (unknown kinds become [`ReferenceType::Relative`]).

use crate::error::{NamerError, Result};
use genea_domain::{AdoptionType, ReferenceType, RelationshipDescriptor, Sex, TreeSide, TreeSides};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Relationship as delivered inside a search result (`maxDistantRelationship`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipDto {
    /// Kind of relationship (`PARENT`, `COUSIN`, ...)
    #[serde(default)]
    pub reference_type: Option<String>,
    /// Direct-line distance
    #[serde(default)]
    pub generation: Option<i64>,
    /// Collateral distance
    #[serde(default)]
    pub grade: Option<i64>,
    /// Half relationship
    #[serde(default)]
    pub is_half: Option<bool>,
    /// Through a spouse
    #[serde(default)]
    pub is_in_law: Option<bool>,
    /// Connecting spousal relationship ended
    #[serde(default)]
    pub is_separated: Option<bool>,
    /// `M`, `F` or `U`
    #[serde(default)]
    pub person_sex: Option<String>,
    /// `M`, `F` or `U`
    #[serde(default)]
    pub spouse_sex: Option<String>,
    /// `FATHER`, `MOTHER` (others ignored)
    #[serde(default)]
    pub tree_sides: Option<Vec<String>>,
    /// `ADOPTIVE` or `FOSTER`
    #[serde(default)]
    pub adoption_type: Option<String>,
    /// Display name of the related person (may hold obfuscation placeholders)
    #[serde(default)]
    pub person_name: Option<String>,
}

/// Person entry of a search result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonDto {
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// `M`, `F` or `U`
    #[serde(default)]
    pub sex: Option<String>,
    /// Whether the person is alive
    #[serde(default)]
    pub is_alive: Option<bool>,
    /// GEDCOM date phrase
    #[serde(default)]
    pub date_of_birth: Option<String>,
    /// Place of birth
    #[serde(default)]
    pub place_of_birth: Option<String>,
    /// GEDCOM date phrase
    #[serde(default)]
    pub date_of_death: Option<String>,
    /// Most distant relative found in the person's tree
    #[serde(default)]
    pub max_distant_relationship: Option<RelationshipDto>,
}

/// Search result envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultDto {
    /// Matching people
    #[serde(default)]
    pub people: Vec<PersonDto>,
    /// Number of candidates before filtering
    #[serde(default)]
    pub potential_results: Option<u64>,
    /// Validation error codes
    #[serde(default)]
    pub errors: Vec<String>,
}

fn clamp(value: Option<i64>) -> u32 {
    value
        .map(|v| u32::try_from(v.max(0)).unwrap_or(u32::MAX))
        .unwrap_or(0)
}

impl From<&RelationshipDto> for RelationshipDescriptor {
    fn from(dto: &RelationshipDto) -> Self {
        let reference_type = match dto.reference_type.as_deref() {
            Some(name) => ReferenceType::parse(name).unwrap_or_else(|| {
                debug!(reference_type = name, "Unknown reference type, rendering as generic relative");
                ReferenceType::Relative
            }),
            None => ReferenceType::Relative,
        };

        let tree_sides: TreeSides = dto
            .tree_sides
            .iter()
            .flatten()
            .filter_map(|side| TreeSide::parse(side))
            .collect();

        let adoption_type = dto.adoption_type.as_deref().and_then(|name| {
            let adoption = AdoptionType::parse(name);
            if adoption.is_none() {
                debug!(adoption_type = name, "Ignoring unknown adoption type");
            }
            adoption
        });

        RelationshipDescriptor {
            reference_type,
            generation: clamp(dto.generation),
            grade: clamp(dto.grade),
            is_half: dto.is_half.unwrap_or(false),
            is_in_law: dto.is_in_law.unwrap_or(false),
            is_separated: dto.is_separated.unwrap_or(false),
            person_sex: Sex::from_code(dto.person_sex.as_deref()),
            spouse_sex: Sex::from_code(dto.spouse_sex.as_deref()),
            tree_sides,
            adoption_type,
        }
    }
}

impl From<RelationshipDto> for RelationshipDescriptor {
    fn from(dto: RelationshipDto) -> Self {
        Self::from(&dto)
    }
}

/// Decode a search payload.
///
/// Accepted shapes:
/// - a search result envelope (`{"people": [...], "potentialResults": n, "errors": [...]}`)
/// - a bare array of relationships
/// - a single relationship object (must carry `referenceType`)
///
/// Relationships are wrapped as people named after their `personName`.
/// Any other JSON value is rejected.
pub fn decode_search_result(json: &str) -> Result<SearchResultDto> {
    let value: serde_json::Value = serde_json::from_str(json)?;

    let is_envelope = matches!(&value, Value::Object(map) if ENVELOPE_KEYS.iter().any(|key| map.contains_key(*key)));
    let is_relationship = matches!(&value, Value::Object(map) if map.contains_key("referenceType"));

    let relationships = if is_envelope {
        return Ok(serde_json::from_value(value)?);
    } else if is_relationship {
        vec![serde_json::from_value::<RelationshipDto>(value)?]
    } else if value.is_array() {
        serde_json::from_value::<Vec<RelationshipDto>>(value)?
    } else {
        return Err(NamerError::Payload(format!(
            "expected a search result, a relationship or an array of relationships, got {}",
            json_kind(&value)
        )));
    };

    let people = relationships
        .into_iter()
        .map(|relationship| PersonDto {
            name: relationship.person_name.clone(),
            max_distant_relationship: Some(relationship),
            ..PersonDto::default()
        })
        .collect();
    Ok(SearchResultDto {
        people,
        ..SearchResultDto::default()
    })
}

const ENVELOPE_KEYS: [&str; 3] = ["people", "potentialResults", "errors"];

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object without people or referenceType",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_relationship_conversion() {
        let json = r#"{
            "referenceType": "PIBLING",
            "generation": 1,
            "grade": 2,
            "isHalf": true,
            "isInLaw": true,
            "isSeparated": false,
            "personSex": "M",
            "spouseSex": "F",
            "treeSides": ["FATHER", "SPOUSE"],
            "adoptionType": null,
            "personName": "Juan Pérez"
        }"#;
        let dto: RelationshipDto = serde_json::from_str(json).unwrap();
        let d = RelationshipDescriptor::from(&dto);

        assert_eq!(d.reference_type, ReferenceType::Pibling);
        assert_eq!(d.generation, 1);
        assert_eq!(d.grade, 2);
        assert!(d.is_half && d.is_in_law && !d.is_separated);
        assert_eq!(d.person_sex, Sex::Male);
        assert_eq!(d.spouse_sex, Sex::Female);
        assert_eq!(d.tree_sides, TreeSides::from(TreeSide::Father));
        assert_eq!(d.adoption_type, None);
    }

    #[test]
    fn test_missing_fields_are_not_applicable() {
        let dto: RelationshipDto = serde_json::from_str(r#"{"referenceType": "SELF"}"#).unwrap();
        let d = RelationshipDescriptor::from(dto);
        assert_eq!(d.reference_type, ReferenceType::Oneself);
        assert_eq!(d.generation, 0);
        assert!(d.tree_sides.is_empty());
        assert_eq!(d.person_sex, Sex::Female);
    }

    #[test]
    fn test_degraded_values() {
        let dto = RelationshipDto {
            reference_type: Some("GODPARENT".to_string()),
            grade: Some(-1),
            adoption_type: Some("STEP".to_string()),
            person_sex: Some("U".to_string()),
            ..RelationshipDto::default()
        };
        let d = RelationshipDescriptor::from(&dto);
        assert_eq!(d.reference_type, ReferenceType::Relative);
        assert_eq!(d.grade, 0);
        assert_eq!(d.adoption_type, None);
        assert_eq!(d.person_sex, Sex::Female);
    }

    #[test]
    fn test_decode_envelope() {
        let json = r#"{
            "people": [
                {"name": "Ana", "maxDistantRelationship": {"referenceType": "COUSIN", "grade": 3}},
                {"name": "Luis"}
            ],
            "potentialResults": 2,
            "errors": ["TOO_BROAD"]
        }"#;
        let result = decode_search_result(json).unwrap();
        assert_eq!(result.people.len(), 2);
        assert_eq!(result.people[0].name.as_deref(), Some("Ana"));
        assert!(result.people[1].max_distant_relationship.is_none());
        assert_eq!(result.potential_results, Some(2));
        assert_eq!(result.errors, vec!["TOO_BROAD".to_string()]);
    }

    #[test]
    fn test_decode_bare_relationships() {
        let json = r#"[{"referenceType": "PARENT", "generation": 2, "personName": "Rosa"}]"#;
        let result = decode_search_result(json).unwrap();
        assert_eq!(result.people.len(), 1);
        assert_eq!(result.people[0].name.as_deref(), Some("Rosa"));
        assert!(result.people[0].max_distant_relationship.is_some());
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_decode_single_relationship_is_not_an_empty_envelope() {
        let json = r#"{"referenceType": "COUSIN", "grade": 2, "personName": "Ana"}"#;
        let result = decode_search_result(json).unwrap();
        assert_eq!(result.people.len(), 1);
        assert_eq!(result.people[0].name.as_deref(), Some("Ana"));
        let relationship = result.people[0].max_distant_relationship.as_ref().unwrap();
        assert_eq!(relationship.grade, Some(2));
    }

    #[test]
    fn test_decode_rejects_unrelated_json() {
        assert!(matches!(
            decode_search_result(r#"{"foo": 1}"#),
            Err(NamerError::Payload(_))
        ));
        assert!(matches!(decode_search_result("42"), Err(NamerError::Payload(_))));
    }

    #[test]
    fn test_decode_malformed() {
        assert!(matches!(decode_search_result("{not json"), Err(NamerError::Decode(_))));
    }
}
