//! Batch command implementation.

use crate::cli::BatchArgs;
use crate::error::{CliError, Result};
use crate::output::{Formatter, PersonRow, RenderedResult};
use genea_namer::display::{display_lifespan, display_name};
use genea_namer::wire::{decode_search_result, PersonDto};
use genea_namer::RelationshipNamer;
use std::fs;
use std::io::{self, Read};
use tracing::info;

/// Execute the batch command.
pub fn execute_batch(args: BatchArgs, namer: &RelationshipNamer, formatter: &Formatter) -> Result<()> {
    // Read payload from file or stdin
    let json_data = if args.stdin {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else if let Some(file_path) = args.file {
        fs::read_to_string(file_path)?
    } else {
        return Err(CliError::InvalidInput(
            "Must specify either --file or --stdin".to_string(),
        ));
    };

    let result = render_payload(&json_data, namer)?;
    for code in &result.errors {
        eprintln!("{}", formatter.warning(&format!("Search reported error: {}", code)));
    }
    println!("{}", formatter.format_result(&result)?);
    Ok(())
}

/// Decode a search-result payload and render every person in it.
pub fn render_payload(json: &str, namer: &RelationshipNamer) -> Result<RenderedResult> {
    let search = decode_search_result(json)?;
    let people: Vec<PersonRow> = search.people.iter().map(|person| person_row(person, namer)).collect();

    let related = people.iter().filter(|row| row.relationship.is_some()).count();
    info!(
        people = people.len(),
        related,
        errors = search.errors.len(),
        locale = %namer.locale(),
        "Rendered search result"
    );

    Ok(RenderedResult {
        people,
        potential_results: search.potential_results,
        errors: search.errors,
    })
}

fn person_row(person: &PersonDto, namer: &RelationshipNamer) -> PersonRow {
    let locale = namer.locale();
    let relationship = person.max_distant_relationship.as_ref();
    PersonRow {
        name: display_name(person.name.as_deref().unwrap_or("<no name>"), locale),
        lifespan: display_lifespan(person, locale),
        relationship: relationship.map(|relationship| namer.render(&relationship.into())),
        relative: relationship
            .and_then(|relationship| relationship.person_name.as_deref())
            .map(|name| display_name(name, locale)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genea_namer::Locale;

    #[test]
    fn test_render_envelope() {
        let json = r#"{
            "people": [
                {
                    "name": "<private> Pérez",
                    "sex": "F",
                    "dateOfBirth": "ABT 1850",
                    "dateOfDeath": "3 MAR 1910",
                    "maxDistantRelationship": {
                        "referenceType": "COUSIN", "grade": 2, "personSex": "F", "personName": "Ana <private>"
                    }
                },
                {"name": "Luis Gómez", "isAlive": true}
            ],
            "potentialResults": 7,
            "errors": ["TOO_MANY_RESULTS"]
        }"#;
        let result = render_payload(json, &RelationshipNamer::new(Locale::Spanish)).unwrap();

        assert_eq!(result.people.len(), 2);
        let first = &result.people[0];
        assert_eq!(first.name, "<nombre privado> Pérez");
        assert_eq!(first.lifespan, "n. aprox. 1850 - f. 3 de mar de 1910");
        assert_eq!(first.relationship.as_ref().map(|l| l.text.as_str()), Some("prima segunda"));
        assert_eq!(first.relative.as_deref(), Some("Ana <nombre privado>"));

        assert_eq!(result.people[1].lifespan, "Vive");
        assert!(result.people[1].relationship.is_none());
        assert!(result.people[1].relative.is_none());

        assert_eq!(result.potential_results, Some(7));
        assert_eq!(result.errors, vec!["TOO_MANY_RESULTS".to_string()]);
    }

    #[test]
    fn test_render_bare_relationships() {
        let json = r#"[{"referenceType": "PARENT", "generation": 2, "personSex": "M"}]"#;
        let result = render_payload(json, &RelationshipNamer::new(Locale::English)).unwrap();
        assert_eq!(result.people[0].name, "<unknown name>");
        assert_eq!(
            result.people[0].relationship.as_ref().map(|l| l.text.as_str()),
            Some("grandfather")
        );
    }

    #[test]
    fn test_single_relationship_keeps_relative_name() {
        let json = r#"{"referenceType": "COUSIN", "grade": 2, "personName": "Ana Lopez"}"#;
        let result = render_payload(json, &RelationshipNamer::new(Locale::Spanish)).unwrap();
        assert_eq!(result.people.len(), 1);
        assert_eq!(result.people[0].relative.as_deref(), Some("Ana Lopez"));
    }

    #[test]
    fn test_stray_object_is_rejected() {
        let result = render_payload(r#"{"foo": 1}"#, &RelationshipNamer::new(Locale::Spanish));
        assert!(matches!(result, Err(CliError::Namer(_))));
    }

    #[test]
    fn test_malformed_payload() {
        let result = render_payload("[{", &RelationshipNamer::new(Locale::Spanish));
        assert!(matches!(result, Err(CliError::Namer(_))));
    }

    #[test]
    fn test_requires_input_source() {
        let formatter = Formatter::new(crate::config::OutputFormat::Quiet, false);
        let args = BatchArgs { file: None, stdin: false };
        let result = execute_batch(args, &RelationshipNamer::new(Locale::Spanish), &formatter);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
