//! Interactive REPL (Read-Eval-Print Loop) mode.

use crate::commands;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use genea_domain::{AdoptionType, ReferenceType, RelationshipDescriptor, Sex, TreeSide, TreeSides};
use genea_namer::{Locale, RelationshipNamer};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;
use std::str::FromStr;

/// Run the interactive REPL.
pub fn run_repl(namer: &mut RelationshipNamer, formatter: &Formatter, history_size: usize) -> Result<()> {
    println!("{}", formatter.info("Genea REPL - Type 'help' for commands, 'exit' to quit"));
    println!();

    // Initialize readline editor
    let editor_config = rustyline::Config::builder()
        .max_history_size(history_size)
        .map_err(editor_error)?
        .build();
    let mut editor = DefaultEditor::with_config(editor_config).map_err(editor_error)?;

    // Load history
    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    loop {
        let prompt = format!("genea ({})> ", namer.locale());

        match editor.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help(formatter);
                    }
                    Ok(ReplCommand::Locale(locale)) => {
                        *namer = RelationshipNamer::new(locale);
                        println!("{}", formatter.success(&format!("Locale set to {}", locale)));
                    }
                    Ok(ReplCommand::Render(descriptor)) => {
                        if let Err(e) = commands::execute_render(&descriptor, namer, formatter) {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    // Save history
    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
#[derive(Debug)]
enum ReplCommand {
    Exit,
    Help,
    Locale(Locale),
    Render(RelationshipDescriptor),
}

/// Parse a REPL command line.
fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    if parts.is_empty() {
        return Err(CliError::InvalidInput("Empty command".to_string()));
    }

    match parts[0] {
        "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        "locale" => {
            let name = parts
                .get(1)
                .ok_or_else(|| CliError::InvalidInput("Usage: locale <es|en>".to_string()))?;
            Ok(ReplCommand::Locale(name.parse()?))
        }
        kind => parse_render_command(kind, &parts[1..]),
    }
}

// Minimal key=value parsing for the render line

fn parse_render_command(kind: &str, args: &[&str]) -> Result<ReplCommand> {
    let reference_type = ReferenceType::from_str(kind).map_err(|_| {
        CliError::InvalidInput(format!(
            "Unknown command: {}. Type 'help' for available commands.",
            kind
        ))
    })?;

    let mut generation = u32::from(reference_type.uses_generation());
    let mut grade = u32::from(reference_type.uses_grade());
    let mut sex = Sex::Male;
    let mut spouse_sex = Sex::Female;
    let mut sides = TreeSides::none();
    let mut adoption = None;
    let (mut half, mut in_law, mut separated) = (false, false, false);

    for arg in args {
        match arg.split_once('=') {
            Some(("gen" | "generation", value)) => generation = parse_number(value)?,
            Some(("grade", value)) => grade = parse_number(value)?,
            Some(("sex", value)) => sex = parse_value(value)?,
            Some(("spouse", value)) => spouse_sex = parse_value(value)?,
            Some(("adoption", value)) => adoption = Some(parse_value::<AdoptionType>(value)?),
            Some(("sides" | "side", value)) => {
                sides = value
                    .split(',')
                    .map(parse_value::<TreeSide>)
                    .collect::<Result<TreeSides>>()?;
            }
            None if *arg == "half" => half = true,
            None if *arg == "in-law" => in_law = true,
            None if *arg == "separated" => separated = true,
            _ => {
                return Err(CliError::InvalidInput(format!(
                    "Unknown option '{}'. Type 'help' for the render syntax.",
                    arg
                )))
            }
        }
    }

    let mut descriptor = RelationshipDescriptor::new(reference_type, sex)
        .with_generation(generation)
        .with_grade(grade)
        .with_tree_sides(sides);
    if half {
        descriptor = descriptor.half();
    }
    if in_law {
        descriptor = descriptor.in_law(spouse_sex);
    } else {
        descriptor.spouse_sex = spouse_sex;
    }
    if separated {
        descriptor = descriptor.separated();
    }
    if let Some(adoption) = adoption {
        descriptor = descriptor.with_adoption(adoption);
    }

    Ok(ReplCommand::Render(descriptor))
}

fn parse_number(value: &str) -> Result<u32> {
    value
        .parse()
        .map_err(|_| CliError::InvalidInput(format!("Expected a non-negative number, got '{}'", value)))
}

fn parse_value<T: FromStr<Err = String>>(value: &str) -> Result<T> {
    value.parse().map_err(CliError::InvalidInput)
}

fn editor_error(e: ReadlineError) -> CliError {
    CliError::Io(std::io::Error::other(format!("Failed to initialize editor: {}", e)))
}

fn get_history_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
    let genea_dir = home.join(".genea");
    std::fs::create_dir_all(&genea_dir)?;
    Ok(genea_dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  <kind> [options]               - Render a relationship");
    println!("    kind: self|spouse|parent|child|sibling|cousin|pibling|nibling|relative");
    println!("    gen=N                        direct-line distance (default: 1)");
    println!("    grade=N                      collateral distance (default: 1)");
    println!("    sex=m|f                      sex of the relative (default: m)");
    println!("    spouse=m|f                   sex of the connecting spouse (default: f)");
    println!("    sides=father,mother          tree sides");
    println!("    adoption=adoptive|foster     adoption of the parent/child link");
    println!("    half, in-law, separated      modifiers");
    println!("  locale <es|en>                 - Switch label language");
    println!("  help, ?                        - Show this help");
    println!("  exit, quit, q                  - Exit REPL");
    println!();
}
