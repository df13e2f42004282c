//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use genea_namer::{escape_html, Label};
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// One person of a rendered search result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonRow {
    /// Localized display name
    pub name: String,

    /// Birth/death summary or living status
    pub lifespan: String,

    /// Rendered relationship, absent when the person has none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship: Option<Label>,

    /// Localized name of the relative the relationship points to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative: Option<String>,
}

/// A rendered search result.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedResult {
    /// Rendered people
    pub people: Vec<PersonRow>,

    /// Number of candidates before filtering
    #[serde(skip_serializing_if = "Option::is_none")]
    pub potential_results: Option<u64>,

    /// Error codes reported by the search
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a single rendered label.
    pub fn format_label(&self, label: &Label) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(label)?),
            OutputFormat::Quiet => Ok(label.to_string()),
            OutputFormat::Html => Ok(label.to_html()),
            OutputFormat::Table => {
                let text = if label.emphasized {
                    self.colorize(&label.text, "bold")
                } else {
                    label.text.clone()
                };
                Ok(match &label.note {
                    Some(note) => format!("{} {}", text, self.colorize(&format!("({})", note), "cyan")),
                    None => text,
                })
            }
        }
    }

    /// Format a rendered search result.
    pub fn format_result(&self, result: &RenderedResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
            OutputFormat::Table => {
                let mut out = self.format_people_table(&result.people)?;
                if let Some(count) = result.potential_results {
                    out.push('\n');
                    out.push_str(&self.info(&format!("Potential results: {}", count)));
                }
                Ok(out)
            }
            OutputFormat::Quiet => Ok(result
                .people
                .iter()
                .map(|row| row.relationship.as_ref().map(Label::to_string).unwrap_or_default())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Html => Ok(result
                .people
                .iter()
                .map(|row| {
                    let mut html = escape_html(&row.name);
                    if let Some(label) = &row.relationship {
                        html.push_str("<br>");
                        html.push_str(&label.to_html());
                    }
                    if let Some(relative) = &row.relative {
                        html.push_str("<br>");
                        html.push_str(&escape_html(relative));
                    }
                    html
                })
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format people as a table.
    fn format_people_table(&self, rows: &[PersonRow]) -> Result<String> {
        if rows.is_empty() {
            return Ok(self.colorize("No people found.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["Name", "Life", "Relationship", "Note", "Relative"]);

        for row in rows {
            let (text, note) = match &row.relationship {
                Some(label) => (label.text.as_str(), label.note.as_deref().unwrap_or("")),
                None => ("", ""),
            };
            builder.push_record([
                row.name.as_str(),
                row.lifespan.as_str(),
                text,
                note,
                row.relative.as_deref().unwrap_or(""),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        Ok(table.to_string())
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "bold" => text.bold().to_string(),
            _ => text.to_string(),
        }
    }
}
