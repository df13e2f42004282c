//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use genea_domain::{AdoptionType, ReferenceType, RelationshipDescriptor, Sex, TreeSide, TreeSides};
use genea_namer::{Locale, NamerError};

/// Genea - Render kinship relationships as natural-language labels.
#[derive(Debug, Parser)]
#[command(name = "genea")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Label language (es, en)
    #[arg(short, long, global = true, env = "GENEA_LOCALE", value_parser = parse_locale)]
    pub locale: Option<Locale>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

fn parse_locale(s: &str) -> std::result::Result<Locale, NamerError> {
    s.parse()
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (labels only)
    Quiet,
    /// HTML fragments
    Html,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render a single relationship
    Render(RenderArgs),

    /// Render every relationship of a search-result payload
    Batch(BatchArgs),

    /// Manage settings
    Config(ConfigArgs),

    /// Enter interactive REPL mode
    Repl,
}

/// Arguments for the render command.
#[derive(Debug, Clone, Parser)]
pub struct RenderArgs {
    /// Relationship kind
    #[arg(value_enum)]
    pub kind: KindArg,

    /// Direct-line distance (parent = 1); defaults to 1 where it applies
    #[arg(short, long)]
    pub generation: Option<u32>,

    /// Collateral distance (first cousin = 1); defaults to 1 where it applies
    #[arg(long)]
    pub grade: Option<u32>,

    /// Sex of the related person
    #[arg(short, long, value_enum, default_value = "m")]
    pub sex: SexArg,

    /// Sex of the spouse the relationship goes through
    #[arg(long, value_enum, default_value = "f")]
    pub spouse_sex: SexArg,

    /// Shares only one parent
    #[arg(long)]
    pub half: bool,

    /// Related through a spouse
    #[arg(long)]
    pub in_law: bool,

    /// Connecting spousal relationship ended
    #[arg(long)]
    pub separated: bool,

    /// Tree side the relationship goes through (repeatable)
    #[arg(long = "side", value_enum)]
    pub sides: Vec<SideArg>,

    /// Adoption of the parent/child link
    #[arg(short, long, value_enum)]
    pub adoption: Option<AdoptionArg>,
}

impl RenderArgs {
    /// Build the descriptor these arguments describe.
    pub fn to_descriptor(&self) -> RelationshipDescriptor {
        let reference_type: ReferenceType = self.kind.into();
        let generation = self
            .generation
            .unwrap_or(if reference_type.uses_generation() { 1 } else { 0 });
        let grade = self
            .grade
            .unwrap_or(if reference_type.uses_grade() { 1 } else { 0 });

        let mut descriptor = RelationshipDescriptor::new(reference_type, self.sex.into())
            .with_generation(generation)
            .with_grade(grade)
            .with_tree_sides(self.sides.iter().map(|side| TreeSide::from(*side)).collect::<TreeSides>());

        if self.half {
            descriptor = descriptor.half();
        }
        if self.in_law {
            descriptor = descriptor.in_law(self.spouse_sex.into());
        } else {
            descriptor.spouse_sex = self.spouse_sex.into();
        }
        if self.separated {
            descriptor = descriptor.separated();
        }
        if let Some(adoption) = self.adoption {
            descriptor = descriptor.with_adoption(adoption.into());
        }
        descriptor
    }
}

/// Arguments for the batch command.
#[derive(Debug, Parser)]
pub struct BatchArgs {
    /// JSON file with a search result or an array of relationships
    #[arg(long)]
    pub file: Option<String>,

    /// Read the JSON payload from stdin
    #[arg(long)]
    pub stdin: bool,
}

/// Arguments for the config command.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Show the effective settings
    Show,

    /// Print the configuration file path
    Path,

    /// Update a setting (locale, format, color, history_size)
    Set {
        /// Setting name
        key: String,

        /// New value
        value: String,
    },
}

/// Relationship kind argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum KindArg {
    /// The root person
    #[value(name = "self")]
    Oneself,
    /// Spouse
    Spouse,
    /// Parent or ancestor
    Parent,
    /// Child or descendant
    Child,
    /// Sibling
    Sibling,
    /// Cousin
    Cousin,
    /// Aunt/uncle at any depth
    Pibling,
    /// Niece/nephew at any depth
    Nibling,
    /// Unclassified relative
    Relative,
}

/// Sex argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SexArg {
    /// Male
    #[value(alias = "male")]
    M,
    /// Female
    #[value(alias = "female")]
    F,
}

/// Tree side argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SideArg {
    /// Father's side
    Father,
    /// Mother's side
    Mother,
}

/// Adoption argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum AdoptionArg {
    /// Legal adoption
    Adoptive,
    /// Foster care
    Foster,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
            CliFormat::Html => crate::config::OutputFormat::Html,
        }
    }
}

impl From<KindArg> for ReferenceType {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Oneself => ReferenceType::Oneself,
            KindArg::Spouse => ReferenceType::Spouse,
            KindArg::Parent => ReferenceType::Parent,
            KindArg::Child => ReferenceType::Child,
            KindArg::Sibling => ReferenceType::Sibling,
            KindArg::Cousin => ReferenceType::Cousin,
            KindArg::Pibling => ReferenceType::Pibling,
            KindArg::Nibling => ReferenceType::Nibling,
            KindArg::Relative => ReferenceType::Relative,
        }
    }
}

impl From<SexArg> for Sex {
    fn from(sex: SexArg) -> Self {
        match sex {
            SexArg::M => Sex::Male,
            SexArg::F => Sex::Female,
        }
    }
}

impl From<SideArg> for TreeSide {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::Father => TreeSide::Father,
            SideArg::Mother => TreeSide::Mother,
        }
    }
}

impl From<AdoptionArg> for AdoptionType {
    fn from(adoption: AdoptionArg) -> Self {
        match adoption {
            AdoptionArg::Adoptive => AdoptionType::Adoptive,
            AdoptionArg::Foster => AdoptionType::Foster,
        }
    }
}
