//! Genea Namer
//!
//! Renders kinship relationships as natural-language labels.
//!
//! The namer is a pure function from a [`RelationshipDescriptor`] to a
//! [`Label`]: it never fails, keeps no state and performs no I/O. Unknown
//! reference types render as a generic "relative" label.
//!
//! # Examples
//!
//! ```
//! use genea_domain::{ReferenceType, RelationshipDescriptor, Sex, TreeSide};
//! use genea_namer::{Locale, RelationshipNamer};
//!
//! let namer = RelationshipNamer::new(Locale::Spanish);
//! let aunt = RelationshipDescriptor::new(ReferenceType::Pibling, Sex::Female)
//!     .with_generation(1)
//!     .with_grade(2)
//!     .with_tree_sides(TreeSide::Mother);
//!
//! let label = namer.render(&aunt);
//! assert_eq!(label.text, "tía segunda");
//! assert_eq!(label.note.as_deref(), Some("prima de madre"));
//! ```

#![warn(missing_docs)]

pub mod display;
mod error;
mod label;
mod locale;
pub mod namer;
pub mod vocabulary;
pub mod wire;

pub use error::{NamerError, Result};
pub use label::{escape_html, Label};
pub use locale::Locale;
pub use namer::{render, RelationshipNamer};

pub use genea_domain::RelationshipDescriptor;
