//! Genea Domain Layer
//!
//! This crate contains the value types that describe how one person in a family
//! tree relates to the root person of a search. It has ZERO external
//! dependencies: rendering, wire formats and I/O live in other crates.
//!
//! ## Key Concepts
//!
//! - **Reference type**: the kind of kinship (parent, cousin, pibling, ...)
//! - **Generation**: direct ancestor/descendant distance (parent = 1)
//! - **Grade**: collateral distance (first cousin = 1, second cousin = 2)
//! - **Modifiers**: half, in-law (through a spouse), separated, adoption

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adoption;
pub mod descriptor;
pub mod reference_type;
pub mod sex;
pub mod tree_side;

// Re-exports for convenience
pub use adoption::AdoptionType;
pub use descriptor::RelationshipDescriptor;
pub use reference_type::ReferenceType;
pub use sex::Sex;
pub use tree_side::{TreeSide, TreeSides};
