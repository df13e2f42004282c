//! Render command implementation.

use crate::error::Result;
use crate::output::Formatter;
use genea_domain::RelationshipDescriptor;
use genea_namer::RelationshipNamer;
use tracing::debug;

/// Execute the render command.
pub fn execute_render(
    descriptor: &RelationshipDescriptor,
    namer: &RelationshipNamer,
    formatter: &Formatter,
) -> Result<()> {
    debug!(kind = %descriptor.reference_type, ?descriptor, locale = %namer.locale(), "Rendering relationship");

    let label = namer.render(descriptor);
    println!("{}", formatter.format_label(&label)?);
    Ok(())
}
