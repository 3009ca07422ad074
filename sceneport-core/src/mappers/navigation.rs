use crate::errors::ExportError;
use crate::scene::NavigationSource;
use crate::xml::{format_bool, XmlWriter};
use std::io::Write;

/// Emit a `Navigable` component element
///
/// Marks the node's geometry as input for navigation mesh generation; the
/// mesh itself is built by the engine collaborator after the document closes.
pub(crate) fn write_navigable<W: Write>(
    writer: &mut XmlWriter<W>,
    indent: &str,
    source: &NavigationSource,
) -> Result<(), ExportError> {
    writer.start_component(indent, "Navigable")?;
    if source.recursive {
        writer.end_element()?;
        writer.whitespace("\n")
    } else {
        let sub = format!("{}\t", indent);
        writer.whitespace("\n")?;
        writer.attribute_element(&sub, "Recursive", format_bool(false))?;
        writer.end_element_line(indent)
    }
}
