use crate::errors::ExportError;
use crate::exporter::PrefabContext;
use crate::scene::Skybox;
use crate::xml::XmlWriter;
use std::io::Write;

/// Emit a `Skybox` component element for a node-attached skybox
pub(crate) fn write_skybox<W: Write>(
    writer: &mut XmlWriter<W>,
    indent: &str,
    skybox: &Skybox,
    _context: &PrefabContext,
) -> Result<(), ExportError> {
    write_skybox_component(writer, indent, &skybox.material)
}

/// Emit a `Skybox` component element from a bare material reference
///
/// Also used by the scene exporter for the render-settings fallback when no
/// node in the scene carries a skybox of its own.
pub(crate) fn write_skybox_component<W: Write>(
    writer: &mut XmlWriter<W>,
    indent: &str,
    material: &str,
) -> Result<(), ExportError> {
    let sub = format!("{}\t", indent);
    writer.start_component(indent, "Skybox")?;
    writer.whitespace("\n")?;

    writer.attribute_element(&sub, "Model", "Model;Models/Box.mdl")?;
    writer.attribute_element(&sub, "Material", &format!("Material;{}", material))?;

    writer.end_element_line(indent)
}
