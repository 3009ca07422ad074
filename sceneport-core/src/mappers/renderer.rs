use crate::errors::ExportError;
use crate::exporter::PrefabContext;
use crate::scene::MeshRenderer;
use crate::xml::{format_bool, XmlWriter};
use std::collections::HashSet;
use std::io::Write;
use tracing::debug;

/// Emit a `StaticModel` component element for a mesh renderer
///
/// A renderer reachable through more than one traversal path (combined or
/// batched render setups) is emitted exactly once; later paths find it in the
/// exclusion set and back off. Nested assets generated for this renderer are
/// namespaced under the prefab context's temp folder by the engine
/// collaborator, which owns the binary conversion.
pub(crate) fn write_static_model<W: Write>(
    writer: &mut XmlWriter<W>,
    indent: &str,
    renderer: &MeshRenderer,
    exclusion: &mut HashSet<u64>,
    _context: &PrefabContext,
) -> Result<(), ExportError> {
    if !exclusion.insert(renderer.renderer_id) {
        debug!(
            "Renderer {} already claimed by another traversal path, skipping",
            renderer.renderer_id
        );
        return Ok(());
    }

    let sub = format!("{}\t", indent);
    writer.start_component(indent, "StaticModel")?;
    writer.whitespace("\n")?;

    writer.attribute_element(&sub, "Model", &format!("Model;{}", renderer.model))?;
    if !renderer.materials.is_empty() {
        let mut material_ref = String::from("Material");
        for material in &renderer.materials {
            material_ref.push(';');
            material_ref.push_str(material);
        }
        writer.attribute_element(&sub, "Material", &material_ref)?;
    }
    if renderer.cast_shadows {
        writer.attribute_element(&sub, "Cast Shadows", format_bool(true))?;
    }

    writer.end_element_line(indent)
}
