use crate::errors::ExportError;
use crate::scene::Camera;
use crate::xml::{format_bool, format_float, XmlWriter};
use std::io::Write;

/// Emit a `Camera` component element
pub(crate) fn write_camera<W: Write>(
    writer: &mut XmlWriter<W>,
    indent: &str,
    camera: &Camera,
) -> Result<(), ExportError> {
    let sub = format!("{}\t", indent);
    writer.start_component(indent, "Camera")?;
    writer.whitespace("\n")?;

    writer.attribute_element(&sub, "Near Clip", &format_float(camera.near_clip))?;
    writer.attribute_element(&sub, "Far Clip", &format_float(camera.far_clip))?;
    if camera.orthographic {
        writer.attribute_element(&sub, "Orthographic", format_bool(true))?;
        writer.attribute_element(&sub, "Orthographic Size", &format_float(camera.ortho_size))?;
    } else {
        writer.attribute_element(&sub, "FOV", &format_float(camera.fov))?;
    }

    writer.end_element_line(indent)
}
