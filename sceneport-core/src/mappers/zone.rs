//! Zone element writers shared by the scene exporter and the probe mapper

use crate::errors::ExportError;
use crate::scene::RenderSettings;
use crate::xml::{format_color, format_float, format_vec3, XmlWriter};
use std::io::Write;

/// Half-extent of the scene-wide bounding zone, engine units
pub const SCENE_ZONE_EXTENT: f32 = 2000.0;

/// Emit the scene-level ambient `Zone` from the host render settings
pub fn write_ambient_zone<W: Write>(
    writer: &mut XmlWriter<W>,
    indent: &str,
    settings: &RenderSettings,
) -> Result<(), ExportError> {
    let sub = format!("{}\t", indent);
    writer.start_component(indent, "Zone")?;
    writer.whitespace("\n")?;

    write_bounds(writer, &sub, [SCENE_ZONE_EXTENT; 3])?;
    writer.attribute_element(&sub, "Ambient Color", &format_color(settings.ambient_color))?;
    writer.attribute_element(&sub, "Fog Color", &format_color(settings.fog_color))?;
    writer.attribute_element(&sub, "Fog Start", &format_float(settings.fog_start))?;
    writer.attribute_element(&sub, "Fog End", &format_float(settings.fog_end))?;

    writer.end_element_line(indent)
}

/// Emit a `Zone` carrying a cubemap texture reference
pub fn write_cubemap_zone<W: Write>(
    writer: &mut XmlWriter<W>,
    indent: &str,
    half_extents: [f32; 3],
    cubemap: &str,
) -> Result<(), ExportError> {
    let sub = format!("{}\t", indent);
    writer.start_component(indent, "Zone")?;
    writer.whitespace("\n")?;

    write_bounds(writer, &sub, half_extents)?;
    writer.attribute_element(&sub, "Zone Texture", &format!("TextureCube;{}", cubemap))?;

    writer.end_element_line(indent)
}

fn write_bounds<W: Write>(
    writer: &mut XmlWriter<W>,
    indent: &str,
    half_extents: [f32; 3],
) -> Result<(), ExportError> {
    let min = [-half_extents[0], -half_extents[1], -half_extents[2]];
    writer.attribute_element(indent, "Bounding Box Min", &format_vec3(min))?;
    writer.attribute_element(indent, "Bounding Box Max", &format_vec3(half_extents))
}
