use crate::errors::ExportError;
use crate::scene::{Light, LightType};
use crate::xml::{format_bool, format_color, format_float, XmlWriter};
use std::io::Write;

/// Emit a `Light` component element
pub(crate) fn write_light<W: Write>(
    writer: &mut XmlWriter<W>,
    indent: &str,
    light: &Light,
) -> Result<(), ExportError> {
    let sub = format!("{}\t", indent);
    writer.start_component(indent, "Light")?;
    writer.whitespace("\n")?;

    let type_name = match light.light_type {
        LightType::Directional => "Directional",
        LightType::Point => "Point",
        LightType::Spot => "Spot",
    };
    writer.attribute_element(&sub, "Light Type", type_name)?;
    writer.attribute_element(&sub, "Color", &format_color(light.color))?;
    writer.attribute_element(&sub, "Brightness Multiplier", &format_float(light.intensity))?;

    // Directional lights are infinite; range only applies to local lights
    if light.light_type != LightType::Directional {
        writer.attribute_element(&sub, "Range", &format_float(light.range))?;
    }
    if light.light_type == LightType::Spot {
        writer.attribute_element(&sub, "Spot FOV", &format_float(light.spot_angle))?;
    }
    if light.cast_shadows {
        writer.attribute_element(&sub, "Cast Shadows", format_bool(true))?;
    }

    writer.end_element_line(indent)
}
