use crate::errors::ExportError;
use crate::mappers::zone;
use crate::scene::ReflectionProbe;
use crate::xml::XmlWriter;
use std::io::Write;

/// Emit a `Zone` element approximating a reflection probe
///
/// The target engine has no probe component; a bounded zone carrying the
/// baked cubemap is the closest native construct. Probes without a baked
/// cubemap still produce the zone so their bounds survive the round trip.
pub(crate) fn write_probe_zone<W: Write>(
    writer: &mut XmlWriter<W>,
    indent: &str,
    probe: &ReflectionProbe,
) -> Result<(), ExportError> {
    let half_extents = [
        probe.size[0] / 2.0,
        probe.size[1] / 2.0,
        probe.size[2] / 2.0,
    ];
    match &probe.cubemap {
        Some(cubemap) => zone::write_cubemap_zone(writer, indent, half_extents, cubemap),
        None => {
            let sub = format!("{}\t", indent);
            writer.start_component(indent, "Zone")?;
            writer.whitespace("\n")?;
            let min = [-half_extents[0], -half_extents[1], -half_extents[2]];
            writer.attribute_element(
                &sub,
                "Bounding Box Min",
                &crate::xml::format_vec3(min),
            )?;
            writer.attribute_element(
                &sub,
                "Bounding Box Max",
                &crate::xml::format_vec3(half_extents),
            )?;
            writer.end_element_line(indent)
        }
    }
}
