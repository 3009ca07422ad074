//! Recursive node exporter
//!
//! Walks the host scene graph depth-first and emits one markup node per
//! entity, dispatching attached components to their mappers along the way.
//! Identifiers are assigned per document in traversal order; the counter is
//! owned by one export call and never shared.

use crate::errors::ExportError;
use crate::exporter::PrefabContext;
use crate::mappers::{map_component, MapperSettings};
use crate::scene::SceneNode;
use crate::xml::{format_bool, format_quaternion, format_vec3, XmlWriter};
use std::collections::HashSet;
use std::io::Write;
use tracing::debug;

/// Uniform scale from host units to engine units
///
/// Both conventions are meters today; the factor stays explicit so a future
/// unit change is a one-line edit applied everywhere.
pub(crate) const UNIT_SCALE: f32 = 1.0;

/// Stateful node writer for one markup document
pub(crate) struct NodeWriter {
    next_id: u32,
    skip_disabled: bool,
    settings: MapperSettings,
}

impl NodeWriter {
    pub(crate) fn new(skip_disabled: bool, settings: MapperSettings) -> Self {
        Self {
            next_id: 0,
            skip_disabled,
            settings,
        }
    }

    /// Claim the next document-unique node identifier
    pub(crate) fn next_id(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    /// Recursively write one node and its subtree
    ///
    /// A disabled node prunes its entire subtree when `skip_disabled` is set;
    /// the parent's decision is final and children are not revisited.
    pub(crate) fn write_node<W: Write>(
        &mut self,
        writer: &mut XmlWriter<W>,
        indent: &str,
        node: &SceneNode,
        exclusion: &mut HashSet<u64>,
        is_root_level: bool,
        context: &PrefabContext,
    ) -> Result<(), ExportError> {
        if self.skip_disabled && !node.enabled {
            return Ok(());
        }
        if is_root_level {
            debug!("Exporting root object '{}'", node.name);
        }

        let id = self.next_id();
        let sub = format!("{}\t", indent);

        writer.whitespace(indent)?;
        writer.start_element("node")?;
        writer.attribute("id", &id.to_string())?;
        writer.whitespace("\n")?;

        if !node.enabled {
            writer.attribute_element(&sub, "Is Enabled", format_bool(false))?;
        }
        writer.attribute_element(&sub, "Name", &node.name)?;
        writer.attribute_element(
            &sub,
            "Position",
            &format_vec3(convert_position(node.transform.position)),
        )?;
        writer.attribute_element(&sub, "Rotation", &format_quaternion(node.transform.rotation))?;
        writer.attribute_element(&sub, "Scale", &format_vec3(node.transform.scale))?;

        // Components in attachment order, then children in sibling order;
        // downstream consumers rely on first-child conventions.
        for component in &node.components {
            map_component(writer, &sub, component, exclusion, context, self.settings)?;
        }
        for child in &node.children {
            self.write_node(writer, &sub, child, exclusion, false, context)?;
        }

        writer.whitespace(indent)?;
        writer.end_element()?;
        writer.whitespace("\n")
    }
}

fn convert_position(position: [f32; 3]) -> [f32; 3] {
    [
        position[0] * UNIT_SCALE,
        position[1] * UNIT_SCALE,
        position[2] * UNIT_SCALE,
    ]
}
