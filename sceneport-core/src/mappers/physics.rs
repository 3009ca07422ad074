use crate::errors::ExportError;
use crate::scene::{CollisionShape, CollisionShapeKind, PhysicsBody};
use crate::xml::{format_bool, format_float, format_vec3, XmlWriter};
use std::io::Write;

/// Emit a `RigidBody` component element
pub(crate) fn write_rigid_body<W: Write>(
    writer: &mut XmlWriter<W>,
    indent: &str,
    body: &PhysicsBody,
) -> Result<(), ExportError> {
    let sub = format!("{}\t", indent);
    writer.start_component(indent, "RigidBody")?;
    writer.whitespace("\n")?;

    writer.attribute_element(&sub, "Mass", &format_float(body.mass))?;
    if body.kinematic {
        writer.attribute_element(&sub, "Is Kinematic", format_bool(true))?;
    }
    if !body.use_gravity {
        writer.attribute_element(&sub, "Use Gravity", format_bool(false))?;
    }

    writer.end_element_line(indent)
}

/// Emit a `CollisionShape` component element
pub(crate) fn write_collision_shape<W: Write>(
    writer: &mut XmlWriter<W>,
    indent: &str,
    shape: &CollisionShape,
) -> Result<(), ExportError> {
    let sub = format!("{}\t", indent);
    writer.start_component(indent, "CollisionShape")?;
    writer.whitespace("\n")?;

    let shape_name = match shape.shape {
        CollisionShapeKind::Box => "Box",
        CollisionShapeKind::Sphere => "Sphere",
        CollisionShapeKind::Capsule => "Capsule",
        CollisionShapeKind::TriangleMesh => "TriangleMesh",
    };
    writer.attribute_element(&sub, "Shape Type", shape_name)?;
    writer.attribute_element(&sub, "Size", &format_vec3(shape.size))?;
    if shape.offset != [0.0, 0.0, 0.0] {
        writer.attribute_element(&sub, "Offset Position", &format_vec3(shape.offset))?;
    }

    writer.end_element_line(indent)
}
