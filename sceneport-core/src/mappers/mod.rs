//! Per-component translators
//!
//! Each mapper is a stateless function from a host component to zero or more
//! engine-native component elements. Dispatch is a closed static table over
//! the component kind; a kind with no mapper is skipped silently, never an
//! error. Only the renderer mapper touches the exclusion set.

mod camera;
mod light;
mod navigation;
mod physics;
mod probe;
mod renderer;
mod skybox;
pub mod zone;

use crate::errors::ExportError;
use crate::exporter::PrefabContext;
use crate::scene::Component;
use crate::xml::XmlWriter;
use std::collections::HashSet;
use std::io::Write;

/// Per-run options that gate individual mappers
#[derive(Debug, Clone, Copy, Default)]
pub struct MapperSettings {
    pub export_reflection_probes: bool,
}

/// Translate one host component into its engine-native elements
pub fn map_component<W: Write>(
    writer: &mut XmlWriter<W>,
    indent: &str,
    component: &Component,
    exclusion: &mut HashSet<u64>,
    context: &PrefabContext,
    settings: MapperSettings,
) -> Result<(), ExportError> {
    match component {
        Component::Light(light) => light::write_light(writer, indent, light),
        Component::Camera(camera) => camera::write_camera(writer, indent, camera),
        Component::MeshRenderer(renderer) => {
            renderer::write_static_model(writer, indent, renderer, exclusion, context)
        }
        Component::Skybox(skybox) => skybox::write_skybox(writer, indent, skybox, context),
        Component::PhysicsBody(body) => physics::write_rigid_body(writer, indent, body),
        Component::CollisionShape(shape) => physics::write_collision_shape(writer, indent, shape),
        Component::NavigationSource(source) => {
            navigation::write_navigable(writer, indent, source)
        }
        Component::ReflectionProbe(reflection_probe) if settings.export_reflection_probes => {
            probe::write_probe_zone(writer, indent, reflection_probe)
        }
        // Gated off, or host-side behavior with no engine equivalent
        Component::ReflectionProbe(_) | Component::Script { .. } => Ok(()),
    }
}

pub(crate) use skybox::write_skybox_component;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{
        Camera, CollisionShape, CollisionShapeKind, Light, LightType, MeshRenderer,
        NavigationSource, PhysicsBody, ReflectionProbe,
    };

    fn map_to_string(component: &Component, settings: MapperSettings) -> String {
        let mut writer = XmlWriter::new(Vec::new());
        let mut exclusion = HashSet::new();
        let context = PrefabContext::for_asset_path("Scenes/Test.xml");
        map_component(&mut writer, "", component, &mut exclusion, &context, settings).unwrap();
        String::from_utf8(writer.finish().unwrap()).unwrap()
    }

    #[test]
    fn test_script_component_is_silently_skipped() {
        let component = Component::Script {
            name: "Spinner".to_string(),
        };
        assert_eq!(map_to_string(&component, MapperSettings::default()), "");
    }

    #[test]
    fn test_reflection_probe_is_gated_by_settings() {
        let component = Component::ReflectionProbe(ReflectionProbe {
            size: [10.0, 10.0, 10.0],
            cubemap: Some("Textures/Probe.xml".to_string()),
        });

        assert_eq!(map_to_string(&component, MapperSettings::default()), "");

        let enabled = MapperSettings {
            export_reflection_probes: true,
        };
        let out = map_to_string(&component, enabled);
        assert!(out.contains("component type=\"Zone\""));
        assert!(out.contains("TextureCube;Textures/Probe.xml"));
    }

    #[test]
    fn test_spot_light_carries_cone_angle() {
        let component = Component::Light(Light {
            light_type: LightType::Spot,
            color: [1.0, 1.0, 1.0],
            intensity: 2.0,
            range: 15.0,
            spot_angle: 45.0,
            cast_shadows: false,
        });
        let out = map_to_string(&component, MapperSettings::default());
        assert!(out.contains("name=\"Light Type\" value=\"Spot\""));
        assert!(out.contains("name=\"Spot FOV\" value=\"45\""));
        assert!(out.contains("name=\"Range\" value=\"15\""));
    }

    #[test]
    fn test_directional_light_has_no_range() {
        let component = Component::Light(Light {
            light_type: LightType::Directional,
            color: [1.0, 1.0, 1.0],
            intensity: 1.0,
            range: 0.0,
            spot_angle: 0.0,
            cast_shadows: true,
        });
        let out = map_to_string(&component, MapperSettings::default());
        assert!(out.contains("name=\"Light Type\" value=\"Directional\""));
        assert!(!out.contains("name=\"Range\""));
        assert!(out.contains("name=\"Cast Shadows\" value=\"true\""));
    }

    #[test]
    fn test_camera_markup() {
        let component = Component::Camera(Camera {
            fov: 60.0,
            near_clip: 0.1,
            far_clip: 1000.0,
            orthographic: false,
            ortho_size: 0.0,
        });
        let out = map_to_string(&component, MapperSettings::default());
        assert!(out.contains("component type=\"Camera\""));
        assert!(out.contains("name=\"FOV\" value=\"60\""));
        assert!(out.contains("name=\"Near Clip\" value=\"0.1\""));
        assert!(out.contains("name=\"Far Clip\" value=\"1000\""));
        assert!(!out.contains("Orthographic"));
    }

    #[test]
    fn test_renderer_emits_model_and_material_refs() {
        let component = Component::MeshRenderer(MeshRenderer {
            renderer_id: 7,
            model: "Models/Rock.mdl".to_string(),
            materials: vec![
                "Materials/RockA.xml".to_string(),
                "Materials/RockB.xml".to_string(),
            ],
            cast_shadows: true,
        });
        let out = map_to_string(&component, MapperSettings::default());
        assert!(out.contains("component type=\"StaticModel\""));
        assert!(out.contains("value=\"Model;Models/Rock.mdl\""));
        assert!(out.contains("value=\"Material;Materials/RockA.xml;Materials/RockB.xml\""));
        assert!(out.contains("name=\"Cast Shadows\" value=\"true\""));
    }

    #[test]
    fn test_renderer_respects_exclusion_set() {
        let renderer = MeshRenderer {
            renderer_id: 42,
            model: "Models/Shared.mdl".to_string(),
            materials: vec![],
            cast_shadows: false,
        };
        let component = Component::MeshRenderer(renderer);

        let mut writer = XmlWriter::new(Vec::new());
        let mut exclusion = HashSet::new();
        let context = PrefabContext::for_asset_path("Scenes/Test.xml");

        map_component(
            &mut writer,
            "",
            &component,
            &mut exclusion,
            &context,
            MapperSettings::default(),
        )
        .unwrap();
        assert!(exclusion.contains(&42));

        // Second traversal path reaches the same renderer
        map_component(
            &mut writer,
            "",
            &component,
            &mut exclusion,
            &context,
            MapperSettings::default(),
        )
        .unwrap();

        let out = String::from_utf8(writer.finish().unwrap()).unwrap();
        assert_eq!(out.matches("component type=\"StaticModel\"").count(), 1);
    }

    #[test]
    fn test_navigable_markup() {
        let recursive = Component::NavigationSource(NavigationSource { recursive: true });
        let out = map_to_string(&recursive, MapperSettings::default());
        assert_eq!(out, "<component type=\"Navigable\" />\n");

        let shallow = Component::NavigationSource(NavigationSource { recursive: false });
        let out = map_to_string(&shallow, MapperSettings::default());
        assert!(out.contains("component type=\"Navigable\""));
        assert!(out.contains("name=\"Recursive\" value=\"false\""));
        assert!(out.trim_end().ends_with("</component>"));
    }

    #[test]
    fn test_physics_body_and_shape() {
        let body = Component::PhysicsBody(PhysicsBody {
            mass: 2.5,
            kinematic: true,
            use_gravity: false,
        });
        let out = map_to_string(&body, MapperSettings::default());
        assert!(out.contains("component type=\"RigidBody\""));
        assert!(out.contains("name=\"Mass\" value=\"2.5\""));
        assert!(out.contains("name=\"Is Kinematic\" value=\"true\""));
        assert!(out.contains("name=\"Use Gravity\" value=\"false\""));

        let shape = Component::CollisionShape(CollisionShape {
            shape: CollisionShapeKind::Box,
            size: [1.0, 2.0, 3.0],
            offset: [0.0, 1.0, 0.0],
        });
        let out = map_to_string(&shape, MapperSettings::default());
        assert!(out.contains("component type=\"CollisionShape\""));
        assert!(out.contains("name=\"Shape Type\" value=\"Box\""));
        assert!(out.contains("name=\"Size\" value=\"1 2 3\""));
        assert!(out.contains("name=\"Offset Position\" value=\"0 1 0\""));
    }
}
