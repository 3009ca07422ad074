//! Scene and prefab export orchestration
//!
//! Top-level entry point for writing one scene asset: resolves the
//! destination path, opens the markup document through the engine
//! collaborator, emits scene-level fixed components, hands every root object
//! to the node exporter, and triggers the dependent navigation-mesh pass once
//! the document is closed.

use crate::config::ExportConfig;
use crate::engine::{AssetKey, Engine};
use crate::errors::ExportError;
use crate::mappers::{write_skybox_component, zone, MapperSettings};
use crate::node::NodeWriter;
use crate::paths::{replace_extension, resolve_scene_path};
use crate::scene::{find_first_skybox, SceneAsset};
use crate::xml::XmlWriter;
use std::collections::HashSet;
use tracing::info;

/// Per-export-call scratch state
///
/// Carries the temp-folder namespace for nested assets generated while this
/// scene or prefab is being exported. Derived deterministically from the
/// destination asset path so two concurrent exports of different assets can
/// never collide on generated filenames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefabContext {
    temp_folder: String,
}

impl PrefabContext {
    /// Derive the context for a resolved destination asset path
    pub fn for_asset_path(asset_path: &str) -> Self {
        Self {
            temp_folder: replace_extension(asset_path, ""),
        }
    }

    /// Destination-relative namespace for nested asset generation
    pub fn temp_folder(&self) -> &str {
        &self.temp_folder
    }
}

/// What happened to one asset during export
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The document was written to the given destination-relative path
    Written { asset_path: String },
    /// The destination was already up to date; nothing was touched
    UpToDate { asset_path: String },
}

impl ExportOutcome {
    pub fn asset_path(&self) -> &str {
        match self {
            ExportOutcome::Written { asset_path } | ExportOutcome::UpToDate { asset_path } => {
                asset_path
            }
        }
    }
}

/// Exports scene assets as scene documents or freestanding prefabs
pub struct SceneExporter<'a, E: Engine> {
    engine: &'a mut E,
    config: &'a ExportConfig,
}

impl<'a, E: Engine> SceneExporter<'a, E> {
    pub fn new(engine: &'a mut E, config: &'a ExportConfig) -> Self {
        Self { engine, config }
    }

    /// Destination-relative path this scene will be written to
    pub fn resolve_asset_path(&self, scene: &SceneAsset) -> String {
        resolve_scene_path(&scene.source_path)
    }

    /// Export one scene asset
    ///
    /// Returns `UpToDate` without touching anything when the engine reports
    /// the destination current under the active policy; the dependent
    /// navigation-mesh pass only runs for documents that were written.
    pub fn export_scene(&mut self, scene: &SceneAsset) -> Result<ExportOutcome, ExportError> {
        let asset_path = self.resolve_asset_path(scene);
        let context = PrefabContext::for_asset_path(&asset_path);
        let key = AssetKey::new(scene.source_path.clone());

        let Some(mut writer) =
            self.engine
                .try_create_xml(&key, &asset_path, scene.source_timestamp)?
        else {
            info!("Scene '{}' is up to date, skipping", scene.name);
            return Ok(ExportOutcome::UpToDate { asset_path });
        };

        info!("Exporting scene '{}' to {}", scene.name, asset_path);

        let mut exclusion: HashSet<u64> = HashSet::new();
        let settings = MapperSettings {
            export_reflection_probes: self.config.export_reflection_probes,
        };
        let mut nodes = NodeWriter::new(self.config.skip_disabled, settings);

        if self.config.scene_as_prefab {
            self.write_prefab(&mut writer, scene, &mut nodes, &mut exclusion, &context)?;
        } else {
            self.write_scene_document(&mut writer, scene, &mut nodes, &mut exclusion, &context)?;
        }

        writer.finish()?;
        self.engine.export_nav_mesh(&context)?;

        Ok(ExportOutcome::Written { asset_path })
    }

    fn write_scene_document(
        &mut self,
        writer: &mut XmlWriter<E::Out>,
        scene: &SceneAsset,
        nodes: &mut NodeWriter,
        exclusion: &mut HashSet<u64>,
        context: &PrefabContext,
    ) -> Result<(), ExportError> {
        writer.start_element("scene")?;
        writer.whitespace("\n")?;

        writer.attribute_element("\t", "Name", &scene.name)?;
        writer.start_component("\t", "Octree")?;
        writer.end_element()?;
        writer.whitespace("\n")?;
        writer.start_component("\t", "DebugRenderer")?;
        writer.end_element()?;
        writer.whitespace("\n")?;

        // First skybox found on any root subtree wins; otherwise the scene
        // background comes from the ambient render settings.
        let node_skybox = find_first_skybox(&scene.roots);
        let skybox_material = node_skybox
            .map(|skybox| skybox.material.clone())
            .or_else(|| scene.render_settings.skybox_material.clone());

        if node_skybox.is_none() {
            if let Some(material) = &scene.render_settings.skybox_material {
                write_skybox_component(writer, "\t", material)?;
            }
        }

        zone::write_ambient_zone(writer, "\t", &scene.render_settings)?;

        if let Some(material) = &skybox_material {
            if let Some(cubemap) = self.engine.try_get_skybox_cubemap(material) {
                if !cubemap.trim().is_empty() {
                    zone::write_cubemap_zone(
                        writer,
                        "\t",
                        [zone::SCENE_ZONE_EXTENT; 3],
                        &cubemap,
                    )?;
                }
            }
        }

        for root in &scene.roots {
            nodes.write_node(writer, "\t", root, exclusion, true, context)?;
        }

        writer.end_element()?;
        writer.whitespace("\n")
    }

    fn write_prefab(
        &mut self,
        writer: &mut XmlWriter<E::Out>,
        scene: &SceneAsset,
        nodes: &mut NodeWriter,
        exclusion: &mut HashSet<u64>,
        context: &PrefabContext,
    ) -> Result<(), ExportError> {
        // The target format requires a single root; multiple roots get an
        // artificial wrapper node, a single root is written bare.
        if scene.roots.len() > 1 {
            let id = nodes.next_id();
            writer.start_element("node")?;
            writer.attribute("id", &id.to_string())?;
            writer.whitespace("\n")?;
            for root in &scene.roots {
                nodes.write_node(writer, "\t", root, exclusion, true, context)?;
            }
            writer.end_element()?;
            writer.whitespace("\n")
        } else {
            for root in &scene.roots {
                nodes.write_node(writer, "", root, exclusion, true, context)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Component, Light, LightType, MeshRenderer, SceneNode, Skybox};
    use crate::test_support::MemoryEngine;

    fn point_light() -> Component {
        Component::Light(Light {
            light_type: LightType::Point,
            color: [1.0, 1.0, 1.0],
            intensity: 1.0,
            range: 10.0,
            spot_angle: 0.0,
            cast_shadows: false,
        })
    }

    fn scene_with_roots(roots: Vec<SceneNode>) -> SceneAsset {
        SceneAsset {
            name: "Test".to_string(),
            source_path: "Scenes/Test.scene".to_string(),
            source_timestamp: None,
            roots,
            render_settings: Default::default(),
        }
    }

    fn export(scene: &SceneAsset, config: &ExportConfig, engine: &mut MemoryEngine) -> String {
        let outcome = SceneExporter::new(engine, config).export_scene(scene).unwrap();
        let path = outcome.asset_path().to_string();
        engine.document(&path).expect("document written")
    }

    #[test]
    fn test_scene_document_chrome_order() {
        let scene = scene_with_roots(vec![SceneNode::new("Root", 1)]);
        let mut engine = MemoryEngine::new();
        let out = export(&scene, &ExportConfig::default(), &mut engine);

        assert!(out.starts_with("<scene>\n"));
        assert!(out.trim_end().ends_with("</scene>"));
        let name = out.find("name=\"Name\" value=\"Test\"").unwrap();
        let octree = out.find("component type=\"Octree\"").unwrap();
        let debug = out.find("component type=\"DebugRenderer\"").unwrap();
        let ambient = out.find("component type=\"Zone\"").unwrap();
        let node = out.find("<node id=\"1\"").unwrap();
        assert!(name < octree && octree < debug && debug < ambient && ambient < node);
    }

    #[test]
    fn test_round_trip_disabled_root_is_absent() {
        // Root A enabled with a light, root B disabled, skip_disabled on
        let root_a = SceneNode::new("A", 1).with_component(point_light());
        let mut root_b = SceneNode::new("B", 2);
        root_b.enabled = false;
        let scene = scene_with_roots(vec![root_a, root_b]);

        let mut config = ExportConfig::default();
        config.skip_disabled = true;
        let mut engine = MemoryEngine::new();
        let out = export(&scene, &config, &mut engine);

        assert_eq!(out.matches("<scene>").count(), 1);
        assert_eq!(out.matches("<node id=").count(), 1);
        assert_eq!(out.matches("component type=\"Light\"").count(), 1);
        assert!(!out.contains("value=\"B\""));
    }

    #[test]
    fn test_skybox_fallback_emits_cubemap_zone() {
        // No skybox component anywhere; render settings reference material M
        // which the engine maps to cubemap "tex/cube1".
        let mut scene = scene_with_roots(vec![SceneNode::new("Root", 1)]);
        scene.render_settings.skybox_material = Some("Materials/M.xml".to_string());

        let mut engine = MemoryEngine::new();
        engine.set_skybox_cubemap("Materials/M.xml", "tex/cube1");
        let out = export(&scene, &ExportConfig::default(), &mut engine);

        // Scene-level skybox fallback plus a second zone with the cubemap
        assert_eq!(out.matches("component type=\"Skybox\"").count(), 1);
        assert_eq!(out.matches("component type=\"Zone\"").count(), 2);
        assert!(out.contains("name=\"Zone Texture\" value=\"TextureCube;tex/cube1\""));
    }

    #[test]
    fn test_node_skybox_suppresses_scene_level_fallback() {
        let root = SceneNode::new("Sky", 1).with_component(Component::Skybox(Skybox {
            material: "Materials/NodeSky.xml".to_string(),
        }));
        let mut scene = scene_with_roots(vec![root]);
        scene.render_settings.skybox_material = Some("Materials/Ambient.xml".to_string());

        let mut engine = MemoryEngine::new();
        engine.set_skybox_cubemap("Materials/NodeSky.xml", "tex/node");
        engine.set_skybox_cubemap("Materials/Ambient.xml", "tex/ambient");
        let out = export(&scene, &ExportConfig::default(), &mut engine);

        // Only the node's own skybox component, and its cubemap wins
        assert_eq!(out.matches("component type=\"Skybox\"").count(), 1);
        assert!(out.contains("Material;Materials/NodeSky.xml"));
        assert!(out.contains("TextureCube;tex/node"));
        assert!(!out.contains("tex/ambient"));
    }

    #[test]
    fn test_missing_cubemap_means_no_second_zone() {
        let mut scene = scene_with_roots(vec![SceneNode::new("Root", 1)]);
        scene.render_settings.skybox_material = Some("Materials/M.xml".to_string());

        let mut engine = MemoryEngine::new();
        let out = export(&scene, &ExportConfig::default(), &mut engine);

        assert_eq!(out.matches("component type=\"Zone\"").count(), 1);
        assert!(!out.contains("Zone Texture"));
    }

    #[test]
    fn test_prefab_single_root_has_no_wrapper() {
        let scene = scene_with_roots(vec![SceneNode::new("Only", 1)]);
        let mut config = ExportConfig::default();
        config.scene_as_prefab = true;
        let mut engine = MemoryEngine::new();
        let out = export(&scene, &config, &mut engine);

        assert!(out.starts_with("<node id=\"1\""));
        assert_eq!(out.matches("<node id=").count(), 1);
        assert!(!out.contains("<scene"));
    }

    #[test]
    fn test_prefab_multi_root_gets_exactly_one_wrapper() {
        let scene = scene_with_roots(vec![
            SceneNode::new("A", 1),
            SceneNode::new("B", 2),
            SceneNode::new("C", 3),
        ]);
        let mut config = ExportConfig::default();
        config.scene_as_prefab = true;
        let mut engine = MemoryEngine::new();
        let out = export(&scene, &config, &mut engine);

        // Wrapper claims id 1, roots follow in original order
        assert!(out.starts_with("<node id=\"1\">"));
        assert_eq!(out.matches("<node id=").count(), 4);
        let a = out.find("value=\"A\"").unwrap();
        let b = out.find("value=\"B\"").unwrap();
        let c = out.find("value=\"C\"").unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_shared_renderer_is_emitted_once_per_document() {
        let shared = MeshRenderer {
            renderer_id: 99,
            model: "Models/Shared.mdl".to_string(),
            materials: vec![],
            cast_shadows: false,
        };
        let scene = scene_with_roots(vec![
            SceneNode::new("A", 1).with_component(Component::MeshRenderer(shared.clone())),
            SceneNode::new("B", 2).with_component(Component::MeshRenderer(shared)),
        ]);

        let mut engine = MemoryEngine::new();
        let out = export(&scene, &ExportConfig::default(), &mut engine);
        assert_eq!(out.matches("component type=\"StaticModel\"").count(), 1);
    }

    #[test]
    fn test_nav_mesh_runs_after_written_document() {
        let scene = scene_with_roots(vec![SceneNode::new("Root", 1)]);
        let mut engine = MemoryEngine::new();
        export(&scene, &ExportConfig::default(), &mut engine);

        assert_eq!(engine.nav_mesh_exports, vec!["Scenes/Test".to_string()]);
    }

    #[test]
    fn test_up_to_date_scene_skips_nav_mesh_too() {
        let scene = scene_with_roots(vec![SceneNode::new("Root", 1)]);
        let mut engine = MemoryEngine::new();
        engine.mark_up_to_date("Scenes/Test.xml");

        let config = ExportConfig::default();
        let outcome = SceneExporter::new(&mut engine, &config)
            .export_scene(&scene)
            .unwrap();

        assert!(matches!(outcome, ExportOutcome::UpToDate { .. }));
        assert!(engine.documents.is_empty());
        assert!(engine.nav_mesh_exports.is_empty());
    }

    #[test]
    fn test_prefab_context_is_deterministic() {
        let a = PrefabContext::for_asset_path("Scenes/Town.xml");
        let b = PrefabContext::for_asset_path("Scenes/Town.xml");
        assert_eq!(a, b);
        assert_eq!(a.temp_folder(), "Scenes/Town");
    }
}
