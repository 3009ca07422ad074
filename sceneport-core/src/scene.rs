use serde::{Deserialize, Serialize};

/// A scene authored in the host editor, ready for export
///
/// The exporter only ever reads this structure; ownership stays with whoever
/// loaded or built it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneAsset {
    pub name: String,
    /// Location of the source asset relative to the host project root
    pub source_path: String,
    /// Source modification time (unix seconds); `None` forces a rewrite
    #[serde(default)]
    pub source_timestamp: Option<u64>,
    pub roots: Vec<SceneNode>,
    #[serde(default)]
    pub render_settings: RenderSettings,
}

/// A single entity in the host scene graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneNode {
    pub name: String,
    /// Host-assigned identity, stable for the lifetime of the editor session
    pub instance_id: u64,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub transform: Transform,
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default)]
    pub children: Vec<SceneNode>,
}

/// Local transform in host editor conventions
///
/// Rotation is a quaternion stored in host order (x, y, z, w).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Transform {
    pub position: [f32; 3],
    pub rotation: [f32; 4],
    pub scale: [f32; 3],
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 0.0],
            rotation: [0.0, 0.0, 0.0, 1.0],
            scale: [1.0, 1.0, 1.0],
        }
    }
}

/// Scene-wide ambient rendering state from the host editor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderSettings {
    pub ambient_color: [f32; 3],
    pub fog_color: [f32; 3],
    pub fog_start: f32,
    pub fog_end: f32,
    /// Material used for the scene background when no node carries a skybox
    #[serde(default)]
    pub skybox_material: Option<String>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            ambient_color: [0.2, 0.2, 0.2],
            fog_color: [0.5, 0.5, 0.5],
            fog_start: 100.0,
            fog_end: 300.0,
            skybox_material: None,
        }
    }
}

/// A component attached to a scene node
///
/// Closed set of capabilities the exporter understands. Variants without a
/// registered mapper (`Script`) are skipped silently during export.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Component {
    Light(Light),
    Camera(Camera),
    MeshRenderer(MeshRenderer),
    Skybox(Skybox),
    PhysicsBody(PhysicsBody),
    CollisionShape(CollisionShape),
    NavigationSource(NavigationSource),
    ReflectionProbe(ReflectionProbe),
    /// Host-side behavior with no engine-native equivalent
    Script { name: String },
}

/// Light source component
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Light {
    pub light_type: LightType,
    pub color: [f32; 3],
    pub intensity: f32,
    pub range: f32,
    /// Cone angle in degrees, only meaningful for spot lights
    #[serde(default)]
    pub spot_angle: f32,
    #[serde(default)]
    pub cast_shadows: bool,
}

/// Types of lights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LightType {
    Directional,
    Point,
    Spot,
}

/// Camera component
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    pub fov: f32,
    pub near_clip: f32,
    pub far_clip: f32,
    #[serde(default)]
    pub orthographic: bool,
    #[serde(default)]
    pub ortho_size: f32,
}

/// Mesh renderer component referencing a model and its materials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshRenderer {
    /// Host identity of this renderer, used to suppress duplicate emission
    /// when the same renderer is reachable through more than one path
    pub renderer_id: u64,
    /// Destination-relative path of the exported model
    pub model: String,
    /// Destination-relative paths of the exported materials, slot order
    pub materials: Vec<String>,
    #[serde(default)]
    pub cast_shadows: bool,
}

/// Skybox component referencing a background material
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skybox {
    pub material: String,
}

/// Dynamics body component
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsBody {
    pub mass: f32,
    #[serde(default)]
    pub kinematic: bool,
    #[serde(default = "default_true")]
    pub use_gravity: bool,
}

/// Collision shape component
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollisionShape {
    pub shape: CollisionShapeKind,
    pub size: [f32; 3],
    #[serde(default)]
    pub offset: [f32; 3],
}

/// Supported collision shape kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionShapeKind {
    Box,
    Sphere,
    Capsule,
    TriangleMesh,
}

/// Marks a subtree as input geometry for navigation mesh generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationSource {
    #[serde(default = "default_true")]
    pub recursive: bool,
}

/// Reflection probe component
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReflectionProbe {
    /// Probe box extents in host units
    pub size: [f32; 3],
    /// Pre-baked cubemap, when the host has one
    #[serde(default)]
    pub cubemap: Option<String>,
}

fn default_true() -> bool {
    true
}

impl SceneNode {
    /// Create a node with an identity transform and no components
    pub fn new(name: impl Into<String>, instance_id: u64) -> Self {
        Self {
            name: name.into(),
            instance_id,
            enabled: true,
            transform: Transform::default(),
            components: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Attach a component, returning self for chaining
    pub fn with_component(mut self, component: Component) -> Self {
        self.components.push(component);
        self
    }

    /// Append a child node, returning self for chaining
    pub fn with_child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }

    /// Number of nodes in this subtree, including self
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(SceneNode::subtree_len).sum::<usize>()
    }
}

/// Depth-first search for the first skybox component in a subtree
///
/// Disabled nodes are searched too; the host treats the skybox as scene-wide
/// state regardless of the carrier's active flag.
pub fn find_first_skybox(roots: &[SceneNode]) -> Option<&Skybox> {
    for root in roots {
        if let Some(skybox) = find_skybox_in(root) {
            return Some(skybox);
        }
    }
    None
}

fn find_skybox_in(node: &SceneNode) -> Option<&Skybox> {
    for component in &node.components {
        if let Component::Skybox(skybox) = component {
            return Some(skybox);
        }
    }
    node.children.iter().find_map(find_skybox_in)
}
