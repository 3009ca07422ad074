//! # Sceneport Core
//!
//! Exports editor scene graphs to an engine-native scene/prefab XML format.
//!
//! This crate provides the traversal and serialization engine for Sceneport:
//! - A host-side scene data model (nodes, transforms, components)
//! - Deterministic destination-path resolution with name flattening
//! - A streaming markup writer matching the engine schema byte for byte
//! - Component mappers from host constructs to engine components
//! - A resumable batch job yielding progress reports for a driving loop
//!
//! ## Architecture
//!
//! The exporter never touches the destination itself; everything that depends
//! on the target environment goes through the `Engine` trait: opening markup
//! documents (with up-to-date skipping), resolving skybox cubemaps, and
//! generating navigation meshes. `DataFolderEngine` is the filesystem-backed
//! implementation used by the CLI.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sceneport_core::{
//!     config::ExportConfig,
//!     engine::DataFolderEngine,
//!     progress::ExportJob,
//! };
//!
//! let config = ExportConfig::new("/path/to/engine/Data");
//! let mut engine = DataFolderEngine::new(&config.export_folder, config.updated_only);
//!
//! let assets = Vec::new(); // scene assets, deserialized from the host
//! for report in ExportJob::new(&mut engine, &config, assets) {
//!     println!("{}", report?.message);
//! }
//! # Ok::<(), sceneport_core::errors::ExportError>(())
//! ```

pub mod config;
pub mod engine;
pub mod errors;
pub mod exporter;
pub mod mappers;
pub mod paths;
pub mod progress;
pub mod scene;
pub mod xml;

mod node;
#[cfg(test)]
mod test_support;

pub use config::ExportConfig;
pub use engine::{AssetKey, DataFolderEngine, Engine};
pub use errors::ExportError;
pub use exporter::{ExportOutcome, PrefabContext, SceneExporter};
pub use progress::{ExportJob, ProgressReport};
pub use scene::{SceneAsset, SceneNode};

/// Version of the Sceneport core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
