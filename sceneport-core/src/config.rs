use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Export configuration options
///
/// One instance is passed into each export entry point. The fields mirror the
/// preferences a host editor persists between sessions: the destination data
/// folder and the per-run toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Root of the destination data folder the engine reads from
    pub export_folder: PathBuf,
    /// Only write assets whose source is newer than the destination
    pub updated_only: bool,
    /// Restrict the run to an explicitly selected set of assets
    pub selected_only: bool,
    /// Write scenes as freestanding prefabs instead of full scene documents
    pub scene_as_prefab: bool,
    /// Prune disabled nodes (and their entire subtrees) from the output
    pub skip_disabled: bool,
    /// Emit zone elements for reflection probe components
    pub export_reflection_probes: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            export_folder: PathBuf::new(),
            updated_only: false,
            selected_only: false,
            scene_as_prefab: false,
            skip_disabled: false,
            export_reflection_probes: false,
        }
    }
}

impl ExportConfig {
    /// Create a config targeting the given destination folder
    pub fn new<P: Into<PathBuf>>(export_folder: P) -> Self {
        Self {
            export_folder: export_folder.into(),
            ..Self::default()
        }
    }
}
