//! Target engine collaborator seam
//!
//! The exporter never touches the destination data tree directly; everything
//! goes through the [`Engine`] trait so the up-to-date policy, cubemap
//! lookups, and dependent-asset generation can be swapped out (and mocked in
//! tests). [`DataFolderEngine`] is the filesystem implementation used by the
//! CLI.

use crate::errors::ExportError;
use crate::exporter::PrefabContext;
use crate::xml::XmlWriter;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;
use tracing::debug;

/// Opaque identity of a source asset
///
/// An empty key means "no backing source asset"; destinations written under
/// an empty key are never considered up to date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetKey(Option<String>);

impl AssetKey {
    pub const EMPTY: AssetKey = AssetKey(None);

    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        if id.is_empty() {
            Self(None)
        } else {
            Self(Some(id))
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

/// Interface to the target engine's asset pipeline
pub trait Engine {
    /// Byte sink for markup documents created by this engine
    type Out: Write;

    /// Open a markup document at a destination-relative path
    ///
    /// Returns `Ok(None)` when the destination is already up to date under
    /// the current policy; that is a valid skip, not an error.
    fn try_create_xml(
        &mut self,
        key: &AssetKey,
        rel_path: &str,
        source_timestamp: Option<u64>,
    ) -> Result<Option<XmlWriter<Self::Out>>, ExportError>;

    /// Resolve the cubemap texture baked for a skybox material, if any
    fn try_get_skybox_cubemap(&self, material: &str) -> Option<String>;

    /// Generate the navigation mesh for a finished export
    fn export_nav_mesh(&mut self, context: &PrefabContext) -> Result<(), ExportError>;
}

/// Filesystem-backed engine rooted at the destination data folder
pub struct DataFolderEngine {
    root: PathBuf,
    updated_only: bool,
    skybox_cubemaps: HashMap<String, String>,
}

impl DataFolderEngine {
    pub fn new<P: Into<PathBuf>>(root: P, updated_only: bool) -> Self {
        Self {
            root: root.into(),
            updated_only,
            skybox_cubemaps: HashMap::new(),
        }
    }

    /// Record that a skybox material resolved to a cubemap during an earlier
    /// material pass
    pub fn register_skybox_cubemap(
        &mut self,
        material: impl Into<String>,
        cubemap: impl Into<String>,
    ) {
        self.skybox_cubemaps.insert(material.into(), cubemap.into());
    }

    /// Absolute destination for a destination-relative path
    pub fn destination(&self, rel_path: &str) -> PathBuf {
        self.root.join(rel_path)
    }

    fn is_up_to_date(&self, dest: &Path, source_timestamp: Option<u64>) -> bool {
        let Some(source_secs) = source_timestamp else {
            return false;
        };
        let Ok(metadata) = fs::metadata(dest) else {
            return false;
        };
        let Ok(modified) = metadata.modified() else {
            return false;
        };
        let dest_secs = modified
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        dest_secs >= source_secs
    }
}

impl Engine for DataFolderEngine {
    type Out = BufWriter<File>;

    fn try_create_xml(
        &mut self,
        key: &AssetKey,
        rel_path: &str,
        source_timestamp: Option<u64>,
    ) -> Result<Option<XmlWriter<Self::Out>>, ExportError> {
        let dest = self.destination(rel_path);

        if self.updated_only && !key.is_empty() && self.is_up_to_date(&dest, source_timestamp) {
            debug!("Destination up to date, skipping: {}", dest.display());
            return Ok(None);
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(&dest)?;
        Ok(Some(XmlWriter::new(BufWriter::new(file))))
    }

    fn try_get_skybox_cubemap(&self, material: &str) -> Option<String> {
        self.skybox_cubemaps.get(material).cloned()
    }

    fn export_nav_mesh(&mut self, context: &PrefabContext) -> Result<(), ExportError> {
        let dest = self.destination(&format!("{}/NavMesh.xml", context.temp_folder()));
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        debug!("Writing navigation mesh parameters: {}", dest.display());

        let mut writer = XmlWriter::new(BufWriter::new(File::create(&dest)?));
        writer.start_element("navigation")?;
        writer.attribute("cell_size", "0.3")?;
        writer.attribute("cell_height", "0.2")?;
        writer.attribute("agent_height", "2")?;
        writer.attribute("agent_radius", "0.6")?;
        writer.end_element()?;
        writer.whitespace("\n")?;
        writer.finish()?;
        Ok(())
    }
}
