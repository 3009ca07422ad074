//! In-memory engine collaborator for exporter tests

use crate::engine::{AssetKey, Engine};
use crate::errors::ExportError;
use crate::exporter::PrefabContext;
use crate::xml::XmlWriter;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::io::{self, Write};
use std::rc::Rc;

/// Write half of a buffer the test keeps a handle to
pub(crate) struct SharedBuf(Rc<RefCell<Vec<u8>>>);

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Engine that captures documents in memory instead of touching disk
#[derive(Default)]
pub(crate) struct MemoryEngine {
    pub(crate) documents: Vec<(String, Rc<RefCell<Vec<u8>>>)>,
    pub(crate) nav_mesh_exports: Vec<String>,
    up_to_date: HashSet<String>,
    skybox_cubemaps: HashMap<String, String>,
}

impl MemoryEngine {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Report the given destination path as current so exports skip it
    pub(crate) fn mark_up_to_date(&mut self, asset_path: &str) {
        self.up_to_date.insert(asset_path.to_string());
    }

    pub(crate) fn set_skybox_cubemap(&mut self, material: &str, cubemap: &str) {
        self.skybox_cubemaps
            .insert(material.to_string(), cubemap.to_string());
    }

    /// Captured document contents for the given destination path
    pub(crate) fn document(&self, asset_path: &str) -> Option<String> {
        self.documents
            .iter()
            .find(|(path, _)| path == asset_path)
            .map(|(_, buf)| String::from_utf8(buf.borrow().clone()).unwrap())
    }
}

impl Engine for MemoryEngine {
    type Out = SharedBuf;

    fn try_create_xml(
        &mut self,
        _key: &AssetKey,
        asset_path: &str,
        _source_timestamp: Option<u64>,
    ) -> Result<Option<XmlWriter<SharedBuf>>, ExportError> {
        if self.up_to_date.contains(asset_path) {
            return Ok(None);
        }
        let buf = Rc::new(RefCell::new(Vec::new()));
        self.documents.push((asset_path.to_string(), Rc::clone(&buf)));
        Ok(Some(XmlWriter::new(SharedBuf(buf))))
    }

    fn try_get_skybox_cubemap(&self, material: &str) -> Option<String> {
        self.skybox_cubemaps.get(material).cloned()
    }

    fn export_nav_mesh(&mut self, context: &PrefabContext) -> Result<(), ExportError> {
        self.nav_mesh_exports.push(context.temp_folder().to_string());
        Ok(())
    }
}
