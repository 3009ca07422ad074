//! Resumable export job
//!
//! Models a batch export as a lazy sequence of progress reports so a driving
//! loop can resume it in bounded time slices and keep a host UI responsive.
//! Suspension happens only between top-level assets, never mid-traversal;
//! dropping the iterator cancels the job and leaves already-written files
//! as they are.

use crate::config::ExportConfig;
use crate::engine::Engine;
use crate::errors::ExportError;
use crate::exporter::{ExportOutcome, SceneExporter};
use crate::scene::SceneAsset;
use std::collections::HashSet;
use tracing::{info, warn};

/// Human-readable status for one completed export step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressReport {
    pub message: String,
}

impl ProgressReport {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Lazy batch export over a fixed list of scene assets
///
/// Yields one `ProgressReport` per asset, in the order the assets were
/// queued. An `Err` item halts the job; subsequent calls to `next` return
/// `None`.
pub struct ExportJob<'a, E: Engine> {
    engine: &'a mut E,
    config: &'a ExportConfig,
    queue: std::vec::IntoIter<SceneAsset>,
    selection: Option<HashSet<String>>,
    halted: bool,
}

impl<'a, E: Engine> ExportJob<'a, E> {
    pub fn new(engine: &'a mut E, config: &'a ExportConfig, assets: Vec<SceneAsset>) -> Self {
        Self {
            engine,
            config,
            queue: assets.into_iter(),
            selection: None,
            halted: false,
        }
    }

    /// Restrict the job to assets whose source path is in the selection
    ///
    /// Only consulted when the configuration asks for selected-only export;
    /// an empty selection then exports nothing.
    pub fn with_selection(mut self, selection: HashSet<String>) -> Self {
        self.selection = Some(selection);
        self
    }

    fn is_selected(&self, asset: &SceneAsset) -> bool {
        if !self.config.selected_only {
            return true;
        }
        match &self.selection {
            Some(selection) => selection.contains(&asset.source_path),
            None => {
                warn!("Selected-only export without a selection, skipping all assets");
                false
            }
        }
    }
}

impl<'a, E: Engine> Iterator for ExportJob<'a, E> {
    type Item = Result<ProgressReport, ExportError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.halted {
            return None;
        }
        loop {
            let asset = self.queue.next()?;
            if !self.is_selected(&asset) {
                info!("Skipping unselected scene '{}'", asset.name);
                continue;
            }
            let mut exporter = SceneExporter::new(self.engine, self.config);
            return Some(match exporter.export_scene(&asset) {
                Ok(ExportOutcome::Written { asset_path }) => {
                    Ok(ProgressReport::new(format!(
                        "Exported '{}' to {}",
                        asset.name, asset_path
                    )))
                }
                Ok(ExportOutcome::UpToDate { asset_path }) => {
                    Ok(ProgressReport::new(format!(
                        "'{}' is up to date at {}",
                        asset.name, asset_path
                    )))
                }
                Err(error) => {
                    self.halted = true;
                    Err(error)
                }
            });
        }
    }
}
