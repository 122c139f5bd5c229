use crate::loader::load_catalog;
use crate::pipeline::{build_pipeline, PipelineHandle};
use dishx_core::{Error, RawRecord, Result};
use parking_lot::RwLock;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Owns the current pipeline and swaps it as a whole.
///
/// Until the first build finishes every query is refused with
/// [`Error::NotReady`]. Readers hold an `Arc` snapshot, so a rebuild never
/// changes the handle a query is already using.
#[derive(Default)]
pub struct CatalogManager {
    current: RwLock<Option<Arc<PipelineHandle>>>,
}

impl CatalogManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pipeline(handle: PipelineHandle) -> Self {
        Self {
            current: RwLock::new(Some(Arc::new(handle))),
        }
    }

    /// Build a complete pipeline, then publish it.
    ///
    /// On failure the previously published pipeline stays in place.
    pub fn rebuild(&self, records: &[RawRecord]) -> Result<Arc<PipelineHandle>> {
        let handle = Arc::new(build_pipeline(records)?);
        *self.current.write() = Some(handle.clone());
        info!(records = handle.len(), "pipeline published");
        Ok(handle)
    }

    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<Arc<PipelineHandle>> {
        let records = load_catalog(path)?;
        self.rebuild(&records)
    }

    /// Snapshot of the current pipeline
    pub fn handle(&self) -> Result<Arc<PipelineHandle>> {
        self.current.read().clone().ok_or(Error::NotReady)
    }

    pub fn is_ready(&self) -> bool {
        self.current.read().is_some()
    }
}
