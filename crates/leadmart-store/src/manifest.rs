//! The batch manifest: a JSON sidecar binding a raw batch to the order rows
//! whose targets produced it.
//!
//! The scrape and verify stages run as separate invocations; orders may only
//! be marked complete after the verified output is durably written. The
//! manifest is how the verify stage learns which orders contributed to the
//! batch it just persisted. A target that failed acquisition is simply not
//! listed, so its order stays `PENDING_SCRAPE` for the next run.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use leadmart_core::OrderRef;

use crate::error::StoreError;
use crate::fs_util::write_atomic;

/// One target that contributed records to the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestTarget {
    pub niche: String,
    pub city: String,
    pub records: usize,
    /// Row reference of the originating order; `None` for the maintenance
    /// target.
    pub order_ref: Option<OrderRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchManifest {
    pub run_id: Uuid,
    pub generated_at: String,
    pub record_count: usize,
    pub targets: Vec<ManifestTarget>,
}

impl BatchManifest {
    /// Row references of every order that contributed to this batch.
    #[must_use]
    pub fn contributing_orders(&self) -> Vec<OrderRef> {
        self.targets.iter().filter_map(|t| t.order_ref).collect()
    }
}

/// Path of the manifest for a raw batch path.
#[must_use]
pub fn manifest_path(raw_path: &Path) -> PathBuf {
    raw_path.with_extension("meta.json")
}

/// Write the manifest next to its raw batch.
///
/// # Errors
///
/// Returns [`StoreError::Json`] on encoding failure, [`StoreError::Io`] on
/// filesystem failure.
pub fn write_manifest(raw_path: &Path, manifest: &BatchManifest) -> Result<(), StoreError> {
    let path = manifest_path(raw_path);
    let json = serde_json::to_vec_pretty(manifest).map_err(|e| StoreError::Json {
        path: path.display().to_string(),
        source: e,
    })?;
    write_atomic(&path, &json)
}

/// Read the manifest for a raw batch, if one was written.
///
/// `None` when the manifest is absent: a raw batch produced outside the
/// scrape stage has no order bookkeeping, and the verify stage just skips
/// the queue update.
///
/// # Errors
///
/// Returns [`StoreError::Io`] / [`StoreError::Json`] when a present
/// manifest cannot be read or decoded.
pub fn read_manifest(raw_path: &Path) -> Result<Option<BatchManifest>, StoreError> {
    let path = manifest_path(raw_path);
    if !path.exists() {
        return Ok(None);
    }
    let bytes = std::fs::read(&path).map_err(|e| StoreError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let manifest = serde_json::from_slice(&bytes).map_err(|e| StoreError::Json {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(Some(manifest))
}
