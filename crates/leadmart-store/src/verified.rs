//! The verified output resource: the one file the dashboard reads.
//!
//! Contract with the reader: the file always exists with the full header row
//! after a run, even when zero records survived verification ("file absent"
//! means the pipeline never ran; "file present, zero rows" means nothing
//! matched). A sidecar JSON next to the CSV carries the schema version so a
//! consumer can detect incompatible changes instead of failing on a missing
//! column.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use leadmart_core::{VerifiedLead, SCHEMA_VERSION, VERIFIED_HEADERS};

use crate::error::StoreError;
use crate::fs_util::write_atomic;

/// Sidecar metadata written next to the verified CSV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunMeta {
    pub schema_version: u32,
    pub run_id: Uuid,
    pub generated_at: String,
    pub row_count: usize,
}

impl RunMeta {
    #[must_use]
    pub fn new(run_id: Uuid, generated_at: String, row_count: usize) -> Self {
        RunMeta {
            schema_version: SCHEMA_VERSION,
            run_id,
            generated_at,
            row_count,
        }
    }
}

/// Path of the sidecar metadata file for a verified CSV path.
#[must_use]
pub fn meta_path(verified_path: &Path) -> PathBuf {
    verified_path.with_extension("meta.json")
}

/// Overwrite the verified output and its sidecar metadata.
///
/// The header row comes from the canonical schema, never from the record
/// set, so the column set and order are identical every run regardless of
/// how many records survived.
///
/// # Errors
///
/// Returns [`StoreError::Csv`] / [`StoreError::Json`] on encoding failure
/// and [`StoreError::Io`] on filesystem failure.
pub fn write_verified(
    path: &Path,
    leads: &[VerifiedLead],
    meta: &RunMeta,
) -> Result<(), StoreError> {
    let csv_err = |source: csv::Error| StoreError::Csv {
        path: path.display().to_string(),
        source,
    };

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(VERIFIED_HEADERS).map_err(csv_err)?;
    for lead in leads {
        writer.serialize(lead).map_err(csv_err)?;
    }
    let bytes = writer.into_inner().map_err(|e| StoreError::Io {
        path: path.display().to_string(),
        source: e.into_error(),
    })?;

    write_atomic(path, &bytes)?;

    let meta_file = meta_path(path);
    let json = serde_json::to_vec_pretty(meta).map_err(|e| StoreError::Json {
        path: meta_file.display().to_string(),
        source: e,
    })?;
    write_atomic(&meta_file, &json)
}
