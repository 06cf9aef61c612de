//! The raw batch resource: the hand-off file between the scrape and verify
//! stages.

use std::path::Path;

use leadmart_core::{RawLead, RAW_HEADERS};

use crate::error::StoreError;
use crate::fs_util::write_atomic;

/// Write a raw batch, overwriting any previous one.
///
/// The header row is written explicitly from the canonical schema, so even a
/// zero-record batch produces a readable file.
///
/// # Errors
///
/// Returns [`StoreError::Csv`] on serialization failure and
/// [`StoreError::Io`] on filesystem failure.
pub fn write_raw_batch(path: &Path, batch: &[RawLead]) -> Result<(), StoreError> {
    let csv_err = |source: csv::Error| StoreError::Csv {
        path: path.display().to_string(),
        source,
    };

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(RAW_HEADERS).map_err(csv_err)?;
    for lead in batch {
        writer.serialize(lead).map_err(csv_err)?;
    }
    let bytes = writer.into_inner().map_err(|e| StoreError::Io {
        path: path.display().to_string(),
        source: e.into_error(),
    })?;

    write_atomic(path, &bytes)
}

/// Read a raw batch written by the scrape stage.
///
/// # Errors
///
/// Returns [`StoreError::MissingInput`] when the file does not exist; on a
/// cold start there is nothing to verify and the caller treats this as
/// fatal. Other read or decode failures surface as [`StoreError::Io`] /
/// [`StoreError::Csv`].
pub fn read_raw_batch(path: &Path) -> Result<Vec<RawLead>, StoreError> {
    if !path.exists() {
        return Err(StoreError::MissingInput {
            path: path.display().to_string(),
        });
    }

    let mut reader = csv::Reader::from_path(path).map_err(|e| StoreError::Csv {
        path: path.display().to_string(),
        source: e,
    })?;

    reader
        .deserialize()
        .collect::<Result<Vec<RawLead>, csv::Error>>()
        .map_err(|e| StoreError::Csv {
            path: path.display().to_string(),
            source: e,
        })
}
