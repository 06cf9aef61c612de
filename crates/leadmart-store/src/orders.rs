//! The order queue resource: customer-submitted lead-sourcing requests.
//!
//! The queue is append-only from the submission side and status-only mutable
//! from the pipeline side. Row references are 0-based record indexes taken
//! at read time; external submitters only append, so a reference stays valid
//! across the pipeline's read-modify-write cycle and newly appended rows
//! survive a status rewrite untouched.

use std::path::PathBuf;

use leadmart_core::{LeadOrder, OrderRef, OrderStatus, ORDER_HEADERS};

use crate::error::StoreError;
use crate::fs_util::write_atomic;

/// A pending order together with its stable row reference.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingOrder {
    pub order_ref: OrderRef,
    pub order: LeadOrder,
}

/// File-backed order queue. Single pipeline writer; external submitters
/// append between runs.
#[derive(Debug, Clone)]
pub struct OrderQueue {
    path: PathBuf,
}

impl OrderQueue {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        OrderQueue { path: path.into() }
    }

    /// All orders still waiting for a scrape, with their row references.
    ///
    /// Read failures degrade to an empty list with a warning: a missing or
    /// malformed queue must not stop the maintenance scrape. A stuck order
    /// is retried next run; a lost maintenance run is not recoverable.
    #[must_use]
    pub fn list_pending(&self) -> Vec<PendingOrder> {
        match self.read_all() {
            Ok(orders) => orders
                .into_iter()
                .enumerate()
                .filter(|(_, o)| o.status == OrderStatus::PendingScrape)
                .map(|(idx, order)| PendingOrder {
                    order_ref: OrderRef(idx),
                    order,
                })
                .collect(),
            Err(StoreError::MissingInput { .. }) => {
                tracing::info!(path = %self.path.display(), "order queue not present; no custom orders");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "order queue unreadable; proceeding with no custom orders"
                );
                Vec::new()
            }
        }
    }

    /// Every order in the queue, in row order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingInput`] when the queue file does not
    /// exist, [`StoreError::Csv`] when it cannot be decoded.
    pub fn list_all(&self) -> Result<Vec<LeadOrder>, StoreError> {
        self.read_all()
    }

    /// Mark the referenced orders `SCRAPE_COMPLETE`.
    ///
    /// Re-reads the queue, flips only the status field of rows that are
    /// still `PENDING_SCRAPE`, and rewrites the file atomically. Every
    /// other field, and any row appended since the original read, is
    /// preserved. Returns the number of rows actually updated; references
    /// to unknown or already-complete rows are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the queue cannot be re-read or
    /// rewritten. Callers treat this as non-fatal: the affected orders stay
    /// `PENDING_SCRAPE` and are reprocessed on the next run.
    pub fn mark_complete(&self, refs: &[OrderRef]) -> Result<usize, StoreError> {
        if refs.is_empty() {
            return Ok(0);
        }

        let mut orders = self.read_all()?;
        let mut updated = 0;
        for &OrderRef(idx) in refs {
            match orders.get_mut(idx) {
                Some(order) if order.status == OrderStatus::PendingScrape => {
                    order.status = OrderStatus::ScrapeComplete;
                    updated += 1;
                }
                Some(order) => {
                    tracing::warn!(
                        row = idx,
                        status = %order.status,
                        "order already complete; leaving untouched"
                    );
                }
                None => {
                    tracing::warn!(row = idx, "order reference beyond end of queue; skipping");
                }
            }
        }

        self.write_all(&orders)?;
        Ok(updated)
    }

    /// Append a newly submitted order to the end of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the queue cannot be read or rewritten.
    pub fn append(&self, order: &LeadOrder) -> Result<(), StoreError> {
        let mut orders = match self.read_all() {
            Ok(orders) => orders,
            Err(StoreError::MissingInput { .. }) => Vec::new(),
            Err(e) => return Err(e),
        };
        orders.push(order.clone());
        self.write_all(&orders)
    }

    fn read_all(&self) -> Result<Vec<LeadOrder>, StoreError> {
        if !self.path.exists() {
            return Err(StoreError::MissingInput {
                path: self.path.display().to_string(),
            });
        }
        let csv_err = |source: csv::Error| StoreError::Csv {
            path: self.path.display().to_string(),
            source,
        };
        let mut reader = csv::Reader::from_path(&self.path).map_err(csv_err)?;
        reader
            .deserialize()
            .collect::<Result<Vec<LeadOrder>, csv::Error>>()
            .map_err(csv_err)
    }

    fn write_all(&self, orders: &[LeadOrder]) -> Result<(), StoreError> {
        let csv_err = |source: csv::Error| StoreError::Csv {
            path: self.path.display().to_string(),
            source,
        };
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        writer.write_record(ORDER_HEADERS).map_err(csv_err)?;
        for order in orders {
            writer.serialize(order).map_err(csv_err)?;
        }
        let bytes = writer.into_inner().map_err(|e| StoreError::Io {
            path: self.path.display().to_string(),
            source: e.into_error(),
        })?;
        write_atomic(&self.path, &bytes)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[path = "orders_test.rs"]
mod tests;
