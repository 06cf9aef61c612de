//! Durable resources of the pipeline: the raw batch, the verified output,
//! the order queue, and the batch manifest binding them together.
//!
//! Every write goes through a temp-file-and-rename so an external reader
//! (the dashboard polls the verified CSV) never observes a half-written
//! file. The pipeline assumes at most one run in flight; there is no
//! cross-process lock.

pub mod error;
mod fs_util;
pub mod manifest;
pub mod orders;
pub mod raw;
pub mod verified;

pub use error::StoreError;
pub use manifest::{read_manifest, write_manifest, BatchManifest, ManifestTarget};
pub use orders::{OrderQueue, PendingOrder};
pub use raw::{read_raw_batch, write_raw_batch};
pub use verified::{write_verified, RunMeta};
