//! Canonical column schemas for the pipeline's tabular resources.
//!
//! The verified output schema is the sole contract with the dashboard: it
//! opens the file by column name, so the header set and order must be
//! identical every run, including runs that produce zero rows. Bump
//! [`SCHEMA_VERSION`] (recorded in the output's sidecar metadata) whenever a
//! column is added, removed, or renamed so a consumer can detect the change
//! instead of failing on a missing key.

/// Version marker written to the verified output's sidecar metadata.
pub const SCHEMA_VERSION: u32 = 1;

/// Timestamp format used in the `Scraped At` and `Submitted At` columns.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Header row of the raw batch resource, in write order.
///
/// `Lead Score` and `Reason to Contact` are enrichment columns: the
/// verification stage tolerates their absence on read, so older raw batches
/// without them still verify.
pub const RAW_HEADERS: [&str; 9] = [
    "Business Name",
    "Niche",
    "City",
    "Phone",
    "Email",
    "Lead Score",
    "Reason to Contact",
    "Source URL",
    "Scraped At",
];

/// Header row of the verified output resource, in write order.
pub const VERIFIED_HEADERS: [&str; 9] = [
    "Business Name",
    "Phone",
    "Email",
    "City",
    "Niche",
    "Lead Score",
    "Reason to Contact",
    "Source URL",
    "Scraped At",
];

/// Header row of the order queue resource, in write order.
pub const ORDER_HEADERS: [&str; 6] = [
    "Submitted At",
    "Niche",
    "Location",
    "Max Count",
    "Requested By",
    "Status",
];
