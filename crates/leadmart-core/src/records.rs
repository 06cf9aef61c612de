//! Record types flowing through the pipeline.
//!
//! Field names carry `#[serde(rename = "...")]` attributes matching the
//! canonical column names in [`crate::schema`], so the csv codec maps them to
//! the tabular resources without a separate projection table.

use serde::{Deserialize, Serialize};

/// One candidate business contact as acquired from a source.
///
/// Every contact field is present (possibly as an empty string); downstream
/// stages access all of them by name. The enrichment fields are optional:
/// a raw batch written without those columns still deserializes, with the
/// fields as `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawLead {
    #[serde(rename = "Business Name")]
    pub business_name: String,

    #[serde(rename = "Niche")]
    pub niche: String,

    #[serde(rename = "City")]
    pub city: String,

    /// Free-form display phone, e.g. `"+1 555-123-4567"`. Digit-count
    /// validation works on a stripped copy; this original string is what
    /// reaches the output.
    #[serde(rename = "Phone")]
    pub phone: String,

    /// Free-form email. May be a sentinel like `"INVALID_EMAIL"` when the
    /// source found none; the email gate rejects those without a special
    /// case.
    #[serde(rename = "Email")]
    pub email: String,

    /// Enrichment: 0–100 quality score. Absent from un-enriched batches.
    #[serde(rename = "Lead Score", default)]
    pub lead_score: Option<u8>,

    /// Enrichment: short pitch tag, e.g. `"High Conversion Potential"`.
    #[serde(rename = "Reason to Contact", default)]
    pub reason_to_contact: Option<String>,

    #[serde(rename = "Source URL")]
    pub source_url: String,

    /// Acquisition instant, formatted per [`crate::schema::TIMESTAMP_FORMAT`].
    #[serde(rename = "Scraped At")]
    pub scraped_at: String,
}

/// A [`RawLead`] that survived every verification gate.
///
/// The (business name, city) pair is unique within one output set; the phone
/// is the original formatted string (the digit-only form was only checked,
/// never persisted). Superseded wholesale on the next pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifiedLead {
    #[serde(rename = "Business Name")]
    pub business_name: String,

    #[serde(rename = "Phone")]
    pub phone: String,

    #[serde(rename = "Email")]
    pub email: String,

    #[serde(rename = "City")]
    pub city: String,

    #[serde(rename = "Niche")]
    pub niche: String,

    #[serde(rename = "Lead Score", default)]
    pub lead_score: Option<u8>,

    #[serde(rename = "Reason to Contact", default)]
    pub reason_to_contact: Option<String>,

    #[serde(rename = "Source URL")]
    pub source_url: String,

    #[serde(rename = "Scraped At")]
    pub scraped_at: String,
}

/// Fulfillment status of a [`LeadOrder`].
///
/// Transitions only `PendingScrape` → `ScrapeComplete`, once, and only after
/// the order's acquisition batch has been durably written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "PENDING_SCRAPE")]
    PendingScrape,
    #[serde(rename = "SCRAPE_COMPLETE")]
    ScrapeComplete,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::PendingScrape => write!(f, "PENDING_SCRAPE"),
            OrderStatus::ScrapeComplete => write!(f, "SCRAPE_COMPLETE"),
        }
    }
}

/// A customer-submitted request to source leads for a niche/location pair.
///
/// Rows are append-only: orders are never deleted, the queue doubles as a
/// demand log. Two identical submissions are two independent orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadOrder {
    #[serde(rename = "Submitted At")]
    pub submitted_at: String,

    #[serde(rename = "Niche")]
    pub niche: String,

    #[serde(rename = "Location")]
    pub location: String,

    /// Upper bound on leads to acquire for this order.
    #[serde(rename = "Max Count")]
    pub max_count: u32,

    #[serde(rename = "Requested By")]
    pub requested_by: String,

    #[serde(rename = "Status")]
    pub status: OrderStatus,
}

/// Stable reference to an order row, captured when the queue is read.
///
/// The value is the 0-based record index at read time. External submitters
/// only ever append, so the index stays valid across the pipeline's
/// read-modify-write cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRef(pub usize);

impl std::fmt::Display for OrderRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One acquisition batch to run: derived from a pending order, or synthesized
/// for the configured maintenance niche/city pair.
///
/// Ephemeral, never persisted. `order_ref` is `None` for the maintenance
/// target, which signals "do not mark any order complete for this batch".
#[derive(Debug, Clone, PartialEq)]
pub struct ScrapeTarget {
    pub niche: String,
    pub city: String,
    pub max_count: u32,
    pub order_ref: Option<OrderRef>,
}
