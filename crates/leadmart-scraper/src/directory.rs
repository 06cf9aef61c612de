//! Synthetic business-directory source.
//!
//! Stands in for a real directory scraper during development. The batch it
//! produces is deterministic for a given (niche, city, offset), so
//! reprocessing an order regenerates an equivalent batch and keep-first
//! deduplication absorbs exact repeats.
//!
//! The batch is deliberately noisy in the ways a real directory crawl is:
//! a third of the records carry the `INVALID_EMAIL` sentinel a scraper emits
//! when a listing has no contact address, some phones are truncated, and
//! some records repeat an earlier record's (name, city) pair the way
//! overlapping result pages do. Every verification gate sees traffic on a
//! normal run.

use chrono::Utc;
use sha2::{Digest, Sha256};

use leadmart_core::{RawLead, ScrapeTarget, TIMESTAMP_FORMAT};

use crate::error::SourceError;
use crate::source::LeadSource;

const NAME_STEMS: [&str; 8] = [
    "BrightStar",
    "GreenLeaf",
    "Ace",
    "SwiftTech",
    "Bella",
    "Fresh Mart",
    "Summit",
    "Blue Harbor",
];

const NAME_SUFFIXES: [&str; 8] = [
    "Marketing",
    "Cafe",
    "Fitness",
    "Solutions",
    "Boutique",
    "Supply Co",
    "Studio",
    "Consulting",
];

const CONTACT_REASONS: [&str; 4] = [
    "New Business in Your Area",
    "No Website — Needs Online Presence",
    "High Conversion Potential",
    "New Startup Seeking Services",
];

/// Sentinel emitted when a listing exposes no contact address. Rejected by
/// the email gate like any other non-matching string.
const NO_EMAIL_SENTINEL: &str = "INVALID_EMAIL";

/// Deterministic synthetic directory source.
#[derive(Debug, Default)]
pub struct DirectorySource;

impl DirectorySource {
    #[must_use]
    pub fn new() -> Self {
        DirectorySource
    }
}

impl LeadSource for DirectorySource {
    fn acquire(&self, target: &ScrapeTarget, offset: usize) -> Result<Vec<RawLead>, SourceError> {
        validate_target(target)?;

        let seed = target_seed(&target.niche, &target.city);
        let count = yield_for(seed, target.max_count);
        tracing::debug!(
            niche = %target.niche,
            city = %target.city,
            count,
            offset,
            "acquiring directory listings"
        );

        let scraped_at = Utc::now().format(TIMESTAMP_FORMAT).to_string();
        let mut batch: Vec<RawLead> = Vec::with_capacity(count);

        for i in 0..count {
            let global = offset + i;
            let mut lead = synthesize_lead(target, seed, i, global, &scraped_at);
            // Overlapping-page noise: repeat the previous record's dedup key
            // with different contact fields.
            if i % 7 == 6 {
                if let Some(prev) = batch.last() {
                    lead.business_name = prev.business_name.clone();
                }
            }
            batch.push(lead);
        }

        Ok(batch)
    }
}

fn validate_target(target: &ScrapeTarget) -> Result<(), SourceError> {
    let invalid = |reason: &str| SourceError::InvalidTarget {
        niche: target.niche.clone(),
        city: target.city.clone(),
        reason: reason.to_string(),
    };
    if target.niche.trim().is_empty() {
        return Err(invalid("niche is blank"));
    }
    if target.city.trim().is_empty() {
        return Err(invalid("city is blank"));
    }
    if target.max_count == 0 {
        return Err(invalid("max count is zero"));
    }
    Ok(())
}

/// Stable 64-bit seed for a (niche, city) pair.
fn target_seed(niche: &str, city: &str) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(niche.as_bytes());
    hasher.update([0u8]);
    hasher.update(city.as_bytes());
    let digest = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}

/// Batch size for a target: within `[max_count / 2, max_count]`, chosen by
/// seed. Not every directory query yields the full requested count.
fn yield_for(seed: u64, max_count: u32) -> usize {
    let lower = (max_count / 2).max(1);
    let span = u64::from(max_count - lower + 1);
    (lower + u32::try_from(seed % span).unwrap_or(0)) as usize
}

fn synthesize_lead(
    target: &ScrapeTarget,
    seed: u64,
    i: usize,
    global: usize,
    scraped_at: &str,
) -> RawLead {
    let pick = (seed as usize).wrapping_add(i);
    let stem = NAME_STEMS[pick % NAME_STEMS.len()];
    let suffix = NAME_SUFFIXES[(pick / NAME_STEMS.len()) % NAME_SUFFIXES.len()];

    let slug: String = stem
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_lowercase();

    let email = if i % 3 == 2 {
        NO_EMAIL_SENTINEL.to_string()
    } else {
        format!("info{global}@{slug}.com")
    };

    let phone = if i % 5 == 4 {
        // Listing showed a partial number.
        (10 + global % 90).to_string()
    } else {
        format!("+1 555-{:03}-{:04}", (global / 10_000) % 1000, global % 10_000)
    };

    let score_roll = seed.wrapping_add(global as u64 * 7) % 41;
    let lead_score = 60 + u8::try_from(score_roll).unwrap_or(0);

    RawLead {
        business_name: format!("{stem} {suffix} {global}"),
        niche: target.niche.clone(),
        city: target.city.clone(),
        phone,
        email,
        lead_score: Some(lead_score),
        reason_to_contact: Some(CONTACT_REASONS[global % CONTACT_REASONS.len()].to_string()),
        source_url: format!("https://directory.example/listing/{global}"),
        scraped_at: scraped_at.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[path = "directory_test.rs"]
mod tests;
