//! The verification & deduplication stage.
//!
//! A pure function over its input: no I/O, no clock, no global state. The
//! same raw batch and configuration always produce byte-identical output,
//! which is what lets the driver treat the stage as atomic.

use std::collections::HashSet;

use leadmart_core::{RawLead, VerificationConfig, VerifiedLead};

use crate::gates;

/// Aggregate gate counts for one verification pass.
///
/// Individual rejects are silent (duplicates and invalid contacts are
/// expected at scale, not error conditions); these counts are the only
/// reporting surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifyStats {
    pub input: usize,
    pub after_dedup: usize,
    pub after_email: usize,
    pub after_phone: usize,
}

/// Result of one verification pass.
#[derive(Debug)]
pub struct VerifyOutcome {
    pub leads: Vec<VerifiedLead>,
    pub stats: VerifyStats,
}

/// Run every verification gate over a raw batch, cheapest first.
///
/// Gate order matters and is fixed:
///
/// 1. Deduplicate on (business name, city), keep-first: the earliest record
///    in input order wins, later duplicates are dropped.
/// 2. Email gate: full anchored match against the configured pattern
///    (skipped entirely when `require_email_validation` is off).
/// 3. Phone gate: ≥ `min_phone_digits` digits after stripping formatting.
///    The formatted original is what survives into the output.
/// 4. Projection onto the fixed output schema.
///
/// An empty input yields an empty output; a batch whose records are all
/// duplicates of one key yields one output row (assuming it passes the
/// contact gates). Neither is special-cased.
#[must_use]
pub fn verify(raw: Vec<RawLead>, config: &VerificationConfig) -> VerifyOutcome {
    let input = raw.len();

    let mut seen: HashSet<(String, String)> = HashSet::with_capacity(input);
    let deduped: Vec<RawLead> = raw
        .into_iter()
        .filter(|r| seen.insert((r.business_name.clone(), r.city.clone())))
        .collect();
    let after_dedup = deduped.len();

    let email_ok: Vec<RawLead> = if config.require_email_validation {
        deduped
            .into_iter()
            .filter(|r| gates::email_is_valid(&config.email_regex, &r.email))
            .collect()
    } else {
        deduped
    };
    let after_email = email_ok.len();

    let phone_ok: Vec<RawLead> = email_ok
        .into_iter()
        .filter(|r| gates::phone_is_valid(&r.phone, config.min_phone_digits))
        .collect();
    let after_phone = phone_ok.len();

    let leads = phone_ok.into_iter().map(project).collect();

    VerifyOutcome {
        leads,
        stats: VerifyStats {
            input,
            after_dedup,
            after_email,
            after_phone,
        },
    }
}

/// Project a surviving record onto the output schema. Working values (the
/// digit-only phone, gate outcomes) never leave this stage.
fn project(raw: RawLead) -> VerifiedLead {
    VerifiedLead {
        business_name: raw.business_name,
        phone: raw.phone,
        email: raw.email,
        city: raw.city,
        niche: raw.niche,
        lead_score: raw.lead_score,
        reason_to_contact: raw.reason_to_contact,
        source_url: raw.source_url,
        scraped_at: raw.scraped_at,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[path = "verify_test.rs"]
mod tests;
