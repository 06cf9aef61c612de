use leadmart_core::{RawLead, ScrapeTarget};

use crate::error::SourceError;

/// An acquisition backend: produces one batch of raw candidate leads for a
/// target.
///
/// Implementations have no side effects beyond the returned batch: the
/// pipeline driver owns persistence, so a real scraper can replace
/// [`crate::DirectorySource`] without touching the driver.
///
/// `offset` is the number of records already acquired earlier in the same
/// run. Implementations must fold it (or the target's niche/city) into each
/// record's identity so records from different targets never collide on the
/// dedup key by accident.
pub trait LeadSource {
    /// Acquire a batch of raw leads for `target`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::InvalidTarget`] if the target is not
    /// acquirable (blank niche/city, zero max count).
    fn acquire(&self, target: &ScrapeTarget, offset: usize) -> Result<Vec<RawLead>, SourceError>;
}
