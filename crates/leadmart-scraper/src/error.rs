use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("invalid scrape target \"{niche}\" / \"{city}\": {reason}")]
    InvalidTarget {
        niche: String,
        city: String,
        reason: String,
    },
}
