pub mod directory;
pub mod error;
pub mod source;

pub use directory::DirectorySource;
pub use error::SourceError;
pub use source::LeadSource;
