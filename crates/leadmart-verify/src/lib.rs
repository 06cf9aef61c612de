pub mod gates;
pub mod verify;

pub use verify::{verify, VerifyOutcome, VerifyStats};
