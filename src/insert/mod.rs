//! Map source insertion
//!
//! This module scans an `onlinemapsources.xml` document line by line and
//! splices a new map source in front of the closing `</onlinemapsources>`
//! line, minting the next free uid along the way.

pub mod errors;
pub(crate) mod patterns;
pub mod document;
pub mod inserter;

pub use errors::{InsertError, InsertResult};
pub use document::Document;
pub use inserter::{Inserter, UidPolicy};

/// Maximum number of input bytes scanned per document (1 MiB)
pub const MAX_INPUT_BYTES: u64 = 1 << 20;
