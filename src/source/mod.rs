//! Map source definitions
//!
//! The inserted map source is described in `map_source.toml`, embedded in
//! the binary and parsed once on first use.

pub mod definition;

use lazy_static::lazy_static;
use crate::insert::errors::{InsertError, InsertResult};

pub use definition::SourceDefinition;

lazy_static! {
    // Parsed on first use; a broken definition is reported, not panicked on
    static ref GOOGLE_MAPS: Result<SourceDefinition, String> =
        SourceDefinition::from_str(include_str!("../../map_source.toml"), "google_maps");
}

/// The Google Maps source definition
pub fn google_maps() -> InsertResult<&'static SourceDefinition> {
    GOOGLE_MAPS
        .as_ref()
        .map_err(|e| InsertError::InvalidDefinition(e.clone()))
}
