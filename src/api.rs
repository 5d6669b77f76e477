use std::fs::File;
use std::io::Read;
use std::path::Path;
use log::debug;

use crate::insert::{Inserter, InsertError, InsertResult};

/// Insert the Google Maps source into a document read from `reader`
///
/// Uses the default inserter: 1 MiB ceiling, last-seen uids.
pub fn insert<R: Read>(reader: R) -> InsertResult<Vec<u8>> {
    Inserter::new().insert(reader)
}

/// Insert the Google Maps source into the `onlinemapsources.xml` at `path`
///
/// # Arguments
/// * `path` - Path to the original document
/// * `inserter` - Inserter configuration to apply
///
/// # Returns
/// The transformed document, or an error if the file cannot be opened or read
pub fn insert_file<P: AsRef<Path>>(path: P, inserter: &Inserter) -> InsertResult<Vec<u8>> {
    let path = path.as_ref();
    debug!("Reading map sources from {}", path.display());

    let file = File::open(path).map_err(|source| InsertError::OpenFailure {
        path: path.display().to_string(),
        source,
    })?;

    inserter.insert(file)
}
