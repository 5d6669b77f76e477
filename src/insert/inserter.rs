//! The map source inserter
//!
//! A single forward pass over the input: lines are copied into the
//! document until the closing marker shows up, uid attributes are picked
//! up on the way, and scanning stops at the marker or the byte ceiling.

use std::io::Read;
use log::{debug, info, warn};

use crate::insert::document::Document;
use crate::insert::errors::{InsertError, InsertResult};
use crate::insert::patterns::{entry_uid, is_closing_marker};
use crate::insert::MAX_INPUT_BYTES;
use crate::io::LineReader;
use crate::source;

/// How the inserter picks the identifier the new uid builds on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UidPolicy {
    /// Use the uid of the last map source before the closing marker.
    /// Matches the largest uid when sources are listed in ascending order.
    #[default]
    LastSeen,
    /// Use the largest uid before the closing marker
    Maximum,
}

/// Inserts the Google Maps source into `onlinemapsources.xml` documents
///
/// Holds no state between calls; each call owns its buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inserter {
    max_input_bytes: u64,
    uid_policy: UidPolicy,
}

impl Default for Inserter {
    fn default() -> Self {
        Inserter {
            max_input_bytes: MAX_INPUT_BYTES,
            uid_policy: UidPolicy::default(),
        }
    }
}

impl Inserter {
    /// Create an inserter with the 1 MiB ceiling and last-seen uids
    pub fn new() -> Self {
        Self::default()
    }

    /// Change the number of bytes scanned before giving up on the input
    pub fn with_max_input_bytes(mut self, max_input_bytes: u64) -> Self {
        self.max_input_bytes = max_input_bytes;
        self
    }

    /// Change how the base identifier is chosen
    pub fn with_uid_policy(mut self, uid_policy: UidPolicy) -> Self {
        self.uid_policy = uid_policy;
        self
    }

    pub fn max_input_bytes(&self) -> u64 {
        self.max_input_bytes
    }

    pub fn uid_policy(&self) -> UidPolicy {
        self.uid_policy
    }

    /// Split the input around its closing marker
    ///
    /// # Arguments
    /// * `reader` - Source of the document bytes
    ///
    /// # Returns
    /// The scanned document, or an error if reading fails or a uid does
    /// not fit an identifier
    pub fn scan<R: Read>(&self, reader: R) -> InsertResult<Document> {
        let mut lines = LineReader::new(reader, self.max_input_bytes);
        let mut doc = Document::default();

        while let Some(line) = lines.next_line()? {
            if is_closing_marker(line) {
                doc.after.extend_from_slice(line);
                doc.after.push(b'\n');
                break;
            }

            doc.before.extend_from_slice(line);
            doc.before.push(b'\n');

            if let Some(digits) = entry_uid(line) {
                let uid = parse_uid(digits)?;
                debug!("Found map source uid {}", uid);
                doc.highest_id = match self.uid_policy {
                    UidPolicy::LastSeen => uid,
                    UidPolicy::Maximum => doc.highest_id.max(uid),
                };
                doc.entry_count += 1;
            }
        }

        if !doc.has_closing_marker() {
            doc.truncated = lines.limit_reached();
            if doc.truncated {
                warn!("Input exceeds {} bytes, scan stopped at the limit", self.max_input_bytes);
            }
            warn!("No </onlinemapsources> line found, appending map source at the end");
        }

        Ok(doc)
    }

    /// Insert the Google Maps source into a document
    ///
    /// # Arguments
    /// * `reader` - Source of the original `onlinemapsources.xml`
    ///
    /// # Returns
    /// The full output document
    pub fn insert<R: Read>(&self, reader: R) -> InsertResult<Vec<u8>> {
        let doc = self.scan(reader)?;
        let uid = doc.next_uid()?;
        let entry = source::google_maps()?.render(uid);

        info!("Inserting Google Maps source with uid {} after {} existing sources", uid, doc.entry_count());
        Ok(doc.assemble(entry.as_bytes()))
    }
}

/// Parse the digits captured from a uid attribute
fn parse_uid(digits: &[u8]) -> InsertResult<u64> {
    let text = String::from_utf8_lossy(digits);
    text.parse::<u64>()
        .map_err(|e| InsertError::MalformedIdentifier(format!("{} ({})", text, e)))
}
