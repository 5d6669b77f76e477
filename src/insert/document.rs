//! Scanned form of an `onlinemapsources.xml` document

use crate::insert::errors::{InsertError, InsertResult};

/// A document split around its closing `</onlinemapsources>` line
///
/// `before` holds every scanned line ahead of the closing marker and
/// `after` holds the marker line itself. Both carry `\n` terminators.
/// When no marker was found, `after` is empty and the new source ends
/// up at the very end of the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub(crate) before: Vec<u8>,
    pub(crate) after: Vec<u8>,
    pub(crate) highest_id: u64,
    pub(crate) entry_count: usize,
    pub(crate) truncated: bool,
}

impl Document {
    /// Lines preceding the closing marker
    pub fn before(&self) -> &[u8] {
        &self.before
    }

    /// The closing marker line, empty if none was found
    pub fn after(&self) -> &[u8] {
        &self.after
    }

    /// Identifier the next uid is derived from
    pub fn highest_id(&self) -> u64 {
        self.highest_id
    }

    /// Number of map source opening lines seen
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    /// Whether the closing marker line was found
    pub fn has_closing_marker(&self) -> bool {
        !self.after.is_empty()
    }

    /// Whether the input ceiling cut the scan short
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// The uid given to the inserted source
    pub fn next_uid(&self) -> InsertResult<u64> {
        self.highest_id
            .checked_add(1)
            .ok_or_else(|| InsertError::MalformedIdentifier(format!("{} has no successor", self.highest_id)))
    }

    /// Join the document back together around a rendered entry
    pub fn assemble(self, entry: &[u8]) -> Vec<u8> {
        let mut output = self.before;
        output.reserve(entry.len() + self.after.len());
        output.extend_from_slice(entry);
        output.extend_from_slice(&self.after);
        output
    }
}
