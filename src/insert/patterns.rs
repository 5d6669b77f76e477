//! Line patterns recognised by the inserter
//!
//! Both patterns work on single lines; the document is never parsed as XML.

use lazy_static::lazy_static;
use regex::bytes::Regex;

lazy_static! {
    // Closing tag of the source list, only at the very start of a line
    static ref CLOSING_MARKER: Regex = Regex::new(r"^</onlinemapsources>")
        .expect("closing marker pattern is valid");

    // Opening tag of one map source; the uid is the first capture
    static ref ENTRY_OPENING: Regex = Regex::new(r#"\s*<onlinemapsource uid="([0-9]+)">"#)
        .expect("entry pattern is valid");
}

/// Check whether a line starts with `</onlinemapsources>`
pub fn is_closing_marker(line: &[u8]) -> bool {
    CLOSING_MARKER.is_match(line)
}

/// Extract the raw uid digits from a map source opening line
pub fn entry_uid(line: &[u8]) -> Option<&[u8]> {
    ENTRY_OPENING
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_bytes())
}
