//! Integration tests for the library entry points

use std::fs;
use std::path::PathBuf;

use quick_xml::events::Event;
use quick_xml::Reader;

use oruxgmaps::{insert, insert_file, InsertError, Inserter, UidPolicy};

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/onlinemapsources.xml")
}

/// Parse the document and return the uid of every map source, in order
fn source_uids(xml: &[u8]) -> Vec<String> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();
    let mut uids = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Eof) => break,
            Ok(Event::Start(e)) if e.name().as_ref() == b"onlinemapsource" => {
                let attr = e.try_get_attribute("uid").unwrap().expect("uid attribute");
                uids.push(String::from_utf8(attr.value.to_vec()).unwrap());
            }
            Ok(_) => {}
            Err(e) => panic!("Output is not well-formed at {}: {}", reader.buffer_position(), e),
        }
        buf.clear();
    }

    uids
}

#[test]
fn test_insert_file_fixture() {
    let output = insert_file(fixture(), &Inserter::new()).unwrap();

    assert_eq!(source_uids(&output), vec!["1", "2", "7", "8"]);

    let text = String::from_utf8(output).unwrap();
    assert!(text.ends_with("</onlinemapsource>\n</onlinemapsources>\n"));
    assert!(text.contains("<name>Google Maps</name>"));
}

#[test]
fn test_output_keeps_original_lines() {
    let original = fs::read_to_string(fixture()).unwrap();
    let output = String::from_utf8(insert_file(fixture(), &Inserter::new()).unwrap()).unwrap();

    let inserted = output.find("\n<onlinemapsource uid=\"8\">").unwrap();
    assert_eq!(&output[..inserted], &original[..original.find("</onlinemapsources>").unwrap()]);
}

#[test]
fn test_repeated_insertion_keeps_uids_unique() {
    let once = insert(fs::File::open(fixture()).unwrap()).unwrap();
    let twice = insert(once.as_slice()).unwrap();

    assert_eq!(source_uids(&twice), vec!["1", "2", "7", "8", "9"]);
}

#[test]
fn test_maximum_policy_on_unordered_sources() {
    let input = "<onlinemapsources>\n<onlinemapsource uid=\"20\"></onlinemapsource>\n<onlinemapsource uid=\"3\"></onlinemapsource>\n</onlinemapsources>\n";

    let last_seen = Inserter::new().insert(input.as_bytes()).unwrap();
    assert_eq!(source_uids(&last_seen), vec!["20", "3", "4"]);

    let maximum = Inserter::new()
        .with_uid_policy(UidPolicy::Maximum)
        .insert(input.as_bytes())
        .unwrap();
    assert_eq!(source_uids(&maximum), vec!["20", "3", "21"]);
}

#[test]
fn test_insert_file_not_found() {
    match insert_file("/nonexistent/onlinemapsources.xml", &Inserter::new()) {
        Err(InsertError::OpenFailure { path, source }) => {
            assert!(path.contains("nonexistent"));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("Expected OpenFailure, got {:?}", other.map(|v| v.len())),
    }
}
