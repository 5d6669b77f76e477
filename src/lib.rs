pub mod io;
pub mod insert;
pub mod source;
pub mod utils;
pub mod commands;
pub mod server;
pub mod api;

pub use crate::api::{insert, insert_file};

pub use insert::{Document, InsertError, InsertResult, Inserter, UidPolicy, MAX_INPUT_BYTES};
pub use source::SourceDefinition;
