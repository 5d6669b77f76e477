//! CLI command implementations
//!
//! Commands are built from parsed `clap` arguments and run through the
//! `Command` trait.

pub mod command_traits;
pub mod insert_command;

pub use command_traits::Command;
pub use insert_command::InsertCommand;
