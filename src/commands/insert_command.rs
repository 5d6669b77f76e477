//! Map source insertion command
//!
//! Reads the `onlinemapsources.xml` named on the command line and writes
//! the document with the Google Maps source added to stdout.

use std::io::{self, Write};
use clap::ArgMatches;

use crate::api::insert_file;
use crate::commands::command_traits::Command;
use crate::insert::errors::{InsertError, InsertResult};
use crate::insert::{Inserter, UidPolicy};

/// Command for inserting the Google Maps source into a file
pub struct InsertCommand {
    /// Path to the input file
    input_file: String,
    /// Inserter configuration
    inserter: Inserter,
}

impl InsertCommand {
    /// Create a new insert command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    ///
    /// # Returns
    /// A new InsertCommand instance or an error
    pub fn new(args: &ArgMatches) -> InsertResult<Self> {
        let input_file = args
            .get_one::<String>("input")
            .ok_or_else(|| InsertError::InvalidArgument("Missing input file".to_string()))?
            .clone();

        let uid_policy = if args.get_flag("max-uid") {
            UidPolicy::Maximum
        } else {
            UidPolicy::LastSeen
        };

        Ok(InsertCommand {
            input_file,
            inserter: Inserter::new().with_uid_policy(uid_policy),
        })
    }

    /// Run the insertion and write the result to `out`
    ///
    /// The document is followed by one extra newline.
    pub fn write_to<W: Write>(&self, out: &mut W) -> InsertResult<()> {
        let output = insert_file(&self.input_file, &self.inserter)?;
        out.write_all(&output)?;
        out.write_all(b"\n")?;
        out.flush()?;
        Ok(())
    }
}

impl Command for InsertCommand {
    fn execute(&self) -> InsertResult<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_to(&mut handle)
    }
}
