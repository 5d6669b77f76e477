//! Command pattern interface

use crate::insert::errors::InsertResult;

/// Represents an executable command in the application
pub trait Command {
    /// Execute the command
    ///
    /// # Returns
    /// Result indicating success or an error
    fn execute(&self) -> InsertResult<()>;
}
