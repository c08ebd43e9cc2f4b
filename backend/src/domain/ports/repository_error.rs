//! Error shared by the catalogue repository ports.

use crate::domain::{Error, FieldError};

use super::define_port_error;

define_port_error! {
    /// Failures raised by catalogue repository adapters.
    ///
    /// "No such row" is never an error: lookups return `Ok(None)`.
    pub enum RepositoryError {
        /// The store could not be reached.
        Connection { message: String } => "catalogue store connection failed: {message}",
        /// A query or mutation failed during execution.
        Query { message: String } => "catalogue store query failed: {message}",
        /// A write referenced a row that no longer exists.
        MissingReference { field: String } => "referenced {field} does not exist",
    }
}

impl From<RepositoryError> for Error {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::Connection { message } => {
                Error::service_unavailable(format!("catalogue store unavailable: {message}"))
            }
            RepositoryError::Query { message } => {
                Error::internal(format!("catalogue store error: {message}"))
            }
            RepositoryError::MissingReference { field } => {
                let message = format!("{field} is invalid");
                Error::validation(vec![FieldError::new(field, message)])
            }
        }
    }
}
