use thiserror::Error;

use crate::services::store::StoreError;

/// Everything that can stop a registration from being written.
///
/// `Display` is the text shown in the form's status line.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RegistrationError {
    #[error("{message}")]
    Validation { field: String, message: String },

    #[error("Email already exists.")]
    DuplicateEmail,

    #[error("Phone number already exists.")]
    DuplicatePhone,

    #[error("Please enter the number of members.")]
    MissingMembers,

    #[error("Please enter a transaction ID.")]
    MissingTransactionId,

    #[error("Error: {0}")]
    Store(#[from] StoreError),
}

impl RegistrationError {
    pub fn validation(field: &str, message: &str) -> Self {
        RegistrationError::Validation {
            field: field.to_string(),
            message: message.to_string(),
        }
    }

    /// True when the external store reported the failure
    pub fn is_remote(&self) -> bool {
        matches!(self, RegistrationError::Store(_))
    }
}
