//! New Year Party registration
//!
//! The page collects a small draft, decides whether the attendee has to pay
//! (and therefore supply a transaction ID), optionally checks that the email
//! and phone number are not already registered, and writes one row to the
//! hosted `registrations` table.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ui::registration::{submit_registration, FormVariant};
//!
//! let capabilities = FormVariant::Group.capabilities();
//! submit_registration(store, &capabilities, draft, &dispatch).await;
//! ```

pub mod capabilities;
pub mod form_validation;
pub mod submission;
pub mod types;

pub use capabilities::*;
pub use form_validation::*;
pub use submission::submit_registration;
pub use types::*;
