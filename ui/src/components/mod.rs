//! User Interface Components
//!
//! Dioxus components for the registration page:
//!
//! - **forms**: the registration form and its submit handling
//! - **display**: status line, payment step, confirmation and progress views
//! - **input**: text inputs, selects and checkboxes with validation feedback

pub mod display;
pub mod forms;
pub mod input;
