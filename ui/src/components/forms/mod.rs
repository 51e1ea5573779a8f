pub mod registration_form;

pub use registration_form::*;
