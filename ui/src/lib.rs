//! This crate contains the registration page for the VRB New Year Party.

pub mod app;
pub use app::RegistrationService;

pub mod components;
pub mod registration;
pub mod services;
pub mod utils;
