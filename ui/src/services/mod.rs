//! Infrastructure Services
//!
//! - **store**: access to the hosted `registrations` table
//! - **config**: build-time store configuration
//! - **errors**: registration error taxonomy
//! - **browser_storage**: local storage of finished registrations
//!
//! Store calls are issued one at a time from the browser event loop, so the
//! async traits carry no Send/Sync bounds.

pub mod browser_storage;
pub mod config;
pub mod errors;
pub mod store;
