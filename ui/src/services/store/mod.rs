// Registration store access
//
// This module provides:
// - The `RegistrationStore` trait the submission workflow talks to
// - A Supabase (PostgREST) client used in the browser
// - An in-memory store for running the workflow without a network

pub mod errors;
pub mod memory_store;
pub mod supabase_client;
pub mod traits;

pub use errors::{StoreError, StoreResult};
pub use memory_store::MemoryStore;
pub use supabase_client::SupabaseClient;
pub use traits::{RegistrationStore, StoreHandle};
