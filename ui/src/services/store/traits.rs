//! Store abstraction used by the submission workflow

use async_trait::async_trait;
use std::rc::Rc;

use super::errors::StoreResult;
use crate::registration::RegistrationRecord;

/// Read/insert access to the `registrations` table
#[async_trait(?Send)]
pub trait RegistrationStore {
    /// Rows whose `column` equals `value`
    async fn select_matching(&self, column: &str, value: &str)
        -> StoreResult<Vec<serde_json::Value>>;

    /// Persist exactly one row
    async fn insert(&self, record: &RegistrationRecord) -> StoreResult<()>;

    /// Whether any row has `column` equal to `value`
    async fn exists(&self, column: &str, value: &str) -> StoreResult<bool> {
        Ok(!self.select_matching(column, value).await?.is_empty())
    }

    /// Get the name of the store backend
    fn store_name(&self) -> &'static str;
}

/// Shared handle passed through component props.
///
/// Two handles are equal when they point at the same store.
#[derive(Clone)]
pub struct StoreHandle(pub Rc<dyn RegistrationStore>);

impl StoreHandle {
    pub fn new(store: impl RegistrationStore + 'static) -> Self {
        Self(Rc::new(store))
    }

    pub fn store(&self) -> &dyn RegistrationStore {
        self.0.as_ref()
    }
}

impl PartialEq for StoreHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for StoreHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("StoreHandle")
            .field(&self.0.store_name())
            .finish()
    }
}
