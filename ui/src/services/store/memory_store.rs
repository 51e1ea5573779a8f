//! In-memory registration store
//!
//! Keeps rows in a `RefCell` and counts calls. Lets the submission workflow run
//! without a network. Failures can be injected for every call, for inserts
//! only, or for lookups on one column.

use async_trait::async_trait;
use std::cell::{Cell, RefCell};

use super::errors::{StoreError, StoreResult};
use super::traits::RegistrationStore;
use crate::registration::RegistrationRecord;

#[derive(Default)]
pub struct MemoryStore {
    rows: RefCell<Vec<RegistrationRecord>>,
    failure: RefCell<Option<StoreError>>,
    insert_failure: RefCell<Option<StoreError>>,
    select_failures: RefCell<Vec<(String, StoreError)>>,
    select_calls: Cell<usize>,
    insert_calls: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with existing rows
    pub fn with_rows(rows: Vec<RegistrationRecord>) -> Self {
        Self {
            rows: RefCell::new(rows),
            ..Self::default()
        }
    }

    /// Every subsequent call fails with `error`
    pub fn fail_with(&self, error: StoreError) {
        *self.failure.borrow_mut() = Some(error);
    }

    /// Lookups keep working; every insert fails with `error`
    pub fn fail_inserts_with(&self, error: StoreError) {
        *self.insert_failure.borrow_mut() = Some(error);
    }

    /// Lookups on `column` fail with `error`; other columns and inserts are unaffected
    pub fn fail_select_on(&self, column: &str, error: StoreError) {
        self.select_failures
            .borrow_mut()
            .push((column.to_string(), error));
    }

    pub fn rows(&self) -> Vec<RegistrationRecord> {
        self.rows.borrow().clone()
    }

    pub fn select_calls(&self) -> usize {
        self.select_calls.get()
    }

    pub fn insert_calls(&self) -> usize {
        self.insert_calls.get()
    }

    fn check_failure(&self) -> StoreResult<()> {
        match self.failure.borrow().as_ref() {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn check_select_failure(&self, column: &str) -> StoreResult<()> {
        self.check_failure()?;
        match self
            .select_failures
            .borrow()
            .iter()
            .find(|(failing, _)| failing == column)
        {
            Some((_, error)) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn check_insert_failure(&self) -> StoreResult<()> {
        self.check_failure()?;
        match self.insert_failure.borrow().as_ref() {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl RegistrationStore for MemoryStore {
    async fn select_matching(
        &self,
        column: &str,
        value: &str,
    ) -> StoreResult<Vec<serde_json::Value>> {
        self.select_calls.set(self.select_calls.get() + 1);
        self.check_select_failure(column)?;

        let mut matches = Vec::new();
        for row in self.rows.borrow().iter() {
            let json = serde_json::to_value(row)?;
            let hit = match json.get(column) {
                Some(serde_json::Value::String(s)) => s == value,
                Some(other) => other.to_string() == value,
                None => false,
            };
            if hit {
                matches.push(json);
            }
        }
        Ok(matches)
    }

    async fn insert(&self, record: &RegistrationRecord) -> StoreResult<()> {
        self.insert_calls.set(self.insert_calls.get() + 1);
        self.check_insert_failure()?;
        self.rows.borrow_mut().push(record.clone());
        Ok(())
    }

    fn store_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::Gender;

    fn row(email: &str, phone: &str) -> RegistrationRecord {
        RegistrationRecord {
            name: "Existing".to_string(),
            email: email.to_string(),
            phone_number: phone.to_string(),
            gender: Gender::Female,
            relationship: None,
            transaction_id: None,
            members: None,
            promotions: None,
        }
    }

    #[tokio::test]
    async fn test_select_matches_on_column() {
        let store = MemoryStore::with_rows(vec![
            row("a@x.com", "1111111111"),
            row("b@x.com", "2222222222"),
        ]);

        let hits = store.select_matching("email", "b@x.com").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0]["phone_number"], "2222222222");

        assert!(store.exists("phone_number", "1111111111").await.unwrap());
        assert!(!store.exists("phone_number", "3333333333").await.unwrap());
        assert!(!store.exists("unknown_column", "x").await.unwrap());
        assert_eq!(store.select_calls(), 4);
    }

    #[tokio::test]
    async fn test_injected_failure() {
        let store = MemoryStore::new();
        store.fail_with(StoreError::Network {
            message: "Failed to fetch".to_string(),
        });

        let err = store.insert(&row("a@x.com", "1")).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch");
        assert!(store.rows().is_empty());
        assert_eq!(store.insert_calls(), 1);
    }

    #[tokio::test]
    async fn test_targeted_failures() {
        let store = MemoryStore::with_rows(vec![row("a@x.com", "1111111111")]);
        store.fail_select_on(
            "phone_number",
            StoreError::Network {
                message: "timeout".to_string(),
            },
        );
        store.fail_inserts_with(StoreError::Rejected {
            status: 409,
            message: "conflict".to_string(),
        });

        assert!(store.exists("email", "a@x.com").await.unwrap());
        let err = store.exists("phone_number", "1111111111").await.unwrap_err();
        assert_eq!(err.to_string(), "timeout");

        let err = store.insert(&row("b@x.com", "2")).await.unwrap_err();
        assert_eq!(err.to_string(), "conflict");
        assert_eq!(store.rows().len(), 1);
        assert_eq!(store.select_calls(), 2);
        assert_eq!(store.insert_calls(), 1);
    }
}
