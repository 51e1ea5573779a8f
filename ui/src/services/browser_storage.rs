use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};

use crate::registration::{CompletedRegistration, FormVariant};

const COMPLETED_KEY_PREFIX: &str = "new_year_party_registration";

fn completed_key(variant: FormVariant) -> String {
    format!("{}.{}", COMPLETED_KEY_PREFIX, variant.as_str())
}

/// Remembers a finished registration across page reloads, one entry per form variant
pub struct LocalStorageManager;

impl LocalStorageManager {
    pub fn store_completed(completed: &CompletedRegistration) -> Result<(), StorageError> {
        LocalStorage::set(completed_key(completed.variant), completed)
    }

    pub fn get_completed(variant: FormVariant) -> Option<CompletedRegistration> {
        LocalStorage::get::<CompletedRegistration>(completed_key(variant))
            .ok()
            .filter(|completed| completed.variant == variant)
    }

    pub fn clear_completed(variant: FormVariant) {
        LocalStorage::delete(completed_key(variant));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_key_is_scoped_to_variant() {
        assert_eq!(
            completed_key(FormVariant::Verified),
            "new_year_party_registration.verified"
        );
        assert_ne!(
            completed_key(FormVariant::Group),
            completed_key(FormVariant::Verified)
        );
    }
}
