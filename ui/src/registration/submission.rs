//! Registration submission workflow
//!
//! Runs one submit attempt: pre-flight checks, uniqueness lookups, the
//! conditional member/transaction checks and a single insert. Every state
//! change goes out through `dispatch`, so the same code drives the Dioxus
//! signal in the browser and a plain `RefCell` in tests.

use tracing::{info, instrument, warn};

use super::capabilities::FormCapabilities;
use super::form_validation::validate_draft;
use super::types::{RegistrationAction, RegistrationDraft, RegistrationRecord, StatusMessage, SubmissionPhase};
use crate::services::errors::RegistrationError;
use crate::services::store::RegistrationStore;

/// Holds the submitting flag for the duration of one attempt.
///
/// Setting happens on construction; clearing happens on drop, so every exit
/// path, early return or error, releases the form.
struct SubmittingGuard<'a> {
    dispatch: &'a dyn Fn(RegistrationAction),
}

impl<'a> SubmittingGuard<'a> {
    fn acquire(dispatch: &'a dyn Fn(RegistrationAction)) -> Self {
        dispatch(RegistrationAction::SetSubmitting(true));
        Self { dispatch }
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        (self.dispatch)(RegistrationAction::SetSubmitting(false));
    }
}

/// Submit `draft` to `store`.
///
/// On success exactly one row has been inserted and `RegistrationSucceeded`
/// has been dispatched. On any error no row has been inserted and the error
/// text has been dispatched as the status message.
#[instrument(skip_all, fields(store = store.store_name()))]
pub async fn submit_registration(
    store: &dyn RegistrationStore,
    capabilities: &FormCapabilities,
    draft: RegistrationDraft,
    dispatch: &dyn Fn(RegistrationAction),
) -> Result<RegistrationRecord, RegistrationError> {
    let _guard = SubmittingGuard::acquire(dispatch);
    dispatch(RegistrationAction::SetStatus(None));

    match run_submission(store, capabilities, &draft, dispatch).await {
        Ok(record) => {
            info!("Registration stored");
            dispatch(RegistrationAction::SetPhase(SubmissionPhase::Complete));
            dispatch(RegistrationAction::RegistrationSucceeded(record.clone()));
            Ok(record)
        }
        Err(err) => {
            if err.is_remote() {
                warn!("Registration failed at the store: {}", err);
            } else {
                info!("Registration rejected: {}", err);
            }
            dispatch(RegistrationAction::SetPhase(SubmissionPhase::Failed));
            dispatch(RegistrationAction::SetStatus(Some(StatusMessage::error(
                err.to_string(),
            ))));
            Err(err)
        }
    }
}

async fn run_submission(
    store: &dyn RegistrationStore,
    capabilities: &FormCapabilities,
    draft: &RegistrationDraft,
    dispatch: &dyn Fn(RegistrationAction),
) -> Result<RegistrationRecord, RegistrationError> {
    validate_draft(draft, capabilities)?;

    if capabilities.enforce_uniqueness {
        dispatch(RegistrationAction::SetPhase(SubmissionPhase::CheckingEmail));
        if store.exists("email", draft.email.trim()).await? {
            return Err(RegistrationError::DuplicateEmail);
        }

        dispatch(RegistrationAction::SetPhase(SubmissionPhase::CheckingPhone));
        if store.exists("phone_number", draft.phone_number.trim()).await? {
            return Err(RegistrationError::DuplicatePhone);
        }
    }

    dispatch(RegistrationAction::SetPhase(SubmissionPhase::Validating));
    if capabilities.collect_members && draft.members.trim().is_empty() {
        return Err(RegistrationError::MissingMembers);
    }

    let record = if capabilities.exemption.exempts(draft) {
        dispatch(RegistrationAction::SetShowPaymentStep(false));
        draft.to_record(capabilities, None)
    } else {
        dispatch(RegistrationAction::SetShowPaymentStep(true));
        let transaction_id = draft.transaction_id.trim();
        if transaction_id.is_empty() {
            return Err(RegistrationError::MissingTransactionId);
        }
        draft.to_record(capabilities, Some(transaction_id))
    };

    dispatch(RegistrationAction::SetPhase(SubmissionPhase::Inserting));
    store.insert(&record).await?;

    Ok(record)
}
