// Core types for the registration form - no dioxus imports needed here
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::capabilities::{CompletionMode, FormCapabilities, FormVariant};

pub const SUCCESS_MESSAGE: &str = "Registration successful!";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    pub fn all() -> [Gender; 2] {
        [Gender::Male, Gender::Female]
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            other => Err(format!("Unknown gender: {}", other)),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    #[default]
    Single,
    Couple,
}

impl Relationship {
    pub fn as_str(&self) -> &'static str {
        match self {
            Relationship::Single => "single",
            Relationship::Couple => "couple",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Relationship::Single => "Single",
            Relationship::Couple => "Couple",
        }
    }

    pub fn all() -> [Relationship; 2] {
        [Relationship::Single, Relationship::Couple]
    }
}

impl FromStr for Relationship {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "single" => Ok(Relationship::Single),
            "couple" => Ok(Relationship::Couple),
            other => Err(format!("Unknown relationship: {}", other)),
        }
    }
}

/// Form contents while the user is typing
#[derive(Clone, PartialEq, Debug)]
pub struct RegistrationDraft {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub gender: Gender,
    pub relationship: Relationship,
    pub members: String,
    pub promotions_opt_in: bool,
    pub transaction_id: String,
}

impl Default for RegistrationDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone_number: String::new(),
            gender: Gender::Male,
            relationship: Relationship::Single,
            members: String::new(),
            promotions_opt_in: true,
            transaction_id: String::new(),
        }
    }
}

/// A single field change coming from an input widget
#[derive(Clone, PartialEq, Debug)]
pub enum DraftField {
    Name(String),
    Email(String),
    PhoneNumber(String),
    Gender(Gender),
    Relationship(Relationship),
    Members(String),
    PromotionsOptIn(bool),
    TransactionId(String),
}

impl RegistrationDraft {
    pub fn update_field(&mut self, field: DraftField) {
        match field {
            DraftField::Name(name) => self.name = name,
            DraftField::Email(email) => self.email = email,
            DraftField::PhoneNumber(phone) => self.phone_number = phone,
            DraftField::Gender(gender) => self.gender = gender,
            DraftField::Relationship(relationship) => self.relationship = relationship,
            DraftField::Members(members) => self.members = members,
            DraftField::PromotionsOptIn(opt_in) => self.promotions_opt_in = opt_in,
            DraftField::TransactionId(id) => self.transaction_id = id,
        }
    }

    /// Build the row to persist. `transaction_id` is only attached on the payment branch.
    pub fn to_record(
        &self,
        capabilities: &FormCapabilities,
        transaction_id: Option<&str>,
    ) -> RegistrationRecord {
        RegistrationRecord {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone_number: self.phone_number.trim().to_string(),
            gender: self.gender,
            relationship: capabilities
                .collect_relationship
                .then_some(self.relationship),
            transaction_id: transaction_id.map(|id| id.trim().to_string()),
            members: if capabilities.collect_members {
                self.members.trim().parse().ok()
            } else {
                None
            },
            promotions: capabilities
                .collect_promotions
                .then_some(self.promotions_opt_in),
        }
    }
}

/// Row written to the `registrations` table
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RegistrationRecord {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub gender: Gender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship: Option<Relationship>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotions: Option<bool>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StatusKind {
    Idle,
    Error,
    Success,
}

#[derive(Clone, PartialEq, Debug)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }
}

/// Where a submission currently is
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    CheckingEmail,
    CheckingPhone,
    Validating,
    Inserting,
    Complete,
    Failed,
}

impl SubmissionPhase {
    /// Progress text while a submission is in flight
    pub fn progress_label(&self) -> Option<&'static str> {
        match self {
            SubmissionPhase::CheckingEmail => Some("Checking email..."),
            SubmissionPhase::CheckingPhone => Some("Checking phone number..."),
            SubmissionPhase::Validating => Some("Checking details..."),
            SubmissionPhase::Inserting => Some("Saving registration..."),
            SubmissionPhase::Idle | SubmissionPhase::Complete | SubmissionPhase::Failed => None,
        }
    }
}

// Validation status for live input feedback
#[derive(Clone, PartialEq, Debug)]
pub enum FieldValidation {
    None,
    Valid,
    Invalid,
}

// Action enum for state mutations
#[derive(Clone, Debug)]
pub enum RegistrationAction {
    UpdateField(DraftField),
    SetSubmitting(bool),
    SetStatus(Option<StatusMessage>),
    SetShowPaymentStep(bool),
    SetPhase(SubmissionPhase),
    RegistrationSucceeded(RegistrationRecord),
    RestoreCompleted(CompletedRegistration),
    /// Leave the confirmation view and start over with an empty draft
    StartNewRegistration,
}

/// Summary of a finished registration, kept for the confirmation view.
/// Only restored into a form of the same variant.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CompletedRegistration {
    pub variant: FormVariant,
    pub name: String,
    pub email: String,
}

impl CompletedRegistration {
    pub fn new(variant: FormVariant, record: &RegistrationRecord) -> Self {
        Self {
            variant,
            name: record.name.clone(),
            email: record.email.clone(),
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct RegistrationState {
    pub capabilities: FormCapabilities,
    pub draft: RegistrationDraft,
    pub is_submitting: bool,
    pub status: Option<StatusMessage>,
    pub show_payment_step: bool,
    pub is_complete: bool,
    pub phase: SubmissionPhase,
    pub completed: Option<CompletedRegistration>,
}

impl RegistrationState {
    pub fn new(capabilities: FormCapabilities) -> Self {
        Self {
            capabilities,
            draft: RegistrationDraft::default(),
            is_submitting: false,
            status: None,
            show_payment_step: false,
            is_complete: false,
            phase: SubmissionPhase::Idle,
            completed: None,
        }
    }

    /// Whether the current draft has to go through the payment step
    pub fn requires_payment(&self) -> bool {
        !self.capabilities.exemption.exempts(&self.draft)
    }

    pub fn status_kind(&self) -> StatusKind {
        self.status
            .as_ref()
            .map(|status| status.kind)
            .unwrap_or(StatusKind::Idle)
    }

    pub fn reduce_in_place(&mut self, action: RegistrationAction) {
        match action {
            RegistrationAction::UpdateField(field) => {
                self.draft.update_field(field);
                if !self.requires_payment() {
                    self.show_payment_step = false;
                }
            }
            RegistrationAction::SetSubmitting(submitting) => {
                self.is_submitting = submitting;
                if !submitting && self.phase != SubmissionPhase::Complete {
                    self.phase = SubmissionPhase::Idle;
                }
            }
            RegistrationAction::SetStatus(status) => {
                self.status = status;
            }
            RegistrationAction::SetShowPaymentStep(show) => {
                self.show_payment_step = show;
            }
            RegistrationAction::SetPhase(phase) => {
                self.phase = phase;
            }
            RegistrationAction::RegistrationSucceeded(record) => {
                self.show_payment_step = false;
                match self.capabilities.completion {
                    CompletionMode::ResetForm => {
                        self.draft = RegistrationDraft::default();
                        self.status = Some(StatusMessage::success(SUCCESS_MESSAGE));
                        self.phase = SubmissionPhase::Idle;
                    }
                    CompletionMode::Confirmation => {
                        self.completed =
                            Some(CompletedRegistration::new(self.capabilities.variant, &record));
                        self.is_complete = true;
                        self.status = None;
                        self.phase = SubmissionPhase::Complete;
                    }
                }
            }
            RegistrationAction::RestoreCompleted(completed) => {
                if self.capabilities.completion == CompletionMode::Confirmation
                    && completed.variant == self.capabilities.variant
                {
                    self.completed = Some(completed);
                    self.is_complete = true;
                    self.phase = SubmissionPhase::Complete;
                }
            }
            RegistrationAction::StartNewRegistration => {
                *self = RegistrationState::new(self.capabilities.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::FormVariant;

    fn record() -> RegistrationRecord {
        RegistrationRecord {
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            phone_number: "1234567890".to_string(),
            gender: Gender::Male,
            relationship: None,
            transaction_id: Some("TXN1".to_string()),
            members: Some(2),
            promotions: Some(true),
        }
    }

    #[test]
    fn test_default_draft() {
        let draft = RegistrationDraft::default();
        assert_eq!(draft.gender, Gender::Male);
        assert_eq!(draft.relationship, Relationship::Single);
        assert!(draft.promotions_opt_in);
        assert!(draft.name.is_empty());
        assert!(draft.transaction_id.is_empty());
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!("female".parse::<Gender>(), Ok(Gender::Female));
        assert_eq!("couple".parse::<Relationship>(), Ok(Relationship::Couple));
        assert!("other".parse::<Gender>().is_err());
    }

    #[test]
    fn test_record_omits_uncollected_columns() {
        let mut draft = RegistrationDraft::default();
        draft.name = "  A ".to_string();
        draft.members = "3".to_string();

        let basic = draft.to_record(&FormVariant::Basic.capabilities(), None);
        let json = serde_json::to_value(&basic).unwrap();
        assert_eq!(json["name"], "A");
        assert_eq!(json["gender"], "male");
        assert_eq!(json["relationship"], "single");
        assert!(json.get("members").is_none());
        assert!(json.get("promotions").is_none());
        assert!(json.get("transaction_id").is_none());

        let group = draft.to_record(&FormVariant::Group.capabilities(), Some(" TXN9 "));
        let json = serde_json::to_value(&group).unwrap();
        assert_eq!(json["members"], 3);
        assert_eq!(json["promotions"], true);
        assert_eq!(json["transaction_id"], "TXN9");
        assert!(json.get("relationship").is_none());
    }

    #[test]
    fn test_exempt_field_change_hides_payment_step() {
        let mut state = RegistrationState::new(FormVariant::Verified.capabilities());
        state.reduce_in_place(RegistrationAction::SetShowPaymentStep(true));

        state.reduce_in_place(RegistrationAction::UpdateField(DraftField::Name(
            "B".to_string(),
        )));
        assert!(state.show_payment_step);

        state.reduce_in_place(RegistrationAction::UpdateField(DraftField::Gender(
            Gender::Female,
        )));
        assert!(!state.show_payment_step);
        assert!(!state.requires_payment());
    }

    #[test]
    fn test_success_resets_draft_in_reset_mode() {
        let mut state = RegistrationState::new(FormVariant::Basic.capabilities());
        state.reduce_in_place(RegistrationAction::UpdateField(DraftField::Name(
            "A".to_string(),
        )));
        state.reduce_in_place(RegistrationAction::UpdateField(DraftField::Relationship(
            Relationship::Couple,
        )));
        state.reduce_in_place(RegistrationAction::SetShowPaymentStep(true));

        state.reduce_in_place(RegistrationAction::RegistrationSucceeded(record()));

        assert_eq!(state.draft, RegistrationDraft::default());
        assert!(!state.show_payment_step);
        assert!(!state.is_complete);
        assert_eq!(state.status_kind(), StatusKind::Success);
        assert_eq!(state.phase, SubmissionPhase::Idle);
    }

    #[test]
    fn test_success_is_terminal_in_confirmation_mode() {
        let mut state = RegistrationState::new(FormVariant::Group.capabilities());
        state.reduce_in_place(RegistrationAction::RegistrationSucceeded(record()));
        state.reduce_in_place(RegistrationAction::SetSubmitting(false));

        assert!(state.is_complete);
        assert_eq!(state.phase, SubmissionPhase::Complete);
        assert_eq!(state.status_kind(), StatusKind::Idle);
        assert_eq!(
            state.completed,
            Some(CompletedRegistration {
                variant: FormVariant::Group,
                name: "A".to_string(),
                email: "a@x.com".to_string()
            })
        );
    }

    #[test]
    fn test_releasing_submit_flag_returns_failed_to_idle() {
        let mut state = RegistrationState::new(FormVariant::Verified.capabilities());
        state.reduce_in_place(RegistrationAction::SetSubmitting(true));
        state.reduce_in_place(RegistrationAction::SetPhase(SubmissionPhase::Failed));
        state.reduce_in_place(RegistrationAction::SetSubmitting(false));

        assert!(!state.is_submitting);
        assert_eq!(state.phase, SubmissionPhase::Idle);
    }

    #[test]
    fn test_restore_completed_ignored_in_reset_mode() {
        let completed = CompletedRegistration {
            variant: FormVariant::Basic,
            name: "A".to_string(),
            email: "a@x.com".to_string(),
        };

        let mut basic = RegistrationState::new(FormVariant::Basic.capabilities());
        basic.reduce_in_place(RegistrationAction::RestoreCompleted(completed));
        assert!(!basic.is_complete);
    }

    #[test]
    fn test_restore_completed_requires_matching_variant() {
        let from_verified = CompletedRegistration {
            variant: FormVariant::Verified,
            name: "V".to_string(),
            email: "v@x.com".to_string(),
        };

        let mut group = RegistrationState::new(FormVariant::Group.capabilities());
        group.reduce_in_place(RegistrationAction::RestoreCompleted(from_verified.clone()));
        assert!(!group.is_complete);
        assert!(group.completed.is_none());
        assert_eq!(group.phase, SubmissionPhase::Idle);

        let mut verified = RegistrationState::new(FormVariant::Verified.capabilities());
        verified.reduce_in_place(RegistrationAction::RestoreCompleted(from_verified.clone()));
        assert!(verified.is_complete);
        assert_eq!(verified.completed, Some(from_verified));
    }

    #[test]
    fn test_completed_registration_remembers_variant() {
        let completed = CompletedRegistration::new(FormVariant::Verified, &record());
        let json = serde_json::to_value(&completed).unwrap();
        assert_eq!(json["variant"], "verified");
        assert_eq!(json["email"], "a@x.com");

        // entries saved without a variant are not restored anywhere
        let legacy = serde_json::json!({ "name": "A", "email": "a@x.com" });
        assert!(serde_json::from_value::<CompletedRegistration>(legacy).is_err());
    }

    #[test]
    fn test_start_new_registration_leaves_confirmation() {
        let mut state = RegistrationState::new(FormVariant::Group.capabilities());
        state.reduce_in_place(RegistrationAction::UpdateField(DraftField::Name(
            "A".to_string(),
        )));
        state.reduce_in_place(RegistrationAction::RegistrationSucceeded(record()));
        assert!(state.is_complete);

        state.reduce_in_place(RegistrationAction::StartNewRegistration);

        assert!(!state.is_complete);
        assert!(state.completed.is_none());
        assert_eq!(state.phase, SubmissionPhase::Idle);
        assert_eq!(state.draft, RegistrationDraft::default());
        assert_eq!(state.capabilities, FormVariant::Group.capabilities());
    }
}
