use dioxus::prelude::*;

use crate::components::{
    display::{ConfirmationView, LoadingIndicator, PaymentStep, StatusLine},
    input::{
        CheckboxInput, Choice, ChoiceSelect, FieldValidationFeedback, InputType, ValidatedInput,
    },
};
use crate::registration::*;
use crate::services::store::StoreHandle;
use crate::utils::validation::{field_validation_class, field_validation_style};

#[cfg(feature = "web")]
use crate::services::browser_storage::LocalStorageManager;

// Import console macros
use crate::{console_info, console_warn};

const PHONE_PATTERN: &str = r"\d{10}";

#[derive(Props, PartialEq, Clone)]
pub struct RegistrationFormProps {
    pub capabilities: FormCapabilities,
    pub store: StoreHandle,
}

fn gender_choices() -> Vec<Choice> {
    Gender::all()
        .iter()
        .map(|g| Choice {
            value: g.as_str(),
            label: g.label(),
        })
        .collect()
}

fn relationship_choices() -> Vec<Choice> {
    Relationship::all()
        .iter()
        .map(|r| Choice {
            value: r.as_str(),
            label: r.label(),
        })
        .collect()
}

#[cfg(feature = "web")]
fn remember_completion(variant: FormVariant, record: &RegistrationRecord) {
    let completed = CompletedRegistration::new(variant, record);
    if let Err(e) = LocalStorageManager::store_completed(&completed) {
        console_warn!("[RegistrationForm] Could not remember registration: {:?}", e);
    }
}

#[cfg(not(feature = "web"))]
fn remember_completion(_variant: FormVariant, _record: &RegistrationRecord) {}

#[cfg(feature = "web")]
fn forget_completion(variant: FormVariant) {
    LocalStorageManager::clear_completed(variant);
}

#[cfg(not(feature = "web"))]
fn forget_completion(_variant: FormVariant) {}

#[component]
pub fn RegistrationForm(props: RegistrationFormProps) -> Element {
    let capabilities = props.capabilities.clone();
    let variant = capabilities.variant;
    let mut state = use_signal(move || RegistrationState::new(capabilities));
    let store = props.store;

    // Dispatch function for actions - using in-place reduction to preserve Dioxus Signal reactivity
    let dispatch = EventHandler::new(move |action: RegistrationAction| {
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    // A registration finished in an earlier visit keeps the confirmation view
    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(completed) = LocalStorageManager::get_completed(variant) {
            console_info!("[RegistrationForm] Restoring completed registration");
            dispatch.call(RegistrationAction::RestoreCompleted(completed));
        }
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if state.peek().is_submitting {
            return;
        }

        let current = state();
        let store = store.clone();
        spawn(async move {
            let dispatch_fn = move |action: RegistrationAction| dispatch.call(action);
            let result = submit_registration(
                store.store(),
                &current.capabilities,
                current.draft.clone(),
                &dispatch_fn,
            )
            .await;

            match result {
                Ok(record) => {
                    console_info!("[RegistrationForm] Registered {}", record.email);
                    if current.capabilities.completion == CompletionMode::Confirmation {
                        remember_completion(current.capabilities.variant, &record);
                    }
                }
                Err(e) => {
                    console_warn!("[RegistrationForm] Submission stopped: {}", e);
                }
            }
        });
    };

    let s = state();
    let caps = s.capabilities.clone();
    let busy = s.is_submitting;

    if s.is_complete {
        return rsx! {
            ConfirmationView {
                completed: s.completed.clone(),
                on_register_another: move |_| {
                    console_info!("[RegistrationForm] Starting a new registration");
                    forget_completion(variant);
                    dispatch.call(RegistrationAction::StartNewRegistration);
                }
            }
        };
    }

    rsx! {
        form {
            class: "registration-form",
            onsubmit: on_submit,

            div {
                class: "input-section",
                label { class: "input-label", r#for: "name", "Name" }
                ValidatedInput {
                    id: "name".to_string(),
                    value: s.draft.name.clone(),
                    input_type: InputType::Text,
                    disabled: busy,
                    on_change: move |value: String| {
                        dispatch.call(RegistrationAction::UpdateField(DraftField::Name(value)));
                    }
                }
            }

            div {
                class: "input-section",
                label { class: "input-label", r#for: "email", "Email" }
                ValidatedInput {
                    id: "email".to_string(),
                    value: s.draft.email.clone(),
                    placeholder: "your.email@example.com".to_string(),
                    input_type: InputType::Email,
                    input_class: field_validation_class(&s.validate_email()).to_string(),
                    input_style: field_validation_style(&s.validate_email()).to_string(),
                    disabled: busy,
                    on_change: move |value: String| {
                        dispatch.call(RegistrationAction::UpdateField(DraftField::Email(value)));
                    }
                }
                FieldValidationFeedback {
                    validation: s.validate_email(),
                    valid_message: "Valid email address".to_string(),
                    invalid_message: "Please enter a valid email address".to_string()
                }
            }

            div {
                class: "input-section",
                label { class: "input-label", r#for: "phoneNumber", "Phone Number" }
                ValidatedInput {
                    id: "phoneNumber".to_string(),
                    value: s.draft.phone_number.clone(),
                    input_type: InputType::Tel,
                    input_class: field_validation_class(&s.validate_phone()).to_string(),
                    input_style: field_validation_style(&s.validate_phone()).to_string(),
                    pattern: PHONE_PATTERN.to_string(),
                    title: "Phone number must be 10 digits.".to_string(),
                    disabled: busy,
                    on_change: move |value: String| {
                        dispatch.call(RegistrationAction::UpdateField(DraftField::PhoneNumber(value)));
                    }
                }
                FieldValidationFeedback {
                    validation: s.validate_phone(),
                    valid_message: "Valid phone number".to_string(),
                    invalid_message: "Phone number must be 10 digits".to_string()
                }
            }

            div {
                class: "input-section",
                label { class: "input-label", r#for: "gender", "Gender" }
                ChoiceSelect {
                    id: "gender".to_string(),
                    choices: gender_choices(),
                    selected: s.draft.gender.as_str().to_string(),
                    disabled: busy,
                    on_change: move |value: String| match value.parse::<Gender>() {
                        Ok(gender) => dispatch.call(RegistrationAction::UpdateField(DraftField::Gender(gender))),
                        Err(e) => console_warn!("[RegistrationForm] {}", e),
                    }
                }
            }

            if caps.collect_relationship {
                div {
                    class: "input-section",
                    label { class: "input-label", r#for: "relationship", "Relationship" }
                    ChoiceSelect {
                        id: "relationship".to_string(),
                        choices: relationship_choices(),
                        selected: s.draft.relationship.as_str().to_string(),
                        disabled: busy,
                        on_change: move |value: String| match value.parse::<Relationship>() {
                            Ok(relationship) => dispatch.call(RegistrationAction::UpdateField(DraftField::Relationship(relationship))),
                            Err(e) => console_warn!("[RegistrationForm] {}", e),
                        }
                    }
                }
            }

            if caps.collect_members {
                div {
                    class: "input-section",
                    label { class: "input-label", r#for: "members", "Number of Members" }
                    ValidatedInput {
                        id: "members".to_string(),
                        value: s.draft.members.clone(),
                        input_type: InputType::Number,
                        required: false,
                        input_class: field_validation_class(&s.validate_members()).to_string(),
                        input_style: field_validation_style(&s.validate_members()).to_string(),
                        disabled: busy,
                        on_change: move |value: String| {
                            dispatch.call(RegistrationAction::UpdateField(DraftField::Members(value)));
                        }
                    }
                }
            }

            if caps.collect_promotions {
                div {
                    class: "input-section",
                    CheckboxInput {
                        id: "promotions".to_string(),
                        label: "Send me news about upcoming events and promotions".to_string(),
                        checked: s.draft.promotions_opt_in,
                        disabled: busy,
                        on_change: move |checked: bool| {
                            dispatch.call(RegistrationAction::UpdateField(DraftField::PromotionsOptIn(checked)));
                        }
                    }
                }
            }

            if s.show_payment_step {
                PaymentStep {
                    transaction_id: s.draft.transaction_id.clone(),
                    disabled: busy,
                    on_change: move |value: String| {
                        dispatch.call(RegistrationAction::UpdateField(DraftField::TransactionId(value)));
                    }
                }
            }

            div {
                class: "button-section",
                button {
                    class: "submit-button",
                    r#type: "submit",
                    disabled: busy,
                    if busy { "Registering..." } else { "Submit" }
                }
            }

            LoadingIndicator { phase: s.phase }

            StatusLine { status: s.status.clone() }
        }
    }
}
