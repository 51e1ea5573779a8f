use crate::registration::FieldValidation;
use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct FieldValidationFeedbackProps {
    pub validation: FieldValidation,
    pub valid_message: String,
    pub invalid_message: String,
}

#[component]
pub fn FieldValidationFeedback(props: FieldValidationFeedbackProps) -> Element {
    match props.validation {
        FieldValidation::Valid => rsx! {
            div {
                class: "validation-feedback valid",
                style: "color: #10b981; background-color: #d1fae5; border: 1px solid #10b981; padding: 8px; border-radius: 4px; margin-top: 4px;",
                "✓ {props.valid_message}"
            }
        },
        FieldValidation::Invalid => rsx! {
            div {
                class: "validation-feedback invalid",
                style: "color: #ef4444; background-color: #fef2f2; border: 1px solid #ef4444; padding: 8px; border-radius: 4px; margin-top: 4px;",
                "⚠ {props.invalid_message}"
            }
        },
        FieldValidation::None => rsx! { div {} },
    }
}
