use crate::registration::{is_valid_email, is_valid_phone, parse_members, FieldValidation, RegistrationState};

impl RegistrationState {
    pub fn validate_email(&self) -> FieldValidation {
        let email = self.draft.email.trim();
        if email.is_empty() {
            FieldValidation::None
        } else if is_valid_email(email) {
            FieldValidation::Valid
        } else {
            FieldValidation::Invalid
        }
    }

    pub fn validate_phone(&self) -> FieldValidation {
        let phone = self.draft.phone_number.trim();
        if phone.is_empty() {
            FieldValidation::None
        } else if is_valid_phone(phone) {
            FieldValidation::Valid
        } else {
            FieldValidation::Invalid
        }
    }

    pub fn validate_members(&self) -> FieldValidation {
        let members = self.draft.members.trim();
        if members.is_empty() {
            FieldValidation::None
        } else if parse_members(members).is_some() {
            FieldValidation::Valid
        } else {
            FieldValidation::Invalid
        }
    }
}

pub fn field_validation_class(validation: &FieldValidation) -> &'static str {
    match validation {
        FieldValidation::Valid => "input-field input-valid",
        FieldValidation::Invalid => "input-field input-invalid",
        FieldValidation::None => "input-field",
    }
}

pub fn field_validation_style(validation: &FieldValidation) -> &'static str {
    match validation {
        FieldValidation::Valid => "border: 2px solid #10b981; background-color: #f0fdf4;",
        FieldValidation::Invalid => "border: 2px solid #ef4444; background-color: #fef2f2;",
        FieldValidation::None => "",
    }
}
