//! Per-variant form capabilities
//!
//! The party page shipped in three flavours that differ only in which fields
//! they collect, whether contact details must be unique, who skips the payment
//! step, and what happens after a successful registration.

use serde::{Deserialize, Serialize};

use super::types::{Gender, RegistrationDraft, Relationship};

/// Decides which drafts skip the payment step
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PaymentExemption {
    /// Only single women attend for free
    FemaleAndSingle,
    /// All women attend for free
    Female,
}

impl PaymentExemption {
    pub fn exempts(&self, draft: &RegistrationDraft) -> bool {
        match self {
            PaymentExemption::FemaleAndSingle => {
                draft.gender == Gender::Female && draft.relationship == Relationship::Single
            }
            PaymentExemption::Female => draft.gender == Gender::Female,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CompletionMode {
    /// Clear the draft and keep the form editable
    ResetForm,
    /// Replace the form with a terminal confirmation view
    Confirmation,
}

#[derive(Clone, PartialEq, Debug)]
pub struct FormCapabilities {
    pub variant: FormVariant,
    pub collect_relationship: bool,
    pub collect_members: bool,
    pub collect_promotions: bool,
    pub enforce_uniqueness: bool,
    pub exemption: PaymentExemption,
    pub completion: CompletionMode,
}

impl Default for FormCapabilities {
    fn default() -> Self {
        FormVariant::default().capabilities()
    }
}

/// The three historical page variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormVariant {
    Basic,
    Verified,
    #[default]
    Group,
}

impl FormVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormVariant::Basic => "basic",
            FormVariant::Verified => "verified",
            FormVariant::Group => "group",
        }
    }

    pub fn capabilities(&self) -> FormCapabilities {
        match self {
            FormVariant::Basic => FormCapabilities {
                variant: *self,
                collect_relationship: true,
                collect_members: false,
                collect_promotions: false,
                enforce_uniqueness: false,
                exemption: PaymentExemption::FemaleAndSingle,
                completion: CompletionMode::ResetForm,
            },
            FormVariant::Verified => FormCapabilities {
                variant: *self,
                collect_relationship: false,
                collect_members: false,
                collect_promotions: false,
                enforce_uniqueness: true,
                exemption: PaymentExemption::Female,
                completion: CompletionMode::Confirmation,
            },
            FormVariant::Group => FormCapabilities {
                variant: *self,
                collect_relationship: false,
                collect_members: true,
                collect_promotions: true,
                enforce_uniqueness: true,
                exemption: PaymentExemption::Female,
                completion: CompletionMode::Confirmation,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(gender: Gender, relationship: Relationship) -> RegistrationDraft {
        RegistrationDraft {
            gender,
            relationship,
            ..Default::default()
        }
    }

    #[test]
    fn test_female_and_single_exemption() {
        let rule = PaymentExemption::FemaleAndSingle;
        assert!(rule.exempts(&draft(Gender::Female, Relationship::Single)));
        assert!(!rule.exempts(&draft(Gender::Female, Relationship::Couple)));
        assert!(!rule.exempts(&draft(Gender::Male, Relationship::Single)));
        assert!(!rule.exempts(&draft(Gender::Male, Relationship::Couple)));
    }

    #[test]
    fn test_female_exemption_ignores_relationship() {
        let rule = PaymentExemption::Female;
        assert!(rule.exempts(&draft(Gender::Female, Relationship::Single)));
        assert!(rule.exempts(&draft(Gender::Female, Relationship::Couple)));
        assert!(!rule.exempts(&draft(Gender::Male, Relationship::Single)));
    }

    #[test]
    fn test_variant_presets() {
        let basic = FormVariant::Basic.capabilities();
        assert!(basic.collect_relationship);
        assert!(!basic.enforce_uniqueness);
        assert_eq!(basic.completion, CompletionMode::ResetForm);

        let group = FormVariant::Group.capabilities();
        assert!(group.collect_members && group.collect_promotions);
        assert!(group.enforce_uniqueness);
        assert_eq!(group.exemption, PaymentExemption::Female);
        assert_eq!(FormCapabilities::default(), group);
        assert_eq!(group.variant, FormVariant::Group);
        assert_eq!(FormVariant::Verified.capabilities().variant, FormVariant::Verified);
    }
}
