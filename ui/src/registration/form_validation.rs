use super::capabilities::FormCapabilities;
use super::types::RegistrationDraft;
use crate::services::errors::RegistrationError;

pub const PHONE_DIGITS: usize = 10;

/// Basic email shape: exactly one @, non-empty local part, dotted domain
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return false;
    }

    let local_part = parts[0];
    let domain_part = parts[1];

    !local_part.is_empty()
        && !email.contains(char::is_whitespace)
        && domain_part.contains('.')
        && domain_part.len() > 2
        && !domain_part.starts_with('.')
        && !domain_part.ends_with('.')
}

/// Exactly ten ASCII digits
pub fn is_valid_phone(phone: &str) -> bool {
    let phone = phone.trim();
    phone.len() == PHONE_DIGITS && phone.chars().all(|c| c.is_ascii_digit())
}

/// Positive whole number of attendees
pub fn parse_members(members: &str) -> Option<u32> {
    members.trim().parse::<u32>().ok().filter(|n| *n > 0)
}

/// Checks the browser would enforce on the visible inputs, run before any store call.
///
/// A blank member count is left to the workflow, which checks it after the
/// uniqueness lookups.
pub fn validate_draft(
    draft: &RegistrationDraft,
    capabilities: &FormCapabilities,
) -> Result<(), RegistrationError> {
    if draft.name.trim().is_empty() {
        return Err(RegistrationError::validation(
            "name",
            "Please enter your name.",
        ));
    }

    if !is_valid_email(&draft.email) {
        return Err(RegistrationError::validation(
            "email",
            "Please enter a valid email address.",
        ));
    }

    if !is_valid_phone(&draft.phone_number) {
        return Err(RegistrationError::validation(
            "phone_number",
            "Phone number must be 10 digits.",
        ));
    }

    if capabilities.collect_members
        && !draft.members.trim().is_empty()
        && parse_members(&draft.members).is_none()
    {
        return Err(RegistrationError::validation(
            "members",
            "Number of members must be a positive whole number.",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::FormVariant;

    fn filled_draft() -> RegistrationDraft {
        RegistrationDraft {
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            phone_number: "1234567890".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("  first.last@example.co.in "));
        assert!(!is_valid_email("a@x"));
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email("a@@x.com"));
        assert!(!is_valid_email("a b@x.com"));
        assert!(!is_valid_email("a@.com"));
    }

    #[test]
    fn test_phone_requires_ten_digits() {
        assert!(is_valid_phone("1234567890"));
        assert!(!is_valid_phone("123456789"));
        assert!(!is_valid_phone("12345678901"));
        assert!(!is_valid_phone("12345-6789"));
        assert!(!is_valid_phone("١٢٣٤٥٦٧٨٩٠"));
    }

    #[test]
    fn test_parse_members() {
        assert_eq!(parse_members("2"), Some(2));
        assert_eq!(parse_members(" 12 "), Some(12));
        assert_eq!(parse_members("0"), None);
        assert_eq!(parse_members("-1"), None);
        assert_eq!(parse_members("two"), None);
    }

    #[test]
    fn test_validate_draft() {
        let group = FormVariant::Group.capabilities();
        assert!(validate_draft(&filled_draft(), &group).is_ok());

        let mut draft = filled_draft();
        draft.name = "   ".to_string();
        assert!(matches!(
            validate_draft(&draft, &group),
            Err(RegistrationError::Validation { ref field, .. }) if field == "name"
        ));

        let mut draft = filled_draft();
        draft.phone_number = "12345".to_string();
        assert_eq!(
            validate_draft(&draft, &group).unwrap_err().to_string(),
            "Phone number must be 10 digits."
        );
    }

    #[test]
    fn test_members_format_only_checked_when_collected() {
        let mut draft = filled_draft();
        draft.members = "zero".to_string();

        assert!(validate_draft(&draft, &FormVariant::Group.capabilities()).is_err());
        assert!(validate_draft(&draft, &FormVariant::Verified.capabilities()).is_ok());

        draft.members = String::new();
        assert!(validate_draft(&draft, &FormVariant::Group.capabilities()).is_ok());
    }
}
