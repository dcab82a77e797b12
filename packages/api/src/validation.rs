//! Client-side input checks. A UX gate only; the backend re-validates.

use crate::error::ValidationError;

const EMAIL_DOMAIN: &str = "@gmail.com";
const OTP_LEN: usize = 6;
const MIN_PASSWORD_LEN: usize = 8;

/// `true` when the address ends in `@gmail.com` (case-insensitive, trimmed)
/// and has something before the `@`.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim().to_lowercase();
    email.len() > EMAIL_DOMAIN.len() && email.ends_with(EMAIL_DOMAIN)
}

/// At least 8 characters with one lower-case letter, one upper-case letter,
/// one digit and one character that is neither a letter nor a digit.
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| !c.is_ascii_alphanumeric())
}

/// Input filter for the OTP field: digits only, at most six.
pub fn sanitize_otp(input: &str) -> String {
    input
        .chars()
        .filter(char::is_ascii_digit)
        .take(OTP_LEN)
        .collect()
}

pub fn is_valid_otp(otp: &str) -> bool {
    otp.len() == OTP_LEN && otp.chars().all(|c| c.is_ascii_digit())
}

/// Accept a decimal comma (`65,5`) the way numeric keyboards produce it.
pub fn normalize_decimal(input: &str) -> String {
    input.trim().replace(',', ".")
}

pub fn parse_number(field: &'static str, input: &str) -> Result<f64, ValidationError> {
    normalize_decimal(input)
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(ValidationError::InvalidNumber { field })
}

pub fn parse_positive(field: &'static str, input: &str) -> Result<f64, ValidationError> {
    match normalize_decimal(input).parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(ValidationError::NotPositive { field }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_domain_gate() {
        assert!(is_valid_email("budi@gmail.com"));
        assert!(is_valid_email("  Budi.Santoso@GMAIL.com "));
        assert!(!is_valid_email("budi@yahoo.com"));
        assert!(!is_valid_email("budi@gmail.co"));
        assert!(!is_valid_email("@gmail.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_password_rules() {
        assert!(is_valid_password("Secret1!"));
        assert!(is_valid_password("a longer Pass 9"));

        // each rule missing in turn
        assert!(!is_valid_password("Sec1!"));
        assert!(!is_valid_password("SECRET12!"));
        assert!(!is_valid_password("secret12!"));
        assert!(!is_valid_password("Secretxx!"));
        assert!(!is_valid_password("Secret123"));
    }

    #[test]
    fn test_otp_filter_and_check() {
        assert_eq!(sanitize_otp("12 34-56"), "123456");
        assert_eq!(sanitize_otp("1234567890"), "123456");
        assert_eq!(sanitize_otp("abc"), "");

        assert!(is_valid_otp("004211"));
        assert!(!is_valid_otp("12345"));
        assert!(!is_valid_otp("12345a"));
    }

    #[test]
    fn test_numbers() {
        assert_eq!(normalize_decimal(" 65,5 "), "65.5");
        assert_eq!(parse_number("Glucose", "148"), Ok(148.0));
        assert_eq!(
            parse_number("Glucose", "high"),
            Err(ValidationError::InvalidNumber { field: "Glucose" })
        );
        assert_eq!(parse_positive("Weight", "65,5"), Ok(65.5));
        assert_eq!(
            parse_positive("Height", "0"),
            Err(ValidationError::NotPositive { field: "Height" })
        );
        assert_eq!(
            parse_positive("Height", "-170"),
            Err(ValidationError::NotPositive { field: "Height" })
        );
    }
}
