use crate::error::MessagingError;

/// Colombian country calling code.
pub const COUNTRY_CODE: &str = "57";

/// Normalize a stored phone number into the gateway's destination format.
///
/// Whitespace and a leading `+` are removed, and the country code is
/// prefixed unless the number already starts with it.
///
/// ```
/// use bsl_messaging::phone::normalize;
///
/// assert_eq!(normalize("300 123 4567").unwrap(), "573001234567");
/// assert_eq!(normalize("+57 300 123 4567").unwrap(), "573001234567");
/// ```
pub fn normalize(raw: &str) -> Result<String, MessagingError> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let digits = compact.strip_prefix('+').unwrap_or(&compact);

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(MessagingError::InvalidPhone(raw.to_string()));
    }

    if digits.starts_with(COUNTRY_CODE) {
        Ok(digits.to_string())
    } else {
        Ok(format!("{COUNTRY_CODE}{digits}"))
    }
}
