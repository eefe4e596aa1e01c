use bsl_messaging::error::MessagingError;
use bsl_messaging::phone::normalize;

#[test]
fn local_numbers_get_country_code() {
    assert_eq!(normalize("3001234567").unwrap(), "573001234567");
}

#[test]
fn country_code_is_not_doubled() {
    assert_eq!(normalize("573001234567").unwrap(), "573001234567");
    assert_eq!(normalize("+573001234567").unwrap(), "573001234567");
}

#[test]
fn whitespace_is_stripped_everywhere() {
    assert_eq!(normalize(" 300\t123 45 67 ").unwrap(), "573001234567");
}

#[test]
fn garbage_is_rejected() {
    assert!(matches!(normalize(""), Err(MessagingError::InvalidPhone(_))));
    assert!(matches!(normalize("  + "), Err(MessagingError::InvalidPhone(_))));
    assert!(matches!(normalize("300-123-4567"), Err(MessagingError::InvalidPhone(_))));
}
