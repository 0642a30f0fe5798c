/// Keeps only the ASCII digits of a phone number, in their original order.
pub fn clean_phone_number(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

/// Keeps only the ASCII letters and digits of an organization number.
pub fn clean_organization_number(org_no: &str) -> String {
    org_no.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// `.` and `..` are resolved away when appended to a URL path, so they cannot be used as a
/// single path segment.
pub fn is_dot_segment(term: &str) -> bool {
    matches!(term, "." | "..")
}
