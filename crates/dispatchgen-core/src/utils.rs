/// Upper-case the first character, leaving the rest untouched.
///
/// Used to turn a mapping file name into the tail of a generated class name.
///
/// # Examples
/// ```
/// use dispatchgen_core::utils::capitalize_first;
/// assert_eq!(capitalize_first("zeek"), "Zeek");
/// assert_eq!(capitalize_first("fragmented_100"), "Fragmented_100");
/// assert_eq!(capitalize_first(""), "");
/// ```
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Check whether `s` is a bare C-family identifier (`[A-Za-z_][A-Za-z0-9_]*`).
///
/// # Examples
/// ```
/// use dispatchgen_core::utils::is_identifier;
/// assert!(is_identifier("TCPAnalyzer"));
/// assert!(!is_identifier("9lives"));
/// assert!(!is_identifier("Foo::Bar"));
/// ```
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Check whether `s` can follow a prefix inside an identifier (`[A-Za-z0-9_]+`).
///
/// Mapping names only ever appear after `Generated<Strategy>`, so a leading
/// digit is fine.
pub fn is_identifier_tail(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Format an identifier as lowercase hex without prefix (`0x86dd` -> `86dd`).
pub fn hex(identifier: u32) -> String {
    format!("{identifier:x}")
}
