//! Lexical checks for RFC 4512 `numericoid` and `descr` productions.

/// True for dotted-decimal OIDs such as `2.5.4.3`.
///
/// At least two arcs are required and arcs may not carry leading zeros.
pub fn is_numeric_oid(value: &str) -> bool {
    let mut arcs = 0;
    for arc in value.split('.') {
        let valid = match arc.as_bytes() {
            [] => false,
            [b'0'] => true,
            [b'0', ..] => false,
            bytes => bytes.iter().all(u8::is_ascii_digit),
        };
        if !valid {
            return false;
        }
        arcs += 1;
    }
    arcs >= 2
}

/// True for keystrings: a letter followed by letters, digits or hyphens.
pub fn is_descr(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
        }
        _ => false,
    }
}

/// True for either an OID or a descriptor.
pub fn is_oid_or_descr(value: &str) -> bool {
    is_numeric_oid(value) || is_descr(value)
}
