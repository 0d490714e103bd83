//! Lexical checks for NCName and QName literals
//!
//! Character classes follow XML 1.0 fifth edition. Inputs are expected to be
//! whitespace-collapsed already.

use once_cell::sync::Lazy;
use regex::Regex;

const NAME_START_CHARS: &str = r"A-Z_a-z\u{C0}-\u{D6}\u{D8}-\u{F6}\u{F8}-\u{2FF}\u{370}-\u{37D}\u{37F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}";

const NAME_CHARS: &str = r"\-\.0-9\u{B7}\u{300}-\u{36F}\u{203F}-\u{2040}";

static NCNAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        "^[{start}][{start}{rest}]*$",
        start = NAME_START_CHARS,
        rest = NAME_CHARS
    ))
    .expect("NCName pattern is valid")
});

/// Check if a literal is an NCName
pub fn is_ncname(name: &str) -> bool {
    NCNAME.is_match(name)
}

/// Split a QName literal into its optional prefix and local part.
///
/// Returns `None` when either part is not an NCName.
pub fn split_qname(qname: &str) -> Option<(Option<&str>, &str)> {
    match qname.split_once(':') {
        Some((prefix, local)) if is_ncname(prefix) && is_ncname(local) => {
            Some((Some(prefix), local))
        }
        None if is_ncname(qname) => Some((None, qname)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ncname() {
        for name in ["element", "my-element", "foo.bar", "_x", "\u{e9}l\u{e9}ment"] {
            assert!(is_ncname(name), "{}", name);
        }
        for name in ["", "prefix:element", ".foo", "1st", "foo bar", "-x"] {
            assert!(!is_ncname(name), "{}", name);
        }
    }

    #[test]
    fn test_split_qname() {
        assert_eq!(split_qname("element"), Some((None, "element")));
        assert_eq!(split_qname("xs:element"), Some((Some("xs"), "element")));
        assert_eq!(split_qname(""), None);
        assert_eq!(split_qname(":element"), None);
        assert_eq!(split_qname("element:"), None);
        assert_eq!(split_qname("a:b:c"), None);
    }
}
