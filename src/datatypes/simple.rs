//! Parsers for the primitive and name datatypes
//!
//! Each parser collapses whitespace first, then checks the lexical space of
//! its datatype. Errors report the collapsed literal.

use std::fmt;

use num_bigint::BigUint;
use num_bigint::ParseBigIntError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use url::Url;

use super::collapse;
use crate::error::LexicalError;
use crate::names::{is_ncname, split_qname};
use crate::namespaces::QName;

static LANGUAGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z]{1,8}(-[a-zA-Z0-9]{1,8})*$").expect("language pattern is valid")
});

static URI_SCHEME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.\-]*$").expect("scheme pattern is valid"));

/// Validated xs:anyURI literal (absolute or relative reference)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AnyUri(String);

impl AnyUri {
    /// Get the URI text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if the reference carries a scheme
    pub fn is_absolute(&self) -> bool {
        scheme_of(&self.0).is_some()
    }

    /// Parse an absolute reference as a URL
    pub fn to_url(&self) -> Option<Url> {
        if self.is_absolute() {
            Url::parse(&self.0).ok()
        } else {
            None
        }
    }

    /// Resolve this reference against a base URL
    pub fn resolve(&self, base: &Url) -> Option<Url> {
        base.join(&self.0).ok()
    }
}

impl fmt::Display for AnyUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Text before the first `:` when that colon comes before any `/`, `?` or `#`
fn scheme_of(uri: &str) -> Option<&str> {
    let end = uri.find(['/', '?', '#']).unwrap_or(uri.len());
    uri[..end].find(':').map(|colon| &uri[..colon])
}

/// Parse xs:anyURI
pub fn parse_any_uri(raw: &str) -> Result<AnyUri, LexicalError> {
    let value = collapse(raw);
    let invalid = || LexicalError::invalid(value.clone(), "anyURI");

    if let Some(scheme) = scheme_of(&value) {
        if !URI_SCHEME.is_match(scheme) {
            return Err(invalid());
        }
    }

    if value.matches('#').count() > 1 {
        return Err(invalid());
    }

    let bytes = value.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if *b == b'%' {
            let escaped = bytes.get(i + 1..i + 3);
            if !matches!(escaped, Some(hex) if hex.iter().all(u8::is_ascii_hexdigit)) {
                return Err(invalid());
            }
        }
    }

    Ok(AnyUri(value))
}

/// Parse xs:boolean
pub fn parse_boolean(raw: &str) -> Result<bool, LexicalError> {
    let value = collapse(raw);
    match value.as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(LexicalError::invalid(value, "boolean")),
    }
}

/// Parse xs:NCName
pub fn parse_ncname(raw: &str) -> Result<String, LexicalError> {
    let value = collapse(raw);
    if is_ncname(&value) {
        Ok(value)
    } else {
        Err(LexicalError::invalid(value, "NCName"))
    }
}

/// Parse xs:ID
pub fn parse_id(raw: &str) -> Result<String, LexicalError> {
    let value = collapse(raw);
    if is_ncname(&value) {
        Ok(value)
    } else {
        Err(LexicalError::invalid(value, "ID"))
    }
}

/// Parse xs:QName, leaving the prefix unresolved
pub fn parse_qname(raw: &str) -> Result<QName, LexicalError> {
    let value = collapse(raw);
    match split_qname(&value) {
        Some((prefix, local)) => Ok(QName::new(prefix, local)),
        None => Err(LexicalError::invalid(value, "QName")),
    }
}

/// Parse a whitespace-separated list of xs:QName
pub fn parse_qname_list(raw: &str) -> Result<Vec<QName>, LexicalError> {
    let value = collapse(raw);
    value
        .split(' ')
        .filter(|item| !item.is_empty())
        .map(|item| match split_qname(item) {
            Some((prefix, local)) => Ok(QName::new(prefix, local)),
            None => Err(LexicalError::invalid(value.clone(), "QName list")),
        })
        .collect()
}

/// Parse xs:language
pub fn parse_language(raw: &str) -> Result<String, LexicalError> {
    let value = collapse(raw);
    if LANGUAGE.is_match(&value) {
        Ok(value)
    } else {
        Err(LexicalError::invalid(value, "language"))
    }
}

fn parse_unsigned_digits(value: &str) -> Option<Result<BigUint, ParseBigIntError>> {
    let digits = value.strip_prefix('+').unwrap_or(value);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(digits.parse::<BigUint>())
}

/// Parse xs:nonNegativeInteger
pub fn parse_non_negative_integer(raw: &str) -> Result<BigUint, LexicalError> {
    let value = collapse(raw);
    match parse_unsigned_digits(&value) {
        Some(Ok(n)) => Ok(n),
        _ => Err(LexicalError::invalid(value, "nonNegativeInteger")),
    }
}

/// Parse xs:positiveInteger
pub fn parse_positive_integer(raw: &str) -> Result<BigUint, LexicalError> {
    let value = collapse(raw);
    match parse_unsigned_digits(&value) {
        Some(Ok(n)) if n > BigUint::from(0u32) => Ok(n),
        _ => Err(LexicalError::invalid(value, "positiveInteger")),
    }
}
