//! Occurrence constraint values (minOccurs, maxOccurs)

use std::fmt;

use num_bigint::BigUint;
use serde::{Serialize, Serializer};

use super::collapse;
use super::simple::parse_non_negative_integer;
use crate::error::LexicalError;

/// Upper occurrence bound of a particle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaxOccurs {
    /// A finite limit
    Bounded(BigUint),
    /// `unbounded`
    Unbounded,
}

impl MaxOccurs {
    /// Check if the bound is `unbounded`
    pub fn is_unbounded(&self) -> bool {
        matches!(self, Self::Unbounded)
    }

    /// Get the finite limit, if any
    pub fn limit(&self) -> Option<&BigUint> {
        match self {
            Self::Bounded(n) => Some(n),
            Self::Unbounded => None,
        }
    }
}

impl fmt::Display for MaxOccurs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bounded(n) => write!(f, "{}", n),
            Self::Unbounded => write!(f, "unbounded"),
        }
    }
}

impl Serialize for MaxOccurs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parse minOccurs on particles other than `all`
pub fn parse_min_occurs(raw: &str) -> Result<BigUint, LexicalError> {
    parse_non_negative_integer(raw)
}

/// Parse maxOccurs on particles other than `all`
pub fn parse_max_occurs(raw: &str) -> Result<MaxOccurs, LexicalError> {
    let value = collapse(raw);
    if value == "unbounded" {
        return Ok(MaxOccurs::Unbounded);
    }
    parse_non_negative_integer(&value)
        .map(MaxOccurs::Bounded)
        .map_err(|_| LexicalError::invalid_limit(value))
}

/// Parse minOccurs on an `all` model group
pub fn parse_all_min_occurs(raw: &str) -> Result<BigUint, LexicalError> {
    let value = collapse(raw);
    match value.as_str() {
        "0" => Ok(BigUint::from(0u32)),
        "1" => Ok(BigUint::from(1u32)),
        _ => Err(LexicalError::unexpected(value, "minOccurs", &["0", "1"])),
    }
}

/// Parse maxOccurs on an `all` model group
pub fn parse_all_max_occurs(raw: &str) -> Result<MaxOccurs, LexicalError> {
    let value = collapse(raw);
    if value == "1" {
        Ok(MaxOccurs::Bounded(BigUint::from(1u32)))
    } else {
        Err(LexicalError::unexpected(value, "maxOccurs", &["1"]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_occurs() {
        assert_eq!(parse_max_occurs(" unbounded "), Ok(MaxOccurs::Unbounded));
        assert_eq!(
            parse_max_occurs("2"),
            Ok(MaxOccurs::Bounded(BigUint::from(2u32)))
        );
        assert_eq!(
            parse_max_occurs("0").unwrap().limit(),
            Some(&BigUint::from(0u32))
        );
        assert!(parse_max_occurs("unbounded").unwrap().is_unbounded());
    }

    #[test]
    fn test_max_occurs_invalid() {
        for raw in ["-1", "Unbounded", "1.5", "", "many"] {
            let err = parse_max_occurs(raw).unwrap_err();
            assert!(err.message.ends_with("is an invalid non-negative integer limit type."));
        }
        assert_eq!(
            parse_max_occurs(" -1 ").unwrap_err().to_string(),
            "\"-1\" is an invalid non-negative integer limit type."
        );
    }

    #[test]
    fn test_min_occurs() {
        assert_eq!(parse_min_occurs("5").unwrap(), BigUint::from(5u32));
        assert!(parse_min_occurs("unbounded").is_err());
    }

    #[test]
    fn test_all_occurs() {
        assert_eq!(parse_all_min_occurs("0").unwrap(), BigUint::from(0u32));
        assert_eq!(parse_all_min_occurs(" 1 ").unwrap(), BigUint::from(1u32));
        assert_eq!(
            parse_all_min_occurs("2").unwrap_err().to_string(),
            "\"2\" is invalid, expected \"0\" or \"1\"."
        );

        assert_eq!(
            parse_all_max_occurs("1"),
            Ok(MaxOccurs::Bounded(BigUint::from(1u32)))
        );
        for raw in ["0", "2", "unbounded", "foo"] {
            let err = parse_all_max_occurs(raw).unwrap_err();
            assert_eq!(err.to_string(), format!("\"{}\" is invalid, expected \"1\".", raw));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(MaxOccurs::Unbounded.to_string(), "unbounded");
        assert_eq!(MaxOccurs::Bounded(BigUint::from(3u32)).to_string(), "3");
    }
}
