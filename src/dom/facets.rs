//! Constraining facet components
//!
//! Facets fall into three shapes by the datatype of their `value`: literal
//! facets keep the text verbatim (it is interpreted against the base type
//! later), count facets hold an integer, and `whiteSpace` holds its mode.

use num_bigint::BigUint;
use serde::Serialize;

use crate::datatypes::WhiteSpace;

/// minExclusive, minInclusive, maxExclusive, maxInclusive, enumeration, pattern
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LiteralFacet {
    /// id
    pub id: Option<String>,
    /// value, stored verbatim
    pub value: Option<String>,
    /// fixed (range facets only)
    pub fixed: Option<bool>,
}

impl_attribute_slots!(LiteralFacet {
    id: Id => String,
    value: Value => String,
    fixed: Fixed => Boolean,
});

/// totalDigits, fractionDigits, length, minLength, maxLength
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CountFacet {
    /// id
    pub id: Option<String>,
    /// value
    pub value: Option<BigUint>,
    /// fixed
    pub fixed: Option<bool>,
}

impl_attribute_slots!(CountFacet {
    id: Id => String,
    value: Value => Integer,
    fixed: Fixed => Boolean,
});

/// whiteSpace
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WhiteSpaceFacet {
    /// id
    pub id: Option<String>,
    /// value
    pub value: Option<WhiteSpace>,
    /// fixed
    pub fixed: Option<bool>,
}

impl_attribute_slots!(WhiteSpaceFacet {
    id: Id => String,
    value: Value => WhiteSpace,
    fixed: Fixed => Boolean,
});

impl WhiteSpaceFacet {
    /// Normalize a literal with the declared mode (preserve when unset)
    pub fn normalize(&self, s: &str) -> String {
        self.value.unwrap_or(WhiteSpace::Preserve).normalize(s)
    }
}
