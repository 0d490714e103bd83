//! Model group components

use std::fmt;

use num_bigint::BigUint;
use serde::Serialize;

use crate::datatypes::MaxOccurs;
use crate::namespaces::QName;

/// Compositor of a model group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Compositor {
    /// xs:all
    All,
    /// xs:choice
    Choice,
    /// xs:sequence
    Sequence,
}

impl fmt::Display for Compositor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Compositor::All => write!(f, "all"),
            Compositor::Choice => write!(f, "choice"),
            Compositor::Sequence => write!(f, "sequence"),
        }
    }
}

/// An `xs:group` definition or reference
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupDecl {
    /// id
    pub id: Option<String>,
    /// name
    pub name: Option<String>,
    /// ref
    #[serde(rename = "ref")]
    pub reference: Option<QName>,
    /// minOccurs
    pub min_occurs: Option<BigUint>,
    /// maxOccurs
    pub max_occurs: Option<MaxOccurs>,
}

impl_attribute_slots!(GroupDecl {
    id: Id => String,
    name: Name => String,
    reference: Ref => QName,
    min_occurs: MinOccurs => Integer,
    max_occurs: MaxOccurs => MaxOccurs,
});

/// An `xs:all`, `xs:choice` or `xs:sequence`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelGroupDecl {
    /// Compositor
    pub compositor: Compositor,
    /// id
    pub id: Option<String>,
    /// minOccurs
    pub min_occurs: Option<BigUint>,
    /// maxOccurs
    pub max_occurs: Option<MaxOccurs>,
}

impl_attribute_slots!(ModelGroupDecl {
    id: Id => String,
    min_occurs: MinOccurs => Integer,
    max_occurs: MaxOccurs => MaxOccurs,
});

impl ModelGroupDecl {
    /// Create an empty model group
    pub fn new(compositor: Compositor) -> Self {
        Self {
            compositor,
            id: None,
            min_occurs: None,
            max_occurs: None,
        }
    }
}
