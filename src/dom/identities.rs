//! Identity constraint components

use serde::Serialize;

use crate::datatypes::XPathExpr;
use crate::namespaces::QName;

/// Which identity constraint a node declares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentityKind {
    /// xs:unique
    Unique,
    /// xs:key
    Key,
    /// xs:keyref
    Keyref,
}

/// An `xs:unique`, `xs:key` or `xs:keyref`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentityConstraintDecl {
    /// Constraint kind
    pub constraint: IdentityKind,
    /// id
    pub id: Option<String>,
    /// name
    pub name: Option<String>,
    /// refer (keyref only)
    pub refer: Option<QName>,
}

impl_attribute_slots!(IdentityConstraintDecl {
    id: Id => String,
    name: Name => String,
    refer: Refer => QName,
});

impl IdentityConstraintDecl {
    /// Create an empty constraint
    pub fn new(constraint: IdentityKind) -> Self {
        Self {
            constraint,
            id: None,
            name: None,
            refer: None,
        }
    }
}

/// An `xs:selector` or `xs:field`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct XPathDecl {
    /// id
    pub id: Option<String>,
    /// xpath
    pub xpath: Option<XPathExpr>,
}

impl_attribute_slots!(XPathDecl {
    id: Id => String,
    xpath: Xpath => XPath,
});
