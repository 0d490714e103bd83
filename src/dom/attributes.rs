//! Attribute declaration components

use serde::Serialize;

use crate::datatypes::{AttributeUse, Form};
use crate::namespaces::QName;

/// An `xs:attribute` declaration or reference
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AttributeDecl {
    /// id
    pub id: Option<String>,
    /// name
    pub name: Option<String>,
    /// ref
    #[serde(rename = "ref")]
    pub reference: Option<QName>,
    /// type
    #[serde(rename = "type")]
    pub type_name: Option<QName>,
    /// use
    #[serde(rename = "use")]
    pub attribute_use: Option<AttributeUse>,
    /// default
    pub default: Option<String>,
    /// fixed
    pub fixed: Option<String>,
    /// form
    pub form: Option<Form>,
}

impl_attribute_slots!(AttributeDecl {
    id: Id => String,
    name: Name => String,
    reference: Ref => QName,
    type_name: Type => QName,
    attribute_use: Use => Use,
    default: Default => String,
    fixed: Fixed => String,
    form: Form => Form,
});

impl AttributeDecl {
    /// Check if this is a reference to a global attribute
    pub fn is_reference(&self) -> bool {
        self.reference.is_some()
    }

    /// Effective use (optional when not declared)
    pub fn effective_use(&self) -> AttributeUse {
        self.attribute_use.unwrap_or(AttributeUse::Optional)
    }
}

/// An `xs:attributeGroup` definition or reference
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AttributeGroupDecl {
    /// id
    pub id: Option<String>,
    /// name
    pub name: Option<String>,
    /// ref
    #[serde(rename = "ref")]
    pub reference: Option<QName>,
}

impl_attribute_slots!(AttributeGroupDecl {
    id: Id => String,
    name: Name => String,
    reference: Ref => QName,
});
