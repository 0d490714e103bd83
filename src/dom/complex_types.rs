//! Complex type definition components

use serde::Serialize;

use crate::datatypes::DerivationSet;

/// An `xs:complexType`, named at top level or anonymous
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComplexTypeDecl {
    /// id
    pub id: Option<String>,
    /// name
    pub name: Option<String>,
    /// abstract
    #[serde(rename = "abstract")]
    pub is_abstract: Option<bool>,
    /// final
    #[serde(rename = "final")]
    pub final_derivation: Option<DerivationSet>,
    /// block
    pub block: Option<DerivationSet>,
    /// mixed
    pub mixed: Option<bool>,
}

impl_attribute_slots!(ComplexTypeDecl {
    id: Id => String,
    name: Name => String,
    is_abstract: Abstract => Boolean,
    final_derivation: Final => DerivationSet,
    block: Block => DerivationSet,
    mixed: Mixed => Boolean,
});

impl ComplexTypeDecl {
    /// Check if the type allows character data between its elements
    pub fn is_mixed(&self) -> bool {
        self.mixed.unwrap_or(false)
    }
}

/// An `xs:simpleContent` or `xs:complexContent`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContentDecl {
    /// id
    pub id: Option<String>,
    /// mixed (complexContent only)
    pub mixed: Option<bool>,
}

impl_attribute_slots!(ContentDecl {
    id: Id => String,
    mixed: Mixed => Boolean,
});
