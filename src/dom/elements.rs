//! Element declaration components

use num_bigint::BigUint;
use serde::Serialize;

use crate::datatypes::{DerivationSet, Form, MaxOccurs};
use crate::namespaces::QName;

/// An `xs:element` declaration or reference
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementDecl {
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
    /// substitutionGroup
    pub substitution_group: Option<QName>,
    /// minOccurs
    pub min_occurs: Option<BigUint>,
    /// maxOccurs
    pub max_occurs: Option<MaxOccurs>,
    /// default
    pub default: Option<String>,
    /// fixed
    pub fixed: Option<String>,
    /// nillable
    pub nillable: Option<bool>,
    /// abstract
    #[serde(rename = "abstract")]
    pub is_abstract: Option<bool>,
    /// final
    #[serde(rename = "final")]
    pub final_derivation: Option<DerivationSet>,
    /// block
    pub block: Option<DerivationSet>,
    /// form
    pub form: Option<Form>,
}

impl_attribute_slots!(ElementDecl {
    id: Id => String,
    name: Name => String,
    reference: Ref => QName,
    type_name: Type => QName,
    substitution_group: SubstitutionGroup => QName,
    min_occurs: MinOccurs => Integer,
    max_occurs: MaxOccurs => MaxOccurs,
    default: Default => String,
    fixed: Fixed => String,
    nillable: Nillable => Boolean,
    is_abstract: Abstract => Boolean,
    final_derivation: Final => DerivationSet,
    block: Block => DerivationSet,
    form: Form => Form,
});

impl ElementDecl {
    /// Check if this is a reference to a global element
    pub fn is_reference(&self) -> bool {
        self.reference.is_some()
    }

    /// Effective minOccurs (1 when not declared)
    pub fn effective_min_occurs(&self) -> BigUint {
        self.min_occurs.clone().unwrap_or_else(|| BigUint::from(1u32))
    }

    /// Effective maxOccurs (1 when not declared)
    pub fn effective_max_occurs(&self) -> MaxOccurs {
        self.max_occurs
            .clone()
            .unwrap_or_else(|| MaxOccurs::Bounded(BigUint::from(1u32)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatypes::AttributeValue;
    use crate::dom::AttributeName;

    #[test]
    fn test_occurs_defaults() {
        let mut element = ElementDecl::default();
        assert_eq!(element.effective_min_occurs(), BigUint::from(1u32));
        assert_eq!(
            element.effective_max_occurs(),
            MaxOccurs::Bounded(BigUint::from(1u32))
        );

        element.assign(
            AttributeName::MaxOccurs,
            AttributeValue::MaxOccurs(MaxOccurs::Unbounded),
        );
        assert!(element.effective_max_occurs().is_unbounded());
    }

    #[test]
    fn test_min_occurs_slot_takes_integer() {
        let mut element = ElementDecl::default();
        assert!(!element.assign(
            AttributeName::MinOccurs,
            AttributeValue::MaxOccurs(MaxOccurs::Unbounded)
        ));
        assert!(element.assign(
            AttributeName::MinOccurs,
            AttributeValue::Integer(BigUint::from(0u32))
        ));
        assert_eq!(element.effective_min_occurs(), BigUint::from(0u32));
    }
}
