//! Wildcard components

use num_bigint::BigUint;
use serde::Serialize;

use crate::datatypes::{MaxOccurs, NamespaceList, ProcessContents};

/// An `xs:any` or `xs:anyAttribute`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WildcardDecl {
    /// id
    pub id: Option<String>,
    /// minOccurs (xs:any only)
    pub min_occurs: Option<BigUint>,
    /// maxOccurs (xs:any only)
    pub max_occurs: Option<MaxOccurs>,
    /// namespace
    pub namespace: Option<NamespaceList>,
    /// processContents
    pub process_contents: Option<ProcessContents>,
}

impl_attribute_slots!(WildcardDecl {
    id: Id => String,
    min_occurs: MinOccurs => Integer,
    max_occurs: MaxOccurs => MaxOccurs,
    namespace: Namespace => NamespaceList,
    process_contents: ProcessContents => ProcessContents,
});

impl WildcardDecl {
    /// Effective namespace constraint (`##any` when not declared)
    pub fn effective_namespace(&self) -> NamespaceList {
        self.namespace.clone().unwrap_or(NamespaceList::Any)
    }

    /// Effective processing mode (strict when not declared)
    pub fn effective_process_contents(&self) -> ProcessContents {
        self.process_contents.unwrap_or(ProcessContents::Strict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let wildcard = WildcardDecl::default();
        assert_eq!(wildcard.effective_namespace(), NamespaceList::Any);
        assert_eq!(wildcard.effective_process_contents(), ProcessContents::Strict);
    }
}
