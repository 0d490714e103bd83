//! Simple type definition components

use serde::Serialize;

use crate::datatypes::DerivationSet;
use crate::namespaces::QName;

/// An `xs:simpleType`, named at top level or anonymous
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleTypeDecl {
    /// id
    pub id: Option<String>,
    /// name
    pub name: Option<String>,
    /// final
    #[serde(rename = "final")]
    pub final_derivation: Option<DerivationSet>,
}

impl_attribute_slots!(SimpleTypeDecl {
    id: Id => String,
    name: Name => String,
    final_derivation: Final => DerivationSet,
});

impl SimpleTypeDecl {
    /// Check if this is an anonymous type
    pub fn is_anonymous(&self) -> bool {
        self.name.is_none()
    }
}

/// An `xs:restriction` or `xs:extension` in any context
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DerivationDecl {
    /// id
    pub id: Option<String>,
    /// base
    pub base: Option<QName>,
}

impl_attribute_slots!(DerivationDecl {
    id: Id => String,
    base: Base => QName,
});

/// An `xs:list`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDecl {
    /// id
    pub id: Option<String>,
    /// itemType
    pub item_type: Option<QName>,
}

impl_attribute_slots!(ListDecl {
    id: Id => String,
    item_type: ItemType => QName,
});

/// An `xs:union`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnionDecl {
    /// id
    pub id: Option<String>,
    /// memberTypes
    pub member_types: Option<Vec<QName>>,
}

impl_attribute_slots!(UnionDecl {
    id: Id => String,
    member_types: MemberTypes => QNameList,
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatypes::{AttributeValue, ValueType};
    use crate::dom::AttributeName;

    #[test]
    fn test_member_types() {
        let mut union = UnionDecl::default();
        let value = ValueType::QNameList.parse("xs:int  xs:date").unwrap();
        assert!(union.assign(AttributeName::MemberTypes, value));
        assert_eq!(
            union.member_types,
            Some(vec![QName::prefixed("xs", "int"), QName::prefixed("xs", "date")])
        );
    }

    #[test]
    fn test_anonymous() {
        let mut simple_type = SimpleTypeDecl::default();
        assert!(simple_type.is_anonymous());
        simple_type.assign(AttributeName::Name, AttributeValue::String("code".into()));
        assert!(!simple_type.is_anonymous());
    }
}
