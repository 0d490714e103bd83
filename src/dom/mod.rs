//! In-memory schema object model
//!
//! The tree is an arena of [`Node`]s. Each node owns a [`Component`] payload
//! whose variant is chosen from the node's [`ElementKind`] when it is created;
//! the payload holds the typed attribute slots of that kind.

use serde::Serialize;

use crate::datatypes::AttributeValue;

/// Implement `assign`/`attribute` for a component struct from its slot list.
///
/// Each entry maps a struct field to the attribute that fills it and the
/// [`AttributeValue`] variant carried by that attribute.
macro_rules! impl_attribute_slots {
    ($type:ident { $( $field:ident: $attr:ident => $variant:ident ),* $(,)? }) => {
        impl $type {
            /// Store a parsed value in its slot. Returns false when the slot
            /// was already set or does not exist on this component.
            pub(crate) fn assign(
                &mut self,
                name: $crate::dom::AttributeName,
                value: $crate::datatypes::AttributeValue,
            ) -> bool {
                match (name, value) {
                    $(
                        (
                            $crate::dom::AttributeName::$attr,
                            $crate::datatypes::AttributeValue::$variant(v),
                        ) => $crate::dom::set_once(&mut self.$field, v),
                    )*
                    _ => false,
                }
            }

            /// Get the value stored for an attribute, if set
            pub fn attribute(
                &self,
                name: $crate::dom::AttributeName,
            ) -> Option<$crate::datatypes::AttributeValue> {
                match name {
                    $(
                        $crate::dom::AttributeName::$attr => self
                            .$field
                            .clone()
                            .map($crate::datatypes::AttributeValue::$variant),
                    )*
                    #[allow(unreachable_patterns)]
                    _ => None,
                }
            }
        }
    };
}

pub mod annotations;
pub mod attributes;
pub mod complex_types;
pub mod elements;
pub mod export;
pub mod facets;
pub mod groups;
pub mod identities;
pub mod kinds;
pub mod schemas;
pub mod simple_types;
pub mod tree;
pub mod wildcards;

pub use annotations::{AnnotationDecl, AppinfoDecl, DocumentationDecl};
pub use attributes::{AttributeDecl, AttributeGroupDecl};
pub use complex_types::{ComplexTypeDecl, ContentDecl};
pub use elements::ElementDecl;
pub use facets::{CountFacet, LiteralFacet, WhiteSpaceFacet};
pub use groups::{Compositor, GroupDecl, ModelGroupDecl};
pub use identities::{IdentityConstraintDecl, IdentityKind, XPathDecl};
pub use kinds::{AttributeName, Cardinality, ElementKind, ElementName};
pub use schemas::{ImportDecl, IncludeDecl, NotationDecl, SchemaDecl};
pub use simple_types::{DerivationDecl, ListDecl, SimpleTypeDecl, UnionDecl};
pub use tree::{Node, NodeId, NodeRef, Schema};
pub use wildcards::WildcardDecl;

/// Fill an empty slot; a slot that already holds a value keeps it
pub(crate) fn set_once<T>(slot: &mut Option<T>, value: T) -> bool {
    if slot.is_some() {
        return false;
    }
    *slot = Some(value);
    true
}

/// Kind-specific payload of a node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Component {
    /// xs:schema
    Schema(SchemaDecl),
    /// xs:annotation
    Annotation(AnnotationDecl),
    /// xs:appinfo
    Appinfo(AppinfoDecl),
    /// xs:documentation
    Documentation(DocumentationDecl),
    /// xs:import
    Import(ImportDecl),
    /// xs:include, xs:redefine
    Include(IncludeDecl),
    /// xs:notation
    Notation(NotationDecl),
    /// xs:simpleType
    SimpleType(SimpleTypeDecl),
    /// xs:restriction, xs:extension
    Derivation(DerivationDecl),
    /// xs:list
    List(ListDecl),
    /// xs:union
    Union(UnionDecl),
    /// xs:complexType
    ComplexType(ComplexTypeDecl),
    /// xs:simpleContent, xs:complexContent
    Content(ContentDecl),
    /// xs:attribute
    Attribute(AttributeDecl),
    /// xs:attributeGroup
    AttributeGroup(AttributeGroupDecl),
    /// xs:element
    Element(ElementDecl),
    /// xs:group
    Group(GroupDecl),
    /// xs:all, xs:choice, xs:sequence
    ModelGroup(ModelGroupDecl),
    /// xs:any, xs:anyAttribute
    Wildcard(WildcardDecl),
    /// range, enumeration and pattern facets
    LiteralFacet(LiteralFacet),
    /// length and digit facets
    CountFacet(CountFacet),
    /// xs:whiteSpace
    WhiteSpaceFacet(WhiteSpaceFacet),
    /// xs:unique, xs:key, xs:keyref
    IdentityConstraint(IdentityConstraintDecl),
    /// xs:selector, xs:field
    XPath(XPathDecl),
}

macro_rules! impl_unwrap_component {
    ($fn:ident, $variant:ident, $type:ty) => {
        /// Get the payload if it has this variant
        pub fn $fn(&self) -> Option<&$type> {
            if let Self::$variant(ret) = self {
                Some(ret)
            } else {
                None
            }
        }
    };
}

impl Component {
    /// Create the empty payload for a freshly created node of `kind`
    pub fn new(kind: ElementKind) -> Self {
        use ElementKind as K;

        match kind {
            K::Schema => Self::Schema(SchemaDecl::default()),
            K::Annotation => Self::Annotation(AnnotationDecl::default()),
            K::Appinfo => Self::Appinfo(AppinfoDecl::default()),
            K::Documentation => Self::Documentation(DocumentationDecl::default()),
            K::Import => Self::Import(ImportDecl::default()),
            K::Include | K::Redefine => Self::Include(IncludeDecl::default()),
            K::Notation => Self::Notation(NotationDecl::default()),
            K::TopLevelSimpleType | K::LocalSimpleType => {
                Self::SimpleType(SimpleTypeDecl::default())
            }
            K::SimpleRestriction
            | K::SimpleContentRestriction
            | K::SimpleContentExtension
            | K::ComplexContentRestriction
            | K::ComplexContentExtension => Self::Derivation(DerivationDecl::default()),
            K::List => Self::List(ListDecl::default()),
            K::Union => Self::Union(UnionDecl::default()),
            K::TopLevelComplexType | K::LocalComplexType => {
                Self::ComplexType(ComplexTypeDecl::default())
            }
            K::SimpleContent | K::ComplexContent => Self::Content(ContentDecl::default()),
            K::TopLevelAttribute | K::LocalAttribute => Self::Attribute(AttributeDecl::default()),
            K::NamedAttributeGroup | K::AttributeGroupRef => {
                Self::AttributeGroup(AttributeGroupDecl::default())
            }
            K::TopLevelElement | K::LocalElement => Self::Element(ElementDecl::default()),
            K::NamedGroup | K::GroupRef => Self::Group(GroupDecl::default()),
            K::All | K::GroupDefinitionAll => {
                Self::ModelGroup(ModelGroupDecl::new(Compositor::All))
            }
            K::Choice | K::GroupDefinitionChoice => {
                Self::ModelGroup(ModelGroupDecl::new(Compositor::Choice))
            }
            K::Sequence | K::GroupDefinitionSequence => {
                Self::ModelGroup(ModelGroupDecl::new(Compositor::Sequence))
            }
            K::Any | K::AnyAttribute => Self::Wildcard(WildcardDecl::default()),
            K::MinExclusive
            | K::MinInclusive
            | K::MaxExclusive
            | K::MaxInclusive
            | K::Enumeration
            | K::Pattern => Self::LiteralFacet(LiteralFacet::default()),
            K::TotalDigits | K::FractionDigits | K::Length | K::MinLength | K::MaxLength => {
                Self::CountFacet(CountFacet::default())
            }
            K::WhiteSpace => Self::WhiteSpaceFacet(WhiteSpaceFacet::default()),
            K::Unique => Self::IdentityConstraint(IdentityConstraintDecl::new(IdentityKind::Unique)),
            K::Key => Self::IdentityConstraint(IdentityConstraintDecl::new(IdentityKind::Key)),
            K::Keyref => Self::IdentityConstraint(IdentityConstraintDecl::new(IdentityKind::Keyref)),
            K::Selector | K::Field => Self::XPath(XPathDecl::default()),
        }
    }

    /// Store a parsed attribute value; false if the slot is taken or absent
    pub(crate) fn assign(&mut self, name: AttributeName, value: AttributeValue) -> bool {
        match self {
            Self::Schema(c) => c.assign(name, value),
            Self::Annotation(c) => c.assign(name, value),
            Self::Appinfo(c) => c.assign(name, value),
            Self::Documentation(c) => c.assign(name, value),
            Self::Import(c) => c.assign(name, value),
            Self::Include(c) => c.assign(name, value),
            Self::Notation(c) => c.assign(name, value),
            Self::SimpleType(c) => c.assign(name, value),
            Self::Derivation(c) => c.assign(name, value),
            Self::List(c) => c.assign(name, value),
            Self::Union(c) => c.assign(name, value),
            Self::ComplexType(c) => c.assign(name, value),
            Self::Content(c) => c.assign(name, value),
            Self::Attribute(c) => c.assign(name, value),
            Self::AttributeGroup(c) => c.assign(name, value),
            Self::Element(c) => c.assign(name, value),
            Self::Group(c) => c.assign(name, value),
            Self::ModelGroup(c) => c.assign(name, value),
            Self::Wildcard(c) => c.assign(name, value),
            Self::LiteralFacet(c) => c.assign(name, value),
            Self::CountFacet(c) => c.assign(name, value),
            Self::WhiteSpaceFacet(c) => c.assign(name, value),
            Self::IdentityConstraint(c) => c.assign(name, value),
            Self::XPath(c) => c.assign(name, value),
        }
    }

    /// Get the value stored for an attribute, if set
    pub fn attribute(&self, name: AttributeName) -> Option<AttributeValue> {
        match self {
            Self::Schema(c) => c.attribute(name),
            Self::Annotation(c) => c.attribute(name),
            Self::Appinfo(c) => c.attribute(name),
            Self::Documentation(c) => c.attribute(name),
            Self::Import(c) => c.attribute(name),
            Self::Include(c) => c.attribute(name),
            Self::Notation(c) => c.attribute(name),
            Self::SimpleType(c) => c.attribute(name),
            Self::Derivation(c) => c.attribute(name),
            Self::List(c) => c.attribute(name),
            Self::Union(c) => c.attribute(name),
            Self::ComplexType(c) => c.attribute(name),
            Self::Content(c) => c.attribute(name),
            Self::Attribute(c) => c.attribute(name),
            Self::AttributeGroup(c) => c.attribute(name),
            Self::Element(c) => c.attribute(name),
            Self::Group(c) => c.attribute(name),
            Self::ModelGroup(c) => c.attribute(name),
            Self::Wildcard(c) => c.attribute(name),
            Self::LiteralFacet(c) => c.attribute(name),
            Self::CountFacet(c) => c.attribute(name),
            Self::WhiteSpaceFacet(c) => c.attribute(name),
            Self::IdentityConstraint(c) => c.attribute(name),
            Self::XPath(c) => c.attribute(name),
        }
    }

    /// Check if no attribute slot has been set
    pub fn is_unset(&self) -> bool {
        AttributeName::ALL
            .iter()
            .all(|name| self.attribute(*name).is_none())
    }

    /// Text content of a leaf component
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::Appinfo(c) => Some(&c.content),
            Self::Documentation(c) => Some(&c.content),
            _ => None,
        }
    }

    /// Replace the text content of a leaf component. Returns false on other components.
    pub(crate) fn set_content(&mut self, text: &str) -> bool {
        match self {
            Self::Appinfo(c) => c.content = text.to_string(),
            Self::Documentation(c) => c.content = text.to_string(),
            _ => return false,
        }
        true
    }

    impl_unwrap_component!(as_schema, Schema, SchemaDecl);
    impl_unwrap_component!(as_annotation, Annotation, AnnotationDecl);
    impl_unwrap_component!(as_appinfo, Appinfo, AppinfoDecl);
    impl_unwrap_component!(as_documentation, Documentation, DocumentationDecl);
    impl_unwrap_component!(as_import, Import, ImportDecl);
    impl_unwrap_component!(as_include, Include, IncludeDecl);
    impl_unwrap_component!(as_notation, Notation, NotationDecl);
    impl_unwrap_component!(as_simple_type, SimpleType, SimpleTypeDecl);
    impl_unwrap_component!(as_derivation, Derivation, DerivationDecl);
    impl_unwrap_component!(as_list, List, ListDecl);
    impl_unwrap_component!(as_union, Union, UnionDecl);
    impl_unwrap_component!(as_complex_type, ComplexType, ComplexTypeDecl);
    impl_unwrap_component!(as_content, Content, ContentDecl);
    impl_unwrap_component!(as_attribute, Attribute, AttributeDecl);
    impl_unwrap_component!(as_attribute_group, AttributeGroup, AttributeGroupDecl);
    impl_unwrap_component!(as_element, Element, ElementDecl);
    impl_unwrap_component!(as_group, Group, GroupDecl);
    impl_unwrap_component!(as_model_group, ModelGroup, ModelGroupDecl);
    impl_unwrap_component!(as_wildcard, Wildcard, WildcardDecl);
    impl_unwrap_component!(as_literal_facet, LiteralFacet, LiteralFacet);
    impl_unwrap_component!(as_count_facet, CountFacet, CountFacet);
    impl_unwrap_component!(as_white_space_facet, WhiteSpaceFacet, WhiteSpaceFacet);
    impl_unwrap_component!(
        as_identity_constraint,
        IdentityConstraint,
        IdentityConstraintDecl
    );
    impl_unwrap_component!(as_xpath, XPath, XPathDecl);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatypes::ValueType;

    fn sample(value_type: ValueType) -> &'static str {
        match value_type {
            ValueType::AnySimpleType | ValueType::Token => "some value",
            ValueType::Boolean => "true",
            ValueType::Id | ValueType::NcName => "foo",
            ValueType::AnyUri => "http://example.org/ns",
            ValueType::QName => "xs:string",
            ValueType::QNameList => "xs:int xs:string",
            ValueType::Language => "en",
            ValueType::NonNegativeInteger | ValueType::MinOccurs => "0",
            ValueType::PositiveInteger | ValueType::AllMinOccurs | ValueType::AllMaxOccurs => "1",
            ValueType::MaxOccurs => "unbounded",
            ValueType::Form => "qualified",
            ValueType::Use => "required",
            ValueType::ProcessContents => "lax",
            ValueType::WhiteSpace => "collapse",
            ValueType::BlockSet
            | ValueType::DerivationSet
            | ValueType::FullDerivationSet
            | ValueType::SimpleDerivationSet => "#all",
            ValueType::NamespaceList => "##other",
            ValueType::SelectorXPath => ".//item",
            ValueType::FieldXPath => "@id",
        }
    }

    #[test]
    fn test_every_legal_attribute_has_a_slot() {
        for kind in ElementKind::ALL {
            for (name, value_type) in kind.attributes() {
                let mut component = Component::new(kind);
                let value = value_type.parse(sample(*value_type)).unwrap();
                assert!(
                    component.assign(*name, value.clone()),
                    "{:?} has no slot for {:?}",
                    kind,
                    name
                );
                assert_eq!(component.attribute(*name), Some(value));
            }
        }
    }

    #[test]
    fn test_slots_keep_first_value() {
        let mut component = Component::new(ElementKind::TopLevelComplexType);
        let first = AttributeValue::String("first".to_string());
        let second = AttributeValue::String("second".to_string());
        assert!(component.assign(AttributeName::Name, first.clone()));
        assert!(!component.assign(AttributeName::Name, second));
        assert_eq!(component.attribute(AttributeName::Name), Some(first));
    }

    #[test]
    fn test_mismatched_value_is_refused() {
        let mut component = Component::new(ElementKind::LocalElement);
        assert!(!component.assign(AttributeName::Name, AttributeValue::Boolean(true)));
        assert!(component.is_unset());
    }

    #[test]
    fn test_new_components_are_unset() {
        for kind in ElementKind::ALL {
            assert!(Component::new(kind).is_unset(), "{:?}", kind);
        }
    }

    #[test]
    fn test_leaf_content() {
        let mut component = Component::new(ElementKind::Documentation);
        assert_eq!(component.content(), Some(""));
        assert!(component.set_content(" text "));
        assert_eq!(component.content(), Some(" text "));

        let mut other = Component::new(ElementKind::Annotation);
        assert!(!other.set_content("text"));
        assert_eq!(other.content(), None);
    }

    #[test]
    fn test_typed_accessors() {
        let component = Component::new(ElementKind::Choice);
        let group = component.as_model_group().unwrap();
        assert_eq!(group.compositor, Compositor::Choice);
        assert!(component.as_element().is_none());
    }
}
