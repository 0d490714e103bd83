//! Element kinds and the static dispatch table
//!
//! Every node carries an [`ElementKind`] fixed at creation. The kind alone
//! decides which attributes (and with which datatype) and which child
//! elements are legal while the node is current. Element names that occur in
//! several structural contexts with different rules (`complexType` at top
//! level vs. local, `all` in a type definition vs. in a named group, ...)
//! are split into separate kinds; the parent kind picks the flavor.

use std::fmt;

use serde::Serialize;

use crate::datatypes::ValueType;

use self::AttributeName as A;
use self::ElementKind as K;
use self::ElementName as E;
use crate::datatypes::ValueType as T;

/// Local names of the schema elements a tokenizer can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementName {
    /// xs:all
    All,
    /// xs:annotation
    Annotation,
    /// xs:any
    Any,
    /// xs:anyAttribute
    AnyAttribute,
    /// xs:appinfo
    Appinfo,
    /// xs:attribute
    Attribute,
    /// xs:attributeGroup
    AttributeGroup,
    /// xs:choice
    Choice,
    /// xs:complexContent
    ComplexContent,
    /// xs:complexType
    ComplexType,
    /// xs:documentation
    Documentation,
    /// xs:element
    Element,
    /// xs:enumeration
    Enumeration,
    /// xs:extension
    Extension,
    /// xs:field
    Field,
    /// xs:fractionDigits
    FractionDigits,
    /// xs:group
    Group,
    /// xs:import
    Import,
    /// xs:include
    Include,
    /// xs:key
    Key,
    /// xs:keyref
    Keyref,
    /// xs:length
    Length,
    /// xs:list
    List,
    /// xs:maxExclusive
    MaxExclusive,
    /// xs:maxInclusive
    MaxInclusive,
    /// xs:maxLength
    MaxLength,
    /// xs:minExclusive
    MinExclusive,
    /// xs:minInclusive
    MinInclusive,
    /// xs:minLength
    MinLength,
    /// xs:notation
    Notation,
    /// xs:pattern
    Pattern,
    /// xs:redefine
    Redefine,
    /// xs:restriction
    Restriction,
    /// xs:schema
    Schema,
    /// xs:selector
    Selector,
    /// xs:sequence
    Sequence,
    /// xs:simpleContent
    SimpleContent,
    /// xs:simpleType
    SimpleType,
    /// xs:totalDigits
    TotalDigits,
    /// xs:union
    Union,
    /// xs:unique
    Unique,
    /// xs:whiteSpace
    WhiteSpace,
}

impl ElementName {
    /// Every element name
    pub const ALL: [ElementName; 42] = [
        E::All,
        E::Annotation,
        E::Any,
        E::AnyAttribute,
        E::Appinfo,
        E::Attribute,
        E::AttributeGroup,
        E::Choice,
        E::ComplexContent,
        E::ComplexType,
        E::Documentation,
        E::Element,
        E::Enumeration,
        E::Extension,
        E::Field,
        E::FractionDigits,
        E::Group,
        E::Import,
        E::Include,
        E::Key,
        E::Keyref,
        E::Length,
        E::List,
        E::MaxExclusive,
        E::MaxInclusive,
        E::MaxLength,
        E::MinExclusive,
        E::MinInclusive,
        E::MinLength,
        E::Notation,
        E::Pattern,
        E::Redefine,
        E::Restriction,
        E::Schema,
        E::Selector,
        E::Sequence,
        E::SimpleContent,
        E::SimpleType,
        E::TotalDigits,
        E::Union,
        E::Unique,
        E::WhiteSpace,
    ];

    /// Get the XSD local name
    pub fn as_str(&self) -> &'static str {
        match self {
            E::All => "all",
            E::Annotation => "annotation",
            E::Any => "any",
            E::AnyAttribute => "anyAttribute",
            E::Appinfo => "appinfo",
            E::Attribute => "attribute",
            E::AttributeGroup => "attributeGroup",
            E::Choice => "choice",
            E::ComplexContent => "complexContent",
            E::ComplexType => "complexType",
            E::Documentation => "documentation",
            E::Element => "element",
            E::Enumeration => "enumeration",
            E::Extension => "extension",
            E::Field => "field",
            E::FractionDigits => "fractionDigits",
            E::Group => "group",
            E::Import => "import",
            E::Include => "include",
            E::Key => "key",
            E::Keyref => "keyref",
            E::Length => "length",
            E::List => "list",
            E::MaxExclusive => "maxExclusive",
            E::MaxInclusive => "maxInclusive",
            E::MaxLength => "maxLength",
            E::MinExclusive => "minExclusive",
            E::MinInclusive => "minInclusive",
            E::MinLength => "minLength",
            E::Notation => "notation",
            E::Pattern => "pattern",
            E::Redefine => "redefine",
            E::Restriction => "restriction",
            E::Schema => "schema",
            E::Selector => "selector",
            E::Sequence => "sequence",
            E::SimpleContent => "simpleContent",
            E::SimpleType => "simpleType",
            E::TotalDigits => "totalDigits",
            E::Union => "union",
            E::Unique => "unique",
            E::WhiteSpace => "whiteSpace",
        }
    }

    /// Look up an element name by its XSD local name
    pub fn from_local_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|e| e.as_str() == name)
    }
}

impl fmt::Display for ElementName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Names of the schema attributes a tokenizer can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AttributeName {
    /// abstract
    Abstract,
    /// attributeFormDefault
    AttributeFormDefault,
    /// base
    Base,
    /// block
    Block,
    /// blockDefault
    BlockDefault,
    /// default
    Default,
    /// elementFormDefault
    ElementFormDefault,
    /// final
    Final,
    /// finalDefault
    FinalDefault,
    /// fixed
    Fixed,
    /// form
    Form,
    /// id
    Id,
    /// itemType
    ItemType,
    /// xml:lang
    Lang,
    /// maxOccurs
    MaxOccurs,
    /// memberTypes
    MemberTypes,
    /// minOccurs
    MinOccurs,
    /// mixed
    Mixed,
    /// name
    Name,
    /// namespace
    Namespace,
    /// nillable
    Nillable,
    /// processContents
    ProcessContents,
    /// public
    Public,
    /// ref
    Ref,
    /// refer
    Refer,
    /// schemaLocation
    SchemaLocation,
    /// source
    Source,
    /// substitutionGroup
    SubstitutionGroup,
    /// system
    System,
    /// targetNamespace
    TargetNamespace,
    /// type
    Type,
    /// use
    Use,
    /// value
    Value,
    /// version
    Version,
    /// xpath
    Xpath,
}

impl AttributeName {
    /// Every attribute name
    pub const ALL: [AttributeName; 35] = [
        A::Abstract,
        A::AttributeFormDefault,
        A::Base,
        A::Block,
        A::BlockDefault,
        A::Default,
        A::ElementFormDefault,
        A::Final,
        A::FinalDefault,
        A::Fixed,
        A::Form,
        A::Id,
        A::ItemType,
        A::Lang,
        A::MaxOccurs,
        A::MemberTypes,
        A::MinOccurs,
        A::Mixed,
        A::Name,
        A::Namespace,
        A::Nillable,
        A::ProcessContents,
        A::Public,
        A::Ref,
        A::Refer,
        A::SchemaLocation,
        A::Source,
        A::SubstitutionGroup,
        A::System,
        A::TargetNamespace,
        A::Type,
        A::Use,
        A::Value,
        A::Version,
        A::Xpath,
    ];

    /// Get the attribute local name (`lang` lives in the XML namespace)
    pub fn as_str(&self) -> &'static str {
        match self {
            A::Abstract => "abstract",
            A::AttributeFormDefault => "attributeFormDefault",
            A::Base => "base",
            A::Block => "block",
            A::BlockDefault => "blockDefault",
            A::Default => "default",
            A::ElementFormDefault => "elementFormDefault",
            A::Final => "final",
            A::FinalDefault => "finalDefault",
            A::Fixed => "fixed",
            A::Form => "form",
            A::Id => "id",
            A::ItemType => "itemType",
            A::Lang => "lang",
            A::MaxOccurs => "maxOccurs",
            A::MemberTypes => "memberTypes",
            A::MinOccurs => "minOccurs",
            A::Mixed => "mixed",
            A::Name => "name",
            A::Namespace => "namespace",
            A::Nillable => "nillable",
            A::ProcessContents => "processContents",
            A::Public => "public",
            A::Ref => "ref",
            A::Refer => "refer",
            A::SchemaLocation => "schemaLocation",
            A::Source => "source",
            A::SubstitutionGroup => "substitutionGroup",
            A::System => "system",
            A::TargetNamespace => "targetNamespace",
            A::Type => "type",
            A::Use => "use",
            A::Value => "value",
            A::Version => "version",
            A::Xpath => "xpath",
        }
    }

    /// Look up an unprefixed schema attribute by local name
    ///
    /// `lang` is not returned here: it is only meaningful as `xml:lang`.
    pub fn from_local_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .filter(|a| *a != A::Lang)
            .find(|a| a.as_str() == name)
    }
}

impl fmt::Display for AttributeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            A::Lang => write!(f, "xml:lang"),
            other => write!(f, "{}", other.as_str()),
        }
    }
}

/// How often a child kind may appear under its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Cardinality {
    /// At most once
    Single,
    /// Any number of times
    Repeatable,
}

/// Kind tag of a node in the schema tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ElementKind {
    /// xs:schema (root)
    Schema,
    /// xs:annotation
    Annotation,
    /// xs:appinfo (text leaf)
    Appinfo,
    /// xs:documentation (text leaf)
    Documentation,
    /// xs:import
    Import,
    /// xs:include
    Include,
    /// xs:redefine
    Redefine,
    /// xs:notation
    Notation,
    /// xs:simpleType directly under schema or redefine
    TopLevelSimpleType,
    /// anonymous xs:simpleType
    LocalSimpleType,
    /// xs:restriction of a simple type
    SimpleRestriction,
    /// xs:list
    List,
    /// xs:union
    Union,
    /// xs:complexType directly under schema or redefine
    TopLevelComplexType,
    /// anonymous xs:complexType
    LocalComplexType,
    /// xs:simpleContent
    SimpleContent,
    /// xs:complexContent
    ComplexContent,
    /// xs:restriction under xs:simpleContent
    SimpleContentRestriction,
    /// xs:extension under xs:simpleContent
    SimpleContentExtension,
    /// xs:restriction under xs:complexContent
    ComplexContentRestriction,
    /// xs:extension under xs:complexContent
    ComplexContentExtension,
    /// xs:attribute directly under schema
    TopLevelAttribute,
    /// local xs:attribute declaration or reference
    LocalAttribute,
    /// xs:attributeGroup definition
    NamedAttributeGroup,
    /// xs:attributeGroup reference
    AttributeGroupRef,
    /// xs:element directly under schema
    TopLevelElement,
    /// local xs:element declaration or reference
    LocalElement,
    /// xs:group definition
    NamedGroup,
    /// xs:group reference
    GroupRef,
    /// xs:all as the particle of a type definition
    All,
    /// xs:choice as a particle
    Choice,
    /// xs:sequence as a particle
    Sequence,
    /// xs:all as the model group of a named group
    GroupDefinitionAll,
    /// xs:choice as the model group of a named group
    GroupDefinitionChoice,
    /// xs:sequence as the model group of a named group
    GroupDefinitionSequence,
    /// xs:any
    Any,
    /// xs:anyAttribute
    AnyAttribute,
    /// xs:minExclusive
    MinExclusive,
    /// xs:minInclusive
    MinInclusive,
    /// xs:maxExclusive
    MaxExclusive,
    /// xs:maxInclusive
    MaxInclusive,
    /// xs:totalDigits
    TotalDigits,
    /// xs:fractionDigits
    FractionDigits,
    /// xs:length
    Length,
    /// xs:minLength
    MinLength,
    /// xs:maxLength
    MaxLength,
    /// xs:enumeration
    Enumeration,
    /// xs:whiteSpace
    WhiteSpace,
    /// xs:pattern
    Pattern,
    /// xs:unique
    Unique,
    /// xs:key
    Key,
    /// xs:keyref
    Keyref,
    /// xs:selector
    Selector,
    /// xs:field
    Field,
}

const S: Cardinality = Cardinality::Single;
const R: Cardinality = Cardinality::Repeatable;

type AttributeRow = (AttributeName, ValueType);
type ChildRow = (ElementName, ElementKind, Cardinality);

const ID_ONLY: &[AttributeRow] = &[(A::Id, T::Id)];

const SCHEMA_ATTRS: &[AttributeRow] = &[
    (A::AttributeFormDefault, T::Form),
    (A::BlockDefault, T::BlockSet),
    (A::ElementFormDefault, T::Form),
    (A::FinalDefault, T::FullDerivationSet),
    (A::Id, T::Id),
    (A::TargetNamespace, T::AnyUri),
    (A::Version, T::Token),
    (A::Lang, T::Language),
];

const APPINFO_ATTRS: &[AttributeRow] = &[(A::Source, T::AnyUri)];

const DOCUMENTATION_ATTRS: &[AttributeRow] = &[(A::Source, T::AnyUri), (A::Lang, T::Language)];

const IMPORT_ATTRS: &[AttributeRow] = &[
    (A::Id, T::Id),
    (A::Namespace, T::AnyUri),
    (A::SchemaLocation, T::AnyUri),
];

const INCLUDE_ATTRS: &[AttributeRow] = &[(A::Id, T::Id), (A::SchemaLocation, T::AnyUri)];

const NOTATION_ATTRS: &[AttributeRow] = &[
    (A::Id, T::Id),
    (A::Name, T::NcName),
    (A::Public, T::Token),
    (A::System, T::AnyUri),
];

const TOP_LEVEL_SIMPLE_TYPE_ATTRS: &[AttributeRow] = &[
    (A::Id, T::Id),
    (A::Final, T::SimpleDerivationSet),
    (A::Name, T::NcName),
];

const BASE_ATTRS: &[AttributeRow] = &[(A::Id, T::Id), (A::Base, T::QName)];

const LIST_ATTRS: &[AttributeRow] = &[(A::Id, T::Id), (A::ItemType, T::QName)];

const UNION_ATTRS: &[AttributeRow] = &[(A::Id, T::Id), (A::MemberTypes, T::QNameList)];

const TOP_LEVEL_COMPLEX_TYPE_ATTRS: &[AttributeRow] = &[
    (A::Id, T::Id),
    (A::Name, T::NcName),
    (A::Abstract, T::Boolean),
    (A::Final, T::DerivationSet),
    (A::Block, T::DerivationSet),
    (A::Mixed, T::Boolean),
];

const MIXED_ATTRS: &[AttributeRow] = &[(A::Id, T::Id), (A::Mixed, T::Boolean)];

const TOP_LEVEL_ATTRIBUTE_ATTRS: &[AttributeRow] = &[
    (A::Id, T::Id),
    (A::Name, T::NcName),
    (A::Type, T::QName),
    (A::Default, T::AnySimpleType),
    (A::Fixed, T::AnySimpleType),
];

const LOCAL_ATTRIBUTE_ATTRS: &[AttributeRow] = &[
    (A::Id, T::Id),
    (A::Name, T::NcName),
    (A::Ref, T::QName),
    (A::Type, T::QName),
    (A::Use, T::Use),
    (A::Default, T::AnySimpleType),
    (A::Fixed, T::AnySimpleType),
    (A::Form, T::Form),
];

const NAMED_ATTRS: &[AttributeRow] = &[(A::Id, T::Id), (A::Name, T::NcName)];

const REF_ATTRS: &[AttributeRow] = &[(A::Id, T::Id), (A::Ref, T::QName)];

const TOP_LEVEL_ELEMENT_ATTRS: &[AttributeRow] = &[
    (A::Id, T::Id),
    (A::Name, T::NcName),
    (A::Type, T::QName),
    (A::SubstitutionGroup, T::QName),
    (A::Default, T::AnySimpleType),
    (A::Fixed, T::AnySimpleType),
    (A::Nillable, T::Boolean),
    (A::Abstract, T::Boolean),
    (A::Final, T::DerivationSet),
    (A::Block, T::BlockSet),
];

const LOCAL_ELEMENT_ATTRS: &[AttributeRow] = &[
    (A::Id, T::Id),
    (A::Name, T::NcName),
    (A::Ref, T::QName),
    (A::Type, T::QName),
    (A::MinOccurs, T::MinOccurs),
    (A::MaxOccurs, T::MaxOccurs),
    (A::Default, T::AnySimpleType),
    (A::Fixed, T::AnySimpleType),
    (A::Nillable, T::Boolean),
    (A::Block, T::BlockSet),
    (A::Form, T::Form),
];

const GROUP_REF_ATTRS: &[AttributeRow] = &[
    (A::Id, T::Id),
    (A::Ref, T::QName),
    (A::MinOccurs, T::MinOccurs),
    (A::MaxOccurs, T::MaxOccurs),
];

const ALL_ATTRS: &[AttributeRow] = &[
    (A::Id, T::Id),
    (A::MinOccurs, T::AllMinOccurs),
    (A::MaxOccurs, T::AllMaxOccurs),
];

const EXPLICIT_GROUP_ATTRS: &[AttributeRow] = &[
    (A::Id, T::Id),
    (A::MinOccurs, T::MinOccurs),
    (A::MaxOccurs, T::MaxOccurs),
];

const ANY_ATTRS: &[AttributeRow] = &[
    (A::Id, T::Id),
    (A::MinOccurs, T::MinOccurs),
    (A::MaxOccurs, T::MaxOccurs),
    (A::Namespace, T::NamespaceList),
    (A::ProcessContents, T::ProcessContents),
];

const ANY_ATTRIBUTE_ATTRS: &[AttributeRow] = &[
    (A::Id, T::Id),
    (A::Namespace, T::NamespaceList),
    (A::ProcessContents, T::ProcessContents),
];

const RANGE_FACET_ATTRS: &[AttributeRow] = &[
    (A::Id, T::Id),
    (A::Value, T::AnySimpleType),
    (A::Fixed, T::Boolean),
];

const TOTAL_DIGITS_ATTRS: &[AttributeRow] = &[
    (A::Id, T::Id),
    (A::Value, T::PositiveInteger),
    (A::Fixed, T::Boolean),
];

const COUNT_FACET_ATTRS: &[AttributeRow] = &[
    (A::Id, T::Id),
    (A::Value, T::NonNegativeInteger),
    (A::Fixed, T::Boolean),
];

const VALUE_FACET_ATTRS: &[AttributeRow] = &[(A::Id, T::Id), (A::Value, T::AnySimpleType)];

const WHITE_SPACE_ATTRS: &[AttributeRow] = &[
    (A::Id, T::Id),
    (A::Value, T::WhiteSpace),
    (A::Fixed, T::Boolean),
];

const KEYREF_ATTRS: &[AttributeRow] = &[
    (A::Id, T::Id),
    (A::Name, T::NcName),
    (A::Refer, T::QName),
];

const SELECTOR_ATTRS: &[AttributeRow] = &[(A::Id, T::Id), (A::Xpath, T::SelectorXPath)];

const FIELD_ATTRS: &[AttributeRow] = &[(A::Id, T::Id), (A::Xpath, T::FieldXPath)];

const NO_CHILDREN: &[ChildRow] = &[];

const ANNOTATION_ONLY: &[ChildRow] = &[(E::Annotation, K::Annotation, S)];

const SCHEMA_CHILDREN: &[ChildRow] = &[
    (E::Include, K::Include, R),
    (E::Import, K::Import, R),
    (E::Redefine, K::Redefine, R),
    (E::Annotation, K::Annotation, R),
    (E::SimpleType, K::TopLevelSimpleType, R),
    (E::ComplexType, K::TopLevelComplexType, R),
    (E::Group, K::NamedGroup, R),
    (E::AttributeGroup, K::NamedAttributeGroup, R),
    (E::Element, K::TopLevelElement, R),
    (E::Attribute, K::TopLevelAttribute, R),
    (E::Notation, K::Notation, R),
];

const ANNOTATION_CHILDREN: &[ChildRow] = &[
    (E::Appinfo, K::Appinfo, R),
    (E::Documentation, K::Documentation, R),
];

const REDEFINE_CHILDREN: &[ChildRow] = &[
    (E::Annotation, K::Annotation, R),
    (E::SimpleType, K::TopLevelSimpleType, R),
    (E::ComplexType, K::TopLevelComplexType, R),
    (E::Group, K::NamedGroup, R),
    (E::AttributeGroup, K::NamedAttributeGroup, R),
];

const SIMPLE_TYPE_CHILDREN: &[ChildRow] = &[
    (E::Annotation, K::Annotation, S),
    (E::Restriction, K::SimpleRestriction, S),
    (E::List, K::List, S),
    (E::Union, K::Union, S),
];

const SIMPLE_RESTRICTION_CHILDREN: &[ChildRow] = &[
    (E::Annotation, K::Annotation, S),
    (E::SimpleType, K::LocalSimpleType, S),
    (E::MinExclusive, K::MinExclusive, R),
    (E::MinInclusive, K::MinInclusive, R),
    (E::MaxExclusive, K::MaxExclusive, R),
    (E::MaxInclusive, K::MaxInclusive, R),
    (E::TotalDigits, K::TotalDigits, R),
    (E::FractionDigits, K::FractionDigits, R),
    (E::Length, K::Length, R),
    (E::MinLength, K::MinLength, R),
    (E::MaxLength, K::MaxLength, R),
    (E::Enumeration, K::Enumeration, R),
    (E::WhiteSpace, K::WhiteSpace, R),
    (E::Pattern, K::Pattern, R),
];

const LIST_CHILDREN: &[ChildRow] = &[
    (E::Annotation, K::Annotation, S),
    (E::SimpleType, K::LocalSimpleType, S),
];

const UNION_CHILDREN: &[ChildRow] = &[
    (E::Annotation, K::Annotation, S),
    (E::SimpleType, K::LocalSimpleType, R),
];

const COMPLEX_TYPE_CHILDREN: &[ChildRow] = &[
    (E::Annotation, K::Annotation, S),
    (E::SimpleContent, K::SimpleContent, S),
    (E::ComplexContent, K::ComplexContent, S),
    (E::Group, K::GroupRef, S),
    (E::All, K::All, S),
    (E::Choice, K::Choice, S),
    (E::Sequence, K::Sequence, S),
    (E::Attribute, K::LocalAttribute, R),
    (E::AttributeGroup, K::AttributeGroupRef, R),
    (E::AnyAttribute, K::AnyAttribute, S),
];

const SIMPLE_CONTENT_CHILDREN: &[ChildRow] = &[
    (E::Annotation, K::Annotation, S),
    (E::Restriction, K::SimpleContentRestriction, S),
    (E::Extension, K::SimpleContentExtension, S),
];

const COMPLEX_CONTENT_CHILDREN: &[ChildRow] = &[
    (E::Annotation, K::Annotation, S),
    (E::Restriction, K::ComplexContentRestriction, S),
    (E::Extension, K::ComplexContentExtension, S),
];

const SIMPLE_CONTENT_RESTRICTION_CHILDREN: &[ChildRow] = &[
    (E::Annotation, K::Annotation, S),
    (E::SimpleType, K::LocalSimpleType, S),
    (E::MinExclusive, K::MinExclusive, R),
    (E::MinInclusive, K::MinInclusive, R),
    (E::MaxExclusive, K::MaxExclusive, R),
    (E::MaxInclusive, K::MaxInclusive, R),
    (E::TotalDigits, K::TotalDigits, R),
    (E::FractionDigits, K::FractionDigits, R),
    (E::Length, K::Length, R),
    (E::MinLength, K::MinLength, R),
    (E::MaxLength, K::MaxLength, R),
    (E::Enumeration, K::Enumeration, R),
    (E::WhiteSpace, K::WhiteSpace, R),
    (E::Pattern, K::Pattern, R),
    (E::Attribute, K::LocalAttribute, R),
    (E::AttributeGroup, K::AttributeGroupRef, R),
    (E::AnyAttribute, K::AnyAttribute, S),
];

const SIMPLE_CONTENT_EXTENSION_CHILDREN: &[ChildRow] = &[
    (E::Annotation, K::Annotation, S),
    (E::Attribute, K::LocalAttribute, R),
    (E::AttributeGroup, K::AttributeGroupRef, R),
    (E::AnyAttribute, K::AnyAttribute, S),
];

const COMPLEX_DERIVATION_CHILDREN: &[ChildRow] = &[
    (E::Annotation, K::Annotation, S),
    (E::Group, K::GroupRef, S),
    (E::All, K::All, S),
    (E::Choice, K::Choice, S),
    (E::Sequence, K::Sequence, S),
    (E::Attribute, K::LocalAttribute, R),
    (E::AttributeGroup, K::AttributeGroupRef, R),
    (E::AnyAttribute, K::AnyAttribute, S),
];

const ATTRIBUTE_CHILDREN: &[ChildRow] = &[
    (E::Annotation, K::Annotation, S),
    (E::SimpleType, K::LocalSimpleType, S),
];

const ATTRIBUTE_GROUP_CHILDREN: &[ChildRow] = &[
    (E::Annotation, K::Annotation, S),
    (E::Attribute, K::LocalAttribute, R),
    (E::AttributeGroup, K::AttributeGroupRef, R),
    (E::AnyAttribute, K::AnyAttribute, S),
];

const ELEMENT_CHILDREN: &[ChildRow] = &[
    (E::Annotation, K::Annotation, S),
    (E::SimpleType, K::LocalSimpleType, S),
    (E::ComplexType, K::LocalComplexType, S),
    (E::Unique, K::Unique, R),
    (E::Key, K::Key, R),
    (E::Keyref, K::Keyref, R),
];

const NAMED_GROUP_CHILDREN: &[ChildRow] = &[
    (E::Annotation, K::Annotation, S),
    (E::All, K::GroupDefinitionAll, S),
    (E::Choice, K::GroupDefinitionChoice, S),
    (E::Sequence, K::GroupDefinitionSequence, S),
];

const ALL_CHILDREN: &[ChildRow] = &[
    (E::Annotation, K::Annotation, S),
    (E::Element, K::LocalElement, R),
];

const EXPLICIT_GROUP_CHILDREN: &[ChildRow] = &[
    (E::Annotation, K::Annotation, S),
    (E::Element, K::LocalElement, R),
    (E::Group, K::GroupRef, R),
    (E::Choice, K::Choice, R),
    (E::Sequence, K::Sequence, R),
    (E::Any, K::Any, R),
];

const IDENTITY_CONSTRAINT_CHILDREN: &[ChildRow] = &[
    (E::Annotation, K::Annotation, S),
    (E::Selector, K::Selector, S),
    (E::Field, K::Field, R),
];

impl ElementKind {
    /// Every kind tag
    pub const ALL: [ElementKind; 54] = [
        K::Schema,
        K::Annotation,
        K::Appinfo,
        K::Documentation,
        K::Import,
        K::Include,
        K::Redefine,
        K::Notation,
        K::TopLevelSimpleType,
        K::LocalSimpleType,
        K::SimpleRestriction,
        K::List,
        K::Union,
        K::TopLevelComplexType,
        K::LocalComplexType,
        K::SimpleContent,
        K::ComplexContent,
        K::SimpleContentRestriction,
        K::SimpleContentExtension,
        K::ComplexContentRestriction,
        K::ComplexContentExtension,
        K::TopLevelAttribute,
        K::LocalAttribute,
        K::NamedAttributeGroup,
        K::AttributeGroupRef,
        K::TopLevelElement,
        K::LocalElement,
        K::NamedGroup,
        K::GroupRef,
        K::All,
        K::Choice,
        K::Sequence,
        K::GroupDefinitionAll,
        K::GroupDefinitionChoice,
        K::GroupDefinitionSequence,
        K::Any,
        K::AnyAttribute,
        K::MinExclusive,
        K::MinInclusive,
        K::MaxExclusive,
        K::MaxInclusive,
        K::TotalDigits,
        K::FractionDigits,
        K::Length,
        K::MinLength,
        K::MaxLength,
        K::Enumeration,
        K::WhiteSpace,
        K::Pattern,
        K::Unique,
        K::Key,
        K::Keyref,
        K::Selector,
        K::Field,
    ];

    /// The element name this kind is written as
    pub fn element_name(&self) -> ElementName {
        match self {
            K::Schema => E::Schema,
            K::Annotation => E::Annotation,
            K::Appinfo => E::Appinfo,
            K::Documentation => E::Documentation,
            K::Import => E::Import,
            K::Include => E::Include,
            K::Redefine => E::Redefine,
            K::Notation => E::Notation,
            K::TopLevelSimpleType | K::LocalSimpleType => E::SimpleType,
            K::SimpleRestriction
            | K::SimpleContentRestriction
            | K::ComplexContentRestriction => E::Restriction,
            K::List => E::List,
            K::Union => E::Union,
            K::TopLevelComplexType | K::LocalComplexType => E::ComplexType,
            K::SimpleContent => E::SimpleContent,
            K::ComplexContent => E::ComplexContent,
            K::SimpleContentExtension | K::ComplexContentExtension => E::Extension,
            K::TopLevelAttribute | K::LocalAttribute => E::Attribute,
            K::NamedAttributeGroup | K::AttributeGroupRef => E::AttributeGroup,
            K::TopLevelElement | K::LocalElement => E::Element,
            K::NamedGroup | K::GroupRef => E::Group,
            K::All | K::GroupDefinitionAll => E::All,
            K::Choice | K::GroupDefinitionChoice => E::Choice,
            K::Sequence | K::GroupDefinitionSequence => E::Sequence,
            K::Any => E::Any,
            K::AnyAttribute => E::AnyAttribute,
            K::MinExclusive => E::MinExclusive,
            K::MinInclusive => E::MinInclusive,
            K::MaxExclusive => E::MaxExclusive,
            K::MaxInclusive => E::MaxInclusive,
            K::TotalDigits => E::TotalDigits,
            K::FractionDigits => E::FractionDigits,
            K::Length => E::Length,
            K::MinLength => E::MinLength,
            K::MaxLength => E::MaxLength,
            K::Enumeration => E::Enumeration,
            K::WhiteSpace => E::WhiteSpace,
            K::Pattern => E::Pattern,
            K::Unique => E::Unique,
            K::Key => E::Key,
            K::Keyref => E::Keyref,
            K::Selector => E::Selector,
            K::Field => E::Field,
        }
    }

    /// Legal attributes and their datatypes while this kind is current
    pub fn attributes(&self) -> &'static [(AttributeName, ValueType)] {
        match self {
            K::Schema => SCHEMA_ATTRS,
            K::Appinfo => APPINFO_ATTRS,
            K::Documentation => DOCUMENTATION_ATTRS,
            K::Import => IMPORT_ATTRS,
            K::Include | K::Redefine => INCLUDE_ATTRS,
            K::Notation => NOTATION_ATTRS,
            K::TopLevelSimpleType => TOP_LEVEL_SIMPLE_TYPE_ATTRS,
            K::SimpleRestriction
            | K::SimpleContentRestriction
            | K::SimpleContentExtension
            | K::ComplexContentRestriction
            | K::ComplexContentExtension => BASE_ATTRS,
            K::List => LIST_ATTRS,
            K::Union => UNION_ATTRS,
            K::TopLevelComplexType => TOP_LEVEL_COMPLEX_TYPE_ATTRS,
            K::LocalComplexType | K::ComplexContent => MIXED_ATTRS,
            K::TopLevelAttribute => TOP_LEVEL_ATTRIBUTE_ATTRS,
            K::LocalAttribute => LOCAL_ATTRIBUTE_ATTRS,
            K::NamedAttributeGroup | K::NamedGroup | K::Unique | K::Key => NAMED_ATTRS,
            K::AttributeGroupRef => REF_ATTRS,
            K::TopLevelElement => TOP_LEVEL_ELEMENT_ATTRS,
            K::LocalElement => LOCAL_ELEMENT_ATTRS,
            K::GroupRef => GROUP_REF_ATTRS,
            K::All => ALL_ATTRS,
            K::Choice | K::Sequence => EXPLICIT_GROUP_ATTRS,
            K::Any => ANY_ATTRS,
            K::AnyAttribute => ANY_ATTRIBUTE_ATTRS,
            K::MinExclusive | K::MinInclusive | K::MaxExclusive | K::MaxInclusive => {
                RANGE_FACET_ATTRS
            }
            K::TotalDigits => TOTAL_DIGITS_ATTRS,
            K::FractionDigits | K::Length | K::MinLength | K::MaxLength => COUNT_FACET_ATTRS,
            K::Enumeration | K::Pattern => VALUE_FACET_ATTRS,
            K::WhiteSpace => WHITE_SPACE_ATTRS,
            K::Keyref => KEYREF_ATTRS,
            K::Selector => SELECTOR_ATTRS,
            K::Field => FIELD_ATTRS,
            K::Annotation
            | K::LocalSimpleType
            | K::SimpleContent
            | K::GroupDefinitionAll
            | K::GroupDefinitionChoice
            | K::GroupDefinitionSequence => ID_ONLY,
        }
    }

    /// Legal child elements, the kind each creates, and how often each may appear
    pub fn children(&self) -> &'static [(ElementName, ElementKind, Cardinality)] {
        match self {
            K::Schema => SCHEMA_CHILDREN,
            K::Annotation => ANNOTATION_CHILDREN,
            K::Appinfo | K::Documentation => NO_CHILDREN,
            K::Redefine => REDEFINE_CHILDREN,
            K::TopLevelSimpleType | K::LocalSimpleType => SIMPLE_TYPE_CHILDREN,
            K::SimpleRestriction => SIMPLE_RESTRICTION_CHILDREN,
            K::List => LIST_CHILDREN,
            K::Union => UNION_CHILDREN,
            K::TopLevelComplexType | K::LocalComplexType => COMPLEX_TYPE_CHILDREN,
            K::SimpleContent => SIMPLE_CONTENT_CHILDREN,
            K::ComplexContent => COMPLEX_CONTENT_CHILDREN,
            K::SimpleContentRestriction => SIMPLE_CONTENT_RESTRICTION_CHILDREN,
            K::SimpleContentExtension => SIMPLE_CONTENT_EXTENSION_CHILDREN,
            K::ComplexContentRestriction | K::ComplexContentExtension => {
                COMPLEX_DERIVATION_CHILDREN
            }
            K::TopLevelAttribute | K::LocalAttribute => ATTRIBUTE_CHILDREN,
            K::NamedAttributeGroup => ATTRIBUTE_GROUP_CHILDREN,
            K::TopLevelElement | K::LocalElement => ELEMENT_CHILDREN,
            K::NamedGroup => NAMED_GROUP_CHILDREN,
            K::All | K::GroupDefinitionAll => ALL_CHILDREN,
            K::Choice
            | K::Sequence
            | K::GroupDefinitionChoice
            | K::GroupDefinitionSequence => EXPLICIT_GROUP_CHILDREN,
            K::Unique | K::Key | K::Keyref => IDENTITY_CONSTRAINT_CHILDREN,
            K::Import
            | K::Include
            | K::Notation
            | K::AttributeGroupRef
            | K::GroupRef
            | K::Any
            | K::AnyAttribute
            | K::MinExclusive
            | K::MinInclusive
            | K::MaxExclusive
            | K::MaxInclusive
            | K::TotalDigits
            | K::FractionDigits
            | K::Length
            | K::MinLength
            | K::MaxLength
            | K::Enumeration
            | K::WhiteSpace
            | K::Pattern
            | K::Selector
            | K::Field => ANNOTATION_ONLY,
        }
    }

    /// Datatype of an attribute in this context, None when the attribute is illegal here
    pub fn attribute_type(&self, name: AttributeName) -> Option<ValueType> {
        self.attributes()
            .iter()
            .find(|(a, _)| *a == name)
            .map(|(_, t)| *t)
    }

    /// Kind of the child created by `name` in this context, None when illegal here
    pub fn child_kind(&self, name: ElementName) -> Option<ElementKind> {
        self.child_rule(name).map(|(kind, _)| kind)
    }

    /// Kind and cardinality of the child created by `name` in this context
    pub fn child_rule(&self, name: ElementName) -> Option<(ElementKind, Cardinality)> {
        self.children()
            .iter()
            .find(|(e, _, _)| *e == name)
            .map(|(_, kind, card)| (*kind, *card))
    }

    /// Check if the kind holds text content
    pub fn is_leaf(&self) -> bool {
        matches!(self, K::Appinfo | K::Documentation)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_name_round_trip() {
        for name in ElementName::ALL {
            assert_eq!(ElementName::from_local_name(name.as_str()), Some(name));
        }
        assert_eq!(ElementName::from_local_name("redefine"), Some(E::Redefine));
        assert_eq!(ElementName::from_local_name("assert"), None);
    }

    #[test]
    fn test_attribute_name_lookup() {
        assert_eq!(AttributeName::from_local_name("minOccurs"), Some(A::MinOccurs));
        assert_eq!(AttributeName::from_local_name("lang"), None);
        assert_eq!(A::Lang.to_string(), "xml:lang");
        assert_eq!(A::Xpath.to_string(), "xpath");
    }

    #[test]
    fn test_every_kind_listed_once() {
        let mut seen = std::collections::HashSet::new();
        for kind in ElementKind::ALL {
            assert!(seen.insert(kind), "{:?} listed twice", kind);
        }
    }

    #[test]
    fn test_context_flavors() {
        assert_eq!(K::Schema.child_kind(E::ComplexType), Some(K::TopLevelComplexType));
        assert_eq!(K::TopLevelElement.child_kind(E::ComplexType), Some(K::LocalComplexType));
        assert_eq!(K::SimpleContent.child_kind(E::Restriction), Some(K::SimpleContentRestriction));
        assert_eq!(K::ComplexContent.child_kind(E::Extension), Some(K::ComplexContentExtension));
        assert_eq!(K::NamedGroup.child_kind(E::All), Some(K::GroupDefinitionAll));
        assert_eq!(K::TopLevelComplexType.child_kind(E::All), Some(K::All));
        assert_eq!(K::Sequence.child_kind(E::Group), Some(K::GroupRef));
        assert_eq!(K::Schema.child_kind(E::Group), Some(K::NamedGroup));
    }

    #[test]
    fn test_illegal_children() {
        assert_eq!(K::Schema.child_kind(E::Schema), None);
        assert_eq!(K::Schema.child_kind(E::Sequence), None);
        assert_eq!(K::Documentation.child_kind(E::Annotation), None);
        assert_eq!(K::All.child_kind(E::Choice), None);
        assert_eq!(K::SimpleContentExtension.child_kind(E::Sequence), None);
    }

    #[test]
    fn test_occurs_types_depend_on_context() {
        assert_eq!(K::All.attribute_type(A::MaxOccurs), Some(T::AllMaxOccurs));
        assert_eq!(K::Choice.attribute_type(A::MaxOccurs), Some(T::MaxOccurs));
        assert_eq!(K::GroupDefinitionChoice.attribute_type(A::MaxOccurs), None);
        assert_eq!(K::TopLevelElement.attribute_type(A::MinOccurs), None);
        assert_eq!(K::LocalElement.attribute_type(A::MinOccurs), Some(T::MinOccurs));
    }

    #[test]
    fn test_value_types_depend_on_context() {
        assert_eq!(K::Length.attribute_type(A::Value), Some(T::NonNegativeInteger));
        assert_eq!(K::TotalDigits.attribute_type(A::Value), Some(T::PositiveInteger));
        assert_eq!(K::MinInclusive.attribute_type(A::Value), Some(T::AnySimpleType));
        assert_eq!(K::WhiteSpace.attribute_type(A::Value), Some(T::WhiteSpace));
        assert_eq!(K::Enumeration.attribute_type(A::Fixed), None);
        assert_eq!(K::Import.attribute_type(A::Namespace), Some(T::AnyUri));
        assert_eq!(K::Any.attribute_type(A::Namespace), Some(T::NamespaceList));
    }

    #[test]
    fn test_leaf_kinds() {
        assert!(K::Appinfo.is_leaf());
        assert!(K::Documentation.is_leaf());
        assert!(!K::Annotation.is_leaf());
        assert!(K::Appinfo.children().is_empty());
    }

    #[test]
    fn test_cardinality() {
        assert_eq!(K::Union.child_rule(E::SimpleType), Some((K::LocalSimpleType, R)));
        assert_eq!(K::List.child_rule(E::SimpleType), Some((K::LocalSimpleType, S)));
    }

    #[test]
    fn test_element_names_match_parents() {
        for parent in ElementKind::ALL {
            for (name, kind, _) in parent.children() {
                assert_eq!(kind.element_name(), *name, "{:?} under {:?}", kind, parent);
            }
        }
    }
}
