//! Datatype value parsers
//!
//! Pure functions turning a raw attribute literal into a typed value or a
//! [`LexicalError`]. Which parser applies is decided by the kind table from
//! the pair (element kind, attribute name), never by the attribute name alone.

pub mod enumerations;
pub mod occurs;
pub mod simple;
pub mod xpath;

use num_bigint::BigUint;
use serde::Serialize;

use crate::error::LexicalError;
use crate::namespaces::QName;

pub use enumerations::{
    AttributeUse, DerivationMethod, DerivationSet, Form, NamespaceItem, NamespaceList,
    ProcessContents, WhiteSpace,
};
pub use occurs::MaxOccurs;
pub use simple::AnyUri;
pub use xpath::{NameTest, PathStep, PathStepKind, XPathExpr, XPathPath};

/// Datatype selector used by the kind table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// xs:anySimpleType / xs:string, stored verbatim
    AnySimpleType,
    /// xs:token
    Token,
    /// xs:boolean
    Boolean,
    /// xs:ID
    Id,
    /// xs:NCName
    NcName,
    /// xs:anyURI
    AnyUri,
    /// xs:QName
    QName,
    /// whitespace-separated list of xs:QName
    QNameList,
    /// xs:language
    Language,
    /// xs:nonNegativeInteger
    NonNegativeInteger,
    /// xs:positiveInteger
    PositiveInteger,
    /// minOccurs on most particles
    MinOccurs,
    /// maxOccurs on most particles
    MaxOccurs,
    /// minOccurs on an `all` model group ("0" or "1")
    AllMinOccurs,
    /// maxOccurs on an `all` model group ("1")
    AllMaxOccurs,
    /// qualified | unqualified
    Form,
    /// optional | required | prohibited
    Use,
    /// strict | lax | skip
    ProcessContents,
    /// preserve | replace | collapse
    WhiteSpace,
    /// #all | list of (extension | restriction | substitution)
    BlockSet,
    /// #all | list of (extension | restriction)
    DerivationSet,
    /// #all | list of (extension | restriction | list | union)
    FullDerivationSet,
    /// #all | list of (list | union | restriction)
    SimpleDerivationSet,
    /// ##any | ##other | list of (anyURI | ##targetNamespace | ##local)
    NamespaceList,
    /// restricted XPath of `selector`
    SelectorXPath,
    /// restricted XPath of `field`
    FieldXPath,
}

impl ValueType {
    /// Datatype name used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            Self::AnySimpleType => "anySimpleType",
            Self::Token => "token",
            Self::Boolean => "boolean",
            Self::Id => "ID",
            Self::NcName => "NCName",
            Self::AnyUri => "anyURI",
            Self::QName => "QName",
            Self::QNameList => "QName list",
            Self::Language => "language",
            Self::NonNegativeInteger => "nonNegativeInteger",
            Self::PositiveInteger => "positiveInteger",
            Self::MinOccurs | Self::AllMinOccurs => "minOccurs",
            Self::MaxOccurs | Self::AllMaxOccurs => "maxOccurs",
            Self::Form => "form",
            Self::Use => "use",
            Self::ProcessContents => "processContents",
            Self::WhiteSpace => "whiteSpace",
            Self::BlockSet => "blockSet",
            Self::DerivationSet => "derivationSet",
            Self::FullDerivationSet => "fullDerivationSet",
            Self::SimpleDerivationSet => "simpleDerivationSet",
            Self::NamespaceList => "namespaceList",
            Self::SelectorXPath => "selector XPath",
            Self::FieldXPath => "field XPath",
        }
    }

    /// Parse a raw literal into the typed value for this datatype
    pub fn parse(&self, raw: &str) -> Result<AttributeValue, LexicalError> {
        use AttributeValue as V;

        let value = match self {
            Self::AnySimpleType => V::String(raw.to_string()),
            Self::Token => V::String(collapse(raw)),
            Self::Boolean => V::Boolean(simple::parse_boolean(raw)?),
            Self::Id => V::String(simple::parse_id(raw)?),
            Self::NcName => V::String(simple::parse_ncname(raw)?),
            Self::AnyUri => V::AnyUri(simple::parse_any_uri(raw)?),
            Self::QName => V::QName(simple::parse_qname(raw)?),
            Self::QNameList => V::QNameList(simple::parse_qname_list(raw)?),
            Self::Language => V::String(simple::parse_language(raw)?),
            Self::NonNegativeInteger => V::Integer(simple::parse_non_negative_integer(raw)?),
            Self::PositiveInteger => V::Integer(simple::parse_positive_integer(raw)?),
            Self::MinOccurs => V::Integer(occurs::parse_min_occurs(raw)?),
            Self::MaxOccurs => V::MaxOccurs(occurs::parse_max_occurs(raw)?),
            Self::AllMinOccurs => V::Integer(occurs::parse_all_min_occurs(raw)?),
            Self::AllMaxOccurs => V::MaxOccurs(occurs::parse_all_max_occurs(raw)?),
            Self::Form => V::Form(Form::parse(raw)?),
            Self::Use => V::Use(AttributeUse::parse(raw)?),
            Self::ProcessContents => V::ProcessContents(ProcessContents::parse(raw)?),
            Self::WhiteSpace => V::WhiteSpace(WhiteSpace::parse(raw)?),
            Self::BlockSet => V::DerivationSet(DerivationSet::parse_block_set(raw)?),
            Self::DerivationSet => V::DerivationSet(DerivationSet::parse_derivation_set(raw)?),
            Self::FullDerivationSet => {
                V::DerivationSet(DerivationSet::parse_full_derivation_set(raw)?)
            }
            Self::SimpleDerivationSet => {
                V::DerivationSet(DerivationSet::parse_simple_derivation_set(raw)?)
            }
            Self::NamespaceList => V::NamespaceList(NamespaceList::parse(raw)?),
            Self::SelectorXPath => V::XPath(XPathExpr::parse_selector(raw)?),
            Self::FieldXPath => V::XPath(XPathExpr::parse_field(raw)?),
        };
        Ok(value)
    }
}

/// A parsed attribute value, ready to be stored in a component slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Verbatim or normalized text (string, token, ID, NCName, language)
    String(String),
    /// xs:boolean
    Boolean(bool),
    /// xs:anyURI
    AnyUri(AnyUri),
    /// xs:QName
    QName(QName),
    /// list of xs:QName
    QNameList(Vec<QName>),
    /// non-negative or positive integer
    Integer(BigUint),
    /// occurrence limit
    MaxOccurs(MaxOccurs),
    /// form choice
    Form(Form),
    /// attribute use
    Use(AttributeUse),
    /// wildcard processing mode
    ProcessContents(ProcessContents),
    /// whiteSpace facet value
    WhiteSpace(WhiteSpace),
    /// block/final set
    DerivationSet(DerivationSet),
    /// wildcard namespace constraint
    NamespaceList(NamespaceList),
    /// selector/field expression
    XPath(XPathExpr),
}

/// Apply the XSD `collapse` whitespace normalization
pub fn collapse(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_space = true; // Start with true to trim leading spaces

    for c in s.chars() {
        if matches!(c, ' ' | '\t' | '\n' | '\r') {
            if !prev_space {
                result.push(' ');
                prev_space = true;
            }
        } else {
            result.push(c);
            prev_space = false;
        }
    }

    if result.ends_with(' ') {
        result.pop();
    }
    result
}

/// Apply the XSD `replace` whitespace normalization
pub fn replace(s: &str) -> String {
    s.replace(['\t', '\n', '\r'], " ")
}
