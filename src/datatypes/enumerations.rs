//! Enumerated schema attribute values
//!
//! Form, use, processContents, whiteSpace, block/final derivation sets and
//! wildcard namespace lists.

use std::fmt;

use serde::Serialize;

use super::collapse;
use super::simple::{parse_any_uri, AnyUri};
use crate::error::LexicalError;

/// Form for local element and attribute declarations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Form {
    /// Name is qualified with the target namespace
    Qualified,
    /// Name has no namespace
    Unqualified,
}

impl Form {
    /// Parse from attribute value
    pub fn parse(raw: &str) -> Result<Self, LexicalError> {
        let value = collapse(raw);
        match value.as_str() {
            "qualified" => Ok(Self::Qualified),
            "unqualified" => Ok(Self::Unqualified),
            _ => Err(LexicalError::invalid(value, "form")),
        }
    }

    /// Check if qualified
    pub fn is_qualified(&self) -> bool {
        matches!(self, Self::Qualified)
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Qualified => write!(f, "qualified"),
            Self::Unqualified => write!(f, "unqualified"),
        }
    }
}

/// Attribute use mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeUse {
    /// Attribute is optional
    Optional,
    /// Attribute is required
    Required,
    /// Attribute is prohibited
    Prohibited,
}

impl AttributeUse {
    /// Parse from attribute value
    pub fn parse(raw: &str) -> Result<Self, LexicalError> {
        let value = collapse(raw);
        match value.as_str() {
            "optional" => Ok(Self::Optional),
            "required" => Ok(Self::Required),
            "prohibited" => Ok(Self::Prohibited),
            _ => Err(LexicalError::invalid(value, "use")),
        }
    }

    /// Get the use as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Optional => "optional",
            Self::Required => "required",
            Self::Prohibited => "prohibited",
        }
    }
}

impl fmt::Display for AttributeUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Process contents mode for wildcards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessContents {
    /// Element/attribute must be declared
    Strict,
    /// Validate if a declaration is found
    Lax,
    /// No validation
    Skip,
}

impl ProcessContents {
    /// Parse from attribute value
    pub fn parse(raw: &str) -> Result<Self, LexicalError> {
        let value = collapse(raw);
        match value.as_str() {
            "strict" => Ok(Self::Strict),
            "lax" => Ok(Self::Lax),
            "skip" => Ok(Self::Skip),
            _ => Err(LexicalError::invalid(value, "processContents")),
        }
    }
}

impl fmt::Display for ProcessContents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Lax => write!(f, "lax"),
            Self::Skip => write!(f, "skip"),
        }
    }
}

/// White space handling modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WhiteSpace {
    /// Preserve all white space
    Preserve,
    /// Replace tabs and newlines with spaces
    Replace,
    /// Replace and collapse multiple spaces
    Collapse,
}

impl WhiteSpace {
    /// Parse from attribute value
    pub fn parse(raw: &str) -> Result<Self, LexicalError> {
        let value = collapse(raw);
        match value.as_str() {
            "preserve" => Ok(Self::Preserve),
            "replace" => Ok(Self::Replace),
            "collapse" => Ok(Self::Collapse),
            _ => Err(LexicalError::invalid(value, "whiteSpace")),
        }
    }

    /// Normalize a string according to this white space mode
    pub fn normalize(&self, s: &str) -> String {
        match self {
            Self::Preserve => s.to_string(),
            Self::Replace => super::replace(s),
            Self::Collapse => collapse(s),
        }
    }
}

/// A single member of a block or final set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DerivationMethod {
    /// extension
    Extension,
    /// restriction
    Restriction,
    /// substitution (block sets only)
    Substitution,
    /// list (simple type finals)
    List,
    /// union (simple type finals)
    Union,
}

impl DerivationMethod {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "extension" => Some(Self::Extension),
            "restriction" => Some(Self::Restriction),
            "substitution" => Some(Self::Substitution),
            "list" => Some(Self::List),
            "union" => Some(Self::Union),
            _ => None,
        }
    }
}

const BLOCK_SET: &[DerivationMethod] = &[
    DerivationMethod::Extension,
    DerivationMethod::Restriction,
    DerivationMethod::Substitution,
];

const DERIVATION_SET: &[DerivationMethod] =
    &[DerivationMethod::Extension, DerivationMethod::Restriction];

const FULL_DERIVATION_SET: &[DerivationMethod] = &[
    DerivationMethod::Extension,
    DerivationMethod::Restriction,
    DerivationMethod::List,
    DerivationMethod::Union,
];

const SIMPLE_DERIVATION_SET: &[DerivationMethod] = &[
    DerivationMethod::List,
    DerivationMethod::Union,
    DerivationMethod::Restriction,
];

/// Derivation flags for block, final, blockDefault and finalDefault
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DerivationSet {
    /// `#all` was given
    pub all: bool,
    /// Block/final extension derivation
    pub extension: bool,
    /// Block/final restriction derivation
    pub restriction: bool,
    /// Block substitution
    pub substitution: bool,
    /// Final list derivation
    pub list: bool,
    /// Final union derivation
    pub union: bool,
}

impl DerivationSet {
    /// Parse a blockSet (element block, schema blockDefault)
    pub fn parse_block_set(raw: &str) -> Result<Self, LexicalError> {
        Self::parse(raw, BLOCK_SET, "blockSet")
    }

    /// Parse a derivationSet (complex type block/final, element final)
    pub fn parse_derivation_set(raw: &str) -> Result<Self, LexicalError> {
        Self::parse(raw, DERIVATION_SET, "derivationSet")
    }

    /// Parse a fullDerivationSet (schema finalDefault)
    pub fn parse_full_derivation_set(raw: &str) -> Result<Self, LexicalError> {
        Self::parse(raw, FULL_DERIVATION_SET, "fullDerivationSet")
    }

    /// Parse a simpleDerivationSet (simple type final)
    pub fn parse_simple_derivation_set(raw: &str) -> Result<Self, LexicalError> {
        Self::parse(raw, SIMPLE_DERIVATION_SET, "simpleDerivationSet")
    }

    fn parse(
        raw: &str,
        allowed: &[DerivationMethod],
        datatype: &str,
    ) -> Result<Self, LexicalError> {
        let value = collapse(raw);
        let mut result = Self::default();

        if value == "#all" {
            result.all = true;
            for method in allowed {
                result.insert(*method);
            }
            return Ok(result);
        }

        for token in value.split(' ').filter(|t| !t.is_empty()) {
            match DerivationMethod::from_token(token) {
                Some(method) if allowed.contains(&method) => result.insert(method),
                _ => return Err(LexicalError::invalid(value, datatype)),
            }
        }
        Ok(result)
    }

    fn insert(&mut self, method: DerivationMethod) {
        match method {
            DerivationMethod::Extension => self.extension = true,
            DerivationMethod::Restriction => self.restriction = true,
            DerivationMethod::Substitution => self.substitution = true,
            DerivationMethod::List => self.list = true,
            DerivationMethod::Union => self.union = true,
        }
    }

    /// Check if a derivation method is in the set
    pub fn contains(&self, method: DerivationMethod) -> bool {
        match method {
            DerivationMethod::Extension => self.extension,
            DerivationMethod::Restriction => self.restriction,
            DerivationMethod::Substitution => self.substitution,
            DerivationMethod::List => self.list,
            DerivationMethod::Union => self.union,
        }
    }

    /// Check if no flag is set
    pub fn is_empty(&self) -> bool {
        !self.extension && !self.restriction && !self.substitution && !self.list && !self.union
    }
}

/// Member of an enumerated wildcard namespace list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum NamespaceItem {
    /// `##targetNamespace`
    TargetNamespace,
    /// `##local` (no namespace)
    Local,
    /// An explicit namespace
    Uri(AnyUri),
}

/// Namespace constraint for wildcards
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum NamespaceList {
    /// `##any`
    Any,
    /// `##other`
    Other,
    /// Explicit list, possibly empty
    List(Vec<NamespaceItem>),
}

impl NamespaceList {
    /// Parse from a `namespace` attribute value
    pub fn parse(raw: &str) -> Result<Self, LexicalError> {
        let value = collapse(raw);
        match value.as_str() {
            "##any" => return Ok(Self::Any),
            "##other" => return Ok(Self::Other),
            _ => {}
        }

        let mut items = Vec::new();
        for token in value.split(' ').filter(|t| !t.is_empty()) {
            let item = match token {
                "##targetNamespace" => NamespaceItem::TargetNamespace,
                "##local" => NamespaceItem::Local,
                s if s.starts_with("##") => {
                    return Err(LexicalError::invalid(value, "namespaceList"));
                }
                s => match parse_any_uri(s) {
                    Ok(uri) => NamespaceItem::Uri(uri),
                    Err(_) => return Err(LexicalError::invalid(value, "namespaceList")),
                },
            };
            items.push(item);
        }
        Ok(Self::List(items))
    }
}
