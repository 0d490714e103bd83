//! Error types for xmlschema-dom
//!
//! The builder raises exactly two kinds of error: a [`LexicalError`] when an
//! attribute value does not match its datatype, and a [`NamespaceBindingError`]
//! when a namespace declaration violates the reserved-prefix rules. Everything
//! else that goes wrong while driving the builder from XML text is reported
//! through the crate-wide [`Error`].

use std::fmt;
use thiserror::Error;

/// Result type alias using the crate-wide Error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for xmlschema-dom operations
#[derive(Error, Debug)]
pub enum Error {
    /// Attribute or content value failed its datatype grammar
    #[error("lexical error: {0}")]
    Lexical(#[from] LexicalError),

    /// Illegal namespace declaration
    #[error("namespace error: {0}")]
    NamespaceBinding(#[from] NamespaceBindingError),

    /// Limit exceeded error
    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// XML tokenizer error
    #[error("XML error: {0}")]
    Xml(String),

    /// JSON export error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A raw value rejected by a datatype parser.
///
/// The tree is left untouched whenever this error is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexicalError {
    /// The whitespace-collapsed literal that was rejected
    pub value: String,
    /// Name of the datatype the literal was checked against
    pub datatype: String,
    /// Full error message
    pub message: String,
}

impl LexicalError {
    /// `"<value>" is an invalid <datatype> datatype.`
    pub fn invalid(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        let value = value.into();
        let datatype = datatype.into();
        let message = format!("\"{}\" is an invalid {} datatype.", value, datatype);
        Self {
            value,
            datatype,
            message,
        }
    }

    /// `"<value>" is an invalid non-negative integer limit type.`
    pub fn invalid_limit(value: impl Into<String>) -> Self {
        let value = value.into();
        let message = format!(
            "\"{}\" is an invalid non-negative integer limit type.",
            value
        );
        Self {
            value,
            datatype: "non-negative integer limit".to_string(),
            message,
        }
    }

    /// `"<value>" is invalid, expected "a" or "b".`
    pub fn unexpected(value: impl Into<String>, datatype: &str, expected: &[&str]) -> Self {
        let value = value.into();
        let expected = expected
            .iter()
            .map(|e| format!("\"{}\"", e))
            .collect::<Vec<_>>()
            .join(" or ");
        let message = format!("\"{}\" is invalid, expected {}.", value, expected);
        Self {
            value,
            datatype: datatype.to_string(),
            message,
        }
    }
}

impl fmt::Display for LexicalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for LexicalError {}

/// Which namespace reservation rule a declaration broke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamespaceViolation {
    /// The `xmlns` prefix can never be declared
    ReservedXmlnsPrefix,
    /// The XML namespace was bound to a prefix other than `xml`
    XmlNamespaceMisbound,
    /// The `xml` prefix was bound to a namespace other than the XML namespace
    XmlPrefixMisbound,
    /// The XMLNS namespace can never be bound
    XmlnsNamespace,
}

/// Illegal `bindNamespace` call. The namespace table is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceBindingError {
    /// Prefix of the rejected declaration (empty for the default namespace)
    pub prefix: String,
    /// Namespace URI of the rejected declaration
    pub uri: String,
    /// The rule that was broken
    pub violation: NamespaceViolation,
}

impl NamespaceBindingError {
    /// Create a new namespace binding error
    pub fn new(
        prefix: impl Into<String>,
        uri: impl Into<String>,
        violation: NamespaceViolation,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            uri: uri.into(),
            violation,
        }
    }
}

impl fmt::Display for NamespaceBindingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.violation {
            NamespaceViolation::ReservedXmlnsPrefix => write!(
                f,
                "The \"xmlns\" prefix is reserved and cannot be bound to \"{}\".",
                self.uri
            ),
            NamespaceViolation::XmlNamespaceMisbound => write!(
                f,
                "The \"{}\" namespace can only be bound to the \"xml\" prefix, \"{}\" given.",
                self.uri, self.prefix
            ),
            NamespaceViolation::XmlPrefixMisbound => write!(
                f,
                "The \"xml\" prefix can only be bound to the \"{}\" namespace, \"{}\" given.",
                crate::XML_NAMESPACE,
                self.uri
            ),
            NamespaceViolation::XmlnsNamespace => write!(
                f,
                "The \"{}\" namespace cannot be bound to any prefix, \"{}\" given.",
                self.uri, self.prefix
            ),
        }
    }
}

impl std::error::Error for NamespaceBindingError {}
