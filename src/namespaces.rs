//! XML namespace handling
//!
//! This module provides the per-element namespace declaration table and the
//! unresolved qualified names (QNames) stored in schema attributes.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{NamespaceBindingError, NamespaceViolation};
use crate::{XMLNS_NAMESPACE, XML_NAMESPACE};

/// XML Namespace URI
pub type NamespaceUri = String;

/// Namespace prefix (empty for the default namespace)
pub type Prefix = String;

/// Qualified name as written in a schema attribute, prefix left unresolved
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct QName {
    /// Namespace prefix (None when the name is unprefixed)
    pub prefix: Option<Prefix>,
    /// Local name
    pub local_name: String,
}

impl QName {
    /// Create a new QName
    pub fn new(prefix: Option<impl Into<String>>, local_name: impl Into<String>) -> Self {
        Self {
            prefix: prefix.map(|s| s.into()),
            local_name: local_name.into(),
        }
    }

    /// Create a QName without a prefix
    pub fn local(local_name: impl Into<String>) -> Self {
        Self {
            prefix: None,
            local_name: local_name.into(),
        }
    }

    /// Create a prefixed QName
    pub fn prefixed(prefix: impl Into<String>, local_name: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
            local_name: local_name.into(),
        }
    }
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.prefix {
            Some(prefix) => write!(f, "{}:{}", prefix, self.local_name),
            None => write!(f, "{}", self.local_name),
        }
    }
}

/// Namespace declarations made on a single schema element.
///
/// Lookups never fall back to ancestors: a table only knows what was
/// declared on its own element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NamespaceTable {
    bindings: IndexMap<Prefix, NamespaceUri>,
}

impl NamespaceTable {
    /// Create a new empty namespace table
    pub fn new() -> Self {
        Self::default()
    }

    /// Check a declaration against the reserved prefix/namespace rules
    pub fn check(prefix: &str, uri: &str) -> Result<(), NamespaceBindingError> {
        let violation = if prefix == "xmlns" {
            Some(NamespaceViolation::ReservedXmlnsPrefix)
        } else if uri == XML_NAMESPACE && prefix != "xml" {
            Some(NamespaceViolation::XmlNamespaceMisbound)
        } else if prefix == "xml" && uri != XML_NAMESPACE {
            Some(NamespaceViolation::XmlPrefixMisbound)
        } else if uri == XMLNS_NAMESPACE {
            Some(NamespaceViolation::XmlnsNamespace)
        } else {
            None
        };

        match violation {
            Some(violation) => Err(NamespaceBindingError::new(prefix, uri, violation)),
            None => Ok(()),
        }
    }

    /// Bind a prefix, replacing any earlier binding of the same prefix
    pub fn bind(
        &mut self,
        prefix: impl Into<String>,
        uri: impl Into<String>,
    ) -> Result<(), NamespaceBindingError> {
        let prefix = prefix.into();
        let uri = uri.into();
        Self::check(&prefix, &uri)?;
        self.bindings.insert(prefix, uri);
        Ok(())
    }

    /// Get the namespace bound to a prefix on this element
    pub fn get(&self, prefix: &str) -> Option<&str> {
        self.bindings.get(prefix).map(|s| s.as_str())
    }

    /// Get the default namespace declared on this element
    pub fn default_namespace(&self) -> Option<&str> {
        self.get("")
    }

    /// Iterate over all declarations
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.bindings.iter().map(|(p, u)| (p.as_str(), u.as_str()))
    }

    /// Number of declarations
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if nothing was declared
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
