//! Resource limits applied by the schema reader
//!
//! The builder accepts whatever it is driven with; these limits only guard
//! [`SchemaReader`](crate::SchemaReader) against oversized or hostile input.
//! Every violation is fatal, whatever the read mode.

use crate::error::{Error, Result};

/// Reader limits configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum element nesting depth, counting foreign and skipped elements
    pub max_xml_depth: usize,

    /// Maximum document size in bytes
    pub max_xml_size: usize,

    /// Maximum number of attributes on one element, namespace declarations excluded
    pub max_attributes: usize,

    /// Maximum number of namespace declarations on one element
    pub max_namespaces: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_xml_depth: 1000,
            max_xml_size: 100 * 1024 * 1024, // 100 MB
            max_attributes: 1000,
            max_namespaces: 1000,
        }
    }
}

fn exceeded(what: &str, found: usize, max: usize) -> Result<()> {
    if found > max {
        Err(Error::LimitExceeded(format!(
            "{} {} exceeds maximum {}",
            what, found, max
        )))
    } else {
        Ok(())
    }
}

impl Limits {
    /// Default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Tighter limits for schemas from untrusted sources
    pub fn strict() -> Self {
        Self {
            max_xml_depth: 100,
            max_xml_size: 10 * 1024 * 1024,
            max_attributes: 100,
            max_namespaces: 100,
        }
    }

    /// Looser limits for large generated schemas
    pub fn permissive() -> Self {
        Self {
            max_xml_depth: 10_000,
            max_xml_size: 1024 * 1024 * 1024,
            max_attributes: 10_000,
            max_namespaces: 10_000,
        }
    }

    /// Check an element nesting depth
    pub fn check_xml_depth(&self, depth: usize) -> Result<()> {
        exceeded("XML depth", depth, self.max_xml_depth)
    }

    /// Check a document size in bytes
    pub fn check_xml_size(&self, size: usize) -> Result<()> {
        exceeded("XML size in bytes", size, self.max_xml_size)
    }

    /// Check the attribute count of one element
    pub fn check_attributes(&self, count: usize) -> Result<()> {
        exceeded("Attribute count", count, self.max_attributes)
    }

    /// Check the namespace declaration count of one element
    pub fn check_namespaces(&self, count: usize) -> Result<()> {
        exceeded("Namespace declaration count", count, self.max_namespaces)
    }
}
