//! Annotation components
//!
//! `appinfo` and `documentation` are the only kinds carrying text content.
//! Their content is stored verbatim, and a later write replaces an earlier one.

use serde::Serialize;

use crate::datatypes::AnyUri;

/// An `xs:annotation`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnnotationDecl {
    /// id
    pub id: Option<String>,
}

impl_attribute_slots!(AnnotationDecl {
    id: Id => String,
});

/// An `xs:appinfo`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AppinfoDecl {
    /// source
    pub source: Option<AnyUri>,
    /// Text content
    pub content: String,
}

impl_attribute_slots!(AppinfoDecl {
    source: Source => AnyUri,
});

/// An `xs:documentation`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentationDecl {
    /// source
    pub source: Option<AnyUri>,
    /// xml:lang
    pub lang: Option<String>,
    /// Text content
    pub content: String,
}

impl_attribute_slots!(DocumentationDecl {
    source: Source => AnyUri,
    lang: Lang => String,
});
