//! # xmlschema-dom
//!
//! Builds the in-memory object model of an XML Schema 1.0 document from a
//! stream of start-element / attribute / text / end-element calls.
//!
//! The [`SchemaBuilder`] is a state machine keyed on the kind of the element
//! currently open. Each kind allows a fixed set of attributes and children:
//!
//! - an attribute or child that is not allowed there is silently ignored,
//!   and its value is never looked at;
//! - an allowed attribute whose value does not match its datatype is
//!   rejected with a [`LexicalError`] and the tree is left unchanged.
//!
//! [`SchemaReader`] feeds the builder from XSD text with quick-xml.
//!
//! ## Example
//!
//! ```rust
//! use xmlschema_dom::{ElementKind, SchemaBuilder};
//!
//! let mut builder = SchemaBuilder::new();
//! builder.bind_namespace("xs", xmlschema_dom::XSD_NAMESPACE)?;
//! builder.build_complex_type_element();
//! builder.build_name_attribute("  PurchaseOrder ")?;
//! builder.build_all_element();
//! assert!(builder.build_max_occurs_attribute("2").is_err());
//! builder.end_element();
//! builder.end_element();
//!
//! let schema = builder.finish();
//! let complex_type = schema.root().child(0).unwrap();
//! assert_eq!(complex_type.kind(), ElementKind::TopLevelComplexType);
//! assert_eq!(
//!     complex_type.as_complex_type().unwrap().name.as_deref(),
//!     Some("PurchaseOrder")
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builder;
pub mod datatypes;
pub mod dom;
pub mod error;
pub mod limits;
pub mod names;
pub mod namespaces;
pub mod reader;

pub use builder::SchemaBuilder;
pub use datatypes::{AttributeValue, ValueType};
pub use dom::{AttributeName, Component, ElementKind, ElementName, NodeId, NodeRef, Schema};
pub use error::{Error, LexicalError, NamespaceBindingError, NamespaceViolation, Result};
pub use limits::Limits;
pub use namespaces::{NamespaceTable, QName};
pub use reader::{ReadMode, ReadReport, SchemaReader};

/// Version of the xmlschema-dom library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// XSD 1.0 namespace
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";

/// XML namespace
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// XMLNS namespace
pub const XMLNS_NAMESPACE: &str = "http://www.w3.org/2000/xmlns/";
