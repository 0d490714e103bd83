//! XSD text reader
//!
//! Drives a [`SchemaBuilder`] from XML text with quick-xml. Elements in the
//! XSD namespace become `build_element` calls, `xmlns` declarations become
//! `bind_namespace` calls made before the element's attributes, and text
//! directly inside `appinfo`/`documentation` becomes leaf content. Foreign
//! elements and elements the builder refuses are skipped together with
//! their subtree.

use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;
use tracing::debug;

use crate::builder::SchemaBuilder;
use crate::dom::{AttributeName, ElementName, Schema};
use crate::error::{Error, Result};
use crate::limits::Limits;
use crate::XSD_NAMESPACE;

/// How builder errors are handled while reading
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReadMode {
    /// Stop at the first lexical or namespace error
    #[default]
    Strict,
    /// Record errors and keep reading
    Lax,
}

/// Result of reading a schema document
#[derive(Debug)]
pub struct ReadReport {
    schema: Schema,
    errors: Vec<Error>,
}

impl ReadReport {
    /// The built tree
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Take the built tree
    pub fn into_schema(self) -> Schema {
        self.schema
    }

    /// Errors recorded in lax mode, in document order
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Check if no error was recorded
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Reads XSD documents into schema trees
#[derive(Debug, Clone, Default)]
pub struct SchemaReader {
    limits: Limits,
    mode: ReadMode,
}

impl SchemaReader {
    /// Create a strict reader with default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the resource limits
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Set the error handling mode
    pub fn with_mode(mut self, mode: ReadMode) -> Self {
        self.mode = mode;
        self
    }

    /// Read a schema file
    pub fn read_file(&self, path: impl AsRef<Path>) -> Result<ReadReport> {
        let text = std::fs::read_to_string(path.as_ref())?;
        self.read_str(&text)
    }

    /// Read a schema document held in memory
    pub fn read_str(&self, xml: &str) -> Result<ReadReport> {
        self.limits.check_xml_size(xml.len())?;

        let mut reader = NsReader::from_str(xml);
        reader.trim_text(false);

        let mut state = ReadState {
            builder: SchemaBuilder::new(),
            limits: &self.limits,
            mode: self.mode,
            errors: Vec::new(),
            depth: 0,
            skip: 0,
            text: None,
        };

        loop {
            let event = reader.read_event().map_err(|e| {
                Error::Xml(format!(
                    "Error parsing XML at position {}: {}",
                    reader.buffer_position(),
                    e
                ))
            })?;

            match event {
                Event::Start(e) => {
                    let (ns, local) = reader.resolve_element(e.name());
                    let local = utf8(local.as_ref())?;
                    state.start(&e, &ns, local, false)?;
                }
                Event::Empty(e) => {
                    let (ns, local) = reader.resolve_element(e.name());
                    let local = utf8(local.as_ref())?;
                    state.start(&e, &ns, local, true)?;
                }
                Event::End(_) => state.end(),
                Event::Text(e) => {
                    if state.collecting() {
                        let text = e
                            .unescape()
                            .map_err(|e| Error::Xml(format!("Failed to unescape text: {}", e)))?;
                        state.push_text(&text);
                    }
                }
                Event::CData(e) => {
                    if state.collecting() {
                        let text = utf8(&e)?;
                        state.push_text(text);
                    }
                }
                Event::Eof => break,
                _ => {} // comments, processing instructions, doctype
            }
        }

        Ok(ReadReport {
            schema: state.builder.finish(),
            errors: state.errors,
        })
    }
}

fn utf8(bytes: &[u8]) -> Result<&str> {
    std::str::from_utf8(bytes).map_err(|e| Error::Xml(format!("Invalid UTF-8: {}", e)))
}

fn is_xsd(ns: &ResolveResult<'_>) -> bool {
    matches!(ns, ResolveResult::Bound(Namespace(uri)) if *uri == XSD_NAMESPACE.as_bytes())
}

struct ReadState<'a> {
    builder: SchemaBuilder,
    limits: &'a Limits,
    mode: ReadMode,
    errors: Vec<Error>,
    /// XML nesting depth
    depth: usize,
    /// Open elements inside a skipped subtree
    skip: usize,
    /// Text gathered for the open leaf element
    text: Option<String>,
}

impl ReadState<'_> {
    fn start(
        &mut self,
        e: &BytesStart<'_>,
        ns: &ResolveResult<'_>,
        local: &str,
        empty: bool,
    ) -> Result<()> {
        self.depth += 1;
        self.limits.check_xml_depth(self.depth)?;

        if self.skip > 0 {
            if !empty {
                self.skip += 1;
            } else {
                self.depth -= 1;
            }
            return Ok(());
        }

        let opened = if self.depth == 1 {
            if !is_xsd(ns) || local != "schema" {
                return Err(Error::Xml(format!(
                    "root element must be {{{}}}schema, found '{}'",
                    XSD_NAMESPACE, local
                )));
            }
            true
        } else if !is_xsd(ns) {
            debug!(element = local, "skipping foreign element");
            false
        } else {
            match ElementName::from_local_name(local) {
                Some(name) => self.builder.build_element(name),
                None => {
                    debug!(element = local, "skipping unknown schema element");
                    false
                }
            }
        };

        if !opened {
            if empty {
                self.depth -= 1;
            } else {
                self.skip = 1;
            }
            return Ok(());
        }

        self.apply_attributes(e)?;
        if self.builder.current_kind().map_or(false, |k| k.is_leaf()) {
            self.text = Some(String::new());
        }
        if empty {
            self.end();
        }
        Ok(())
    }

    fn apply_attributes(&mut self, e: &BytesStart<'_>) -> Result<()> {
        let mut declarations = Vec::new();
        let mut attributes = Vec::new();

        for attr in e.attributes() {
            let attr =
                attr.map_err(|e| Error::Xml(format!("Failed to parse attribute: {}", e)))?;
            let key = utf8(attr.key.as_ref())?.to_string();
            let value = attr
                .unescape_value()
                .map_err(|e| Error::Xml(format!("Failed to unescape attribute value: {}", e)))?
                .into_owned();

            if key == "xmlns" {
                declarations.push((String::new(), value));
            } else if let Some(prefix) = key.strip_prefix("xmlns:") {
                declarations.push((prefix.to_string(), value));
            } else {
                attributes.push((key, value));
            }
        }

        self.limits.check_namespaces(declarations.len())?;
        self.limits.check_attributes(attributes.len())?;

        for (prefix, uri) in &declarations {
            if let Err(err) = self.builder.bind_namespace(prefix, uri) {
                self.record(err.into())?;
            }
        }

        for (key, value) in &attributes {
            let name = match key.split_once(':') {
                Some(("xml", "lang")) => Some(AttributeName::Lang),
                Some(_) => None,
                None => AttributeName::from_local_name(key),
            };
            match name {
                Some(name) => {
                    if let Err(err) = self.builder.build_attribute(name, value) {
                        self.record(err.into())?;
                    }
                }
                None => debug!(attribute = key.as_str(), "ignoring attribute"),
            }
        }
        Ok(())
    }

    fn end(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        if self.skip > 0 {
            self.skip -= 1;
            return;
        }
        if let Some(text) = self.text.take() {
            self.builder.build_leaf_element_content(&text);
        }
        self.builder.end_element();
    }

    fn collecting(&self) -> bool {
        self.skip == 0 && self.text.is_some()
    }

    fn push_text(&mut self, text: &str) {
        if let Some(buffer) = self.text.as_mut() {
            buffer.push_str(text);
        }
    }

    fn record(&mut self, err: Error) -> Result<()> {
        match self.mode {
            ReadMode::Strict => Err(err),
            ReadMode::Lax => {
                debug!(error = %err, "recording error and continuing");
                self.errors.push(err);
                Ok(())
            }
        }
    }
}
