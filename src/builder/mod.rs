//! Schema element builder
//!
//! [`SchemaBuilder`] turns a stream of start-tag / attribute / text / end-tag
//! calls into a [`Schema`] tree. The kind of the element on top of the stack
//! is the only state: it decides through the kind table whether a call is
//! legal. Illegal calls are silent no-ops and never look at their value;
//! legal calls with a bad value return a [`LexicalError`] and leave the tree
//! as it was.

pub mod stack;

use tracing::{debug, trace};

use crate::dom::{AttributeName, ElementKind, ElementName, NodeRef, Schema};
use crate::error::{LexicalError, NamespaceBindingError};

pub use stack::ElementStack;

/// Incremental builder of a schema tree
#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    schema: Schema,
    stack: ElementStack,
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaBuilder {
    /// Create a builder whose current element is a fresh `schema` root
    pub fn new() -> Self {
        let schema = Schema::new();
        let mut stack = ElementStack::new();
        stack.push(schema.root().id());
        Self { schema, stack }
    }

    /// The tree built so far
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Consume the builder and return the tree
    pub fn finish(self) -> Schema {
        self.schema
    }

    /// The element currently being built
    pub fn current(&self) -> Option<NodeRef<'_>> {
        self.stack.top().and_then(|id| self.schema.get(id))
    }

    /// Kind of the element currently being built
    pub fn current_kind(&self) -> Option<ElementKind> {
        self.stack.top().map(|id| self.schema.node(id).kind())
    }

    /// Number of open elements
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// Check if the stack has been emptied; every further call is then ignored
    pub fn is_closed(&self) -> bool {
        self.stack.is_empty()
    }

    /// Set an attribute on the current element.
    ///
    /// Does nothing when the stack is empty or the attribute is not allowed on
    /// the current kind. A slot that is already set keeps its first value,
    /// though the new literal is still checked.
    pub fn build_attribute(&mut self, name: AttributeName, raw: &str) -> Result<(), LexicalError> {
        let Some(id) = self.stack.top() else {
            debug!(attribute = %name, "stack is empty, attribute ignored");
            return Ok(());
        };
        let kind = self.schema.node(id).kind();
        let Some(value_type) = kind.attribute_type(name) else {
            debug!(%kind, attribute = %name, "attribute not allowed here, ignored");
            return Ok(());
        };

        let value = value_type.parse(raw).map_err(|err| {
            debug!(%kind, attribute = %name, error = %err, "invalid attribute value");
            err
        })?;

        if self.schema.node_mut(id).component.assign(name, value) {
            trace!(%kind, attribute = %name, "attribute set");
        } else {
            debug!(%kind, attribute = %name, "attribute already set, first value kept");
        }
        Ok(())
    }

    /// Open a child element under the current element.
    ///
    /// Returns true when the child was created and became current, false
    /// when the element is not allowed here (nothing changes then).
    pub fn build_element(&mut self, name: ElementName) -> bool {
        let Some(parent) = self.stack.top() else {
            debug!(element = %name, "stack is empty, element ignored");
            return false;
        };
        let parent_kind = self.schema.node(parent).kind();
        let Some(kind) = parent_kind.child_kind(name) else {
            debug!(parent = %parent_kind, element = %name, "element not allowed here, ignored");
            return false;
        };

        let id = self.schema.append_child(parent, kind);
        self.stack.push(id);
        trace!(%kind, node = %id, depth = self.stack.depth(), "element opened");
        true
    }

    /// Replace the text content of the current `appinfo` or `documentation`
    pub fn build_leaf_element_content(&mut self, raw: &str) {
        let Some(id) = self.stack.top() else {
            debug!("stack is empty, content ignored");
            return;
        };
        let node = self.schema.node_mut(id);
        if !node.component.set_content(raw) {
            debug!(kind = %node.kind(), "element has no text content, ignored");
        }
    }

    /// Declare a namespace on the current element
    pub fn bind_namespace(&mut self, prefix: &str, uri: &str) -> Result<(), NamespaceBindingError> {
        let Some(id) = self.stack.top() else {
            debug!(prefix, uri, "stack is empty, namespace ignored");
            return Ok(());
        };
        self.schema
            .node_mut(id)
            .namespaces
            .bind(prefix, uri)
            .map_err(|err| {
                debug!(prefix, uri, error = %err, "namespace declaration rejected");
                err
            })
    }

    /// Close the current element. Returns false if the stack was already empty.
    pub fn end_element(&mut self) -> bool {
        let popped = self.stack.pop();
        if popped {
            trace!(depth = self.stack.depth(), "element closed");
        } else {
            debug!("stack is empty, end of element ignored");
        }
        popped
    }
}

macro_rules! attribute_builders {
    ($( $fn:ident => $name:ident, $xsd:literal; )*) => {
        impl SchemaBuilder {
            $(
                #[doc = concat!("Set `", $xsd, "` on the current element")]
                pub fn $fn(&mut self, raw: &str) -> Result<(), LexicalError> {
                    self.build_attribute(AttributeName::$name, raw)
                }
            )*
        }
    };
}

macro_rules! element_builders {
    ($( $fn:ident => $name:ident, $xsd:literal; )*) => {
        impl SchemaBuilder {
            $(
                #[doc = concat!("Open an `xs:", $xsd, "` child of the current element")]
                pub fn $fn(&mut self) -> bool {
                    self.build_element(ElementName::$name)
                }
            )*
        }
    };
}

attribute_builders! {
    build_abstract_attribute => Abstract, "abstract";
    build_attribute_form_default_attribute => AttributeFormDefault, "attributeFormDefault";
    build_base_attribute => Base, "base";
    build_block_attribute => Block, "block";
    build_block_default_attribute => BlockDefault, "blockDefault";
    build_default_attribute => Default, "default";
    build_element_form_default_attribute => ElementFormDefault, "elementFormDefault";
    build_final_attribute => Final, "final";
    build_final_default_attribute => FinalDefault, "finalDefault";
    build_fixed_attribute => Fixed, "fixed";
    build_form_attribute => Form, "form";
    build_id_attribute => Id, "id";
    build_item_type_attribute => ItemType, "itemType";
    build_lang_attribute => Lang, "xml:lang";
    build_max_occurs_attribute => MaxOccurs, "maxOccurs";
    build_member_types_attribute => MemberTypes, "memberTypes";
    build_min_occurs_attribute => MinOccurs, "minOccurs";
    build_mixed_attribute => Mixed, "mixed";
    build_name_attribute => Name, "name";
    build_namespace_attribute => Namespace, "namespace";
    build_nillable_attribute => Nillable, "nillable";
    build_process_contents_attribute => ProcessContents, "processContents";
    build_public_attribute => Public, "public";
    build_ref_attribute => Ref, "ref";
    build_refer_attribute => Refer, "refer";
    build_schema_location_attribute => SchemaLocation, "schemaLocation";
    build_source_attribute => Source, "source";
    build_substitution_group_attribute => SubstitutionGroup, "substitutionGroup";
    build_system_attribute => System, "system";
    build_target_namespace_attribute => TargetNamespace, "targetNamespace";
    build_type_attribute => Type, "type";
    build_use_attribute => Use, "use";
    build_value_attribute => Value, "value";
    build_version_attribute => Version, "version";
    build_xpath_attribute => Xpath, "xpath";
}

element_builders! {
    build_all_element => All, "all";
    build_annotation_element => Annotation, "annotation";
    build_any_element => Any, "any";
    build_any_attribute_element => AnyAttribute, "anyAttribute";
    build_appinfo_element => Appinfo, "appinfo";
    build_attribute_element => Attribute, "attribute";
    build_attribute_group_element => AttributeGroup, "attributeGroup";
    build_choice_element => Choice, "choice";
    build_complex_content_element => ComplexContent, "complexContent";
    build_complex_type_element => ComplexType, "complexType";
    build_documentation_element => Documentation, "documentation";
    build_element_element => Element, "element";
    build_enumeration_element => Enumeration, "enumeration";
    build_extension_element => Extension, "extension";
    build_field_element => Field, "field";
    build_fraction_digits_element => FractionDigits, "fractionDigits";
    build_group_element => Group, "group";
    build_import_element => Import, "import";
    build_include_element => Include, "include";
    build_key_element => Key, "key";
    build_keyref_element => Keyref, "keyref";
    build_length_element => Length, "length";
    build_list_element => List, "list";
    build_max_exclusive_element => MaxExclusive, "maxExclusive";
    build_max_inclusive_element => MaxInclusive, "maxInclusive";
    build_max_length_element => MaxLength, "maxLength";
    build_min_exclusive_element => MinExclusive, "minExclusive";
    build_min_inclusive_element => MinInclusive, "minInclusive";
    build_min_length_element => MinLength, "minLength";
    build_notation_element => Notation, "notation";
    build_pattern_element => Pattern, "pattern";
    build_redefine_element => Redefine, "redefine";
    build_restriction_element => Restriction, "restriction";
    build_selector_element => Selector, "selector";
    build_sequence_element => Sequence, "sequence";
    build_simple_content_element => SimpleContent, "simpleContent";
    build_simple_type_element => SimpleType, "simpleType";
    build_total_digits_element => TotalDigits, "totalDigits";
    build_union_element => Union, "union";
    build_unique_element => Unique, "unique";
    build_white_space_element => WhiteSpace, "whiteSpace";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatypes::{AttributeValue, MaxOccurs};
    use num_bigint::BigUint;

    #[test]
    fn test_new_builder() {
        let builder = SchemaBuilder::new();
        assert_eq!(builder.current_kind(), Some(ElementKind::Schema));
        assert_eq!(builder.depth(), 1);
        assert!(!builder.is_closed());
        assert!(builder.schema().root().is_pristine());
    }

    #[test]
    fn test_element_resolves_flavor() {
        let mut builder = SchemaBuilder::new();
        assert!(builder.build_complex_type_element());
        assert_eq!(builder.current_kind(), Some(ElementKind::TopLevelComplexType));
        assert!(builder.build_sequence_element());
        assert!(builder.build_element_element());
        assert!(builder.build_complex_type_element());
        assert_eq!(builder.current_kind(), Some(ElementKind::LocalComplexType));
    }

    #[test]
    fn test_illegal_element_is_ignored() {
        let mut builder = SchemaBuilder::new();
        assert!(!builder.build_sequence_element());
        assert_eq!(builder.current_kind(), Some(ElementKind::Schema));
        assert_eq!(builder.schema().node_count(), 1);
    }

    #[test]
    fn test_illegal_attribute_skips_validation() {
        let mut builder = SchemaBuilder::new();
        assert!(builder.build_max_occurs_attribute("not a number").is_ok());
        assert!(builder.schema().root().is_pristine());
    }

    #[test]
    fn test_legal_attribute_is_parsed() {
        let mut builder = SchemaBuilder::new();
        builder.build_element_element();
        builder.build_complex_type_element();
        builder.build_sequence_element();
        builder.build_max_occurs_attribute("unbounded").unwrap();
        let err = builder.build_min_occurs_attribute("-1").unwrap_err();
        assert_eq!(err.to_string(), "\"-1\" is an invalid nonNegativeInteger datatype.");

        let current = builder.current().unwrap();
        let group = current.as_model_group().unwrap();
        assert_eq!(group.max_occurs, Some(MaxOccurs::Unbounded));
        assert_eq!(group.min_occurs, None);
    }

    #[test]
    fn test_repeated_attribute_keeps_first_value() {
        let mut builder = SchemaBuilder::new();
        builder.build_element_element();
        builder.build_name_attribute("first").unwrap();
        builder.build_name_attribute("second").unwrap();
        assert!(builder.build_name_attribute("not valid").is_err());
        assert_eq!(
            builder.current().unwrap().attribute(AttributeName::Name),
            Some(AttributeValue::String("first".to_string()))
        );
    }

    #[test]
    fn test_end_element_past_root() {
        let mut builder = SchemaBuilder::new();
        assert!(builder.end_element());
        assert!(builder.is_closed());
        assert!(!builder.end_element());
        assert!(!builder.build_annotation_element());
        assert!(builder.build_id_attribute("1 invalid").is_ok());
        assert!(builder.bind_namespace("xmlns", "http://example.org").is_ok());
        builder.build_leaf_element_content("text");
        assert!(builder.current().is_none());
        assert!(builder.schema().root().is_pristine());
    }

    #[test]
    fn test_leaf_content_only_on_leaves() {
        let mut builder = SchemaBuilder::new();
        builder.build_leaf_element_content("ignored");
        builder.build_annotation_element();
        builder.build_leaf_element_content("ignored");
        builder.build_appinfo_element();
        builder.build_leaf_element_content("  <kept/> ");
        assert_eq!(builder.current().unwrap().content(), Some("  <kept/> "));
    }

    #[test]
    fn test_bind_namespace_targets_current() {
        let mut builder = SchemaBuilder::new();
        builder.bind_namespace("xs", crate::XSD_NAMESPACE).unwrap();
        builder.build_element_element();
        builder.bind_namespace("tns", "http://example.org/tns").unwrap();

        let schema = builder.finish();
        let root = schema.root();
        assert_eq!(root.namespace("xs"), Some(crate::XSD_NAMESPACE));
        assert_eq!(root.namespace("tns"), None);
        assert_eq!(root.child(0).unwrap().namespace("tns"), Some("http://example.org/tns"));
    }

    #[test]
    fn test_count_facet() {
        let mut builder = SchemaBuilder::new();
        builder.build_simple_type_element();
        builder.build_restriction_element();
        builder.build_length_element();
        builder.build_value_attribute(" 10 ").unwrap();
        let facet = builder.current().unwrap().as_count_facet().unwrap().clone();
        assert_eq!(facet.value, Some(BigUint::from(10u32)));
    }
}
