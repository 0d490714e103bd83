//! Arena-backed schema tree
//!
//! Nodes live in a single vector owned by [`Schema`] and refer to each other
//! through [`NodeId`] indices. Nodes are only ever appended; the first node
//! is always the `schema` root and creation order is document order.

use std::fmt;

use serde::Serialize;

use super::kinds::{ElementKind, ElementName};
use super::{AttributeName, Component};
use crate::datatypes::AttributeValue;
use crate::namespaces::NamespaceTable;

/// Index of a node in its schema arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    /// The root `schema` node
    pub const ROOT: NodeId = NodeId(0);

    /// Position in creation (document) order
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A schema element in the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub(crate) kind: ElementKind,
    pub(crate) component: Component,
    pub(crate) namespaces: NamespaceTable,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    fn new(kind: ElementKind, parent: Option<NodeId>) -> Self {
        Self {
            kind,
            component: Component::new(kind),
            namespaces: NamespaceTable::new(),
            parent,
            children: Vec::new(),
        }
    }

    /// Kind tag fixed at creation
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Typed attribute slots
    pub fn component(&self) -> &Component {
        &self.component
    }

    /// Namespace declarations made on this element
    pub fn namespaces(&self) -> &NamespaceTable {
        &self.namespaces
    }
}

/// The schema object graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    nodes: Vec<Node>,
}

impl Default for Schema {
    fn default() -> Self {
        Self::new()
    }
}

impl Schema {
    /// Create a tree holding only an empty `schema` root
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(ElementKind::Schema, None)],
        }
    }

    /// The `schema` root
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef {
            schema: self,
            id: NodeId::ROOT,
        }
    }

    /// Look up a node by id
    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_>> {
        if id.0 < self.nodes.len() {
            Some(NodeRef { schema: self, id })
        } else {
            None
        }
    }

    /// Number of nodes, root included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// All nodes in document order
    pub fn iter(&self) -> impl Iterator<Item = NodeRef<'_>> {
        (0..self.nodes.len()).map(move |i| NodeRef {
            schema: self,
            id: NodeId(i),
        })
    }

    /// All nodes of a given kind in document order
    pub fn nodes_of_kind(&self, kind: ElementKind) -> impl Iterator<Item = NodeRef<'_>> {
        self.iter().filter(move |n| n.kind() == kind)
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Create a node of `kind` as the last child of `parent`
    pub(crate) fn append_child(&mut self, parent: NodeId, kind: ElementKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(kind, Some(parent)));
        self.nodes[parent.0].children.push(id);
        id
    }
}

/// Read-only handle on a node and its tree
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    schema: &'a Schema,
    id: NodeId,
}

macro_rules! impl_node_component_accessor {
    ($fn:ident, $type:ty) => {
        /// Get the payload if the node carries this component
        pub fn $fn(&self) -> Option<&'a $type> {
            self.component().$fn()
        }
    };
}

impl<'a> NodeRef<'a> {
    fn node(&self) -> &'a Node {
        self.schema.node(self.id)
    }

    fn wrap(&self, id: NodeId) -> NodeRef<'a> {
        NodeRef {
            schema: self.schema,
            id,
        }
    }

    /// Node id
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Kind tag
    pub fn kind(&self) -> ElementKind {
        self.node().kind
    }

    /// Element local name
    pub fn element_name(&self) -> ElementName {
        self.node().kind.element_name()
    }

    /// Typed attribute slots
    pub fn component(&self) -> &'a Component {
        &self.node().component
    }

    /// Value stored for an attribute, if set
    pub fn attribute(&self, name: AttributeName) -> Option<AttributeValue> {
        self.node().component.attribute(name)
    }

    /// Text content (leaf kinds only)
    pub fn content(&self) -> Option<&'a str> {
        self.node().component.content()
    }

    /// Namespace declarations made on this element
    pub fn namespaces(&self) -> &'a NamespaceTable {
        &self.node().namespaces
    }

    /// Namespace bound to `prefix` on this element (ancestors are not consulted)
    pub fn namespace(&self, prefix: &str) -> Option<&'a str> {
        self.node().namespaces.get(prefix)
    }

    /// Parent node, None for the root
    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.node().parent.map(|id| self.wrap(id))
    }

    /// Children in document order
    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        let schema = self.schema;
        self.node()
            .children
            .iter()
            .map(move |id| NodeRef { schema, id: *id })
    }

    /// Number of children
    pub fn child_count(&self) -> usize {
        self.node().children.len()
    }

    /// The i-th child
    pub fn child(&self, index: usize) -> Option<NodeRef<'a>> {
        self.node().children.get(index).map(|id| self.wrap(*id))
    }

    /// Children written with the given element name
    pub fn children_named(&self, name: ElementName) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        self.children().filter(move |c| c.element_name() == name)
    }

    /// Children of the given kind
    pub fn children_of_kind(&self, kind: ElementKind) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        self.children().filter(move |c| c.kind() == kind)
    }

    /// Check if nothing was set on this node or below it
    pub fn is_pristine(&self) -> bool {
        self.component().is_unset()
            && self.content().map_or(true, str::is_empty)
            && self.namespaces().is_empty()
            && self.child_count() == 0
    }

    impl_node_component_accessor!(as_schema, super::SchemaDecl);
    impl_node_component_accessor!(as_annotation, super::AnnotationDecl);
    impl_node_component_accessor!(as_appinfo, super::AppinfoDecl);
    impl_node_component_accessor!(as_documentation, super::DocumentationDecl);
    impl_node_component_accessor!(as_import, super::ImportDecl);
    impl_node_component_accessor!(as_include, super::IncludeDecl);
    impl_node_component_accessor!(as_notation, super::NotationDecl);
    impl_node_component_accessor!(as_simple_type, super::SimpleTypeDecl);
    impl_node_component_accessor!(as_derivation, super::DerivationDecl);
    impl_node_component_accessor!(as_list, super::ListDecl);
    impl_node_component_accessor!(as_union, super::UnionDecl);
    impl_node_component_accessor!(as_complex_type, super::ComplexTypeDecl);
    impl_node_component_accessor!(as_content, super::ContentDecl);
    impl_node_component_accessor!(as_attribute, super::AttributeDecl);
    impl_node_component_accessor!(as_attribute_group, super::AttributeGroupDecl);
    impl_node_component_accessor!(as_element, super::ElementDecl);
    impl_node_component_accessor!(as_group, super::GroupDecl);
    impl_node_component_accessor!(as_model_group, super::ModelGroupDecl);
    impl_node_component_accessor!(as_wildcard, super::WildcardDecl);
    impl_node_component_accessor!(as_literal_facet, super::LiteralFacet);
    impl_node_component_accessor!(as_count_facet, super::CountFacet);
    impl_node_component_accessor!(as_white_space_facet, super::WhiteSpaceFacet);
    impl_node_component_accessor!(as_identity_constraint, super::IdentityConstraintDecl);
    impl_node_component_accessor!(as_xpath, super::XPathDecl);
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("kind", &self.kind())
            .finish()
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.schema, other.schema) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}
