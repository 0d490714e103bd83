//! JSON view of a schema tree
//!
//! A debugging dump: every node becomes an object carrying its kind tag,
//! element name, attribute slots, namespace declarations and children.

use serde::Serialize;

use super::kinds::{ElementKind, ElementName};
use super::tree::{NodeRef, Schema};
use super::Component;
use crate::error::Result;
use crate::namespaces::NamespaceTable;

#[derive(Serialize)]
struct NodeView<'a> {
    kind: ElementKind,
    element: ElementName,
    #[serde(skip_serializing_if = "no_namespaces")]
    namespaces: &'a NamespaceTable,
    attributes: &'a Component,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<NodeView<'a>>,
}

fn no_namespaces(table: &&NamespaceTable) -> bool {
    table.is_empty()
}

impl<'a> NodeView<'a> {
    fn new(node: NodeRef<'a>) -> Self {
        Self {
            kind: node.kind(),
            element: node.element_name(),
            namespaces: node.namespaces(),
            attributes: node.component(),
            children: node.children().map(NodeView::new).collect(),
        }
    }
}

impl Schema {
    /// Export the tree as a JSON value
    pub fn to_json_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(NodeView::new(self.root()))?)
    }

    /// Export the tree as pretty-printed JSON text
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&NodeView::new(self.root()))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::NodeId;

    #[test]
    fn test_empty_schema() {
        let value = Schema::new().to_json_value().unwrap();
        assert_eq!(value["kind"], "Schema");
        assert_eq!(value["element"], "schema");
        assert!(value.get("children").is_none());
        assert!(value.get("namespaces").is_none());
        assert!(value["attributes"]["targetNamespace"].is_null());
    }

    #[test]
    fn test_nested_nodes() {
        let mut schema = Schema::new();
        let element = schema.append_child(NodeId::ROOT, ElementKind::TopLevelElement);
        schema.append_child(element, ElementKind::LocalComplexType);
        schema
            .node_mut(NodeId::ROOT)
            .namespaces
            .bind("xs", crate::XSD_NAMESPACE)
            .unwrap();

        let value = schema.to_json_value().unwrap();
        assert_eq!(value["namespaces"]["xs"], crate::XSD_NAMESPACE);
        assert_eq!(value["children"][0]["element"], "element");
        assert_eq!(value["children"][0]["children"][0]["kind"], "LocalComplexType");

        let text = schema.to_json().unwrap();
        assert!(text.contains("\"LocalComplexType\""));
    }
}
