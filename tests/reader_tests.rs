//! Reading XSD documents from files

use std::io::Write;

use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;
use xmlschema_dom::{ElementKind, Error, Limits, NamespaceViolation, ReadMode, SchemaReader};

const PURCHASE_ORDER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!-- primer example -->
<xsd:schema xmlns:xsd="http://www.w3.org/2001/XMLSchema"
            xmlns:po="http://www.example.com/PO1"
            targetNamespace="http://www.example.com/PO1"
            elementFormDefault="qualified">
  <xsd:annotation>
    <xsd:documentation xml:lang="en">
      Purchase order schema for Example.com.
    </xsd:documentation>
    <xsd:appinfo source="urn:tool"><tool:hint xmlns:tool="urn:tool">kept out</tool:hint></xsd:appinfo>
  </xsd:annotation>

  <xsd:element name="purchaseOrder" type="po:PurchaseOrderType"/>
  <xsd:element name="comment" type="xsd:string"/>

  <xsd:complexType name="PurchaseOrderType">
    <xsd:sequence>
      <xsd:element name="shipTo" type="po:USAddress"/>
      <xsd:element name="billTo" type="po:USAddress"/>
      <xsd:element ref="po:comment" minOccurs="0"/>
      <xsd:element name="items" type="po:Items"/>
    </xsd:sequence>
    <xsd:attribute name="orderDate" type="xsd:date"/>
  </xsd:complexType>

  <xsd:complexType name="Items">
    <xsd:sequence>
      <xsd:element name="item" minOccurs="0" maxOccurs="unbounded">
        <xsd:complexType>
          <xsd:sequence>
            <xsd:element name="productName" type="xsd:string"/>
            <xsd:element name="quantity">
              <xsd:simpleType>
                <xsd:restriction base="xsd:positiveInteger">
                  <xsd:maxExclusive value="100"/>
                </xsd:restriction>
              </xsd:simpleType>
            </xsd:element>
          </xsd:sequence>
          <xsd:attribute name="partNum" type="po:SKU" use="required"/>
        </xsd:complexType>
      </xsd:element>
    </xsd:sequence>
  </xsd:complexType>

  <xsd:simpleType name="SKU">
    <xsd:restriction base="xsd:string">
      <xsd:pattern value="\d{3}-[A-Z]{2}"/>
    </xsd:restriction>
  </xsd:simpleType>
</xsd:schema>
"#;

fn write_temp(xml: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(xml.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn reads_purchase_order_file() {
    let file = write_temp(PURCHASE_ORDER);
    let report = SchemaReader::new().read_file(file.path()).unwrap();
    assert!(report.is_clean());

    let schema = report.schema();
    let root = schema.root();
    assert_eq!(root.namespace("po"), Some("http://www.example.com/PO1"));
    assert_eq!(root.child_count(), 6);

    let annotation = root.child(0).unwrap();
    let documentation = annotation.child(0).unwrap();
    assert_eq!(
        documentation.content().map(str::trim),
        Some("Purchase order schema for Example.com.")
    );
    let appinfo = annotation.child(1).unwrap();
    assert_eq!(appinfo.content(), Some(""));
    assert_eq!(
        appinfo.as_appinfo().unwrap().source.as_ref().map(|s| s.as_str()),
        Some("urn:tool")
    );

    assert_eq!(schema.nodes_of_kind(ElementKind::TopLevelElement).count(), 2);
    assert_eq!(schema.nodes_of_kind(ElementKind::TopLevelComplexType).count(), 2);
    assert_eq!(schema.nodes_of_kind(ElementKind::LocalComplexType).count(), 1);
    assert_eq!(schema.nodes_of_kind(ElementKind::LocalElement).count(), 7);

    let part_num = schema
        .nodes_of_kind(ElementKind::LocalAttribute)
        .find(|n| n.as_attribute().unwrap().name.as_deref() == Some("partNum"))
        .unwrap();
    assert_eq!(part_num.parent().unwrap().kind(), ElementKind::LocalComplexType);

    let max_exclusive = schema.nodes_of_kind(ElementKind::MaxExclusive).next().unwrap();
    assert_eq!(
        max_exclusive.as_literal_facet().unwrap().value.as_deref(),
        Some("100")
    );
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = SchemaReader::new().read_file(dir.path().join("absent.xsd"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn default_namespace_schema() {
    let xml = r#"<schema xmlns="http://www.w3.org/2001/XMLSchema">
        <element name="a"><complexType><all><element name="b"/></all></complexType></element>
    </schema>"#;
    let report = SchemaReader::new().read_str(xml).unwrap();
    let root = report.schema().root();
    assert_eq!(
        root.namespaces().default_namespace(),
        Some("http://www.w3.org/2001/XMLSchema")
    );
    assert_eq!(report.schema().nodes_of_kind(ElementKind::All).count(), 1);
}

#[test]
fn foreign_elements_are_skipped() {
    let xml = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema" xmlns:x="urn:x">
        <x:extra><xs:element name="hidden"/></x:extra>
        <xs:element name="visible" x:note="ignored"/>
        <xs:bogus><xs:element name="gone"/></xs:bogus>
    </xs:schema>"#;
    let report = SchemaReader::new().read_str(xml).unwrap();
    let root = report.schema().root();
    assert_eq!(root.child_count(), 1);
    let element = root.child(0).unwrap();
    assert_eq!(element.as_element().unwrap().name.as_deref(), Some("visible"));
    assert!(report.schema().iter().all(|n| n.as_element().map_or(true, |e| e.name.as_deref() != Some("hidden"))));
}

#[test]
fn strict_stops_on_namespace_error() {
    let xml = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
        <xs:element xmlns:xml="urn:wrong" name="e"/>
    </xs:schema>"#;
    let err = SchemaReader::new().read_str(xml).unwrap_err();
    match err {
        Error::NamespaceBinding(e) => assert_eq!(e.violation, NamespaceViolation::XmlPrefixMisbound),
        other => panic!("unexpected error {:?}", other),
    }

    let report = SchemaReader::new()
        .with_mode(ReadMode::Lax)
        .read_str(xml)
        .unwrap();
    assert_eq!(report.errors().len(), 1);
    let element = report.schema().root().child(0).unwrap();
    assert!(element.namespaces().is_empty());
    assert_eq!(element.as_element().unwrap().name.as_deref(), Some("e"));
}

#[test]
fn lax_keeps_reading_after_lexical_errors() {
    let xml = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
        <xs:complexType name="T" mixed="perhaps">
            <xs:all maxOccurs="5"><xs:element name="x" minOccurs="-1"/></xs:all>
        </xs:complexType>
        <xs:element name="ok"/>
    </xs:schema>"#;
    let report = SchemaReader::new()
        .with_mode(ReadMode::Lax)
        .read_str(xml)
        .unwrap();
    let messages: Vec<String> = report.errors().iter().map(|e| e.to_string()).collect();
    assert_eq!(
        messages,
        vec![
            "lexical error: \"perhaps\" is an invalid boolean datatype.".to_string(),
            "lexical error: \"5\" is invalid, expected \"1\".".to_string(),
            "lexical error: \"-1\" is an invalid nonNegativeInteger datatype.".to_string(),
        ]
    );
    assert_eq!(report.schema().root().child_count(), 2);
}

#[test]
fn size_and_attribute_limits() {
    let xml = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema" id="s" version="1"/>"#;

    let limits = Limits {
        max_xml_size: 10,
        ..Limits::default()
    };
    let result = SchemaReader::new().with_limits(limits).read_str(xml);
    assert!(matches!(result, Err(Error::LimitExceeded(_))));

    let limits = Limits {
        max_attributes: 1,
        ..Limits::default()
    };
    let result = SchemaReader::new()
        .with_limits(limits)
        .with_mode(ReadMode::Lax)
        .read_str(xml);
    assert!(matches!(result, Err(Error::LimitExceeded(_))));

    let limits = Limits {
        max_namespaces: 0,
        ..Limits::default()
    };
    let result = SchemaReader::new().with_limits(limits).read_str(xml);
    assert!(matches!(result, Err(Error::LimitExceeded(_))));
}

#[test]
fn malformed_xml_is_reported() {
    let xml = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema"><xs:element></xs:schema>"#;
    assert!(matches!(SchemaReader::new().read_str(xml), Err(Error::Xml(_))));
}

#[test]
fn exported_json_reflects_document() {
    let xml = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
        <xs:element name="root" nillable="true"/>
    </xs:schema>"#;
    let schema = SchemaReader::new().read_str(xml).unwrap().into_schema();
    let value = schema.to_json_value().unwrap();
    assert_eq!(value["kind"], "Schema");
    assert_eq!(value["children"][0]["kind"], "TopLevelElement");
    assert_eq!(value["children"][0]["attributes"]["name"], "root");
    assert_eq!(value["children"][0]["attributes"]["nillable"], true);
}
