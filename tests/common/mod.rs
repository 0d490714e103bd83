//! Helpers shared by the integration tests

#![allow(dead_code)]

use std::collections::{HashSet, VecDeque};

use xmlschema_dom::{ElementKind, ElementName, SchemaBuilder, ValueType};

/// Shortest chain of element names leading from the root to `kind`
pub fn path_to(kind: ElementKind) -> Vec<ElementName> {
    let mut queue = VecDeque::from([(ElementKind::Schema, Vec::new())]);
    let mut seen = HashSet::new();

    while let Some((current, path)) = queue.pop_front() {
        if current == kind {
            return path;
        }
        if !seen.insert(current) {
            continue;
        }
        for (name, child, _) in current.children() {
            let mut next = path.clone();
            next.push(*name);
            queue.push_back((*child, next));
        }
    }
    panic!("{:?} cannot be reached from the schema root", kind);
}

/// A builder whose current element has the given kind
pub fn builder_at(kind: ElementKind) -> SchemaBuilder {
    let mut builder = SchemaBuilder::new();
    for name in path_to(kind) {
        assert!(builder.build_element(name), "cannot open {} toward {:?}", name, kind);
    }
    assert_eq!(builder.current_kind(), Some(kind));
    builder
}

/// Literals every parser of the datatype accepts
pub fn valid_values(value_type: ValueType) -> &'static [&'static str] {
    match value_type {
        ValueType::AnySimpleType => &["", "  spaced  out ", "2001-12-31", "a < b"],
        ValueType::Token => &["1.0", "  draft \t 2 "],
        ValueType::Boolean => &["true", "false", " 1 ", "0"],
        ValueType::Id | ValueType::NcName => &["foo", "  \t foo_bar \t ", "_x-1.y", "été"],
        ValueType::AnyUri => &["", "http://example.org/ns", "types.xsd", "urn:a:b", "#frag"],
        ValueType::QName => &["xs:string", "local", " tns:item "],
        ValueType::QNameList => &["", "xs:int", "xs:int  tns:code\nlocal"],
        ValueType::Language => &["en", "en-GB", "x-private"],
        ValueType::NonNegativeInteger | ValueType::MinOccurs => &["0", "+5", " 42 "],
        ValueType::PositiveInteger => &["1", "+18", "100000000000000000000"],
        ValueType::MaxOccurs => &["0", "3", "unbounded", " unbounded "],
        ValueType::AllMinOccurs => &["0", "1", " 1 "],
        ValueType::AllMaxOccurs => &["1", " 1 "],
        ValueType::Form => &["qualified", " unqualified "],
        ValueType::Use => &["optional", "required", "prohibited"],
        ValueType::ProcessContents => &["strict", "lax", "skip"],
        ValueType::WhiteSpace => &["preserve", "replace", "collapse"],
        ValueType::BlockSet => &["#all", "", "extension substitution"],
        ValueType::DerivationSet => &["#all", "", "restriction extension"],
        ValueType::FullDerivationSet => &["#all", "list union", "extension"],
        ValueType::SimpleDerivationSet => &["#all", "list", "union restriction"],
        ValueType::NamespaceList => &["##any", "##other", "##local ##targetNamespace urn:x", ""],
        ValueType::SelectorXPath => &[".", ".//item", "a/b | c", "tns:*"],
        ValueType::FieldXPath => &["@id", "item/@code", ".", "child::a"],
    }
}

/// Literals the datatype rejects, with the exact error message
pub fn invalid_values(value_type: ValueType) -> &'static [(&'static str, &'static str)] {
    match value_type {
        ValueType::AnySimpleType | ValueType::Token => &[],
        ValueType::Boolean => &[("yes", "\"yes\" is an invalid boolean datatype.")],
        ValueType::Id => &[(" 1abc ", "\"1abc\" is an invalid ID datatype.")],
        ValueType::NcName => &[("foo:bar", "\"foo:bar\" is an invalid NCName datatype.")],
        ValueType::AnyUri => &[(":", "\":\" is an invalid anyURI datatype.")],
        ValueType::QName => &[("a:b:c", "\"a:b:c\" is an invalid QName datatype.")],
        ValueType::QNameList => &[(
            "xs:int 1bad",
            "\"xs:int 1bad\" is an invalid QName list datatype.",
        )],
        ValueType::Language => &[("en_US", "\"en_US\" is an invalid language datatype.")],
        ValueType::NonNegativeInteger | ValueType::MinOccurs => {
            &[("-1", "\"-1\" is an invalid nonNegativeInteger datatype.")]
        }
        ValueType::PositiveInteger => &[("0", "\"0\" is an invalid positiveInteger datatype.")],
        ValueType::MaxOccurs => &[
            ("-1", "\"-1\" is an invalid non-negative integer limit type."),
            ("many", "\"many\" is an invalid non-negative integer limit type."),
        ],
        ValueType::AllMinOccurs => &[("2", "\"2\" is invalid, expected \"0\" or \"1\".")],
        ValueType::AllMaxOccurs => &[
            ("2", "\"2\" is invalid, expected \"1\"."),
            ("unbounded", "\"unbounded\" is invalid, expected \"1\"."),
        ],
        ValueType::Form => &[("Qualified", "\"Qualified\" is an invalid form datatype.")],
        ValueType::Use => &[("mandatory", "\"mandatory\" is an invalid use datatype.")],
        ValueType::ProcessContents => {
            &[("none", "\"none\" is an invalid processContents datatype.")]
        }
        ValueType::WhiteSpace => &[("trim", "\"trim\" is an invalid whiteSpace datatype.")],
        ValueType::BlockSet => &[("list", "\"list\" is an invalid blockSet datatype.")],
        ValueType::DerivationSet => &[(
            "substitution",
            "\"substitution\" is an invalid derivationSet datatype.",
        )],
        ValueType::FullDerivationSet => &[(
            "substitution",
            "\"substitution\" is an invalid fullDerivationSet datatype.",
        )],
        ValueType::SimpleDerivationSet => &[(
            "extension",
            "\"extension\" is an invalid simpleDerivationSet datatype.",
        )],
        ValueType::NamespaceList => &[("##all", "\"##all\" is an invalid namespaceList datatype.")],
        ValueType::SelectorXPath => &[("@id", "\"@id\" is an invalid selector XPath datatype.")],
        ValueType::FieldXPath => &[("@id/a", "\"@id/a\" is an invalid field XPath datatype.")],
    }
}
