//! Schema-level components: the `schema` root and its composition elements

use serde::Serialize;

use crate::datatypes::{AnyUri, DerivationSet, Form};

/// Attributes of the `xs:schema` root
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaDecl {
    /// id
    pub id: Option<String>,
    /// targetNamespace
    pub target_namespace: Option<AnyUri>,
    /// version
    pub version: Option<String>,
    /// attributeFormDefault
    pub attribute_form_default: Option<Form>,
    /// elementFormDefault
    pub element_form_default: Option<Form>,
    /// blockDefault
    pub block_default: Option<DerivationSet>,
    /// finalDefault
    pub final_default: Option<DerivationSet>,
    /// xml:lang
    pub lang: Option<String>,
}

impl_attribute_slots!(SchemaDecl {
    id: Id => String,
    target_namespace: TargetNamespace => AnyUri,
    version: Version => String,
    attribute_form_default: AttributeFormDefault => Form,
    element_form_default: ElementFormDefault => Form,
    block_default: BlockDefault => DerivationSet,
    final_default: FinalDefault => DerivationSet,
    lang: Lang => String,
});

impl SchemaDecl {
    /// Effective form of local elements (unqualified when not declared)
    pub fn element_form(&self) -> Form {
        self.element_form_default.unwrap_or(Form::Unqualified)
    }

    /// Effective form of local attributes (unqualified when not declared)
    pub fn attribute_form(&self) -> Form {
        self.attribute_form_default.unwrap_or(Form::Unqualified)
    }
}

/// An `xs:import`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportDecl {
    /// id
    pub id: Option<String>,
    /// namespace
    pub namespace: Option<AnyUri>,
    /// schemaLocation
    pub schema_location: Option<AnyUri>,
}

impl_attribute_slots!(ImportDecl {
    id: Id => String,
    namespace: Namespace => AnyUri,
    schema_location: SchemaLocation => AnyUri,
});

/// An `xs:include` or `xs:redefine`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncludeDecl {
    /// id
    pub id: Option<String>,
    /// schemaLocation
    pub schema_location: Option<AnyUri>,
}

impl_attribute_slots!(IncludeDecl {
    id: Id => String,
    schema_location: SchemaLocation => AnyUri,
});

/// An `xs:notation`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NotationDecl {
    /// id
    pub id: Option<String>,
    /// name
    pub name: Option<String>,
    /// public identifier
    pub public: Option<String>,
    /// system identifier
    pub system: Option<AnyUri>,
}

impl_attribute_slots!(NotationDecl {
    id: Id => String,
    name: Name => String,
    public: Public => String,
    system: System => AnyUri,
});
