//! Schema types and builders for tfplug
//!
//! Resource and data source schemas share collection and nested descriptors;
//! their primitive descriptors differ in that only resources carry defaults
//! and plan modifiers. Those live in [`resource`] and [`datasource`].

pub mod datasource;
pub mod resource;

use crate::attribute_type::AttributeType;
use crate::error::{Result, TfplugError};
use crate::types::{AttributePath, Diagnostics, Dynamic, Value};
use crate::validator::SetValidator;
use std::collections::HashMap;
use std::sync::Arc;

/// StringKind represents the format of description strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StringKind {
    #[default]
    Plain,
    Markdown,
}

/// Read-only view over the flags every attribute descriptor carries
pub trait AttributeDescriptor {
    fn description(&self) -> &str;
    fn description_kind(&self) -> StringKind;
    fn is_required(&self) -> bool;
    fn is_optional(&self) -> bool;
    fn is_computed(&self) -> bool;
    fn is_sensitive(&self) -> bool;
    fn attribute_type(&self) -> AttributeType;
}

/// Rust types that back a primitive attribute
pub trait PrimitiveType: Clone + Send + Sync + 'static {
    fn attribute_type() -> AttributeType;
}

impl PrimitiveType for String {
    fn attribute_type() -> AttributeType {
        AttributeType::String
    }
}

impl PrimitiveType for bool {
    fn attribute_type() -> AttributeType {
        AttributeType::Bool
    }
}

impl PrimitiveType for i64 {
    fn attribute_type() -> AttributeType {
        AttributeType::Int64
    }
}

impl PrimitiveType for i32 {
    fn attribute_type() -> AttributeType {
        AttributeType::Int32
    }
}

impl PrimitiveType for f64 {
    fn attribute_type() -> AttributeType {
        AttributeType::Float64
    }
}

/// Implements `AttributeDescriptor` for structs with the common flag fields
macro_rules! impl_flag_accessors {
    () => {
        fn description(&self) -> &str {
            &self.description
        }

        fn description_kind(&self) -> $crate::schema::StringKind {
            self.description_kind
        }

        fn is_required(&self) -> bool {
            self.required
        }

        fn is_optional(&self) -> bool {
            self.optional
        }

        fn is_computed(&self) -> bool {
            self.computed
        }

        fn is_sensitive(&self) -> bool {
            self.sensitive
        }
    };
}
pub(crate) use impl_flag_accessors;

/// Implements `AttributeDescriptor` for an attribute enum by delegating to
/// each variant
macro_rules! delegate_descriptor {
    ($enum:ident { $($variant:ident),+ $(,)? }) => {
        impl $crate::schema::AttributeDescriptor for $enum {
            fn description(&self) -> &str {
                match self { $($enum::$variant(a) => a.description(),)+ }
            }

            fn description_kind(&self) -> $crate::schema::StringKind {
                match self { $($enum::$variant(a) => a.description_kind(),)+ }
            }

            fn is_required(&self) -> bool {
                match self { $($enum::$variant(a) => a.is_required(),)+ }
            }

            fn is_optional(&self) -> bool {
                match self { $($enum::$variant(a) => a.is_optional(),)+ }
            }

            fn is_computed(&self) -> bool {
                match self { $($enum::$variant(a) => a.is_computed(),)+ }
            }

            fn is_sensitive(&self) -> bool {
                match self { $($enum::$variant(a) => a.is_sensitive(),)+ }
            }

            fn attribute_type(&self) -> $crate::attribute_type::AttributeType {
                match self { $($enum::$variant(a) => a.attribute_type(),)+ }
            }
        }
    };
}
pub(crate) use delegate_descriptor;

/// List of primitive elements
#[derive(Debug, Clone, PartialEq)]
pub struct ListAttribute {
    pub element_type: AttributeType,
    pub description: String,
    pub description_kind: StringKind,
    pub required: bool,
    pub optional: bool,
    pub computed: bool,
    pub sensitive: bool,
}

/// Map with string keys
#[derive(Debug, Clone, PartialEq)]
pub struct MapAttribute {
    pub element_type: AttributeType,
    pub description: String,
    pub description_kind: StringKind,
    pub required: bool,
    pub optional: bool,
    pub computed: bool,
    pub sensitive: bool,
}

/// Set of primitive elements
#[derive(Clone)]
pub struct SetAttribute {
    pub element_type: AttributeType,
    pub description: String,
    pub description_kind: StringKind,
    pub required: bool,
    pub optional: bool,
    pub computed: bool,
    pub sensitive: bool,
    pub validators: Vec<Arc<SetValidator>>,
}

impl std::fmt::Debug for SetAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SetAttribute")
            .field("element_type", &self.element_type)
            .field("description", &self.description)
            .field("required", &self.required)
            .field("optional", &self.optional)
            .field("computed", &self.computed)
            .field("sensitive", &self.sensitive)
            .field(
                "validators",
                &format!("{} validators", self.validators.len()),
            )
            .finish()
    }
}

impl SetAttribute {
    /// Run the set validators against the set's elements
    pub fn validate(
        &self,
        value: &Value<Vec<Dynamic>>,
        path: &AttributePath,
        diagnostics: &mut Diagnostics,
    ) {
        crate::validator::validate_all(&self.validators, value, path, diagnostics);
    }
}

impl AttributeDescriptor for ListAttribute {
    impl_flag_accessors!();

    fn attribute_type(&self) -> AttributeType {
        AttributeType::list_of(self.element_type.clone())
    }
}

impl AttributeDescriptor for MapAttribute {
    impl_flag_accessors!();

    fn attribute_type(&self) -> AttributeType {
        AttributeType::map_of(self.element_type.clone())
    }
}

impl AttributeDescriptor for SetAttribute {
    impl_flag_accessors!();

    fn attribute_type(&self) -> AttributeType {
        AttributeType::set_of(self.element_type.clone())
    }
}

fn object_type<A: AttributeDescriptor>(attributes: &HashMap<String, A>) -> AttributeType {
    AttributeType::Object(
        attributes
            .iter()
            .map(|(name, attr)| (name.clone(), attr.attribute_type()))
            .collect(),
    )
}

/// The attributes of one element of a list or set nested attribute
#[derive(Debug, Clone)]
pub struct NestedAttributeObject<A> {
    pub attributes: HashMap<String, A>,
}

impl<A> NestedAttributeObject<A> {
    pub fn new(attributes: HashMap<String, A>) -> Self {
        Self { attributes }
    }
}

/// A single object with its own attributes
#[derive(Debug, Clone)]
pub struct SingleNestedAttribute<A> {
    pub attributes: HashMap<String, A>,
    pub description: String,
    pub description_kind: StringKind,
    pub required: bool,
    pub optional: bool,
    pub computed: bool,
    pub sensitive: bool,
}

#[derive(Debug, Clone)]
pub struct ListNestedAttribute<A> {
    pub nested_object: NestedAttributeObject<A>,
    pub description: String,
    pub description_kind: StringKind,
    pub required: bool,
    pub optional: bool,
    pub computed: bool,
    pub sensitive: bool,
}

#[derive(Debug, Clone)]
pub struct SetNestedAttribute<A> {
    pub nested_object: NestedAttributeObject<A>,
    pub description: String,
    pub description_kind: StringKind,
    pub required: bool,
    pub optional: bool,
    pub computed: bool,
    pub sensitive: bool,
}

impl<A: AttributeDescriptor> AttributeDescriptor for SingleNestedAttribute<A> {
    impl_flag_accessors!();

    fn attribute_type(&self) -> AttributeType {
        object_type(&self.attributes)
    }
}

impl<A: AttributeDescriptor> AttributeDescriptor for ListNestedAttribute<A> {
    impl_flag_accessors!();

    fn attribute_type(&self) -> AttributeType {
        AttributeType::list_of(object_type(&self.nested_object.attributes))
    }
}

impl<A: AttributeDescriptor> AttributeDescriptor for SetNestedAttribute<A> {
    impl_flag_accessors!();

    fn attribute_type(&self) -> AttributeType {
        AttributeType::set_of(object_type(&self.nested_object.attributes))
    }
}

/// Schema is returned by resources and data sources
/// Version is used for state migration
#[derive(Debug, Clone)]
pub struct Schema<A> {
    pub version: i64,
    pub description: String,
    pub description_kind: StringKind,
    pub attributes: HashMap<String, A>,
}

pub type ResourceSchema = Schema<resource::Attribute>;
pub type DataSourceSchema = Schema<datasource::Attribute>;

impl<A: AttributeDescriptor> Schema<A> {
    pub fn attribute(&self, name: &str) -> Option<&A> {
        self.attributes.get(name)
    }

    /// Names of required attributes, sorted
    pub fn required_attributes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .attributes
            .iter()
            .filter(|(_, attr)| attr.is_required())
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    /// The object type of the whole schema
    pub fn object_type(&self) -> AttributeType {
        object_type(&self.attributes)
    }
}

/// SchemaBuilder provides fluent API for building schemas
pub struct SchemaBuilder<A> {
    version: i64,
    description: String,
    description_kind: StringKind,
    attributes: Vec<(String, A)>,
}

impl<A> SchemaBuilder<A> {
    pub fn new() -> Self {
        Self {
            version: 0,
            description: String::new(),
            description_kind: StringKind::Plain,
            attributes: Vec::new(),
        }
    }

    /// Set schema version
    pub fn version(mut self, version: i64) -> Self {
        self.version = version;
        self
    }

    pub fn description(mut self, desc: &str) -> Self {
        self.description = desc.to_string();
        self
    }

    pub fn description_kind(mut self, kind: StringKind) -> Self {
        self.description_kind = kind;
        self
    }

    /// Add attribute
    pub fn attribute(mut self, name: &str, attr: impl Into<A>) -> Self {
        self.attributes.push((name.to_string(), attr.into()));
        self
    }

    /// Add every attribute from a prepared map
    pub fn attributes(mut self, attrs: HashMap<String, A>) -> Self {
        self.attributes.extend(attrs);
        self
    }

    /// Finalize the schema, rejecting empty or repeated attribute names
    pub fn build(self) -> Result<Schema<A>> {
        if self.version < 0 {
            return Err(TfplugError::NegativeVersion(self.version));
        }

        let mut attributes = HashMap::with_capacity(self.attributes.len());
        for (name, attr) in self.attributes {
            if name.is_empty() {
                return Err(TfplugError::EmptyAttributeName);
            }
            if attributes.contains_key(&name) {
                return Err(TfplugError::DuplicateAttribute(name));
            }
            attributes.insert(name, attr);
        }

        Ok(Schema {
            version: self.version,
            description: self.description,
            description_kind: self.description_kind,
            attributes,
        })
    }
}

impl<A> Default for SchemaBuilder<A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::resource::{Attribute, StringAttribute};
    use super::*;

    fn computed_string() -> StringAttribute {
        StringAttribute {
            computed: true,
            ..Default::default()
        }
    }

    fn required_string() -> StringAttribute {
        StringAttribute {
            required: true,
            ..Default::default()
        }
    }

    #[test]
    fn schema_builder_creates_schema_with_attributes() {
        let schema: ResourceSchema = SchemaBuilder::new()
            .version(1)
            .description("Test resource schema")
            .attribute("id", computed_string())
            .attribute("name", required_string())
            .build()
            .unwrap();

        assert_eq!(schema.version, 1);
        assert_eq!(schema.attributes.len(), 2);
        assert_eq!(schema.description, "Test resource schema");
        assert_eq!(schema.required_attributes(), vec!["name"]);
    }

    #[test]
    fn schema_builder_rejects_duplicate_names() {
        let result: Result<ResourceSchema> = SchemaBuilder::new()
            .attribute("id", computed_string())
            .attribute("id", required_string())
            .build();

        assert!(matches!(result, Err(TfplugError::DuplicateAttribute(name)) if name == "id"));
    }

    #[test]
    fn schema_builder_rejects_bad_version_and_empty_name() {
        let negative: Result<ResourceSchema> = SchemaBuilder::new().version(-1).build();
        assert!(matches!(negative, Err(TfplugError::NegativeVersion(-1))));

        let unnamed: Result<ResourceSchema> =
            SchemaBuilder::new().attribute("", required_string()).build();
        match unnamed {
            Err(err) => assert_eq!(err.to_string(), "attribute names must not be empty"),
            Ok(_) => panic!("empty attribute name was accepted"),
        }
    }

    #[test]
    fn nested_attribute_reports_object_type() {
        let nested: SingleNestedAttribute<Attribute> = SingleNestedAttribute {
            attributes: HashMap::from([
                ("host".to_string(), Attribute::from(required_string())),
                ("port".to_string(), Attribute::from(resource::Int64Attribute::default())),
            ]),
            description: "Connection".to_string(),
            description_kind: StringKind::Plain,
            required: false,
            optional: true,
            computed: false,
            sensitive: false,
        };

        match nested.attribute_type() {
            AttributeType::Object(fields) => {
                assert_eq!(fields.get("host"), Some(&AttributeType::String));
                assert_eq!(fields.get("port"), Some(&AttributeType::Int64));
            }
            other => panic!("Expected Object type, got {}", other),
        }
    }

    #[test]
    fn collection_attributes_wrap_element_type() {
        let list = ListAttribute {
            element_type: AttributeType::String,
            description: String::new(),
            description_kind: StringKind::Markdown,
            required: true,
            optional: false,
            computed: false,
            sensitive: false,
        };

        assert_eq!(list.attribute_type().to_string(), "list(string)");
        assert_eq!(list.description_kind(), StringKind::Markdown);
    }

    #[test]
    fn set_attribute_runs_validators() {
        let set = SetAttribute {
            element_type: AttributeType::String,
            description: String::new(),
            description_kind: StringKind::Plain,
            required: true,
            optional: false,
            computed: false,
            sensitive: false,
            validators: vec![crate::validator::set::size_at_least(1)],
        };
        let mut diags = Diagnostics::new();

        set.validate(&Value::known(vec![]), &AttributePath::new("tags"), &mut diags);

        assert!(diags.has_error());
    }
}
