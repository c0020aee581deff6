//! Data source attribute descriptors
//!
//! Data sources are read-only, so their descriptors have no defaults and no
//! plan modifiers.

use super::{
    delegate_descriptor, impl_flag_accessors, AttributeDescriptor, ListAttribute, MapAttribute,
    PrimitiveType, SetAttribute, StringKind,
};
use crate::attribute_type::AttributeType;
use crate::types::{AttributePath, Diagnostics, Value};
use crate::validator::{validate_all, Validator};
use std::sync::Arc;

pub type SingleNestedAttribute = super::SingleNestedAttribute<Attribute>;
pub type ListNestedAttribute = super::ListNestedAttribute<Attribute>;
pub type SetNestedAttribute = super::SetNestedAttribute<Attribute>;
pub type NestedAttributeObject = super::NestedAttributeObject<Attribute>;

#[derive(Clone, Default)]
pub struct PrimitiveAttribute<T> {
    pub description: String,
    pub description_kind: StringKind,
    pub required: bool,
    pub optional: bool,
    pub computed: bool,
    pub sensitive: bool,
    pub validators: Vec<Arc<dyn Validator<T>>>,
}

pub type StringAttribute = PrimitiveAttribute<String>;
pub type BoolAttribute = PrimitiveAttribute<bool>;
pub type Int64Attribute = PrimitiveAttribute<i64>;
pub type Int32Attribute = PrimitiveAttribute<i32>;
pub type Float64Attribute = PrimitiveAttribute<f64>;

impl<T: PrimitiveType> std::fmt::Debug for PrimitiveAttribute<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrimitiveAttribute")
            .field("type", &T::attribute_type())
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

impl<T: PrimitiveType> PrimitiveAttribute<T> {
    pub fn validate(&self, value: &Value<T>, path: &AttributePath, diagnostics: &mut Diagnostics) {
        validate_all(&self.validators, value, path, diagnostics);
    }
}

impl<T: PrimitiveType> AttributeDescriptor for PrimitiveAttribute<T> {
    impl_flag_accessors!();

    fn attribute_type(&self) -> AttributeType {
        T::attribute_type()
    }
}

/// Any data source attribute
#[derive(Debug, Clone)]
pub enum Attribute {
    String(StringAttribute),
    Bool(BoolAttribute),
    Int64(Int64Attribute),
    Int32(Int32Attribute),
    Float64(Float64Attribute),
    List(ListAttribute),
    Map(MapAttribute),
    Set(SetAttribute),
    SingleNested(SingleNestedAttribute),
    ListNested(ListNestedAttribute),
    SetNested(SetNestedAttribute),
}

delegate_descriptor!(Attribute {
    String,
    Bool,
    Int64,
    Int32,
    Float64,
    List,
    Map,
    Set,
    SingleNested,
    ListNested,
    SetNested,
});

impl From<StringAttribute> for Attribute {
    fn from(attr: StringAttribute) -> Self {
        Attribute::String(attr)
    }
}

impl From<BoolAttribute> for Attribute {
    fn from(attr: BoolAttribute) -> Self {
        Attribute::Bool(attr)
    }
}

impl From<Int64Attribute> for Attribute {
    fn from(attr: Int64Attribute) -> Self {
        Attribute::Int64(attr)
    }
}

impl From<Int32Attribute> for Attribute {
    fn from(attr: Int32Attribute) -> Self {
        Attribute::Int32(attr)
    }
}

impl From<Float64Attribute> for Attribute {
    fn from(attr: Float64Attribute) -> Self {
        Attribute::Float64(attr)
    }
}

impl From<ListAttribute> for Attribute {
    fn from(attr: ListAttribute) -> Self {
        Attribute::List(attr)
    }
}

impl From<MapAttribute> for Attribute {
    fn from(attr: MapAttribute) -> Self {
        Attribute::Map(attr)
    }
}

impl From<SetAttribute> for Attribute {
    fn from(attr: SetAttribute) -> Self {
        Attribute::Set(attr)
    }
}

impl From<SingleNestedAttribute> for Attribute {
    fn from(attr: SingleNestedAttribute) -> Self {
        Attribute::SingleNested(attr)
    }
}

impl From<ListNestedAttribute> for Attribute {
    fn from(attr: ListNestedAttribute) -> Self {
        Attribute::ListNested(attr)
    }
}

impl From<SetNestedAttribute> for Attribute {
    fn from(attr: SetNestedAttribute) -> Self {
        Attribute::SetNested(attr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{DataSourceSchema, SchemaBuilder};
    use crate::validator::string;

    #[test]
    fn data_source_schema_collects_attributes() {
        let schema: DataSourceSchema = SchemaBuilder::new()
            .attribute(
                "id",
                StringAttribute {
                    optional: true,
                    computed: true,
                    ..Default::default()
                },
            )
            .attribute(
                "enabled",
                BoolAttribute {
                    computed: true,
                    ..Default::default()
                },
            )
            .build()
            .unwrap();

        let id = schema.attribute("id").unwrap();
        assert!(id.is_optional() && id.is_computed());
        assert!(schema.required_attributes().is_empty());
    }

    #[test]
    fn data_source_attribute_validates_value() {
        let attr = StringAttribute {
            required: true,
            validators: vec![string::one_of(&["asc", "desc"])],
            ..Default::default()
        };
        let mut diags = Diagnostics::new();

        attr.validate(
            &Value::known("sideways".to_string()),
            &AttributePath::new("order"),
            &mut diags,
        );

        assert!(diags.has_error());
    }
}
