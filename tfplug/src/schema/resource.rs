//! Resource attribute descriptors

use super::{
    delegate_descriptor, impl_flag_accessors, AttributeDescriptor, ListAttribute, MapAttribute,
    PrimitiveType, SetAttribute, StringKind,
};
use crate::attribute_type::AttributeType;
use crate::defaults::DefaultValue;
use crate::plan_modifier::{PlanModifier, PlanModifyRequest, PlanModifyResponse};
use crate::types::{AttributePath, Diagnostics, Value};
use crate::validator::{validate_all, Validator};
use std::sync::Arc;

pub type SingleNestedAttribute = super::SingleNestedAttribute<Attribute>;
pub type ListNestedAttribute = super::ListNestedAttribute<Attribute>;
pub type SetNestedAttribute = super::SetNestedAttribute<Attribute>;
pub type NestedAttributeObject = super::NestedAttributeObject<Attribute>;

/// A resource attribute holding a single primitive value
#[derive(Clone, Default)]
pub struct PrimitiveAttribute<T> {
    pub description: String,
    pub description_kind: StringKind,
    pub required: bool,
    pub optional: bool,
    pub computed: bool,
    pub sensitive: bool,
    pub default: Option<Arc<dyn DefaultValue<T>>>,
    pub validators: Vec<Arc<dyn Validator<T>>>,
    pub plan_modifiers: Vec<Arc<dyn PlanModifier>>,
}

pub type StringAttribute = PrimitiveAttribute<String>;
pub type BoolAttribute = PrimitiveAttribute<bool>;
pub type Int64Attribute = PrimitiveAttribute<i64>;
pub type Int32Attribute = PrimitiveAttribute<i32>;
pub type Float64Attribute = PrimitiveAttribute<f64>;

// Manual Debug implementation since validators/modifiers don't implement Debug
impl<T: PrimitiveType> std::fmt::Debug for PrimitiveAttribute<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrimitiveAttribute")
            .field("type", &T::attribute_type())
            .field("description", &self.description)
            .field("description_kind", &self.description_kind)
            .field("required", &self.required)
            .field("optional", &self.optional)
            .field("computed", &self.computed)
            .field("sensitive", &self.sensitive)
            .field(
                "default",
                &self.default.as_ref().map(|d| d.description()),
            )
            .field(
                "validators",
                &format!("{} validators", self.validators.len()),
            )
            .field(
                "plan_modifiers",
                &format!("{} plan modifiers", self.plan_modifiers.len()),
            )
            .finish()
    }
}

impl<T: PrimitiveType> PrimitiveAttribute<T> {
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// The value planned when configuration leaves the attribute out
    pub fn default_value(&self) -> Option<T> {
        self.default.as_ref().map(|d| d.default_value())
    }

    pub fn validate(&self, value: &Value<T>, path: &AttributePath, diagnostics: &mut Diagnostics) {
        validate_all(&self.validators, value, path, diagnostics);
    }

    pub fn modify_plan(&self, request: PlanModifyRequest) -> PlanModifyResponse {
        crate::plan_modifier::apply_all(&self.plan_modifiers, request)
    }
}

impl<T: PrimitiveType> AttributeDescriptor for PrimitiveAttribute<T> {
    impl_flag_accessors!();

    fn attribute_type(&self) -> AttributeType {
        T::attribute_type()
    }
}

/// Any resource attribute
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

macro_rules! attribute_conversions {
    ($($variant:ident($ty:ty) => $accessor:ident),+ $(,)?) => {
        $(
            impl From<$ty> for Attribute {
                fn from(attr: $ty) -> Self {
                    Attribute::$variant(attr)
                }
            }
        )+

        impl Attribute {
            $(
                pub fn $accessor(&self) -> Option<&$ty> {
                    match self {
                        Attribute::$variant(attr) => Some(attr),
                        _ => None,
                    }
                }
            )+
        }
    };
}

attribute_conversions! {
    String(StringAttribute) => as_string,
    Bool(BoolAttribute) => as_bool,
    Int64(Int64Attribute) => as_int64,
    Int32(Int32Attribute) => as_int32,
    Float64(Float64Attribute) => as_float64,
    List(ListAttribute) => as_list,
    Map(MapAttribute) => as_map,
    Set(SetAttribute) => as_set,
    SingleNested(SingleNestedAttribute) => as_single_nested,
    ListNested(ListNestedAttribute) => as_list_nested,
    SetNested(SetNestedAttribute) => as_set_nested,
}

impl Attribute {
    pub fn plan_modifiers(&self) -> &[Arc<dyn PlanModifier>] {
        match self {
            Attribute::String(a) => &a.plan_modifiers,
            Attribute::Bool(a) => &a.plan_modifiers,
            Attribute::Int64(a) => &a.plan_modifiers,
            Attribute::Int32(a) => &a.plan_modifiers,
            Attribute::Float64(a) => &a.plan_modifiers,
            _ => &[],
        }
    }

    pub fn has_default(&self) -> bool {
        match self {
            Attribute::String(a) => a.has_default(),
            Attribute::Bool(a) => a.has_default(),
            Attribute::Int64(a) => a.has_default(),
            Attribute::Int32(a) => a.has_default(),
            Attribute::Float64(a) => a.has_default(),
            _ => false,
        }
    }
}
