//! Named constructors for resource schema attributes
//!
//! Each function fixes one combination of flags on top of the builders in
//! [`config`](super::config). Attributes carrying validators use markdown
//! descriptions; the rest use plain text.

use super::config::*;
use super::{list_nested, set_nested, single_nested, Presence};
use regex::Regex;
use std::collections::HashMap;
use std::sync::Arc;
use tfplug::attribute_type::AttributeType;
use tfplug::defaults::StaticDefault;
use tfplug::plan_modifier::{self, PlanModifier};
use tfplug::schema::resource::{
    Attribute, BoolAttribute, Float64Attribute, Int32Attribute, Int64Attribute,
    ListNestedAttribute, SetNestedAttribute, SingleNestedAttribute, StringAttribute,
};
use tfplug::schema::{ListAttribute, MapAttribute, SetAttribute};
use tfplug::validator::{
    self, Float64Validator, Int32Validator, Int64Validator, SetValidator, StringValidator,
};

/// Child attributes for the nested constructors below
pub use tfplug::schema::resource::NestedAttributeObject;

pub type PlanModifiers = Vec<Arc<dyn PlanModifier>>;

fn string_config(description: &str) -> StringAttributeConfig {
    StringAttributeConfig::described(description)
}

fn bool_config(description: &str) -> BoolAttributeConfig {
    BoolAttributeConfig::described(description)
}

fn int64_config(description: &str) -> Int64AttributeConfig {
    Int64AttributeConfig::described(description)
}

fn int32_config(description: &str) -> Int32AttributeConfig {
    Int32AttributeConfig::described(description)
}

fn float64_config(description: &str) -> Float64AttributeConfig {
    Float64AttributeConfig::described(description)
}

// ---------------------------------------------------------------------------
// String
// ---------------------------------------------------------------------------

/// Computed `id` attribute
pub fn standard_id() -> StringAttribute {
    new_resource_string_attribute(string_config("Internal ID of the resource").computed())
}

/// Computed attribute tracking the last change to the resource
pub fn timestamp() -> StringAttribute {
    new_resource_string_attribute(
        string_config("String representation of the date/time the resource was last changed")
            .computed(),
    )
}

/// Same as [`timestamp`], named after the attribute it usually backs
pub fn last_updated() -> StringAttribute {
    timestamp()
}

pub fn required_string(description: &str) -> StringAttribute {
    new_resource_string_attribute(string_config(description).required())
}

pub fn optional_string(description: &str) -> StringAttribute {
    new_resource_string_attribute(string_config(description).optional())
}

pub fn computed_string(description: &str) -> StringAttribute {
    new_resource_string_attribute(string_config(description).computed())
}

/// Optional and computed; keeps the prior state value while unknown
pub fn computed_optional_string(description: &str) -> StringAttribute {
    new_resource_string_attribute(
        string_config(description)
            .optional()
            .computed()
            .plan_modifier(plan_modifier::use_state_for_unknown()),
    )
}

pub fn computed_string_with_default(description: &str, default_value: &str) -> StringAttribute {
    new_resource_string_attribute(
        string_config(description)
            .computed()
            .default_value(StaticDefault::string(default_value)),
    )
}

/// Optional and computed, falling back to `default_value`
pub fn string_with_default(description: &str, default_value: &str) -> StringAttribute {
    new_resource_string_attribute(
        string_config(description)
            .optional()
            .computed()
            .default_value(StaticDefault::string(default_value)),
    )
}

pub fn optional_string_with_default(description: &str, default_value: &str) -> StringAttribute {
    string_with_default(description, default_value)
}

pub fn computed_optional_string_with_default(
    description: &str,
    default_value: &str,
) -> StringAttribute {
    string_with_default(description, default_value)
}

/// Optional, hidden from plan output
pub fn sensitive_string(description: &str) -> StringAttribute {
    new_resource_string_attribute(string_config(description).optional().sensitive())
}

pub fn sensitive_required_string(description: &str) -> StringAttribute {
    new_resource_string_attribute(string_config(description).required().sensitive())
}

pub fn computed_sensitive_string(description: &str) -> StringAttribute {
    new_resource_string_attribute(string_config(description).computed().sensitive())
}

pub fn sensitive_optional_string_with_plan_modifier(
    description: &str,
    plan_modifiers: PlanModifiers,
) -> StringAttribute {
    new_resource_string_attribute(
        string_config(description)
            .optional()
            .sensitive()
            .plan_modifiers(plan_modifiers),
    )
}

/// Optional string restricted to `values`
pub fn string_enum(description: &str, values: &[&str]) -> StringAttribute {
    new_resource_string_attribute(
        string_config(description)
            .optional()
            .validator(validator::string::one_of(values)),
    )
}

pub fn optional_string_enum(description: &str, values: &[&str]) -> StringAttribute {
    string_enum(description, values)
}

pub fn required_string_enum(description: &str, values: &[&str]) -> StringAttribute {
    new_resource_string_attribute(
        string_config(description)
            .required()
            .validator(validator::string::one_of(values)),
    )
}

pub fn string_enum_with_default(
    description: &str,
    default_value: &str,
    values: &[&str],
) -> StringAttribute {
    new_resource_string_attribute(
        string_config(description)
            .optional()
            .computed()
            .default_value(StaticDefault::string(default_value))
            .validator(validator::string::one_of(values)),
    )
}

pub fn required_string_enum_with_plan_modifier(
    description: &str,
    plan_modifiers: PlanModifiers,
    values: &[&str],
) -> StringAttribute {
    new_resource_string_attribute(
        string_config(description)
            .required()
            .plan_modifiers(plan_modifiers)
            .validator(validator::string::one_of(values)),
    )
}

/// Required identifier; changing it replaces the resource
pub fn resource_id_attribute(description: &str) -> StringAttribute {
    new_resource_string_attribute(
        string_config(description)
            .required()
            .plan_modifier(plan_modifier::requires_replace()),
    )
}

pub fn required_string_with_plan_modifier(
    description: &str,
    plan_modifiers: PlanModifiers,
) -> StringAttribute {
    new_resource_string_attribute(string_config(description).required().plan_modifiers(plan_modifiers))
}

pub fn optional_string_with_plan_modifier(
    description: &str,
    plan_modifiers: PlanModifiers,
) -> StringAttribute {
    new_resource_string_attribute(string_config(description).optional().plan_modifiers(plan_modifiers))
}

pub fn computed_string_with_plan_modifier(
    description: &str,
    plan_modifiers: PlanModifiers,
) -> StringAttribute {
    new_resource_string_attribute(string_config(description).computed().plan_modifiers(plan_modifiers))
}

pub fn computed_optional_string_with_plan_modifier(
    description: &str,
    plan_modifiers: PlanModifiers,
) -> StringAttribute {
    new_resource_string_attribute(
        string_config(description)
            .optional()
            .computed()
            .plan_modifiers(plan_modifiers),
    )
}

pub fn optional_string_with_default_and_plan_modifier(
    description: &str,
    default_value: &str,
    plan_modifiers: PlanModifiers,
) -> StringAttribute {
    new_resource_string_attribute(
        string_config(description)
            .optional()
            .computed()
            .default_value(StaticDefault::string(default_value))
            .plan_modifiers(plan_modifiers),
    )
}

pub fn computed_string_with_default_and_plan_modifier(
    description: &str,
    default_value: &str,
    plan_modifiers: PlanModifiers,
) -> StringAttribute {
    new_resource_string_attribute(
        string_config(description)
            .computed()
            .default_value(StaticDefault::string(default_value))
            .plan_modifiers(plan_modifiers),
    )
}

pub fn computed_optional_string_with_default_and_plan_modifier(
    description: &str,
    default_value: &str,
    plan_modifiers: PlanModifiers,
) -> StringAttribute {
    optional_string_with_default_and_plan_modifier(description, default_value, plan_modifiers)
}

// ---------------------------------------------------------------------------
// Bool
// ---------------------------------------------------------------------------

pub fn required_bool(description: &str) -> BoolAttribute {
    new_resource_bool_attribute(bool_config(description).required())
}

pub fn optional_bool(description: &str) -> BoolAttribute {
    new_resource_bool_attribute(bool_config(description).optional())
}

pub fn computed_bool(description: &str) -> BoolAttribute {
    new_resource_bool_attribute(bool_config(description).computed())
}

/// Optional and computed; keeps the prior state value while unknown
pub fn computed_optional_bool(description: &str) -> BoolAttribute {
    new_resource_bool_attribute(
        bool_config(description)
            .optional()
            .computed()
            .plan_modifier(plan_modifier::use_state_for_unknown()),
    )
}

pub fn required_bool_with_default(description: &str, default_value: bool) -> BoolAttribute {
    new_resource_bool_attribute(
        bool_config(description)
            .required()
            .default_value(StaticDefault::bool(default_value)),
    )
}

pub fn optional_bool_with_default(description: &str, default_value: bool) -> BoolAttribute {
    new_resource_bool_attribute(
        bool_config(description)
            .optional()
            .computed()
            .default_value(StaticDefault::bool(default_value)),
    )
}

pub fn computed_bool_with_default(description: &str, default_value: bool) -> BoolAttribute {
    new_resource_bool_attribute(
        bool_config(description)
            .computed()
            .default_value(StaticDefault::bool(default_value)),
    )
}

pub fn computed_optional_bool_with_default(description: &str, default_value: bool) -> BoolAttribute {
    optional_bool_with_default(description, default_value)
}

pub fn optional_bool_with_plan_modifier(
    description: &str,
    plan_modifiers: PlanModifiers,
) -> BoolAttribute {
    new_resource_bool_attribute(bool_config(description).optional().plan_modifiers(plan_modifiers))
}

pub fn computed_optional_bool_with_plan_modifier(
    description: &str,
    plan_modifiers: PlanModifiers,
) -> BoolAttribute {
    new_resource_bool_attribute(
        bool_config(description)
            .optional()
            .computed()
            .plan_modifiers(plan_modifiers),
    )
}

pub fn optional_bool_with_default_and_plan_modifier(
    description: &str,
    default_value: bool,
    plan_modifiers: PlanModifiers,
) -> BoolAttribute {
    new_resource_bool_attribute(
        bool_config(description)
            .optional()
            .computed()
            .default_value(StaticDefault::bool(default_value))
            .plan_modifiers(plan_modifiers),
    )
}

pub fn computed_optional_bool_with_default_and_plan_modifier(
    description: &str,
    default_value: bool,
    plan_modifiers: PlanModifiers,
) -> BoolAttribute {
    optional_bool_with_default_and_plan_modifier(description, default_value, plan_modifiers)
}

// ---------------------------------------------------------------------------
// Int64
// ---------------------------------------------------------------------------

pub fn required_int64(description: &str) -> Int64Attribute {
    new_resource_int64_attribute(int64_config(description).required())
}

pub fn optional_int64(description: &str) -> Int64Attribute {
    new_resource_int64_attribute(int64_config(description).optional())
}

pub fn computed_int64(description: &str) -> Int64Attribute {
    new_resource_int64_attribute(int64_config(description).computed())
}

pub fn computed_optional_int64(description: &str) -> Int64Attribute {
    new_resource_int64_attribute(int64_config(description).optional().computed())
}

pub fn required_int64_with_default(description: &str, default_value: i64) -> Int64Attribute {
    new_resource_int64_attribute(
        int64_config(description)
            .required()
            .default_value(StaticDefault::int64(default_value)),
    )
}

pub fn optional_int64_with_default(description: &str, default_value: i64) -> Int64Attribute {
    new_resource_int64_attribute(
        int64_config(description)
            .optional()
            .computed()
            .default_value(StaticDefault::int64(default_value)),
    )
}

pub fn computed_int64_with_default(description: &str, default_value: i64) -> Int64Attribute {
    new_resource_int64_attribute(
        int64_config(description)
            .computed()
            .default_value(StaticDefault::int64(default_value)),
    )
}

pub fn computed_optional_int64_with_default(description: &str, default_value: i64) -> Int64Attribute {
    optional_int64_with_default(description, default_value)
}

pub fn optional_int64_with_default_and_plan_modifier(
    description: &str,
    default_value: i64,
    plan_modifiers: PlanModifiers,
) -> Int64Attribute {
    new_resource_int64_attribute(
        int64_config(description)
            .optional()
            .computed()
            .default_value(StaticDefault::int64(default_value))
            .plan_modifiers(plan_modifiers),
    )
}

pub fn computed_int64_with_default_and_plan_modifier(
    description: &str,
    default_value: i64,
    plan_modifiers: PlanModifiers,
) -> Int64Attribute {
    new_resource_int64_attribute(
        int64_config(description)
            .computed()
            .default_value(StaticDefault::int64(default_value))
            .plan_modifiers(plan_modifiers),
    )
}

pub fn computed_optional_int64_with_default_and_plan_modifier(
    description: &str,
    default_value: i64,
    plan_modifiers: PlanModifiers,
) -> Int64Attribute {
    optional_int64_with_default_and_plan_modifier(description, default_value, plan_modifiers)
}

/// Optional network port; range checks belong in `optional_int64_with_range`
pub fn optional_port(description: &str) -> Int64Attribute {
    optional_int64(description)
}

pub fn required_port(description: &str) -> Int64Attribute {
    required_int64(description)
}

pub fn port_with_default(description: &str, default_value: i64) -> Int64Attribute {
    optional_int64_with_default(description, default_value)
}

/// Optional percentage (0-100 by convention, not enforced)
pub fn percentage_int(description: &str) -> Int64Attribute {
    optional_int64(description)
}

pub fn required_percentage_int(description: &str) -> Int64Attribute {
    required_int64(description)
}

/// Optional duration in seconds
pub fn duration_int(description: &str) -> Int64Attribute {
    optional_int64(description)
}

pub fn required_duration_int(description: &str) -> Int64Attribute {
    required_int64(description)
}

/// Timeout in seconds, defaulting to `default_seconds`
pub fn timeout_int(description: &str, default_seconds: i64) -> Int64Attribute {
    optional_int64_with_default(description, default_seconds)
}

/// Count defaulting to zero
pub fn count_int(description: &str) -> Int64Attribute {
    optional_int64_with_default(description, 0)
}

// ---------------------------------------------------------------------------
// Int32
// ---------------------------------------------------------------------------

pub fn required_int32(description: &str) -> Int32Attribute {
    new_resource_int32_attribute(int32_config(description).required())
}

pub fn optional_int32(description: &str) -> Int32Attribute {
    new_resource_int32_attribute(int32_config(description).optional())
}

pub fn computed_int32(description: &str) -> Int32Attribute {
    new_resource_int32_attribute(int32_config(description).computed())
}

pub fn computed_optional_int32(description: &str) -> Int32Attribute {
    new_resource_int32_attribute(int32_config(description).optional().computed())
}

pub fn required_int32_with_default(description: &str, default_value: i32) -> Int32Attribute {
    new_resource_int32_attribute(
        int32_config(description)
            .required()
            .default_value(StaticDefault::int32(default_value)),
    )
}

pub fn optional_int32_with_default(description: &str, default_value: i32) -> Int32Attribute {
    new_resource_int32_attribute(
        int32_config(description)
            .optional()
            .computed()
            .default_value(StaticDefault::int32(default_value)),
    )
}

pub fn computed_int32_with_default(description: &str, default_value: i32) -> Int32Attribute {
    new_resource_int32_attribute(
        int32_config(description)
            .computed()
            .default_value(StaticDefault::int32(default_value)),
    )
}

pub fn computed_optional_int32_with_default(description: &str, default_value: i32) -> Int32Attribute {
    optional_int32_with_default(description, default_value)
}

pub fn optional_int32_with_plan_modifier(
    description: &str,
    plan_modifiers: PlanModifiers,
) -> Int32Attribute {
    new_resource_int32_attribute(int32_config(description).optional().plan_modifiers(plan_modifiers))
}

pub fn computed_optional_int32_with_plan_modifier(
    description: &str,
    plan_modifiers: PlanModifiers,
) -> Int32Attribute {
    new_resource_int32_attribute(
        int32_config(description)
            .optional()
            .computed()
            .plan_modifiers(plan_modifiers),
    )
}

pub fn optional_int32_with_default_and_plan_modifier(
    description: &str,
    default_value: i32,
    plan_modifiers: PlanModifiers,
) -> Int32Attribute {
    new_resource_int32_attribute(
        int32_config(description)
            .optional()
            .computed()
            .default_value(StaticDefault::int32(default_value))
            .plan_modifiers(plan_modifiers),
    )
}

pub fn computed_optional_int32_with_default_and_plan_modifier(
    description: &str,
    default_value: i32,
    plan_modifiers: PlanModifiers,
) -> Int32Attribute {
    optional_int32_with_default_and_plan_modifier(description, default_value, plan_modifiers)
}

pub fn optional_int32_with_validator(
    description: &str,
    validators: Vec<Arc<Int32Validator>>,
) -> Int32Attribute {
    new_resource_int32_attribute(int32_config(description).optional().validators(validators))
}

pub fn required_int32_with_validator(
    description: &str,
    validators: Vec<Arc<Int32Validator>>,
) -> Int32Attribute {
    new_resource_int32_attribute(int32_config(description).required().validators(validators))
}

pub fn optional_int32_with_default_and_validator(
    description: &str,
    default_value: i32,
    validators: Vec<Arc<Int32Validator>>,
) -> Int32Attribute {
    new_resource_int32_attribute(
        int32_config(description)
            .optional()
            .computed()
            .default_value(StaticDefault::int32(default_value))
            .validators(validators),
    )
}

pub fn computed_optional_int32_with_default_and_validator(
    description: &str,
    default_value: i32,
    validators: Vec<Arc<Int32Validator>>,
) -> Int32Attribute {
    optional_int32_with_default_and_validator(description, default_value, validators)
}

// ---------------------------------------------------------------------------
// Float64
// ---------------------------------------------------------------------------

pub fn required_float64(description: &str) -> Float64Attribute {
    new_resource_float64_attribute(float64_config(description).required())
}

pub fn optional_float64(description: &str) -> Float64Attribute {
    new_resource_float64_attribute(float64_config(description).optional())
}

pub fn computed_float64(description: &str) -> Float64Attribute {
    new_resource_float64_attribute(float64_config(description).computed())
}

pub fn computed_optional_float64(description: &str) -> Float64Attribute {
    new_resource_float64_attribute(float64_config(description).optional().computed())
}

pub fn required_float64_with_default(description: &str, default_value: f64) -> Float64Attribute {
    new_resource_float64_attribute(
        float64_config(description)
            .required()
            .default_value(StaticDefault::float64(default_value)),
    )
}

pub fn optional_float64_with_default(description: &str, default_value: f64) -> Float64Attribute {
    new_resource_float64_attribute(
        float64_config(description)
            .optional()
            .computed()
            .default_value(StaticDefault::float64(default_value)),
    )
}

pub fn computed_float64_with_default(description: &str, default_value: f64) -> Float64Attribute {
    new_resource_float64_attribute(
        float64_config(description)
            .computed()
            .default_value(StaticDefault::float64(default_value)),
    )
}

pub fn computed_optional_float64_with_default(
    description: &str,
    default_value: f64,
) -> Float64Attribute {
    optional_float64_with_default(description, default_value)
}

pub fn optional_float64_with_default_and_plan_modifier(
    description: &str,
    default_value: f64,
    plan_modifiers: PlanModifiers,
) -> Float64Attribute {
    new_resource_float64_attribute(
        float64_config(description)
            .optional()
            .computed()
            .default_value(StaticDefault::float64(default_value))
            .plan_modifiers(plan_modifiers),
    )
}

pub fn computed_float64_with_default_and_plan_modifier(
    description: &str,
    default_value: f64,
    plan_modifiers: PlanModifiers,
) -> Float64Attribute {
    new_resource_float64_attribute(
        float64_config(description)
            .computed()
            .default_value(StaticDefault::float64(default_value))
            .plan_modifiers(plan_modifiers),
    )
}

pub fn computed_optional_float64_with_default_and_plan_modifier(
    description: &str,
    default_value: f64,
    plan_modifiers: PlanModifiers,
) -> Float64Attribute {
    optional_float64_with_default_and_plan_modifier(description, default_value, plan_modifiers)
}

// ---------------------------------------------------------------------------
// Lists, maps and sets
// ---------------------------------------------------------------------------

fn list(config: CollectionConfig) -> ListAttribute {
    new_resource_list_attribute(config)
}

fn map(config: CollectionConfig) -> MapAttribute {
    new_resource_map_attribute(config)
}

fn set(config: CollectionConfig) -> SetAttribute {
    new_resource_set_attribute(config)
}

pub fn required_string_list(description: &str) -> ListAttribute {
    list(CollectionConfig::new(description, AttributeType::String).required())
}

pub fn optional_string_list(description: &str) -> ListAttribute {
    list(CollectionConfig::new(description, AttributeType::String).optional())
}

pub fn computed_string_list(description: &str) -> ListAttribute {
    list(CollectionConfig::new(description, AttributeType::String).computed())
}

pub fn computed_optional_string_list(description: &str) -> ListAttribute {
    list(CollectionConfig::new(description, AttributeType::String).optional().computed())
}

pub fn required_int64_list(description: &str) -> ListAttribute {
    list(CollectionConfig::new(description, AttributeType::Int64).required())
}

pub fn optional_int64_list(description: &str) -> ListAttribute {
    list(CollectionConfig::new(description, AttributeType::Int64).optional())
}

pub fn computed_int64_list(description: &str) -> ListAttribute {
    list(CollectionConfig::new(description, AttributeType::Int64).computed())
}

pub fn computed_optional_int64_list(description: &str) -> ListAttribute {
    list(CollectionConfig::new(description, AttributeType::Int64).optional().computed())
}

pub fn required_bool_list(description: &str) -> ListAttribute {
    list(CollectionConfig::new(description, AttributeType::Bool).required())
}

pub fn optional_bool_list(description: &str) -> ListAttribute {
    list(CollectionConfig::new(description, AttributeType::Bool).optional())
}

pub fn computed_bool_list(description: &str) -> ListAttribute {
    list(CollectionConfig::new(description, AttributeType::Bool).computed())
}

pub fn computed_optional_bool_list(description: &str) -> ListAttribute {
    list(CollectionConfig::new(description, AttributeType::Bool).optional().computed())
}

pub fn required_string_map(description: &str) -> MapAttribute {
    map(CollectionConfig::new(description, AttributeType::String).required())
}

pub fn optional_string_map(description: &str) -> MapAttribute {
    map(CollectionConfig::new(description, AttributeType::String).optional())
}

pub fn computed_string_map(description: &str) -> MapAttribute {
    map(CollectionConfig::new(description, AttributeType::String).computed())
}

pub fn computed_optional_string_map(description: &str) -> MapAttribute {
    map(CollectionConfig::new(description, AttributeType::String).optional().computed())
}

pub fn required_int64_map(description: &str) -> MapAttribute {
    map(CollectionConfig::new(description, AttributeType::Int64).required())
}

pub fn optional_int64_map(description: &str) -> MapAttribute {
    map(CollectionConfig::new(description, AttributeType::Int64).optional())
}

pub fn computed_int64_map(description: &str) -> MapAttribute {
    map(CollectionConfig::new(description, AttributeType::Int64).computed())
}

pub fn computed_optional_int64_map(description: &str) -> MapAttribute {
    map(CollectionConfig::new(description, AttributeType::Int64).optional().computed())
}

pub fn required_bool_map(description: &str) -> MapAttribute {
    map(CollectionConfig::new(description, AttributeType::Bool).required())
}

pub fn optional_bool_map(description: &str) -> MapAttribute {
    map(CollectionConfig::new(description, AttributeType::Bool).optional())
}

pub fn computed_bool_map(description: &str) -> MapAttribute {
    map(CollectionConfig::new(description, AttributeType::Bool).computed())
}

pub fn computed_optional_bool_map(description: &str) -> MapAttribute {
    map(CollectionConfig::new(description, AttributeType::Bool).optional().computed())
}

pub fn required_string_set(description: &str) -> SetAttribute {
    set(CollectionConfig::new(description, AttributeType::String).required())
}

pub fn optional_string_set(description: &str) -> SetAttribute {
    set(CollectionConfig::new(description, AttributeType::String).optional())
}

pub fn computed_string_set(description: &str) -> SetAttribute {
    set(CollectionConfig::new(description, AttributeType::String).computed())
}

pub fn computed_optional_string_set(description: &str) -> SetAttribute {
    set(CollectionConfig::new(description, AttributeType::String).optional().computed())
}

pub fn required_int64_set(description: &str) -> SetAttribute {
    set(CollectionConfig::new(description, AttributeType::Int64).required())
}

pub fn optional_int64_set(description: &str) -> SetAttribute {
    set(CollectionConfig::new(description, AttributeType::Int64).optional())
}

pub fn computed_int64_set(description: &str) -> SetAttribute {
    set(CollectionConfig::new(description, AttributeType::Int64).computed())
}

pub fn computed_optional_int64_set(description: &str) -> SetAttribute {
    set(CollectionConfig::new(description, AttributeType::Int64).optional().computed())
}

pub fn required_bool_set(description: &str) -> SetAttribute {
    set(CollectionConfig::new(description, AttributeType::Bool).required())
}

pub fn optional_bool_set(description: &str) -> SetAttribute {
    set(CollectionConfig::new(description, AttributeType::Bool).optional())
}

pub fn computed_bool_set(description: &str) -> SetAttribute {
    set(CollectionConfig::new(description, AttributeType::Bool).computed())
}

pub fn computed_optional_bool_set(description: &str) -> SetAttribute {
    set(CollectionConfig::new(description, AttributeType::Bool).optional().computed())
}

pub fn required_string_set_with_validator(
    description: &str,
    validators: Vec<Arc<SetValidator>>,
) -> SetAttribute {
    set(CollectionConfig::markdown(description, AttributeType::String)
        .required()
        .validators(validators))
}

pub fn optional_string_set_with_validator(
    description: &str,
    validators: Vec<Arc<SetValidator>>,
) -> SetAttribute {
    set(CollectionConfig::markdown(description, AttributeType::String)
        .optional()
        .validators(validators))
}

pub fn computed_string_set_with_validator(
    description: &str,
    validators: Vec<Arc<SetValidator>>,
) -> SetAttribute {
    set(CollectionConfig::markdown(description, AttributeType::String)
        .computed()
        .validators(validators))
}

pub fn required_int64_set_with_validator(
    description: &str,
    validators: Vec<Arc<SetValidator>>,
) -> SetAttribute {
    set(CollectionConfig::markdown(description, AttributeType::Int64)
        .required()
        .validators(validators))
}

pub fn optional_int64_set_with_validator(
    description: &str,
    validators: Vec<Arc<SetValidator>>,
) -> SetAttribute {
    set(CollectionConfig::markdown(description, AttributeType::Int64)
        .optional()
        .validators(validators))
}

pub fn computed_int64_set_with_validator(
    description: &str,
    validators: Vec<Arc<SetValidator>>,
) -> SetAttribute {
    set(CollectionConfig::markdown(description, AttributeType::Int64)
        .computed()
        .validators(validators))
}

pub fn required_bool_set_with_validator(
    description: &str,
    validators: Vec<Arc<SetValidator>>,
) -> SetAttribute {
    set(CollectionConfig::markdown(description, AttributeType::Bool)
        .required()
        .validators(validators))
}

pub fn optional_bool_set_with_validator(
    description: &str,
    validators: Vec<Arc<SetValidator>>,
) -> SetAttribute {
    set(CollectionConfig::markdown(description, AttributeType::Bool)
        .optional()
        .validators(validators))
}

pub fn computed_bool_set_with_validator(
    description: &str,
    validators: Vec<Arc<SetValidator>>,
) -> SetAttribute {
    set(CollectionConfig::markdown(description, AttributeType::Bool)
        .computed()
        .validators(validators))
}

// ---------------------------------------------------------------------------
// Nested
// ---------------------------------------------------------------------------

pub fn required_single_nested_attribute(
    description: &str,
    attributes: HashMap<String, Attribute>,
) -> SingleNestedAttribute {
    single_nested(description, attributes, Presence::Required)
}

pub fn optional_single_nested_attribute(
    description: &str,
    attributes: HashMap<String, Attribute>,
) -> SingleNestedAttribute {
    single_nested(description, attributes, Presence::Optional)
}

pub fn computed_single_nested_attribute(
    description: &str,
    attributes: HashMap<String, Attribute>,
) -> SingleNestedAttribute {
    single_nested(description, attributes, Presence::Computed)
}

pub fn computed_optional_single_nested_attribute(
    description: &str,
    attributes: HashMap<String, Attribute>,
) -> SingleNestedAttribute {
    single_nested(description, attributes, Presence::ComputedOptional)
}

pub fn required_list_nested_attribute(
    description: &str,
    nested_object: NestedAttributeObject,
) -> ListNestedAttribute {
    list_nested(description, nested_object, Presence::Required)
}

pub fn optional_list_nested_attribute(
    description: &str,
    nested_object: NestedAttributeObject,
) -> ListNestedAttribute {
    list_nested(description, nested_object, Presence::Optional)
}

pub fn computed_list_nested_attribute(
    description: &str,
    nested_object: NestedAttributeObject,
) -> ListNestedAttribute {
    list_nested(description, nested_object, Presence::Computed)
}

pub fn computed_optional_list_nested_attribute(
    description: &str,
    nested_object: NestedAttributeObject,
) -> ListNestedAttribute {
    list_nested(description, nested_object, Presence::ComputedOptional)
}

pub fn required_set_nested_attribute(
    description: &str,
    nested_object: NestedAttributeObject,
) -> SetNestedAttribute {
    set_nested(description, nested_object, Presence::Required)
}

pub fn optional_set_nested_attribute(
    description: &str,
    nested_object: NestedAttributeObject,
) -> SetNestedAttribute {
    set_nested(description, nested_object, Presence::Optional)
}

pub fn computed_set_nested_attribute(
    description: &str,
    nested_object: NestedAttributeObject,
) -> SetNestedAttribute {
    set_nested(description, nested_object, Presence::Computed)
}

pub fn computed_optional_set_nested_attribute(
    description: &str,
    nested_object: NestedAttributeObject,
) -> SetNestedAttribute {
    set_nested(description, nested_object, Presence::ComputedOptional)
}

// ---------------------------------------------------------------------------
// Validator-bearing attributes
// ---------------------------------------------------------------------------

fn md_string(description: &str) -> StringAttributeConfig {
    StringAttributeConfig::markdown(description)
}

fn regex_validator(pattern: Regex, message: &str) -> Arc<StringValidator> {
    validator::string::regex_matches(pattern, message)
}

pub fn required_string_with_regex(description: &str, pattern: Regex, message: &str) -> StringAttribute {
    new_resource_string_attribute(
        md_string(description)
            .required()
            .validator(regex_validator(pattern, message)),
    )
}

pub fn optional_string_with_regex(description: &str, pattern: Regex, message: &str) -> StringAttribute {
    new_resource_string_attribute(
        md_string(description)
            .optional()
            .validator(regex_validator(pattern, message)),
    )
}

pub fn computed_string_with_regex(description: &str, pattern: Regex, message: &str) -> StringAttribute {
    new_resource_string_attribute(
        md_string(description)
            .computed()
            .validator(regex_validator(pattern, message)),
    )
}

/// Required string checked by `validators`
pub fn string_with_validators(
    description: &str,
    validators: Vec<Arc<StringValidator>>,
) -> StringAttribute {
    required_string_with_validators(description, validators)
}

pub fn required_string_with_validators(
    description: &str,
    validators: Vec<Arc<StringValidator>>,
) -> StringAttribute {
    new_resource_string_attribute(md_string(description).required().validators(validators))
}

pub fn optional_string_with_validators(
    description: &str,
    validators: Vec<Arc<StringValidator>>,
) -> StringAttribute {
    new_resource_string_attribute(md_string(description).optional().validators(validators))
}

pub fn computed_string_with_validators(
    description: &str,
    validators: Vec<Arc<StringValidator>>,
) -> StringAttribute {
    new_resource_string_attribute(md_string(description).computed().validators(validators))
}

pub fn required_string_with_length_between(description: &str, min: usize, max: usize) -> StringAttribute {
    new_resource_string_attribute(
        md_string(description)
            .required()
            .validator(validator::string::length_between(min, max)),
    )
}

pub fn optional_string_with_length_between(description: &str, min: usize, max: usize) -> StringAttribute {
    new_resource_string_attribute(
        md_string(description)
            .optional()
            .validator(validator::string::length_between(min, max)),
    )
}

pub fn required_string_with_length_at_least(description: &str, min: usize) -> StringAttribute {
    new_resource_string_attribute(
        md_string(description)
            .required()
            .validator(validator::string::length_at_least(min)),
    )
}

pub fn optional_string_with_length_at_least(description: &str, min: usize) -> StringAttribute {
    new_resource_string_attribute(
        md_string(description)
            .optional()
            .validator(validator::string::length_at_least(min)),
    )
}

pub fn required_string_with_length_at_most(description: &str, max: usize) -> StringAttribute {
    new_resource_string_attribute(
        md_string(description)
            .required()
            .validator(validator::string::length_at_most(max)),
    )
}

pub fn optional_string_with_length_at_most(description: &str, max: usize) -> StringAttribute {
    new_resource_string_attribute(
        md_string(description)
            .optional()
            .validator(validator::string::length_at_most(max)),
    )
}

pub fn required_sensitive_string_with_length_at_least(description: &str, min: usize) -> StringAttribute {
    new_resource_string_attribute(
        md_string(description)
            .required()
            .sensitive()
            .validator(validator::string::length_at_least(min)),
    )
}

pub fn optional_sensitive_string_with_length_at_least(description: &str, min: usize) -> StringAttribute {
    new_resource_string_attribute(
        md_string(description)
            .optional()
            .sensitive()
            .validator(validator::string::length_at_least(min)),
    )
}

pub fn required_string_with_regex_and_length(
    description: &str,
    pattern: Regex,
    message: &str,
    min: usize,
    max: usize,
) -> StringAttribute {
    new_resource_string_attribute(
        md_string(description)
            .required()
            .validator(regex_validator(pattern, message))
            .validator(validator::string::length_between(min, max)),
    )
}

pub fn optional_string_with_regex_and_length(
    description: &str,
    pattern: Regex,
    message: &str,
    min: usize,
    max: usize,
) -> StringAttribute {
    new_resource_string_attribute(
        md_string(description)
            .optional()
            .validator(regex_validator(pattern, message))
            .validator(validator::string::length_between(min, max)),
    )
}

pub fn required_int32_with_range(description: &str, min: i32, max: i32) -> Int32Attribute {
    new_resource_int32_attribute(
        Int32AttributeConfig::markdown(description)
            .required()
            .validator(validator::int32::between(min, max)),
    )
}

pub fn optional_int32_with_range(description: &str, min: i32, max: i32) -> Int32Attribute {
    new_resource_int32_attribute(
        Int32AttributeConfig::markdown(description)
            .optional()
            .validator(validator::int32::between(min, max)),
    )
}

pub fn computed_int32_with_range(description: &str, min: i32, max: i32) -> Int32Attribute {
    new_resource_int32_attribute(
        Int32AttributeConfig::markdown(description)
            .computed()
            .validator(validator::int32::between(min, max)),
    )
}

/// Required int32 checked by `validators`
pub fn int32_with_validators(description: &str, validators: Vec<Arc<Int32Validator>>) -> Int32Attribute {
    required_int32_with_validators(description, validators)
}

pub fn required_int32_with_validators(
    description: &str,
    validators: Vec<Arc<Int32Validator>>,
) -> Int32Attribute {
    new_resource_int32_attribute(
        Int32AttributeConfig::markdown(description)
            .required()
            .validators(validators),
    )
}

pub fn optional_int32_with_validators(
    description: &str,
    validators: Vec<Arc<Int32Validator>>,
) -> Int32Attribute {
    new_resource_int32_attribute(
        Int32AttributeConfig::markdown(description)
            .optional()
            .validators(validators),
    )
}

pub fn computed_int32_with_validators(
    description: &str,
    validators: Vec<Arc<Int32Validator>>,
) -> Int32Attribute {
    new_resource_int32_attribute(
        Int32AttributeConfig::markdown(description)
            .computed()
            .validators(validators),
    )
}

pub fn required_int64_with_range(description: &str, min: i64, max: i64) -> Int64Attribute {
    new_resource_int64_attribute(
        Int64AttributeConfig::markdown(description)
            .required()
            .validator(validator::int64::between(min, max)),
    )
}

pub fn optional_int64_with_range(description: &str, min: i64, max: i64) -> Int64Attribute {
    new_resource_int64_attribute(
        Int64AttributeConfig::markdown(description)
            .optional()
            .validator(validator::int64::between(min, max)),
    )
}

pub fn computed_int64_with_range(description: &str, min: i64, max: i64) -> Int64Attribute {
    new_resource_int64_attribute(
        Int64AttributeConfig::markdown(description)
            .computed()
            .validator(validator::int64::between(min, max)),
    )
}

/// Required int64 checked by `validators`
pub fn int64_with_validators(description: &str, validators: Vec<Arc<Int64Validator>>) -> Int64Attribute {
    required_int64_with_validators(description, validators)
}

pub fn required_int64_with_validators(
    description: &str,
    validators: Vec<Arc<Int64Validator>>,
) -> Int64Attribute {
    new_resource_int64_attribute(
        Int64AttributeConfig::markdown(description)
            .required()
            .validators(validators),
    )
}

pub fn optional_int64_with_validators(
    description: &str,
    validators: Vec<Arc<Int64Validator>>,
) -> Int64Attribute {
    new_resource_int64_attribute(
        Int64AttributeConfig::markdown(description)
            .optional()
            .validators(validators),
    )
}

pub fn computed_int64_with_validators(
    description: &str,
    validators: Vec<Arc<Int64Validator>>,
) -> Int64Attribute {
    new_resource_int64_attribute(
        Int64AttributeConfig::markdown(description)
            .computed()
            .validators(validators),
    )
}

pub fn optional_int64_with_default_and_validators(
    description: &str,
    default_value: i64,
    validators: Vec<Arc<Int64Validator>>,
) -> Int64Attribute {
    new_resource_int64_attribute(
        Int64AttributeConfig::markdown(description)
            .optional()
            .computed()
            .default_value(StaticDefault::int64(default_value))
            .validators(validators),
    )
}

pub fn required_int64_with_default_and_validators(
    description: &str,
    default_value: i64,
    validators: Vec<Arc<Int64Validator>>,
) -> Int64Attribute {
    new_resource_int64_attribute(
        Int64AttributeConfig::markdown(description)
            .required()
            .default_value(StaticDefault::int64(default_value))
            .validators(validators),
    )
}

pub fn computed_int64_with_default_and_validators(
    description: &str,
    default_value: i64,
    validators: Vec<Arc<Int64Validator>>,
) -> Int64Attribute {
    new_resource_int64_attribute(
        Int64AttributeConfig::markdown(description)
            .computed()
            .default_value(StaticDefault::int64(default_value))
            .validators(validators),
    )
}

pub fn required_float64_with_range(description: &str, min: f64, max: f64) -> Float64Attribute {
    new_resource_float64_attribute(
        Float64AttributeConfig::markdown(description)
            .required()
            .validator(validator::float64::between(min, max)),
    )
}

pub fn optional_float64_with_range(description: &str, min: f64, max: f64) -> Float64Attribute {
    new_resource_float64_attribute(
        Float64AttributeConfig::markdown(description)
            .optional()
            .validator(validator::float64::between(min, max)),
    )
}

pub fn computed_float64_with_range(description: &str, min: f64, max: f64) -> Float64Attribute {
    new_resource_float64_attribute(
        Float64AttributeConfig::markdown(description)
            .computed()
            .validator(validator::float64::between(min, max)),
    )
}

/// Required float64 checked by `validators`
pub fn float64_with_validators(
    description: &str,
    validators: Vec<Arc<Float64Validator>>,
) -> Float64Attribute {
    required_float64_with_validators(description, validators)
}

pub fn required_float64_with_validators(
    description: &str,
    validators: Vec<Arc<Float64Validator>>,
) -> Float64Attribute {
    new_resource_float64_attribute(
        Float64AttributeConfig::markdown(description)
            .required()
            .validators(validators),
    )
}

pub fn optional_float64_with_validators(
    description: &str,
    validators: Vec<Arc<Float64Validator>>,
) -> Float64Attribute {
    new_resource_float64_attribute(
        Float64AttributeConfig::markdown(description)
            .optional()
            .validators(validators),
    )
}

pub fn computed_float64_with_validators(
    description: &str,
    validators: Vec<Arc<Float64Validator>>,
) -> Float64Attribute {
    new_resource_float64_attribute(
        Float64AttributeConfig::markdown(description)
            .computed()
            .validators(validators),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tfplug::schema::{AttributeDescriptor, StringKind};
    use tfplug::types::{AttributePath, Diagnostics, Dynamic, Value};
    use tfplug::plan_modifier::PlanModifyRequest;

    #[test]
    fn standard_id_is_computed_only() {
        let attr = standard_id();

        assert_eq!(attr.description(), "Internal ID of the resource");
        assert!(attr.is_computed());
        assert!(!attr.is_required());
        assert!(!attr.is_optional());
    }

    #[test]
    fn computed_optional_string_keeps_state_for_unknown() {
        let attr = computed_optional_string("Region");

        let response = attr.modify_plan(PlanModifyRequest {
            state: Dynamic::from("eu-west-1"),
            plan: Dynamic::Unknown,
            config: Dynamic::Null,
            attribute_path: AttributePath::new("region"),
        });

        assert!(attr.is_optional() && attr.is_computed());
        assert_eq!(response.plan_value, Dynamic::from("eu-west-1"));
    }

    #[test]
    fn resource_id_attribute_requires_replace_on_change() {
        let attr = resource_id_attribute("Repository ID");

        let response = attr.modify_plan(PlanModifyRequest {
            state: Dynamic::from("repo-1"),
            plan: Dynamic::from("repo-2"),
            config: Dynamic::from("repo-2"),
            attribute_path: AttributePath::new("repository_id"),
        });

        assert!(attr.is_required());
        assert!(response.requires_replace);
    }

    #[test]
    fn string_enum_with_default_validates_and_defaults() {
        let attr = string_enum_with_default("Mode", "fast", &["fast", "slow"]);
        let mut diags = Diagnostics::new();

        attr.validate(&Value::known("medium".to_string()), &AttributePath::new("mode"), &mut diags);

        assert_eq!(attr.default_value().as_deref(), Some("fast"));
        assert!(attr.is_optional() && attr.is_computed());
        assert!(diags.has_error());
    }

    #[test]
    fn sensitive_strings_are_sensitive() {
        assert!(sensitive_string("Password").is_optional());
        assert!(sensitive_string("Password").is_sensitive());
        assert!(sensitive_required_string("Token").is_required());
        assert!(computed_sensitive_string("Secret").is_computed());
        assert!(sensitive_optional_string_with_plan_modifier("Key", vec![]).is_sensitive());
    }

    #[test]
    fn required_with_default_keeps_required_flag() {
        let attr = required_bool_with_default("Enabled", true);

        assert!(attr.is_required());
        assert!(!attr.is_computed());
        assert_eq!(attr.default_value(), Some(true));
    }

    #[test]
    fn timeout_and_count_are_optional_computed_with_default() {
        let timeout = timeout_int("Timeout", 300);
        let count = count_int("Count");

        assert!(timeout.is_optional() && timeout.is_computed());
        assert_eq!(timeout.default_value(), Some(300));
        assert_eq!(count.default_value(), Some(0));
    }

    #[test]
    fn convenience_ints_are_flag_only() {
        let mut diags = Diagnostics::new();
        let path = AttributePath::new("port");

        for attr in [
            required_port("Port"),
            optional_port("Port"),
            port_with_default("Port", 8081),
            percentage_int("Ratio"),
            required_percentage_int("Ratio"),
            duration_int("TTL"),
            required_duration_int("TTL"),
        ] {
            assert!(attr.validators.is_empty());
            attr.validate(&Value::known(0), &path, &mut diags);
            attr.validate(&Value::known(-1), &path, &mut diags);
        }

        assert!(diags.is_empty());
        assert!(required_port("Port").is_required());
        assert_eq!(port_with_default("Port", 8081).default_value(), Some(8081));
        assert!(port_with_default("Port", 8081).is_computed());
    }

    #[test]
    fn ranged_ints_still_reject_out_of_range_values() {
        let attr = required_int64_with_range("Port", 1, 65535);
        let mut diags = Diagnostics::new();

        attr.validate(&Value::known(0), &AttributePath::new("port"), &mut diags);
        attr.validate(&Value::known(443), &AttributePath::new("port"), &mut diags);

        assert_eq!(diags.errors.len(), 1);
    }

    #[test]
    fn computed_optional_numbers_have_no_plan_modifiers() {
        assert!(computed_optional_int32("Replicas").plan_modifiers.is_empty());
        assert!(computed_optional_int64("Size").plan_modifiers.is_empty());
        assert!(computed_optional_float64("Ratio").plan_modifiers.is_empty());
        assert_eq!(computed_optional_bool("Enabled").plan_modifiers.len(), 1);
    }

    #[test]
    fn int32_plan_modifier_variants_carry_modifiers() {
        let attr = optional_int32_with_default_and_plan_modifier(
            "Replicas",
            42,
            vec![plan_modifier::requires_replace()],
        );

        assert!(attr.is_optional() && attr.is_computed());
        assert_eq!(attr.default_value(), Some(42));
        assert_eq!(attr.plan_modifiers.len(), 1);

        let attr = computed_optional_int32_with_default_and_plan_modifier(
            "Replicas",
            99,
            vec![plan_modifier::use_state_for_unknown()],
        );
        assert_eq!(attr.default_value(), Some(99));
    }

    #[test]
    fn float64_defaults_are_exact() {
        assert_eq!(
            computed_float64_with_default_and_plan_modifier("Ratio", 0.75, vec![]).default_value(),
            Some(0.75)
        );
    }

    #[test]
    fn collections_carry_element_type() {
        assert_eq!(
            required_string_list("Names").attribute_type(),
            AttributeType::list_of(AttributeType::String)
        );
        assert_eq!(
            computed_int64_map("Sizes").attribute_type(),
            AttributeType::map_of(AttributeType::Int64)
        );
        assert_eq!(
            optional_bool_set("Flags").attribute_type(),
            AttributeType::set_of(AttributeType::Bool)
        );
        let attr = computed_optional_string_set("Tags");
        assert!(attr.is_optional() && attr.is_computed());
    }

    #[test]
    fn set_with_validator_uses_markdown_description() {
        let attr = required_string_set_with_validator(
            "Member IDs",
            vec![validator::set::size_at_least(1)],
        );

        assert_eq!(attr.description_kind(), StringKind::Markdown);
        assert_eq!(attr.validators.len(), 1);
    }

    #[test]
    fn nested_attributes_hold_children() {
        let children = HashMap::from([
            ("host".to_string(), Attribute::from(required_string("Host"))),
            ("port".to_string(), Attribute::from(optional_port("Port"))),
        ]);

        let single = optional_single_nested_attribute("Connection", children.clone());
        let list = computed_optional_list_nested_attribute(
            "Connections",
            NestedAttributeObject::new(children),
        );

        assert!(single.is_optional());
        assert_eq!(single.attributes.len(), 2);
        assert!(list.is_optional() && list.is_computed());
        assert!(matches!(list.attribute_type(), AttributeType::List(_)));
    }

    #[test]
    fn regex_and_length_attaches_both_validators() {
        let attr = required_string_with_regex_and_length(
            "Slug",
            Regex::new(r"^[a-z-]+$").unwrap(),
            "must be lowercase with dashes",
            3,
            20,
        );
        let mut diags = Diagnostics::new();

        attr.validate(&Value::known("AB".to_string()), &AttributePath::new("slug"), &mut diags);

        assert_eq!(attr.description_kind(), StringKind::Markdown);
        assert_eq!(attr.validators.len(), 2);
        assert_eq!(diags.errors.len(), 2);
    }

    #[test]
    fn with_validators_without_prefix_is_required() {
        assert!(string_with_validators("Name", vec![]).is_required());
        assert!(int32_with_validators("Size", vec![]).is_required());
        assert!(int64_with_validators("Size", vec![]).is_required());
        assert!(float64_with_validators("Ratio", vec![]).is_required());
    }

    #[test]
    fn ranges_validate_bounds() {
        let attr = optional_float64_with_range("Ratio", 0.0, 1.0);
        let mut diags = Diagnostics::new();

        attr.validate(&Value::known(1.5), &AttributePath::new("ratio"), &mut diags);

        assert!(diags.has_error());
        assert!(computed_int32_with_range("Size", 1, 10).is_computed());
    }
}
