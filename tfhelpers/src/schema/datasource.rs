//! Named constructors for data source schema attributes
//!
//! Data sources only read, so none of these carry defaults or plan
//! modifiers. Otherwise the families mirror [`resource`](super::resource).

use super::config::*;
use super::{list_nested, set_nested, single_nested, Presence};
use regex::Regex;
use std::collections::HashMap;
use std::sync::Arc;
use tfplug::attribute_type::AttributeType;
use tfplug::schema::datasource::{
    Attribute, BoolAttribute, Float64Attribute, Int32Attribute, Int64Attribute,
    ListNestedAttribute, SetNestedAttribute, SingleNestedAttribute, StringAttribute,
};
use tfplug::schema::{ListAttribute, MapAttribute, SetAttribute};
use tfplug::validator::{
    self, Float64Validator, Int32Validator, Int64Validator, SetValidator, StringValidator,
};

/// Child attributes for the nested constructors below
pub use tfplug::schema::datasource::NestedAttributeObject;

/// Generates the required/optional/computed/computed-optional quartet for a
/// primitive type
macro_rules! presence_constructors {
    ($builder:ident, $config:ty => $attr:ty {
        $required:ident, $optional:ident, $computed:ident, $computed_optional:ident $(,)?
    }) => {
        pub fn $required(description: &str) -> $attr {
            $builder(<$config>::described(description).required())
        }

        pub fn $optional(description: &str) -> $attr {
            $builder(<$config>::described(description).optional())
        }

        pub fn $computed(description: &str) -> $attr {
            $builder(<$config>::described(description).computed())
        }

        pub fn $computed_optional(description: &str) -> $attr {
            $builder(<$config>::described(description).optional().computed())
        }
    };
}

presence_constructors!(new_data_source_string_attribute, StringAttributeConfig => StringAttribute {
    required_string, optional_string, computed_string, computed_optional_string,
});

presence_constructors!(new_data_source_bool_attribute, BoolAttributeConfig => BoolAttribute {
    required_bool, optional_bool, computed_bool, computed_optional_bool,
});

presence_constructors!(new_data_source_int64_attribute, Int64AttributeConfig => Int64Attribute {
    required_int64, optional_int64, computed_int64, computed_optional_int64,
});

presence_constructors!(new_data_source_int32_attribute, Int32AttributeConfig => Int32Attribute {
    required_int32, optional_int32, computed_int32, computed_optional_int32,
});

presence_constructors!(new_data_source_float64_attribute, Float64AttributeConfig => Float64Attribute {
    required_float64, optional_float64, computed_float64, computed_optional_float64,
});

/// Optional, hidden from plan output
pub fn sensitive_string(description: &str) -> StringAttribute {
    new_data_source_string_attribute(
        StringAttributeConfig::described(description)
            .optional()
            .sensitive(),
    )
}

pub fn computed_sensitive_string(description: &str) -> StringAttribute {
    new_data_source_string_attribute(
        StringAttributeConfig::described(description)
            .computed()
            .sensitive(),
    )
}

pub fn required_string_enum(description: &str, values: &[&str]) -> StringAttribute {
    new_data_source_string_attribute(
        StringAttributeConfig::described(description)
            .required()
            .validator(validator::string::one_of(values)),
    )
}

pub fn optional_string_enum(description: &str, values: &[&str]) -> StringAttribute {
    new_data_source_string_attribute(
        StringAttributeConfig::described(description)
            .optional()
            .validator(validator::string::one_of(values)),
    )
}

// ---------------------------------------------------------------------------
// Lists, maps and sets
// ---------------------------------------------------------------------------

macro_rules! collection_constructors {
    ($builder:ident -> $attr:ty, $element:expr => {
        $required:ident, $optional:ident, $computed:ident, $computed_optional:ident $(,)?
    }) => {
        pub fn $required(description: &str) -> $attr {
            $builder(CollectionConfig::new(description, $element).required())
        }

        pub fn $optional(description: &str) -> $attr {
            $builder(CollectionConfig::new(description, $element).optional())
        }

        pub fn $computed(description: &str) -> $attr {
            $builder(CollectionConfig::new(description, $element).computed())
        }

        pub fn $computed_optional(description: &str) -> $attr {
            $builder(
                CollectionConfig::new(description, $element)
                    .optional()
                    .computed(),
            )
        }
    };
}

collection_constructors!(new_data_source_list_attribute -> ListAttribute, AttributeType::String => {
    required_string_list, optional_string_list, computed_string_list, computed_optional_string_list,
});
collection_constructors!(new_data_source_list_attribute -> ListAttribute, AttributeType::Int64 => {
    required_int64_list, optional_int64_list, computed_int64_list, computed_optional_int64_list,
});
collection_constructors!(new_data_source_list_attribute -> ListAttribute, AttributeType::Bool => {
    required_bool_list, optional_bool_list, computed_bool_list, computed_optional_bool_list,
});

collection_constructors!(new_data_source_map_attribute -> MapAttribute, AttributeType::String => {
    required_string_map, optional_string_map, computed_string_map, computed_optional_string_map,
});
collection_constructors!(new_data_source_map_attribute -> MapAttribute, AttributeType::Int64 => {
    required_int64_map, optional_int64_map, computed_int64_map, computed_optional_int64_map,
});
collection_constructors!(new_data_source_map_attribute -> MapAttribute, AttributeType::Bool => {
    required_bool_map, optional_bool_map, computed_bool_map, computed_optional_bool_map,
});

collection_constructors!(new_data_source_set_attribute -> SetAttribute, AttributeType::String => {
    required_string_set, optional_string_set, computed_string_set, computed_optional_string_set,
});
collection_constructors!(new_data_source_set_attribute -> SetAttribute, AttributeType::Int64 => {
    required_int64_set, optional_int64_set, computed_int64_set, computed_optional_int64_set,
});
collection_constructors!(new_data_source_set_attribute -> SetAttribute, AttributeType::Bool => {
    required_bool_set, optional_bool_set, computed_bool_set, computed_optional_bool_set,
});

fn validated_set(
    description: &str,
    element_type: AttributeType,
    presence: Presence,
    validators: Vec<Arc<SetValidator>>,
) -> SetAttribute {
    let config = CollectionConfig::markdown(description, element_type).validators(validators);
    let config = match presence {
        Presence::Required => config.required(),
        Presence::Optional => config.optional(),
        Presence::Computed => config.computed(),
        Presence::ComputedOptional => config.optional().computed(),
    };
    new_data_source_set_attribute(config)
}

pub fn required_string_set_with_validator(
    description: &str,
    validators: Vec<Arc<SetValidator>>,
) -> SetAttribute {
    validated_set(description, AttributeType::String, Presence::Required, validators)
}

pub fn optional_string_set_with_validator(
    description: &str,
    validators: Vec<Arc<SetValidator>>,
) -> SetAttribute {
    validated_set(description, AttributeType::String, Presence::Optional, validators)
}

pub fn computed_string_set_with_validator(
    description: &str,
    validators: Vec<Arc<SetValidator>>,
) -> SetAttribute {
    validated_set(description, AttributeType::String, Presence::Computed, validators)
}

pub fn required_int64_set_with_validator(
    description: &str,
    validators: Vec<Arc<SetValidator>>,
) -> SetAttribute {
    validated_set(description, AttributeType::Int64, Presence::Required, validators)
}

pub fn optional_int64_set_with_validator(
    description: &str,
    validators: Vec<Arc<SetValidator>>,
) -> SetAttribute {
    validated_set(description, AttributeType::Int64, Presence::Optional, validators)
}

pub fn computed_int64_set_with_validator(
    description: &str,
    validators: Vec<Arc<SetValidator>>,
) -> SetAttribute {
    validated_set(description, AttributeType::Int64, Presence::Computed, validators)
}

pub fn required_bool_set_with_validator(
    description: &str,
    validators: Vec<Arc<SetValidator>>,
) -> SetAttribute {
    validated_set(description, AttributeType::Bool, Presence::Required, validators)
}

pub fn optional_bool_set_with_validator(
    description: &str,
    validators: Vec<Arc<SetValidator>>,
) -> SetAttribute {
    validated_set(description, AttributeType::Bool, Presence::Optional, validators)
}

pub fn computed_bool_set_with_validator(
    description: &str,
    validators: Vec<Arc<SetValidator>>,
) -> SetAttribute {
    validated_set(description, AttributeType::Bool, Presence::Computed, validators)
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

pub fn required_string_with_regex(description: &str, pattern: Regex, message: &str) -> StringAttribute {
    new_data_source_string_attribute(
        md_string(description)
            .required()
            .validator(validator::string::regex_matches(pattern, message)),
    )
}

pub fn optional_string_with_regex(description: &str, pattern: Regex, message: &str) -> StringAttribute {
    new_data_source_string_attribute(
        md_string(description)
            .optional()
            .validator(validator::string::regex_matches(pattern, message)),
    )
}

pub fn computed_string_with_regex(description: &str, pattern: Regex, message: &str) -> StringAttribute {
    new_data_source_string_attribute(
        md_string(description)
            .computed()
            .validator(validator::string::regex_matches(pattern, message)),
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
    new_data_source_string_attribute(md_string(description).required().validators(validators))
}

pub fn optional_string_with_validators(
    description: &str,
    validators: Vec<Arc<StringValidator>>,
) -> StringAttribute {
    new_data_source_string_attribute(md_string(description).optional().validators(validators))
}

pub fn computed_string_with_validators(
    description: &str,
    validators: Vec<Arc<StringValidator>>,
) -> StringAttribute {
    new_data_source_string_attribute(md_string(description).computed().validators(validators))
}

pub fn required_string_with_length_between(description: &str, min: usize, max: usize) -> StringAttribute {
    required_string_with_validators(description, vec![validator::string::length_between(min, max)])
}

pub fn optional_string_with_length_between(description: &str, min: usize, max: usize) -> StringAttribute {
    optional_string_with_validators(description, vec![validator::string::length_between(min, max)])
}

pub fn required_string_with_length_at_least(description: &str, min: usize) -> StringAttribute {
    required_string_with_validators(description, vec![validator::string::length_at_least(min)])
}

pub fn optional_string_with_length_at_least(description: &str, min: usize) -> StringAttribute {
    optional_string_with_validators(description, vec![validator::string::length_at_least(min)])
}

pub fn required_string_with_length_at_most(description: &str, max: usize) -> StringAttribute {
    required_string_with_validators(description, vec![validator::string::length_at_most(max)])
}

pub fn optional_string_with_length_at_most(description: &str, max: usize) -> StringAttribute {
    optional_string_with_validators(description, vec![validator::string::length_at_most(max)])
}

pub fn required_sensitive_string_with_length_at_least(description: &str, min: usize) -> StringAttribute {
    new_data_source_string_attribute(
        md_string(description)
            .required()
            .sensitive()
            .validator(validator::string::length_at_least(min)),
    )
}

pub fn optional_sensitive_string_with_length_at_least(description: &str, min: usize) -> StringAttribute {
    new_data_source_string_attribute(
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
    required_string_with_validators(
        description,
        vec![
            validator::string::regex_matches(pattern, message),
            validator::string::length_between(min, max),
        ],
    )
}

pub fn optional_string_with_regex_and_length(
    description: &str,
    pattern: Regex,
    message: &str,
    min: usize,
    max: usize,
) -> StringAttribute {
    optional_string_with_validators(
        description,
        vec![
            validator::string::regex_matches(pattern, message),
            validator::string::length_between(min, max),
        ],
    )
}

/// Generates the range and validator families for a numeric type
macro_rules! numeric_validator_constructors {
    (
        $builder:ident, $config:ty => $attr:ty, $num:ty, $module:ident, $validator:ty {
            range: [$required_range:ident, $optional_range:ident, $computed_range:ident],
            validators: [$with:ident, $required_with:ident, $optional_with:ident, $computed_with:ident $(,)?] $(,)?
        }
    ) => {
        pub fn $required_range(description: &str, min: $num, max: $num) -> $attr {
            $required_with(description, vec![validator::$module::between(min, max)])
        }

        pub fn $optional_range(description: &str, min: $num, max: $num) -> $attr {
            $optional_with(description, vec![validator::$module::between(min, max)])
        }

        pub fn $computed_range(description: &str, min: $num, max: $num) -> $attr {
            $computed_with(description, vec![validator::$module::between(min, max)])
        }

        /// Required, checked by `validators`
        pub fn $with(description: &str, validators: Vec<Arc<$validator>>) -> $attr {
            $required_with(description, validators)
        }

        pub fn $required_with(description: &str, validators: Vec<Arc<$validator>>) -> $attr {
            $builder(<$config>::markdown(description).required().validators(validators))
        }

        pub fn $optional_with(description: &str, validators: Vec<Arc<$validator>>) -> $attr {
            $builder(<$config>::markdown(description).optional().validators(validators))
        }

        pub fn $computed_with(description: &str, validators: Vec<Arc<$validator>>) -> $attr {
            $builder(<$config>::markdown(description).computed().validators(validators))
        }
    };
}

numeric_validator_constructors!(
    new_data_source_int32_attribute, Int32AttributeConfig => Int32Attribute, i32, int32, Int32Validator {
        range: [required_int32_with_range, optional_int32_with_range, computed_int32_with_range],
        validators: [
            int32_with_validators,
            required_int32_with_validators,
            optional_int32_with_validators,
            computed_int32_with_validators,
        ],
    }
);

numeric_validator_constructors!(
    new_data_source_int64_attribute, Int64AttributeConfig => Int64Attribute, i64, int64, Int64Validator {
        range: [required_int64_with_range, optional_int64_with_range, computed_int64_with_range],
        validators: [
            int64_with_validators,
            required_int64_with_validators,
            optional_int64_with_validators,
            computed_int64_with_validators,
        ],
    }
);

numeric_validator_constructors!(
    new_data_source_float64_attribute, Float64AttributeConfig => Float64Attribute, f64, float64, Float64Validator {
        range: [required_float64_with_range, optional_float64_with_range, computed_float64_with_range],
        validators: [
            float64_with_validators,
            required_float64_with_validators,
            optional_float64_with_validators,
            computed_float64_with_validators,
        ],
    }
);
