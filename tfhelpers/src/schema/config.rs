//! Attribute configs and the builders that turn them into descriptors
//!
//! Every named constructor goes through one of these builders. A builder
//! copies its config field for field and never checks that the flag
//! combination makes sense; that is left to the caller and, ultimately, to
//! Terraform's own schema validation.

use std::sync::Arc;
use tfplug::attribute_type::AttributeType;
use tfplug::defaults::DefaultValue;
use tfplug::plan_modifier::PlanModifier;
use tfplug::schema::{datasource, resource, ListAttribute, MapAttribute, SetAttribute, StringKind};
use tfplug::validator::{SetValidator, Validator};

/// Fields shared by every primitive attribute config
#[derive(Clone, Default)]
pub struct PrimitiveAttributeConfig<T> {
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

pub type StringAttributeConfig = PrimitiveAttributeConfig<String>;
pub type BoolAttributeConfig = PrimitiveAttributeConfig<bool>;
pub type Int64AttributeConfig = PrimitiveAttributeConfig<i64>;
pub type Int32AttributeConfig = PrimitiveAttributeConfig<i32>;
pub type Float64AttributeConfig = PrimitiveAttributeConfig<f64>;

impl<T> PrimitiveAttributeConfig<T> {
    /// Plain-text description, no flags set
    pub fn described(description: &str) -> Self
    where
        T: Default,
    {
        Self {
            description: description.to_string(),
            ..Default::default()
        }
    }

    /// Markdown description, no flags set
    pub fn markdown(description: &str) -> Self
    where
        T: Default,
    {
        Self {
            description: description.to_string(),
            description_kind: StringKind::Markdown,
            ..Default::default()
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn computed(mut self) -> Self {
        self.computed = true;
        self
    }

    /// Mark as sensitive (hidden)
    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    pub fn default_value(mut self, default: Arc<dyn DefaultValue<T>>) -> Self {
        self.default = Some(default);
        self
    }

    pub fn validator(mut self, validator: Arc<dyn Validator<T>>) -> Self {
        self.validators.push(validator);
        self
    }

    pub fn validators(mut self, validators: Vec<Arc<dyn Validator<T>>>) -> Self {
        self.validators.extend(validators);
        self
    }

    pub fn plan_modifier(mut self, modifier: Arc<dyn PlanModifier>) -> Self {
        self.plan_modifiers.push(modifier);
        self
    }

    pub fn plan_modifiers(mut self, modifiers: Vec<Arc<dyn PlanModifier>>) -> Self {
        self.plan_modifiers.extend(modifiers);
        self
    }
}

/// Config for list, map and set attributes
#[derive(Clone)]
pub struct CollectionConfig {
    pub description: String,
    pub description_kind: StringKind,
    pub element_type: AttributeType,
    pub required: bool,
    pub optional: bool,
    pub computed: bool,
    pub sensitive: bool,
    /// Only used by set builders
    pub validators: Vec<Arc<SetValidator>>,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            description: String::new(),
            description_kind: StringKind::Plain,
            element_type: AttributeType::String,
            required: false,
            optional: false,
            computed: false,
            sensitive: false,
            validators: Vec::new(),
        }
    }
}

impl CollectionConfig {
    pub fn new(description: &str, element_type: AttributeType) -> Self {
        Self {
            description: description.to_string(),
            element_type,
            ..Default::default()
        }
    }

    pub fn markdown(description: &str, element_type: AttributeType) -> Self {
        Self {
            description_kind: StringKind::Markdown,
            ..Self::new(description, element_type)
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn computed(mut self) -> Self {
        self.computed = true;
        self
    }

    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    pub fn validators(mut self, validators: Vec<Arc<SetValidator>>) -> Self {
        self.validators.extend(validators);
        self
    }
}

fn new_resource_attribute<T>(config: PrimitiveAttributeConfig<T>) -> resource::PrimitiveAttribute<T> {
    resource::PrimitiveAttribute {
        description: config.description,
        description_kind: config.description_kind,
        required: config.required,
        optional: config.optional,
        computed: config.computed,
        sensitive: config.sensitive,
        default: config.default,
        validators: config.validators,
        plan_modifiers: config.plan_modifiers,
    }
}

fn new_data_source_attribute<T>(
    config: PrimitiveAttributeConfig<T>,
) -> datasource::PrimitiveAttribute<T> {
    datasource::PrimitiveAttribute {
        description: config.description,
        description_kind: config.description_kind,
        required: config.required,
        optional: config.optional,
        computed: config.computed,
        sensitive: config.sensitive,
        validators: config.validators,
    }
}

pub fn new_resource_string_attribute(config: StringAttributeConfig) -> resource::StringAttribute {
    new_resource_attribute(config)
}

pub fn new_data_source_string_attribute(
    config: StringAttributeConfig,
) -> datasource::StringAttribute {
    new_data_source_attribute(config)
}

pub fn new_resource_bool_attribute(config: BoolAttributeConfig) -> resource::BoolAttribute {
    new_resource_attribute(config)
}

pub fn new_data_source_bool_attribute(config: BoolAttributeConfig) -> datasource::BoolAttribute {
    new_data_source_attribute(config)
}

pub fn new_resource_int64_attribute(config: Int64AttributeConfig) -> resource::Int64Attribute {
    new_resource_attribute(config)
}

pub fn new_data_source_int64_attribute(config: Int64AttributeConfig) -> datasource::Int64Attribute {
    new_data_source_attribute(config)
}

pub fn new_resource_int32_attribute(config: Int32AttributeConfig) -> resource::Int32Attribute {
    new_resource_attribute(config)
}

pub fn new_data_source_int32_attribute(config: Int32AttributeConfig) -> datasource::Int32Attribute {
    new_data_source_attribute(config)
}

pub fn new_resource_float64_attribute(config: Float64AttributeConfig) -> resource::Float64Attribute {
    new_resource_attribute(config)
}

pub fn new_data_source_float64_attribute(
    config: Float64AttributeConfig,
) -> datasource::Float64Attribute {
    new_data_source_attribute(config)
}

fn new_list_attribute(config: CollectionConfig) -> ListAttribute {
    ListAttribute {
        element_type: config.element_type,
        description: config.description,
        description_kind: config.description_kind,
        required: config.required,
        optional: config.optional,
        computed: config.computed,
        sensitive: config.sensitive,
    }
}

fn new_map_attribute(config: CollectionConfig) -> MapAttribute {
    MapAttribute {
        element_type: config.element_type,
        description: config.description,
        description_kind: config.description_kind,
        required: config.required,
        optional: config.optional,
        computed: config.computed,
        sensitive: config.sensitive,
    }
}

fn new_set_attribute(config: CollectionConfig) -> SetAttribute {
    SetAttribute {
        element_type: config.element_type,
        description: config.description,
        description_kind: config.description_kind,
        required: config.required,
        optional: config.optional,
        computed: config.computed,
        sensitive: config.sensitive,
        validators: config.validators,
    }
}

// Collection descriptors are shared between resources and data sources, so
// the two sets of builders produce the same thing.

pub fn new_resource_list_attribute(config: CollectionConfig) -> ListAttribute {
    new_list_attribute(config)
}

pub fn new_resource_map_attribute(config: CollectionConfig) -> MapAttribute {
    new_map_attribute(config)
}

pub fn new_resource_set_attribute(config: CollectionConfig) -> SetAttribute {
    new_set_attribute(config)
}

pub fn new_data_source_list_attribute(config: CollectionConfig) -> ListAttribute {
    new_list_attribute(config)
}

pub fn new_data_source_map_attribute(config: CollectionConfig) -> MapAttribute {
    new_map_attribute(config)
}

pub fn new_data_source_set_attribute(config: CollectionConfig) -> SetAttribute {
    new_set_attribute(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tfplug::defaults::StaticDefault;
    use tfplug::plan_modifier::use_state_for_unknown;
    use tfplug::schema::AttributeDescriptor;
    use tfplug::validator::{int64, set, string};

    #[test]
    fn resource_string_builder_copies_every_field() {
        let attr = new_resource_string_attribute(StringAttributeConfig {
            description: "Name".to_string(),
            description_kind: StringKind::Markdown,
            optional: true,
            computed: true,
            sensitive: true,
            default: Some(StaticDefault::string("x")),
            validators: vec![string::length_at_least(1)],
            plan_modifiers: vec![use_state_for_unknown()],
            ..Default::default()
        });

        assert_eq!(attr.description(), "Name");
        assert_eq!(attr.description_kind(), StringKind::Markdown);
        assert!(!attr.is_required());
        assert!(attr.is_optional());
        assert!(attr.is_computed());
        assert!(attr.is_sensitive());
        assert_eq!(attr.default_value().as_deref(), Some("x"));
        assert_eq!(attr.validators.len(), 1);
        assert_eq!(attr.plan_modifiers.len(), 1);
    }

    #[test]
    fn data_source_builder_keeps_flags_and_validators() {
        let attr = new_data_source_int64_attribute(Int64AttributeConfig {
            required: true,
            default: Some(StaticDefault::int64(1)),
            validators: vec![int64::at_least(0)],
            plan_modifiers: vec![use_state_for_unknown()],
            ..Int64AttributeConfig::described("Count")
        });

        assert!(attr.is_required());
        assert_eq!(attr.validators.len(), 1);
    }

    #[test]
    fn collection_config_defaults_to_plain_text() {
        let config = CollectionConfig::new("Tags", AttributeType::String);
        assert_eq!(config.description_kind, StringKind::Plain);

        let config = CollectionConfig::markdown("Tags", AttributeType::String);
        assert_eq!(config.description_kind, StringKind::Markdown);
    }

    #[test]
    fn fluent_setters_only_set_their_own_flag() {
        let config = BoolAttributeConfig::described("Enabled").optional().computed();

        assert!(config.optional && config.computed);
        assert!(!config.required && !config.sensitive);
    }

    #[test]
    fn set_builder_keeps_validators_and_list_builder_has_none() {
        let config = CollectionConfig {
            required: true,
            validators: vec![set::size_at_least(1)],
            ..CollectionConfig::new("Members", AttributeType::Int64)
        };

        let set_attr = new_resource_set_attribute(config.clone());
        let list_attr = new_data_source_list_attribute(config);

        assert_eq!(set_attr.validators.len(), 1);
        assert_eq!(set_attr.attribute_type(), AttributeType::set_of(AttributeType::Int64));
        assert!(list_attr.is_required());
    }
}
