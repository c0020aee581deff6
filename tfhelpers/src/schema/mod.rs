//! Schema attribute helpers
//!
//! [`config`] holds the attribute configs and the builders that turn them
//! into descriptors. [`resource`] and [`datasource`] provide one named
//! constructor per common flag combination, and [`patterns`] assembles the
//! attribute maps most resources start from.

pub mod config;
pub mod datasource;
pub mod patterns;
pub mod resource;

pub use config::{
    BoolAttributeConfig, CollectionConfig, Float64AttributeConfig, Int32AttributeConfig,
    Int64AttributeConfig, PrimitiveAttributeConfig, StringAttributeConfig,
};

use std::collections::HashMap;
use tfplug::schema::{
    ListNestedAttribute, NestedAttributeObject, SetNestedAttribute, SingleNestedAttribute,
    StringKind,
};

/// Which of required, optional and computed a nested attribute sets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Presence {
    Required,
    Optional,
    Computed,
    ComputedOptional,
}

impl Presence {
    /// (required, optional, computed)
    fn flags(self) -> (bool, bool, bool) {
        match self {
            Presence::Required => (true, false, false),
            Presence::Optional => (false, true, false),
            Presence::Computed => (false, false, true),
            Presence::ComputedOptional => (false, true, true),
        }
    }
}

pub(crate) fn single_nested<A>(
    description: &str,
    attributes: HashMap<String, A>,
    presence: Presence,
) -> SingleNestedAttribute<A> {
    let (required, optional, computed) = presence.flags();
    SingleNestedAttribute {
        attributes,
        description: description.to_string(),
        description_kind: StringKind::Plain,
        required,
        optional,
        computed,
        sensitive: false,
    }
}

pub(crate) fn list_nested<A>(
    description: &str,
    nested_object: NestedAttributeObject<A>,
    presence: Presence,
) -> ListNestedAttribute<A> {
    let (required, optional, computed) = presence.flags();
    ListNestedAttribute {
        nested_object,
        description: description.to_string(),
        description_kind: StringKind::Plain,
        required,
        optional,
        computed,
        sensitive: false,
    }
}

pub(crate) fn set_nested<A>(
    description: &str,
    nested_object: NestedAttributeObject<A>,
    presence: Presence,
) -> SetNestedAttribute<A> {
    let (required, optional, computed) = presence.flags();
    SetNestedAttribute {
        nested_object,
        description: description.to_string(),
        description_kind: StringKind::Plain,
        required,
        optional,
        computed,
        sensitive: false,
    }
}
