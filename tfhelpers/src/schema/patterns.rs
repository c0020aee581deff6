//! Attribute maps shared by many resources
//!
//! Each function returns a fresh map, so callers can insert their own
//! attributes before handing it to a `SchemaBuilder`.

use super::resource::{
    computed_optional_bool, computed_optional_string, computed_string, required_string,
    standard_id, timestamp,
};
use std::collections::HashMap;
use tfplug::schema::resource::{Attribute, StringAttribute};

pub type AttributeMap = HashMap<String, Attribute>;

fn attribute_map<const N: usize>(entries: [(&str, Attribute); N]) -> AttributeMap {
    entries
        .into_iter()
        .map(|(name, attr)| (name.to_string(), attr))
        .collect()
}

/// `id` and `last_updated`, both computed
pub fn standard_resource_attributes() -> AttributeMap {
    attribute_map([
        ("id", standard_id().into()),
        ("last_updated", timestamp().into()),
    ])
}

/// Standard attributes plus a required `name`
pub fn named_resource_attributes() -> AttributeMap {
    let mut attrs = standard_resource_attributes();
    attrs.insert("name".to_string(), required_string("Name of the resource").into());
    attrs
}

/// Standard attributes plus a required `username`
pub fn identity_resource_attributes() -> AttributeMap {
    let mut attrs = standard_resource_attributes();
    attrs.insert("username".to_string(), required_string("Username identifier").into());
    attrs
}

pub fn ownership_resource_attributes() -> AttributeMap {
    let mut attrs = standard_resource_attributes();
    attrs.insert("owner_id".to_string(), required_string("ID of the resource owner").into());
    attrs.insert(
        "owner_type".to_string(),
        required_string("Type of the owner (user, group, organization, etc.)").into(),
    );
    attrs
}

/// `id`, `created_at` and `updated_at`
pub fn auditable_resource_attributes() -> AttributeMap {
    attribute_map([
        ("id", standard_id().into()),
        (
            "created_at",
            computed_string("Timestamp when the resource was created").into(),
        ),
        ("updated_at", timestamp().into()),
    ])
}

/// Optional and computed `id` used to look up a data source
pub fn data_source_id_attribute() -> StringAttribute {
    StringAttribute {
        description: "ID to lookup the data source".to_string(),
        optional: true,
        computed: true,
        ..Default::default()
    }
}

/// Attributes for resources that may be managed outside Terraform
pub fn source_and_read_only_attributes() -> AttributeMap {
    attribute_map([
        (
            "source",
            computed_optional_string("Source system that created/manages this resource").into(),
        ),
        (
            "read_only",
            computed_optional_bool("Whether the resource is read-only").into(),
        ),
        (
            "managed_by",
            computed_optional_string("System managing this resource").into(),
        ),
    ])
}
