//! Tests for attribute hooks reached through an assembled resource schema

#![allow(clippy::disallowed_methods)] // Allow unwrap() in tests for clarity

use tfplug::defaults::StaticDefault;
use tfplug::plan_modifier::{requires_replace, use_state_for_unknown, PlanModifyRequest};
use tfplug::schema::resource::{Int64Attribute, StringAttribute};
use tfplug::schema::ResourceSchema;
use tfplug::validator::{int64, string};
use tfplug::{AttributePath, Diagnostics, Dynamic, SchemaBuilder, TfplugError, Value};

fn blob_store_schema() -> ResourceSchema {
    SchemaBuilder::new()
        .version(2)
        .attribute(
            "id",
            StringAttribute {
                computed: true,
                plan_modifiers: vec![use_state_for_unknown()],
                ..Default::default()
            },
        )
        .attribute(
            "name",
            StringAttribute {
                required: true,
                validators: vec![string::length_between(1, 32)],
                plan_modifiers: vec![requires_replace()],
                ..Default::default()
            },
        )
        .attribute(
            "quota_mb",
            Int64Attribute {
                optional: true,
                computed: true,
                default: Some(StaticDefault::int64(1024)),
                validators: vec![int64::at_least(0)],
                ..Default::default()
            },
        )
        .build()
        .unwrap()
}

fn plan(path: &str, state: Dynamic, plan: Dynamic) -> PlanModifyRequest {
    PlanModifyRequest {
        config: plan.clone(),
        state,
        plan,
        attribute_path: AttributePath::new(path),
    }
}

#[test]
fn computed_id_keeps_state_across_plans() {
    let schema = blob_store_schema();
    let id = schema.attribute("id").unwrap().as_string().unwrap();

    let response = id.modify_plan(plan("id", Dynamic::from("bs-7"), Dynamic::Unknown));

    assert_eq!(response.plan_value, Dynamic::from("bs-7"));
    assert!(!response.requires_replace);
}

#[test]
fn renaming_forces_replacement() {
    let schema = blob_store_schema();
    let name = schema.attribute("name").unwrap().as_string().unwrap();

    let response = name.modify_plan(plan("name", Dynamic::from("default"), Dynamic::from("archive")));

    assert!(response.requires_replace);
}

#[test]
fn validators_report_path_of_offending_attribute() {
    let schema = blob_store_schema();
    let quota = schema.attribute("quota_mb").unwrap().as_int64().unwrap();
    let mut diags = Diagnostics::new();

    quota.validate(&Value::known(-5), &AttributePath::new("quota_mb"), &mut diags);
    quota.validate(&Value::unknown(), &AttributePath::new("quota_mb"), &mut diags);

    assert_eq!(diags.error_count(), 1);
    assert_eq!(diags.errors[0].summary, "Invalid Attribute Value");
    assert_eq!(diags.errors[0].attribute, Some(AttributePath::new("quota_mb")));
}

#[test]
fn defaults_are_exposed_on_the_descriptor() {
    let schema = blob_store_schema();

    assert_eq!(
        schema.attribute("quota_mb").unwrap().as_int64().unwrap().default_value(),
        Some(1024)
    );
    assert!(!schema.attribute("name").unwrap().has_default());
    assert_eq!(schema.required_attributes(), vec!["name"]);
}

#[test]
fn build_errors_name_the_problem() {
    let duplicate: tfplug::Result<ResourceSchema> = SchemaBuilder::new()
        .attribute("name", StringAttribute::default())
        .attribute("name", StringAttribute::default())
        .build();

    match duplicate {
        Err(err @ TfplugError::DuplicateAttribute(_)) => {
            assert_eq!(err.to_string(), "attribute `name` is defined more than once")
        }
        other => panic!("expected duplicate attribute error, got {:?}", other.map(|s| s.version)),
    }
}
