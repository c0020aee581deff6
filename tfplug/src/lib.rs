//! tfplug - schema layer for Terraform providers written in Rust
//!
//! Attribute descriptors for resources and data sources, plus the hooks
//! they carry (validators, plan modifiers, defaults) and the values and
//! diagnostics those hooks operate on.

// Core modules
pub mod attribute_type;
pub mod error;
pub mod schema;
pub mod types;

// Attribute hooks
pub mod defaults;
pub mod plan_modifier;
pub mod validator;

pub use attribute_type::AttributeType;
pub use error::{Result, TfplugError};
pub use schema::{AttributeDescriptor, Schema, SchemaBuilder, StringKind};
pub use types::{AttributePath, Diagnostic, DiagnosticSeverity, Diagnostics, Dynamic, Value};
