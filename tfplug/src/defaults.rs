//! Default value providers for attributes
//!
//! Defaults apply during planning when an optional+computed attribute is
//! absent from configuration. They only ever produce a fixed value here; the
//! framework decides when to use it.
//!
//! ```no_run
//! use tfplug::defaults::StaticDefault;
//! use tfplug::schema::resource::Int64Attribute;
//!
//! let timeout = Int64Attribute {
//!     optional: true,
//!     computed: true,
//!     default: Some(StaticDefault::int64(30)),
//!     ..Default::default()
//! };
//! ```

use std::fmt::Debug;
use std::sync::Arc;

/// DefaultValue provides the value for an attribute missing from config
pub trait DefaultValue<T>: Send + Sync {
    /// Human-readable description
    fn description(&self) -> String;
    /// Provide default value
    fn default_value(&self) -> T;
}

/// StaticDefault provides a fixed default value
#[derive(Debug, Clone, PartialEq)]
pub struct StaticDefault<T> {
    value: T,
}

impl<T> StaticDefault<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

impl StaticDefault<String> {
    pub fn string(value: &str) -> Arc<dyn DefaultValue<String>> {
        Arc::new(Self::new(value.to_string()))
    }
}

impl StaticDefault<bool> {
    pub fn bool(value: bool) -> Arc<dyn DefaultValue<bool>> {
        Arc::new(Self::new(value))
    }
}

impl StaticDefault<i64> {
    pub fn int64(value: i64) -> Arc<dyn DefaultValue<i64>> {
        Arc::new(Self::new(value))
    }
}

impl StaticDefault<i32> {
    pub fn int32(value: i32) -> Arc<dyn DefaultValue<i32>> {
        Arc::new(Self::new(value))
    }
}

impl StaticDefault<f64> {
    pub fn float64(value: f64) -> Arc<dyn DefaultValue<f64>> {
        Arc::new(Self::new(value))
    }
}

impl<T> DefaultValue<T> for StaticDefault<T>
where
    T: Clone + Debug + Send + Sync,
{
    fn description(&self) -> String {
        format!("static default value: {:?}", self.value)
    }

    fn default_value(&self) -> T {
        self.value.clone()
    }
}
