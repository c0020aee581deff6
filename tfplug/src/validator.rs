//! Attribute validators
//!
//! Validators run against the configured value of a single attribute and
//! report problems as attribute errors. Null and unknown values are never
//! rejected; requiredness is the schema's concern, not the validator's.
//!
//! The submodules (`string`, `int64`, `int32`, `float64`, `set`) hold
//! constructors returning shared trait objects ready to be placed in an
//! attribute descriptor.

use crate::types::{AttributePath, Diagnostics, Dynamic, Value};
use std::fmt::Display;
use std::sync::Arc;

/// Validates a typed attribute value
pub trait Validator<T>: Send + Sync {
    /// Human-readable description
    fn description(&self) -> String;

    /// Check the value, adding errors to `diagnostics` on failure
    fn validate(&self, value: &Value<T>, path: &AttributePath, diagnostics: &mut Diagnostics);
}

pub type StringValidator = dyn Validator<String>;
pub type BoolValidator = dyn Validator<bool>;
pub type Int64Validator = dyn Validator<i64>;
pub type Int32Validator = dyn Validator<i32>;
pub type Float64Validator = dyn Validator<f64>;
/// Set validators see the set elements as untyped values
pub type SetValidator = dyn Validator<Vec<Dynamic>>;

const INVALID_VALUE: &str = "Invalid Attribute Value";
const INVALID_LENGTH: &str = "Invalid Attribute Value Length";
const INVALID_MATCH: &str = "Invalid Attribute Value Match";

/// Accepts only strings from a fixed list
#[derive(Debug, Clone)]
pub struct OneOf {
    pub values: Vec<String>,
}

impl OneOf {
    fn quoted(&self) -> String {
        self.values
            .iter()
            .map(|v| format!("\"{}\"", v))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Validator<String> for OneOf {
    fn description(&self) -> String {
        format!("value must be one of: [{}]", self.quoted())
    }

    fn validate(&self, value: &Value<String>, path: &AttributePath, diagnostics: &mut Diagnostics) {
        if let Some(s) = value.value() {
            if !self.values.iter().any(|v| v == s) {
                diagnostics.add_attribute_error(
                    path,
                    INVALID_VALUE,
                    format!(
                        "Attribute {} value must be one of: [{}], got: \"{}\"",
                        path,
                        self.quoted(),
                        s
                    ),
                );
            }
        }
    }
}

/// Bounds the length of a string, counted in characters
#[derive(Debug, Clone)]
pub struct StringLength {
    pub min: Option<usize>,
    pub max: Option<usize>,
}

impl StringLength {
    fn bounds(&self) -> String {
        match (self.min, self.max) {
            (Some(min), Some(max)) => format!("between {} and {}", min, max),
            (Some(min), None) => format!("at least {}", min),
            (None, Some(max)) => format!("at most {}", max),
            (None, None) => "any".to_string(),
        }
    }
}

impl Validator<String> for StringLength {
    fn description(&self) -> String {
        format!("string length must be {}", self.bounds())
    }

    fn validate(&self, value: &Value<String>, path: &AttributePath, diagnostics: &mut Diagnostics) {
        let Some(s) = value.value() else {
            return;
        };
        let len = s.chars().count();
        let too_short = self.min.is_some_and(|min| len < min);
        let too_long = self.max.is_some_and(|max| len > max);

        if too_short || too_long {
            diagnostics.add_attribute_error(
                path,
                INVALID_LENGTH,
                format!(
                    "Attribute {} string length must be {}, got: {}",
                    path,
                    self.bounds(),
                    len
                ),
            );
        }
    }
}

/// Requires a string to match a regular expression
#[derive(Debug, Clone)]
pub struct RegexMatches {
    pub pattern: regex::Regex,
    /// Shown instead of the generated description when non-empty
    pub message: String,
}

impl Validator<String> for RegexMatches {
    fn description(&self) -> String {
        if self.message.is_empty() {
            format!("value must match regular expression '{}'", self.pattern)
        } else {
            self.message.clone()
        }
    }

    fn validate(&self, value: &Value<String>, path: &AttributePath, diagnostics: &mut Diagnostics) {
        if let Some(s) = value.value() {
            if !self.pattern.is_match(s) {
                diagnostics.add_attribute_error(
                    path,
                    INVALID_MATCH,
                    format!("Attribute {} {}, got: {}", path, self.description(), s),
                );
            }
        }
    }
}

/// Inclusive numeric bounds
#[derive(Debug, Clone)]
pub struct NumberRange<N> {
    pub min: Option<N>,
    pub max: Option<N>,
}

impl<N: Display + Copy> NumberRange<N> {
    fn bounds(&self) -> String {
        match (self.min, self.max) {
            (Some(min), Some(max)) => format!("between {} and {}", min, max),
            (Some(min), None) => format!("at least {}", min),
            (None, Some(max)) => format!("at most {}", max),
            (None, None) => "any number".to_string(),
        }
    }
}

impl<N> Validator<N> for NumberRange<N>
where
    N: PartialOrd + Display + Copy + Send + Sync,
{
    fn description(&self) -> String {
        format!("value must be {}", self.bounds())
    }

    fn validate(&self, value: &Value<N>, path: &AttributePath, diagnostics: &mut Diagnostics) {
        let Some(&n) = value.value() else {
            return;
        };
        let below = self.min.is_some_and(|min| n < min);
        let above = self.max.is_some_and(|max| n > max);

        if below || above {
            diagnostics.add_attribute_error(
                path,
                INVALID_VALUE,
                format!("Attribute {} value must be {}, got: {}", path, self.bounds(), n),
            );
        }
    }
}

/// Bounds the number of elements in a set
#[derive(Debug, Clone)]
pub struct SetSize {
    pub min: Option<usize>,
    pub max: Option<usize>,
}

impl Validator<Vec<Dynamic>> for SetSize {
    fn description(&self) -> String {
        match (self.min, self.max) {
            (Some(min), Some(max)) => format!("set must contain between {} and {} elements", min, max),
            (Some(min), None) => format!("set must contain at least {} elements", min),
            (None, Some(max)) => format!("set must contain at most {} elements", max),
            (None, None) => "set may contain any number of elements".to_string(),
        }
    }

    fn validate(
        &self,
        value: &Value<Vec<Dynamic>>,
        path: &AttributePath,
        diagnostics: &mut Diagnostics,
    ) {
        let Some(items) = value.value() else {
            return;
        };
        let too_few = self.min.is_some_and(|min| items.len() < min);
        let too_many = self.max.is_some_and(|max| items.len() > max);

        if too_few || too_many {
            diagnostics.add_attribute_error(
                path,
                INVALID_VALUE,
                format!(
                    "Attribute {} {}, got: {}",
                    path,
                    self.description(),
                    items.len()
                ),
            );
        }
    }
}

pub mod string {
    use super::{OneOf, RegexMatches, StringLength, StringValidator};
    use std::sync::Arc;

    pub fn one_of<S: AsRef<str>>(values: &[S]) -> Arc<StringValidator> {
        Arc::new(OneOf {
            values: values.iter().map(|v| v.as_ref().to_string()).collect(),
        })
    }

    pub fn length_between(min: usize, max: usize) -> Arc<StringValidator> {
        Arc::new(StringLength {
            min: Some(min),
            max: Some(max),
        })
    }

    pub fn length_at_least(min: usize) -> Arc<StringValidator> {
        Arc::new(StringLength {
            min: Some(min),
            max: None,
        })
    }

    pub fn length_at_most(max: usize) -> Arc<StringValidator> {
        Arc::new(StringLength {
            min: None,
            max: Some(max),
        })
    }

    pub fn regex_matches(pattern: regex::Regex, message: &str) -> Arc<StringValidator> {
        Arc::new(RegexMatches {
            pattern,
            message: message.to_string(),
        })
    }
}

macro_rules! number_constructors {
    ($module:ident, $ty:ty, $alias:ident) => {
        pub mod $module {
            use super::{$alias, NumberRange};
            use std::sync::Arc;

            pub fn between(min: $ty, max: $ty) -> Arc<$alias> {
                Arc::new(NumberRange {
                    min: Some(min),
                    max: Some(max),
                })
            }

            pub fn at_least(min: $ty) -> Arc<$alias> {
                Arc::new(NumberRange {
                    min: Some(min),
                    max: None,
                })
            }

            pub fn at_most(max: $ty) -> Arc<$alias> {
                Arc::new(NumberRange {
                    min: None,
                    max: Some(max),
                })
            }
        }
    };
}

number_constructors!(int64, i64, Int64Validator);
number_constructors!(int32, i32, Int32Validator);
number_constructors!(float64, f64, Float64Validator);

pub mod set {
    use super::{SetSize, SetValidator};
    use std::sync::Arc;

    pub fn size_between(min: usize, max: usize) -> Arc<SetValidator> {
        Arc::new(SetSize {
            min: Some(min),
            max: Some(max),
        })
    }

    pub fn size_at_least(min: usize) -> Arc<SetValidator> {
        Arc::new(SetSize {
            min: Some(min),
            max: None,
        })
    }

    pub fn size_at_most(max: usize) -> Arc<SetValidator> {
        Arc::new(SetSize {
            min: None,
            max: Some(max),
        })
    }
}

/// Run every validator against `value`, collecting all failures
pub fn validate_all<T>(
    validators: &[Arc<dyn Validator<T>>],
    value: &Value<T>,
    path: &AttributePath,
    diagnostics: &mut Diagnostics,
) {
    for validator in validators {
        validator.validate(value, path, diagnostics);
    }
}
