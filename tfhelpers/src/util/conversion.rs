//! Conversions between API shapes and Terraform values
//!
//! API clients usually model absent fields as `Option`; Terraform state uses
//! [`Value`], which also has an unknown state. A null value always maps to
//! `None` and back.

use crate::error::{Error, Result};
use std::collections::BTreeSet;
use std::fmt::Display;
use tfplug::types::{
    BoolValue, Float64Value, Int32Value, Int64Value, SetValue, StringValue, Value,
};

pub fn string_to_value(s: Option<&str>) -> StringValue {
    s.map(str::to_string).into()
}

pub fn bool_to_value(b: Option<bool>) -> BoolValue {
    b.into()
}

pub fn int64_to_value(i: Option<i64>) -> Int64Value {
    i.into()
}

pub fn int32_to_value(i: Option<i32>) -> Int32Value {
    i.into()
}

/// Widens an `i32` into an int64 value, for attributes declared as int64
pub fn int32_to_int64_value(i: Option<i32>) -> Int64Value {
    i.map(i64::from).into()
}

pub fn float64_to_value(f: Option<f64>) -> Float64Value {
    f.into()
}

/// Null and unknown both give `None`
pub fn value_to_string(value: &StringValue) -> Option<String> {
    value.value().cloned()
}

pub fn value_to_bool(value: &BoolValue) -> Option<bool> {
    value.value().copied()
}

pub fn value_to_int64(value: &Int64Value) -> Option<i64> {
    value.value().copied()
}

pub fn value_to_float64(value: &Float64Value) -> Option<f64> {
    value.value().copied()
}

pub fn string_to_int64(s: &str) -> Result<i64> {
    Ok(s.parse()?)
}

pub fn string_to_int32(s: &str) -> Result<i32> {
    Ok(s.parse()?)
}

pub fn string_to_float(s: &str) -> Result<f64> {
    Ok(s.parse()?)
}

/// Accepts the usual spellings: `1`, `t`, `true`, `TRUE`, `True` and their
/// false counterparts
pub fn string_to_bool(s: &str) -> Result<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        other => Err(Error::ParseBool(other.to_string())),
    }
}

pub fn int64_to_string(i: i64) -> String {
    i.to_string()
}

pub fn int32_to_string(i: i32) -> String {
    i.to_string()
}

/// Fixed-point rendering with `precision` decimals; `None` gives the
/// shortest representation that parses back to `f`
pub fn float_to_string(f: f64, precision: Option<usize>) -> String {
    match precision {
        Some(precision) => format!("{:.*}", precision, f),
        None => f.to_string(),
    }
}

pub fn bool_to_string(b: bool) -> String {
    b.to_string()
}

pub fn string_slice_to_value<S: AsRef<str>>(values: &[S]) -> SetValue<String> {
    Value::known(values.iter().map(|s| s.as_ref().to_string()).collect())
}

/// Like [`string_slice_to_value`], skipping `None` entries
pub fn string_option_slice_to_value(values: &[Option<String>]) -> SetValue<String> {
    Value::known(values.iter().flatten().cloned().collect())
}

pub fn int64_slice_to_value(values: &[i64]) -> SetValue<i64> {
    Value::known(values.iter().copied().collect::<BTreeSet<_>>())
}

pub fn safe_string(s: Option<&str>) -> String {
    s.unwrap_or_default().to_string()
}

pub fn safe_bool(b: Option<bool>) -> bool {
    b.unwrap_or_default()
}

pub fn safe_int64(i: Option<i64>) -> i64 {
    i.unwrap_or_default()
}

pub fn safe_int32(i: Option<i32>) -> i32 {
    i.unwrap_or_default()
}

/// `None` for the empty string
pub fn none_if_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

pub fn empty_if_none(s: Option<&str>) -> String {
    safe_string(s)
}

pub fn format_value(value: impl Display) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_map_to_null_or_known() {
        assert!(string_to_value(None).is_null());
        assert_eq!(string_to_value(Some("a")), Value::known("a".to_string()));
        assert_eq!(int32_to_int64_value(Some(7)), Value::known(7_i64));
        assert!(float64_to_value(None).is_null());
    }

    #[test]
    fn unknown_values_read_as_none() {
        assert_eq!(value_to_string(&Value::unknown()), None);
        assert_eq!(value_to_bool(&Value::null()), None);
        assert_eq!(value_to_int64(&Value::known(3)), Some(3));
        assert_eq!(value_to_float64(&Value::known(1.5)), Some(1.5));
    }

    #[test]
    fn parses_numbers_and_reports_errors() {
        assert_eq!(string_to_int64("42").unwrap(), 42);
        assert!(matches!(string_to_int64("invalid"), Err(Error::ParseInt(_))));
        assert!(string_to_int32("3000000000").is_err());
        assert_eq!(string_to_float("2.5").unwrap(), 2.5);
        assert!(matches!(string_to_float("x"), Err(Error::ParseFloat(_))));
    }

    #[test]
    fn bool_parsing_accepts_known_spellings() {
        for s in ["1", "t", "T", "TRUE", "true", "True"] {
            assert!(string_to_bool(s).unwrap(), "{s}");
        }
        for s in ["0", "f", "F", "FALSE", "false", "False"] {
            assert!(!string_to_bool(s).unwrap(), "{s}");
        }
        assert!(matches!(string_to_bool("yes"), Err(Error::ParseBool(s)) if s == "yes"));
    }

    #[test]
    fn formats_numbers() {
        assert_eq!(int64_to_string(-12), "-12");
        assert_eq!(int32_to_string(5), "5");
        assert_eq!(float_to_string(1.23456, Some(2)), "1.23");
        assert_eq!(float_to_string(0.1, None), "0.1");
        assert_eq!(bool_to_string(true), "true");
    }

    #[test]
    fn slices_become_sets() {
        let set = string_slice_to_value(&["b", "a", "b"]);
        assert_eq!(set.value().map(|s| s.len()), Some(2));

        let set = string_option_slice_to_value(&[Some("x".to_string()), None]);
        assert_eq!(
            set.into_option().unwrap().into_iter().collect::<Vec<_>>(),
            vec!["x".to_string()]
        );

        assert_eq!(int64_slice_to_value(&[3, 1]).value().map(|s| s.len()), Some(2));
    }

    #[test]
    fn safe_accessors_fall_back_to_zero_values() {
        assert_eq!(safe_string(None), "");
        assert!(!safe_bool(None));
        assert_eq!(safe_int64(None), 0);
        assert_eq!(safe_int32(Some(9)), 9);
    }

    #[test]
    fn empty_string_helpers() {
        assert_eq!(none_if_empty(""), None);
        assert_eq!(none_if_empty("x").as_deref(), Some("x"));
        assert_eq!(empty_if_none(None), "");
        assert_eq!(format_value(42), "42");
    }
}
