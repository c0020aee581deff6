//! Canned validator lists for common enumerated string attributes
//!
//! Each function returns a ready-to-attach `Vec`, so it can be passed
//! straight to the `*_with_validators` constructors.

use std::sync::Arc;
use tfplug::validator::{string, StringValidator};

pub type StringValidators = Vec<Arc<StringValidator>>;

/// A single one-of validator over `values`
pub fn string_one_of(values: &[&str]) -> StringValidators {
    vec![string::one_of(values)]
}

pub fn status(values: &[&str]) -> StringValidators {
    string_one_of(values)
}

/// User directory sources
pub fn source_type() -> StringValidators {
    string_one_of(&["local", "ldap", "crowd", "saml"])
}

pub fn realm() -> StringValidators {
    string_one_of(&["internal", "external"])
}

/// Booleans that an API encodes as strings
pub fn boolean_string() -> StringValidators {
    string_one_of(&["true", "false", "True", "False", "TRUE", "FALSE"])
}

pub fn provider(values: &[&str]) -> StringValidators {
    string_one_of(values)
}

pub fn role(values: &[&str]) -> StringValidators {
    string_one_of(values)
}

pub fn url_protocol() -> StringValidators {
    string_one_of(&["http", "https", "ftp", "sftp"])
}

pub fn authentication_method() -> StringValidators {
    string_one_of(&["basic", "token", "apikey", "oauth2", "saml", "ldap"])
}

pub fn environment() -> StringValidators {
    string_one_of(&[
        "dev",
        "development",
        "test",
        "testing",
        "staging",
        "stage",
        "production",
        "prod",
    ])
}

pub fn sort_order() -> StringValidators {
    string_one_of(&["asc", "ascending", "desc", "descending"])
}

pub fn severity() -> StringValidators {
    string_one_of(&["critical", "high", "medium", "low", "info"])
}

#[cfg(test)]
mod tests {
    use super::*;
    use tfplug::types::{AttributePath, Diagnostics, Value};
    use tfplug::validator::validate_all;

    fn error_count(validators: &StringValidators, value: &str) -> usize {
        let mut diags = Diagnostics::new();
        validate_all(
            validators,
            &Value::known(value.to_string()),
            &AttributePath::new("field"),
            &mut diags,
        );
        diags.error_count()
    }

    #[test]
    fn every_set_holds_one_validator() {
        let sets = [
            status(&["active"]),
            source_type(),
            realm(),
            boolean_string(),
            provider(&["github"]),
            role(&["admin"]),
            url_protocol(),
            authentication_method(),
            environment(),
            sort_order(),
            severity(),
        ];

        assert!(sets.iter().all(|set| set.len() == 1));
    }

    #[test]
    fn fixed_sets_accept_members_only() {
        assert_eq!(error_count(&source_type(), "ldap"), 0);
        assert_eq!(error_count(&source_type(), "kerberos"), 1);
        assert_eq!(error_count(&environment(), "prod"), 0);
        assert_eq!(error_count(&sort_order(), "random"), 1);
        assert_eq!(error_count(&boolean_string(), "TRUE"), 0);
        assert_eq!(error_count(&boolean_string(), "yes"), 1);
    }

    #[test]
    fn caller_supplied_sets_use_given_values() {
        let roles = role(&["admin", "viewer"]);

        assert_eq!(error_count(&roles, "viewer"), 0);
        assert_eq!(error_count(&roles, "owner"), 1);
    }

    #[test]
    fn null_values_are_not_checked() {
        let mut diags = Diagnostics::new();

        validate_all(&severity(), &Value::null(), &AttributePath::new("severity"), &mut diags);

        assert!(diags.is_empty());
    }
}
