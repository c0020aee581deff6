//! Diagnostic formatting for API failures
//!
//! The formatters return `(summary, detail)` pairs; the `add_*` helpers push
//! them onto a [`Diagnostics`] collection as errors. Response bodies are read
//! through `reqwest`, so anything that touches a response is async.

use std::error::Error as StdError;
use std::fmt;
use std::io::ErrorKind;
use tfplug::types::Diagnostics;

/// Failure of an API call during `operation` on `resource_type`
pub fn api_error(operation: &str, resource_type: &str, detail: &str) -> (String, String) {
    (
        format!("Error {} {}", operation, resource_type),
        format!("Could not {} {}: {}", operation, resource_type, detail),
    )
}

pub fn not_found_error(resource_type: &str, id: &str) -> (String, String) {
    (
        format!("{} Not Found", resource_type),
        format!(
            "The {} with ID '{}' was not found. It may have been deleted outside of Terraform.",
            resource_type, id
        ),
    )
}

pub fn validation_error(field: &str, detail: &str) -> (String, String) {
    (
        format!("Invalid {}", field),
        format!("The {} value is invalid: {}", field, detail),
    )
}

pub fn conflict_error(resource_type: &str, detail: &str) -> (String, String) {
    (
        format!("Conflict creating {}", resource_type),
        format!("A conflict occurred: {}", detail),
    )
}

pub fn unauthorized_error(operation: &str) -> (String, String) {
    (
        format!("Unauthorized {}", operation),
        format!(
            "You do not have permission to {}. Please check your credentials and permissions.",
            operation
        ),
    )
}

pub fn timeout_error(operation: &str, resource_type: &str) -> (String, String) {
    (
        format!("Timeout {}", operation),
        format!(
            "Operation timed out while {} {}. The resource may have been created but confirmation could not be received.",
            operation, resource_type
        ),
    )
}

/// Adds an API error built from the response status, body and the
/// underlying error
pub async fn add_api_error_diagnostic(
    diagnostics: &mut Diagnostics,
    operation: &str,
    resource_type: &str,
    response: Option<reqwest::Response>,
    error: Option<&dyn fmt::Display>,
) {
    let (summary, base) = api_error(operation, resource_type, "");
    let mut details = parse_api_error(response).await;
    if let Some(error) = error {
        details = format!("{}: {}", details, error);
    }

    tracing::debug!("{}: {}", summary, details);
    diagnostics.add_error(summary, format!("{} {}", base, details));
}

pub fn add_not_found_diagnostic(diagnostics: &mut Diagnostics, resource_type: &str, id: &str) {
    let (summary, detail) = not_found_error(resource_type, id);
    diagnostics.add_error(summary, detail);
}

pub fn add_validation_diagnostic(diagnostics: &mut Diagnostics, field: &str, detail: &str) {
    let (summary, detail) = validation_error(field, detail);
    diagnostics.add_error(summary, detail);
}

pub fn add_conflict_diagnostic(diagnostics: &mut Diagnostics, resource_type: &str, detail: &str) {
    let (summary, detail) = conflict_error(resource_type, detail);
    diagnostics.add_error(summary, detail);
}

pub fn add_unauthorized_diagnostic(diagnostics: &mut Diagnostics, operation: &str) {
    let (summary, detail) = unauthorized_error(operation);
    diagnostics.add_error(summary, detail);
}

pub fn add_timeout_diagnostic(diagnostics: &mut Diagnostics, operation: &str, resource_type: &str) {
    let (summary, detail) = timeout_error(operation, resource_type);
    diagnostics.add_error(summary, detail);
}

/// HTTP 403
pub fn add_forbidden_diagnostic(diagnostics: &mut Diagnostics, operation: &str) {
    diagnostics.add_error(
        format!("Forbidden {}", operation),
        format!(
            "You do not have permission to {} (HTTP 403). Please check your access credentials and permissions.",
            operation
        ),
    );
}

/// HTTP 5xx
pub fn add_server_error_diagnostic(diagnostics: &mut Diagnostics, status_code: u16, detail: &str) {
    diagnostics.add_error(
        format!("Server Error ({})", status_code),
        format!(
            "The server returned an error (HTTP {}). Details: {}",
            status_code, detail
        ),
    );
}

/// HTTP 4xx
pub fn add_client_error_diagnostic(diagnostics: &mut Diagnostics, status_code: u16, detail: &str) {
    diagnostics.add_error(
        format!("Client Error ({})", status_code),
        format!(
            "The request could not be processed (HTTP {}). Details: {}",
            status_code, detail
        ),
    );
}

/// Summarises a response as `"{status}: {body}"`, or just the status when
/// the body is empty
pub async fn parse_api_error(response: Option<reqwest::Response>) -> String {
    let Some(response) = response else {
        return "Unknown error".to_string();
    };

    let status = response.status().to_string();
    let body = read_body(response).await;
    if body.is_empty() {
        status
    } else {
        format!("{}: {}", status, body)
    }
}

/// The response body as text, empty when there is no response
pub async fn extract_response_body(response: Option<reqwest::Response>) -> String {
    match response {
        Some(response) => read_body(response).await,
        None => String::new(),
    }
}

async fn read_body(response: reqwest::Response) -> String {
    match response.text().await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!("Failed to read response body: {}", e);
            String::new()
        }
    }
}

pub fn is_not_found(status_code: u16) -> bool {
    status_code == 404
}

pub fn is_forbidden(status_code: u16) -> bool {
    status_code == 403
}

pub fn is_unauthorized(status_code: u16) -> bool {
    status_code == 401
}

pub fn is_conflict(status_code: u16) -> bool {
    status_code == 409
}

/// 4xx
pub fn is_client_error(status_code: u16) -> bool {
    (400..500).contains(&status_code)
}

/// 5xx
pub fn is_server_error(status_code: u16) -> bool {
    (500..600).contains(&status_code)
}

/// Classifies `error` as a networking failure by walking its source chain
///
/// Timeouts, refused connections and DNS failures win over the generic
/// connection failure, whichever level of the chain they appear on.
pub fn detect_network_error(error: &(dyn StdError + 'static)) -> Option<String> {
    let mut fallback = None;
    let mut current = Some(error);

    while let Some(err) = current {
        if let Some(req) = err.downcast_ref::<reqwest::Error>() {
            if req.is_timeout() {
                return Some(format!("Connection timed out: {}", error));
            }
            if req.is_connect() && fallback.is_none() {
                fallback = Some(format!("OpError: connect, {}", error));
            }
        }

        if let Some(io) = err.downcast_ref::<std::io::Error>() {
            match io.kind() {
                ErrorKind::TimedOut => return Some(format!("Connection timed out: {}", error)),
                ErrorKind::ConnectionRefused => {
                    return Some(format!("Connection refused: {}", error))
                }
                kind if is_socket_failure(kind) && fallback.is_none() => {
                    fallback = Some(format!("OpError: {}, {}", kind, error));
                }
                _ => {}
            }
        }

        let text = err.to_string();
        if text.contains("dns error") || text.contains("failed to lookup address") {
            return Some(format!("DNS Error: {}", error));
        }

        current = err.source();
    }

    fallback
}

// File and decoding errors also surface as io::Error; only these mean the
// connection itself failed
fn is_socket_failure(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::ConnectionReset
            | ErrorKind::ConnectionAborted
            | ErrorKind::NotConnected
            | ErrorKind::AddrInUse
            | ErrorKind::AddrNotAvailable
            | ErrorKind::BrokenPipe
    )
}

/// Adds an error for a failed API call, separating networking failures from
/// responses the API returned
///
/// `message` is the summary unless the error is a networking failure.
pub async fn handle_api_error<E>(
    message: &str,
    error: &E,
    response: Option<reqwest::Response>,
    diagnostics: &mut Diagnostics,
) where
    E: StdError + 'static,
{
    // Networking failures are summarised by their classification, not `message`
    if let Some(network) = detect_network_error(error) {
        let detail = format!("Networking Error: {} ({})", network, error);
        diagnostics.add_error(network, detail);
        return;
    }

    match response {
        Some(response) => {
            let status = response.status().to_string();
            let body = read_body(response).await;
            diagnostics.add_error(message, format!("{}: {}: {}", error, status, body));
        }
        None => {
            diagnostics.add_error(
                message,
                format!(
                    "Unexpected Error: {} ('{}'): ",
                    error,
                    std::any::type_name::<E>()
                ),
            );
        }
    }
}

/// Adds a warning for a non-fatal API problem
pub async fn handle_api_warning<E>(
    message: &str,
    error: &E,
    response: Option<reqwest::Response>,
    diagnostics: &mut Diagnostics,
) where
    E: fmt::Display + ?Sized,
{
    let (status, body) = match response {
        Some(response) => {
            let status = response.status().to_string();
            (status, read_body(response).await)
        }
        None => (String::new(), String::new()),
    };

    diagnostics.add_warning(message, format!("{}: {}: {}", error, status, body));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Wrapped(std::io::Error);

    impl fmt::Display for Wrapped {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "request failed")
        }
    }

    impl StdError for Wrapped {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn formatters_produce_expected_pairs() {
        assert_eq!(
            api_error("creating", "user", "boom"),
            ("Error creating user".to_string(), "Could not creating user: boom".to_string())
        );
        assert_eq!(not_found_error("User", "42").0, "User Not Found");
        assert!(not_found_error("User", "42").1.contains("ID '42'"));
        assert_eq!(validation_error("port", "too big").1, "The port value is invalid: too big");
        assert_eq!(conflict_error("role", "exists").0, "Conflict creating role");
        assert_eq!(unauthorized_error("delete").0, "Unauthorized delete");
        assert_eq!(timeout_error("creating", "repo").0, "Timeout creating");
    }

    #[test]
    fn adders_push_errors() {
        let mut diags = Diagnostics::new();

        add_not_found_diagnostic(&mut diags, "User", "bob");
        add_forbidden_diagnostic(&mut diags, "read");
        add_server_error_diagnostic(&mut diags, 502, "bad gateway");
        add_client_error_diagnostic(&mut diags, 422, "invalid");

        assert_eq!(diags.error_count(), 4);
        assert_eq!(diags.errors[1].summary, "Forbidden read");
        assert_eq!(diags.errors[2].summary, "Server Error (502)");
        assert_eq!(
            diags.errors[3].detail,
            "The request could not be processed (HTTP 422). Details: invalid"
        );
    }

    #[test]
    fn status_predicates_cover_ranges() {
        assert!(is_not_found(404));
        assert!(is_forbidden(403));
        assert!(is_unauthorized(401));
        assert!(is_conflict(409));
        assert!(is_client_error(400) && is_client_error(499));
        assert!(!is_client_error(500) && !is_client_error(399));
        assert!(is_server_error(500) && is_server_error(599));
        assert!(!is_server_error(600));
    }

    #[test]
    fn io_errors_are_classified_by_kind() {
        let refused = std::io::Error::new(ErrorKind::ConnectionRefused, "refused");
        let timed_out = std::io::Error::new(ErrorKind::TimedOut, "slow");
        let reset = std::io::Error::new(ErrorKind::ConnectionReset, "reset");

        assert_eq!(
            detect_network_error(&refused).as_deref(),
            Some("Connection refused: refused")
        );
        assert!(detect_network_error(&timed_out)
            .unwrap()
            .starts_with("Connection timed out"));
        assert!(detect_network_error(&reset).unwrap().starts_with("OpError: "));
    }

    #[test]
    fn source_chain_is_searched() {
        let err = Wrapped(std::io::Error::new(ErrorKind::ConnectionRefused, "nope"));

        assert_eq!(
            detect_network_error(&err).as_deref(),
            Some("Connection refused: request failed")
        );
    }

    #[test]
    fn dns_failures_are_recognised_by_message() {
        let err = std::io::Error::other("dns error: failed to lookup address information");

        assert!(detect_network_error(&err).unwrap().starts_with("DNS Error: "));
    }

    #[test]
    fn non_network_errors_are_not_classified() {
        let err = "abc".parse::<i64>().unwrap_err();

        assert!(detect_network_error(&err).is_none());
    }

    #[test]
    fn local_io_failures_are_not_networking_errors() {
        for kind in [
            ErrorKind::InvalidData,
            ErrorKind::UnexpectedEof,
            ErrorKind::NotFound,
            ErrorKind::PermissionDenied,
        ] {
            let err = Wrapped(std::io::Error::new(kind, "decoding body"));
            assert!(detect_network_error(&err).is_none(), "{:?}", kind);
        }

        let broken = std::io::Error::new(ErrorKind::BrokenPipe, "pipe");
        assert!(detect_network_error(&broken).unwrap().starts_with("OpError: "));
    }
}
