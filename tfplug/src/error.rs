//! Errors raised while assembling schemas

#[derive(Debug, thiserror::Error)]
pub enum TfplugError {
    /// The same attribute name was registered twice
    #[error("attribute `{0}` is defined more than once")]
    DuplicateAttribute(String),

    #[error("attribute names must not be empty")]
    EmptyAttributeName,

    /// Terraform stores schema versions as unsigned upgrade counters
    #[error("schema version {0} is negative")]
    NegativeVersion(i64),
}

pub type Result<T> = std::result::Result<T, TfplugError>;
