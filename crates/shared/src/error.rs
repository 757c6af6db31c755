use thiserror::Error;

/// Rejection for a textual mode label that names no known variant.
///
/// Raised only at the boundaries where modes arrive as text (config files,
/// command-line flags). Core APIs take the enums themselves, so an invalid
/// value is unrepresentable past this point.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized {kind} label '{label}'")]
pub struct InvalidLabel {
    pub kind: &'static str,
    pub label: String,
}

impl InvalidLabel {
    pub fn new(kind: &'static str, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
        }
    }
}
