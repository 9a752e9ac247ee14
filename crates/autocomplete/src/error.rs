use thiserror::Error;

/// Construction-time precondition faults.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WidgetError {
    #[error("no element matches root selector {selector:?}")]
    RootNotFound { selector: String },
    #[error("root element has no <input> descendant")]
    MissingInput,
    #[error("root element has no <ul> results descendant")]
    MissingResults,
}
