//! Error taxonomy for the preview extension.
//!
//! A missing active editor is deliberately not represented here — the
//! launcher recovers from it locally by asking the host to navigate back.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreviewError {
    /// Transport-level failure talking to the local Jekyll server
    /// (most commonly: `jekyll serve` is not running). Carries the
    /// underlying error's message text verbatim.
    #[error("{0}")]
    Fetch(String),

    /// A content request arrived for a URI outside the registered scheme.
    #[error("unknown preview scheme: {0}")]
    UnknownScheme(String),

    /// A URI string that does not have the `scheme://path` shape.
    #[error("malformed preview uri: {0}")]
    MalformedUri(String),

    /// A command id that matches neither registered command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// The host failed to display the preview document.
    #[error("host failed to show preview: {0}")]
    Host(String),
}
