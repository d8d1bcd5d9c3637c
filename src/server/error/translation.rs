use thiserror::Error;

/// Failure of a single call to the translation endpoint.
///
/// Only used inside the translation layer; the cache converts every variant back into
/// the untranslated text.
#[derive(Error, Debug)]
pub enum TranslationError {
    /// The call did not finish within the configured timeout.
    #[error("Translation request timed out")]
    Timeout,

    /// Transport or HTTP status failure.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Response body did not have the expected shape.
    #[error("Unexpected translation response: {0}")]
    MalformedResponse(String),
}
