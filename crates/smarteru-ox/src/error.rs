use thiserror::Error;

/// Errors produced while building, sending or interpreting a SmarterU request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SmarterURequestError {
    /// A value required to build the request is absent. Raised before any
    /// network traffic happens.
    #[error("{0}")]
    MissingValue(String),

    /// A string could not be parsed into one of the closed vocabularies the
    /// API accepts (statuses, match types, sort fields...).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The transport failed or the endpoint answered with a non-2xx status.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The API reported `<Result>Failed</Result>`. Carries every
    /// `"{ErrorID}: {ErrorMessage}"` pair joined by `", "`.
    #[error("{0}")]
    Api(String),

    /// The request could not be written, or the response is not a
    /// well-formed SmarterU document.
    #[error("XML error: {0}")]
    Xml(String),

    /// A successful envelope lacks the payload the operation needs.
    #[error("Unexpected response from API: {0}")]
    UnexpectedResponse(String),
}

impl SmarterURequestError {
    /// True for failures detected locally before a request was sent.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::MissingValue(_) | Self::InvalidArgument(_))
    }
}

impl From<strum::ParseError> for SmarterURequestError {
    fn from(err: strum::ParseError) -> Self {
        Self::InvalidArgument(err.to_string())
    }
}

impl From<roxmltree::Error> for SmarterURequestError {
    fn from(err: roxmltree::Error) -> Self {
        Self::Xml(err.to_string())
    }
}

impl From<std::io::Error> for SmarterURequestError {
    fn from(err: std::io::Error) -> Self {
        Self::Xml(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for SmarterURequestError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Self::Xml(err.to_string())
    }
}

impl From<reqwest::Error> for SmarterURequestError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.to_string())
    }
}
