extern crate reqwest;

use std::{error::Error as StdError, fmt, result::Result as StdResult};

#[derive(Debug)]
pub struct Error(Box<Inner>);
#[derive(Debug)]
pub(crate) enum Kind {
    Network(reqwest::Error),
    Status(reqwest::StatusCode),
    Api(Option<String>),
    Malformed(reqwest::Error),
}
#[derive(Debug)]
struct Inner {
    kind: Kind,
    endpoint: &'static str,
}

pub type Result<T> = StdResult<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0.kind {
            Kind::Network(err) => write!(f, "{}: error sending request: {}", self.0.endpoint, err),
            Kind::Status(status) => write!(f, "{}: server answered {}", self.0.endpoint, status),
            Kind::Api(Some(comment)) => {
                write!(f, "{}: API request failed: {}", self.0.endpoint, comment)
            }
            Kind::Api(None) => write!(f, "{}: API request failed", self.0.endpoint),
            Kind::Malformed(err) => {
                write!(f, "{}: malformed response body: {}", self.0.endpoint, err)
            }
        }
    }
}
impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.0.kind {
            Kind::Network(err) | Kind::Malformed(err) => Some(err),
            Kind::Status(_) | Kind::Api(_) => None,
        }
    }
}
impl Error {
    pub(crate) fn with_kind(endpoint: &'static str, kind: Kind) -> Self {
        Self(Box::new(Inner { kind, endpoint }))
    }
    pub(crate) fn network(endpoint: &'static str, err: reqwest::Error) -> Self {
        Self::with_kind(endpoint, Kind::Network(err))
    }
    pub(crate) fn status(endpoint: &'static str, status: reqwest::StatusCode) -> Self {
        Self::with_kind(endpoint, Kind::Status(status))
    }
    pub(crate) fn api(endpoint: &'static str, comment: Option<String>) -> Self {
        Self::with_kind(endpoint, Kind::Api(comment))
    }
    pub(crate) fn malformed(endpoint: &'static str, err: reqwest::Error) -> Self {
        Self::with_kind(endpoint, Kind::Malformed(err))
    }

    pub fn endpoint(&self) -> &'static str {
        self.0.endpoint
    }
    pub fn is_client_error(&self) -> bool {
        match &self.0.kind {
            Kind::Status(status) => status.is_client_error(),
            _ => false,
        }
    }
}
