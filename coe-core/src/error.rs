//! Error types shared by the controllers and the API client.

use std::fmt;

/// A filter combination the backend contract does not accept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `start_year` is after `end_year`.
    YearRangeInverted { start_year: i32, end_year: i32 },
    /// Moving-average window below one period.
    WindowTooSmall(i64),
    /// The vehicle class is not offered on this page (e.g. `ALL` on Seasonality).
    UnsupportedVehicleClass(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::YearRangeInverted {
                start_year,
                end_year,
            } => write!(
                f,
                "start year {start_year} is after end year {end_year}"
            ),
            ValidationError::WindowTooSmall(window) => {
                write!(f, "window must be at least 1 (got {window})")
            }
            ValidationError::UnsupportedVehicleClass(class) => {
                write!(f, "vehicle class '{class}' is not available here")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Why a fetch cycle ended without new data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Network or transport failure before a response arrived.
    Transport(String),
    /// The backend answered with a non-success status.
    Status { code: u16, url: String },
    /// The body was not the JSON shape we expect.
    Decode(String),
    /// The request URL could not be built.
    InvalidUrl(String),
    /// Filters were rejected before any request was sent.
    Invalid(Vec<ValidationError>),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(msg) => write!(f, "Request failed: {msg}"),
            FetchError::Status { code, url } => write!(f, "HTTP {code} from {url}"),
            FetchError::Decode(msg) => write!(f, "Malformed response: {msg}"),
            FetchError::InvalidUrl(msg) => write!(f, "Invalid request URL: {msg}"),
            FetchError::Invalid(errors) => {
                write!(f, "Invalid filters: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{err}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for FetchError {}

impl From<url::ParseError> for FetchError {
    fn from(err: url::ParseError) -> Self {
        FetchError::InvalidUrl(err.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

/// A string did not name any variant of a filter enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: '{}'", self.kind, self.value)
    }
}

impl std::error::Error for ParseEnumError {}
