use std::fmt::{Display, Formatter, Result as FmtResult};

/// User input rejected before any network call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyKeyword,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ValidationError::EmptyKeyword => write!(f, "Please enter a search keyword"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Non-success status, transport failure or undecodable body.
/// `status` is `None` when no HTTP status was received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestError {
    pub status: Option<u16>,
    pub message: String,
}

impl RequestError {
    pub fn http(status: u16, status_text: &str) -> Self {
        Self { status: Some(status), message: format!("HTTP {}: {}", status, status_text) }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self { status: None, message: message.into() }
    }

    pub fn decode(endpoint: &str, cause: impl Display) -> Self {
        Self { status: None, message: format!("Unexpected payload from {}: {}", endpoint, cause) }
    }
}

impl Display for RequestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Request failed: {}", self.message)
    }
}

impl std::error::Error for RequestError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    SurfaceUnavailable(String),
    DrawFailed(String),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ChartError::SurfaceUnavailable(msg) => write!(f, "Chart surface unavailable: {}", msg),
            ChartError::DrawFailed(msg) => write!(f, "Chart drawing failed: {}", msg),
        }
    }
}

impl std::error::Error for ChartError {}

/// Root error for controller operations. By the time a controller returns one of
/// these it has already been surfaced or logged according to its policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    Validation(ValidationError),
    Request(RequestError),
    Chart(ChartError),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            AppError::Validation(e) => write!(f, "{}", e),
            AppError::Request(e) => write!(f, "{}", e),
            AppError::Chart(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        AppError::Validation(error)
    }
}

impl From<RequestError> for AppError {
    fn from(error: RequestError) -> Self {
        AppError::Request(error)
    }
}

impl From<ChartError> for AppError {
    fn from(error: ChartError) -> Self {
        AppError::Chart(error)
    }
}

pub type RequestResult<T> = Result<T, RequestError>;
pub type AppResult<T> = Result<T, AppError>;
