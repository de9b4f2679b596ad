use crate::problem::ProblemDetails;
use crate::status::HttpStatusCode;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use tracing::debug;

/// An application-defined error body, forwarded to the client as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomError<P = Value> {
    payload: P,
}

impl<P> CustomError<P> {
    #[must_use]
    pub fn new(payload: P) -> Self {
        Self { payload }
    }

    #[must_use]
    pub fn payload(&self) -> &P {
        &self.payload
    }

    #[must_use]
    pub fn into_payload(self) -> P {
        self.payload
    }
}

/// A failed security check.
///
/// The adapter answers with [`status_code`](Self::status_code) and
/// [`response_body`](Self::response_body).
#[derive(Debug, Clone, PartialEq)]
pub struct SecurityError<P = Value> {
    message: String,
    status_code: HttpStatusCode,
    custom_error: Option<CustomError<P>>,
}

impl SecurityError {
    #[must_use]
    pub fn new(message: impl Into<String>, status_code: HttpStatusCode) -> Self {
        let message = message.into();
        debug!(
            status = status_code.as_u16(),
            message = %message,
            "security check failed"
        );
        Self {
            message,
            status_code,
            custom_error: None,
        }
    }

    /// `401 Unauthorized`: credentials missing or invalid.
    #[must_use]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(message, HttpStatusCode::Unauthorized)
    }

    /// `403 Forbidden`: authenticated but not allowed.
    #[must_use]
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(message, HttpStatusCode::Forbidden)
    }
}

impl<P> SecurityError<P> {
    /// Attach an application payload, replacing any earlier one. The payload
    /// type may differ from the current one.
    #[must_use]
    pub fn with_custom_error<Q>(self, payload: Q) -> SecurityError<Q> {
        SecurityError {
            message: self.message,
            status_code: self.status_code,
            custom_error: Some(CustomError::new(payload)),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn status_code(&self) -> HttpStatusCode {
        self.status_code
    }

    #[must_use]
    pub fn custom_error(&self) -> Option<&CustomError<P>> {
        self.custom_error.as_ref()
    }

    #[must_use]
    pub fn into_custom_error(self) -> Option<CustomError<P>> {
        self.custom_error
    }

    /// A problem document describing this failure.
    #[must_use]
    pub fn to_problem_details(&self) -> ProblemDetails {
        ProblemDetails::new(self.status_code).with_detail(self.message.as_str())
    }

    /// The response body: the custom payload when one is attached, otherwise
    /// [`to_problem_details`](Self::to_problem_details) as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be serialized.
    pub fn response_body(&self) -> Result<Value, serde_json::Error>
    where
        P: Serialize,
    {
        match &self.custom_error {
            Some(custom) => serde_json::to_value(custom.payload()),
            None => self.to_problem_details().to_json(),
        }
    }
}

impl<P> fmt::Display for SecurityError<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl<P: fmt::Debug> std::error::Error for SecurityError<P> {}
