//! # Status Module
//!
//! The catalog of standard HTTP status codes used by value wherever generated
//! controllers need a numeric status (overrides, problem details, security errors).
//!
//! Unlike `http::StatusCode`, which accepts any integer in `100..=999`,
//! [`HttpStatusCode`] is closed over the registered codes, so a value of this
//! type is always a status the wire layer knows how to describe. Conversions
//! to and from `http::StatusCode` are provided for the adapter boundary.
//!
//! ```rust
//! use brrtrouter_runtime::HttpStatusCode;
//!
//! let code = HttpStatusCode::NotFound;
//! assert_eq!(code.as_u16(), 404);
//! assert_eq!(code.canonical_reason(), "Not Found");
//! assert_eq!(HttpStatusCode::from_u16(404), Some(code));
//! assert_eq!(HttpStatusCode::from_u16(299), None);
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

macro_rules! status_codes {
    ($( $(#[$doc:meta])* $variant:ident = $code:literal, $reason:literal; )+) => {
        /// A registered HTTP status code.
        ///
        /// Serializes as a bare integer (`404`), matching the `status` member of
        /// RFC 7807 problem documents.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u16)]
        pub enum HttpStatusCode {
            $( $(#[$doc])* $variant = $code, )+
        }

        impl HttpStatusCode {
            /// Every status code in the catalog, in ascending order.
            pub const ALL: &'static [HttpStatusCode] = &[ $( HttpStatusCode::$variant, )+ ];

            /// Look up a catalog entry by its numeric code.
            #[must_use]
            pub const fn from_u16(code: u16) -> Option<Self> {
                match code {
                    $( $code => Some(HttpStatusCode::$variant), )+
                    _ => None,
                }
            }

            /// The reason phrase registered for this code.
            #[must_use]
            pub const fn canonical_reason(self) -> &'static str {
                match self {
                    $( HttpStatusCode::$variant => $reason, )+
                }
            }
        }
    };
}

status_codes! {
    /// RFC 9110, 15.2.1
    Continue = 100, "Continue";
    /// RFC 9110, 15.2.2
    SwitchingProtocols = 101, "Switching Protocols";
    /// RFC 2518, 10.1
    Processing = 102, "Processing";
    /// RFC 8297
    EarlyHints = 103, "Early Hints";

    /// RFC 9110, 15.3.1
    Ok = 200, "OK";
    /// RFC 9110, 15.3.2
    Created = 201, "Created";
    /// RFC 9110, 15.3.3
    Accepted = 202, "Accepted";
    /// RFC 9110, 15.3.4
    NonAuthoritativeInfo = 203, "Non-Authoritative Information";
    /// RFC 9110, 15.3.5
    NoContent = 204, "No Content";
    /// RFC 9110, 15.3.6
    ResetContent = 205, "Reset Content";
    /// RFC 9110, 15.3.7
    PartialContent = 206, "Partial Content";
    /// RFC 4918, 11.1
    MultiStatus = 207, "Multi-Status";
    /// RFC 5842, 7.1
    AlreadyReported = 208, "Already Reported";
    /// RFC 3229, 10.4.1
    ImUsed = 226, "IM Used";

    /// RFC 9110, 15.4.1
    MultipleChoices = 300, "Multiple Choices";
    /// RFC 9110, 15.4.2
    MovedPermanently = 301, "Moved Permanently";
    /// RFC 9110, 15.4.3
    Found = 302, "Found";
    /// RFC 9110, 15.4.4
    SeeOther = 303, "See Other";
    /// RFC 9110, 15.4.5
    NotModified = 304, "Not Modified";
    /// RFC 9110, 15.4.6
    UseProxy = 305, "Use Proxy";
    /// RFC 9110, 15.4.8
    TemporaryRedirect = 307, "Temporary Redirect";
    /// RFC 9110, 15.4.9
    PermanentRedirect = 308, "Permanent Redirect";

    /// RFC 9110, 15.5.1
    BadRequest = 400, "Bad Request";
    /// RFC 9110, 15.5.2
    Unauthorized = 401, "Unauthorized";
    /// RFC 9110, 15.5.3
    PaymentRequired = 402, "Payment Required";
    /// RFC 9110, 15.5.4
    Forbidden = 403, "Forbidden";
    /// RFC 9110, 15.5.5
    NotFound = 404, "Not Found";
    /// RFC 9110, 15.5.6
    MethodNotAllowed = 405, "Method Not Allowed";
    /// RFC 9110, 15.5.7
    NotAcceptable = 406, "Not Acceptable";
    /// RFC 9110, 15.5.8
    ProxyAuthRequired = 407, "Proxy Authentication Required";
    /// RFC 9110, 15.5.9
    RequestTimeout = 408, "Request Timeout";
    /// RFC 9110, 15.5.10
    Conflict = 409, "Conflict";
    /// RFC 9110, 15.5.11
    Gone = 410, "Gone";
    /// RFC 9110, 15.5.12
    LengthRequired = 411, "Length Required";
    /// RFC 9110, 15.5.13
    PreconditionFailed = 412, "Precondition Failed";
    /// RFC 9110, 15.5.14
    RequestEntityTooLarge = 413, "Request Entity Too Large";
    /// RFC 9110, 15.5.15
    RequestUriTooLong = 414, "Request URI Too Long";
    /// RFC 9110, 15.5.16
    UnsupportedMediaType = 415, "Unsupported Media Type";
    /// RFC 9110, 15.5.17
    RequestedRangeNotSatisfiable = 416, "Requested Range Not Satisfiable";
    /// RFC 9110, 15.5.18
    ExpectationFailed = 417, "Expectation Failed";
    /// RFC 9110, 15.5.19 (Unused)
    Teapot = 418, "I'm a teapot";
    /// RFC 9110, 15.5.20
    MisdirectedRequest = 421, "Misdirected Request";
    /// RFC 9110, 15.5.21
    UnprocessableEntity = 422, "Unprocessable Entity";
    /// RFC 4918, 11.3
    Locked = 423, "Locked";
    /// RFC 4918, 11.4
    FailedDependency = 424, "Failed Dependency";
    /// RFC 8470, 5.2.
    TooEarly = 425, "Too Early";
    /// RFC 9110, 15.5.22
    UpgradeRequired = 426, "Upgrade Required";
    /// RFC 6585, 3
    PreconditionRequired = 428, "Precondition Required";
    /// RFC 6585, 4
    TooManyRequests = 429, "Too Many Requests";
    /// RFC 6585, 5
    RequestHeaderFieldsTooLarge = 431, "Request Header Fields Too Large";
    /// RFC 7725, 3
    UnavailableForLegalReasons = 451, "Unavailable For Legal Reasons";

    /// RFC 9110, 15.6.1
    InternalServerError = 500, "Internal Server Error";
    /// RFC 9110, 15.6.2
    NotImplemented = 501, "Not Implemented";
    /// RFC 9110, 15.6.3
    BadGateway = 502, "Bad Gateway";
    /// RFC 9110, 15.6.4
    ServiceUnavailable = 503, "Service Unavailable";
    /// RFC 9110, 15.6.5
    GatewayTimeout = 504, "Gateway Timeout";
    /// RFC 9110, 15.6.6
    HttpVersionNotSupported = 505, "HTTP Version Not Supported";
    /// RFC 2295, 8.1
    VariantAlsoNegotiates = 506, "Variant Also Negotiates";
    /// RFC 4918, 11.5
    InsufficientStorage = 507, "Insufficient Storage";
    /// RFC 5842, 7.2
    LoopDetected = 508, "Loop Detected";
    /// RFC 2774, 7
    NotExtended = 510, "Not Extended";
    /// RFC 6585, 6
    NetworkAuthenticationRequired = 511, "Network Authentication Required";
}

impl HttpStatusCode {
    /// The numeric status code.
    #[inline]
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    #[must_use]
    pub const fn is_informational(self) -> bool {
        matches!(self.as_u16(), 100..=199)
    }

    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self.as_u16(), 200..=299)
    }

    #[must_use]
    pub const fn is_redirection(self) -> bool {
        matches!(self.as_u16(), 300..=399)
    }

    #[must_use]
    pub const fn is_client_error(self) -> bool {
        matches!(self.as_u16(), 400..=499)
    }

    #[must_use]
    pub const fn is_server_error(self) -> bool {
        matches!(self.as_u16(), 500..=599)
    }
}

/// Returned when an integer or `http::StatusCode` is not part of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownStatusCode(pub u16);

impl fmt::Display for UnknownStatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not a registered HTTP status code", self.0)
    }
}

impl std::error::Error for UnknownStatusCode {}

impl fmt::Display for HttpStatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.canonical_reason())
    }
}

impl From<HttpStatusCode> for u16 {
    fn from(code: HttpStatusCode) -> Self {
        code.as_u16()
    }
}

impl TryFrom<u16> for HttpStatusCode {
    type Error = UnknownStatusCode;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        HttpStatusCode::from_u16(code).ok_or(UnknownStatusCode(code))
    }
}

impl From<HttpStatusCode> for http::StatusCode {
    fn from(code: HttpStatusCode) -> Self {
        // Every catalog entry lies in 100..=599, which http::StatusCode accepts.
        http::StatusCode::from_u16(code.as_u16()).unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl TryFrom<http::StatusCode> for HttpStatusCode {
    type Error = UnknownStatusCode;

    fn try_from(code: http::StatusCode) -> Result<Self, Self::Error> {
        HttpStatusCode::try_from(code.as_u16())
    }
}

impl Serialize for HttpStatusCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.as_u16())
    }
}

impl<'de> Deserialize<'de> for HttpStatusCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = u16::deserialize(deserializer)?;
        HttpStatusCode::try_from(code).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_reason() {
        assert_eq!(HttpStatusCode::Ok.canonical_reason(), "OK");
        assert_eq!(HttpStatusCode::NotFound.canonical_reason(), "Not Found");
        assert_eq!(HttpStatusCode::Teapot.canonical_reason(), "I'm a teapot");
    }

    #[test]
    fn test_display() {
        assert_eq!(HttpStatusCode::Forbidden.to_string(), "403 Forbidden");
    }

    #[test]
    fn test_status_classes() {
        assert!(HttpStatusCode::EarlyHints.is_informational());
        assert!(HttpStatusCode::ImUsed.is_success());
        assert!(HttpStatusCode::PermanentRedirect.is_redirection());
        assert!(HttpStatusCode::UnavailableForLegalReasons.is_client_error());
        assert!(HttpStatusCode::NetworkAuthenticationRequired.is_server_error());
        assert!(!HttpStatusCode::Unauthorized.is_server_error());
    }
}
