//! # Security Module
//!
//! Data exchanged between generated controllers and the authorization layer.
//!
//! ## Overview
//!
//! - **[`SecurityCheck`]** - one security requirement declared on an operation:
//!   a scheme name from the OpenAPI `securitySchemes` and the scopes it needs.
//!   Generated code builds these from the OpenAPI document; the authorization
//!   evaluator consumes them.
//! - **[`SecurityError`]** - what the evaluator returns when a check fails: a
//!   message, the status to respond with, and optionally an application payload
//!   ([`CustomError`]) forwarded to the client untouched.
//!
//! This module carries no policy: deciding whether a request satisfies a
//! check belongs to the evaluator.
//!
//! ## Example
//!
//! ```rust
//! use brrtrouter_runtime::{HttpStatusCode, SecurityCheck, SecurityError};
//! use serde_json::json;
//!
//! let check = SecurityCheck::new("bearerAuth", Some(vec!["pets:write".to_string()]))?;
//! assert_eq!(check.scopes(), ["pets:write"]);
//!
//! let err = SecurityError::forbidden("missing scope pets:write")
//!     .with_custom_error(json!({ "code": "SCOPE_MISSING" }));
//! assert_eq!(err.status_code(), HttpStatusCode::Forbidden);
//! assert_eq!(err.response_body()?, json!({ "code": "SCOPE_MISSING" }));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod check;
mod error;

pub use check::SecurityCheck;
pub use error::{CustomError, SecurityError};
