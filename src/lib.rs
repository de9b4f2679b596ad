//! # BRRTRouter Runtime
//!
//! Runtime support linked into services generated by `brrtrouter-gen`.
//!
//! ## Overview
//!
//! Generated controllers need a small, stable surface that does not change when
//! the HTTP engine, the validation engine or the authorization layer does. This
//! crate is that surface:
//!
//! - **[`controller`]** - per-request response state (status override, headers,
//!   the engine's request object)
//! - **[`security`]** - declared security requirements and the error returned
//!   when one is not met
//! - **[`validation`]** - the field context custom rules are written against, and
//!   the conversion of validation failures into messages
//! - **[`problem`]** - RFC 7807 problem documents
//! - **[`status`]** - the HTTP status code catalog
//!
//! ## Request Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Adapter as Routing Adapter
//!     participant State as ControllerState
//!     participant Handler as Generated Controller
//!     participant Extract as extract_validation_error_message
//!
//!     Adapter->>State: init_controller(request)
//!     Adapter->>Handler: run handler
//!     Handler->>State: set_status / set_header
//!     alt Validation failed
//!         Adapter->>Extract: failure
//!         Extract-->>Adapter: message
//!         Adapter->>Adapter: 400 ProblemDetails
//!     end
//!     alt Security check failed
//!         Handler-->>Adapter: SecurityError
//!         Adapter->>Adapter: status_code + response_body
//!     end
//!     Adapter->>State: into_parts()
//!     Adapter->>Adapter: write wire response
//! ```
//!
//! Nothing here performs I/O, spawns work or reads configuration. Every
//! operation completes synchronously on the caller's thread.
//!
//! ## Logging
//!
//! Events are emitted through `tracing`; the service installs the subscriber.

pub mod controller;
pub mod problem;
pub mod security;
pub mod status;
pub mod validation;

pub use controller::{Controller, ControllerParts, ControllerState, HasControllerState};
pub use problem::{ProblemDetails, APPLICATION_PROBLEM_JSON};
pub use security::{CustomError, SecurityCheck, SecurityError};
pub use status::{HttpStatusCode, UnknownStatusCode};
pub use validation::{extract_validation_error_message, ValidationErrors, ValidationFieldLevel};
