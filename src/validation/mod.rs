//! # Validation Module
//!
//! The boundary between generated code and the field-validation engine.
//!
//! ## Overview
//!
//! Generated request models are validated by an external engine (the
//! `validator` crate today). Nothing outside this module names that engine's
//! types:
//!
//! - **[`ValidationFieldLevel`]** - what a custom rule sees of the field it is
//!   checking. Rules are plain [`ValidationFunc`]s over this trait, so they keep
//!   compiling across engine upgrades.
//! - **[`JsonFieldLevel`]** - the field context generated code builds over the
//!   serialized model.
//! - **[`ValidationErrors`]** - ordered field failures; the `validator` crate's
//!   error tree converts into it.
//! - **[`extract_validation_error_message`]** - turns any failure into the text
//!   placed in a `400` problem document.
//!
//! ## Writing a custom rule
//!
//! ```rust
//! use brrtrouter_runtime::validation::{validate_value, FieldRule, ValidationFieldLevel};
//! use serde_json::json;
//!
//! fn lowercase(fl: &dyn ValidationFieldLevel) -> bool {
//!     fl.field()
//!         .as_str()
//!         .is_some_and(|s| s.chars().all(|c| !c.is_uppercase()))
//! }
//!
//! let rules = [FieldRule::new("slug", "lowercase", lowercase)];
//! assert!(validate_value(&json!({ "slug": "pet-store" }), &rules).is_ok());
//!
//! let errors = validate_value(&json!({ "slug": "Pet-Store" }), &rules).unwrap_err();
//! assert_eq!(errors.iter().next().map(|e| e.tag()), Some("lowercase"));
//! ```
//!
//! ## Cross-field rules
//!
//! The rule parameter names a sibling field, resolved with
//! [`ValidationFieldLevel::struct_field_ok`]:
//!
//! ```rust
//! use brrtrouter_runtime::validation::{validate_value, FieldRule, ValidationFieldLevel};
//! use serde_json::json;
//!
//! fn eq_field(fl: &dyn ValidationFieldLevel) -> bool {
//!     let other = fl.struct_field_ok();
//!     other.found && other.value == fl.field()
//! }
//!
//! let rules = [FieldRule::new("confirm", "eqfield", eq_field).with_param("password")];
//! let body = json!({ "password": "hunter2", "confirm": "hunter3" });
//! assert!(validate_value(&body, &rules).is_err());
//! ```

mod errors;
mod extract;
mod field_level;
mod json;
mod rules;

pub use errors::{FieldError, ValidationErrors};
pub use extract::{extract_anyhow_validation_message, extract_validation_error_message};
pub use field_level::{FieldLookup, Kind, ValidationFieldLevel, ValidationFunc};
pub use json::{lookup, JsonFieldLevel};
pub use rules::{not_nil_array, required, starts_with_letter, validate_value, FieldRule};
