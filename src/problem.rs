//! # Problem Module
//!
//! RFC 7807 problem documents returned as error bodies by generated controllers.
//!
//! ```rust
//! use brrtrouter_runtime::{HttpStatusCode, ProblemDetails};
//!
//! let problem = ProblemDetails::new(HttpStatusCode::BadRequest)
//!     .with_type("https://example.com/problems/invalid-pet")
//!     .with_detail("Field 'name' failed validation with tag 'required'. ")
//!     .with_instance("/pets/42")
//!     .with_extension("trace_id", "01HZX");
//!
//! let body = problem.to_json()?;
//! assert_eq!(body["status"], 400);
//! assert_eq!(body["title"], "Bad Request");
//! assert_eq!(body["extensions"]["trace_id"], "01HZX");
//! # Ok::<(), serde_json::Error>(())
//! ```

use crate::status::HttpStatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Media type for serialized [`ProblemDetails`].
pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

/// An RFC 7807 problem document.
///
/// Built once through the `with_*` methods and read through accessors; there is
/// no way to mutate a value after it has been handed to the adapter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemDetails {
    #[serde(rename = "type", default)]
    problem_type: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    detail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status: Option<HttpStatusCode>,
    #[serde(default)]
    instance: String,
    #[serde(default)]
    extensions: HashMap<String, String>,
}

impl ProblemDetails {
    /// Start a problem document for `status`, titled with its reason phrase.
    #[must_use]
    pub fn new(status: HttpStatusCode) -> Self {
        Self {
            title: status.canonical_reason().to_string(),
            status: Some(status),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_type(mut self, problem_type: impl Into<String>) -> Self {
        self.problem_type = problem_type.into();
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: HttpStatusCode) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = instance.into();
        self
    }

    /// Add a caller-defined member. A repeated key replaces the earlier value.
    #[must_use]
    pub fn with_extension(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extensions.insert(key.into(), value.into());
        self
    }

    /// URI identifying the problem category.
    #[must_use]
    pub fn problem_type(&self) -> &str {
        &self.problem_type
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn detail(&self) -> &str {
        &self.detail
    }

    #[must_use]
    pub fn status(&self) -> Option<HttpStatusCode> {
        self.status
    }

    /// URI identifying this occurrence of the problem.
    #[must_use]
    pub fn instance(&self) -> &str {
        &self.instance
    }

    #[must_use]
    pub fn extensions(&self) -> &HashMap<String, String> {
        &self.extensions
    }

    /// Serialize to a JSON body.
    ///
    /// # Errors
    ///
    /// Returns the serializer's error. The members are strings, a `u16` and a
    /// string map, so this does not fail in practice.
    pub fn to_json(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}
