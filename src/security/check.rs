use crate::validation::{
    not_nil_array, required, starts_with_letter, validate_value, FieldRule, ValidationErrors,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

const SECURITY_CHECK_RULES: &[FieldRule<'static>] = &[
    FieldRule::new("name", "required", required).with_struct_field("schema_name"),
    FieldRule::new("name", "starts_with_letter", starts_with_letter)
        .with_struct_field("schema_name"),
    FieldRule::new("scopes", "not_nil_array", not_nil_array),
];

/// A security requirement declared on an operation.
///
/// `schema_name` is never empty and starts with a letter; `scopes` is always
/// present, though it may be empty. Both are enforced on construction and on
/// deserialization (JSON keys `name` and `scopes`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSecurityCheck")]
pub struct SecurityCheck {
    #[serde(rename = "name")]
    schema_name: String,
    scopes: Vec<String>,
}

#[derive(Deserialize)]
struct RawSecurityCheck {
    name: Option<String>,
    scopes: Option<Vec<String>>,
}

impl SecurityCheck {
    /// Declare a requirement on scheme `schema_name` with `scopes`.
    ///
    /// Generated code always passes a scope list; `None` models a generator bug
    /// that dropped it.
    ///
    /// # Errors
    ///
    /// A malformed check is a programming error in the caller. It is logged and
    /// returned, never repaired: an empty or non-letter-leading `schema_name`
    /// fails with tag `required` or `starts_with_letter`, and `scopes: None`
    /// fails with `not_nil_array`.
    pub fn new(
        schema_name: impl Into<String>,
        scopes: Option<Vec<String>>,
    ) -> Result<Self, ValidationErrors> {
        let schema_name = schema_name.into();
        check(Some(schema_name.as_str()), scopes.as_deref())?;
        Ok(Self {
            schema_name,
            scopes: scopes.unwrap_or_default(),
        })
    }

    /// The `securitySchemes` entry this check refers to.
    #[must_use]
    pub fn schema_name(&self) -> &str {
        &self.schema_name
    }

    #[must_use]
    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }
}

impl TryFrom<RawSecurityCheck> for SecurityCheck {
    type Error = ValidationErrors;

    fn try_from(raw: RawSecurityCheck) -> Result<Self, Self::Error> {
        check(raw.name.as_deref(), raw.scopes.as_deref())?;
        Ok(Self {
            schema_name: raw.name.unwrap_or_default(),
            scopes: raw.scopes.unwrap_or_default(),
        })
    }
}

fn check(name: Option<&str>, scopes: Option<&[String]>) -> Result<(), ValidationErrors> {
    let doc = json!({ "name": name, "scopes": scopes });
    validate_value(&doc, SECURITY_CHECK_RULES).inspect_err(|errors| {
        warn!(
            schema_name = name.unwrap_or_default(),
            errors = %errors,
            "rejected malformed security check"
        );
    })
}
