use super::errors::{FieldError, ValidationErrors};
use super::field_level::{ValidationFieldLevel, ValidationFunc};
use super::json::{leaf_name, JsonFieldLevel};
use serde_json::Value;

/// The field holds a non-zero value: not `null`, not `""`, not `0`, not `false`.
/// Arrays and objects pass when present, even if empty.
#[must_use]
pub fn required(fl: &dyn ValidationFieldLevel) -> bool {
    match fl.field() {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// The field is a string whose first character is a letter.
#[must_use]
pub fn starts_with_letter(fl: &dyn ValidationFieldLevel) -> bool {
    fl.field()
        .as_str()
        .and_then(|s| s.chars().next())
        .is_some_and(char::is_alphabetic)
}

/// The field is an array. An empty array passes; `null` or a missing member does not.
#[must_use]
pub fn not_nil_array(fl: &dyn ValidationFieldLevel) -> bool {
    fl.field().is_array()
}

/// A rule bound to one field of a document.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule<'r> {
    /// Where the field lives, e.g. `owner.name`.
    pub namespace: &'r str,
    /// Name reported on failure.
    pub tag: &'r str,
    pub param: &'r str,
    /// Declared name, when it differs from the serialized one.
    pub struct_field: Option<&'r str>,
    pub func: ValidationFunc,
}

impl<'r> FieldRule<'r> {
    #[must_use]
    pub const fn new(namespace: &'r str, tag: &'r str, func: ValidationFunc) -> Self {
        Self {
            namespace,
            tag,
            param: "",
            struct_field: None,
            func,
        }
    }

    #[must_use]
    pub const fn with_param(self, param: &'r str) -> Self {
        Self { param, ..self }
    }

    #[must_use]
    pub const fn with_struct_field(self, struct_field: &'r str) -> Self {
        Self {
            struct_field: Some(struct_field),
            ..self
        }
    }
}

/// Run `rules` in order against `top`.
///
/// Each field reports at most one failure: once a rule fails for a
/// namespace, later rules for the same namespace are skipped. A namespace
/// whose parent cannot be resolved fails the rule.
///
/// # Errors
///
/// Returns every failure, in rule order, when any rule fails.
pub fn validate_value(top: &Value, rules: &[FieldRule<'_>]) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let mut failed: Vec<&str> = Vec::new();

    for rule in rules {
        if failed.contains(&rule.namespace) {
            continue;
        }

        let passed = JsonFieldLevel::new(top, rule.namespace, rule.tag).map(|fl| {
            let fl = match rule.struct_field {
                Some(name) => fl.with_struct_field_name(name),
                None => fl,
            };
            (rule.func)(&fl.with_param(rule.param))
        });

        if passed != Some(true) {
            failed.push(rule.namespace);
            let field = leaf_name(rule.namespace).unwrap_or(rule.namespace);
            errors.push(
                FieldError::new(field, rule.tag)
                    .with_namespace(rule.namespace)
                    .with_struct_field(rule.struct_field.unwrap_or(field))
                    .with_param(rule.param),
            );
        }
    }

    errors.into_result()
}
