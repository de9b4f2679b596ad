use super::errors::{FieldError, ValidationErrors};
use std::error::Error;
use tracing::trace;

/// Turn a validation failure into a single human-readable message.
///
/// - `None` gives an empty string.
/// - A [`ValidationErrors`] (or the `validator` crate's own
///   `ValidationErrors`) gives one sentence per field failure, in order:
///   `Field '<name>' failed validation with tag '<tag>'. `, where `<name>` is
///   `field_name` when given and the failing field's name otherwise.
/// - Any other error gives its own `Display` text.
///
/// Only the error itself is inspected, not its `source()` chain.
///
/// ```rust
/// use brrtrouter_runtime::validation::{extract_validation_error_message, FieldError, ValidationErrors};
///
/// let errors: ValidationErrors = [
///     FieldError::new("Name", "required"),
///     FieldError::new("Email", "email"),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(
///     extract_validation_error_message(Some(&errors), None),
///     "Field 'Name' failed validation with tag 'required'. Field 'Email' failed validation with tag 'email'. "
/// );
/// assert_eq!(extract_validation_error_message(None, Some("body")), "");
/// ```
#[must_use]
pub fn extract_validation_error_message(
    err: Option<&(dyn Error + 'static)>,
    field_name: Option<&str>,
) -> String {
    let Some(err) = err else {
        return String::new();
    };

    if let Some(errors) = err.downcast_ref::<ValidationErrors>() {
        return describe(errors, field_name);
    }
    if let Some(errors) = err.downcast_ref::<validator::ValidationErrors>() {
        return describe(&ValidationErrors::from(errors), field_name);
    }

    trace!("error carries no field failures, using its description");
    err.to_string()
}

/// [`extract_validation_error_message`] for callers holding an `anyhow::Error`.
///
/// The validation errors must be the error anyhow wraps directly; added
/// `context` hides them and the context message is returned instead.
#[must_use]
pub fn extract_anyhow_validation_message(
    err: Option<&anyhow::Error>,
    field_name: Option<&str>,
) -> String {
    let err = err.map(|e| {
        let inner: &(dyn Error + Send + Sync + 'static) = e.as_ref();
        inner as &(dyn Error + 'static)
    });
    extract_validation_error_message(err, field_name)
}

fn describe(errors: &ValidationErrors, field_name: Option<&str>) -> String {
    errors
        .iter()
        .map(|error: &FieldError| {
            format!(
                "Field '{}' failed validation with tag '{}'. ",
                field_name.unwrap_or(error.field()),
                error.tag()
            )
        })
        .collect()
}
