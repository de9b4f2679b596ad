use std::fmt;
use validator::ValidationErrorsKind;

/// One failed rule on one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    field: String,
    struct_field: String,
    namespace: String,
    tag: String,
    param: String,
}

impl FieldError {
    /// A failure of rule `tag` on `field`. The namespace and declared name
    /// default to `field`.
    #[must_use]
    pub fn new(field: impl Into<String>, tag: impl Into<String>) -> Self {
        let field = field.into();
        Self {
            struct_field: field.clone(),
            namespace: field.clone(),
            field,
            tag: tag.into(),
            param: String::new(),
        }
    }

    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    #[must_use]
    pub fn with_struct_field(mut self, struct_field: impl Into<String>) -> Self {
        self.struct_field = struct_field.into();
        self
    }

    #[must_use]
    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.param = param.into();
        self
    }

    /// The reported field name (serialized name).
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The declared field name.
    #[must_use]
    pub fn struct_field(&self) -> &str {
        &self.struct_field
    }

    /// Full path from the validated value, e.g. `owner.pets[0].name`.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The rule that failed.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[must_use]
    pub fn param(&self) -> &str {
        &self.param
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Key: '{}' Error:Field validation for '{}' failed on the '{}' tag",
            self.namespace, self.field, self.tag
        )
    }
}

/// Field failures from one validation pass, in the order they were found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.errors.iter()
    }

    /// `Ok(())` when nothing failed.
    ///
    /// # Errors
    ///
    /// Returns `self` when at least one field failed.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl FromIterator<FieldError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Flatten the `validator` crate's error tree.
///
/// `validator` keeps fields in a hash map, so there is no encounter order to
/// preserve; fields are emitted sorted by name and list entries by index.
/// Nested failures keep the leaf name as `field` and carry the full path in
/// `namespace` (`owner.name`, `pets[1].name`).
impl From<&validator::ValidationErrors> for ValidationErrors {
    fn from(errors: &validator::ValidationErrors) -> Self {
        let mut flat = ValidationErrors::new();
        flatten(errors, "", &mut flat);
        flat
    }
}

impl From<validator::ValidationErrors> for ValidationErrors {
    fn from(errors: validator::ValidationErrors) -> Self {
        ValidationErrors::from(&errors)
    }
}

fn flatten(errors: &validator::ValidationErrors, prefix: &str, out: &mut ValidationErrors) {
    let mut fields: Vec<_> = errors.errors().iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    for (field, kind) in fields {
        let field = field.to_string();
        let namespace = if prefix.is_empty() {
            field.clone()
        } else {
            format!("{prefix}.{field}")
        };
        match kind {
            ValidationErrorsKind::Field(failures) => {
                for failure in failures {
                    out.push(
                        FieldError::new(field.as_str(), failure.code.to_string())
                            .with_namespace(namespace.as_str()),
                    );
                }
            }
            ValidationErrorsKind::Struct(inner) => flatten(inner, &namespace, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    flatten(inner, &format!("{namespace}[{index}]"), out);
                }
            }
        }
    }
}
