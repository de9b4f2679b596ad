use serde_json::Value;
use std::fmt;

/// The shape of a value seen by a validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Nothing could be resolved (failed lookup).
    Invalid,
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl Kind {
    /// The kind of a JSON value.
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Kind::Invalid => "invalid",
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        };
        write!(f, "{s}")
    }
}

/// Result of resolving a namespace such as `address.lines[0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldLookup<'v> {
    /// The resolved value; the deepest value reached when `found` is false.
    pub value: &'v Value,
    pub kind: Kind,
    /// Whether every segment of the namespace resolved.
    pub found: bool,
    /// Whether the resolved value is `null`.
    pub nullable: bool,
}

/// One field under validation, as seen by a custom rule.
///
/// Rules written against this trait do not name the validation engine that is
/// running them, so they keep compiling when the engine is upgraded or swapped.
/// Values are exposed as `serde_json::Value`, the same dynamic representation
/// handlers use for request bodies.
pub trait ValidationFieldLevel {
    /// The top-level value being validated.
    fn top(&self) -> &Value;

    /// The value containing the current field.
    fn parent(&self) -> &Value;

    /// The current field's value.
    fn field(&self) -> &Value;

    /// The field's name, with the serialized (tag) name taking precedence over
    /// the declared one.
    fn field_name(&self) -> &str;

    /// The field's declared name.
    fn struct_field_name(&self) -> &str;

    /// Parameter of the active rule, e.g. `5` in `max=5`. Empty when absent.
    fn param(&self) -> &str;

    /// Name of the active rule, e.g. `required`.
    fn tag(&self) -> &str;

    /// Resolve `field` to its underlying value and kind.
    ///
    /// Returns `(value, kind, nullable)`; `nullable` is true when the value is
    /// an absent optional (`null`).
    fn extract_type<'v>(&self, field: &'v Value) -> (&'v Value, Kind, bool);

    /// Resolve [`param`](Self::param) as a namespace relative to
    /// [`parent`](Self::parent).
    ///
    /// `found` is false when a segment is missing, for instance because a
    /// nested object on the path is `null`.
    fn struct_field_ok(&self) -> FieldLookup<'_>;

    /// Like [`struct_field_ok`](Self::struct_field_ok), starting from `value`
    /// with an explicit `namespace`.
    fn struct_field_ok_advanced<'v>(&self, value: &'v Value, namespace: &str) -> FieldLookup<'v>;
}

/// A custom validation rule: returns `true` when the field is valid.
pub type ValidationFunc = fn(&dyn ValidationFieldLevel) -> bool;
