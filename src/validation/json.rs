use super::field_level::{FieldLookup, Kind, ValidationFieldLevel};
use serde_json::Value;

/// One step of a namespace: an object member name, or a bracketed selector
/// (`[0]` on arrays, `[key]` on objects).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'n> {
    Name(&'n str),
    Selector(&'n str),
}

impl<'n> Segment<'n> {
    fn text(self) -> &'n str {
        match self {
            Segment::Name(s) | Segment::Selector(s) => s,
        }
    }
}

/// Split `address.lines[0]` into `[Name(address), Name(lines), Selector(0)]`.
///
/// Returns `None` for malformed input: an empty group (`a..b`), an unclosed
/// bracket, or text following a bracket without a dot (`a[0]b`).
fn parse_namespace(namespace: &str) -> Option<Vec<Segment<'_>>> {
    let mut segments = Vec::new();
    if namespace.is_empty() {
        return Some(segments);
    }

    let mut rest = namespace;
    loop {
        let end = rest.find(|c: char| c == '.' || c == '[').unwrap_or(rest.len());
        let (name, tail) = rest.split_at(end);
        rest = tail;

        let group_start = segments.len();
        if !name.is_empty() {
            segments.push(Segment::Name(name));
        }
        while let Some(after_open) = rest.strip_prefix('[') {
            let close = after_open.find(']')?;
            segments.push(Segment::Selector(&after_open[..close]));
            rest = &after_open[close + 1..];
        }
        if segments.len() == group_start {
            return None;
        }

        if rest.is_empty() {
            return Some(segments);
        }
        rest = rest.strip_prefix('.')?;
    }
}

/// Name of the last segment: `name` in `owner.name`, `1` in `pets[1]`,
/// `app.kubernetes.io/name` in `labels[app.kubernetes.io/name]`.
pub(crate) fn leaf_name(namespace: &str) -> Option<&str> {
    parse_namespace(namespace)?.last().map(|segment| segment.text())
}

fn step<'v>(current: &'v Value, segment: Segment<'_>) -> Option<&'v Value> {
    match (segment, current) {
        (Segment::Name(key) | Segment::Selector(key), Value::Object(map)) => map.get(key),
        (Segment::Selector(index), Value::Array(items)) => {
            index.parse::<usize>().ok().and_then(|i| items.get(i))
        }
        _ => None,
    }
}

fn walk<'v>(start: &'v Value, segments: &[Segment<'_>]) -> Result<&'v Value, &'v Value> {
    let mut current = start;
    for segment in segments {
        current = step(current, *segment).ok_or(current)?;
    }
    Ok(current)
}

/// `null` is the only indirection JSON has: it resolves to itself, flagged
/// nullable. Every other value is already concrete.
pub(crate) fn extract_type(value: &Value) -> (&Value, Kind, bool) {
    match value {
        Value::Null => (value, Kind::Null, true),
        other => (other, Kind::of(other), false),
    }
}

/// Resolve `namespace` relative to `start`.
#[must_use]
pub fn lookup<'v>(start: &'v Value, namespace: &str) -> FieldLookup<'v> {
    let walked = parse_namespace(namespace).ok_or(start).and_then(|segments| walk(start, &segments));
    match walked {
        Ok(value) => {
            let (value, kind, nullable) = extract_type(value);
            FieldLookup {
                value,
                kind,
                found: true,
                nullable,
            }
        }
        Err(deepest) => FieldLookup {
            value: deepest,
            kind: Kind::Invalid,
            found: false,
            nullable: false,
        },
    }
}

/// Field context over a `serde_json::Value` document.
///
/// This is the adapter generated validation code hands to custom rules: the
/// document is the serialized request model, and the field is addressed by
/// its namespace within it.
///
/// ```rust
/// use brrtrouter_runtime::validation::{JsonFieldLevel, ValidationFieldLevel};
/// use serde_json::json;
///
/// let doc = json!({ "owner": { "name": "Ada", "pets": ["Rex"] } });
/// let fl = JsonFieldLevel::new(&doc, "owner.name", "required").unwrap();
/// assert_eq!(fl.field(), "Ada");
/// assert_eq!(fl.parent()["pets"][0], "Rex");
/// assert_eq!(fl.field_name(), "name");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct JsonFieldLevel<'a> {
    top: &'a Value,
    parent: &'a Value,
    field: &'a Value,
    field_name: &'a str,
    struct_field_name: &'a str,
    param: &'a str,
    tag: &'a str,
}

impl<'a> JsonFieldLevel<'a> {
    /// Address the field at `namespace` inside `top`, validated by rule `tag`.
    ///
    /// The field itself may be missing from its parent object; it is then
    /// presented as `null`, the way an omitted optional member deserializes.
    /// Returns `None` when the namespace is malformed or its parent cannot be
    /// resolved.
    #[must_use]
    pub fn new(top: &'a Value, namespace: &'a str, tag: &'a str) -> Option<Self> {
        static NULL: Value = Value::Null;

        let segments = parse_namespace(namespace)?;
        let (parent, field, name) = match segments.split_last() {
            None => (top, top, ""),
            Some((last, init)) => {
                let parent = walk(top, init).ok()?;
                let field = match (step(parent, *last), parent) {
                    (Some(value), _) => value,
                    (None, Value::Object(_)) => &NULL,
                    (None, _) => return None,
                };
                (parent, field, last.text())
            }
        };

        Some(Self {
            top,
            parent,
            field,
            field_name: name,
            struct_field_name: name,
            param: "",
            tag,
        })
    }

    /// Set the rule parameter (the `5` in `max=5`).
    #[must_use]
    pub fn with_param(mut self, param: &'a str) -> Self {
        self.param = param;
        self
    }

    /// Set the declared field name when it differs from the serialized one.
    #[must_use]
    pub fn with_struct_field_name(mut self, name: &'a str) -> Self {
        self.struct_field_name = name;
        self
    }
}

impl ValidationFieldLevel for JsonFieldLevel<'_> {
    fn top(&self) -> &Value {
        self.top
    }

    fn parent(&self) -> &Value {
        self.parent
    }

    fn field(&self) -> &Value {
        self.field
    }

    fn field_name(&self) -> &str {
        self.field_name
    }

    fn struct_field_name(&self) -> &str {
        self.struct_field_name
    }

    fn param(&self) -> &str {
        self.param
    }

    fn tag(&self) -> &str {
        self.tag
    }

    fn extract_type<'v>(&self, field: &'v Value) -> (&'v Value, Kind, bool) {
        extract_type(field)
    }

    fn struct_field_ok(&self) -> FieldLookup<'_> {
        lookup(self.parent, self.param)
    }

    fn struct_field_ok_advanced<'v>(&self, value: &'v Value, namespace: &str) -> FieldLookup<'v> {
        lookup(value, namespace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_namespace() {
        assert_eq!(parse_namespace(""), Some(vec![]));
        assert_eq!(
            parse_namespace("owner.pets[0].name"),
            Some(vec![
                Segment::Name("owner"),
                Segment::Name("pets"),
                Segment::Selector("0"),
                Segment::Name("name"),
            ])
        );
        assert_eq!(
            parse_namespace("labels[app.kubernetes.io/name]"),
            Some(vec![
                Segment::Name("labels"),
                Segment::Selector("app.kubernetes.io/name"),
            ])
        );
        assert_eq!(
            parse_namespace("[1][2]"),
            Some(vec![Segment::Selector("1"), Segment::Selector("2")])
        );
    }

    #[test]
    fn test_leaf_name() {
        assert_eq!(leaf_name("owner.name"), Some("name"));
        assert_eq!(leaf_name("pets[1]"), Some("1"));
        assert_eq!(
            leaf_name("labels[app.kubernetes.io/name]"),
            Some("app.kubernetes.io/name")
        );
        assert_eq!(leaf_name(""), None);
        assert_eq!(leaf_name("a..b"), None);
    }

    #[test]
    fn test_parse_namespace_malformed() {
        assert_eq!(parse_namespace("a..b"), None);
        assert_eq!(parse_namespace("a."), None);
        assert_eq!(parse_namespace(".a"), None);
        assert_eq!(parse_namespace("a[0"), None);
        assert_eq!(parse_namespace("a[0]b"), None);
    }
}
