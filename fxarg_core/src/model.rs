use serde::Serialize;

/// The scalar type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// `true` or `false`.
    Bool,
    /// A signed 64 bit integer.
    Int64,
    /// A 64 bit floating point number.
    Double,
    /// Any text.
    String,
}

impl std::fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Whether a field binds a single value or a repeatable list of values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cardinality {
    /// Precisely one value.
    #[default]
    Scalar,
    /// Any number of values, accumulated in order.
    List,
}

/// Whether a field is matched by name (`--name`) or by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Matched via `--name` or `-s`.
    Option,
    /// Matched positionally, in declaration order.
    Argument,
}

impl Role {
    pub(crate) fn prefix(&self, index: usize) -> String {
        match self {
            Role::Option => format!("Option[index:{index}]"),
            Role::Argument => format!("Argument[index:{index}]"),
        }
    }
}

/// A single typed value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScalarValue {
    /// See [`ScalarKind::Bool`].
    Bool(bool),
    /// See [`ScalarKind::Int64`].
    Int64(i64),
    /// See [`ScalarKind::Double`].
    Double(f64),
    /// See [`ScalarKind::String`].
    String(String),
}

impl ScalarValue {
    /// The kind of this value.
    pub fn kind(&self) -> ScalarKind {
        match self {
            ScalarValue::Bool(_) => ScalarKind::Bool,
            ScalarValue::Int64(_) => ScalarKind::Int64,
            ScalarValue::Double(_) => ScalarKind::Double,
            ScalarValue::String(_) => ScalarKind::String,
        }
    }
}

impl std::fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScalarValue::Bool(value) => write!(f, "{value}"),
            ScalarValue::Int64(value) => write!(f, "{value}"),
            ScalarValue::Double(value) => write!(f, "{value}"),
            ScalarValue::String(value) => write!(f, "{value}"),
        }
    }
}

/// The value bound to a field: a single scalar, or a list of them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// The value of a [`Cardinality::Scalar`] field.
    Scalar(ScalarValue),
    /// The values of a [`Cardinality::List`] field.
    List(Vec<ScalarValue>),
}

impl FieldValue {
    /// Get the scalar, if this is a [`FieldValue::Scalar`].
    pub fn as_scalar(&self) -> Option<&ScalarValue> {
        match self {
            FieldValue::Scalar(value) => Some(value),
            FieldValue::List(_) => None,
        }
    }

    /// Get the list, if this is a [`FieldValue::List`].
    pub fn as_list(&self) -> Option<&[ScalarValue]> {
        match self {
            FieldValue::Scalar(_) => None,
            FieldValue::List(values) => Some(values),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ScalarValue::Bool(true), "true")]
    #[case(ScalarValue::Int64(-905), "-905")]
    #[case(ScalarValue::Double(4.1), "4.1")]
    #[case(ScalarValue::Double(6.0), "6")]
    #[case(ScalarValue::String("hello world".to_string()), "hello world")]
    fn scalar_display(#[case] value: ScalarValue, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[test]
    fn field_value_serialize() {
        let scalar = FieldValue::Scalar(ScalarValue::Int64(416));
        let list = FieldValue::List(vec![
            ScalarValue::String("a".to_string()),
            ScalarValue::String("b".to_string()),
        ]);

        assert_eq!(serde_json::to_value(&scalar).unwrap(), serde_json::json!(416));
        assert_eq!(serde_json::to_value(&list).unwrap(), serde_json::json!(["a", "b"]));
    }

    #[test]
    fn role_prefix() {
        assert_eq!(Role::Option.prefix(3), "Option[index:3]");
        assert_eq!(Role::Argument.prefix(0), "Argument[index:0]");
    }
}
