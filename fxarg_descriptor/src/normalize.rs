use serde_json::{Map, Number, Value};
use thiserror::Error;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A node of a generic, config-file-like document.
///
/// Scalars are untyped text; [`normalize`] decides their type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An absent node.
    Undefined,
    /// An explicitly empty node.
    Null,
    /// A textual leaf.
    Scalar(String),
    /// An ordered list of nodes.
    Sequence(Vec<Node>),
    /// Ordered key/node pairs.
    Map(Vec<(String, Node)>),
}

impl Node {
    /// Create a scalar node.
    pub fn scalar(text: impl Into<String>) -> Self {
        Node::Scalar(text.into())
    }

    /// Create a sequence node.
    pub fn sequence(nodes: impl IntoIterator<Item = Node>) -> Self {
        Node::Sequence(nodes.into_iter().collect())
    }

    /// Create a map node.
    pub fn map<K: Into<String>>(pairs: impl IntoIterator<Item = (K, Node)>) -> Self {
        Node::Map(
            pairs
                .into_iter()
                .map(|(key, node)| (key.into(), node))
                .collect(),
        )
    }

    fn kind(&self) -> NodeKind {
        match self {
            Node::Undefined => NodeKind::Undefined,
            Node::Null => NodeKind::Empty,
            Node::Scalar(_) => NodeKind::Scalar,
            Node::Sequence(_) => NodeKind::Sequence,
            Node::Map(_) => NodeKind::Map,
        }
    }
}

/// The kind of a [`Node`], as named in normalization errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// See [`Node::Undefined`].
    Undefined,
    /// See [`Node::Null`].
    Empty,
    /// See [`Node::Scalar`].
    Scalar,
    /// See [`Node::Sequence`].
    Sequence,
    /// See [`Node::Map`].
    Map,
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            NodeKind::Undefined => "undefined",
            NodeKind::Empty => "empty",
            NodeKind::Scalar => "scalar",
            NodeKind::Sequence => "sequence",
            NodeKind::Map => "map",
        };
        write!(f, "{name}")
    }
}

/// The document root is neither a map nor a sequence.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("The root YAML type is: {0}. The root YAML object must be a map or an array.")]
pub struct NormalizeError(pub NodeKind);

/// Convert a node tree into a typed value tree.
///
/// Each scalar becomes the first of bool, integer, double and string its text parses as,
/// so `0.0` becomes the integer `0`.
/// Null and undefined children are dropped.
///
/// ### Example
/// ```
/// use fxarg_descriptor::{normalize, Node};
/// use serde_json::json;
///
/// let node = Node::map([
///     ("list", Node::scalar("yes")),
///     ("default", Node::scalar("0.0")),
///     ("choices", Node::sequence([Node::scalar("1.5"), Node::scalar("a")])),
/// ]);
///
/// assert_eq!(
///     normalize(&node).unwrap(),
///     json!({"list": true, "default": 0, "choices": [1.5, "a"]})
/// );
/// ```
pub fn normalize(node: &Node) -> Result<Value, NormalizeError> {
    #[cfg(feature = "tracing_debug")]
    {
        debug!("Normalizing a root of kind '{}'.", node.kind());
    }

    match node {
        Node::Map(_) | Node::Sequence(_) => Ok(convert(node).unwrap_or(Value::Null)),
        _ => Err(NormalizeError(node.kind())),
    }
}

fn convert(node: &Node) -> Option<Value> {
    match node {
        Node::Undefined | Node::Null => None,
        Node::Scalar(text) => Some(scalar(text)),
        Node::Sequence(nodes) => Some(Value::Array(nodes.iter().filter_map(convert).collect())),
        Node::Map(pairs) => {
            let mut map = Map::default();

            for (key, node) in pairs {
                if let Some(value) = convert(node) {
                    map.insert(key.clone(), value);
                }
            }

            Some(Value::Object(map))
        }
    }
}

fn scalar(text: &str) -> Value {
    if let Some(value) = parse_bool(text) {
        Value::Bool(value)
    } else if let Some(value) = parse_int(text) {
        Value::Number(value.into())
    } else if let Some(value) = parse_double(text) {
        // JSON cannot hold the non-finite doubles.
        Number::from_f64(value)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    } else {
        Value::String(text.to_string())
    }
}

fn parse_bool(text: &str) -> Option<bool> {
    match text {
        "y" | "Y" | "yes" | "Yes" | "YES" | "true" | "True" | "TRUE" | "on" | "On" | "ON" => {
            Some(true)
        }
        "n" | "N" | "no" | "No" | "NO" | "false" | "False" | "FALSE" | "off" | "Off" | "OFF" => {
            Some(false)
        }
        _ => None,
    }
}

fn parse_int(text: &str) -> Option<i64> {
    if let Some(hex) = text.strip_prefix("0x") {
        if hex.starts_with(['+', '-']) {
            return None;
        }
        return i64::from_str_radix(hex, 16).ok();
    }

    // An integral value written with a zero fraction, such as 0.0, is still an integer.
    let whole = match text.split_once('.') {
        Some((whole, fraction))
            if !fraction.is_empty() && fraction.chars().all(|c| c == '0') =>
        {
            whole
        }
        Some(_) => return None,
        None => text,
    };

    whole.parse::<i64>().ok()
}

fn parse_double(text: &str) -> Option<f64> {
    match text {
        ".inf" | ".Inf" | ".INF" | "+.inf" | "+.Inf" | "+.INF" => return Some(f64::INFINITY),
        "-.inf" | "-.Inf" | "-.INF" => return Some(f64::NEG_INFINITY),
        ".nan" | ".NaN" | ".NAN" => return Some(f64::NAN),
        _ => {}
    }

    // Rust also reads "inf" and "NaN", which are strings here.
    if text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        text.parse::<f64>().ok()
    } else {
        None
    }
}
