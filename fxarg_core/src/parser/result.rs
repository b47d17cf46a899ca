use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::api::InvalidCapture;
use crate::constant::{ERROR_PREFIX, HELP_NAME};
use crate::matcher::MatchError;
use crate::model::{FieldValue, ScalarValue};

/// The first failure encountered while parsing the command line.
///
/// Displays with the `[argparse]` prefix; use [`ParseError::message`] for the bare message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{} {}", ERROR_PREFIX, .0)]
pub struct ParseError(pub(crate) String);

impl ParseError {
    /// The message, without the `[argparse]` prefix.
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl From<MatchError> for ParseError {
    fn from(error: MatchError) -> Self {
        match error {
            MatchError::Undercomplete(name) => ParseError(format!("Expected: --{name} <{name}>")),
            MatchError::Unrecognized(_) => ParseError(error.to_string()),
        }
    }
}

impl From<InvalidCapture> for ParseError {
    fn from(error: InvalidCapture) -> Self {
        ParseError(error.to_string())
    }
}

/// The value bound to one field, and whether the user supplied it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedValue {
    /// `true` when at least one value came from the command line.
    pub user_set: bool,
    /// The bound value; the configured default when `user_set` is `false`.
    pub value: FieldValue,
}

/// The outcome of a successful parse: one [`ParsedValue`] per field, plus `help`.
///
/// Serializes as a map of `{name: {user_set, value}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(transparent)]
pub struct ParseResult {
    values: BTreeMap<String, ParsedValue>,
}

impl ParseResult {
    pub(crate) fn insert(&mut self, name: impl Into<String>, value: ParsedValue) {
        self.values.insert(name.into(), value);
    }

    /// Get the parsed value of the field `name`.
    pub fn get(&self, name: &str) -> Option<&ParsedValue> {
        self.values.get(name)
    }

    /// Whether help was requested.
    /// When `true`, the remaining fields hold whatever was bound before the help flag.
    pub fn help(&self) -> bool {
        matches!(
            self.values.get(HELP_NAME).map(|parsed| &parsed.value),
            Some(FieldValue::Scalar(ScalarValue::Bool(true)))
        )
    }

    /// Iterate over the fields, in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParsedValue)> {
        self.values
            .iter()
            .map(|(name, parsed)| (name.as_str(), parsed))
    }

    /// The number of fields, including `help`.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no fields at all.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
