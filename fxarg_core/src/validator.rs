//! Schema validation: every check returns its own messages, concatenated in a fixed order.
mod constraint;
mod field;

use thiserror::Error;

use crate::api::Schema;
use crate::constant::{HELP_NAME, HELP_SHORT, SUPPORTED_VERSION};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Every violation found in a schema, in check order.
///
/// Displays as the messages joined by a single space.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{}", .0.join(" "))]
pub struct ValidationError(pub(crate) Vec<String>);

impl ValidationError {
    /// The individual messages.
    pub fn messages(&self) -> &[String] {
        &self.0
    }
}

fn into_result(messages: Vec<String>) -> Result<(), ValidationError> {
    #[cfg(feature = "tracing_debug")]
    {
        debug!("Validation found {} violation(s).", messages.len());
    }

    if messages.is_empty() {
        Ok(())
    } else {
        Err(ValidationError(messages))
    }
}

/// The reserved long name, compared case-insensitively.
pub(crate) fn is_reserved_name(name: &str) -> bool {
    name.eq_ignore_ascii_case(HELP_NAME)
}

/// The reserved short name, compared case-insensitively.
pub(crate) fn is_reserved_short_name(short_name: &str) -> bool {
    let mut characters = short_name.chars();
    matches!(
        (characters.next(), characters.next()),
        (Some(single), None) if single.eq_ignore_ascii_case(&HELP_SHORT)
    )
}

fn check_version(version: &str) -> Vec<String> {
    if version == SUPPORTED_VERSION {
        Vec::default()
    } else {
        vec![format!(
            "Unsupported descriptor version \"{version}\", only {SUPPORTED_VERSION} is supported."
        )]
    }
}

fn check_command(schema: &Schema) -> Vec<String> {
    let mut messages = check_version(schema.get_version());

    if schema.get_synopsis().is_empty() {
        messages.push("Command synopsis cannot be empty.".to_string());
    }

    if schema.get_runtime().get_run().is_empty() {
        messages.push("Runtime run cannot be empty.".to_string());
    }

    messages
}

/// Check only the descriptor version, as for a workspace descriptor.
///
/// ### Example
/// ```
/// # use fxarg_core as fxarg;
/// use fxarg::validate_version;
///
/// assert!(validate_version("v1beta").is_ok());
/// assert_eq!(
///     validate_version("v2").unwrap_err().to_string(),
///     "Unsupported descriptor version \"v2\", only v1beta is supported."
/// );
/// ```
pub fn validate_version(version: &str) -> Result<(), ValidationError> {
    into_result(check_version(version))
}

/// Check every rule of the schema, collecting all violations rather than stopping at the first.
///
/// The messages are ordered: version, synopsis and runtime, each option, each argument,
/// then the list, required and uniqueness constraints across fields.
pub fn validate(schema: &Schema) -> Result<(), ValidationError> {
    let messages = check_command(schema)
        .into_iter()
        .chain(
            schema
                .options()
                .iter()
                .enumerate()
                .flat_map(|(index, option)| field::check_field(option, index)),
        )
        .chain(
            schema
                .arguments()
                .iter()
                .enumerate()
                .flat_map(|(index, argument)| field::check_field(argument, index)),
        )
        .chain(constraint::check_list(schema.arguments()))
        .chain(constraint::check_required(schema.arguments()))
        .chain(constraint::check_unique(
            schema.options(),
            schema.arguments(),
        ))
        .collect();

    into_result(messages)
}
