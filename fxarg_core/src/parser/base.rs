use std::collections::{HashMap, VecDeque};

use crate::api::{admit, capture, FieldSpec, InvalidCapture, Schema, TypedSpec, ValueSpec};
use crate::constant::*;
use crate::matcher::*;
use crate::model::{Cardinality, FieldValue, Role, ScalarValue};
use crate::parser::{ParseError, ParseResult, ParsedValue};
use crate::prelude::Scalar;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Behaviour to capture an implicit generic type T from an input `&str`.
///
/// We use this at the top of the parser so that fields of different types may all be bound in a
/// single pass.
pub(crate) trait AnonymousCapturable {
    /// Declare that the field has been matched without a value (a flag).
    fn matched(&mut self) -> Result<(), InvalidCapture>;

    /// Capture a value anonymously for this field.
    fn capture(&mut self, value: &str) -> Result<(), InvalidCapture>;

    /// Whether the user has bound at least one value.
    fn is_user_set(&self) -> bool;

    /// Snapshot the binding.
    fn parsed(&self) -> ParsedValue;
}

#[derive(Debug)]
enum Slot<T> {
    Scalar(T),
    List(Vec<T>),
}

/// The binding of one field, starting from its effective default.
pub(crate) struct Binding<'s, T> {
    spec: &'s TypedSpec<T>,
    user_set: bool,
    slot: Slot<T>,
}

impl<'s, T: Scalar> Binding<'s, T> {
    pub(crate) fn new(spec: &'s TypedSpec<T>) -> Self {
        let slot = match spec.cardinality() {
            Cardinality::Scalar => Slot::Scalar(spec.initial_scalar()),
            Cardinality::List => Slot::List(spec.initial_list()),
        };

        Self {
            spec,
            user_set: false,
            slot,
        }
    }

    fn bind(&mut self, value: T) {
        match &mut self.slot {
            Slot::Scalar(current) => *current = value,
            Slot::List(current) => {
                // The first user value replaces the defaults, rather than extending them.
                if !self.user_set {
                    current.clear();
                }

                current.push(value);
            }
        }

        self.user_set = true;
    }
}

impl<'s, T: Scalar> AnonymousCapturable for Binding<'s, T> {
    fn matched(&mut self) -> Result<(), InvalidCapture> {
        match T::flag() {
            Some(value) => {
                let token = value.to_string();
                let value = admit(self.spec, value, &token)?;
                self.bind(value);
            }
            None => {
                // Do nothing
            }
        }

        Ok(())
    }

    fn capture(&mut self, value: &str) -> Result<(), InvalidCapture> {
        let value = capture(self.spec, value)?;
        self.bind(value);
        Ok(())
    }

    fn is_user_set(&self) -> bool {
        self.user_set
    }

    fn parsed(&self) -> ParsedValue {
        let value = match &self.slot {
            Slot::Scalar(value) => FieldValue::Scalar(value.clone().into_scalar()),
            Slot::List(values) => FieldValue::List(
                values
                    .iter()
                    .cloned()
                    .map(Scalar::into_scalar)
                    .collect(),
            ),
        };

        ParsedValue {
            user_set: self.user_set,
            value,
        }
    }
}

fn bind<'s>(value: &'s ValueSpec) -> Box<dyn AnonymousCapturable + 's> {
    match value {
        ValueSpec::Bool(spec) => Box::new(Binding::new(spec)),
        ValueSpec::Int64(spec) => Box::new(Binding::new(spec)),
        ValueSpec::Double(spec) => Box::new(Binding::new(spec)),
        ValueSpec::String(spec) => Box::new(Binding::new(spec)),
    }
}

/// The hint for a required field the user did not specify.
fn expected(field: &FieldSpec) -> ParseError {
    let name = field.get_name();
    let message = match (field.role(), field.get_value()) {
        (Role::Option, _) => format!("Expected: --{name} <{name}>"),
        (Role::Argument, Some(value)) if value.cardinality() == Cardinality::List => {
            format!("Expected: <{name}> [<{name}>...]")
        }
        (Role::Argument, _) => format!("Expected: <{name}>"),
    };
    ParseError(message)
}

pub(crate) struct Parser<'s> {
    token_matcher: TokenMatcher,
    captures: HashMap<String, Box<dyn AnonymousCapturable + 's>>,
    required: Vec<&'s FieldSpec>,
}

impl<'s> std::fmt::Debug for Parser<'s> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser{..}").finish()
    }
}

impl<'s> Parser<'s> {
    pub(crate) fn new(schema: &'s Schema) -> Self {
        let help_config = OptionConfig::new(HELP_NAME, Some(HELP_SHORT), Bound::Range(0, 0), true);
        let mut option_configs = vec![help_config];
        let mut argument_configs = VecDeque::default();
        let mut captures: HashMap<String, Box<dyn AnonymousCapturable + 's>> =
            HashMap::default();
        let mut required = Vec::default();

        // Options first, so that their required checks precede the arguments'.
        for field in schema.options().iter().chain(schema.arguments()) {
            // Only an invalid schema has a field without a value; it cannot be bound.
            let value = match field.get_value() {
                Some(value) => value,
                None => continue,
            };

            match field.role() {
                Role::Option => option_configs.push(OptionConfig::from(field)),
                Role::Argument => argument_configs.push_back(ArgumentConfig::from(field)),
            }

            if value.is_required() {
                required.push(field);
            }

            captures
                .entry(field.get_name().to_string())
                .or_insert_with(|| bind(value));
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Registered {} option(s) (including help) and {} argument slot(s).",
                option_configs.len(),
                argument_configs.len()
            );
        }

        Self {
            token_matcher: TokenMatcher::new(option_configs, argument_configs),
            captures,
            required,
        }
    }

    pub(crate) fn consume<S: AsRef<str>>(self, tokens: &[S]) -> Result<ParseResult, ParseError> {
        let Parser {
            mut token_matcher,
            mut captures,
            required,
        } = self;

        // 1. Feed the raw tokens to the matcher, binding each match as soon as it completes.
        for token in tokens {
            let token = token.as_ref();

            if let Some(match_tokens) = token_matcher.feed(token)? {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Matched '{token}' to '{}'.", match_tokens.name);
                }

                if match_tokens.name == HELP_NAME {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Help requested by '{token}'; skipping the remaining tokens.");
                    }

                    return Ok(assemble(&captures, true));
                }

                if let Some(box_capture) = captures.get_mut(&match_tokens.name) {
                    match &match_tokens.values[..] {
                        [] => box_capture.matched()?,
                        values => {
                            for value in values {
                                box_capture.capture(value)?;
                            }
                        }
                    };
                }
            }
        }

        // 2. A value taking option must not be left dangling.
        token_matcher.close()?;

        // 3. Check the required fields, options first then arguments.
        for field in required {
            let user_set = captures
                .get(field.get_name())
                .map(|box_capture| box_capture.is_user_set())
                .unwrap_or(false);

            if !user_set {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Required field '{}' was not specified.", field.get_name());
                }

                return Err(expected(field));
            }
        }

        Ok(assemble(&captures, false))
    }
}

fn assemble(
    captures: &HashMap<String, Box<dyn AnonymousCapturable + '_>>,
    help: bool,
) -> ParseResult {
    let mut result = ParseResult::default();

    for (name, box_capture) in captures {
        result.insert(name.clone(), box_capture.parsed());
    }

    // Help never reports itself as user set.
    result.insert(
        HELP_NAME,
        ParsedValue {
            user_set: false,
            value: FieldValue::Scalar(ScalarValue::Bool(help)),
        },
    );
    result
}
