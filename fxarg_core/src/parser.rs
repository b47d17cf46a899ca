mod base;
mod result;

pub(crate) use self::base::*;
pub use self::result::*;

use crate::api::Schema;

/// Parse the command line `tokens` (excluding the program name) against a validated `schema`.
///
/// Tokens are consumed left to right and the first error wins.
/// On `--help`/`-h`, parsing stops and succeeds without checking the required fields.
/// The outcome of parsing against a schema that fails [`validate`](./fn.validate.html) is unspecified.
///
/// ### Example
/// ```
/// # use fxarg_core as fxarg;
/// use fxarg::{parse, FieldSpec, Schema, TypedSpec};
///
/// let schema = Schema::new("v1beta")
///     .add(FieldSpec::option("count").value(TypedSpec::<i64>::default().choices([4, 1, 6])));
///
/// let result = parse(&schema, &["--count", "4"]).unwrap();
/// assert!(result.get("count").unwrap().user_set);
///
/// let error = parse(&schema, &["--count", "905"]).unwrap_err();
/// assert_eq!(error.to_string(), "[argparse] Value '905' not expected.");
/// ```
pub fn parse<S: AsRef<str>>(schema: &Schema, tokens: &[S]) -> Result<ParseResult, ParseError> {
    Parser::new(schema).consume(tokens)
}
