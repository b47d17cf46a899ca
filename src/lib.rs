//! `fxarg` is a schema-driven command line argument compiler.
//!
//! A command describes its interface declaratively, as a [`Schema`] of *options* (`--name value`, `-n value`)
//! and positional *arguments*, each with a scalar type, an optional default, optional choices,
//! and required/list flags.
//! `fxarg` then:
//! * *Validates the schema*:
//! every structural mistake and every source of parsing ambiguity is reported together (see [`validate`]).
//! * *Binds the command line*:
//! argv is parsed against the schema into one typed value per field (see [`parse`]),
//! recording whether each value came from the user or from the schema's default.
//! * *Loads descriptors*:
//! a generic document tree (ex: parsed from a YAML file) is normalized into typed values and mapped into a schema
//! (see [`descriptor`]).
//!
//! # Usage
//! ```
//! use fxarg::{FieldSpec, Schema, TypedSpec};
//!
//! let schema = Schema::new("v1beta")
//!     .synopsis("Sum some numbers.")
//!     .run("summer")
//!     .add(FieldSpec::option("verbose")
//!         .short_name("v")
//!         .description("Print each step.")
//!         .value(TypedSpec::<bool>::default()))
//!     .add(FieldSpec::option("precision")
//!         .description("The digits to print.")
//!         .value(TypedSpec::<i64>::default().choices([0, 2, 4]).default_value(2)))
//!     .add(FieldSpec::argument("items")
//!         .description("The items to sum.")
//!         .value(TypedSpec::<f64>::default().list().required()));
//! schema.validate().unwrap();
//!
//! let result = schema.parse(&["1", "-v", "2.5", "-3"]).unwrap();
//! assert!(!result.help());
//! assert!(result.get("verbose").unwrap().user_set);
//! assert!(!result.get("precision").unwrap().user_set);
//! ```
//!
//! Parse failures carry a single message, the first encountered:
//! ```
//! # use fxarg::{FieldSpec, Schema, TypedSpec};
//! let schema = Schema::new("v1beta")
//!     .add(FieldSpec::option("precision").value(TypedSpec::<i64>::default().choices([0, 2, 4])));
//!
//! let error = schema.parse(&["--precision", "3"]).unwrap_err();
//! assert_eq!(error.to_string(), "[argparse] Value '3' not expected.");
//! ```
//!
//! # Fields
//! There are two roles of fields: [`FieldSpec::option`] and [`FieldSpec::argument`].
//!
//! Options may appear in any order, and may be interleaved with arguments.
//! A `bool` option is a flag: its presence alone binds `true`.
//! Every other option consumes the next token as its value (whatever that token looks like), or takes it inline via `--name=value`.
//! A non-list option may appear at most once.
//!
//! Arguments bind in declaration order, one token each.
//! Only the last argument may be a list, in which case it collects all remaining positional tokens.
//! Tokens that look like negative numbers (ex: `-3`) are positional.
//!
//! A list field starts from its default list; the first user value replaces the default rather than extending it.
//!
//! # Help
//! `--help` and `-h` are always registered.
//! When encountered, parsing stops and succeeds: [`ParseResult::help`] is `true`, and required fields are not checked.
//! The `help` entry itself always reports `user_set: false`.
//!
//! # Serialization
//! A [`ParseResult`] serializes (via `serde`) as a map of `{name: {"user_set": bool, "value": ...}}`,
//! suitable for handing to the command being run.
pub mod descriptor;
pub use fxarg_core::*;
