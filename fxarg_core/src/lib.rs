//! Core of `fxarg`: command schemas, their validation, and command line parsing.
//! See [documentation root](https://docs.rs/fxarg/latest/fxarg/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod matcher;
mod model;
mod parser;
#[allow(missing_docs)]
pub mod prelude;
mod validator;

pub use api::*;
pub use model::*;
pub use parser::{parse, ParseError, ParseResult, ParsedValue};
pub use validator::{validate, validate_version, ValidationError};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
