//! Traits which, typically, may be imported without concern: `use fxarg_core::prelude::*`.
use crate::model::{ScalarKind, ScalarValue};

/// Behaviour of the scalar types a field may hold: `bool`, `i64`, `f64` and `String`.
// Needs to be imported in order to build typed specs generically.
pub trait Scalar: Clone + PartialEq + std::fmt::Display + std::fmt::Debug {
    /// The kind tag of this type.
    const KIND: ScalarKind;

    /// The value bound when the schema does not configure a default.
    fn zero() -> Self;

    /// Convert a command line token into this type, if it is a valid literal.
    fn convert(token: &str) -> Option<Self>;

    /// The value bound by the mere presence of an option flag.
    /// Only `bool` options are flags; every other type must be followed by a value token.
    fn flag() -> Option<Self> {
        None
    }

    /// Erase the type into a [`ScalarValue`].
    fn into_scalar(self) -> ScalarValue;
}
