use crate::model::{Cardinality, FieldValue, ScalarKind};
use crate::prelude::Scalar;

/// The configured default of a field.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue<T> {
    /// A single value.
    /// For a [`Cardinality::List`] field, this becomes the one-element initial list.
    Single(T),
    /// An explicit initial list, for [`Cardinality::List`] fields only.
    List(Vec<T>),
}

/// The value configuration of a field, for one scalar type `T`.
///
/// ### Example
/// ```
/// # use fxarg_core as fxarg;
/// use fxarg::{Cardinality, TypedSpec};
///
/// let spec = TypedSpec::<i64>::default()
///     .choices([4, 1, 6])
///     .default_value(4)
///     .list();
///
/// assert_eq!(spec.get_choices(), &[4, 1, 6]);
/// assert_eq!(spec.cardinality(), Cardinality::List);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TypedSpec<T> {
    choices: Vec<T>,
    default: Option<DefaultValue<T>>,
    required: bool,
    cardinality: Cardinality,
}

impl<T> Default for TypedSpec<T> {
    fn default() -> Self {
        Self {
            choices: Vec::default(),
            default: None,
            required: false,
            cardinality: Cardinality::Scalar,
        }
    }
}

impl<T: Scalar> TypedSpec<T> {
    /// Constrain the values this field accepts.
    /// An empty set of choices leaves the field unconstrained.
    pub fn choices(mut self, choices: impl IntoIterator<Item = T>) -> Self {
        self.choices = choices.into_iter().collect();
        self
    }

    /// Set the default value.
    /// If repeated, only the final default will apply.
    pub fn default_value(mut self, value: T) -> Self {
        self.default.replace(DefaultValue::Single(value));
        self
    }

    /// Set an explicit initial list; this also makes the field a list.
    pub fn default_list(mut self, values: impl IntoIterator<Item = T>) -> Self {
        self.default
            .replace(DefaultValue::List(values.into_iter().collect()));
        self.cardinality = Cardinality::List;
        self
    }

    /// Require the user to specify this field (at least once, for lists).
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Make the field repeatable.
    pub fn list(mut self) -> Self {
        self.cardinality = Cardinality::List;
        self
    }

    /// The allowed values; empty when unconstrained.
    pub fn get_choices(&self) -> &[T] {
        &self.choices
    }

    /// The explicitly configured default, if any.
    pub fn get_default(&self) -> Option<&DefaultValue<T>> {
        self.default.as_ref()
    }

    /// Whether the user must specify this field.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Whether this field binds one value or a list.
    pub fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    /// The scalar bound when the user does not specify a scalar field.
    pub(crate) fn initial_scalar(&self) -> T {
        match &self.default {
            Some(DefaultValue::Single(value)) => value.clone(),
            Some(DefaultValue::List(values)) => values.first().cloned().unwrap_or_else(T::zero),
            None => T::zero(),
        }
    }

    /// The list bound when the user does not specify a list field.
    pub(crate) fn initial_list(&self) -> Vec<T> {
        match &self.default {
            Some(DefaultValue::Single(value)) => vec![value.clone()],
            Some(DefaultValue::List(values)) => values.clone(),
            None => vec![T::zero()],
        }
    }

    /// Every default value the choices must admit.
    pub(crate) fn initial_values(&self) -> Vec<T> {
        match self.cardinality {
            Cardinality::Scalar => vec![self.initial_scalar()],
            Cardinality::List => self.initial_list(),
        }
    }

    /// The effective default, type erased.
    pub fn initial(&self) -> FieldValue {
        match self.cardinality {
            Cardinality::Scalar => FieldValue::Scalar(self.initial_scalar().into_scalar()),
            Cardinality::List => FieldValue::List(
                self.initial_list()
                    .into_iter()
                    .map(Scalar::into_scalar)
                    .collect(),
            ),
        }
    }
}

/// The value configuration of a field: one [`TypedSpec`] per [`ScalarKind`].
#[derive(Debug, Clone, PartialEq)]
pub enum ValueSpec {
    /// A `bool` field; as an option, it is a flag taking no value token.
    Bool(TypedSpec<bool>),
    /// An `i64` field.
    Int64(TypedSpec<i64>),
    /// An `f64` field.
    Double(TypedSpec<f64>),
    /// A `String` field.
    String(TypedSpec<String>),
}

impl ValueSpec {
    /// The scalar kind of the field.
    pub fn kind(&self) -> ScalarKind {
        match self {
            ValueSpec::Bool(_) => ScalarKind::Bool,
            ValueSpec::Int64(_) => ScalarKind::Int64,
            ValueSpec::Double(_) => ScalarKind::Double,
            ValueSpec::String(_) => ScalarKind::String,
        }
    }

    /// Whether the user must specify the field.
    pub fn is_required(&self) -> bool {
        match self {
            ValueSpec::Bool(spec) => spec.is_required(),
            ValueSpec::Int64(spec) => spec.is_required(),
            ValueSpec::Double(spec) => spec.is_required(),
            ValueSpec::String(spec) => spec.is_required(),
        }
    }

    /// Whether the field binds one value or a list.
    pub fn cardinality(&self) -> Cardinality {
        match self {
            ValueSpec::Bool(spec) => spec.cardinality(),
            ValueSpec::Int64(spec) => spec.cardinality(),
            ValueSpec::Double(spec) => spec.cardinality(),
            ValueSpec::String(spec) => spec.cardinality(),
        }
    }

    /// The effective default of the field.
    pub fn initial(&self) -> FieldValue {
        match self {
            ValueSpec::Bool(spec) => spec.initial(),
            ValueSpec::Int64(spec) => spec.initial(),
            ValueSpec::Double(spec) => spec.initial(),
            ValueSpec::String(spec) => spec.initial(),
        }
    }
}

macro_rules! value_spec_from {
    ($type:ty, $variant:ident) => {
        impl From<TypedSpec<$type>> for ValueSpec {
            fn from(value: TypedSpec<$type>) -> Self {
                ValueSpec::$variant(value)
            }
        }
    };
}

value_spec_from!(bool, Bool);
value_spec_from!(i64, Int64);
value_spec_from!(f64, Double);
value_spec_from!(String, String);
