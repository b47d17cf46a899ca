use crate::api::ValueSpec;
use crate::matcher::{ArgumentConfig, Bound, OptionConfig};
use crate::model::{Cardinality, Role};

/// A named field of the command line: either an option or a positional argument.
///
/// ### Example
/// ```
/// # use fxarg_core as fxarg;
/// use fxarg::{FieldSpec, Role, TypedSpec};
///
/// let option = FieldSpec::option("verbose")
///     .short_name("v")
///     .description("Print more details.")
///     .value(TypedSpec::<bool>::default());
/// assert_eq!(option.role(), Role::Option);
///
/// let argument = FieldSpec::argument("files")
///     .description("The files to process.")
///     .value(TypedSpec::<String>::default().list().required());
/// assert_eq!(argument.get_name(), "files");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    role: Role,
    name: String,
    short_name: Option<String>,
    description: String,
    value: Option<ValueSpec>,
}

impl FieldSpec {
    fn new(role: Role, name: impl Into<String>) -> Self {
        Self {
            role,
            name: name.into(),
            short_name: None,
            description: String::default(),
            value: None,
        }
    }

    /// Create an option field, matched by `--name` (or `-s` for its short name).
    pub fn option(name: impl Into<String>) -> Self {
        Self::new(Role::Option, name)
    }

    /// Create a positional argument field, matched in declaration order.
    pub fn argument(name: impl Into<String>) -> Self {
        Self::new(Role::Argument, name)
    }

    /// Set the short name of an option.
    /// Arguments have no short form; for them, the short name is ignored.
    pub fn short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name.replace(short_name.into());
        self
    }

    /// Document the field.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the value configuration of the field.
    pub fn value(mut self, value: impl Into<ValueSpec>) -> Self {
        self.value.replace(value.into());
        self
    }

    /// Whether this is an option or an argument.
    pub fn role(&self) -> Role {
        self.role
    }

    /// The long name of the field.
    pub fn get_name(&self) -> &str {
        &self.name
    }

    /// The short name; the empty string counts as no short name.
    pub fn get_short_name(&self) -> Option<&str> {
        self.short_name
            .as_deref()
            .filter(|short_name| !short_name.is_empty())
    }

    /// The documentation of the field.
    pub fn get_description(&self) -> &str {
        &self.description
    }

    /// The value configuration, absent only in a schema that fails validation.
    pub fn get_value(&self) -> Option<&ValueSpec> {
        self.value.as_ref()
    }

    fn cardinality(&self) -> Cardinality {
        self.value
            .as_ref()
            .map(ValueSpec::cardinality)
            .unwrap_or_default()
    }
}

impl From<&FieldSpec> for OptionConfig {
    fn from(value: &FieldSpec) -> Self {
        let bound = match &value.value {
            Some(ValueSpec::Bool(_)) => Bound::Range(0, 0),
            _ => Bound::Range(1, 1),
        };
        OptionConfig::new(
            value.name.clone(),
            value
                .get_short_name()
                .and_then(|short_name| short_name.chars().next()),
            bound,
            value.cardinality() == Cardinality::List,
        )
    }
}

impl From<&FieldSpec> for ArgumentConfig {
    fn from(value: &FieldSpec) -> Self {
        let bound = match value.cardinality() {
            Cardinality::Scalar => Bound::Range(1, 1),
            Cardinality::List => Bound::Lower(0),
        };
        ArgumentConfig::new(value.name.clone(), bound)
    }
}
