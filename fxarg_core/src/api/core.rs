use crate::api::FieldSpec;
use crate::model::Role;
use crate::parser::{self, ParseError, ParseResult};
use crate::validator::{self, ValidationError};

/// The runtime section of a command schema.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Runtime {
    run: String,
}

impl Runtime {
    /// Create a runtime from the command it runs.
    pub fn new(run: impl Into<String>) -> Self {
        Self { run: run.into() }
    }

    /// The command to run.
    pub fn get_run(&self) -> &str {
        &self.run
    }
}

/// The description of a command's interface: its options, positional arguments and metadata.
///
/// ### Example
/// ```
/// # use fxarg_core as fxarg;
/// use fxarg::{FieldSpec, Schema, TypedSpec};
///
/// let schema = Schema::new("v1beta")
///     .synopsis("Count the lines of a file.")
///     .run("wc -l")
///     .add(FieldSpec::option("verbose")
///         .description("Print more details.")
///         .value(TypedSpec::<bool>::default()))
///     .add(FieldSpec::argument("file")
///         .description("The file to count.")
///         .value(TypedSpec::<String>::default().required()));
/// schema.validate().unwrap();
///
/// let result = schema.parse(&["--verbose", "notes.txt"]).unwrap();
/// assert!(result.get("verbose").unwrap().user_set);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Schema {
    version: String,
    synopsis: String,
    description: String,
    runtime: Runtime,
    options: Vec<FieldSpec>,
    arguments: Vec<FieldSpec>,
}

impl Schema {
    /// Create a schema for the descriptor `version`.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            ..Self::default()
        }
    }

    /// Document the command in one line.
    /// If repeated, only the final synopsis will apply.
    pub fn synopsis(mut self, synopsis: impl Into<String>) -> Self {
        self.synopsis = synopsis.into();
        self
    }

    /// Document the command in full sentence/paragraph format.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the command this schema runs.
    pub fn run(mut self, run: impl Into<String>) -> Self {
        self.runtime = Runtime::new(run);
        self
    }

    /// Add an option/argument to the schema.
    ///
    /// The order of arguments corresponds to their positional order during parsing.
    /// The order of options only affects the order of validation messages.
    pub fn add(mut self, field: FieldSpec) -> Self {
        match field.role() {
            Role::Option => self.options.push(field),
            Role::Argument => self.arguments.push(field),
        }

        self
    }

    /// The descriptor version.
    pub fn get_version(&self) -> &str {
        &self.version
    }

    /// The one line documentation.
    pub fn get_synopsis(&self) -> &str {
        &self.synopsis
    }

    /// The full documentation.
    pub fn get_description(&self) -> &str {
        &self.description
    }

    /// The runtime section.
    pub fn get_runtime(&self) -> &Runtime {
        &self.runtime
    }

    /// The options, in declaration order.
    pub fn options(&self) -> &[FieldSpec] {
        &self.options
    }

    /// The positional arguments, in declaration order.
    pub fn arguments(&self) -> &[FieldSpec] {
        &self.arguments
    }

    /// Check every rule of the schema, collecting all violations.
    /// See [`validate`](./fn.validate.html).
    pub fn validate(&self) -> Result<(), ValidationError> {
        validator::validate(self)
    }

    /// Parse the command line `tokens` (excluding the program name) against this schema.
    /// See [`parse`](./fn.parse.html).
    pub fn parse<S: AsRef<str>>(&self, tokens: &[S]) -> Result<ParseResult, ParseError> {
        parser::parse(self, tokens)
    }
}
