use serde::Deserialize;
use serde_json::Value;

use fxarg_core::prelude::Scalar;
use fxarg_core::{FieldSpec, Schema, TypedSpec, ValueSpec};

use crate::DescriptorError;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawCommand {
    #[serde(alias = "descriptorVersion")]
    descriptor_version: String,
    synopsis: String,
    description: String,
    options: Vec<RawOption>,
    arguments: Vec<RawArgument>,
    runtime: RawRuntime,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawRuntime {
    run: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawOption {
    name: String,
    #[serde(alias = "shortName")]
    short_name: String,
    description: String,
    #[serde(alias = "boolValue")]
    bool_value: Option<RawValue<bool>>,
    #[serde(alias = "intValue")]
    int_value: Option<RawValue<i64>>,
    #[serde(alias = "doubleValue")]
    double_value: Option<RawValue<f64>>,
    #[serde(alias = "stringValue")]
    string_value: Option<RawValue<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawArgument {
    name: String,
    description: String,
    #[serde(alias = "boolValue")]
    bool_value: Option<RawValue<bool>>,
    #[serde(alias = "intValue")]
    int_value: Option<RawValue<i64>>,
    #[serde(alias = "doubleValue")]
    double_value: Option<RawValue<f64>>,
    #[serde(alias = "stringValue")]
    string_value: Option<RawValue<String>>,
}

/// The `*_value` entries of a field, of which at most one may be set.
struct RawValues {
    bool_value: Option<RawValue<bool>>,
    int_value: Option<RawValue<i64>>,
    double_value: Option<RawValue<f64>>,
    string_value: Option<RawValue<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawValue<T> {
    choices: Vec<T>,
    default: Option<RawDefault<T>>,
    required: bool,
    list: bool,
}

impl<T> Default for RawValue<T> {
    fn default() -> Self {
        Self {
            choices: Vec::default(),
            default: None,
            required: false,
            list: false,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawDefault<T> {
    Single(T),
    List(Vec<T>),
}

impl<T: Scalar> RawValue<T> {
    fn into_spec(self, name: &str) -> Result<TypedSpec<T>, DescriptorError> {
        let RawValue {
            choices,
            default,
            required,
            list,
        } = self;
        let spec = TypedSpec::default().choices(choices);
        let spec = if required { spec.required() } else { spec };
        let spec = if list { spec.list() } else { spec };

        match default {
            None => Ok(spec),
            Some(RawDefault::Single(value)) => Ok(spec.default_value(value)),
            Some(RawDefault::List(values)) if list => Ok(spec.default_list(values)),
            Some(RawDefault::List(_)) => Err(DescriptorError::Mapping(format!(
                "\"{name}\" default can only be a list when the value is a list."
            ))),
        }
    }
}

impl RawValues {
    fn into_spec(self, name: &str) -> Result<Option<ValueSpec>, DescriptorError> {
        let RawValues {
            bool_value,
            int_value,
            double_value,
            string_value,
        } = self;

        match (bool_value, int_value, double_value, string_value) {
            (None, None, None, None) => Ok(None),
            (Some(value), None, None, None) => Ok(Some(value.into_spec(name)?.into())),
            (None, Some(value), None, None) => Ok(Some(value.into_spec(name)?.into())),
            (None, None, Some(value), None) => Ok(Some(value.into_spec(name)?.into())),
            (None, None, None, Some(value)) => Ok(Some(value.into_spec(name)?.into())),
            _ => Err(DescriptorError::Mapping(format!(
                "\"{name}\" can only set one of bool_value, int_value, double_value or string_value."
            ))),
        }
    }
}

fn with_value(field: FieldSpec, value: Option<ValueSpec>) -> FieldSpec {
    match value {
        Some(value) => field.value(value),
        None => field,
    }
}

/// Map a normalized value tree into a [`Schema`], without validating it.
pub fn to_schema(value: Value) -> Result<Schema, DescriptorError> {
    let RawCommand {
        descriptor_version,
        synopsis,
        description,
        options,
        arguments,
        runtime,
    } = serde_json::from_value(value)?;

    let mut schema = Schema::new(descriptor_version)
        .synopsis(synopsis)
        .description(description)
        .run(runtime.run);

    for option in options {
        let RawOption {
            name,
            short_name,
            description,
            bool_value,
            int_value,
            double_value,
            string_value,
        } = option;
        let value = RawValues {
            bool_value,
            int_value,
            double_value,
            string_value,
        }
        .into_spec(&name)?;
        let field = FieldSpec::option(name).description(description);
        let field = if short_name.is_empty() {
            field
        } else {
            field.short_name(short_name)
        };
        schema = schema.add(with_value(field, value));
    }

    for argument in arguments {
        let RawArgument {
            name,
            description,
            bool_value,
            int_value,
            double_value,
            string_value,
        } = argument;
        let value = RawValues {
            bool_value,
            int_value,
            double_value,
            string_value,
        }
        .into_spec(&name)?;
        let field = FieldSpec::argument(name).description(description);
        schema = schema.add(with_value(field, value));
    }

    Ok(schema)
}
