use crate::api::{FieldSpec, TypedSpec, ValueSpec};
use crate::model::Role;
use crate::prelude::Scalar;
use crate::validator::{is_reserved_name, is_reserved_short_name};

pub(super) fn check_field(field: &FieldSpec, index: usize) -> Vec<String> {
    let prefix = field.role().prefix(index);
    let mut messages = check_name(field, &prefix);

    if field.role() == Role::Option {
        messages.extend(check_short_name(field, &prefix));
    }

    messages.extend(check_description(field, &prefix));
    messages.extend(check_value(field, &prefix));
    messages
}

fn check_name(field: &FieldSpec, prefix: &str) -> Vec<String> {
    let name = field.get_name();
    let mut messages = Vec::default();

    if name.chars().count() < 2 {
        messages.push(format!(
            "{prefix} \"{name}\" name cannot be shorter than two characters."
        ));
    }

    if is_reserved_name(name) {
        messages.push(format!("{prefix} name cannot be named \"help\" (reserved)."));
    }

    messages
}

fn check_short_name(field: &FieldSpec, prefix: &str) -> Vec<String> {
    let short_name = match field.get_short_name() {
        Some(short_name) => short_name,
        None => return Vec::default(),
    };
    let mut messages = Vec::default();

    if short_name.chars().count() > 1 {
        messages.push(format!(
            "{prefix} \"{short_name}\" short name cannot be longer than one character."
        ));
    }

    if is_reserved_short_name(short_name) {
        messages.push(format!(
            "{prefix} \"{name}\" short name cannot be \"h\" (reserved).",
            name = field.get_name()
        ));
    }

    messages
}

fn check_description(field: &FieldSpec, prefix: &str) -> Vec<String> {
    if field.get_description().is_empty() {
        vec![format!(
            "{prefix} \"{name}\" description cannot be empty.",
            name = field.get_name()
        )]
    } else {
        Vec::default()
    }
}

fn check_value(field: &FieldSpec, prefix: &str) -> Vec<String> {
    let name = field.get_name();

    match field.get_value() {
        None => vec![format!("{prefix} \"{name}\" value cannot be empty.")],
        Some(ValueSpec::Bool(spec)) => check_choices(spec, name, prefix),
        Some(ValueSpec::Int64(spec)) => check_choices(spec, name, prefix),
        Some(ValueSpec::Double(spec)) => check_choices(spec, name, prefix),
        Some(ValueSpec::String(spec)) => check_choices(spec, name, prefix),
    }
}

/// Every effective default must be one of the choices (when there are any).
fn check_choices<T: Scalar>(spec: &TypedSpec<T>, name: &str, prefix: &str) -> Vec<String> {
    let choices = spec.get_choices();

    if choices.is_empty() {
        return Vec::default();
    }

    spec.initial_values()
        .into_iter()
        .filter(|value| !choices.contains(value))
        .map(|value| {
            format!(
                "{prefix} \"{name}\" default value \"{value}\" is invalid, the default value must be one of the choices: [{choices}].",
                choices = choices
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<String>>()
                    .join(", ")
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn option(name: &str) -> FieldSpec {
        FieldSpec::option(name)
            .description("Description.")
            .value(TypedSpec::<String>::default())
    }

    #[rstest]
    #[case(option("ok"), vec![])]
    #[case(option("o"), vec!["Option[index:2] \"o\" name cannot be shorter than two characters."])]
    #[case(option(""), vec!["Option[index:2] \"\" name cannot be shorter than two characters."])]
    #[case(option("HELP"), vec!["Option[index:2] name cannot be named \"help\" (reserved)."])]
    #[case(option("ok").short_name("s"), vec![])]
    #[case(option("ok").short_name("st"), vec!["Option[index:2] \"st\" short name cannot be longer than one character."])]
    #[case(option("ok").short_name("H"), vec!["Option[index:2] \"ok\" short name cannot be \"h\" (reserved)."])]
    #[case(option("ok").description(""), vec!["Option[index:2] \"ok\" description cannot be empty."])]
    #[case(FieldSpec::option("ok").description("Description."), vec!["Option[index:2] \"ok\" value cannot be empty."])]
    fn check_option(#[case] field: FieldSpec, #[case] expected: Vec<&str>) {
        assert_eq!(check_field(&field, 2), expected);
    }

    #[test]
    fn check_argument_ignores_short_name() {
        let field = FieldSpec::argument("ok")
            .short_name("hh")
            .description("Description.")
            .value(TypedSpec::<i64>::default());
        assert_eq!(check_field(&field, 0), Vec::<String>::new());
    }

    #[rstest]
    #[case(TypedSpec::<i64>::default().choices([4, 1, 6]).default_value(4), vec![])]
    #[case(TypedSpec::<i64>::default().choices([4, 1, 6]), vec!["Argument[index:0] \"ok\" default value \"0\" is invalid, the default value must be one of the choices: [4, 1, 6]."])]
    #[case(TypedSpec::<i64>::default().choices([4, 1, 6]).default_value(905), vec!["Argument[index:0] \"ok\" default value \"905\" is invalid, the default value must be one of the choices: [4, 1, 6]."])]
    #[case(TypedSpec::<i64>::default().choices([4, 1, 6]).default_list([4, 5, 6, 7]), vec![
        "Argument[index:0] \"ok\" default value \"5\" is invalid, the default value must be one of the choices: [4, 1, 6].",
        "Argument[index:0] \"ok\" default value \"7\" is invalid, the default value must be one of the choices: [4, 1, 6].",
    ])]
    #[case(TypedSpec::<i64>::default().choices([4, 1, 6]).default_list([]), vec![])]
    fn check_int_choices(#[case] spec: TypedSpec<i64>, #[case] expected: Vec<&str>) {
        let field = FieldSpec::argument("ok").description("Description.").value(spec);
        assert_eq!(check_field(&field, 0), expected);
    }

    #[test]
    fn check_string_choices() {
        let field = FieldSpec::option("ok")
            .description("Description.")
            .value(
                TypedSpec::<String>::default()
                    .choices(["a".to_string(), "b".to_string()])
                    .default_value("c".to_string()),
            );
        assert_eq!(
            check_field(&field, 1),
            vec!["Option[index:1] \"ok\" default value \"c\" is invalid, the default value must be one of the choices: [a, b]."]
        );
    }

    #[test]
    fn check_double_choices() {
        let field = FieldSpec::option("ok")
            .description("Description.")
            .value(TypedSpec::<f64>::default().choices([1.5, 6.0]).default_value(6.0));
        assert_eq!(check_field(&field, 0), Vec::<String>::new());
    }
}
