use std::collections::{BTreeMap, BTreeSet};

use crate::api::{FieldSpec, ValueSpec};
use crate::model::{Cardinality, Role};

/// Only the last argument may be a list.
pub(super) fn check_list(arguments: &[FieldSpec]) -> Vec<String> {
    let list_indices: Vec<usize> = arguments
        .iter()
        .enumerate()
        .filter(|(_, argument)| {
            argument.get_value().map(ValueSpec::cardinality) == Some(Cardinality::List)
        })
        .map(|(index, _)| index)
        .collect();

    match &list_indices[..] {
        [] => Vec::default(),
        [index] if *index + 1 == arguments.len() => Vec::default(),
        _ => vec![
            "To prevent ambiguous argument parsing, only the last argument can be a list."
                .to_string(),
        ],
    }
}

/// The required arguments must form a prefix of the arguments.
pub(super) fn check_required(arguments: &[FieldSpec]) -> Vec<String> {
    let mut required_to_be_required = BTreeSet::default();
    let mut next_unchecked = 0;

    for (current, argument) in arguments.iter().enumerate() {
        if argument.get_value().map_or(false, ValueSpec::is_required) {
            required_to_be_required.extend(next_unchecked..current);
            next_unchecked = current + 1;
        }
    }

    if required_to_be_required.is_empty() {
        Vec::default()
    } else {
        vec![format!(
            "Arguments at index [{indices}] need to also be required, because arguments preceding a required argument must be required to prevent ambiguous parsing.",
            indices = required_to_be_required
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<String>>()
                .join(", ")
        )]
    }
}

/// Names are unique across options and arguments; short names are unique across options.
/// Both compare case-insensitively.
pub(super) fn check_unique(options: &[FieldSpec], arguments: &[FieldSpec]) -> Vec<String> {
    let mut seen_names: BTreeMap<String, Vec<String>> = BTreeMap::default();
    let mut seen_short_names: BTreeMap<String, Vec<String>> = BTreeMap::default();

    for (index, option) in options.iter().enumerate() {
        let location = Role::Option.prefix(index);

        if let Some(short_name) = option.get_short_name() {
            seen_short_names
                .entry(short_name.to_lowercase())
                .or_default()
                .push(location.clone());
        }

        seen_names
            .entry(option.get_name().to_lowercase())
            .or_default()
            .push(location);
    }

    for (index, argument) in arguments.iter().enumerate() {
        seen_names
            .entry(argument.get_name().to_lowercase())
            .or_default()
            .push(Role::Argument.prefix(index));
    }

    let names = seen_names
        .into_iter()
        .filter(|(_, locations)| locations.len() > 1)
        .map(|(name, locations)| {
            format!(
                "Name \"{name}\" used in {} is not unique.",
                locations.join(", ")
            )
        });
    let short_names = seen_short_names
        .into_iter()
        .filter(|(_, locations)| locations.len() > 1)
        .map(|(short_name, locations)| {
            format!(
                "Short name \"{short_name}\" used in {} is not unique.",
                locations.join(", ")
            )
        });

    names.chain(short_names).collect()
}
