use std::collections::{HashMap, VecDeque};
use thiserror::Error;

use crate::matcher::api::*;
use crate::matcher::model::*;
use crate::prelude::Scalar;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum MatchError {
    #[error("Option '{0}' is missing its value.")]
    Undercomplete(String),

    #[error("Unrecognized token: {0}")]
    Unrecognized(String),
}

impl From<CloseError> for MatchError {
    fn from(error: CloseError) -> Self {
        match error {
            CloseError::TooFewValues { name, .. } => MatchError::Undercomplete(name),
            CloseError::TooManyValues { name, .. } => MatchError::Unrecognized(name),
        }
    }
}

/// Matches command line tokens to fields, one token at a time.
///
/// Each call to `feed` reports at most one match, as soon as it is complete:
/// a flag as soon as it is seen, an option once its value arrives, and each positional token on
/// its own.
#[derive(Debug)]
pub(crate) struct TokenMatcher {
    options: HashMap<String, OptionConfig>,
    short_options: HashMap<char, String>,
    arguments: VecDeque<ArgumentConfig>,
    argument: Option<MatchBuffer>,
    option: Option<MatchBuffer>,
}

impl TokenMatcher {
    pub(crate) fn new(options: Vec<OptionConfig>, arguments: VecDeque<ArgumentConfig>) -> Self {
        let mut option_configs = HashMap::default();
        let mut short_options = HashMap::default();

        for option_config in options.into_iter() {
            if let Some(short) = option_config.short() {
                short_options
                    .entry(*short)
                    .or_insert_with(|| option_config.name().to_string());
            }

            option_configs
                .entry(option_config.name().to_string())
                .or_insert(option_config);
        }

        Self {
            options: option_configs,
            short_options,
            arguments,
            argument: None,
            option: None,
        }
    }

    pub(crate) fn feed(&mut self, token: &str) -> Result<Option<MatchTokens>, MatchError> {
        // 0. The token after a value taking option is its value, whatever it looks like.
        // 1. Find a 'long' option, such as:
        //  --initial
        //  --initial ..
        //  --initial=..
        // 2. Find a 'short' option, such as:
        //  -i
        //  -i ..
        //  -i=..
        // 3. Match against an argument (including negative numbers, such as -905).
        if let Some(mut match_buffer) = self.option.take() {
            match_buffer.push(token.to_string());
            return Ok(Some(match_buffer.close()?));
        }

        if let Some(long) = token.strip_prefix("--") {
            let (name, value) = split_equals_delimiter(long);
            return self.match_option(token, name, value);
        }

        if let Some(short) = token.strip_prefix('-') {
            if !short.is_empty() {
                let (short, value) = split_equals_delimiter(short);
                let mut characters = short.chars();

                let name = match (characters.next(), characters.next()) {
                    (Some(single), None) => self.short_options.get(&single).cloned(),
                    _ => None,
                };

                // A registered short name wins over reading the token as a negative number.
                match name {
                    Some(name) => return self.match_option(token, &name, value),
                    None if f64::convert(token).is_none() => {
                        return Err(MatchError::Unrecognized(token.to_string()));
                    }
                    None => {}
                }
            }
        }

        self.match_argument(token)
    }

    fn match_option(
        &mut self,
        token: &str,
        name: &str,
        value: Option<&str>,
    ) -> Result<Option<MatchTokens>, MatchError> {
        let option_config = match self.options.get(name) {
            Some(option_config) => option_config.clone(),
            None => return Err(MatchError::Unrecognized(token.to_string())),
        };

        if !option_config.repeatable() {
            self.options.remove(name);

            if let Some(short) = option_config.short() {
                self.short_options.remove(short);
            }
        }

        let mut match_buffer = MatchBuffer::new(name, option_config.bound());

        match value {
            Some(value) => {
                // Options using k=v syntax cannot follow up with more values afterwards.
                match_buffer.push(value.to_string());
                match_buffer
                    .close()
                    .map(Some)
                    .map_err(|_| MatchError::Unrecognized(token.to_string()))
            }
            None => {
                if match_buffer.is_open() {
                    self.option.replace(match_buffer);
                    Ok(None)
                } else {
                    Ok(Some(match_buffer.close()?))
                }
            }
        }
    }

    fn match_argument(&mut self, token: &str) -> Result<Option<MatchTokens>, MatchError> {
        let mut match_buffer = match self.argument.take() {
            Some(match_buffer) if match_buffer.is_open() => match_buffer,
            // Flip to the next argument.
            _ => self.next_argument(token)?,
        };

        match_buffer.push(token.to_string());
        let match_tokens = MatchTokens {
            name: match_buffer.name().to_string(),
            values: vec![token.to_string()],
        };
        self.argument.replace(match_buffer);
        Ok(Some(match_tokens))
    }

    fn next_argument(&mut self, token: &str) -> Result<MatchBuffer, MatchError> {
        match self.arguments.pop_front() {
            Some(argument_config) => Ok(MatchBuffer::new(
                argument_config.name(),
                argument_config.bound(),
            )),
            None => Err(MatchError::Unrecognized(token.to_string())),
        }
    }

    /// Finish matching; fails only when an option is still waiting for its value.
    pub(crate) fn close(self) -> Result<(), MatchError> {
        match self.option {
            Some(match_buffer) => match_buffer.close().map(|_| ()).map_err(MatchError::from),
            None => Ok(()),
        }
    }
}

fn split_equals_delimiter(token: &str) -> (&str, Option<&str>) {
    match token.split_once('=') {
        Some((n, v)) => (n, Some(v)),
        None => (token, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn matcher() -> TokenMatcher {
        TokenMatcher::new(
            vec![
                OptionConfig::new("verbose", Some('v'), Bound::Range(0, 0), false),
                OptionConfig::new("count", Some('c'), Bound::Range(1, 1), false),
                OptionConfig::new("include", Some('i'), Bound::Range(1, 1), true),
            ],
            VecDeque::from([
                ArgumentConfig::new("first", Bound::Range(1, 1)),
                ArgumentConfig::new("rest", Bound::Lower(0)),
            ]),
        )
    }

    fn tokens(name: &str, values: &[&str]) -> Option<MatchTokens> {
        Some(MatchTokens {
            name: name.to_string(),
            values: values.iter().map(|v| v.to_string()).collect(),
        })
    }

    #[rstest]
    #[case("a", None)]
    #[case("a=", Some(""))]
    #[case("a=b", Some("b"))]
    #[case("a=b=c", Some("b=c"))]
    #[case("=b", Some("b"))]
    fn split_equals(#[case] token: &str, #[case] value: Option<&str>) {
        let (_, actual) = split_equals_delimiter(token);
        assert_eq!(actual, value);
    }

    #[test]
    fn empty() {
        let token_matcher = matcher();
        token_matcher.close().unwrap();
    }

    #[rstest]
    #[case(vec!["--verbose"])]
    #[case(vec!["-v"])]
    fn flag(#[case] feed: Vec<&str>) {
        let mut token_matcher = matcher();
        assert_eq!(token_matcher.feed(feed[0]).unwrap(), tokens("verbose", &[]));
        token_matcher.close().unwrap();
    }

    #[rstest]
    #[case(vec!["--count", "4"])]
    #[case(vec!["-c", "4"])]
    fn option_value(#[case] feed: Vec<&str>) {
        let mut token_matcher = matcher();
        assert_eq!(token_matcher.feed(feed[0]).unwrap(), None);
        assert_eq!(token_matcher.feed(feed[1]).unwrap(), tokens("count", &["4"]));
        token_matcher.close().unwrap();
    }

    #[rstest]
    #[case("--count=4", &["4"])]
    #[case("-c=4", &["4"])]
    #[case("--count=", &[""])]
    fn option_equals(#[case] token: &str, #[case] values: &[&str]) {
        let mut token_matcher = matcher();
        assert_eq!(token_matcher.feed(token).unwrap(), tokens("count", values));
    }

    #[rstest]
    #[case("--count")]
    #[case("-c")]
    #[case("--verbose")]
    #[case("-i")]
    fn option_value_any_token(#[case] value: &str) {
        let mut token_matcher = matcher();
        token_matcher.feed("--include").unwrap();
        assert_eq!(token_matcher.feed(value).unwrap(), tokens("include", &[value]));
    }

    #[test]
    fn flag_equals() {
        let mut token_matcher = matcher();
        assert_eq!(
            token_matcher.feed("--verbose=true").unwrap_err(),
            MatchError::Unrecognized("--verbose=true".to_string())
        );
    }

    #[rstest]
    #[case("--verbose")]
    #[case("-v")]
    #[case("--count")]
    #[case("-c")]
    fn scalar_option_retired(#[case] token: &str) {
        let mut token_matcher = matcher();
        token_matcher.feed(token).unwrap();
        token_matcher.feed("1").unwrap();
        token_matcher.feed("2").unwrap();

        let repeat = match token {
            "-v" => "--verbose",
            "-c" => "--count",
            other => other,
        };
        assert_eq!(
            token_matcher.feed(repeat).unwrap_err(),
            MatchError::Unrecognized(repeat.to_string())
        );
    }

    #[test]
    fn list_option_repeats() {
        let mut token_matcher = matcher();

        for value in ["a", "b", "c"] {
            token_matcher.feed("-i").unwrap();
            assert_eq!(token_matcher.feed(value).unwrap(), tokens("include", &[value]));
        }

        token_matcher.close().unwrap();
    }

    #[rstest]
    #[case("--unknown")]
    #[case("--unknown=1")]
    #[case("-x")]
    #[case("-vc")]
    #[case("--")]
    fn unrecognized_option(#[case] token: &str) {
        let mut token_matcher = matcher();
        assert_eq!(
            token_matcher.feed(token).unwrap_err(),
            MatchError::Unrecognized(token.to_string())
        );
    }

    #[rstest]
    #[case("-905")]
    #[case("-0.4")]
    #[case("-")]
    fn negative_numbers_are_arguments(#[case] token: &str) {
        let mut token_matcher = matcher();
        assert_eq!(token_matcher.feed(token).unwrap(), tokens("first", &[token]));
    }

    #[rstest]
    #[case("-1", tokens("one", &[]))]
    #[case("-5", tokens("first", &["-5"]))]
    #[case("-1.5", tokens("first", &["-1.5"]))]
    fn digit_short_name(#[case] token: &str, #[case] expected: Option<MatchTokens>) {
        let mut token_matcher = TokenMatcher::new(
            vec![OptionConfig::new("one", Some('1'), Bound::Range(0, 0), false)],
            VecDeque::from([ArgumentConfig::new("first", Bound::Range(1, 1))]),
        );
        assert_eq!(token_matcher.feed(token).unwrap(), expected);
    }

    #[test]
    fn arguments() {
        let mut token_matcher = matcher();
        assert_eq!(token_matcher.feed("1").unwrap(), tokens("first", &["1"]));
        assert_eq!(token_matcher.feed("2").unwrap(), tokens("rest", &["2"]));
        assert_eq!(token_matcher.feed("-v").unwrap(), tokens("verbose", &[]));
        assert_eq!(token_matcher.feed("3").unwrap(), tokens("rest", &["3"]));
        token_matcher.close().unwrap();
    }

    #[test]
    fn arguments_exhausted() {
        let mut token_matcher = TokenMatcher::new(
            vec![],
            VecDeque::from([ArgumentConfig::new("first", Bound::Range(1, 1))]),
        );
        token_matcher.feed("1").unwrap();
        assert_eq!(
            token_matcher.feed("905").unwrap_err(),
            MatchError::Unrecognized("905".to_string())
        );
    }

    #[rstest]
    #[case("--count")]
    #[case("-c")]
    #[case("--include")]
    fn missing_value(#[case] token: &str) {
        let mut token_matcher = matcher();
        assert_eq!(token_matcher.feed(token).unwrap(), None);

        let name = if token == "--include" { "include" } else { "count" };
        assert_eq!(
            token_matcher.close().unwrap_err(),
            MatchError::Undercomplete(name.to_string())
        );
    }
}
