use thiserror::Error;

use crate::matcher::api::*;

/// The tokens matched to one field.
/// Empty `values` means the field matched as a flag.
#[derive(Debug, PartialEq, Eq, Hash)]
pub(crate) struct MatchTokens {
    pub name: String,
    pub values: Vec<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(super) enum CloseError {
    #[error("too few values provided for '{name}' (provided={provided}, expected={expected}).")]
    TooFewValues {
        name: String,
        provided: usize,
        expected: u8,
    },

    #[error("too many values provided for '{name}' (provided={provided}, expected={expected}).")]
    TooManyValues {
        name: String,
        provided: usize,
        expected: u8,
    },
}

#[derive(Debug)]
pub(super) struct MatchBuffer {
    name: String,
    bound: Bound,
    values: Vec<String>,
}

impl MatchBuffer {
    pub(super) fn new(name: impl Into<String>, bound: Bound) -> Self {
        Self {
            name: name.into(),
            bound,
            values: Vec::default(),
        }
    }

    pub(super) fn name(&self) -> &str {
        &self.name
    }

    pub(super) fn push(&mut self, value: String) {
        self.values.push(value);
    }

    pub(super) fn is_open(&self) -> bool {
        match self.bound {
            Bound::Range(_, n) => self.values.len() < n as usize,
            Bound::Lower(_) => true,
        }
    }

    pub(super) fn close(self) -> Result<MatchTokens, CloseError> {
        let lower = match self.bound {
            Bound::Range(n, _) => n,
            Bound::Lower(n) => n,
        };

        if self.values.len() < lower as usize {
            return Err(CloseError::TooFewValues {
                name: self.name,
                provided: self.values.len(),
                expected: lower,
            });
        }

        if let Bound::Range(_, upper) = self.bound {
            if self.values.len() > upper as usize {
                return Err(CloseError::TooManyValues {
                    name: self.name,
                    provided: self.values.len(),
                    expected: upper,
                });
            }
        }

        Ok(MatchTokens {
            name: self.name,
            values: self.values,
        })
    }
}
