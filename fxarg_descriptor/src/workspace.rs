use serde::Deserialize;
use serde_json::Value;

use fxarg_core::{validate_version, ValidationError};

use crate::DescriptorError;

/// The descriptor of a workspace: only its version is meaningful.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorkspaceDescriptor {
    /// The descriptor format version.
    #[serde(alias = "descriptorVersion")]
    pub descriptor_version: String,
}

impl WorkspaceDescriptor {
    /// Map a normalized value tree into a workspace descriptor, without validating it.
    pub fn from_value(value: Value) -> Result<Self, DescriptorError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Check the descriptor version.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_version(&self.descriptor_version)
    }
}
