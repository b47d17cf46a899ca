//! Descriptor loading for `fxarg`: scalar normalization of generic document trees,
//! and their mapping into command schemas and workspace descriptors.
//!
//! Reading files and parsing document text are left to the caller,
//! which hands over the resulting [`Node`] tree.
//!
//! ### Example
//! ```
//! use fxarg_descriptor::{load_command, Node};
//!
//! let node = Node::map([
//!     ("descriptor_version", Node::scalar("v1beta")),
//!     ("synopsis", Node::scalar("Say hello.")),
//!     ("runtime", Node::map([("run", Node::scalar("echo hello"))])),
//!     ("options", Node::sequence([Node::map([
//!         ("name", Node::scalar("times")),
//!         ("description", Node::scalar("How many times.")),
//!         ("int_value", Node::map([("default", Node::scalar("1"))])),
//!     ])])),
//! ]);
//!
//! let schema = load_command(&node).unwrap();
//! let result = schema.parse(&["--times", "3"]).unwrap();
//! assert!(result.get("times").unwrap().user_set);
//! ```
#![deny(missing_docs)]
mod command;
mod normalize;
mod workspace;

use thiserror::Error;

use fxarg_core::{Schema, ValidationError};

pub use command::to_schema;
pub use normalize::{normalize, Node, NodeKind, NormalizeError};
pub use workspace::WorkspaceDescriptor;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

/// A descriptor that could not be loaded.
#[derive(Debug, Error)]
pub enum DescriptorError {
    /// The document root is neither a map nor a sequence.
    #[error("Invalid descriptor. {0}")]
    Normalize(#[from] NormalizeError),

    /// The value tree does not have the shape of a descriptor.
    #[error("Invalid descriptor. {0}")]
    Json(#[from] serde_json::Error),

    /// The value tree has the shape of a descriptor, but contradicts itself.
    #[error("Invalid descriptor. {0}")]
    Mapping(String),

    /// The descriptor fails validation.
    #[error("Invalid descriptor. {0}")]
    Validation(#[from] ValidationError),
}

/// Load a command descriptor: normalize, map, then validate.
pub fn load_command(node: &Node) -> Result<Schema, DescriptorError> {
    let value = normalize(node)?;
    let schema = to_schema(value)?;
    schema.validate()?;

    #[cfg(feature = "tracing_debug")]
    {
        debug!(
            "Loaded a command with {} option(s) and {} argument(s).",
            schema.options().len(),
            schema.arguments().len()
        );
    }

    Ok(schema)
}

/// Load a workspace descriptor: normalize, map, then validate.
pub fn load_workspace(node: &Node) -> Result<WorkspaceDescriptor, DescriptorError> {
    let value = normalize(node)?;
    let workspace = WorkspaceDescriptor::from_value(value)?;
    workspace.validate()?;
    Ok(workspace)
}
