//! Descriptor loading: from a generic document tree to a validated [`Schema`](crate::Schema).
//!
//! ```
//! use fxarg::descriptor::{load_command, Node};
//!
//! let node = Node::map([
//!     ("descriptor_version", Node::scalar("v1beta")),
//!     ("synopsis", Node::scalar("List files.")),
//!     ("runtime", Node::map([("run", Node::scalar("ls"))])),
//!     ("arguments", Node::sequence([Node::map([
//!         ("name", Node::scalar("paths")),
//!         ("description", Node::scalar("The paths to list.")),
//!         ("string_value", Node::map([("list", Node::scalar("yes"))])),
//!     ])])),
//! ]);
//!
//! let schema = load_command(&node).unwrap();
//! assert_eq!(schema.arguments().len(), 1);
//! ```
pub use fxarg_descriptor::*;
