//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! ui-nodes crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use ui_nodes::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let json = std::fs::read_to_string("path/to/nodes.json")?;
//! let mut nodes = Nodes::from_json(&json)?;
//!
//! nodes.reset_nodes_with_prefix("traits.");
//! nodes.sort(&SortOptions::new().with_groups([NodeGroup::Default]))?;
//!
//! println!("{}", nodes.to_json()?);
//! # Ok(())
//! # }
//! ```

// Node model
pub use crate::node::{
    AnchorAttributes, Attributes, Autocomplete, DivisionAttributes, ImageAttributes,
    InputAttributeType, InputAttributes, Meta, Node, NodeGroup, NodeType, ScriptAttributes,
    TextAttributes,
};

// Collection and ordering
pub use crate::nodes::{KeyOrderTransform, METHOD_NODE_ID, Nodes, SortOptions};

// Schema key order
pub use crate::schema::{JsonSchemaKeyOrder, KeyOrderProvider};

// Messages
pub use crate::text::{Message, MessageType, Messages};

// Error types
pub use crate::error::{DecodeError, EncodeError, SchemaError, SortError};

// Result type alias for convenience
pub type Result<T, E = Box<dyn std::error::Error>> = std::result::Result<T, E>;
