//! # ui-nodes - UI Node Model for Identity Flows
//!
//! **ui-nodes** models the dynamic set of UI elements ("nodes") an identity or
//! authentication flow renders: inputs, text, images, links, scripts and
//! containers. It provides a polymorphic wire codec for them, consistent
//! mutation across flow steps, and a deterministic render order.
//!
//! ## Core Workflow
//!
//! 1.  **Build**: Flow logic creates [`Node`](node::Node)s and collects them in a
//!     [`Nodes`](nodes::Nodes) collection, preferring `upsert` so that identities
//!     stay unique across passes.
//! 2.  **Mutate**: When a step re-renders (e.g. after a failed login), reset the
//!     collection or parts of it, attach messages, set values.
//! 3.  **Sort**: Order the collection by group precedence, a schema-derived or
//!     explicit key order, and value. The `method` node always renders last
//!     within its group.
//! 4.  **Encode**: Serialize the collection. Each node's `type` is derived from
//!     its attribute variant; a conflicting explicit `type` is an error.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ui_nodes::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let mut nodes = Nodes::new();
//!     nodes.upsert(Node::new_input_field(
//!         "method",
//!         "password",
//!         NodeGroup::Password,
//!         InputAttributeType::Submit,
//!     ));
//!     nodes.upsert(
//!         Node::new_input_field(
//!             "password",
//!             serde_json::Value::Null,
//!             NodeGroup::Password,
//!             InputAttributeType::Password,
//!         )
//!         .with_required(),
//!     );
//!     nodes.upsert(Node::new_input_field(
//!         "csrf_token",
//!         "d3f9a1",
//!         NodeGroup::Default,
//!         InputAttributeType::Hidden,
//!     ));
//!
//!     let options = SortOptions::new()
//!         .with_groups([NodeGroup::Default, NodeGroup::Password])
//!         .with_keys(["csrf_token", "password"]);
//!     nodes.sort(&options)?;
//!
//!     assert_eq!(nodes.ids(), vec!["csrf_token", "password", "method"]);
//!     println!("{}", nodes.to_json_pretty()?);
//!
//!     let decoded = Nodes::from_json(&nodes.to_json()?)?;
//!     assert_eq!(decoded.len(), 3);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod node;
pub mod nodes;
pub mod prelude;
pub mod schema;
pub mod text;
