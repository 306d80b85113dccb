use super::Nodes;
use crate::error::SortError;
use crate::node::attributes::value_to_string;
use crate::node::{Node, NodeGroup};
use crate::schema::KeyOrderProvider;
use itertools::Itertools;
use serde_json::Value;
use std::fmt;

/// The identity that always renders last within its group.
pub const METHOD_NODE_ID: &str = "method";

/// Rewrites the key order before the append keys are added.
pub type KeyOrderTransform = Box<dyn Fn(Vec<String>) -> Vec<String> + Send + Sync>;

/// Configuration for [`Nodes::sort_by_schema`]. Every field is optional.
///
/// The effective key order is `keys_in_order` followed by the schema's keys,
/// passed through `keys_in_order_post`, followed by `keys_in_order_append`.
#[derive(Default)]
pub struct SortOptions {
    pub order_by_groups: Vec<NodeGroup>,
    pub schema_ref: Option<String>,
    pub keys_in_order: Vec<String>,
    pub keys_in_order_append: Vec<String>,
    pub keys_in_order_post: Option<KeyOrderTransform>,
}

impl fmt::Debug for SortOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortOptions")
            .field("order_by_groups", &self.order_by_groups)
            .field("schema_ref", &self.schema_ref)
            .field("keys_in_order", &self.keys_in_order)
            .field("keys_in_order_append", &self.keys_in_order_append)
            .field("keys_in_order_post", &self.keys_in_order_post.is_some())
            .finish()
    }
}

impl SortOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_groups(mut self, groups: impl IntoIterator<Item = NodeGroup>) -> Self {
        self.order_by_groups = groups.into_iter().collect();
        self
    }

    pub fn with_schema(mut self, schema_ref: impl Into<String>) -> Self {
        self.schema_ref = Some(schema_ref.into());
        self
    }

    pub fn with_keys<S: Into<String>>(mut self, keys: impl IntoIterator<Item = S>) -> Self {
        self.keys_in_order = keys.into_iter().map_into().collect();
        self
    }

    pub fn with_append_keys<S: Into<String>>(mut self, keys: impl IntoIterator<Item = S>) -> Self {
        self.keys_in_order_append = keys.into_iter().map_into().collect();
        self
    }

    pub fn with_key_transform<F>(mut self, transform: F) -> Self
    where
        F: Fn(Vec<String>) -> Vec<String> + Send + Sync + 'static,
    {
        self.keys_in_order_post = Some(Box::new(transform));
        self
    }

    /// Combines the configured keys with the schema's keys into the effective order.
    pub fn resolve_key_order(&self, schema_keys: Vec<String>) -> Vec<String> {
        let keys = self
            .keys_in_order
            .iter()
            .cloned()
            .chain(schema_keys)
            .collect_vec();

        let keys = match &self.keys_in_order_post {
            Some(post) => post(keys),
            None => keys,
        };

        keys.into_iter()
            .chain(self.keys_in_order_append.iter().cloned())
            .collect()
    }
}

/// Tie-break key for nodes sharing a key position. Absent values render as
/// `<nil>`, so they sort after digits and most punctuation.
fn tie_break_key(node: &Node) -> String {
    match node.value() {
        Value::Null => "<nil>".to_string(),
        value => value_to_string(&value),
    }
}

fn group_position(groups: &[NodeGroup], group: Option<NodeGroup>) -> usize {
    group
        .and_then(|g| groups.iter().position(|candidate| *candidate == g))
        .unwrap_or(groups.len())
}

/// Position of a node within the key order: the first key that prefixes its
/// identity wins, unmatched nodes follow all keys, and the method node goes last.
fn key_position(node: &Node, keys: &[String], collection_len: usize) -> usize {
    let id = node.id();
    if id == METHOD_NODE_ID {
        return collection_len + keys.len() + 1;
    }

    keys.iter()
        .position(|key| id.starts_with(key.as_str()))
        .unwrap_or(keys.len())
}

impl Nodes {
    /// Sorts the nodes for rendering, fetching the schema's key order from
    /// `provider` if `options` names a schema.
    ///
    /// A failed lookup aborts the sort before anything is reordered.
    pub async fn sort_by_schema<P: KeyOrderProvider>(
        &mut self,
        provider: &P,
        options: &SortOptions,
    ) -> Result<(), SortError> {
        let schema_keys = match &options.schema_ref {
            Some(schema_ref) => provider.keys_in_order(schema_ref).await?,
            None => Vec::new(),
        };
        self.apply_sort(options, schema_keys);
        Ok(())
    }

    /// Sorts the nodes without consulting a schema.
    pub fn sort(&mut self, options: &SortOptions) -> Result<(), SortError> {
        if let Some(schema_ref) = &options.schema_ref {
            return Err(SortError::ProviderRequired(schema_ref.clone()));
        }
        self.apply_sort(options, Vec::new());
        Ok(())
    }

    fn apply_sort(&mut self, options: &SortOptions, schema_keys: Vec<String>) {
        let keys = options.resolve_key_order(schema_keys);
        let len = self.0.len();
        log::debug!(
            "sorting {} nodes by {} groups and {} keys",
            len,
            options.order_by_groups.len(),
            keys.len()
        );

        if !options.order_by_groups.is_empty() {
            self.0
                .sort_by_key(|n| group_position(&options.order_by_groups, n.group));
        }

        // Nodes of different groups keep their relative order, so only runs of
        // adjacent same-group nodes are reordered.
        for run in self.0.chunk_by_mut(|a, b| a.group == b.group) {
            run.sort_by_cached_key(|n| (key_position(n, &keys, len), tie_break_key(n)));
        }
    }
}
