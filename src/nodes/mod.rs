use crate::error::{DecodeError, EncodeError};
use crate::node::Node;
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use serde_json::Value;

mod sort;

pub use sort::*;

/// An ordered collection of nodes. Order is render order.
///
/// Lookups and mutations key on [`Node::id`]. The collection does not enforce
/// unique identities on its own: [`Nodes::upsert`] deduplicates, [`Nodes::append`]
/// does not.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Nodes(Vec<Node>);

fn id_set<'a>(ids: &[&'a str]) -> AHashSet<&'a str> {
    ids.iter().copied().collect()
}

impl Nodes {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Node> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Node> {
        self.0.iter_mut()
    }

    pub fn as_slice(&self) -> &[Node] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<Node> {
        self.0
    }

    /// Identities in render order.
    pub fn ids(&self) -> Vec<&str> {
        self.0.iter().map(Node::id).collect()
    }

    /// The first node with the given identity.
    pub fn find(&self, id: &str) -> Option<&Node> {
        self.0.iter().find(|n| n.id() == id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.0.iter_mut().find(|n| n.id() == id)
    }

    /// Resets every node except the excluded ones. Messages are cleared on all
    /// nodes, excluded or not.
    pub fn reset(&mut self, exclude: &[&str]) {
        let exclude = id_set(exclude);
        for node in &mut self.0 {
            node.messages.clear();
            if !exclude.contains(node.id()) {
                node.reset();
            }
        }
    }

    /// Resets only the listed nodes.
    pub fn reset_nodes(&mut self, reset: &[&str]) {
        let reset = id_set(reset);
        self.0
            .iter_mut()
            .filter(|n| reset.contains(n.id()))
            .for_each(Node::reset);
    }

    /// Resets every node whose identity starts with `prefix`.
    pub fn reset_nodes_with_prefix(&mut self, prefix: &str) {
        self.0
            .iter_mut()
            .filter(|n| n.id().starts_with(prefix))
            .for_each(Node::reset);
    }

    /// Drops every node whose identity is listed, keeping the order of the rest.
    pub fn remove(&mut self, ids: &[&str]) {
        let ids = id_set(ids);
        let before = self.0.len();
        self.0.retain(|n| !ids.contains(n.id()));
        log::trace!("removed {} of {} nodes by id", before - self.0.len(), before);
    }

    /// Drops every node matching `needle` (see [`Node::matches`]).
    pub fn remove_matching(&mut self, needle: &Node) {
        let before = self.0.len();
        self.0.retain(|n| !n.matches(needle));
        log::trace!("removed {} of {} matching nodes", before - self.0.len(), before);
    }

    /// Replaces the node with the same identity in place, or appends it.
    pub fn upsert(&mut self, node: Node) {
        match self.0.iter_mut().find(|n| n.id() == node.id()) {
            Some(existing) => {
                log::trace!("replacing node '{}'", node.id());
                *existing = node;
            }
            None => {
                log::trace!("appending node '{}'", node.id());
                self.0.push(node);
            }
        }
    }

    /// Appends unconditionally, even if a node with the same identity exists.
    pub fn append(&mut self, node: Node) {
        self.0.push(node);
    }

    /// Sets the value of the node with the given identity. Returns `false` if
    /// there is no such node.
    pub fn set_value_attribute(&mut self, id: &str, value: impl Into<Value>) -> bool {
        match self.find_mut(id) {
            Some(node) => {
                node.set_value(value);
                true
            }
            None => false,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, DecodeError> {
        let raw: Vec<Value> = serde_json::from_str(json)?;
        raw.into_iter().map(Node::from_value).collect()
    }

    pub fn to_json(&self) -> Result<String, EncodeError> {
        for node in &self.0 {
            node.resolve_type()?;
        }
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, EncodeError> {
        for node in &self.0 {
            node.resolve_type()?;
        }
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<Vec<Node>> for Nodes {
    fn from(nodes: Vec<Node>) -> Self {
        Self(nodes)
    }
}

impl FromIterator<Node> for Nodes {
    fn from_iter<T: IntoIterator<Item = Node>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Node> for Nodes {
    fn extend<T: IntoIterator<Item = Node>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Nodes {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Nodes {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
