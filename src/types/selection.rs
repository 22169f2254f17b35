//! Node/edge references and the selection set they form.

use std::collections::BTreeMap;

/// Reference to a graph node by stable id.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct NodeRef {
  pub id: String,
}

impl NodeRef {
  pub fn new(id: impl Into<String>) -> Self {
    Self { id: id.into() }
  }
}

/// Reference to a graph edge by stable id, carrying its endpoint node ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRef {
  pub id: String,
  pub source: String,
  pub target: String,
}

impl EdgeRef {
  pub fn new(id: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      source: source.into(),
      target: target.into(),
    }
  }
}

/// A set of selected nodes and edges, keyed by id.
///
/// Iteration order is ascending by id, so downstream serializations are
/// stable. Recomputed on every selection-change event, never retained across
/// graph reloads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionSet {
  nodes: BTreeMap<String, NodeRef>,
  edges: BTreeMap<String, EdgeRef>,
}

impl SelectionSet {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn insert_node(&mut self, node: NodeRef) {
    self.nodes.insert(node.id.clone(), node);
  }

  pub fn insert_edge(&mut self, edge: EdgeRef) {
    self.edges.insert(edge.id.clone(), edge);
  }

  pub fn contains_node(&self, id: &str) -> bool {
    self.nodes.contains_key(id)
  }

  pub fn contains_edge(&self, id: &str) -> bool {
    self.edges.contains_key(id)
  }

  /// Selected nodes, ascending by id.
  pub fn nodes(&self) -> impl Iterator<Item = &NodeRef> {
    self.nodes.values()
  }

  /// Selected edges, ascending by id.
  pub fn edges(&self) -> impl Iterator<Item = &EdgeRef> {
    self.edges.values()
  }

  pub fn node_ids(&self) -> impl Iterator<Item = &str> {
    self.nodes.keys().map(String::as_str)
  }

  pub fn edge_ids(&self) -> impl Iterator<Item = &str> {
    self.edges.keys().map(String::as_str)
  }

  pub fn node_count(&self) -> usize {
    self.nodes.len()
  }

  pub fn edge_count(&self) -> usize {
    self.edges.len()
  }

  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty() && self.edges.is_empty()
  }
}
