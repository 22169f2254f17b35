//! Narrow interfaces to the hosting graph: read-only iteration and attribute
//! lookup in, selection application out.
//!
//! The host graph (and its selection state) is always passed in explicitly;
//! nothing here reaches for a shared global.

use std::collections::BTreeMap;

use crate::types::{AttributeValue, ColumnType, EdgeRef, NodeRef, SelectionSet};

/// Read-only view of the hosting graph.
pub trait GraphSource {
  /// Visits every node.
  fn for_each_node(&self, visit: &mut dyn FnMut(&NodeRef));

  /// Visits every edge.
  fn for_each_edge(&self, visit: &mut dyn FnMut(&EdgeRef));

  /// Attribute of `node` under `key`. A missing attribute is the empty
  /// scalar.
  fn node_attribute(&self, node: &NodeRef, key: &str) -> AttributeValue;

  /// Attribute of `edge` under `key`.
  fn edge_attribute(&self, edge: &EdgeRef, key: &str) -> AttributeValue;

  /// Source and target refs of `edge`.
  fn endpoints(&self, edge: &EdgeRef) -> (NodeRef, NodeRef) {
    (
      NodeRef::new(edge.source.clone()),
      NodeRef::new(edge.target.clone()),
    )
  }
}

/// Receives a computed selection. The caller sets exactly the closure it
/// computed, once per invocation.
pub trait SelectionSink {
  fn select_node(&mut self, node: &NodeRef);
  fn select_edge(&mut self, edge: &EdgeRef);
}

/// Pushes a selection into `sink`, edges before nodes.
///
/// Node selection handlers in live hosts may re-enter and select incident
/// edges; with edges applied first the sink ends up holding exactly
/// `selection`.
pub fn apply_selection(sink: &mut dyn SelectionSink, selection: &SelectionSet) {
  for edge in selection.edges() {
    sink.select_edge(edge);
  }
  for node in selection.nodes() {
    sink.select_node(node);
  }
}

/// In-memory graph with typed attribute columns.
///
/// Backs the test suites and headless hosts; live editors implement
/// [GraphSource] over their own model instead.
#[derive(Debug, Default)]
pub struct MemoryGraph {
  nodes: Vec<NodeRef>,
  edges: Vec<EdgeRef>,
  node_columns: BTreeMap<String, ColumnType>,
  edge_columns: BTreeMap<String, ColumnType>,
  node_cells: BTreeMap<(String, String), String>,
  edge_cells: BTreeMap<(String, String), String>,
}

impl MemoryGraph {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn add_node(&mut self, id: &str) {
    self.nodes.push(NodeRef::new(id));
  }

  pub fn add_edge(&mut self, id: &str, source: &str, target: &str) {
    self.edges.push(EdgeRef::new(id, source, target));
  }

  /// Declares a node column's value shape. Undeclared columns fall back to
  /// legacy shape inference.
  pub fn declare_node_column(&mut self, name: &str, column_type: ColumnType) {
    self.node_columns.insert(name.to_string(), column_type);
  }

  /// Declares an edge column's value shape.
  pub fn declare_edge_column(&mut self, name: &str, column_type: ColumnType) {
    self.edge_columns.insert(name.to_string(), column_type);
  }

  pub fn set_node_attribute(&mut self, id: &str, key: &str, raw: &str) {
    self
      .node_cells
      .insert((id.to_string(), key.to_string()), raw.to_string());
  }

  pub fn set_edge_attribute(&mut self, id: &str, key: &str, raw: &str) {
    self
      .edge_cells
      .insert((id.to_string(), key.to_string()), raw.to_string());
  }
}

impl GraphSource for MemoryGraph {
  fn for_each_node(&self, visit: &mut dyn FnMut(&NodeRef)) {
    for node in &self.nodes {
      visit(node);
    }
  }

  fn for_each_edge(&self, visit: &mut dyn FnMut(&EdgeRef)) {
    for edge in &self.edges {
      visit(edge);
    }
  }

  fn node_attribute(&self, node: &NodeRef, key: &str) -> AttributeValue {
    let raw = self
      .node_cells
      .get(&(node.id.clone(), key.to_string()))
      .map(String::as_str);
    match self.node_columns.get(key) {
      Some(column_type) => AttributeValue::read(raw, *column_type),
      None => AttributeValue::infer(raw),
    }
  }

  fn edge_attribute(&self, edge: &EdgeRef, key: &str) -> AttributeValue {
    let raw = self
      .edge_cells
      .get(&(edge.id.clone(), key.to_string()))
      .map(String::as_str);
    match self.edge_columns.get(key) {
      Some(column_type) => AttributeValue::read(raw, *column_type),
      None => AttributeValue::infer(raw),
    }
  }
}
