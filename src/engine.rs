//! Filter-apply driver: runs a grouped condition set over every graph row
//! and produces per-row decorations.

use std::collections::BTreeMap;

use tracing::debug;

use crate::filter::{RowDecoration, RowDecorationBuilder, evaluate_sequence, matched_indices};
use crate::graph_source::GraphSource;
use crate::types::{
  AttributeValue, ColumnRef, Condition, EdgeRef, EntityKind, FilterError, NodeRef,
  parse_conditions,
};

/// Conditions grouped per column for one filter-apply action.
///
/// The owner is the entity table the filter box belongs to; an unqualified
/// column name targets the owner, a `node.`/`edge.` prefix targets that
/// entity. Wire order is preserved within each group (chains are
/// order-sensitive).
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSet {
  owner: EntityKind,
  groups: BTreeMap<String, Vec<Condition>>,
}

/// One per-column condition group with its resolved owning entity.
#[derive(Debug, Clone, Copy)]
pub struct ConditionGroup<'a> {
  pub entity: EntityKind,
  /// Bare column name, prefix stripped.
  pub column: &'a str,
  pub conditions: &'a [Condition],
}

impl FilterSet {
  pub fn new(owner: EntityKind) -> Self {
    Self {
      owner,
      groups: BTreeMap::new(),
    }
  }

  /// Groups `conditions` by their column field.
  pub fn from_conditions(owner: EntityKind, conditions: Vec<Condition>) -> Self {
    let mut groups: BTreeMap<String, Vec<Condition>> = BTreeMap::new();
    for condition in conditions {
      groups
        .entry(condition.column.clone())
        .or_default()
        .push(condition);
    }
    Self { owner, groups }
  }

  /// Parses wire JSON into a grouped filter set.
  pub fn parse(owner: EntityKind, json: &str) -> Result<Self, FilterError> {
    Ok(Self::from_conditions(owner, parse_conditions(json)?))
  }

  pub fn owner(&self) -> EntityKind {
    self.owner
  }

  pub fn is_empty(&self) -> bool {
    self.groups.is_empty()
  }

  /// Per-column groups in column order, entity resolved.
  pub fn groups(&self) -> impl Iterator<Item = ConditionGroup<'_>> {
    self.groups.iter().map(|(raw, conditions)| {
      let (entity, column) = ColumnRef::split(raw);
      ConditionGroup {
        entity: entity.unwrap_or(self.owner),
        column,
        conditions,
      }
    })
  }

  /// The raw grouped map, as serialized into cache fingerprints.
  pub fn as_map(&self) -> &BTreeMap<String, Vec<Condition>> {
    &self.groups
  }
}

/// Decoration for one node row.
pub fn decorate_node(graph: &dyn GraphSource, node: &NodeRef, filters: &FilterSet) -> RowDecoration {
  decorate(filters, EntityKind::Node, &mut |key| {
    graph.node_attribute(node, key)
  })
}

/// Decoration for one edge row.
pub fn decorate_edge(graph: &dyn GraphSource, edge: &EdgeRef, filters: &FilterSet) -> RowDecoration {
  decorate(filters, EntityKind::Edge, &mut |key| {
    graph.edge_attribute(edge, key)
  })
}

/// Folds every condition group into one row decoration.
///
/// A group decides inclusion only for rows of its own entity. A group owned
/// by the other entity still contributes to the row's display intersection
/// when the row carries an array-valued attribute under the group's bare
/// column name.
fn decorate(
  filters: &FilterSet,
  entity: EntityKind,
  attribute: &mut dyn FnMut(&str) -> AttributeValue,
) -> RowDecoration {
  let mut builder = RowDecorationBuilder::new();
  for group in filters.groups() {
    let decides = group.entity == entity;
    match attribute(group.column) {
      AttributeValue::Scalar(text) => {
        if decides {
          builder = builder.scalar_verdict(evaluate_sequence(&text, group.conditions));
        }
      }
      AttributeValue::ArraySeq(items) => {
        let matched = matched_indices(&items, group.conditions);
        builder = builder.array_match(group.column, &items, matched, decides);
      }
    }
  }
  builder.finish()
}

/// Decorations for every row of the graph, keyed by id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOutcome {
  pub nodes: BTreeMap<String, RowDecoration>,
  pub edges: BTreeMap<String, RowDecoration>,
}

impl FilterOutcome {
  /// Ids of node rows that passed, ascending.
  pub fn included_node_ids(&self) -> Vec<&str> {
    self
      .nodes
      .iter()
      .filter(|(_, d)| d.included)
      .map(|(id, _)| id.as_str())
      .collect()
  }

  /// Ids of edge rows that passed, ascending.
  pub fn included_edge_ids(&self) -> Vec<&str> {
    self
      .edges
      .iter()
      .filter(|(_, d)| d.included)
      .map(|(id, _)| id.as_str())
      .collect()
  }
}

/// Applies a filter set to every node and edge row.
///
/// Rows with no applicable condition group stay included and undecorated.
pub fn apply_filters(graph: &dyn GraphSource, filters: &FilterSet) -> FilterOutcome {
  let mut outcome = FilterOutcome::default();
  graph.for_each_node(&mut |node| {
    outcome
      .nodes
      .insert(node.id.clone(), decorate_node(graph, node, filters));
  });
  graph.for_each_edge(&mut |edge| {
    outcome
      .edges
      .insert(edge.id.clone(), decorate_edge(graph, edge, filters));
  });
  debug!(
    nodes_kept = outcome.included_node_ids().len(),
    nodes_total = outcome.nodes.len(),
    edges_kept = outcome.included_edge_ids().len(),
    edges_total = outcome.edges.len(),
    "filters applied"
  );
  outcome
}
