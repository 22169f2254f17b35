//! Tests for the filter-apply driver.

use crate::engine::{FilterSet, apply_filters, decorate_edge, decorate_node};
use crate::filter::RowDecoration;
use crate::graph_source::MemoryGraph;
use crate::types::{ColumnType, Condition, EdgeRef, EntityKind, LogicalOp, NodeRef, Operator};

/// Two proteins linked by one interaction edge with aligned array columns.
fn interaction_graph() -> MemoryGraph {
  let mut g = MemoryGraph::new();
  g.add_node("n1");
  g.add_node("n2");
  g.add_edge("e1", "n1", "n2");
  g.declare_node_column("name", ColumnType::Scalar);
  g.declare_node_column("aliases", ColumnType::PipeArray);
  g.declare_edge_column("kind", ColumnType::NewlineArray);
  g.declare_edge_column("score", ColumnType::PipeArray);
  g.set_node_attribute("n1", "name", "apple");
  g.set_node_attribute("n1", "aliases", "malus|fruit");
  g.set_node_attribute("n2", "name", "banana");
  g.set_node_attribute("n2", "aliases", "musa|fruit");
  g.set_edge_attribute("e1", "kind", "binds\ninhibits\nactivates");
  g.set_edge_attribute("e1", "score", "0.9|0.2|0.8");
  g
}

fn cond(column: &str, operator: Operator, value: &str) -> Condition {
  Condition::new(column, operator, value, LogicalOp::Or)
}

#[test]
fn scalar_filter_keeps_matching_rows() {
  let g = interaction_graph();
  let filters = FilterSet::from_conditions(
    EntityKind::Node,
    vec![cond("name", Operator::Contains, "app")],
  );
  let outcome = apply_filters(&g, &filters);
  assert_eq!(outcome.included_node_ids(), vec!["n1"]);
  assert!(!outcome.nodes["n2"].included);
}

#[test]
fn node_filter_leaves_edge_rows_alone() {
  let g = interaction_graph();
  let filters = FilterSet::from_conditions(
    EntityKind::Node,
    vec![cond("name", Operator::Contains, "app")],
  );
  let outcome = apply_filters(&g, &filters);
  assert_eq!(outcome.included_edge_ids(), vec!["e1"]);
}

#[test]
fn empty_filter_set_keeps_everything_undecorated() {
  let g = interaction_graph();
  let filters = FilterSet::new(EntityKind::Node);
  assert!(filters.is_empty());
  let outcome = apply_filters(&g, &filters);
  assert_eq!(outcome.nodes["n1"], RowDecoration::unaffected());
  assert_eq!(outcome.edges["e1"], RowDecoration::unaffected());
}

#[test]
fn array_filter_requires_a_matching_position() {
  let g = interaction_graph();
  let filters = FilterSet::from_conditions(
    EntityKind::Node,
    vec![cond("aliases", Operator::Eq, "malus")],
  );
  let outcome = apply_filters(&g, &filters);
  assert_eq!(outcome.included_node_ids(), vec!["n1"]);
  assert_eq!(
    outcome.nodes["n1"].overrides["aliases"],
    vec!["malus".to_string()]
  );
  assert!(outcome.nodes["n2"].overrides["aliases"].is_empty());
}

#[test]
fn aligned_edge_columns_slice_together() {
  // kind and score are positionally aligned; filtering on both must keep
  // the same positions in each.
  let g = interaction_graph();
  let filters = FilterSet::from_conditions(
    EntityKind::Edge,
    vec![
      cond("kind", Operator::Ne, "inhibits"),
      cond("score", Operator::Ge, "0.5"),
    ],
  );
  let edge = EdgeRef::new("e1", "n1", "n2");
  let decoration = decorate_edge(&g, &edge, &filters);
  assert!(decoration.included);
  // kind matches {0, 2}, score matches {0, 2}; combined {0, 2}.
  assert_eq!(
    decoration.overrides["kind"],
    vec!["binds".to_string(), "activates".to_string()]
  );
  assert_eq!(
    decoration.overrides["score"],
    vec!["0.9".to_string(), "0.8".to_string()]
  );
}

#[test]
fn cross_entity_group_constrains_display_only() {
  // A node-owned condition on `kind` cannot exclude the edge row, but it
  // narrows which positions of the edge's `kind` array stay visible.
  let g = interaction_graph();
  let filters = FilterSet::from_conditions(
    EntityKind::Node,
    vec![cond("kind", Operator::Eq, "binds")],
  );
  let edge = EdgeRef::new("e1", "n1", "n2");
  let decoration = decorate_edge(&g, &edge, &filters);
  assert!(decoration.included);
  assert_eq!(decoration.overrides["kind"], vec!["binds".to_string()]);

  // Even a no-match display constraint keeps the row included.
  let filters = FilterSet::from_conditions(
    EntityKind::Node,
    vec![cond("kind", Operator::Eq, "nothing")],
  );
  let decoration = decorate_edge(&g, &edge, &filters);
  assert!(decoration.included);
  assert!(decoration.overrides["kind"].is_empty());
}

#[test]
fn qualified_column_targets_the_named_entity() {
  // An edge-owned filter with a node-qualified group decides node rows.
  let g = interaction_graph();
  let filters = FilterSet::from_conditions(
    EntityKind::Edge,
    vec![cond("node.name", Operator::Eq, "banana")],
  );
  let outcome = apply_filters(&g, &filters);
  assert_eq!(outcome.included_node_ids(), vec!["n2"]);
  assert_eq!(outcome.included_edge_ids(), vec!["e1"]);
}

#[test]
fn missing_scalar_attribute_fails_closed() {
  let g = interaction_graph();
  let filters = FilterSet::from_conditions(
    EntityKind::Node,
    vec![cond("unknown", Operator::Contains, "x")],
  );
  let node = NodeRef::new("n1");
  assert!(!decorate_node(&g, &node, &filters).included);
}

#[test]
fn conditions_group_by_column_preserving_order() {
  let filters = FilterSet::from_conditions(
    EntityKind::Node,
    vec![
      cond("name", Operator::Contains, "a"),
      cond("degree", Operator::Gt, "1"),
      Condition::new("name", Operator::Ne, "banana", LogicalOp::And),
    ],
  );
  let groups: Vec<_> = filters.groups().collect();
  assert_eq!(groups.len(), 2);
  assert_eq!(groups[0].column, "degree");
  assert_eq!(groups[1].column, "name");
  assert_eq!(groups[1].conditions.len(), 2);
  assert_eq!(groups[1].conditions[0].value, "a");
}

#[test]
fn parse_builds_a_filter_set_from_wire_json() {
  let json = r#"[{"column":"name","operator":"contains","value":"app"}]"#;
  let filters = FilterSet::parse(EntityKind::Node, json).unwrap();
  assert_eq!(filters.owner(), EntityKind::Node);
  assert_eq!(filters.groups().count(), 1);
}

#[test]
fn scalar_chain_folds_within_its_group() {
  let g = interaction_graph();
  let filters = FilterSet::from_conditions(
    EntityKind::Node,
    vec![
      Condition::new("name", Operator::Contains, "app", LogicalOp::Or),
      Condition::new("name", Operator::Eq, "banana", LogicalOp::And),
    ],
  );
  let outcome = apply_filters(&g, &filters);
  // n1 passes via the first condition, n2 via the second.
  assert_eq!(outcome.included_node_ids(), vec!["n1", "n2"]);
}
