//! Condition chains over array-valued cells, tracking matching positions.

use std::collections::BTreeSet;

use crate::types::{Condition, LogicalOp};

use super::compare::compare;

/// Positions in `items` that satisfy the condition chain.
///
/// Folds left with the same carried-op rule as
/// [evaluate_sequence](super::sequence::evaluate_sequence), but over index
/// sets: `And` intersects, `Or` unions, `Not` subtracts. Output is ascending
/// and duplicate-free. Empty `items` or an empty chain match nothing.
pub fn matched_indices(items: &[String], conditions: &[Condition]) -> Vec<usize> {
  if items.is_empty() {
    return Vec::new();
  }
  let Some((first, rest)) = conditions.split_first() else {
    return Vec::new();
  };
  let mut running = indices_matching(items, first);
  let mut pending_op = first.logical_op;
  for condition in rest {
    let matched = indices_matching(items, condition);
    running = fold_set_step(running, pending_op, &matched);
    pending_op = condition.logical_op;
  }
  running.into_iter().collect()
}

/// Index set satisfying a single condition.
fn indices_matching(items: &[String], condition: &Condition) -> BTreeSet<usize> {
  items
    .iter()
    .enumerate()
    .filter(|(_, item)| compare(item, condition.operator, &condition.value))
    .map(|(i, _)| i)
    .collect()
}

/// One set fold step under the carried op.
pub(crate) fn fold_set_step(
  running: BTreeSet<usize>,
  op: LogicalOp,
  next: &BTreeSet<usize>,
) -> BTreeSet<usize> {
  match op {
    LogicalOp::And => running.intersection(next).copied().collect(),
    LogicalOp::Or => running.union(next).copied().collect(),
    LogicalOp::Not => running.difference(next).copied().collect(),
  }
}
