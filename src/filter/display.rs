//! Per-row display overrides composed from matched-index sets.
//!
//! A row with several array-valued columns stays index-aligned after
//! filtering: every array column is sliced by the one combined index set,
//! never by its own set alone.

use std::collections::{BTreeMap, BTreeSet};

/// Intersection across per-column matched-index sets, ascending. No sets
/// means no surviving positions.
pub fn combine_index_sets(sets: &[Vec<usize>]) -> Vec<usize> {
  let Some((first, rest)) = sets.split_first() else {
    return Vec::new();
  };
  let mut combined: BTreeSet<usize> = first.iter().copied().collect();
  for set in rest {
    let next: BTreeSet<usize> = set.iter().copied().collect();
    combined = combined.intersection(&next).copied().collect();
  }
  combined.into_iter().collect()
}

/// Projects `items` onto `indices`, skipping out-of-range positions.
pub fn slice_by_indices(items: &[String], indices: &[usize]) -> Vec<String> {
  indices.iter().filter_map(|&i| items.get(i).cloned()).collect()
}

/// Row verdict plus visible sub-sequences for its array columns.
///
/// Produced fresh per filter pass; the source row is never mutated. Display
/// slicing never changes inclusion.
#[derive(Debug, Clone, PartialEq)]
pub struct RowDecoration {
  /// Whether the row passes the filter.
  pub included: bool,
  /// Array column name to its visible items under the row's combined index
  /// set.
  pub overrides: BTreeMap<String, Vec<String>>,
}

impl RowDecoration {
  /// Decoration for a row the filter never named.
  pub fn unaffected() -> Self {
    Self {
      included: true,
      overrides: BTreeMap::new(),
    }
  }
}

/// Accumulates per-column verdicts for one row, then composes its
/// decoration.
#[derive(Debug, Default)]
pub struct RowDecorationBuilder {
  scalar_passes: Vec<bool>,
  array_matches: Vec<ArrayMatch>,
}

#[derive(Debug)]
struct ArrayMatch {
  column: String,
  items: Vec<String>,
  matched: Vec<usize>,
  decides_inclusion: bool,
}

impl RowDecorationBuilder {
  pub fn new() -> Self {
    Self::default()
  }

  /// Records a scalar condition group verdict.
  pub fn scalar_verdict(mut self, passed: bool) -> Self {
    self.scalar_passes.push(passed);
    self
  }

  /// Records an array column's matched indices. `decides_inclusion` is false
  /// for groups that only constrain display (conditions owned by the other
  /// entity type).
  pub fn array_match(
    mut self,
    column: impl Into<String>,
    items: &[String],
    matched: Vec<usize>,
    decides_inclusion: bool,
  ) -> Self {
    self.array_matches.push(ArrayMatch {
      column: column.into(),
      items: items.to_vec(),
      matched,
      decides_inclusion,
    });
    self
  }

  /// Intersects every recorded index set into one combined set, slices each
  /// array column by it, and settles inclusion: all scalar groups passed and
  /// every inclusion-deciding array group matched at least one position.
  pub fn finish(self) -> RowDecoration {
    let included = self.scalar_passes.iter().all(|passed| *passed)
      && self
        .array_matches
        .iter()
        .filter(|m| m.decides_inclusion)
        .all(|m| !m.matched.is_empty());
    let sets: Vec<Vec<usize>> = self
      .array_matches
      .iter()
      .map(|m| m.matched.clone())
      .collect();
    let combined = combine_index_sets(&sets);
    let mut overrides = BTreeMap::new();
    for m in self.array_matches {
      overrides.insert(m.column, slice_by_indices(&m.items, &combined));
    }
    RowDecoration {
      included,
      overrides,
    }
  }
}
