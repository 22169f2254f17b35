//! Recompute gate keyed by a fingerprint of selection, filters, and visible
//! columns.

use serde::Serialize;
use tracing::instrument;

use crate::engine::FilterSet;
use crate::types::{Condition, EntityKind, SelectionSet};

/// Serialized key components. Field order fixes the layout.
#[derive(Serialize)]
struct FingerprintParts<'a> {
  owner: EntityKind,
  node_ids: Vec<&'a str>,
  edge_ids: Vec<&'a str>,
  filters: &'a std::collections::BTreeMap<String, Vec<Condition>>,
  visible_columns: Vec<&'a str>,
}

/// Stable key over the current selection, filter set, and visible columns.
///
/// Equal state always serializes to the same string: ids iterate ascending,
/// the filter map iterates in key order, and the column list is sorted here.
#[instrument(level = "trace", skip_all)]
pub fn fingerprint(
  selection: &SelectionSet,
  filters: &FilterSet,
  visible_columns: &[String],
) -> String {
  let mut columns: Vec<&str> = visible_columns.iter().map(String::as_str).collect();
  columns.sort_unstable();
  let parts = FingerprintParts {
    owner: filters.owner(),
    node_ids: selection.node_ids().collect(),
    edge_ids: selection.edge_ids().collect(),
    filters: filters.as_map(),
    visible_columns: columns,
  };
  serde_json::to_string(&parts).unwrap_or_default()
}

/// Last-key memoization gate.
///
/// An unchanged key means the caller skips the whole downstream render, not
/// just the filtering. Column-set resets, filter clears, and externally
/// injected filter results must call [FilterCache::invalidate] even when the
/// surface key did not change.
#[derive(Debug, Default)]
pub struct FilterCache {
  last_key: Option<String>,
}

impl FilterCache {
  pub fn new() -> Self {
    Self::default()
  }

  /// True when `key` matches the recorded key and recompute can be skipped.
  pub fn should_skip(&self, key: &str) -> bool {
    let hit = self.last_key.as_deref() == Some(key);
    tracing::debug!(hit, "filter cache probe");
    hit
  }

  /// Records the key of the state that was just rendered.
  pub fn record(&mut self, key: impl Into<String>) {
    self.last_key = Some(key.into());
  }

  /// Drops the recorded key; the next probe recomputes unconditionally.
  pub fn invalidate(&mut self) {
    tracing::debug!("filter cache invalidated");
    self.last_key = None;
  }
}
