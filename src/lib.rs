//! # netgrid-filter
//!
//! Attribute filter and selection-closure engine for graph/network editors.
//!
//! The hosting editor delegates drawing, layout, and event wiring to its
//! graph toolkit; this crate owns the rule evaluation behind the attribute
//! table:
//!
//! - typed scalar comparison ([compare]) folded over ordered condition
//!   chains ([evaluate_sequence]),
//! - matched-position tracking for array-valued cells ([matched_indices])
//!   and the display-override composition that keeps a row's array columns
//!   index-aligned after filtering,
//! - the selection closure ([closure()]) that keeps node and edge selection
//!   mutually consistent,
//! - a fingerprint cache ([FilterCache]) that gates re-rendering on
//!   unchanged state.
//!
//! The host graph is consumed through [GraphSource] and fed through
//! [SelectionSink]; everything is synchronous and pure over its inputs.

pub mod cache;
pub mod closure;
pub mod engine;
#[cfg(test)]
mod engine_test;
pub mod filter;
pub mod graph_source;
pub mod types;

pub use cache::{FilterCache, fingerprint};
pub use closure::closure;
pub use engine::{ConditionGroup, FilterOutcome, FilterSet, apply_filters, decorate_edge, decorate_node};
pub use filter::{
  RowDecoration, RowDecorationBuilder, combine_index_sets, compare, compare_raw,
  evaluate_sequence, matched_indices, slice_by_indices,
};
pub use graph_source::{GraphSource, MemoryGraph, SelectionSink, apply_selection};
pub use types::{
  AttributeValue, ColumnRef, ColumnType, Condition, EdgeRef, EntityKind, FilterError, LogicalOp,
  NodeRef, Operator, SelectionSet, parse_conditions,
};
