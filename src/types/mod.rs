//! Core data types: filter conditions, tagged attribute values, and
//! node/edge selections.
//!
//! Conditions are transient per filter-apply action; selections are
//! recomputed on every selection-change event.

mod attribute_value;
#[cfg(test)]
mod attribute_value_test;
mod condition;
mod selection;

pub use attribute_value::{AttributeValue, ColumnType};
pub use condition::{
  ColumnRef, Condition, EntityKind, FilterError, LogicalOp, Operator, parse_conditions,
};
pub use selection::{EdgeRef, NodeRef, SelectionSet};
