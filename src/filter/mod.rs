//! Attribute filter evaluation: scalar comparison, condition chains, and
//! matched-position tracking for array cells.

mod compare;
mod display;
mod index_match;
mod sequence;

pub use compare::{compare, compare_raw};
pub use display::{RowDecoration, RowDecorationBuilder, combine_index_sets, slice_by_indices};
pub use index_match::matched_indices;
pub use sequence::evaluate_sequence;
