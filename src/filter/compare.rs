//! Type-aware scalar comparison.

use std::cmp::Ordering;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::Operator;

/// Date cells in `YYYY-MM-DD` form order correctly as plain strings.
static ISO_DATE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern"));

/// Evaluates one operator against a scalar pair.
///
/// Coercion precedence, first matching branch wins: numeric when both sides
/// parse to finite numbers, ISO date when both sides look like `YYYY-MM-DD`,
/// else case-insensitive string. `contains` is only defined on the string
/// branch and always falls through to it.
pub fn compare(value: &str, operator: Operator, target: &str) -> bool {
  if operator != Operator::Contains {
    if let (Some(a), Some(b)) = (parse_number(value), parse_number(target)) {
      return ordered(a.partial_cmp(&b), operator);
    }
    if ISO_DATE.is_match(value) && ISO_DATE.is_match(target) {
      return ordered(Some(value.cmp(target)), operator);
    }
  }
  let value = value.to_lowercase();
  let target = target.to_lowercase();
  match operator {
    Operator::Contains => value.contains(target.as_str()),
    _ => ordered(Some(value.as_str().cmp(target.as_str())), operator),
  }
}

/// Token-level variant for raw wire input. Unknown operator tokens never
/// match.
pub fn compare_raw(value: &str, operator_token: &str, target: &str) -> bool {
  match Operator::from_token(operator_token) {
    Some(operator) => compare(value, operator, target),
    None => false,
  }
}

fn ordered(ordering: Option<Ordering>, operator: Operator) -> bool {
  let Some(ordering) = ordering else {
    return false;
  };
  match operator {
    Operator::Eq => ordering == Ordering::Equal,
    Operator::Ge => ordering != Ordering::Less,
    Operator::Gt => ordering == Ordering::Greater,
    Operator::Lt => ordering == Ordering::Less,
    Operator::Le => ordering != Ordering::Greater,
    Operator::Ne => ordering != Ordering::Equal,
    Operator::Contains => false,
  }
}

/// Parses a finite number; an empty cell does not count as zero.
fn parse_number(s: &str) -> Option<f64> {
  let trimmed = s.trim();
  if trimmed.is_empty() {
    return None;
  }
  trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}
