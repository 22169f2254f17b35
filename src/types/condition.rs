//! Filter condition wire types.
//!
//! Conditions arrive from the filter UI as JSON objects
//! `{column, operator, value, logicalOp}`, are evaluated once per
//! filter-apply action, and are not retained afterwards.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Comparison operator carried by a [Condition].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
  #[serde(rename = "=")]
  Eq,
  #[serde(rename = ">=")]
  Ge,
  #[serde(rename = ">")]
  Gt,
  #[serde(rename = "<")]
  Lt,
  #[serde(rename = "<=")]
  Le,
  #[serde(rename = "<>")]
  Ne,
  #[serde(rename = "contains")]
  Contains,
}

impl Operator {
  /// Parses a wire token. Unknown tokens yield `None` so callers can treat
  /// them as never matching.
  pub fn from_token(token: &str) -> Option<Self> {
    match token {
      "=" => Some(Self::Eq),
      ">=" => Some(Self::Ge),
      ">" => Some(Self::Gt),
      "<" => Some(Self::Lt),
      "<=" => Some(Self::Le),
      "<>" => Some(Self::Ne),
      "contains" => Some(Self::Contains),
      _ => None,
    }
  }

  /// The wire token for this operator.
  pub fn token(&self) -> &'static str {
    match self {
      Self::Eq => "=",
      Self::Ge => ">=",
      Self::Gt => ">",
      Self::Lt => "<",
      Self::Le => "<=",
      Self::Ne => "<>",
      Self::Contains => "contains",
    }
  }
}

/// How a condition's result merges with the **next** condition in the chain.
///
/// A condition's logical op governs the fold step for the condition that
/// follows it, not the one before it. `Not` merges as "and not".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogicalOp {
  And,
  #[default]
  Or,
  Not,
}

impl LogicalOp {
  /// Parses a wire token (`AND`, `OR`, `NOT`).
  pub fn from_token(token: &str) -> Option<Self> {
    match token {
      "AND" => Some(Self::And),
      "OR" => Some(Self::Or),
      "NOT" => Some(Self::Not),
      _ => None,
    }
  }

  /// The wire token for this op.
  pub fn token(&self) -> &'static str {
    match self {
      Self::And => "AND",
      Self::Or => "OR",
      Self::Not => "NOT",
    }
  }
}

/// One filter clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
  /// Column name, optionally qualified as `entityType.columnName`.
  pub column: String,
  pub operator: Operator,
  /// Comparison target, always a string on the wire.
  pub value: String,
  /// Merge rule for the condition that follows this one. `OR` when absent.
  #[serde(default)]
  pub logical_op: LogicalOp,
}

impl Condition {
  pub fn new(
    column: impl Into<String>,
    operator: Operator,
    value: impl Into<String>,
    logical_op: LogicalOp,
  ) -> Self {
    Self {
      column: column.into(),
      operator,
      value: value.into(),
      logical_op,
    }
  }

  /// Parsed form of this condition's column field.
  pub fn column_ref(&self) -> ColumnRef {
    ColumnRef::parse(&self.column)
  }
}

/// Row entity a column belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
  Node,
  Edge,
}

impl EntityKind {
  pub(crate) fn from_prefix(prefix: &str) -> Option<Self> {
    match prefix {
      "node" => Some(Self::Node),
      "edge" => Some(Self::Edge),
      _ => None,
    }
  }
}

/// Parsed form of a condition's `column` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRef {
  /// Qualifying entity, when the wire form was `entityType.columnName`.
  pub entity: Option<EntityKind>,
  /// Bare column name.
  pub name: String,
}

impl ColumnRef {
  /// Parses `name` or `entityType.name`. A prefix that is not a known entity
  /// type stays part of the column name.
  pub fn parse(raw: &str) -> Self {
    let (entity, name) = Self::split(raw);
    Self {
      entity,
      name: name.to_string(),
    }
  }

  /// Borrowing variant of [ColumnRef::parse].
  pub fn split(raw: &str) -> (Option<EntityKind>, &str) {
    if let Some((prefix, rest)) = raw.split_once('.') {
      if !rest.is_empty() {
        if let Some(entity) = EntityKind::from_prefix(prefix) {
          return (Some(entity), rest);
        }
      }
    }
    (None, raw)
  }
}

/// Errors produced when ingesting filter conditions from the wire.
///
/// Evaluation itself never errors; ambiguous input there degrades to "no
/// match" instead.
#[derive(Debug, Error)]
pub enum FilterError {
  #[error("invalid condition JSON: {0}")]
  InvalidJson(#[from] serde_json::Error),
  #[error("unknown operator token: {0:?}")]
  UnknownOperator(String),
  #[error("unknown logical op token: {0:?}")]
  UnknownLogicalOp(String),
}

/// Parses a JSON array of wire conditions.
///
/// Missing `column`/`value` fields degrade to empty strings and numeric
/// `value`s are stringified; an unrecognized `operator` or `logicalOp` token
/// is rejected.
pub fn parse_conditions(json: &str) -> Result<Vec<Condition>, FilterError> {
  let raw: Vec<serde_json::Value> = serde_json::from_str(json)?;
  raw.iter().map(parse_condition_value).collect()
}

fn parse_condition_value(value: &serde_json::Value) -> Result<Condition, FilterError> {
  let column = value
    .get("column")
    .and_then(serde_json::Value::as_str)
    .unwrap_or_default()
    .to_string();
  let op_token = value
    .get("operator")
    .and_then(serde_json::Value::as_str)
    .unwrap_or_default();
  let operator = Operator::from_token(op_token)
    .ok_or_else(|| FilterError::UnknownOperator(op_token.to_string()))?;
  let target = match value.get("value") {
    Some(serde_json::Value::String(s)) => s.clone(),
    Some(serde_json::Value::Number(n)) => n.to_string(),
    _ => String::new(),
  };
  let logical_op = match value.get("logicalOp").and_then(serde_json::Value::as_str) {
    None => LogicalOp::default(),
    Some(token) => LogicalOp::from_token(token)
      .ok_or_else(|| FilterError::UnknownLogicalOp(token.to_string()))?,
  };
  Ok(Condition {
    column,
    operator,
    value: target,
    logical_op,
  })
}
