//! Tagged attribute values read from the graph collaborator.
//!
//! The value shape (scalar vs array) is decided once at attribute-read time,
//! either from a declared [ColumnType] or through the legacy shape inference
//! kept for hosts that never declared their columns.

/// Declared value shape for a column, applied at attribute-read time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnType {
  #[default]
  Scalar,
  /// Multi-line cell: split on newline, keeping empty segments.
  NewlineArray,
  /// Pipe-delimited cell: split on `|`, keeping empty segments.
  PipeArray,
}

/// A scalar or array-valued attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
  Scalar(String),
  ArraySeq(Vec<String>),
}

impl AttributeValue {
  /// Reads a raw cell under a declared column type. A missing cell
  /// normalizes to the empty scalar.
  pub fn read(raw: Option<&str>, column_type: ColumnType) -> Self {
    let raw = raw.unwrap_or("");
    match column_type {
      ColumnType::Scalar => Self::Scalar(raw.to_string()),
      ColumnType::NewlineArray => Self::ArraySeq(split_keeping_empty(raw, '\n')),
      ColumnType::PipeArray => Self::ArraySeq(split_keeping_empty(raw, '|')),
    }
  }

  /// Legacy shape inference for cells without a declared column type.
  ///
  /// A cell containing a newline splits on newline, else a cell containing a
  /// pipe splits on pipe, anything else is a scalar. Ingestion-boundary
  /// compatibility only; declared column types take precedence.
  pub fn infer(raw: Option<&str>) -> Self {
    let raw = raw.unwrap_or("");
    if raw.contains('\n') {
      Self::read(Some(raw), ColumnType::NewlineArray)
    } else if raw.contains('|') {
      Self::read(Some(raw), ColumnType::PipeArray)
    } else {
      Self::Scalar(raw.to_string())
    }
  }

  pub fn is_array(&self) -> bool {
    matches!(self, Self::ArraySeq(_))
  }

  /// Scalar text, or `None` for arrays.
  pub fn as_scalar(&self) -> Option<&str> {
    match self {
      Self::Scalar(text) => Some(text),
      Self::ArraySeq(_) => None,
    }
  }

  /// Array items, or `None` for scalars.
  pub fn as_items(&self) -> Option<&[String]> {
    match self {
      Self::Scalar(_) => None,
      Self::ArraySeq(items) => Some(items),
    }
  }
}

impl From<Vec<String>> for AttributeValue {
  /// An explicit array of scalars is already tagged.
  fn from(items: Vec<String>) -> Self {
    Self::ArraySeq(items)
  }
}

impl From<&str> for AttributeValue {
  fn from(text: &str) -> Self {
    Self::Scalar(text.to_string())
  }
}

fn split_keeping_empty(raw: &str, separator: char) -> Vec<String> {
  raw.split(separator).map(str::to_string).collect()
}
