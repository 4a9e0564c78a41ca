/* src/core/src/errors.rs */

use std::fmt;

/// Error for the durable-storage seam.
///
/// Everything above storage absorbs failures and degrades to a default
/// (empty cart, skipped persist), so this type rarely travels far.
#[derive(Debug)]
pub struct StoreError {
  kind: StoreErrorKind,
  message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
  /// The backing store could not be read.
  Read,
  /// The backing store could not be written.
  Write,
  /// The stored value exists but could not be decoded.
  Corrupt,
}

impl StoreErrorKind {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Read => "read",
      Self::Write => "write",
      Self::Corrupt => "corrupt",
    }
  }
}

impl StoreError {
  pub fn new(kind: StoreErrorKind, message: impl Into<String>) -> Self {
    Self { kind, message: message.into() }
  }

  pub fn read(message: impl Into<String>) -> Self {
    Self::new(StoreErrorKind::Read, message)
  }

  pub fn write(message: impl Into<String>) -> Self {
    Self::new(StoreErrorKind::Write, message)
  }

  pub fn corrupt(message: impl Into<String>) -> Self {
    Self::new(StoreErrorKind::Corrupt, message)
  }

  pub fn kind(&self) -> StoreErrorKind {
    self.kind
  }

  pub fn message(&self) -> &str {
    &self.message
  }
}

impl fmt::Display for StoreError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "storage {} error: {}", self.kind.as_str(), self.message)
  }
}

impl std::error::Error for StoreError {}
