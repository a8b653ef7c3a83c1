use std::{error::Error, fmt::Display};

use crate::law::Law;

/// A counterexample to one of the laws.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LawViolation {
  law: Law,
  detail: String,
}

impl LawViolation {
  pub fn new(law: Law, detail: String) -> Self {
    LawViolation { law, detail }
  }

  pub fn law(&self) -> Law {
    self.law
  }

  pub fn detail(&self) -> &str {
    &self.detail
  }
}

impl Error for LawViolation {}

impl Display for LawViolation {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "Error: {} law violated: {}", self.law, self.detail)
  }
}

#[macro_export]
macro_rules! make_law_violation {
  ($law:expr, $($args:expr),+) => {
    $crate::error::LawViolation::new($law, format!($($args),+))
  };
}

pub type LawResult<T> = Result<T, LawViolation>;
