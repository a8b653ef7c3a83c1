use std::{error::Error, fmt::Display};

#[derive(Debug)]
pub struct AlgebraError {
  message: String,
}

impl AlgebraError {
  pub fn new(message: String) -> Self {
    AlgebraError { message }
  }
}

impl Error for AlgebraError {}

impl Display for AlgebraError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "Error: {}", self.message)
  }
}

#[macro_export]
macro_rules! make_algebra_error {
  ($($args:expr),+) => {
    $crate::error::AlgebraError::new(format!($($args),+)).into()
  };
}

pub type AlgebraResult<T> = Result<T, Box<dyn Error + Send + Sync + 'static>>;
