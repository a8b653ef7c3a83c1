use std::fmt::Display;

/// The algebraic laws a `SemigroupK`/`MonoidK` instance is checked against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Law {
  Associativity,
  LeftIdentity,
  RightIdentity,
  /// `algebra().empty()` agrees with the witness's `empty`.
  AlgebraEmpty,
  /// `algebra().combine(x, y)` agrees with the witness's `combine`.
  AlgebraCombine,
  /// `compose().empty()` agrees with the outer `empty`.
  ComposeEmpty,
  /// `compose().combine(p, q)` agrees with the outer `combine`.
  ComposeCombine,
  /// `reverse().combine(x, y) == combine(y, x)`.
  ReverseCombine,
  /// `combine_n(x, n)` agrees with combining `n` copies of `x` one by one.
  CombineN,
  /// `combine_all(xs)` agrees with folding `xs` from `empty`.
  CombineAll,
}

impl Law {
  pub const fn name(&self) -> &'static str {
    match self {
      Self::Associativity => "associativity",
      Self::LeftIdentity => "left identity",
      Self::RightIdentity => "right identity",
      Self::AlgebraEmpty => "derived monoid empty",
      Self::AlgebraCombine => "derived monoid combine",
      Self::ComposeEmpty => "composed empty",
      Self::ComposeCombine => "composed combine",
      Self::ReverseCombine => "reversed combine",
      Self::CombineN => "combine_n",
      Self::CombineAll => "combine_all",
    }
  }
}

impl Display for Law {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.name())
  }
}
