use crate::{kind::Of, semigroup_k::SemigroupK};

/// A monoid over a type constructor: a `SemigroupK` with an `empty` value of
/// `F<A>` for every `A`.
///
/// Instances must satisfy, for every `A` and `x: F<A>`:
///
/// ```text
/// combine(empty(), x) == x
/// combine(x, empty()) == x
/// ```
///
/// on top of the associativity of `combine`. Neither law is checked by the
/// compiler; the `algebra_laws` crate verifies them against samples.
///
/// The derived operations `algebra`, `compose` and `reverse` come from
/// `SemigroupK`. Their results also implement `Monoid`/`MonoidK` whenever the
/// witness they were derived from is a `MonoidK`.
pub trait MonoidK: SemigroupK {
  fn empty<A>(&self) -> Of<Self, A>;

  /// Left fold of `xs` starting from `empty`.
  fn combine_all<A>(&self, xs: impl IntoIterator<Item = Of<Self, A>>) -> Of<Self, A> {
    xs.into_iter()
      .fold(self.empty::<A>(), |acc, x| self.combine::<A>(acc, x))
  }

  fn is_empty<A>(&self, x: &Of<Self, A>) -> bool
  where
    Of<Self, A>: PartialEq,
  {
    *x == self.empty::<A>()
  }
}
