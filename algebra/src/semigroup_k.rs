use crate::{
  compose::Composed,
  derived::Algebra,
  error::AlgebraResult,
  kind::{Kind1, Of},
  reverse::Reversed,
  semigroup::{check_positive_count, repeated_combine},
};

/// A semigroup over a type constructor: `F<A>` can be combined for every `A`,
/// independent of what `A` is.
///
/// `combine` must be associative for every `A`.
pub trait SemigroupK: Kind1 + Clone {
  fn combine<A>(&self, x: Of<Self, A>, y: Of<Self, A>) -> Of<Self, A>;

  /// Combines `n` copies of `x`. Fails for `n == 0`, since a bare semigroup
  /// has no identity.
  fn combine_n<A>(&self, x: Of<Self, A>, n: usize) -> AlgebraResult<Of<Self, A>>
  where
    Of<Self, A>: Clone,
  {
    check_positive_count(n)?;
    Ok(repeated_combine(x, n, |a, b| self.combine::<A>(a, b)))
  }

  fn combine_all_option<A>(&self, xs: impl IntoIterator<Item = Of<Self, A>>) -> Option<Of<Self, A>> {
    xs.into_iter().reduce(|acc, x| self.combine::<A>(acc, x))
  }

  /// The semigroup over the concrete type `F<A>`. When `Self` is also a
  /// `MonoidK`, the returned witness is a `Monoid` as well.
  fn algebra<A>(&self) -> Algebra<Self, A> {
    Algebra::new(self.clone())
  }

  /// This instance lifted to `F<G<_>>`. Only the outer layer is combined; `G`
  /// needs no instance of its own.
  fn compose<G: Kind1>(&self) -> Composed<Self, G> {
    Composed::new(self.clone())
  }

  /// This instance with the arguments of `combine` swapped.
  fn reverse(&self) -> Reversed<Self> {
    Reversed::new(self.clone())
  }
}
