use crate::semigroup::Semigroup;

/// An algebraic monoid: a semigroup with an identity element.
///
/// `combine(empty(), x) == x == combine(x, empty())` must hold for every `x`.
pub trait Monoid: Semigroup {
  /// The identity element of the monoid.
  fn empty(&self) -> Self::Elem;

  fn combine_all(&self, xs: impl IntoIterator<Item = Self::Elem>) -> Self::Elem {
    xs.into_iter().fold(self.empty(), |acc, x| self.combine(acc, x))
  }

  fn is_empty(&self, x: &Self::Elem) -> bool
  where
    Self::Elem: PartialEq,
  {
    *x == self.empty()
  }
}
