use crate::{error::AlgebraResult, make_algebra_error};

/// An algebraic semigroup over the element type `Elem`, carried by a witness
/// value rather than by the element type itself.
///
/// `combine` must be associative.
pub trait Semigroup {
  type Elem;

  fn combine(&self, x: Self::Elem, y: Self::Elem) -> Self::Elem;

  /// Combines `n` copies of `x`. There is no identity to return for `n == 0`,
  /// so that case is an error.
  fn combine_n(&self, x: Self::Elem, n: usize) -> AlgebraResult<Self::Elem>
  where
    Self::Elem: Clone,
  {
    check_positive_count(n)?;
    Ok(repeated_combine(x, n, |a, b| self.combine(a, b)))
  }

  /// Left fold of `xs` with `combine`, or `None` if `xs` is empty.
  fn combine_all_option(&self, xs: impl IntoIterator<Item = Self::Elem>) -> Option<Self::Elem> {
    xs.into_iter().reduce(|acc, x| self.combine(acc, x))
  }
}

pub(crate) fn check_positive_count(n: usize) -> AlgebraResult<()> {
  if n == 0 {
    return Err(make_algebra_error!(
      "combine_n requires a positive repetition count, got {}",
      n
    ));
  }
  Ok(())
}

/// Combines `n >= 1` copies of `x` in O(log n) calls to `combine`.
///
/// Every operand is a power of `x`, so associativity alone makes the
/// regrouping safe, even when `combine` does not commute.
pub(crate) fn repeated_combine<T: Clone>(x: T, n: usize, combine: impl Fn(T, T) -> T) -> T {
  debug_assert!(n > 0);
  let mut base = x;
  let mut k = n;
  while k & 1 == 0 {
    base = combine(base.clone(), base);
    k >>= 1;
  }

  let mut acc = base.clone();
  k >>= 1;
  while k != 0 {
    base = combine(base.clone(), base);
    if k & 1 == 1 {
      acc = combine(acc, base.clone());
    }
    k >>= 1;
  }
  acc
}
