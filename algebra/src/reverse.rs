use crate::{
  kind::{Kind1, Of},
  monoid_k::MonoidK,
  semigroup_k::SemigroupK,
};

/// A witness whose `combine` takes its arguments in the opposite order.
///
/// Reversing keeps associativity and the identity element, so the result is
/// lawful whenever the wrapped witness is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reversed<F>(F);

impl<F> Reversed<F> {
  pub const fn new(witness: F) -> Self {
    Self(witness)
  }

  pub const fn inner(&self) -> &F {
    &self.0
  }

  /// The witness this one reverses.
  pub fn into_inner(self) -> F {
    self.0
  }
}

impl<F: Kind1> Kind1 for Reversed<F> {
  type Of<A> = Of<F, A>;
}

impl<F: SemigroupK> SemigroupK for Reversed<F> {
  fn combine<A>(&self, x: Of<Self, A>, y: Of<Self, A>) -> Of<Self, A> {
    self.0.combine::<A>(y, x)
  }
}

impl<F: MonoidK> MonoidK for Reversed<F> {
  fn empty<A>(&self) -> Of<Self, A> {
    self.0.empty::<A>()
  }
}

#[cfg(test)]
mod test {
  use googletest::{gtest, prelude::*};

  use crate::{
    instances::{OptionK, VecK},
    monoid_k::MonoidK,
    semigroup_k::SemigroupK,
  };

  #[gtest]
  fn test_reverse_vec() {
    let r = VecK.reverse();
    expect_that!(r.combine(vec![1, 2], vec![3, 4]), container_eq(vec![3, 4, 1, 2]));
    expect_eq!(r.empty::<i32>(), Vec::<i32>::new());
  }

  #[gtest]
  fn test_reverse_option_prefers_last() {
    let r = OptionK.reverse();
    expect_eq!(r.combine(Some(1), Some(2)), Some(2));
    expect_eq!(r.combine(Some(1), None), Some(1));
  }

  #[gtest]
  fn test_double_reverse() {
    let rr = VecK.reverse().reverse();
    expect_eq!(rr.combine(vec!['a'], vec!['b']), vec!['a', 'b']);
    expect_eq!(rr.into_inner().into_inner(), VecK);
  }
}
