use std::{fmt::Debug, marker::PhantomData};

use crate::{kind::Of, monoid::Monoid, monoid_k::MonoidK, semigroup::Semigroup, semigroup_k::SemigroupK};

/// The concrete algebra over `F<A>` derived from a kinded witness `F`.
///
/// A `Semigroup` whenever `F: SemigroupK`, and a `Monoid` whenever
/// `F: MonoidK`. Every operation forwards to the witness.
pub struct Algebra<F, A> {
  witness: F,
  _elem: PhantomData<fn() -> A>,
}

impl<F, A> Algebra<F, A> {
  pub const fn new(witness: F) -> Self {
    Self { witness, _elem: PhantomData }
  }

  pub const fn witness(&self) -> &F {
    &self.witness
  }
}

impl<F: Clone, A> Clone for Algebra<F, A> {
  fn clone(&self) -> Self {
    Self::new(self.witness.clone())
  }
}

impl<F: Copy, A> Copy for Algebra<F, A> {}

impl<F: Debug, A> Debug for Algebra<F, A> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Algebra")
      .field("witness", &self.witness)
      .field("elem", &std::any::type_name::<A>())
      .finish()
  }
}

impl<F: SemigroupK, A> Semigroup for Algebra<F, A> {
  type Elem = Of<F, A>;

  fn combine(&self, x: Self::Elem, y: Self::Elem) -> Self::Elem {
    self.witness.combine::<A>(x, y)
  }
}

impl<F: MonoidK, A> Monoid for Algebra<F, A> {
  fn empty(&self) -> Self::Elem {
    self.witness.empty::<A>()
  }
}

#[cfg(test)]
mod test {
  use googletest::{gtest, prelude::*};

  use crate::{
    instances::{OptionK, VecK},
    monoid::Monoid,
    monoid_k::MonoidK,
    semigroup::Semigroup,
    semigroup_k::SemigroupK,
  };

  #[gtest]
  fn test_vec_algebra_combine() {
    let m = VecK.algebra::<i32>();
    expect_that!(m.combine(vec![1, 2], vec![3, 4]), container_eq(vec![1, 2, 3, 4]));
  }

  #[gtest]
  fn test_vec_algebra_empty() {
    let m = VecK.algebra::<i32>();
    expect_eq!(m.empty(), VecK.empty::<i32>());
    expect_true!(m.empty().is_empty());
  }

  #[gtest]
  fn test_algebra_agrees_with_witness() {
    let m = OptionK.algebra::<char>();
    for (x, y) in [(None, None), (Some('a'), None), (None, Some('b')), (Some('a'), Some('b'))] {
      expect_eq!(m.combine(x, y), OptionK.combine(x, y));
    }
  }

  #[gtest]
  fn test_algebra_combine_all() {
    let m = VecK.algebra::<u8>();
    expect_eq!(m.combine_all([vec![1], vec![], vec![2, 3]]), vec![1, 2, 3]);
    expect_eq!(m.combine_all([]), Vec::<u8>::new());
  }

  #[gtest]
  fn test_algebra_combine_n() {
    let m = VecK.algebra::<u8>();
    expect_eq!(m.combine_n(vec![7, 8], 3).unwrap(), vec![7, 8, 7, 8, 7, 8]);
    expect_true!(m.combine_n(vec![7, 8], 0).is_err());
  }
}
