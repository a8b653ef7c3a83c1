use std::{fmt::Debug, marker::PhantomData};

use crate::{
  kind::{Kind1, Of},
  monoid_k::MonoidK,
  semigroup_k::SemigroupK,
};

/// The nested type constructor `F<G<_>>`, carrying the outer witness.
///
/// Combining only touches the outer layer, so `G<A>` is an opaque payload
/// and `G` needs no instance.
pub struct Composed<F, G> {
  outer: F,
  _inner: PhantomData<fn() -> G>,
}

impl<F, G> Composed<F, G> {
  pub const fn new(outer: F) -> Self {
    Self { outer, _inner: PhantomData }
  }

  pub const fn outer(&self) -> &F {
    &self.outer
  }
}

impl<F: Clone, G> Clone for Composed<F, G> {
  fn clone(&self) -> Self {
    Self::new(self.outer.clone())
  }
}

impl<F: Copy, G> Copy for Composed<F, G> {}

impl<F: Default, G> Default for Composed<F, G> {
  fn default() -> Self {
    Self::new(F::default())
  }
}

impl<F: Debug, G> Debug for Composed<F, G> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Composed")
      .field("outer", &self.outer)
      .field("inner", &std::any::type_name::<G>())
      .finish()
  }
}

impl<F: Kind1, G: Kind1> Kind1 for Composed<F, G> {
  type Of<A> = Of<F, Of<G, A>>;
}

impl<F: SemigroupK, G: Kind1> SemigroupK for Composed<F, G> {
  fn combine<A>(&self, x: Of<Self, A>, y: Of<Self, A>) -> Of<Self, A> {
    self.outer.combine::<Of<G, A>>(x, y)
  }
}

impl<F: MonoidK, G: Kind1> MonoidK for Composed<F, G> {
  fn empty<A>(&self) -> Of<Self, A> {
    self.outer.empty::<Of<G, A>>()
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
  fn test_compose_empty_ignores_inner() {
    let c = VecK.compose::<VecK>();
    expect_eq!(c.empty::<i32>(), Vec::<Vec<i32>>::new());
    expect_eq!(c.empty::<i32>(), VecK.empty::<Vec<i32>>());
  }

  #[gtest]
  fn test_compose_combines_outer_layer() {
    let c = VecK.compose::<VecK>();
    let p = vec![vec![1, 2], vec![]];
    let q = vec![vec![3]];
    expect_that!(
      c.combine(p.clone(), q.clone()),
      container_eq(vec![vec![1, 2], vec![], vec![3]])
    );
    expect_eq!(c.combine(p.clone(), q.clone()), VecK.combine(p, q));
  }

  #[gtest]
  fn test_compose_inner_untouched() {
    let c = OptionK.compose::<VecK>();
    expect_eq!(c.combine(Some(vec![1]), Some(vec![2])), Some(vec![1]));
    expect_eq!(c.combine(None, Some(vec![2])), Some(vec![2]));
    expect_eq!(c.empty::<u8>(), None);
  }

  #[gtest]
  fn test_compose_nests() {
    let c = VecK.compose::<OptionK>().compose::<VecK>();
    let p = vec![Some(vec![1])];
    let q = vec![None];
    expect_eq!(c.combine(p, q), vec![Some(vec![1]), None]);
    expect_true!(c.is_empty::<u8>(&vec![]));
  }
}
