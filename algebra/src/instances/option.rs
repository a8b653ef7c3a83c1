use crate::{
  error::AlgebraResult,
  kind::{Kind1, Of},
  monoid_k::MonoidK,
  semigroup::check_positive_count,
  semigroup_k::SemigroupK,
};

/// `Option`, where `combine` keeps the first `Some`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct OptionK;

impl Kind1 for OptionK {
  type Of<A> = Option<A>;
}

impl SemigroupK for OptionK {
  fn combine<A>(&self, x: Option<A>, y: Option<A>) -> Option<A> {
    x.or(y)
  }

  /// `combine` is idempotent, so any positive count yields `x`.
  fn combine_n<A>(&self, x: Of<Self, A>, n: usize) -> AlgebraResult<Of<Self, A>>
  where
    Of<Self, A>: Clone,
  {
    check_positive_count(n)?;
    Ok(x)
  }

  fn combine_all_option<A>(&self, xs: impl IntoIterator<Item = Of<Self, A>>) -> Option<Of<Self, A>> {
    let mut xs = xs.into_iter();
    let first = xs.next()?;
    Some(first.or_else(|| xs.flatten().next()))
  }
}

impl MonoidK for OptionK {
  fn empty<A>(&self) -> Of<Self, A> {
    None
  }

  fn combine_all<A>(&self, xs: impl IntoIterator<Item = Of<Self, A>>) -> Of<Self, A> {
    xs.into_iter().flatten().next()
  }
}
