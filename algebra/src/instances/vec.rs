use crate::{
  kind::{Kind1, Of},
  monoid_k::MonoidK,
  semigroup_k::SemigroupK,
};

/// `Vec`, combined by concatenation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct VecK;

impl Kind1 for VecK {
  type Of<A> = Vec<A>;
}

impl SemigroupK for VecK {
  fn combine<A>(&self, mut x: Vec<A>, y: Vec<A>) -> Vec<A> {
    x.extend(y);
    x
  }

  fn combine_all_option<A>(&self, xs: impl IntoIterator<Item = Of<Self, A>>) -> Option<Of<Self, A>> {
    let mut xs = xs.into_iter().peekable();
    xs.peek()?;
    Some(xs.flatten().collect())
  }
}

impl MonoidK for VecK {
  fn empty<A>(&self) -> Of<Self, A> {
    Vec::new()
  }

  fn combine_all<A>(&self, xs: impl IntoIterator<Item = Of<Self, A>>) -> Of<Self, A> {
    xs.into_iter().flatten().collect()
  }
}

#[cfg(test)]
mod test {
  use googletest::{gtest, prelude::*};

  use super::*;

  #[gtest]
  fn test_empty() {
    expect_true!(VecK.empty::<i32>().is_empty());
  }

  #[gtest]
  fn test_combine() {
    expect_that!(VecK.combine(vec![1, 2], vec![3, 4]), container_eq(vec![1, 2, 3, 4]));
  }

  #[gtest]
  fn test_combine_with_empty() {
    expect_eq!(VecK.combine(VecK.empty(), vec![5]), vec![5]);
    expect_eq!(VecK.combine(vec![5], VecK.empty()), vec![5]);
  }

  #[gtest]
  fn test_combine_all() {
    expect_eq!(
      VecK.combine_all([vec!["a"], vec![], vec!["b", "c"]]),
      vec!["a", "b", "c"]
    );
    expect_eq!(VecK.combine_all(Vec::<Vec<u8>>::new()), Vec::<u8>::new());
  }

  #[gtest]
  fn test_combine_all_option() {
    expect_eq!(VecK.combine_all_option([vec![1], vec![2]]), Some(vec![1, 2]));
    expect_eq!(VecK.combine_all_option([Vec::<u8>::new()]), Some(vec![]));
    expect_eq!(VecK.combine_all_option(Vec::<Vec<u8>>::new()), None);
  }

  #[gtest]
  fn test_combine_n() {
    expect_eq!(VecK.combine_n(vec![1, 2], 3).unwrap(), vec![1, 2, 1, 2, 1, 2]);
    expect_eq!(VecK.combine_n(vec![9], 1).unwrap(), vec![9]);
    expect_true!(VecK.combine_n(vec![9], 0).is_err());
  }

  #[gtest]
  fn test_is_empty() {
    expect_true!(VecK.is_empty::<u8>(&vec![]));
    expect_false!(VecK.is_empty(&vec![0u8]));
  }
}
