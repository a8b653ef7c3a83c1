use std::collections::VecDeque;

use crate::{
  kind::{Kind1, Of},
  monoid_k::MonoidK,
  semigroup_k::SemigroupK,
};

/// `VecDeque`, combined by appending the right operand to the left one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct VecDequeK;

impl Kind1 for VecDequeK {
  type Of<A> = VecDeque<A>;
}

impl SemigroupK for VecDequeK {
  fn combine<A>(&self, mut x: VecDeque<A>, mut y: VecDeque<A>) -> VecDeque<A> {
    // Move the shorter side.
    if x.len() >= y.len() {
      x.append(&mut y);
      x
    } else {
      while let Some(el) = x.pop_back() {
        y.push_front(el);
      }
      y
    }
  }
}

impl MonoidK for VecDequeK {
  fn empty<A>(&self) -> Of<Self, A> {
    VecDeque::new()
  }
}
