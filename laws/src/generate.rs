use std::collections::VecDeque;

use algebra::{
  instances::{OptionK, VecDequeK, VecK},
  Composed, Kind1, Of, Reversed,
};
use rand::Rng;

/// A witness that can produce random values of `F<A>`, given a generator for
/// `A`. Containers hold at most `max_len` elements.
pub trait Generate: Kind1 {
  fn generate<A, R, E>(&self, rng: &mut R, max_len: usize, elem: &mut E) -> Of<Self, A>
  where
    R: Rng,
    E: FnMut(&mut R) -> A;
}

impl Generate for VecK {
  fn generate<A, R, E>(&self, rng: &mut R, max_len: usize, elem: &mut E) -> Vec<A>
  where
    R: Rng,
    E: FnMut(&mut R) -> A,
  {
    let len = rng.random_range(0..=max_len);
    (0..len).map(|_| elem(rng)).collect()
  }
}

impl Generate for VecDequeK {
  fn generate<A, R, E>(&self, rng: &mut R, max_len: usize, elem: &mut E) -> VecDeque<A>
  where
    R: Rng,
    E: FnMut(&mut R) -> A,
  {
    let len = rng.random_range(0..=max_len);
    (0..len).map(|_| elem(rng)).collect()
  }
}

impl Generate for OptionK {
  fn generate<A, R, E>(&self, rng: &mut R, max_len: usize, elem: &mut E) -> Option<A>
  where
    R: Rng,
    E: FnMut(&mut R) -> A,
  {
    if max_len == 0 || !rng.random_bool(0.5) {
      return None;
    }
    Some(elem(rng))
  }
}

impl<F, G> Generate for Composed<F, G>
where
  F: Generate,
  G: Generate + Default,
{
  fn generate<A, R, E>(&self, rng: &mut R, max_len: usize, elem: &mut E) -> Of<Self, A>
  where
    R: Rng,
    E: FnMut(&mut R) -> A,
  {
    let inner = G::default();
    self.outer().generate::<Of<G, A>, R, _>(rng, max_len, &mut |rng: &mut R| {
      inner.generate::<A, R, E>(rng, max_len, &mut *elem)
    })
  }
}

impl<F: Generate> Generate for Reversed<F> {
  fn generate<A, R, E>(&self, rng: &mut R, max_len: usize, elem: &mut E) -> Of<Self, A>
  where
    R: Rng,
    E: FnMut(&mut R) -> A,
  {
    self.inner().generate::<A, R, E>(rng, max_len, elem)
  }
}

/// Generates `count` samples of `F<A>`.
pub fn samples<F, A, R, E>(witness: &F, rng: &mut R, count: usize, max_len: usize, mut elem: E) -> Vec<Of<F, A>>
where
  F: Generate,
  R: Rng,
  E: FnMut(&mut R) -> A,
{
  (0..count)
    .map(|_| witness.generate::<A, R, E>(rng, max_len, &mut elem))
    .collect()
}

#[cfg(test)]
mod test {
  use algebra::SemigroupK;
  use googletest::{gtest, prelude::*};
  use rand::{rngs::StdRng, SeedableRng};
  use rstest::rstest;

  use super::*;

  #[rstest]
  #[gtest]
  fn test_vec_respects_max_len(#[values(0, 1, 5)] max_len: usize) {
    let mut rng = StdRng::seed_from_u64(7);
    for v in samples(&VecK, &mut rng, 50, max_len, |rng: &mut StdRng| rng.random::<u8>()) {
      expect_that!(v.len(), le(max_len));
    }
  }

  #[gtest]
  fn test_option_empty_when_no_room() {
    let mut rng = StdRng::seed_from_u64(7);
    let generated = samples(&OptionK, &mut rng, 20, 0, |rng: &mut StdRng| rng.random::<u8>());
    expect_true!(generated.iter().all(Option::is_none));
  }

  #[gtest]
  fn test_option_produces_both_variants() {
    let mut rng = StdRng::seed_from_u64(11);
    let generated = samples(&OptionK, &mut rng, 64, 1, |rng: &mut StdRng| rng.random::<u8>());
    expect_true!(generated.iter().any(Option::is_none));
    expect_true!(generated.iter().any(Option::is_some));
  }

  #[gtest]
  fn test_composed_bounds_both_layers() {
    let mut rng = StdRng::seed_from_u64(3);
    let witness = VecK.compose::<VecDequeK>();
    for v in samples(&witness, &mut rng, 20, 3, |rng: &mut StdRng| rng.random::<i16>()) {
      expect_that!(v.len(), le(3));
      for inner in v {
        expect_that!(inner.len(), le(3));
      }
    }
  }

  #[gtest]
  fn test_same_seed_same_samples() {
    let generate_with = |seed| {
      let mut rng = StdRng::seed_from_u64(seed);
      samples(&VecK, &mut rng, 10, 4, |rng: &mut StdRng| rng.random::<u32>())
    };
    expect_eq!(generate_with(99), generate_with(99));
  }
}
