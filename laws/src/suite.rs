use std::fmt::Debug;

use algebra::{Kind1, MonoidK, Of, SemigroupK};
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;

use crate::{
  check::{
    check_algebra, check_associativity, check_combine_all, check_combine_n, check_compose,
    check_left_identity, check_reverse, check_right_identity,
  },
  config::LawConfig,
  error::LawResult,
  generate::{samples, Generate},
};

/// Runs the full law suite against randomly generated samples.
///
/// Every run seeds its own `StdRng` from the config, so a failing run can be
/// reproduced from its seed.
#[derive(Clone, Copy, Debug, Default)]
pub struct LawChecker {
  config: LawConfig,
}

impl LawChecker {
  pub const fn new(config: LawConfig) -> Self {
    Self { config }
  }

  pub const fn config(&self) -> &LawConfig {
    &self.config
  }

  fn rng(&self) -> StdRng {
    StdRng::seed_from_u64(self.config.seed())
  }

  fn samples<F, A, E>(&self, witness: &F, elem: E) -> Vec<Of<F, A>>
  where
    F: Generate,
    E: FnMut(&mut StdRng) -> A,
  {
    samples(
      witness,
      &mut self.rng(),
      self.config.trials(),
      self.config.max_len(),
      elem,
    )
  }

  /// Associativity, `combine_n` and reversal.
  pub fn check_semigroup_k<F, A, E>(&self, witness: &F, elem: E) -> LawResult<()>
  where
    F: SemigroupK + Generate,
    Of<F, A>: Clone + PartialEq + Debug,
    E: FnMut(&mut StdRng) -> A,
  {
    let samples = self.samples(witness, elem);
    check_associativity::<F, A>(witness, &samples)?;
    check_combine_n::<F, A>(witness, &samples, self.config.max_repeat())?;
    check_reverse::<F, A>(witness, &samples)?;
    info!(
      witness = std::any::type_name::<F>(),
      seed = self.config.seed(),
      "semigroup_k laws hold"
    );
    Ok(())
  }

  /// Everything in `check_semigroup_k`, plus both identity laws, agreement of
  /// the derived monoid, `combine_all`, and the laws of the reversed witness.
  pub fn check_monoid_k<F, A, E>(&self, witness: &F, mut elem: E) -> LawResult<()>
  where
    F: MonoidK + Generate,
    Of<F, A>: Clone + PartialEq + Debug,
    E: FnMut(&mut StdRng) -> A,
  {
    self.check_semigroup_k::<F, A, _>(witness, &mut elem)?;

    let samples = self.samples(witness, &mut elem);
    check_left_identity::<F, A>(witness, &samples)?;
    check_right_identity::<F, A>(witness, &samples)?;
    check_algebra::<F, A>(witness, &samples)?;
    check_combine_all::<F, A>(witness, &samples)?;

    let reversed = witness.reverse();
    check_associativity::<_, A>(&reversed, &samples)?;
    check_left_identity::<_, A>(&reversed, &samples)?;
    check_right_identity::<_, A>(&reversed, &samples)?;

    info!(
      witness = std::any::type_name::<F>(),
      seed = self.config.seed(),
      "monoid_k laws hold"
    );
    Ok(())
  }

  /// Agreement of `compose::<G>()` with the outer witness, and the full
  /// `MonoidK` law suite for the composed witness.
  pub fn check_composed<F, G, A, E>(&self, witness: &F, mut elem: E) -> LawResult<()>
  where
    F: MonoidK + Generate,
    G: Kind1 + Generate + Default,
    Of<F, Of<G, A>>: Clone + PartialEq + Debug,
    E: FnMut(&mut StdRng) -> A,
  {
    let composed = witness.compose::<G>();
    let samples = self.samples(&composed, &mut elem);
    check_compose::<F, G, A>(witness, &samples)?;
    self.check_monoid_k::<_, A, _>(&composed, &mut elem)
  }
}
