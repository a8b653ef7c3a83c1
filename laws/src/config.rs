/// Parameters for randomized law checking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LawConfig {
  trials: usize,
  max_len: usize,
  max_repeat: usize,
  seed: u64,
}

impl LawConfig {
  pub const DEFAULT_TRIALS: usize = 16;
  pub const DEFAULT_MAX_LEN: usize = 6;
  pub const DEFAULT_MAX_REPEAT: usize = 8;
  pub const DEFAULT_SEED: u64 = 0x5eed_f00d;

  /// How many random samples are generated. Associativity is checked over
  /// every triple of samples, so this grows the work cubically.
  pub const fn with_trials(self, trials: usize) -> Self {
    Self { trials, ..self }
  }

  /// Upper bound on the number of elements in each generated container.
  pub const fn with_max_len(self, max_len: usize) -> Self {
    Self { max_len, ..self }
  }

  /// Largest repetition count used when checking `combine_n`.
  pub const fn with_max_repeat(self, max_repeat: usize) -> Self {
    Self { max_repeat, ..self }
  }

  pub const fn with_seed(self, seed: u64) -> Self {
    Self { seed, ..self }
  }

  pub const fn trials(&self) -> usize {
    self.trials
  }

  pub const fn max_len(&self) -> usize {
    self.max_len
  }

  pub const fn max_repeat(&self) -> usize {
    self.max_repeat
  }

  pub const fn seed(&self) -> u64 {
    self.seed
  }
}

impl Default for LawConfig {
  fn default() -> Self {
    Self {
      trials: Self::DEFAULT_TRIALS,
      max_len: Self::DEFAULT_MAX_LEN,
      max_repeat: Self::DEFAULT_MAX_REPEAT,
      seed: Self::DEFAULT_SEED,
    }
  }
}
