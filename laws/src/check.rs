//! Law checks over explicit samples. Each check returns the first
//! counterexample it finds.

use std::fmt::Debug;

use algebra::{Kind1, Monoid, MonoidK, Of, Semigroup, SemigroupK};
use itertools::iproduct;
use tracing::{debug, warn};

use crate::{error::LawResult, law::Law, make_law_violation};

fn ensure<T>(law: Law, lhs: &T, rhs: &T, describe: impl FnOnce() -> String) -> LawResult<()>
where
  T: PartialEq + Debug,
{
  if lhs == rhs {
    return Ok(());
  }
  let violation = make_law_violation!(law, "{}: {:?} != {:?}", describe(), lhs, rhs);
  warn!(%law, detail = violation.detail(), "law violated");
  Err(violation)
}

/// `combine(combine(x, y), z) == combine(x, combine(y, z))` for every triple
/// of samples.
pub fn check_associativity<F, A>(witness: &F, samples: &[Of<F, A>]) -> LawResult<()>
where
  F: SemigroupK,
  Of<F, A>: Clone + PartialEq + Debug,
{
  debug!(law = %Law::Associativity, samples = samples.len(), "checking");
  for (x, y, z) in iproduct!(samples, samples, samples) {
    let lhs = witness.combine::<A>(witness.combine::<A>(x.clone(), y.clone()), z.clone());
    let rhs = witness.combine::<A>(x.clone(), witness.combine::<A>(y.clone(), z.clone()));
    ensure(Law::Associativity, &lhs, &rhs, || {
      format!("x = {x:?}, y = {y:?}, z = {z:?}")
    })?;
  }
  Ok(())
}

/// `combine(empty(), x) == x`.
pub fn check_left_identity<F, A>(witness: &F, samples: &[Of<F, A>]) -> LawResult<()>
where
  F: MonoidK,
  Of<F, A>: Clone + PartialEq + Debug,
{
  debug!(law = %Law::LeftIdentity, samples = samples.len(), "checking");
  for x in samples {
    let combined = witness.combine::<A>(witness.empty::<A>(), x.clone());
    ensure(Law::LeftIdentity, &combined, x, || format!("x = {x:?}"))?;
  }
  Ok(())
}

/// `combine(x, empty()) == x`.
pub fn check_right_identity<F, A>(witness: &F, samples: &[Of<F, A>]) -> LawResult<()>
where
  F: MonoidK,
  Of<F, A>: Clone + PartialEq + Debug,
{
  debug!(law = %Law::RightIdentity, samples = samples.len(), "checking");
  for x in samples {
    let combined = witness.combine::<A>(x.clone(), witness.empty::<A>());
    ensure(Law::RightIdentity, &combined, x, || format!("x = {x:?}"))?;
  }
  Ok(())
}

/// The monoid returned by `algebra` agrees with the witness it came from.
pub fn check_algebra<F, A>(witness: &F, samples: &[Of<F, A>]) -> LawResult<()>
where
  F: MonoidK,
  Of<F, A>: Clone + PartialEq + Debug,
{
  debug!(law = %Law::AlgebraCombine, samples = samples.len(), "checking");
  let monoid = witness.algebra::<A>();
  ensure(Law::AlgebraEmpty, &monoid.empty(), &witness.empty::<A>(), || {
    "algebra().empty() vs empty()".to_owned()
  })?;

  for (x, y) in iproduct!(samples, samples) {
    let derived = monoid.combine(x.clone(), y.clone());
    let direct = witness.combine::<A>(x.clone(), y.clone());
    ensure(Law::AlgebraCombine, &derived, &direct, || format!("x = {x:?}, y = {y:?}"))?;
  }
  Ok(())
}

/// The witness for `F<G<_>>` returned by `compose` agrees with the outer
/// witness applied at `G<A>`.
pub fn check_compose<F, G, A>(witness: &F, samples: &[Of<F, Of<G, A>>]) -> LawResult<()>
where
  F: MonoidK,
  G: Kind1,
  Of<F, Of<G, A>>: Clone + PartialEq + Debug,
{
  debug!(law = %Law::ComposeCombine, samples = samples.len(), "checking");
  let composed = witness.compose::<G>();
  ensure(
    Law::ComposeEmpty,
    &composed.empty::<A>(),
    &witness.empty::<Of<G, A>>(),
    || "compose().empty() vs empty()".to_owned(),
  )?;

  for (p, q) in iproduct!(samples, samples) {
    let nested = composed.combine::<A>(p.clone(), q.clone());
    let outer = witness.combine::<Of<G, A>>(p.clone(), q.clone());
    ensure(Law::ComposeCombine, &nested, &outer, || format!("p = {p:?}, q = {q:?}"))?;
  }
  Ok(())
}

/// `reverse().combine(x, y) == combine(y, x)`.
pub fn check_reverse<F, A>(witness: &F, samples: &[Of<F, A>]) -> LawResult<()>
where
  F: SemigroupK,
  Of<F, A>: Clone + PartialEq + Debug,
{
  debug!(law = %Law::ReverseCombine, samples = samples.len(), "checking");
  let reversed = witness.reverse();
  for (x, y) in iproduct!(samples, samples) {
    let lhs = reversed.combine::<A>(x.clone(), y.clone());
    let rhs = witness.combine::<A>(y.clone(), x.clone());
    ensure(Law::ReverseCombine, &lhs, &rhs, || format!("x = {x:?}, y = {y:?}"))?;
  }
  Ok(())
}

/// `combine_n(x, n)` equals `x` combined with itself `n` times from the left,
/// for `1 <= n <= max_repeat`.
pub fn check_combine_n<F, A>(witness: &F, samples: &[Of<F, A>], max_repeat: usize) -> LawResult<()>
where
  F: SemigroupK,
  Of<F, A>: Clone + PartialEq + Debug,
{
  debug!(law = %Law::CombineN, samples = samples.len(), max_repeat, "checking");
  for x in samples {
    let mut expected = x.clone();
    for n in 1..=max_repeat {
      if n > 1 {
        expected = witness.combine::<A>(expected, x.clone());
      }
      let actual = witness
        .combine_n::<A>(x.clone(), n)
        .map_err(|err| make_law_violation!(Law::CombineN, "x = {:?}, n = {}: {}", x, n, err))?;
      ensure(Law::CombineN, &actual, &expected, || format!("x = {x:?}, n = {n}"))?;
    }
  }
  Ok(())
}

/// `combine_all` over every prefix of the samples equals the left fold from
/// `empty`.
pub fn check_combine_all<F, A>(witness: &F, samples: &[Of<F, A>]) -> LawResult<()>
where
  F: MonoidK,
  Of<F, A>: Clone + PartialEq + Debug,
{
  debug!(law = %Law::CombineAll, samples = samples.len(), "checking");
  let mut expected = witness.empty::<A>();
  for len in 0..=samples.len() {
    if len > 0 {
      expected = witness.combine::<A>(expected, samples[len - 1].clone());
    }
    let actual = witness.combine_all::<A>(samples[..len].iter().cloned());
    ensure(Law::CombineAll, &actual, &expected, || {
      format!("first {len} samples")
    })?;
  }
  Ok(())
}
