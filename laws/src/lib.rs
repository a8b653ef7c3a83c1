//! Law checking for `SemigroupK` and `MonoidK` instances.
//!
//! The laws can't be expressed in the type system, so every instance should
//! be run through [`LawChecker`] (random samples) or the functions in
//! [`check`] (hand-picked samples) in its tests.

pub mod check;
pub mod config;
pub mod error;
pub mod generate;
pub mod law;
mod suite;

pub use config::LawConfig;
pub use error::{LawResult, LawViolation};
pub use generate::Generate;
pub use law::Law;
pub use suite::LawChecker;
