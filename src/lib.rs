//! `MonoidK`: monoids over type constructors, with the law suite every
//! instance is expected to pass.
//!
//! The traits and instances live in [`algebra`]; the law checker lives in
//! [`laws`].

pub use algebra::*;
pub use algebra_laws as laws;
