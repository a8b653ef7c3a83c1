//! Monoids and semigroups, both over concrete types (`Semigroup`, `Monoid`)
//! and over type constructors (`SemigroupK`, `MonoidK`).
//!
//! Type constructors are named by zero-sized tags implementing [`Kind1`], and
//! every instance is an explicit witness value:
//!
//! ```
//! use algebra::{instances::VecK, Monoid, MonoidK, Semigroup, SemigroupK};
//!
//! assert_eq!(VecK.combine(vec![1, 2], vec![3, 4]), vec![1, 2, 3, 4]);
//! assert_eq!(VecK.algebra::<i32>().combine(vec![1, 2], vec![3, 4]), vec![1, 2, 3, 4]);
//! assert!(VecK.algebra::<i32>().empty().is_empty());
//! assert!(VecK.compose::<VecK>().empty::<i32>().is_empty());
//! ```

pub mod compose;
pub mod derived;
pub mod error;
pub mod instances;
pub mod kind;
pub mod monoid;
pub mod monoid_k;
pub mod reverse;
pub mod semigroup;
pub mod semigroup_k;

pub use compose::Composed;
pub use derived::Algebra;
pub use error::{AlgebraError, AlgebraResult};
pub use kind::{Kind1, Of};
pub use monoid::Monoid;
pub use monoid_k::MonoidK;
pub use reverse::Reversed;
pub use semigroup::Semigroup;
pub use semigroup_k::SemigroupK;
