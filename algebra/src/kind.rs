/// A unary type constructor, named by a zero-sized tag type.
///
/// Rust has no native higher-kinded generics, so `Vec` itself can't be a
/// type parameter. Instead a tag like `VecK` stands in for it, and
/// `<VecK as Kind1>::Of<A>` recovers `Vec<A>` for any `A`.
pub trait Kind1 {
  type Of<A>;
}

/// The type constructor `F` applied to `A`.
pub type Of<F, A> = <F as Kind1>::Of<A>;
