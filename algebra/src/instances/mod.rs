mod option;
mod vec;
mod vec_deque;

pub use option::*;
pub use vec::*;
pub use vec_deque::*;
