//! Lazy sequences of successive integer powers.
//!
//! [`powers`] returns an iterator that computes `base^k` only when the `k`-th
//! value is pulled, carrying the running product between pulls:
//!
//! ```rust
//! use powers::powers;
//!
//! let mut seq = powers(3i32, 3);
//! assert_eq!(seq.next(), Some(3));
//! assert_eq!(seq.collect::<Vec<_>>(), vec![9, 27]);
//! ```
//!
//! Values are computed in a fixed-width [`Accumulator`] and wrap on overflow.

mod accumulator;
mod sequence;

pub use accumulator::Accumulator;
pub use sequence::{powers, Powers};
