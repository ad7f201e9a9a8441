//! Higher-order functions over any [`Sequence`](crate::sequence::Sequence).
//!
//! Every combinator is an eager free function written only against the
//! sequence capability, so it works the same on a `Vec`, a `BTreeSet`, a
//! [`Tuple`](crate::tuple::Tuple) or any other implementor. Inputs are never
//! mutated; sequence results are freshly allocated `Vec`s, which are
//! themselves sequences and can be fed straight into the next combinator.
//!
//! - Visiting: [`for_each`], [`all`], [`exist`], [`foldl`]
//! - Searching: [`find`], [`position`], [`nth`]
//! - Building: [`map`], [`map_if`], [`filter`], [`split`], [`take`], [`drop`]
//! - Pairing: [`zip`], [`unzip`], [`Pair`]
//! - Tuples: [`tzip`], [`tunzip`] (requires the `tuple` feature)
//!
//! # Laws
//!
//! ## Duality of `all` and `exist`
//!
//! ```text
//! all(s, p) == !exist(s, |x| !p(x))
//! ```
//!
//! ## `take` and `drop` partition a sequence
//!
//! ```text
//! take(s, n) ++ drop(s, n) == s        for 0 <= n <= s.size()
//! ```
//!
//! ## `unzip` inverts `zip`
//!
//! ```text
//! unzip(zip(a, b)) == (a, b)           when a.size() == b.size()
//! ```
//!
//! # Examples
//!
//! ```rust
//! use std::collections::BTreeSet;
//! use funseq::combinator::{filter, foldl, map, take};
//!
//! let set: BTreeSet<i32> = (0..10).collect();
//! let evens = filter(&set, |element| element % 2 == 0);
//! let squares = map(&evens, |element| element * element);
//! assert_eq!(take(&squares, 3), vec![0, 4, 16]);
//! assert_eq!(foldl(&squares, 0, |accumulator, element| accumulator + element), 120);
//! ```

mod pair;
mod transform;
mod traversal;
#[cfg(feature = "tuple")]
mod tuple_zip;
mod zip;

pub use pair::Pair;
pub use transform::{drop, filter, map, map_if, split, take};
pub use traversal::{all, exist, find, foldl, for_each, nth, position};
#[cfg(feature = "tuple")]
pub use tuple_zip::{tunzip, tzip};
pub use zip::{unzip, zip};
