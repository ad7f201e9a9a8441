//! # funseq
//!
//! Generic sequence combinators and an index-addressable tuple with in-place
//! rotation.
//!
//! ## Overview
//!
//! - **Sequence capability**: [`SequentialIterator`](sequence::SequentialIterator)
//!   cursors and the [`Sequence`](sequence::Sequence) container contract, with
//!   implementations for the standard collections
//! - **Tuple**: [`Tuple`](tuple::Tuple), a contiguous container with O(1)
//!   positional access, O(1) swap, and in-place reversal and rotation
//! - **Combinators**: `map`, `filter`, `foldl`, `zip`, `take`, `drop`, `find`
//!   and friends, written once against the sequence capability
//!
//! ## Feature Flags
//!
//! - `sequence`: The capability traits and standard collection impls
//! - `tuple`: The `Tuple` type and the `tuple!` macro
//! - `combinator`: The combinator functions
//! - `smallvec`: `Sequence` for `smallvec::SmallVec`
//! - `serde`: Serialization for `Tuple` and `Pair`
//! - `tracing`: Diagnostic events for rejected tuple operations
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use funseq::prelude::*;
//! use std::collections::BTreeSet;
//!
//! let set: BTreeSet<i32> = (0..100).collect();
//! assert_eq!(foldl(&set, 0, |accumulator, element| accumulator + element), 4950);
//! assert_eq!(find(&set, |element| *element == 50), Some(&50));
//!
//! let mut tuple: Tuple<i32> = take(&set, 5).into_iter().collect();
//! tuple.rotate_right_in_place(2);
//! assert_eq!(tuple.as_slice(), &[2, 3, 4, 0, 1]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use funseq::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    #[cfg(feature = "tuple")]
    pub use crate::tuple::*;

    #[cfg(feature = "combinator")]
    pub use crate::combinator::*;
}

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "tuple")]
pub mod tuple;

#[cfg(feature = "combinator")]
pub mod combinator;
