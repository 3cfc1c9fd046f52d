//! Element-wise absolute-difference threshold checks over heterogeneous
//! numeric tuples.
//!
//! A [Threshold](threshold::Threshold) holds one tolerance level per parameter
//! slot and answers whether paired expected/actual values all stay within
//! their levels: `|lhs - rhs| <= level` for every slot. Slot types are chosen
//! independently, and signed, unsigned and floating point values may be mixed
//! freely within a comparison.
//!
//! # Example
//!
//! ```rust
//! use thresholds::threshold::Threshold;
//!
//! let threshold = Threshold::new((0.03, 1));
//!
//! // Flat form: lhs values first, then rhs values, in slot order.
//! assert!(threshold.check((3.14, 0i64, 3.12f32, 1u64)));
//!
//! // Paired form: one tuple per side.
//! assert!(threshold.check_pair((3.14, 0i64), (3.12f32, 1u64)));
//!
//! // References forward to the same checks without copies.
//! assert!(threshold.check_pair((&3.14, &0i64), (&3.12f32, &1u64)));
//! ```
//!
//! # Notes
//!
//! There is no runtime error channel: the only observable outputs are `true`
//! and `false`. Contract violations are compile errors. Mismatched slot counts
//! do not type-check:
//!
//! ```compile_fail
//! use thresholds::threshold::Threshold;
//!
//! let threshold = Threshold::new((0.03, 1));
//! threshold.check((3.14, 0i64, 3.12f32)); // three values for two slots
//! ```
//!
//! Neither do type-erased slots — every slot type must support subtraction
//! with a sign-comparable result:
//!
//! ```compile_fail
//! use std::any::Any;
//! use thresholds::threshold::Threshold;
//!
//! let threshold = Threshold::new((0.03,));
//! let hidden: Box<dyn Any> = Box::new(3.14);
//! threshold.check_pair((hidden,), (3.12,));
//! ```

#![deny(unsafe_code)]
#![deny(unused_must_use)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]
#![deny(clippy::unwrap_used)]
#![warn(missing_docs)]
#![allow(clippy::needless_return)]

pub mod abs_diff;
pub mod threshold;
pub mod tolerance;

#[doc(hidden)]
pub mod macros;

// Test the code in the Readme when running `cargo test --doc`
#[cfg(doctest)]
mod test_readme {
    macro_rules! external_doc_test {
    ($x:expr) => {
        #[doc = $x]
        extern {}
    };
  }

    external_doc_test!(include_str!("../README.md"));
}
