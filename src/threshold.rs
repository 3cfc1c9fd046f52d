//! The threshold comparator.
//!
//! A [`Threshold`] holds one tolerance level per parameter slot and checks that
//! paired lhs/rhs values all stay within their levels.

use crate::abs_diff::AbsDiff;
use crate::tolerance::Tolerance;

/// An immutable, ordered set of per-slot tolerance levels.
///
/// `P` is a tuple with one level per slot; each slot's level type is chosen
/// independently. Checking never mutates the instance, so sharing one across
/// threads is safe.
///
/// Slot counts are a compile-time contract: the lhs values, rhs values and
/// levels must have the same arity, or the call does not type-check. The same
/// holds for unsupported slot types — a type-erased value has no
/// [`AbsDiff`] impl and is rejected at compile time.
///
/// # Example
///
/// ```
/// use thresholds::threshold::Threshold;
///
/// let threshold = Threshold::new((0.03, 1));
///
/// assert!(threshold.check((3.14, 0i64, 3.12f32, 1u64)));
/// assert!(!threshold.check((3.14, 0i64, 3.10f32, 2u64)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threshold<P> {
    params: P,
}

impl<P> Threshold<P> {
    /// Creates a threshold from a tuple of tolerance levels, in slot order.
    pub const fn new(params: P) -> Self {
        Threshold { params }
    }

    /// Checks one flat tuple of `2N` values: the `N` lhs values first, then the
    /// `N` rhs values, matched positionally to the slots.
    ///
    /// Returns true only if every slot's absolute difference stays within its
    /// level.
    #[must_use]
    pub fn check<A>(&self, args: A) -> bool
    where
        P: CheckFlat<A>,
    {
        self.params.check_flat(args)
    }

    /// Checks two tuples of `N` values each, lhs and rhs, in matching slot
    /// order. Equivalent to [`check`](Threshold::check) for the same logical
    /// inputs.
    ///
    /// Tuple elements may be values or references in any mix.
    #[must_use]
    pub fn check_pair<L, R>(&self, lhs: L, rhs: R) -> bool
    where
        P: CheckPair<L, R>,
    {
        self.params.check_pair(lhs, rhs)
    }
}

/// Slot-wise check of two operand tuples against a tuple of tolerance levels.
///
/// Implemented for level tuples of arity 1 through 12. The bound is only
/// satisfiable when both operand tuples match the level tuple's arity and every
/// slot pair supports [`AbsDiff`].
pub trait CheckPair<L, R> {
    /// Returns true if every slot's absolute difference is admitted.
    fn check_pair(&self, lhs: L, rhs: R) -> bool;
}

/// The same check over one flat tuple: lhs values first, then rhs values.
pub trait CheckFlat<A> {
    /// Returns true if every slot's absolute difference is admitted.
    fn check_flat(&self, args: A) -> bool;
}

macro_rules! tuple_checks {
    () => {};
    (($T:ident, $t:ident, $L:ident, $l:ident, $R:ident, $r:ident) $(, $rest:tt)*) => {
        tuple_checks!($($rest),*);
        tuple_checks!(@impl ($T, $t, $L, $l, $R, $r) $(, $rest)*);
    };
    (@impl $(($T:ident, $t:ident, $L:ident, $l:ident, $R:ident, $r:ident)),+) => {
        impl<$($T,)+ $($L,)+ $($R,)+> CheckPair<($($L,)+), ($($R,)+)> for ($($T,)+)
        where
            $($L: AbsDiff<$R>,)+
            $($T: Tolerance<<$L as AbsDiff<$R>>::Output>,)+
        {
            #[inline]
            fn check_pair(&self, lhs: ($($L,)+), rhs: ($($R,)+)) -> bool {
                let ($($t,)+) = self;
                let ($($l,)+) = lhs;
                let ($($r,)+) = rhs;

                // Short-circuits on the first failing slot.
                true $(&& $t.admits($l.abs_diff($r)))+
            }
        }

        impl<$($T,)+ $($L,)+ $($R,)+> CheckFlat<($($L,)+ $($R,)+)> for ($($T,)+)
        where
            ($($T,)+): CheckPair<($($L,)+), ($($R,)+)>,
        {
            #[inline]
            fn check_flat(&self, args: ($($L,)+ $($R,)+)) -> bool {
                let ($($l,)+ $($r,)+) = args;

                return self.check_pair(($($l,)+), ($($r,)+));
            }
        }
    };
}

tuple_checks!(
    (T0, t0, L0, l0, R0, r0),
    (T1, t1, L1, l1, R1, r1),
    (T2, t2, L2, l2, R2, r2),
    (T3, t3, L3, l3, R3, r3),
    (T4, t4, L4, l4, R4, r4),
    (T5, t5, L5, l5, R5, r5),
    (T6, t6, L6, l6, R6, r6),
    (T7, t7, L7, l7, R7, r7),
    (T8, t8, L8, l8, R8, r8),
    (T9, t9, L9, l9, R9, r9),
    (T10, t10, L10, l10, R10, r10),
    (T11, t11, L11, l11, R11, r11)
);
