/// Asserts that paired lhs/rhs tuples stay within a
/// [Threshold](crate::threshold::Threshold).
///
/// An optional message can be specified with format arguments.
///
/// # Example
///
/// ```should_panic
/// use thresholds::{assert_within, threshold};
///
/// let limits = threshold![0.5, 0];
///
/// assert_within!(limits, (1.0, 3), (1.2, 4), "readings drifted past {:?}", limits);
/// ```
#[macro_export]
#[doc(hidden)]
macro_rules! assert_within {
    ($threshold:expr, $lhs:expr, $rhs:expr $(,)?) => ({
        match (&$threshold, &$lhs, &$rhs) {
            (threshold_val, lhs_val, rhs_val) => {
                if !threshold_val.check_pair(*lhs_val, *rhs_val) {
                    panic!(r#"assertion failed: `(lhs within threshold of rhs)`
      lhs: `{:?}`,
      rhs: `{:?}`
threshold: `{:?}`"#, &*lhs_val, &*rhs_val, &*threshold_val)
                }
            }
        }
    });
    ($threshold:expr, $lhs:expr, $rhs:expr, $($arg:tt)+) => ({
        match (&$threshold, &$lhs, &$rhs) {
            (threshold_val, lhs_val, rhs_val) => {
                if !threshold_val.check_pair(*lhs_val, *rhs_val) {
                    panic!(r#"assertion failed: `(lhs within threshold of rhs)`
      lhs: `{:?}`,
      rhs: `{:?}`
threshold: `{:?}`: {}"#, &*lhs_val, &*rhs_val, &*threshold_val,
                           format_args!($($arg)+))
                }
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use crate::threshold::Threshold;

    #[test]
    fn passes_within_threshold() {
        assert_within!(Threshold::new((2f64,)), (3.0,), (4.5,));
        assert_within!(Threshold::new((0.03, 1)), (3.14, 0i64), (3.12f32, 1u64));
    }

    #[test]
    #[should_panic(expected = "assertion failed: `(lhs within threshold of rhs)`")]
    fn panics_outside_threshold() {
        assert_within!(Threshold::new((1e-3,)), (3.0,), (4.0,));
    }

    #[test]
    #[should_panic(expected = "readings drifted")]
    fn panics_with_a_custom_message() {
        assert_within!(Threshold::new((1e-3,)), (3.0,), (4.0,), "readings drifted");
    }

    // Make sure the threshold expression is evaluated exactly once.
    #[test]
    #[should_panic(expected = "threshold: `Threshold { params: (1.0,) }`")]
    fn evaluates_the_threshold_only_once() {
        let mut count = 0_f64;

        assert_within!(
            Threshold::new(({
                count += 1_f64;
                count
            },)),
            (0_f64,),
            (100_f64,)
        );
    }
}
