/// Builds a [Threshold](crate::threshold::Threshold) from a list of tolerance
/// levels, one per slot.
///
/// # Example
///
/// ```
/// use thresholds::threshold;
///
/// let t = threshold![0.03, 1];
///
/// assert!(t.check((3.14, 0i64, 3.12f32, 1u64)));
/// ```
#[macro_export]
#[doc(hidden)]
macro_rules! threshold {
    ($($level:expr),+ $(,)?) => {
        $crate::threshold::Threshold::new(($($level,)+))
    };
}

#[cfg(test)]
mod tests {
    use crate::threshold::Threshold;

    #[test]
    fn builds_single_and_multi_slot_thresholds() {
        assert!(threshold![0.5].check((0.2, 0.4)));
        assert!(threshold![0.03, 1].check_pair((3.14, 0i64), (3.12f32, 1u64)));
        assert_eq!(threshold![0.5, 1u8], Threshold::new((0.5, 1u8)));
    }

    #[test]
    fn accepts_a_trailing_comma() {
        assert!(threshold![1i16,].check_pair((5u8,), (6u8,)));
    }
}
