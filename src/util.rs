// MIT/Apache2 License

use num_traits::{PrimInt, Signed};

/// Divide `n` by `d`, rounding to the closest integer. Halves round away from zero.
#[inline]
pub(crate) fn div_round_closest<T: PrimInt + Signed>(n: T, d: T) -> T {
    let two = T::one() + T::one();
    if n.is_negative() ^ d.is_negative() {
        (n - d / two) / d
    } else {
        (n + d / two) / d
    }
}

/// Narrow `value` to an `i32`, saturating at either end.
#[inline]
pub(crate) fn clamp_to_i32(value: i64) -> i32 {
    value.max(i64::from(i32::MIN)).min(i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::{clamp_to_i32, div_round_closest};

    #[test]
    fn rounds_to_nearest() {
        assert_eq!(div_round_closest(7i64, 2), 4);
        assert_eq!(div_round_closest(-7i64, 2), -4);
        assert_eq!(div_round_closest(5i32, 3), 2);
        assert_eq!(div_round_closest(4i32, 3), 1);
        assert_eq!(div_round_closest(-4i32, 3), -1);
        assert_eq!(div_round_closest(4i32, -3), -1);
        assert_eq!(div_round_closest(0i32, -3), 0);
    }

    #[test]
    fn clamps_to_i32() {
        assert_eq!(clamp_to_i32(-5), -5);
        assert_eq!(clamp_to_i32(i64::from(i32::MAX) + 1), i32::MAX);
        assert_eq!(clamp_to_i32(i64::MIN), i32::MIN);
    }
}
