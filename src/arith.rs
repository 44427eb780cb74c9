//! Saturating 32-bit arithmetic.
//!
//! Results are computed in 64 bits and clamped to the `i32` range instead of wrapping.

#[inline(always)]
///clamp a widened value to the nearer i32 bound
pub fn saturate(value: i64) -> i32 {
	i32::try_from(value).unwrap_or(if value < 0 {i32::MIN} else {i32::MAX})
}

#[inline(always)]
pub fn add(a: i32, b: i32) -> i32 {
	saturate(i64::from(a) + i64::from(b))
}

#[inline(always)]
pub fn sub(a: i32, b: i32) -> i32 {
	saturate(i64::from(a) - i64::from(b))
}

#[inline(always)]
pub fn mul(a: i32, b: i32) -> i32 {
	saturate(i64::from(a) * i64::from(b))
}

///integer power, saturated
///
///Overflowing the 64-bit intermediate means the true result is far outside the i32 range,
///so only its sign matters: negative exactly when the base is negative and the exponent odd.
pub fn pow(base: i32, exp: u32) -> i32 {
	match i64::from(base).checked_pow(exp) {
		Some(v) => saturate(v),
		None if base < 0 && exp % 2 == 1 => i32::MIN,
		None => i32::MAX
	}
}

///truncating division, never saturated, `None` on a zero divisor
#[inline(always)]
pub fn div(a: i32, b: i32) -> Option<i32> {
	(b != 0).then(|| a.wrapping_div(b))
}

///truncating remainder, sign follows the dividend, `None` on a zero divisor
#[inline(always)]
pub fn rem(a: i32, b: i32) -> Option<i32> {
	(b != 0).then(|| a.wrapping_rem(b))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn add_clamps_only_past_the_bounds() {
		assert_eq!(add(i32::MAX, 1), i32::MAX);
		assert_eq!(add(i32::MAX - 1, 1), i32::MAX);
		assert_eq!(add(i32::MIN, -1), i32::MIN);
		assert_eq!(add(i32::MIN, i32::MIN), i32::MIN);
		assert_eq!(add(i32::MAX, i32::MIN), -1);
		assert_eq!(add(-7, 3), -4);
	}

	#[test]
	fn sub_and_mul_saturate() {
		assert_eq!(sub(i32::MIN, 1), i32::MIN);
		assert_eq!(sub(0, i32::MIN), i32::MAX);
		assert_eq!(sub(9, 5), 4);
		assert_eq!(mul(65536, 65536), i32::MAX);
		assert_eq!(mul(-65536, 65536), i32::MIN);
		assert_eq!(mul(i32::MIN, -1), i32::MAX);
		assert_eq!(mul(-12, 12), -144);
	}

	#[test]
	fn pow_edges() {
		assert_eq!(pow(0, 0), 1);
		assert_eq!(pow(2, 10), 1024);
		assert_eq!(pow(2, 30), 1 << 30);
		assert_eq!(pow(2, 31), i32::MAX);
		assert_eq!(pow(-2, 31), i32::MIN);
		assert_eq!(pow(-2, 32), i32::MAX);
		assert_eq!(pow(-2, 33), i32::MIN);
		assert_eq!(pow(3, 1000), i32::MAX);
		assert_eq!(pow(-3, 1001), i32::MIN);
		assert_eq!(pow(-1, i32::MAX as u32), -1);
		assert_eq!(pow(1, u32::MAX), 1);
		assert_eq!(pow(0, 12), 0);
	}

	#[test]
	fn division_truncates_and_wraps() {
		assert_eq!(div(7, 2), Some(3));
		assert_eq!(div(-7, 2), Some(-3));
		assert_eq!(div(i32::MIN, -1), Some(i32::MIN));
		assert_eq!(div(1, 0), None);
		assert_eq!(rem(-7, 2), Some(-1));
		assert_eq!(rem(7, -2), Some(1));
		assert_eq!(rem(i32::MIN, -1), Some(0));
		assert_eq!(rem(5, 0), None);
	}
}
