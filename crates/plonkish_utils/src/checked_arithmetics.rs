// Copyright 2025 Irreducible Inc.

/// Returns `2^k`, or `None` when it does not fit in a `usize`.
pub const fn checked_pow_2(k: u32) -> Option<usize> {
	if k >= usize::BITS {
		None
	} else {
		Some(1 << k)
	}
}
