// Copyright 2025 Irreducible Inc.

use std::{env, sync::OnceLock};

/// Runs rayon on the calling thread when `RAYON_NUM_THREADS=1`.
///
/// Keeps single-threaded proving runs free of pool overhead and makes span timings readable.
/// The global pool can be built only once, so the result of the first call is cached and
/// returned by reference (`ThreadPoolBuildError` is not `Clone`). Call it at the top of `main`
/// or of a benchmark, before anything touches rayon.
pub fn adjust_thread_pool() -> &'static Result<(), rayon::ThreadPoolBuildError> {
	static ONCE_GUARD: OnceLock<Result<(), rayon::ThreadPoolBuildError>> = OnceLock::new();

	ONCE_GUARD.get_or_init(|| match env::var("RAYON_NUM_THREADS") {
		Ok(v) if v == "1" => rayon::ThreadPoolBuilder::new()
			.num_threads(1)
			.use_current_thread()
			.build_global(),
		_ => Ok(()),
	})
}
