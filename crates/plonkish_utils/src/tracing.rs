// Copyright 2025 Irreducible Inc.

use std::env;

use tracing_subscriber::{
	fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Environment variable that turns on span close events, which carry the busy/idle time of
/// every instrumented pipeline stage.
pub const SPAN_TIMING_ENV: &str = "PLONKISH_SPAN_TIMING";

/// Installs a global `tracing` subscriber.
///
/// The filter is taken from `RUST_LOG` and defaults to `info`. Calling this more than once is
/// harmless; only the first call installs a subscriber.
pub fn init_tracing() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

	let span_events = if boolean_env_flag_set(SPAN_TIMING_ENV) {
		FmtSpan::CLOSE
	} else {
		FmtSpan::NONE
	};

	let _ = tracing_subscriber::registry()
		.with(filter)
		.with(tracing_subscriber::fmt::layer().with_span_events(span_events))
		.try_init();
}

fn boolean_env_flag_set(flag: &str) -> bool {
	env::var(flag).is_ok_and(|val| matches!(val.as_str(), "1" | "on" | "ON" | "true" | "TRUE"))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_init_tracing_twice() {
		init_tracing();
		init_tracing();
	}
}
