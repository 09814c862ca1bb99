// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Log setup for the binary.
//!
//! Logs go to stderr so `--format json` and `score` output on stdout stay
//! parseable. `TALENTVECTOR_LOG` takes a full `EnvFilter` directive
//! (e.g. `talentvector=debug`) and wins over `-v`.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Filter level for a `-v` count.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Call once, before any work.
pub fn init_logging(verbosity: u8) {
    let env_filter = EnvFilter::try_from_env("TALENTVECTOR_LOG")
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
