// Copyright (c) 2025 The qml-builder Authors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Subcommand implementations and shared CLI plumbing.

pub mod canon;
pub mod check;
pub mod kinds;

use tracing_subscriber::EnvFilter;

/// Initialises tracing based on `-v` repetition.
///
/// With no flags only warnings are shown; `-v` adds info, `-vv` debug,
/// `-vvv` trace. `RUST_LOG` overrides all of this when set.
pub fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
