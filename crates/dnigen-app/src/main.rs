// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// dnigen — Synthetic DNI Fixture Generator
//
// Entry point. Initialises logging and runs one batch with the fixed default
// configuration. The tool takes no arguments; a write failure is fatal and
// produces a nonzero exit status.

mod batch;

use dnigen_core::BatchConfig;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("dnigen starting");

    let config = BatchConfig::default();
    match batch::run(&config) {
        Ok(records) => {
            tracing::info!(pairs = records.len(), "fixture generation complete");
        }
        Err(err) => {
            tracing::error!(error = %err, "fixture generation failed");
            std::process::exit(1);
        }
    }
}
