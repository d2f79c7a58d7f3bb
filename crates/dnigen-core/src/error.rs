// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for dnigen.

use thiserror::Error;

/// Top-level error type for all dnigen operations.
///
/// Font-load failures never appear here — the font resolver recovers them
/// internally via its fallback chain. Filesystem and encoding failures are
/// fatal for a one-shot fixture generator and propagate to the binary.
#[derive(Debug, Error)]
pub enum DnigenError {
    #[error("image operation failed: {0}")]
    Image(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, DnigenError>;
