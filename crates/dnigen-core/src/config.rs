// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Batch run configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings for one batch run of the fixture generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Directory the image pairs and manifest are written to. Created if absent.
    pub output_dir: PathBuf,
    /// Filename prefix for generated images (`{prefix}-{index:02}-{face}.png`).
    pub file_prefix: String,
    /// Number of record/image pairs to generate.
    pub count: u32,
    /// Optional RNG seed. `None` draws from entropy; setting it makes a run
    /// reproducible for regression comparisons.
    pub seed: Option<u64>,
    /// Whether to write the `manifest.json` ground-truth sidecar.
    pub write_manifest: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("docs/test-assets/dni"),
            file_prefix: "dni-sintetico".into(),
            count: 6,
            seed: None,
            write_manifest: true,
        }
    }
}
