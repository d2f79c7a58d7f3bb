// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// dnigen-identity — Synthetic identity record generation.
//
// Provides the sex-partitioned name pools, the sparse geographic hierarchy
// with its documented fallback policy, and the record generator that ties
// them together into one internally consistent fictitious person.

pub mod generator;
pub mod geography;
pub mod pools;

// Re-export the primary entry point so callers can use `dnigen_identity::generate`.
pub use generator::generate;
