// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// dnigen-render — Card face composition for the dnigen fixture generator.
//
// Provides the fixed front/back layouts, a font resolver with a bundled
// terminal fallback, the pseudo-barcode synthesizer, and the renderer that
// lays an identity record out onto two 856×540 raster canvases.

pub mod barcode;
pub mod font;
pub mod layout;
pub mod renderer;

// Re-export the primary struct so callers can use `dnigen_render::CardRenderer`.
pub use renderer::CardRenderer;
