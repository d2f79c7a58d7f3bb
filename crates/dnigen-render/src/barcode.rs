// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pseudo-barcode synthesis.
//
// Produces a visually barcode-like but non-decodable bar pattern — this is
// explicitly not a real barcode symbology. The synthesizer emits drawing
// commands; painting them is the renderer's job.

use rand::Rng;

use crate::layout::Region;

/// Horizontal inset between the band edges and the first/last bar slot.
const EDGE_INSET: i32 = 10;

/// Vertical inset of the bars inside the band.
pub const BAR_INSET_Y: i32 = 5;

/// One vertical bar, in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bar {
    pub x: i32,
    pub width: u32,
}

/// Fill `region` left-to-right with randomized bars.
///
/// Bar widths are uniform in [1, 4], gaps uniform in [1, 3]. Each slot is
/// rendered with probability 0.5 — a blank slot consumes its width without
/// emitting a bar. The walk stops once the next slot would start past the
/// inner right margin, and an emitted bar is clamped so its right edge never
/// crosses the region boundary.
pub fn synthesize(region: &Region, rng: &mut impl Rng) -> Vec<Bar> {
    let right_limit = region.right() - EDGE_INSET;
    let mut bars = Vec::new();
    let mut x = region.x + EDGE_INSET;

    while x < right_limit {
        let width = rng.gen_range(1..=4u32);
        if rng.gen_bool(0.5) {
            let clamped = width.min((right_limit - x) as u32);
            bars.push(Bar { x, width: clamped });
        }
        x += width as i32 + rng.gen_range(1..=3);
    }

    bars
}
