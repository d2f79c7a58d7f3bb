// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Font resolution with ordered fallback.
//
// Chain: system font by family name (via fontdb) → well-known font file
// paths → the bundled DejaVu Sans. The bundled face ships with the crate and
// always parses, so resolution never fails outward. Point sizes are applied
// at draw time as `PxScale`; the resolver only produces the face.

use ab_glyph::{FontArc, FontVec};
use tracing::{debug, warn};

/// Bundled terminal fallback, compiled into the binary.
const BUNDLED_FONT: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

/// System font families tried first, in order.
const SYSTEM_FAMILIES: &[&str] = &["DejaVu Sans", "Liberation Sans", "Arial"];

/// Known file locations tried when no family resolves.
const FALLBACK_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
];

/// Resolve a renderable text face.
pub fn resolve() -> FontArc {
    if let Some(font) = from_system_database() {
        return font;
    }
    if let Some(font) = from_fallback_paths() {
        return font;
    }
    debug!("no system font found, using bundled DejaVu Sans");
    bundled()
}

/// The bundled face. A parse failure here means the shipped asset is
/// corrupt, which is a packaging error, not a runtime condition.
pub fn bundled() -> FontArc {
    FontArc::try_from_slice(BUNDLED_FONT).expect("bundled DejaVu Sans must parse")
}

fn from_system_database() -> Option<FontArc> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();

    for family in SYSTEM_FAMILIES {
        let query = fontdb::Query {
            families: &[fontdb::Family::Name(family)],
            ..fontdb::Query::default()
        };
        let Some(id) = db.query(&query) else {
            continue;
        };
        let loaded = db.with_face_data(id, |data, index| {
            FontVec::try_from_vec_and_index(data.to_vec(), index).ok()
        });
        if let Some(Some(font)) = loaded {
            debug!(family, "system font resolved");
            return Some(FontArc::from(font));
        }
    }
    None
}

fn from_fallback_paths() -> Option<FontArc> {
    for path in FALLBACK_PATHS {
        let Ok(data) = std::fs::read(path) else {
            continue;
        };
        match FontVec::try_from_vec(data) {
            Ok(font) => {
                debug!(path, "fallback font file loaded");
                return Some(FontArc::from(font));
            }
            Err(err) => warn!(path, error = %err, "fallback font file failed to parse"),
        }
    }
    None
}
