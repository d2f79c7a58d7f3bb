// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Batch driver: generate N record/image pairs and persist them with
// deterministic filenames, plus the ground-truth manifest the OCR pipeline
// compares its extractions against.

use std::fs;
use std::path::{Path, PathBuf};

use image::RgbImage;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use dnigen_core::config::BatchConfig;
use dnigen_core::error::{DnigenError, Result};
use dnigen_core::types::{Face, IdentityRecord};
use dnigen_identity::generator;
use dnigen_render::CardRenderer;

/// Name of the ground-truth sidecar written next to the images.
pub const MANIFEST_FILENAME: &str = "manifest.json";

/// Run one batch: for each index, generate a record, render both faces and
/// persist them. Returns the generated records after the summary is logged.
///
/// Filesystem failures propagate — this is a one-shot tool with no retry or
/// resumption semantics.
pub fn run(config: &BatchConfig) -> Result<Vec<IdentityRecord>> {
    fs::create_dir_all(&config.output_dir)?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let renderer = CardRenderer::new();

    let mut records = Vec::with_capacity(config.count as usize);
    for index in 1..=config.count {
        let record = generator::generate(&mut rng);

        let front = renderer.render_front(&record);
        save_face(&front, &face_path(config, index, Face::Front))?;
        let back = renderer.render_back(&record, &mut rng);
        save_face(&back, &face_path(config, index, Face::Back))?;

        info!(
            index,
            document_number = %record.document_number,
            name = %record.full_name(),
            district = %record.district,
            "pair generated"
        );
        records.push(record);
    }

    if config.write_manifest {
        write_manifest(config, &records)?;
    }

    info!(
        pairs = records.len(),
        output_dir = %config.output_dir.display(),
        "batch complete"
    );
    for record in &records {
        info!(
            document_number = %record.document_number,
            name = %record.full_name(),
            sex = record.sex.letter(),
            location = %format!(
                "{}, {}, {}",
                record.district, record.province, record.department
            ),
            "generated record"
        );
    }

    Ok(records)
}

/// `{prefix}-{index:02}-{face}.png` inside the output directory.
fn face_path(config: &BatchConfig, index: u32, face: Face) -> PathBuf {
    config.output_dir.join(format!(
        "{}-{:02}-{}.png",
        config.file_prefix,
        index,
        face.filename_token()
    ))
}

fn save_face(image: &RgbImage, path: &Path) -> Result<()> {
    image
        .save(path)
        .map_err(|err| DnigenError::Image(format!("failed to save {}: {}", path.display(), err)))
}

fn write_manifest(config: &BatchConfig, records: &[IdentityRecord]) -> Result<()> {
    let path = config.output_dir.join(MANIFEST_FILENAME);
    let json = serde_json::to_string_pretty(records)?;
    fs::write(&path, json)?;
    info!(path = %path.display(), "ground-truth manifest written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(output_dir: PathBuf, seed: u64) -> BatchConfig {
        BatchConfig {
            output_dir,
            seed: Some(seed),
            count: 3,
            ..BatchConfig::default()
        }
    }

    #[test]
    fn batch_writes_two_images_per_record_plus_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path().join("dni"), 5);

        let records = run(&config).unwrap();
        assert_eq!(records.len(), 3);

        for index in 1..=3 {
            for face in [Face::Front, Face::Back] {
                let path = face_path(&config, index, face);
                assert!(path.is_file(), "missing {}", path.display());
            }
        }

        let png_count = fs::read_dir(&config.output_dir)
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| {
                entry
                    .path()
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
            })
            .count();
        assert_eq!(png_count, 6);
    }

    #[test]
    fn filenames_are_zero_padded_with_face_token() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path().to_path_buf(), 6);
        let path = face_path(&config, 4, Face::Front);
        assert!(path.to_string_lossy().ends_with("dni-sintetico-04-frente.png"));
        let path = face_path(&config, 12, Face::Back);
        assert!(path.to_string_lossy().ends_with("dni-sintetico-12-reverso.png"));
    }

    #[test]
    fn manifest_round_trips_the_generated_records() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path().join("out"), 8);

        let records = run(&config).unwrap();
        let manifest = fs::read_to_string(config.output_dir.join(MANIFEST_FILENAME)).unwrap();
        let parsed: Vec<IdentityRecord> = serde_json::from_str(&manifest).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn rerun_over_an_existing_directory_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path().join("dni"), 9);

        run(&config).unwrap();
        // Second run re-creates nothing and overwrites in place.
        run(&config).unwrap();
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let dir_a = tempfile::tempdir().unwrap();
        let dir_b = tempfile::tempdir().unwrap();

        let first = run(&test_config(dir_a.path().to_path_buf(), 7)).unwrap();
        let second = run(&test_config(dir_b.path().to_path_buf(), 7)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unwritable_output_path_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the output directory should be.
        let blocker = dir.path().join("occupied");
        fs::write(&blocker, b"not a directory").unwrap();

        let config = test_config(blocker, 1);
        assert!(run(&config).is_err());
    }
}
