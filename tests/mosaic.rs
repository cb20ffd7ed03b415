//! Validates grid sizing and tile assignment coverage

use fftmosaic::MosaicError;
use fftmosaic::cache::ThumbnailRecord;
use fftmosaic::index::SimilarityIndex;
use fftmosaic::mosaic::{assemble, grid_multiplier};
use fftmosaic::signature::{Fingerprint, FingerprintEngine};
use image::{DynamicImage, GrayImage, Luma};
use ndarray::Array2;
use num_complex::Complex64;
use std::path::PathBuf;
use std::time::SystemTime;

const WIDTH: usize = 128;

fn uniform_fingerprint(level: f64) -> Fingerprint {
    let mut grid = Array2::from_elem((WIDTH, WIDTH), Complex64::new(0.0, 0.0));
    grid[(0, 0)] = Complex64::new(level, 0.0);
    Fingerprint::new(grid)
}

fn record(name: &str, fingerprint: Fingerprint) -> ThumbnailRecord {
    ThumbnailRecord {
        identity: PathBuf::from(format!("/corpus/{name}.png")),
        name: name.to_owned(),
        modified: SystemTime::UNIX_EPOCH,
        fingerprint,
    }
}

fn gradient_target(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageLuma8(GrayImage::from_fn(width, height, |x, y| {
        Luma([((x * 5 + y * 11) % 256) as u8])
    }))
}

#[test]
fn test_grid_multiplier_covers_candidate_count() {
    let cases = [
        (0usize, 3u32),
        (1, 3),
        (9, 3),
        (10, 4),
        (16, 4),
        (17, 5),
        (100, 10),
        (101, 11),
    ];

    for (candidates, expected) in cases {
        assert_eq!(
            grid_multiplier(candidates),
            expected,
            "multiplier for {candidates} candidates"
        );
    }
}

#[test]
fn test_assemble_tiles_cover_canvas_exactly() {
    let index = SimilarityIndex::build(vec![
        record("a", uniform_fingerprint(10.0)),
        record("b", uniform_fingerprint(20.0)),
        record("c", uniform_fingerprint(30.0)),
        record("d", uniform_fingerprint(40.0)),
    ]);
    let mut engine = FingerprintEngine::new();
    let target = gradient_target(200, 160);

    let assignments = assemble(&target, &index, &mut engine, 16);
    let Ok(assignments) = assignments else {
        unreachable!("assembly over a non-empty index must succeed");
    };

    // Four candidates fit inside the minimum 3x3 grid
    assert_eq!(assignments.len(), 9);

    let expected_coordinates: Vec<(u32, u32)> = (0..3u32)
        .flat_map(|row| (0..3u32).map(move |column| (row, column)))
        .collect();
    let coordinates: Vec<(u32, u32)> = assignments
        .iter()
        .map(|assignment| (assignment.row, assignment.column))
        .collect();

    assert_eq!(
        coordinates, expected_coordinates,
        "tiles must cover the grid row-major with no gaps or overlaps"
    );

    let names = ["a", "b", "c", "d"];
    assert!(
        assignments
            .iter()
            .all(|assignment| names.contains(&assignment.name.as_str()))
    );
}

// Candidate keys dwarf any 16x16 probe's DC magnitude, so every tile clamps
// to the lowest-keyed candidate; a single candidate serving many tiles is
// the accepted no-uniqueness property
#[test]
fn test_candidates_may_repeat_across_tiles() {
    let index = SimilarityIndex::build(vec![
        record("low", uniform_fingerprint(1.0e12)),
        record("high", uniform_fingerprint(2.0e12)),
    ]);
    let mut engine = FingerprintEngine::new();
    let target = gradient_target(96, 96);

    let assignments = assemble(&target, &index, &mut engine, 16);
    let Ok(assignments) = assignments else {
        unreachable!("assembly over a non-empty index must succeed");
    };

    assert_eq!(assignments.len(), 9);
    assert!(
        assignments
            .iter()
            .all(|assignment| assignment.name == "low"),
        "probes below every key must clamp to the first candidate"
    );
}

#[test]
fn test_assemble_empty_index_fails() {
    let index = SimilarityIndex::build(Vec::new());
    let mut engine = FingerprintEngine::new();
    let target = gradient_target(64, 64);

    assert!(matches!(
        assemble(&target, &index, &mut engine, 16),
        Err(MosaicError::NoCandidates)
    ));
}

#[test]
fn test_assemble_zero_tile_size_fails() {
    let index = SimilarityIndex::build(vec![record("a", uniform_fingerprint(10.0))]);
    let mut engine = FingerprintEngine::new();
    let target = gradient_target(64, 64);

    assert!(matches!(
        assemble(&target, &index, &mut engine, 0),
        Err(MosaicError::InvalidParameter { .. })
    ));
}
