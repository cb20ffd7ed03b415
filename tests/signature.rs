//! Validates determinism and normalization rules of fingerprint computation

use fftmosaic::signature::FingerprintEngine;
use image::{DynamicImage, GrayImage, Luma};

fn gradient_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageLuma8(GrayImage::from_fn(width, height, |x, y| {
        Luma([((x * 7 + y * 13) % 256) as u8])
    }))
}

fn uniform_image(width: u32, height: u32, level: u8) -> DynamicImage {
    DynamicImage::ImageLuma8(GrayImage::from_fn(width, height, |_, _| Luma([level])))
}

#[test]
fn test_fingerprint_is_deterministic_across_calls_and_engines() {
    let image = gradient_image(128, 128);

    let mut first_engine = FingerprintEngine::new();
    let first = first_engine.fingerprint(&image);
    let repeated = first_engine.fingerprint(&image);

    let mut second_engine = FingerprintEngine::new();
    let from_fresh_engine = second_engine.fingerprint(&image);

    assert_eq!(first, repeated);
    assert_eq!(first, from_fresh_engine);
}

#[test]
fn test_scratch_state_does_not_leak_between_calls() {
    let bright = uniform_image(128, 128, 250);
    let dark = gradient_image(128, 128);

    let mut engine = FingerprintEngine::new();
    let before = engine.fingerprint(&dark);
    let _interleaved = engine.fingerprint(&bright);
    let after = engine.fingerprint(&dark);

    assert_eq!(before, after);
}

// The unnormalized forward DFT puts the plain intensity sum in the DC bin
#[test]
fn test_dc_coefficient_equals_intensity_sum() {
    let image = gradient_image(128, 128);
    let expected: f64 = (0..128u32)
        .flat_map(|y| (0..128u32).map(move |x| f64::from((x * 7 + y * 13) % 256)))
        .sum();

    let mut engine = FingerprintEngine::new();
    let fingerprint = engine.fingerprint(&image);
    let dc_magnitude = fingerprint.magnitude_squared(0, 0).sqrt();

    assert!(
        (dc_magnitude - expected).abs() < 1e-3 * expected,
        "DC magnitude {dc_magnitude} should equal intensity sum {expected}"
    );
}

#[test]
fn test_small_images_are_zero_padded_not_upsampled() {
    let image = uniform_image(16, 16, 255);

    let mut engine = FingerprintEngine::new();
    let fingerprint = engine.fingerprint(&image);

    assert_eq!(fingerprint.width(), 128);

    // The DC bin reflects the 16x16 native sum, not an upsampled 128x128 one
    let expected = 16.0 * 16.0 * 255.0;
    let dc_magnitude = fingerprint.magnitude_squared(0, 0).sqrt();
    assert!(
        (dc_magnitude - expected).abs() < 1.0,
        "DC magnitude {dc_magnitude} should equal padded sum {expected}"
    );
}

#[test]
fn test_large_images_are_downsampled_to_signature_frame() {
    let image = uniform_image(256, 256, 100);

    let mut engine = FingerprintEngine::new();
    let fingerprint = engine.fingerprint(&image);

    assert_eq!(fingerprint.width(), 128);

    // Lanczos resampling of a constant image stays constant up to rounding
    let expected = 128.0 * 128.0 * 100.0;
    let dc_magnitude = fingerprint.magnitude_squared(0, 0).sqrt();
    assert!(
        (dc_magnitude - expected).abs() < 0.02 * expected,
        "DC magnitude {dc_magnitude} should be near downsampled sum {expected}"
    );
}
