//! End-to-end properties of the enhancement pipelines.
//!
//! Run with: `cargo test -p enhancer-core`

use approx::{assert_abs_diff_eq, assert_relative_eq};

use enhancer_core::color_management::hsv::{rgb_to_hsv, scale_saturation};
use enhancer_core::color_management::transfer::{GammaCodec, from_linear, to_linear};
use enhancer_core::grading::sliders::contrast;
use enhancer_core::grading::wheels::{LiftGammaGain, LiftModel, lift_gamma_gain};
use enhancer_core::{EnhanceError, Pipeline, PipelineConstants, RgbImage, Variant};

const BASIC_PARAMS: [f64; 9] = [0.4, 0.55, 0.6, 0.45, 0.6, 0.5, 0.7, 0.5, 0.35];
const EXTENDED_PARAMS: [f64; 12] = [0.6, 0.65, 0.4, 0.4, 0.55, 0.6, 0.45, 0.6, 0.5, 0.7, 0.5, 0.35];

/// Create a small test gradient image with a fixed blue channel.
fn create_test_gradient(width: u32, height: u32) -> RgbImage {
    let mut pixels = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            let r = x as f64 / (width - 1) as f64;
            let g = y as f64 / (height - 1) as f64;
            pixels.push([r, g, 0.35]);
        }
    }
    RgbImage::new(width, height, pixels).expect("gradient dimensions are consistent")
}

fn assert_images_close(actual: &RgbImage, expected: &RgbImage, epsilon: f64) {
    assert_eq!(actual.shape(), expected.shape());
    for (a, e) in actual.as_samples().iter().zip(expected.as_samples()) {
        assert_abs_diff_eq!(*a, *e, epsilon = epsilon);
    }
}

#[test]
fn test_gamma_codec_roundtrip_is_relative_exact() {
    let codec = GammaCodec::default();
    for i in 0..=1000 {
        let x = i as f64 / 400.0;
        let back = codec.to_encoded(codec.to_linear(x));
        assert_relative_eq!(back, x, max_relative = 1e-9);
    }
}

#[test]
fn test_image_codec_roundtrip() {
    let image = create_test_gradient(16, 9);
    let codec = GammaCodec::default();
    let back = from_linear(&to_linear(&image, codec), codec);
    assert_images_close(&back, &image, 1e-12);
}

#[test]
fn test_neutral_params_are_identity_for_both_variants() {
    let image = create_test_gradient(17, 11);
    for &variant in Variant::all() {
        let out = Pipeline::new(variant)
            .enhance(&image, &variant.neutral_params())
            .expect("neutral params have the right length");
        assert_images_close(&out, &image, 1e-9);
    }
}

#[test]
fn test_output_shape_matches_input() {
    let image = create_test_gradient(7, 3);
    let basic = Pipeline::basic().enhance(&image, &BASIC_PARAMS).unwrap();
    let extended = Pipeline::extended().enhance(&image, &EXTENDED_PARAMS).unwrap();
    assert_eq!(basic.shape(), (3, 7, 3));
    assert_eq!(extended.shape(), (3, 7, 3));
    assert_eq!(basic.as_samples().len(), image.as_samples().len());
}

#[test]
fn test_input_is_not_modified() {
    let image = create_test_gradient(5, 5);
    let snapshot = image.clone();
    let _ = Pipeline::extended().enhance(&image, &EXTENDED_PARAMS).unwrap();
    assert_eq!(image, snapshot);
}

#[test]
fn test_basic_matches_reference_values() {
    let image = RgbImage::new(2, 1, vec![[0.8, 0.4, 0.2], [0.1, 0.5, 0.9]]).unwrap();
    let out = Pipeline::basic().enhance(&image, &BASIC_PARAMS).unwrap();
    let expected = [
        [0.836120643525016, 0.48841205066682647, 0.36235929484797713],
        [0.0, 0.5701643770826095, 0.8457533165314028],
    ];
    for (px, exp) in out.pixels.iter().zip(expected) {
        for c in 0..3 {
            assert_abs_diff_eq!(px[c], exp[c], epsilon = 1e-9);
        }
    }
}

#[test]
fn test_extended_matches_reference_values() {
    let image = RgbImage::new(1, 2, vec![[0.8, 0.4, 0.2], [0.1, 0.5, 0.9]]).unwrap();
    let out = Pipeline::extended().enhance(&image, &EXTENDED_PARAMS).unwrap();
    let expected = [
        [0.9740130618651206, 0.5683990372026638, 0.3996995128769629],
        [0.3349588753325932, 0.6551320569555134, 0.9539748913981416],
    ];
    for (px, exp) in out.pixels.iter().zip(expected) {
        for c in 0..3 {
            assert_abs_diff_eq!(px[c], exp[c], epsilon = 1e-9);
        }
    }
}

#[test]
fn test_lift_gamma_gain_output_is_clamped() {
    let image = create_test_gradient(9, 9);
    let constants = PipelineConstants::default();
    let lgg = LiftGammaGain::from_slices(&[0.0, 0.9, 1.3], &[0.05, 0.5, 1.0], &[1.5, 0.8, 0.1]);
    for model in [LiftModel::Basic, LiftModel::Attenuated] {
        let out = lift_gamma_gain(&image, &lgg, model, &constants);
        assert!(
            out.as_samples().iter().all(|v| (0.0..=1.0).contains(v)),
            "{model:?} produced a value outside [0, 1]"
        );
    }
}

#[test]
fn test_labels_align_with_param_count() {
    for &variant in Variant::all() {
        let pipeline = Pipeline::new(variant);
        assert_eq!(pipeline.labels().len(), pipeline.param_count());
    }
    assert_eq!(Pipeline::basic().labels()[0], "Lift (R)");
    assert_eq!(Pipeline::extended().labels()[0], "Brightness");
    assert_eq!(Pipeline::extended().labels()[11], "Gain (B)");
}

#[test]
fn test_wrong_param_length_is_rejected() {
    let image = create_test_gradient(4, 4);
    let err = Pipeline::basic().enhance(&image, &[0.5; 8]).unwrap_err();
    assert!(matches!(
        err,
        EnhanceError::ParamCount {
            variant: Variant::Basic,
            expected: 9,
            actual: 8,
        }
    ));
    let err = Pipeline::extended().enhance(&image, &[0.5; 11]).unwrap_err();
    assert!(matches!(
        err,
        EnhanceError::ParamCount {
            variant: Variant::Extended,
            expected: 12,
            actual: 11,
        }
    ));
    assert_eq!(
        err.to_string(),
        "extended pipeline expects 12 parameters, got 11"
    );
}

#[test]
fn test_neutral_saturation_keeps_hue_and_value_bits() {
    for rgb in [[0.8, 0.4, 0.2], [0.05, 0.9, 0.3], [0.6, 0.6, 0.6]] {
        let hsv = rgb_to_hsv(rgb);
        let scaled = scale_saturation(hsv, 1.0);
        assert_eq!(
            scaled.hue.into_raw_degrees().to_bits(),
            hsv.hue.into_raw_degrees().to_bits()
        );
        assert_eq!(scaled.value.to_bits(), hsv.value.to_bits());
        assert_relative_eq!(scaled.saturation, hsv.saturation, max_relative = 1e-12);
    }
}

#[test]
fn test_neutral_contrast_is_identity() {
    let image = create_test_gradient(10, 6);
    let out = contrast(&image, 0.0, GammaCodec::default());
    assert_images_close(&out, &image, 1e-9);
}

#[test]
fn test_degenerate_params_propagate_nan_instead_of_failing() {
    // brightness −1.5 after centering gives 1 + 1.5 × (−1.5) < 0, a negative exponent
    let mut params = Variant::Extended.neutral_params();
    params[0] = -1.0;
    let image = create_test_gradient(3, 3);
    let out = Pipeline::extended().enhance(&image, &params);
    assert!(out.is_ok(), "numeric edge cases are not contract violations");

    let negative = RgbImage::filled(1, 1, [-0.2, 0.5, 0.5]);
    let out = Pipeline::basic()
        .enhance(&negative, &Variant::Basic.neutral_params())
        .unwrap();
    assert!(out.pixels[0][0].is_nan());
}
