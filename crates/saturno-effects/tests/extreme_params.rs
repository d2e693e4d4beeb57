//! Extreme and degenerate parameter tests for the saturno waveshapers.
//!
//! Verifies two things: parameters at the edges of their advertised
//! ranges produce finite output, and the documented degenerate settings
//! (zero threshold, zero drive, non-positive stage counts) never panic -
//! degenerate values may yield NaN, but the audio path must keep running.

use saturno_core::{Effect, ParameterInfo};
use saturno_effects::{Foldback, TubeDistortion};

const NUM_SAMPLES: usize = 1000;

/// Process `NUM_SAMPLES` through an effect and assert all outputs are finite.
fn assert_finite_output(effect: &mut dyn Effect, label: &str) {
    for i in 0..NUM_SAMPLES {
        let input = if i % 3 == 0 {
            0.5
        } else if i % 3 == 1 {
            -0.5
        } else {
            0.0
        };
        let output = effect.process(input);
        assert!(
            output.is_finite(),
            "{label}: non-finite output at sample {i}: {output}"
        );
    }
}

/// Process `NUM_SAMPLES` and require only that nothing panics.
fn assert_runs_to_completion(effect: &mut dyn Effect) {
    let mut acc = 0.0;
    for i in 0..NUM_SAMPLES {
        acc += effect.process((i as f32 * 0.013).sin());
    }
    // Keep the loop observable; NaN is an acceptable value here.
    let _ = acc;
}

/// Set all parameters to their minimum values using ParameterInfo.
fn set_all_params_min(effect: &mut (impl Effect + ParameterInfo)) {
    for i in 0..effect.param_count() {
        if let Some(desc) = effect.param_info(i) {
            effect.set_param(i, desc.min);
        }
    }
}

/// Set all parameters to their maximum values using ParameterInfo.
fn set_all_params_max(effect: &mut (impl Effect + ParameterInfo)) {
    for i in 0..effect.param_count() {
        if let Some(desc) = effect.param_info(i) {
            effect.set_param(i, desc.max);
        }
    }
}

#[test]
fn foldback_all_params_min() {
    let mut fold = Foldback::new(0.5);
    set_all_params_min(&mut fold);
    assert_finite_output(&mut fold, "Foldback (all min)");
}

#[test]
fn foldback_all_params_max() {
    let mut fold = Foldback::new(0.5);
    set_all_params_max(&mut fold);
    assert_finite_output(&mut fold, "Foldback (all max)");
}

#[test]
fn tube_all_params_min() {
    let mut tube = TubeDistortion::new(1.0, 1.0, false);
    set_all_params_min(&mut tube);
    assert_finite_output(&mut tube, "TubeDistortion (all min)");
}

#[test]
fn tube_all_params_max() {
    let mut tube = TubeDistortion::new(1.0, 1.0, false);
    set_all_params_max(&mut tube);
    assert_finite_output(&mut tube, "TubeDistortion (all max)");
}

#[test]
fn foldback_zero_threshold_does_not_panic() {
    // The degenerate zero-threshold contract: NaN output is allowed,
    // crashing is not.
    let mut fold = Foldback::new(0.0);
    assert_runs_to_completion(&mut fold);
}

#[test]
fn tube_zero_drive_does_not_panic() {
    let mut tube = TubeDistortion::new(0.0, 0.0, false);
    assert_runs_to_completion(&mut tube);
}

#[test]
fn tube_non_positive_stages_pass_through() {
    // The stage loop runs zero times for any stage count truncating to
    // zero or below, so the literal contract is pass-through.
    for stages in [0.0, 0.9, -1.0, -7.5] {
        let mut tube = TubeDistortion::new(4.0, 4.0, true);
        tube.set_stages(stages);
        assert_eq!(tube.process(0.42), 0.42, "stages = {stages}");
    }
}

#[test]
fn huge_control_values_stay_finite() {
    let mut fold = Foldback::new(1e6);
    assert_finite_output(&mut fold, "Foldback (huge threshold)");

    let mut tube = TubeDistortion::new(1e6, 1e6, true);
    tube.set_stages(16.0);
    assert_finite_output(&mut tube, "TubeDistortion (huge drives)");
}
