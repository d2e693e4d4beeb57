//! Multi-stage tube-style distortion.
//!
//! Cascades normalized-arctangent saturation stages, with independent
//! drive for the positive and negative halves of the waveform and an
//! optional polarity flip after every even-indexed stage. The asymmetric
//! drive gives the even-harmonic warmth of a tube stage; the alternating
//! inversion across stages emphasizes odd harmonics the way cascaded
//! inverting tube stages do.

use saturno_core::{Effect, ParamDescriptor, ParameterInfo, atan_drive};

/// Multi-stage tube distortion processor.
///
/// All state is parameter state; no processing state is carried across
/// samples. The stage count is stored as a raw float control value and
/// truncated to an integer at the start of every processed block, so it
/// moves at control rate like the drives.
///
/// The plain setters perform no validation. Zero drive values are
/// degenerate (`atan(0)` divisor, NaN output), and a stage-count float
/// that truncates to zero or below runs no passes at all - the sample
/// passes through unmodified. Both are the caller's responsibility; the
/// [`ParameterInfo`] surface advertises safe ranges and clamps into them.
///
/// # Example
///
/// ```rust
/// use saturno_core::Effect;
/// use saturno_effects::TubeDistortion;
///
/// let mut tube = TubeDistortion::new(2.0, 2.0, false);
/// let output = tube.process(0.5);
/// assert!(output > 0.5 && output < 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct TubeDistortion {
    /// Drive for the positive half of the waveform.
    positive_drive: f32,
    /// Drive for the negative half of the waveform.
    negative_drive: f32,
    /// Negate the signal after every even-indexed stage.
    invert: bool,
    /// Stage count as a raw float control value, truncated at block start.
    stages: f32,
}

impl TubeDistortion {
    /// Create a new tube distortion with the given drives and inversion
    /// flag. The stage count starts at 1.
    pub fn new(positive_drive: f32, negative_drive: f32, invert: bool) -> Self {
        Self {
            positive_drive,
            negative_drive,
            invert,
            stages: 1.0,
        }
    }

    /// Set the drive applied to positive half-waves. Not validated;
    /// callers must supply a nonzero value.
    pub fn set_positive_drive(&mut self, drive: f32) {
        self.positive_drive = drive;
    }

    /// Get the positive-half drive.
    pub fn positive_drive(&self) -> f32 {
        self.positive_drive
    }

    /// Set the drive applied to negative half-waves. Not validated;
    /// callers must supply a nonzero value.
    pub fn set_negative_drive(&mut self, drive: f32) {
        self.negative_drive = drive;
    }

    /// Get the negative-half drive.
    pub fn negative_drive(&self) -> f32 {
        self.negative_drive
    }

    /// Enable or disable the even-stage polarity flip.
    pub fn set_invert(&mut self, invert: bool) {
        self.invert = invert;
    }

    /// Get the inversion flag.
    pub fn invert(&self) -> bool {
        self.invert
    }

    /// Set the stage count as a float control value.
    ///
    /// The value is truncated toward zero at the start of each processed
    /// block. Not validated; a value truncating to zero or below runs no
    /// saturation passes.
    pub fn set_stages(&mut self, stages: f32) {
        self.stages = stages;
    }

    /// Get the raw stage-count control value.
    pub fn stages(&self) -> f32 {
        self.stages
    }

    /// Run `stage_count` saturation passes over one sample.
    #[inline]
    fn shape(&self, input: f32, stage_count: i32) -> f32 {
        let mut v = input;
        for i in 0..stage_count {
            v = if v >= 0.0 {
                atan_drive(v, self.positive_drive)
            } else {
                atan_drive(v, self.negative_drive)
            };
            if self.invert && i % 2 == 0 {
                v = -v;
            }
        }
        v
    }
}

impl Effect for TubeDistortion {
    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        let stage_count = self.stages as i32;
        self.shape(input, stage_count)
    }

    fn process_block(&mut self, input: &[f32], output: &mut [f32]) {
        debug_assert_eq!(
            input.len(),
            output.len(),
            "Input and output buffers must have same length"
        );
        // The stage count is read once per block; the drives are read per
        // sample inside shape().
        let stage_count = self.stages as i32;
        for (inp, out) in input.iter().zip(output.iter_mut()) {
            *out = self.shape(*inp, stage_count);
        }
    }

    fn set_sample_rate(&mut self, _sample_rate: f32) {
        // The transfer curves are rate-independent.
    }

    fn reset(&mut self) {
        // No processing state to clear.
    }
}

impl ParameterInfo for TubeDistortion {
    fn param_count(&self) -> usize {
        4
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        match index {
            0 => Some(ParamDescriptor::custom("Positive Drive", "Pos", 0.1, 10.0, 1.0)),
            1 => Some(ParamDescriptor::custom("Negative Drive", "Neg", 0.1, 10.0, 1.0)),
            2 => Some(ParamDescriptor::custom("Invert", "Inv", 0.0, 1.0, 0.0).stepped()),
            3 => Some(ParamDescriptor::custom("Stages", "Stages", 1.0, 16.0, 1.0).stepped()),
            _ => None,
        }
    }

    fn get_param(&self, index: usize) -> f32 {
        match index {
            0 => self.positive_drive,
            1 => self.negative_drive,
            2 => {
                if self.invert {
                    1.0
                } else {
                    0.0
                }
            }
            3 => self.stages,
            _ => 0.0,
        }
    }

    fn set_param(&mut self, index: usize, value: f32) {
        let Some(desc) = self.param_info(index) else {
            return;
        };
        let value = desc.clamp(value);
        match index {
            0 => self.positive_drive = value,
            1 => self.negative_drive = value,
            2 => self.invert = value >= 0.5,
            3 => self.stages = value,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use saturno_core::atan_drive;

    #[test]
    fn single_stage_preserves_sign() {
        let mut tube = TubeDistortion::new(3.0, 3.0, false);
        let mut x = -1.0_f32;
        while x <= 1.0 {
            let y = tube.process(x);
            if x > 0.0 {
                assert!(y > 0.0, "sign flipped for {x}: {y}");
            } else if x < 0.0 {
                assert!(y < 0.0, "sign flipped for {x}: {y}");
            }
            x += 0.01;
        }
    }

    #[test]
    fn single_stage_known_value() {
        let mut tube = TubeDistortion::new(2.0, 2.0, false);
        // atan(1) / atan(2)
        assert!((tube.process(0.5) - 0.70939).abs() < 1e-4);
    }

    #[test]
    fn asymmetric_drives_select_by_sign() {
        let mut tube = TubeDistortion::new(8.0, 2.0, false);
        let pos = tube.process(0.5);
        let neg = tube.process(-0.5);
        assert!((pos - atan_drive(0.5, 8.0)).abs() < 1e-6);
        assert!((neg - atan_drive(-0.5, 2.0)).abs() < 1e-6);
        // Different drives make the curve asymmetric.
        assert!((pos + neg).abs() > 0.1);
    }

    #[test]
    fn invert_parity_across_stage_counts() {
        // Even-indexed stages flip, so stages 1 and 2 apply one flip
        // (index 0), stages 3 and 4 apply two (indices 0 and 2).
        for (stages, upright) in [(1.0, false), (2.0, false), (3.0, true), (4.0, true)] {
            let mut tube = TubeDistortion::new(2.0, 2.0, true);
            tube.set_stages(stages);
            let y = tube.process(0.5);
            assert_eq!(
                y > 0.0,
                upright,
                "stages {stages}: expected upright={upright}, got {y}"
            );
        }
    }

    #[test]
    fn no_invert_keeps_sign_for_any_stage_count() {
        for stages in 1..=8 {
            let mut tube = TubeDistortion::new(4.0, 4.0, false);
            tube.set_stages(stages as f32);
            assert!(tube.process(0.5) > 0.0);
            assert!(tube.process(-0.5) < 0.0);
        }
    }

    #[test]
    fn zero_stages_passes_through() {
        let mut tube = TubeDistortion::new(4.0, 4.0, false);
        tube.set_stages(0.0);
        assert_eq!(tube.process(0.7), 0.7);
        assert_eq!(tube.process(-0.3), -0.3);
    }

    #[test]
    fn stage_count_truncates() {
        let mut a = TubeDistortion::new(3.0, 3.0, false);
        let mut b = TubeDistortion::new(3.0, 3.0, false);
        a.set_stages(2.9);
        b.set_stages(2.0);
        assert_eq!(a.process(0.6), b.process(0.6));
    }

    #[test]
    fn more_stages_saturate_harder() {
        let mut one = TubeDistortion::new(4.0, 4.0, false);
        let mut four = TubeDistortion::new(4.0, 4.0, false);
        four.set_stages(4.0);
        // Each pass pushes mid-level input closer to the rail.
        assert!(four.process(0.3) > one.process(0.3));
    }

    #[test]
    fn output_bounded_on_unit_interval() {
        let mut tube = TubeDistortion::new(10.0, 10.0, true);
        tube.set_stages(6.0);
        let mut x = -1.0_f32;
        while x <= 1.0 {
            let y = tube.process(x);
            assert!(y.abs() <= 1.0 + 1e-5, "process({x}) = {y}");
            x += 0.01;
        }
    }

    #[test]
    fn block_matches_per_sample() {
        let mut a = TubeDistortion::new(5.0, 2.0, true);
        let mut b = TubeDistortion::new(5.0, 2.0, true);
        a.set_stages(3.0);
        b.set_stages(3.0);
        let input: Vec<f32> = (0..64).map(|i| (i as f32 - 32.0) / 32.0).collect();
        let mut block_out = vec![0.0; input.len()];
        a.process_block(&input, &mut block_out);
        for (i, &x) in input.iter().enumerate() {
            assert_eq!(block_out[i], b.process(x));
        }
    }

    #[test]
    fn param_surface() {
        let mut tube = TubeDistortion::new(1.0, 1.0, false);
        assert_eq!(tube.param_count(), 4);
        assert_eq!(tube.find_param_by_name("Stages"), Some(3));

        tube.set_param(2, 1.0);
        assert!(tube.invert());

        // Host path clamps the stage count into the advertised range...
        tube.set_param(3, 99.0);
        assert_eq!(tube.stages(), 16.0);
        tube.set_param(3, 0.0);
        assert_eq!(tube.stages(), 1.0);

        // ...while the raw setter preserves the literal zero-stage contract.
        tube.set_stages(0.0);
        assert_eq!(tube.stages(), 0.0);
    }
}
