//! Foldback distortion.
//!
//! Instead of flattening peaks the way a clipper does, foldback reflects
//! the signal back off the threshold, so hot input keeps moving inside
//! `[-threshold, threshold]`. The result is a metallic, synth-flavored
//! harmonic character that gets denser the harder the input is driven.

use saturno_core::{Effect, ParamDescriptor, ParameterInfo, fold_back};

/// Foldback distortion processor.
///
/// A stateless per-sample map: the only field is the fold threshold, and
/// no processing state is carried across samples or blocks.
///
/// The threshold is a raw control value. `set_threshold` performs no
/// validation; a zero or negative threshold is degenerate (NaN output)
/// and is the caller's responsibility. The [`ParameterInfo`] surface
/// advertises a safe range and clamps into it.
///
/// # Example
///
/// ```rust
/// use saturno_core::Effect;
/// use saturno_effects::Foldback;
///
/// let mut fold = Foldback::new(0.5);
/// let output = fold.process(0.8);
/// assert!((output - 0.2).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct Foldback {
    /// Fold threshold (linear amplitude).
    threshold: f32,
}

impl Foldback {
    /// Create a new foldback processor with the given threshold.
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    /// Set the fold threshold.
    ///
    /// No validation is performed; callers must supply `threshold > 0`
    /// for meaningful output.
    pub fn set_threshold(&mut self, threshold: f32) {
        self.threshold = threshold;
    }

    /// Get the current fold threshold.
    pub fn threshold(&self) -> f32 {
        self.threshold
    }
}

impl Default for Foldback {
    /// Matches construction with no host argument: threshold 0. Set a
    /// positive threshold before processing.
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl Effect for Foldback {
    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        fold_back(input, self.threshold)
    }

    fn set_sample_rate(&mut self, _sample_rate: f32) {
        // The fold is rate-independent.
    }

    fn reset(&mut self) {
        // No processing state to clear.
    }

    fn latency_samples(&self) -> usize {
        0
    }
}

impl ParameterInfo for Foldback {
    fn param_count(&self) -> usize {
        1
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        match index {
            0 => Some(ParamDescriptor::custom("Threshold", "Thresh", 0.01, 2.0, 0.5)),
            _ => None,
        }
    }

    fn get_param(&self, index: usize) -> f32 {
        match index {
            0 => self.threshold,
            _ => 0.0,
        }
    }

    fn set_param(&mut self, index: usize, value: f32) {
        if index == 0 {
            // Host-facing path clamps; the raw setter does not.
            if let Some(desc) = self.param_info(0) {
                self.threshold = desc.clamp(value);
            }
        }
    }
}
