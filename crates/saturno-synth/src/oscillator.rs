//! Band-limited sawtooth oscillator.
//!
//! A naive sawtooth has a discontinuity at every phase wrap, which aliases
//! badly at audio rates. This oscillator keeps the cheap phase-accumulator
//! ramp and adds a 2nd-order PolyBLEP (polynomial band-limited step)
//! correction in a one-`norm_freq`-wide band on each side of the wrap,
//! approximating a band-limited step without oversampling.

use core::f32::consts::TAU;
use saturno_core::{ParamDescriptor, ParameterInfo};

/// Fallback rate when construction does not supply one.
const DEFAULT_SAMPLE_RATE: f32 = 48_000.0;

/// Band-limited sawtooth oscillator with PolyBLEP correction.
///
/// The phase accumulator runs over `[0, 2π]` in radians and is the only
/// state carried across blocks. At the start of every block it is clamped
/// (not wrapped) back into range, so an out-of-range value written through
/// [`set_phase`](Self::set_phase) snaps to the nearest bound; during the
/// block it wraps modulo `2π`.
///
/// The single-step wrap relies on `frequency_hz < sample_rate_hz`; beyond
/// that the caller gets aliased output, not an error. Frequency and phase
/// are raw control values - the plain setters perform no validation, while
/// the [`ParameterInfo`] surface clamps into its advertised ranges.
///
/// # Example
///
/// ```rust
/// use saturno_synth::PolyBlepOscillator;
///
/// let mut osc = PolyBlepOscillator::new(440.0, 48000.0);
/// let mut block = [0.0_f32; 64];
/// osc.fill_block(&mut block);
/// assert!(block.iter().all(|s| s.abs() <= 1.2));
/// ```
#[derive(Debug, Clone)]
pub struct PolyBlepOscillator {
    /// Oscillator frequency in Hz.
    frequency_hz: f32,
    /// Sample rate in Hz, fixed at construction.
    sample_rate_hz: f32,
    /// Phase in radians, kept in `[0, 2π]`.
    phase: f32,
}

impl PolyBlepOscillator {
    /// Create a new oscillator.
    ///
    /// A `sample_rate_hz` of zero or below falls back to 48 kHz, standing
    /// in for "use the host's running rate". The rate is fixed for the
    /// lifetime of the instance.
    pub fn new(frequency_hz: f32, sample_rate_hz: f32) -> Self {
        let sample_rate_hz = if sample_rate_hz <= 0.0 {
            DEFAULT_SAMPLE_RATE
        } else {
            sample_rate_hz
        };
        Self {
            frequency_hz,
            sample_rate_hz,
            phase: 0.0,
        }
    }

    /// Set frequency in Hz. Not validated; meaningful output requires
    /// `0 < hz < sample_rate_hz`.
    pub fn set_frequency(&mut self, hz: f32) {
        self.frequency_hz = hz;
    }

    /// Get current frequency in Hz.
    pub fn frequency(&self) -> f32 {
        self.frequency_hz
    }

    /// Get the sample rate in Hz.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate_hz
    }

    /// Set the phase in radians.
    ///
    /// The raw value is stored as-is; the next block clamps it into
    /// `[0, 2π]`. Use this to reset or offset the waveform position.
    pub fn set_phase(&mut self, phase: f32) {
        self.phase = phase;
    }

    /// Get the current phase in radians.
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Render one block of samples.
    ///
    /// A zero-length block performs the block-start phase clamp and
    /// nothing else. With `frequency_hz == 0` the correction windows are
    /// empty (`t` never leaves `[0, 1]`, so neither branch divides) and
    /// the output is the frozen naive ramp value.
    pub fn fill_block(&mut self, out: &mut [f32]) {
        let norm_freq = self.frequency_hz / self.sample_rate_hz;
        let phase_incr = norm_freq * TAU;

        // Out-of-range phase snaps to the nearest bound rather than
        // wrapping.
        self.phase = self.phase.clamp(0.0, TAU);

        for sample in out.iter_mut() {
            let t = self.phase / TAU;
            let saw = 2.0 * t - 1.0;

            self.phase += phase_incr;
            if self.phase >= TAU {
                self.phase -= TAU;
            }

            // Correction uses the pre-advance phase: a one-norm_freq-wide
            // band on each side of the wrap discontinuity.
            let correction = if t < norm_freq {
                let tn = t / norm_freq;
                2.0 * tn - tn * tn - 1.0
            } else if t > 1.0 - norm_freq {
                let tn = (t - 1.0) / norm_freq;
                tn * tn + 2.0 * tn + 1.0
            } else {
                0.0
            };

            *sample = saw - correction;
        }
    }
}

impl Default for PolyBlepOscillator {
    fn default() -> Self {
        Self::new(440.0, DEFAULT_SAMPLE_RATE)
    }
}

impl ParameterInfo for PolyBlepOscillator {
    fn param_count(&self) -> usize {
        2
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        match index {
            0 => Some(ParamDescriptor::freq_hz("Frequency", "Freq", 0.0, 20_000.0, 440.0)),
            1 => Some(ParamDescriptor::custom("Phase", "Phase", 0.0, TAU, 0.0)),
            _ => None,
        }
    }

    fn get_param(&self, index: usize) -> f32 {
        match index {
            0 => self.frequency_hz,
            1 => self.phase,
            _ => 0.0,
        }
    }

    fn set_param(&mut self, index: usize, value: f32) {
        let Some(desc) = self.param_info(index) else {
            return;
        };
        let value = desc.clamp(value);
        match index {
            0 => self.frequency_hz = value,
            1 => self.phase = value,
            _ => {}
        }
    }
}
