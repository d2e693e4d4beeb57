//! Waveshaping transfer functions shared by the saturno processors.
//!
//! All functions are allocation-free, `no_std`, and pure per-sample maps -
//! safe to call from the innermost audio loop.
//!
//! | Function | Character | Use case |
//! |----------|-----------|----------|
//! | [`fold_back`] | Metallic, complex harmonics | Synth/modular distortion |
//! | [`atan_drive`] | Smooth, warm saturation | Tube amp stages |

use libm::{atanf, fabsf, fmodf};

/// Foldback transfer function.
///
/// Inside `[-threshold, threshold]` the signal passes through unchanged.
/// Outside, it reflects off the threshold instead of clipping; the closed
/// form `||fmod(x - T, 4T)| - 2T| - T` collapses any number of reflections
/// into a single modulo, so arbitrarily hot inputs stay O(1) per sample.
/// Output is always confined to `[-threshold, threshold]`.
///
/// `threshold == 0` is degenerate (modulo by zero yields NaN) and is the
/// caller's responsibility; nothing is guarded here.
///
/// # Example
/// ```rust
/// use saturno_core::fold_back;
///
/// // Below the threshold the signal is untouched.
/// assert_eq!(fold_back(0.3, 0.5), 0.3);
/// // 0.8 against a 0.5 threshold folds down to 0.2.
/// assert!((fold_back(0.8, 0.5) - 0.2).abs() < 1e-6);
/// ```
#[inline]
pub fn fold_back(x: f32, threshold: f32) -> f32 {
    if fabsf(x) <= threshold {
        x
    } else {
        fabsf(fabsf(fmodf(x - threshold, threshold * 4.0)) - threshold * 2.0) - threshold
    }
}

/// Normalized arctangent saturation stage.
///
/// Computes `atan(drive * x) / atan(drive)`. The `1/atan(drive)`
/// normalization pins unity input to unity output for any drive, so stages
/// can be cascaded without level buildup; inputs in `[-1, 1]` stay in
/// `[-1, 1]` for any positive drive.
///
/// `drive == 0` is degenerate (`atan(0)` divisor yields NaN) and is the
/// caller's responsibility.
///
/// # Example
/// ```rust
/// use saturno_core::atan_drive;
///
/// // Unity input maps to unity output regardless of drive.
/// assert!((atan_drive(1.0, 4.0) - 1.0).abs() < 1e-6);
/// ```
#[inline]
pub fn atan_drive(x: f32, drive: f32) -> f32 {
    atanf(drive * x) / atanf(drive)
}
