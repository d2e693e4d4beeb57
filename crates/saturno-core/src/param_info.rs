//! Parameter introspection for discoverable processor parameters.
//!
//! The [`ParameterInfo`] trait lets a host enumerate and drive a processor's
//! controls without knowing the concrete type: map encoder knobs or message
//! inlets to indices, build generic UIs, save parameter state.
//!
//! # Design
//!
//! Index-based access, no heap, fully `no_std`. Each parameter is described
//! by a [`ParamDescriptor`] with range, default and display metadata.
//!
//! [`ParameterInfo::set_param`] clamps to the descriptor range - it is the
//! host-facing layer, and hosts expect advertised ranges to hold. The plain
//! setters on the concrete processors (`set_threshold`, `set_stages`, ...)
//! stay unvalidated; they are the raw control-message path and degenerate
//! values there are a documented caller responsibility.
//!
//! # Example
//!
//! ```rust
//! use saturno_core::{ParameterInfo, ParamDescriptor};
//!
//! struct SimpleGain {
//!     gain: f32,
//! }
//!
//! impl ParameterInfo for SimpleGain {
//!     fn param_count(&self) -> usize { 1 }
//!
//!     fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
//!         match index {
//!             0 => Some(ParamDescriptor::custom("Gain", "Gain", 0.0, 4.0, 1.0)),
//!             _ => None,
//!         }
//!     }
//!
//!     fn get_param(&self, index: usize) -> f32 {
//!         match index {
//!             0 => self.gain,
//!             _ => 0.0,
//!         }
//!     }
//!
//!     fn set_param(&mut self, index: usize, value: f32) {
//!         if index == 0 {
//!             self.gain = value.clamp(0.0, 4.0);
//!         }
//!     }
//! }
//! ```

/// Trait for processors that expose introspectable parameters.
///
/// Parameters are accessed by zero-based index, stable for the lifetime of
/// the instance. Out-of-bounds indices are handled gracefully: `get_param`
/// returns `0.0`, `set_param` is ignored.
pub trait ParameterInfo {
    /// Returns the number of parameters this processor exposes.
    ///
    /// Valid parameter indices are `0..param_count()`.
    fn param_count(&self) -> usize;

    /// Returns the descriptor for the parameter at the given index.
    ///
    /// Returns `None` if `index >= param_count()`.
    fn param_info(&self, index: usize) -> Option<ParamDescriptor>;

    /// Gets the current value of the parameter at the given index.
    ///
    /// Returns `0.0` for out-of-bounds indices.
    fn get_param(&self, index: usize) -> f32;

    /// Sets the value of the parameter at the given index.
    ///
    /// The value is clamped to the descriptor's range. Out-of-bounds
    /// indices are ignored.
    fn set_param(&mut self, index: usize, value: f32);

    /// Find a parameter index by name (case-insensitive).
    ///
    /// Matches against both [`ParamDescriptor::name`] and
    /// [`ParamDescriptor::short_name`].
    fn find_param_by_name(&self, name: &str) -> Option<usize> {
        (0..self.param_count()).find(|&i| {
            self.param_info(i).is_some_and(|desc| {
                desc.name.eq_ignore_ascii_case(name) || desc.short_name.eq_ignore_ascii_case(name)
            })
        })
    }
}

/// Describes a single parameter's metadata for display and validation.
///
/// The `short_name` field should be 8 characters or less for hardware
/// displays. The `step` field is the recommended increment for
/// encoder-based control; `stepped` marks discrete (integer/toggle)
/// parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    /// Full parameter name for display (e.g., "Positive Drive").
    pub name: &'static str,

    /// Short name for hardware displays, max 8 characters (e.g., "Pos").
    pub short_name: &'static str,

    /// Unit type for formatting the parameter value.
    pub unit: ParamUnit,

    /// Minimum allowed value for this parameter.
    pub min: f32,

    /// Maximum allowed value for this parameter.
    pub max: f32,

    /// Default value when the processor is initialized or reset.
    pub default: f32,

    /// Recommended step increment for encoder-based control.
    pub step: f32,

    /// Whether the parameter takes discrete steps (toggles, counts).
    pub stepped: bool,
}

impl ParamDescriptor {
    /// Dimensionless continuous parameter with custom name and range.
    pub const fn custom(
        name: &'static str,
        short_name: &'static str,
        min: f32,
        max: f32,
        default: f32,
    ) -> Self {
        Self {
            name,
            short_name,
            unit: ParamUnit::None,
            min,
            max,
            default,
            step: 0.01,
            stepped: false,
        }
    }

    /// Frequency parameter in Hz with custom name and range.
    pub const fn freq_hz(
        name: &'static str,
        short_name: &'static str,
        min: f32,
        max: f32,
        default: f32,
    ) -> Self {
        Self {
            name,
            short_name,
            unit: ParamUnit::Hertz,
            min,
            max,
            default,
            step: 1.0,
            stepped: false,
        }
    }

    /// Marks the parameter as discrete and sets a unit step.
    ///
    /// Builder pattern - call after a factory method.
    pub const fn stepped(mut self) -> Self {
        self.stepped = true;
        self.step = 1.0;
        self
    }

    /// Clamps a value to this parameter's valid range.
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// Converts a plain value to normalized range (0.0 to 1.0).
    #[inline]
    pub fn normalize(&self, value: f32) -> f32 {
        let range = self.max - self.min;
        if range == 0.0 {
            return 0.0;
        }
        (value - self.min) / range
    }

    /// Converts a normalized value (0.0 to 1.0) to the actual range.
    #[inline]
    pub fn denormalize(&self, normalized: f32) -> f32 {
        self.min + normalized * (self.max - self.min)
    }
}

/// Unit type for parameter display and formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamUnit {
    /// Hertz (Hz) - for frequency parameters.
    Hertz,

    /// No unit - for dimensionless or custom parameters.
    None,
}

impl ParamUnit {
    /// Returns the unit suffix string for display.
    ///
    /// # Example
    ///
    /// ```rust
    /// use saturno_core::ParamUnit;
    ///
    /// assert_eq!(ParamUnit::Hertz.suffix(), " Hz");
    /// assert_eq!(ParamUnit::None.suffix(), "");
    /// ```
    pub const fn suffix(&self) -> &'static str {
        match self {
            ParamUnit::Hertz => " Hz",
            ParamUnit::None => "",
        }
    }
}
