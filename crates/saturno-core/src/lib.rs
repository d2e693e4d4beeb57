//! Saturno Core - processing contract and waveshaping math
//!
//! This crate provides the shared foundation for the saturno processors:
//! the block-processing contract every waveshaper implements, the parameter
//! introspection surface a host uses to discover controls, and the transfer
//! functions the effects are built from.
//!
//! # Core Abstractions
//!
//! ## Effect System
//!
//! - [`Effect`] - Object-safe trait for all audio processors
//! - [`EffectExt`] - Extension trait for effect chaining
//! - [`Chain`] - Zero-cost effect chain combinator
//!
//! ## Parameter Introspection
//!
//! - [`ParameterInfo`] - Index-based parameter discovery and access
//! - [`ParamDescriptor`] - Per-parameter metadata (range, default, unit)
//!
//! ## Waveshaping Math
//!
//! - [`fold_back`] - Reflecting fold around a threshold
//! - [`atan_drive`] - Normalized arctangent saturation stage
//!
//! # Real-Time Contract
//!
//! Everything here is written for the audio callback: no allocation, no
//! locking, no I/O in any processing path. Parameter setters and block
//! processing are expected to be serialized by the host (one writer at a
//! time per instance); the crate adds no internal synchronization, because
//! doing so would add latency to the real-time path.
//!
//! The processors perform no input validation. Degenerate control values
//! (a zero fold threshold, a zero drive) produce IEEE-754 degenerate
//! output rather than errors - the per-type docs spell out each contract.
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible for embedded audio applications.
//! Disable the default `std` feature in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! saturno-core = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod effect;
pub mod math;
pub mod param_info;

// Re-export main types at crate root
pub use effect::{Chain, Effect, EffectExt};
pub use math::{atan_drive, fold_back};
pub use param_info::{ParamDescriptor, ParamUnit, ParameterInfo};
