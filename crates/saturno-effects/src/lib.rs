//! Saturno Effects - waveshaping distortion processors
//!
//! This crate provides the two saturno waveshapers, built on the
//! saturno-core processing contract:
//!
//! - [`Foldback`] - reflecting fold around a movable threshold
//! - [`TubeDistortion`] - cascaded arctangent saturation stages with
//!   independent positive/negative drive and optional polarity inversion
//!
//! Both are mono, zero-latency, allocation-free per-sample maps. Control
//! parameters are plain mutable fields written between blocks; the host is
//! expected to serialize setter calls and block processing for a given
//! instance (no internal locking).
//!
//! ## Example
//!
//! ```rust
//! use saturno_core::{Effect, EffectExt};
//! use saturno_effects::{Foldback, TubeDistortion};
//!
//! let fold = Foldback::new(0.6);
//! let tube = TubeDistortion::new(3.0, 2.0, false);
//!
//! // Chain effects together
//! let mut chain = fold.chain(tube);
//! let output = chain.process(0.8);
//! assert!(output.is_finite());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod foldback;
pub mod tube;

// Re-export main types at crate root
pub use foldback::Foldback;
pub use tube::TubeDistortion;
