//! Saturno Synth - band-limited sawtooth generation
//!
//! This crate provides the saturno generator: a sawtooth oscillator that
//! suppresses aliasing with a polynomial band-limited step (PolyBLEP)
//! correction instead of oversampling.
//!
//! ```rust
//! use saturno_synth::PolyBlepOscillator;
//!
//! let mut osc = PolyBlepOscillator::new(440.0, 48000.0);
//! let mut block = [0.0_f32; 256];
//! osc.fill_block(&mut block);
//! ```
//!
//! The oscillator is a plain value object: no allocation, no locking, no
//! I/O in the processing path. Control setters (`set_frequency`,
//! `set_phase`) and `fill_block` are expected to be serialized by the host
//! for a given instance, one writer at a time.
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the default `std` feature:
//!
//! ```toml
//! [dependencies]
//! saturno-synth = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod oscillator;

// Re-export main types at crate root
pub use oscillator::PolyBlepOscillator;
