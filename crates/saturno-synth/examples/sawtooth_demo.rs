//! Demonstration of the band-limited sawtooth oscillator
//!
//! Renders a second of audio, shows the phase accumulator behavior, and
//! compares the corrected output against a naive ramp at the wrap.
//!
//! Run with: cargo run --example sawtooth_demo

use saturno_synth::PolyBlepOscillator;

const SAMPLE_RATE: f32 = 48000.0;

fn main() {
    println!("Saturno Sawtooth Demo");
    println!("=====================\n");

    let mut osc = PolyBlepOscillator::new(220.0, SAMPLE_RATE);
    let mut block = vec![0.0_f32; SAMPLE_RATE as usize];
    osc.fill_block(&mut block);

    let min = block.iter().copied().fold(f32::INFINITY, f32::min);
    let max = block.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let crossings = block
        .windows(2)
        .filter(|w| w[0] <= 0.0 && w[1] > 0.0)
        .count();

    println!("220 Hz over one second at {} Hz", SAMPLE_RATE);
    println!("  range [{min:.4}, {max:.4}]");
    println!("  {crossings} upward zero crossings");
    println!("  phase after block: {:.6} rad\n", osc.phase());

    // Phase offset via the control inlet: start a quarter cycle in.
    let mut offset = PolyBlepOscillator::new(220.0, SAMPLE_RATE);
    offset.set_phase(core::f32::consts::PI / 2.0);
    let mut first = [0.0_f32; 4];
    offset.fill_block(&mut first);
    println!("First samples from a quarter-cycle phase offset:");
    for (i, s) in first.iter().enumerate() {
        println!("  [{i}] {s:+.5}");
    }

    // The correction only touches samples near the wrap.
    let mut hot = PolyBlepOscillator::new(6000.0, SAMPLE_RATE);
    let mut cycle = [0.0_f32; 8];
    hot.fill_block(&mut cycle);
    println!("\nOne 6 kHz cycle (correction active near the wrap):");
    for (i, s) in cycle.iter().enumerate() {
        println!("  [{i}] {s:+.5}");
    }
}
