//! Demonstration of the saturno waveshapers
//!
//! Runs a sine block through each processor and through a static-dispatch
//! chain, then shows a control-rate parameter change between blocks.
//!
//! Run with: cargo run --example waveshaper_demo

use saturno_core::{Effect, EffectExt, ParameterInfo};
use saturno_effects::{Foldback, TubeDistortion};

const SAMPLE_RATE: f32 = 48000.0;
const BLOCK_SIZE: usize = 4800;

fn sine_block(amplitude: f32) -> Vec<f32> {
    (0..BLOCK_SIZE)
        .map(|i| {
            let t = i as f32 / SAMPLE_RATE;
            (2.0 * std::f32::consts::PI * 440.0 * t).sin() * amplitude
        })
        .collect()
}

fn rms(block: &[f32]) -> f32 {
    (block.iter().map(|x| x * x).sum::<f32>() / block.len() as f32).sqrt()
}

fn peak(block: &[f32]) -> f32 {
    block.iter().map(|x| x.abs()).fold(0.0_f32, f32::max)
}

fn main() {
    println!("Saturno Waveshaper Demo");
    println!("=======================\n");

    let input = sine_block(0.9);
    let mut output = vec![0.0; BLOCK_SIZE];

    // Foldback on its own
    let mut fold = Foldback::new(0.4);
    fold.process_block(&input, &mut output);
    println!("Foldback (threshold 0.4)");
    println!("  in  RMS {:.4}  peak {:.4}", rms(&input), peak(&input));
    println!("  out RMS {:.4}  peak {:.4}\n", rms(&output), peak(&output));

    // Tube distortion with asymmetric drive and four inverting stages
    let mut tube = TubeDistortion::new(6.0, 2.5, true);
    tube.set_stages(4.0);
    tube.process_block(&input, &mut output);
    println!("TubeDistortion (pos 6.0, neg 2.5, invert, 4 stages)");
    println!("  out RMS {:.4}  peak {:.4}\n", rms(&output), peak(&output));

    // Static-dispatch chain: fold into a tube stage
    let mut chain = Foldback::new(0.6).chain(TubeDistortion::new(3.0, 3.0, false));
    chain.process_block(&input, &mut output);
    println!("Chain: Foldback -> TubeDistortion");
    println!("  out RMS {:.4}  peak {:.4}", rms(&output), peak(&output));
    println!("  latency {} samples\n", chain.latency_samples());

    // Control-rate update between blocks: tighten the fold
    chain.first_mut().set_threshold(0.2);
    chain.process_block(&input, &mut output);
    println!("Same chain after set_threshold(0.2)");
    println!("  out RMS {:.4}  peak {:.4}\n", rms(&output), peak(&output));

    // Parameter discovery, the way a generic host would drive it
    let tube = TubeDistortion::new(1.0, 1.0, false);
    println!("TubeDistortion parameters:");
    for i in 0..tube.param_count() {
        let desc = tube.param_info(i).unwrap();
        println!(
            "  [{i}] {:<14} {:>6.2} ..{:>6.2}{}  (default {:.2})",
            desc.name,
            desc.min,
            desc.max,
            desc.unit.suffix(),
            desc.default
        );
    }
}
