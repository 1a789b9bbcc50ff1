use crate::models::Rgb;
use log::debug;
use std::num::NonZeroUsize;

/// Linear interpolation of `y` at position `x` on the line through
/// `(x0, y0)` and `(x1, y1)`.
///
/// No clamping is applied. `x0 == x1` divides by zero and yields a
/// non-finite result, so callers must keep the range non-degenerate.
pub fn lerp(x: f64, x0: f64, x1: f64, y0: f64, y1: f64) -> f64 {
    y0 + (y1 - y0) * ((x - x0) / (x1 - x0))
}

/// Interpolate `steps` colours from `start` to `end`, channel by channel.
///
/// Interpolated values are truncated toward zero, not rounded, then masked
/// to a byte. A single step has no range to interpolate over and yields
/// just `start`.
pub fn gradient(start: Rgb, end: Rgb, steps: NonZeroUsize) -> Vec<Rgb> {
    let steps = steps.get();
    if steps == 1 {
        debug!("Single step gradient, emitting start colour {}", start);
        return vec![start];
    }

    let last = (steps - 1) as f64;
    let channel = |i: usize, from: u8, to: u8| -> u8 {
        let value = lerp(i as f64, 0.0, last, from.into(), to.into());
        (value as i64 & 0xFF) as u8
    };

    let colours: Vec<Rgb> = (0..steps)
        .map(|i| Rgb {
            red: channel(i, start.red, end.red),
            green: channel(i, start.green, end.green),
            blue: channel(i, start.blue, end.blue),
        })
        .collect();

    debug!(
        "Interpolated {} colours from {} to {}",
        colours.len(),
        start,
        end
    );
    colours
}
