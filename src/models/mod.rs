pub mod colour;
pub mod step;

pub use colour::{Rgb, format_rgb};
pub use step::GradientStep;
