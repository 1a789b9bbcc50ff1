use super::colour::Rgb;
use serde::Serialize;

/// One entry of a rendered gradient, as written by the JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradientStep {
    pub index: usize,
    pub hex: String,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl From<(usize, &Rgb)> for GradientStep {
    fn from((index, colour): (usize, &Rgb)) -> Self {
        GradientStep {
            index,
            hex: colour.to_hex(),
            red: colour.red,
            green: colour.green,
            blue: colour.blue,
        }
    }
}
