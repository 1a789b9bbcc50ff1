use crate::error::FormatError;
use std::fmt;
use std::str::FromStr;

/// An 8-bit per channel RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Rgb { red, green, blue }
    }

    /// Parse an HTML style hex colour such as `ff0000` or `#ff0000`.
    ///
    /// The digits are read as one integer and split into bytes, so short
    /// input is zero-extended (`f00` is `0x000F00`) and only the last six
    /// digits of longer input count.
    pub fn from_hex(input: &str) -> Result<Self, FormatError> {
        let digits = input.strip_prefix('#').unwrap_or(input);

        // from_str_radix tolerates a leading sign, a colour must not
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(FormatError::Invalid(input.to_string()));
        }

        // ascii checked above, so slicing on a byte index is safe
        let low = &digits[digits.len().saturating_sub(6)..];
        let value =
            u32::from_str_radix(low, 16).map_err(|_| FormatError::Invalid(input.to_string()))?;

        Ok(Rgb::from(value))
    }

    /// Like [`Rgb::from_hex`], for arguments that may not have been supplied.
    pub fn from_optional_hex(input: Option<&str>) -> Result<Self, FormatError> {
        input.ok_or(FormatError::Missing).and_then(Rgb::from_hex)
    }

    /// `0xRRGGBB` form used in the generated array literal.
    pub fn to_hex(&self) -> String {
        format_rgb(self.red.into(), self.green.into(), self.blue.into())
    }

    /// Packed `0xRRGGBB` value.
    pub fn to_u32(&self) -> u32 {
        (self.red as u32) << 16 | (self.green as u32) << 8 | self.blue as u32
    }

    pub fn channels(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl From<u32> for Rgb {
    fn from(value: u32) -> Self {
        Rgb {
            red: ((value >> 16) & 0xFF) as u8,
            green: ((value >> 8) & 0xFF) as u8,
            blue: (value & 0xFF) as u8,
        }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Rgb { red, green, blue }
    }
}

impl FromStr for Rgb {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgb::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:06X}", self.to_u32())
    }
}

/// Combine three channel values into `0xRRGGBB`.
///
/// Each channel is masked to its low byte, so out-of-range values wrap
/// rather than fail: `(256, -1, 300)` renders the same as `(0, 255, 44)`.
pub fn format_rgb(red: i64, green: i64, blue: i64) -> String {
    let (r, g, b) = (red & 0xFF, green & 0xFF, blue & 0xFF);
    let value = r << 16 | g << 8 | b;
    format!("0x{:06X}", value)
}
