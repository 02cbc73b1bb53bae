//! RGBA colors with `#RRGGBBAA` hex encoding and channel averaging

use crate::io::error::{DotterError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Four 8-bit channels: red, green, blue, alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    /// Fully transparent black, returned for empty averages
    pub const TRANSPARENT: Self = Self([0, 0, 0, 0]);

    /// Create a color from its channels
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self([red, green, blue, alpha])
    }

    /// Channels in red, green, blue, alpha order
    pub const fn channels(self) -> [u8; 4] {
        self.0
    }

    /// Alpha channel
    pub const fn alpha(self) -> u8 {
        self.0[3]
    }

    /// Encode as lowercase `#rrggbbaa`
    pub fn to_hex(self) -> String {
        let [r, g, b, a] = self.0;
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }

    /// Decode `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA` (the `#` is optional)
    ///
    /// Colors without an alpha component are fully opaque.
    ///
    /// # Errors
    ///
    /// Returns [`DotterError::InvalidColor`] for any other length or a non-hex digit
    pub fn from_hex(value: &str) -> Result<Self> {
        let invalid = || DotterError::InvalidColor {
            value: value.to_string(),
        };
        let digits = value.trim().trim_start_matches('#');
        if !digits.is_ascii() {
            return Err(invalid());
        }

        let nibble = |index: usize| -> Result<u8> {
            let text = digits.get(index..=index).ok_or_else(invalid)?;
            u8::from_str_radix(text, 16).map_err(|_parse_error| invalid())
        };
        let byte = |index: usize| -> Result<u8> {
            let text = digits.get(index..index + 2).ok_or_else(invalid)?;
            u8::from_str_radix(text, 16).map_err(|_parse_error| invalid())
        };

        match digits.len() {
            3 | 4 => {
                let mut channels = [255; 4];
                for (i, channel) in channels.iter_mut().enumerate().take(digits.len()) {
                    *channel = nibble(i)? * 17;
                }
                Ok(Self(channels))
            }
            6 | 8 => {
                let mut channels = [255; 4];
                for (i, channel) in channels.iter_mut().enumerate().take(digits.len() / 2) {
                    *channel = byte(i * 2)?;
                }
                Ok(Self(channels))
            }
            _ => Err(invalid()),
        }
    }

    /// Add signed per-channel offsets, clamping each channel to `[0, 255]`
    #[must_use]
    pub fn offset(self, offsets: [i32; 4]) -> Self {
        let mut channels = self.0;
        for (channel, offset) in channels.iter_mut().zip(offsets) {
            *channel = (i32::from(*channel) + offset).clamp(0, 255) as u8;
        }
        Self(channels)
    }

    /// Whether R, G and B each lie within `max_deviation` of `other`
    pub fn rgb_within(self, other: Self, max_deviation: u8) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .take(3)
            .all(|(&a, &b)| a.abs_diff(b) <= max_deviation)
    }
}

/// Per-channel rounded mean of `colors`
///
/// An empty input yields [`Rgba::TRANSPARENT`] rather than a division by zero.
pub fn middleweight_color<I>(colors: I) -> Rgba
where
    I: IntoIterator<Item = Rgba>,
{
    let mut sums = [0_u64; 4];
    let mut count = 0_u64;
    for color in colors {
        for (sum, channel) in sums.iter_mut().zip(color.0) {
            *sum += u64::from(channel);
        }
        count += 1;
    }

    if count == 0 {
        return Rgba::TRANSPARENT;
    }

    Rgba(sums.map(|sum| (sum as f64 / count as f64).round() as u8))
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgba {
    type Err = DotterError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::from_hex(&text).map_err(serde::de::Error::custom)
    }
}
