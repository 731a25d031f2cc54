// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGB (24-bit) color representation, as parsed from `#RRGGBB` markup.

use std::fmt::{Display, Formatter, Result};

use super::parse_hex_color;
use crate::{ChatColorError, ChatColorResult, InlineString, inline_string};

/// Represents a color in RGB (24-bit) format.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug)]
pub struct RgbValue {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl From<(u8, u8, u8)> for RgbValue {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

impl From<u32> for RgbValue {
    fn from(value: u32) -> Self {
        let [_, red, green, blue] = value.to_be_bytes();
        Self { red, green, blue }
    }
}

impl Default for RgbValue {
    fn default() -> Self { Self::from_u8(255, 255, 255) }
}

/// Formats as `#rrggbb` (lowercase).
impl Display for RgbValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl RgbValue {
    #[must_use]
    pub fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }

    /// Parse a `#RRGGBB` string. The whole input has to be consumed.
    ///
    /// # Errors
    ///
    /// Returns [`ChatColorError::InvalidHexColor`] if the input string is not a valid hex
    /// color.
    pub fn try_from_hex_color(input: &str) -> ChatColorResult<RgbValue> {
        match parse_hex_color(input) {
            Ok(("", color)) => Ok(color),
            _ => Err(ChatColorError::InvalidHexColor {
                input: input.to_string(),
            }
            .into()),
        }
    }

    /// Lowercase `#rrggbb` representation, without allocating on the heap.
    #[must_use]
    pub fn as_hex_string(&self) -> InlineString { inline_string!("{self}") }

    /// Linear blend between `start` and `end`, per channel:
    /// `start + ratio * (end - start)`, truncated toward zero and clamped to `0..=255`.
    #[must_use]
    pub fn lerp(start: RgbValue, end: RgbValue, ratio: f32) -> RgbValue {
        RgbValue {
            red: lerp_channel(start.red, end.red, ratio),
            green: lerp_channel(start.green, end.green, ratio),
            blue: lerp_channel(start.blue, end.blue, ratio),
        }
    }

    /// Squared euclidean distance in RGB space. Used to find the closest palette entry.
    #[must_use]
    pub fn distance_squared(&self, other: RgbValue) -> u32 {
        let diff = |lhs: u8, rhs: u8| {
            let it = u32::from(lhs.abs_diff(rhs));
            it * it
        };
        diff(self.red, other.red)
            + diff(self.green, other.green)
            + diff(self.blue, other.blue)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lerp_channel(start: u8, end: u8, ratio: f32) -> u8 {
    let start = f32::from(start);
    let end = f32::from(end);
    // `as i32` truncates toward zero (and saturates on NaN / infinity).
    let it = (start + ratio * (end - start)) as i32;
    it.clamp(0, 255) as u8
}
