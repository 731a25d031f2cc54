// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The legacy color and format codes, written `&X` by users and `§X` by the platform.
//!
//! More info: <https://minecraft.wiki/w/Formatting_codes>

use strum::IntoEnumIterator;

use crate::{ChatColorError, RgbValue};

/// One legacy code. The code character is case insensitive on input, and always
/// lowercase on output (this matches the platform's own translation routine).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::EnumIter, strum_macros::EnumCount,
)]
pub enum LegacyCode {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
    Obfuscated,
    Bold,
    Strikethrough,
    Underline,
    Italic,
    Reset,
    /// Start of a `§x§r§r§g§g§b§b` hex color run.
    Hex,
}

impl LegacyCode {
    #[rustfmt::skip]
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            LegacyCode::Black         => '0',
            LegacyCode::DarkBlue      => '1',
            LegacyCode::DarkGreen     => '2',
            LegacyCode::DarkAqua      => '3',
            LegacyCode::DarkRed       => '4',
            LegacyCode::DarkPurple    => '5',
            LegacyCode::Gold          => '6',
            LegacyCode::Gray          => '7',
            LegacyCode::DarkGray      => '8',
            LegacyCode::Blue          => '9',
            LegacyCode::Green         => 'a',
            LegacyCode::Aqua          => 'b',
            LegacyCode::Red           => 'c',
            LegacyCode::LightPurple   => 'd',
            LegacyCode::Yellow        => 'e',
            LegacyCode::White         => 'f',
            LegacyCode::Obfuscated    => 'k',
            LegacyCode::Bold          => 'l',
            LegacyCode::Strikethrough => 'm',
            LegacyCode::Underline     => 'n',
            LegacyCode::Italic        => 'o',
            LegacyCode::Reset         => 'r',
            LegacyCode::Hex           => 'x',
        }
    }

    /// Case insensitive lookup of a code character.
    #[must_use]
    pub fn from_char(ch: char) -> Option<LegacyCode> {
        let ch = ch.to_ascii_lowercase();
        LegacyCode::iter().find(|it| it.as_char() == ch)
    }

    /// The palette color for the 16 color codes, [None] for formats, reset and hex.
    #[rustfmt::skip]
    #[must_use]
    pub fn rgb(self) -> Option<RgbValue> {
        let it: u32 = match self {
            LegacyCode::Black       => 0x00_00_00,
            LegacyCode::DarkBlue    => 0x00_00_AA,
            LegacyCode::DarkGreen   => 0x00_AA_00,
            LegacyCode::DarkAqua    => 0x00_AA_AA,
            LegacyCode::DarkRed     => 0xAA_00_00,
            LegacyCode::DarkPurple  => 0xAA_00_AA,
            LegacyCode::Gold        => 0xFF_AA_00,
            LegacyCode::Gray        => 0xAA_AA_AA,
            LegacyCode::DarkGray    => 0x55_55_55,
            LegacyCode::Blue        => 0x55_55_FF,
            LegacyCode::Green       => 0x55_FF_55,
            LegacyCode::Aqua        => 0x55_FF_FF,
            LegacyCode::Red         => 0xFF_55_55,
            LegacyCode::LightPurple => 0xFF_55_FF,
            LegacyCode::Yellow      => 0xFF_FF_55,
            LegacyCode::White       => 0xFF_FF_FF,
            LegacyCode::Obfuscated
            | LegacyCode::Bold
            | LegacyCode::Strikethrough
            | LegacyCode::Underline
            | LegacyCode::Italic
            | LegacyCode::Reset
            | LegacyCode::Hex       => return None,
        };
        Some(RgbValue::from(it))
    }

    #[must_use]
    pub fn is_color(self) -> bool { self.rgb().is_some() }

    #[must_use]
    pub fn is_format(self) -> bool {
        matches!(
            self,
            LegacyCode::Obfuscated
                | LegacyCode::Bold
                | LegacyCode::Strikethrough
                | LegacyCode::Underline
                | LegacyCode::Italic
        )
    }

    /// The color code whose palette entry is closest to `color`. Ties go to the code
    /// that comes first in the palette.
    #[must_use]
    pub fn nearest_color(color: RgbValue) -> LegacyCode {
        let mut acc = (LegacyCode::White, u32::MAX);
        for code in LegacyCode::iter() {
            if let Some(palette_color) = code.rgb() {
                let distance = palette_color.distance_squared(color);
                if distance < acc.1 {
                    acc = (code, distance);
                }
            }
        }
        acc.0
    }
}

impl TryFrom<char> for LegacyCode {
    type Error = ChatColorError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        LegacyCode::from_char(ch).ok_or(ChatColorError::InvalidLegacyCode(ch))
    }
}

impl From<LegacyCode> for char {
    fn from(code: LegacyCode) -> Self { code.as_char() }
}
