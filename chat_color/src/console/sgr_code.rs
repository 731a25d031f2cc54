// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! More info:
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR>

use std::fmt::{Display, Formatter, Result};

use crate::{LegacyCode, RgbValue};

/// The subset of SGR (select graphic rendition) codes that chat formatting maps on to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SgrCode {
    Reset,
    Bold,
    Italic,
    Underline,
    SlowBlink,
    Strikethrough,
    ForegroundRGB(u8, u8, u8),
}

pub const CSI: &str = "\x1b[";
pub const SGR: &str = "m";

impl Display for SgrCode {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match *self {
            SgrCode::Reset                  => write!(f, "{CSI}0{SGR}"),
            SgrCode::Bold                   => write!(f, "{CSI}1{SGR}"),
            SgrCode::Italic                 => write!(f, "{CSI}3{SGR}"),
            SgrCode::Underline              => write!(f, "{CSI}4{SGR}"),
            SgrCode::SlowBlink              => write!(f, "{CSI}5{SGR}"),
            SgrCode::Strikethrough          => write!(f, "{CSI}9{SGR}"),
            SgrCode::ForegroundRGB(r, g, b) => write!(f, "{CSI}38;2;{r};{g};{b}{SGR}"),
        }
    }
}

impl From<RgbValue> for SgrCode {
    fn from(color: RgbValue) -> Self {
        SgrCode::ForegroundRGB(color.red, color.green, color.blue)
    }
}

impl SgrCode {
    /// The SGR code for a legacy format code, obfuscated text blinks. [None] for colors
    /// (use [`LegacyCode::rgb`]), reset and hex.
    #[must_use]
    pub fn from_format(code: LegacyCode) -> Option<SgrCode> {
        match code {
            LegacyCode::Obfuscated => Some(SgrCode::SlowBlink),
            LegacyCode::Bold => Some(SgrCode::Bold),
            LegacyCode::Strikethrough => Some(SgrCode::Strikethrough),
            LegacyCode::Underline => Some(SgrCode::Underline),
            LegacyCode::Italic => Some(SgrCode::Italic),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case(SgrCode::Reset, "\x1b[0m")]
    #[test_case(SgrCode::Bold, "\x1b[1m")]
    #[test_case(SgrCode::Italic, "\x1b[3m")]
    #[test_case(SgrCode::Underline, "\x1b[4m")]
    #[test_case(SgrCode::SlowBlink, "\x1b[5m")]
    #[test_case(SgrCode::Strikethrough, "\x1b[9m")]
    #[test_case(SgrCode::ForegroundRGB(255, 128, 0), "\x1b[38;2;255;128;0m")]
    fn test_display(sgr_code: SgrCode, expected: &str) {
        assert_eq2!(sgr_code.to_string(), expected);
    }

    #[test]
    fn test_from_format() {
        assert_eq2!(SgrCode::from_format(LegacyCode::Bold), Some(SgrCode::Bold));
        assert_eq2!(
            SgrCode::from_format(LegacyCode::Obfuscated),
            Some(SgrCode::SlowBlink)
        );
        assert_eq2!(SgrCode::from_format(LegacyCode::Red), None);
        assert_eq2!(SgrCode::from_format(LegacyCode::Reset), None);
    }
}
