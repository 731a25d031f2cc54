// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{LegacyCode, RgbValue};

/// The platform side of colorizing: how escapes look on the wire. The colorizer only
/// decides *what* color goes where, and delegates the encoding to this trait.
pub trait ChatColorEncoder {
    /// The native escape character, eg: `§`.
    fn escape_char(&self) -> char;

    /// Whether [`ChatColorEncoder::write_rgb`] can be used on this platform.
    fn supports_hex(&self) -> bool;

    /// Append the escape sequence for an arbitrary RGB color to `acc`.
    fn write_rgb(&self, color: RgbValue, acc: &mut String);

    /// Append the escape sequence for a legacy code to `acc`.
    fn write_legacy(&self, code: LegacyCode, acc: &mut String);
}
