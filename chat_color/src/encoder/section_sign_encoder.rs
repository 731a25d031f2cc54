// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ChatColorEncoder, HexSupport, LegacyCode, RgbValue, SECTION_SIGN};

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Encoder for the section sign format used by Minecraft servers and proxies.
///
/// - Legacy code: `§a`.
/// - RGB color: `§x` followed by each of the 6 hex digits prefixed by `§`, eg: `#ff8000`
///   is `§x§f§f§8§0§0§0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectionSignEncoder {
    pub hex_support: HexSupport,
}

impl SectionSignEncoder {
    #[must_use]
    pub fn new(hex_support: HexSupport) -> Self { Self { hex_support } }
}

impl ChatColorEncoder for SectionSignEncoder {
    fn escape_char(&self) -> char { SECTION_SIGN }

    fn supports_hex(&self) -> bool { self.hex_support.is_supported() }

    fn write_rgb(&self, color: RgbValue, acc: &mut String) {
        self.write_legacy(LegacyCode::Hex, acc);
        for byte in [color.red, color.green, color.blue] {
            for nibble in [byte >> 4, byte & 0x0F] {
                acc.push(SECTION_SIGN);
                acc.push(char::from(HEX_DIGITS[usize::from(nibble)]));
            }
        }
    }

    fn write_legacy(&self, code: LegacyCode, acc: &mut String) {
        acc.push(SECTION_SIGN);
        acc.push(code.as_char());
    }
}
