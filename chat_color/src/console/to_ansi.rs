// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Write as _;

use crate::{LegacyCode, NativeSegment, SgrCode, parse_native_escapes};

/// Convert colorized text into ANSI escape sequences for a truecolor terminal.
///
/// - A color (legacy or hex) resets any formatting first, as it does in chat, then sets
///   the foreground.
/// - Formats map to the matching [`SgrCode`], and reset maps to [`SgrCode::Reset`].
/// - A `§x` that isn't followed by a complete hex run is dropped.
///
/// If anything was emitted, the output ends with a reset so that the terminal's own
/// style is restored.
#[must_use]
pub fn convert_to_ansi(text: &str, escape_char: char) -> String {
    let mut acc = String::with_capacity(text.len());
    let mut is_styled = false;

    for segment in parse_native_escapes(text, escape_char) {
        let sgr_codes: [Option<SgrCode>; 2] = match segment {
            NativeSegment::Text(it) => {
                acc.push_str(it);
                continue;
            }
            NativeSegment::Rgb(color) => [Some(SgrCode::Reset), Some(color.into())],
            NativeSegment::Code(LegacyCode::Reset) => [Some(SgrCode::Reset), None],
            NativeSegment::Code(code) => match code.rgb() {
                Some(color) => [Some(SgrCode::Reset), Some(color.into())],
                None => [SgrCode::from_format(code), None],
            },
        };
        for sgr_code in sgr_codes.into_iter().flatten() {
            _ = write!(acc, "{sgr_code}");
            is_styled = true;
        }
    }

    if is_styled {
        _ = write!(acc, "{}", SgrCode::Reset);
    }

    acc
}
