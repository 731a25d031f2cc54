// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{AMPERSAND_STR, NativeSegment, parse_native_escapes};

/// Replace every `escape_char` with `&`, leaving the character after it alone. This is
/// purely lexical: a hex color comes back as `&x&f&f&0&0&0&0`, not `&#FF0000`, and
/// gradients are not reconstructed.
#[must_use]
pub fn uncolorize(text: &str, escape_char: char) -> String {
    text.replace(escape_char, AMPERSAND_STR)
}

/// Remove every `escape_char` + code pair (including complete hex runs), leaving only
/// the visible text. An `escape_char` that isn't followed by a valid code is kept.
#[must_use]
pub fn strip_colors(text: &str, escape_char: char) -> String {
    let mut acc = String::with_capacity(text.len());
    for segment in parse_native_escapes(text, escape_char) {
        if let NativeSegment::Text(it) = segment {
            acc.push_str(it);
        }
    }
    acc
}
