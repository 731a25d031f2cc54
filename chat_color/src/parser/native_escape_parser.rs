// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Tokenizer for text that has already been colorized, ie: it contains native escapes
//! like `§a` and `§x§f§f§8§0§0§0`. Used by [`crate::strip_colors`] and
//! [`crate::convert_to_ansi`].

use nom::{IResult, Parser,
          branch::alt,
          bytes::complete::take_till1,
          character::complete::{anychar, char, one_of, satisfy},
          combinator::{map, map_opt, recognize},
          multi::count,
          sequence::preceded};

use crate::{InlineVec, LegacyCode, RgbValue};

/// One piece of colorized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeSegment<'a> {
    /// Visible text, which may include escape characters that aren't followed by a
    /// valid code.
    Text(&'a str),
    /// A complete `§x§r§r§g§g§b§b` run.
    Rgb(RgbValue),
    /// `§X`. A `§x` that isn't followed by 6 escaped hex digits shows up here as
    /// [`LegacyCode::Hex`].
    Code(LegacyCode),
}

pub type NativeSegments<'a> = InlineVec<NativeSegment<'a>>;

/// Split colorized text into [`NativeSegments`]. This never fails. Adjacent text is
/// merged into a single segment.
#[must_use]
pub fn parse_native_escapes(input: &str, escape_char: char) -> NativeSegments<'_> {
    let mut acc = NativeSegments::new();
    let mut text_start: Option<usize> = None;
    let mut rem = input;

    while !rem.is_empty() {
        let offset = input.len() - rem.len();
        match parse_native_segment(rem, escape_char) {
            Ok((next_rem, NativeSegment::Text(_))) => {
                text_start.get_or_insert(offset);
                rem = next_rem;
            }
            Ok((next_rem, segment)) => {
                if let Some(start) = text_start.take() {
                    acc.push(NativeSegment::Text(&input[start..offset]));
                }
                acc.push(segment);
                rem = next_rem;
            }
            Err(_) => {
                text_start.get_or_insert(offset);
                rem = "";
            }
        }
    }

    if let Some(start) = text_start {
        acc.push(NativeSegment::Text(&input[start..]));
    }

    acc
}

/// Parse a single [`NativeSegment`] from the start of the input. A full hex run has
/// priority over the bare `§x` code.
///
/// # Errors
///
/// Returns a nom parsing error only on empty input.
pub fn parse_native_segment(
    input: &str,
    escape_char: char,
) -> IResult<&str, NativeSegment<'_>> {
    alt((
        map(|it| parse_native_rgb(it, escape_char), NativeSegment::Rgb),
        map(
            preceded(char(escape_char), map_opt(anychar, LegacyCode::from_char)),
            NativeSegment::Code,
        ),
        map(
            alt((
                take_till1(move |it: char| it == escape_char),
                recognize(anychar),
            )),
            NativeSegment::Text,
        ),
    ))
    .parse(input)
}

/// `§x§r§r§g§g§b§b`, case insensitive.
///
/// # Errors
///
/// Returns a nom parsing error if the input doesn't start with a complete hex run.
pub fn parse_native_rgb(input: &str, escape_char: char) -> IResult<&str, RgbValue> {
    let (rem, _) = (char(escape_char), one_of("xX")).parse(input)?;
    let (rem, digits) = count(
        preceded(char(escape_char), satisfy(|it| it.is_ascii_hexdigit())),
        6,
    )
    .parse(rem)?;

    let mut nibbles = [0_u8; 6];
    for (nibble, digit) in nibbles.iter_mut().zip(digits) {
        // `satisfy` above only lets hex digits through.
        *nibble = digit
            .to_digit(16)
            .and_then(|it| u8::try_from(it).ok())
            .unwrap_or(0);
    }
    let [r1, r2, g1, g2, b1, b2] = nibbles;

    Ok((
        rem,
        RgbValue::from_u8((r1 << 4) | r2, (g1 << 4) | g2, (b1 << 4) | b2),
    ))
}
