// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Parsers for each kind of marker. Each one only matches at the very start of its
//! input, and errors out otherwise, so that [`crate::parse_markup_segment`] can try the
//! next one.

use nom::{IResult, Parser,
          bytes::complete::tag,
          character::complete::anychar,
          combinator::map_opt,
          error::ErrorKind,
          sequence::{delimited, preceded}};

use crate::{AMPERSAND_STR, DEBUG_CHAT_COLOR, GRADIENT_CLOSE_LEFT, GRADIENT_OPEN_LEFT,
            GRADIENT_RIGHT, GradientSpan, LINE_TERMINATORS, LegacyCode, RgbValue,
            parse_hex_color};

/// `&X` where `X` is a [`LegacyCode`] character (case insensitive).
///
/// # Errors
///
/// Returns a nom parsing error if the input doesn't start with `&` followed by a valid
/// code character.
pub fn parse_legacy_marker(input: &str) -> IResult<&str, LegacyCode> {
    preceded(tag(AMPERSAND_STR), map_opt(anychar, LegacyCode::from_char)).parse(input)
}

/// `&#RRGGBB`.
///
/// # Errors
///
/// Returns a nom parsing error if the input doesn't start with `&#` followed by 6 hex
/// digits.
pub fn parse_hex_marker(input: &str) -> IResult<&str, RgbValue> {
    preceded(tag(AMPERSAND_STR), parse_hex_color).parse(input)
}

/// `<#RRGGBB>content</#RRGGBB>`, matched non-greedily: the content runs up to the first
/// valid closing tag. The content must not span lines (see [`LINE_TERMINATORS`]). Since
/// the opening tag is not looked for inside the content, a nested opening tag simply
/// becomes part of the content.
///
/// # Errors
///
/// Returns a nom parsing error if the input doesn't start with a valid opening tag, or if
/// there is no valid closing tag on the same line.
pub fn parse_gradient_span(input: &str) -> IResult<&str, GradientSpan<'_>> {
    let (rem, start) = parse_gradient_tag(GRADIENT_OPEN_LEFT).parse(input)?;
    let (rem, (content, end)) = take_until_closing_tag(rem)?;

    DEBUG_CHAT_COLOR.then(|| {
        tracing::debug!(
            message = "parse_gradient_span",
            start = %start,
            end = %end,
            content = ?content
        );
    });

    Ok((rem, GradientSpan { start, end, content }))
}

/// `<#RRGGBB>` or `</#RRGGBB>`, depending on `left`.
fn parse_gradient_tag<'a>(
    left: &'static str,
) -> impl Parser<&'a str, Output = RgbValue, Error = nom::error::Error<&'a str>> {
    delimited(tag(left), parse_hex_color, tag(GRADIENT_RIGHT))
}

/// Scan the current line for `</`, and stop at the first one that is a valid closing tag.
/// Returns the content before it and the closing tag's color.
fn take_until_closing_tag(input: &str) -> IResult<&str, (&str, RgbValue)> {
    let line_len = input.find(LINE_TERMINATORS).unwrap_or(input.len());
    let line = &input[..line_len];

    let mut search_from = 0;
    while let Some(found) = line[search_from..].find(GRADIENT_CLOSE_LEFT) {
        let tag_at = search_from + found;
        if let Ok((rem, end)) =
            parse_gradient_tag(GRADIENT_CLOSE_LEFT).parse(&input[tag_at..])
        {
            return Ok((rem, (&input[..tag_at], end)));
        }
        search_from = tag_at + GRADIENT_CLOSE_LEFT.len();
    }

    DEBUG_CHAT_COLOR.then(|| {
        tracing::debug!(message = "gradient without closing tag", input = ?input);
    });

    Err(nom::Err::Error(nom::error::Error {
        input,
        code: ErrorKind::TakeUntil,
    }))
}
