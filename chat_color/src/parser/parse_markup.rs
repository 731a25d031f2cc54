// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use nom::{IResult, Parser, branch::alt, combinator::map};

use crate::{AMPERSAND, DEBUG_CHAT_COLOR, GRADIENT_OPEN_LEFT_CHAR, MarkupParsePolicy,
            MarkupSegment, MarkupSegments, inline_string, parse_gradient_span,
            parse_hex_marker, parse_legacy_marker, parse_plain_text};

/// Parse a single [`MarkupSegment`] from the start of the input.
///
/// Here's an example of the runtime iterations that may occur, which are repeatedly run
/// by [`parse_markup()`]:
///
/// ```text
/// policy: HexAndLegacy
/// input: "&aHi &#FF0000red&z"
/// pass #1: [Legacy(Green)]   | "Hi &#FF0000red&z"
/// pass #2: [Literal("Hi ")]  | "&#FF0000red&z"
/// pass #3: [Hex(..)]         | "red&z"
/// pass #4: [Literal("red")]  | "&z"
/// pass #5: [Literal("&")]    | "z"
/// pass #6: [Literal("z")]    | ""
/// ```
///
/// # Errors
///
/// Returns a nom parsing error only on empty input.
#[rustfmt::skip]
pub fn parse_markup_segment(
    input: &str,
    policy: MarkupParsePolicy,
) -> IResult<&str, MarkupSegment<'_>> {
    // The order of the following parsers is important. The first parser that matches
    // wins, and the plain text parser matches anything.
    let it = match policy {
        MarkupParsePolicy::GradientsOnly => alt((
            map(parse_gradient_span, MarkupSegment::Gradient),
            map(parse_plain_text,    MarkupSegment::Literal),
        )).parse(input),
        MarkupParsePolicy::HexAndLegacy => alt((
            map(parse_hex_marker,    MarkupSegment::Hex),
            map(parse_legacy_marker, MarkupSegment::Legacy),
            map(parse_plain_text,    MarkupSegment::Literal),
        )).parse(input),
        MarkupParsePolicy::LegacyOnly => alt((
            map(parse_legacy_marker, MarkupSegment::Legacy),
            map(parse_plain_text,    MarkupSegment::Literal),
        )).parse(input),
    };

    DEBUG_CHAT_COLOR.then(|| {
        if matches!(
            &it,
            Ok((_, MarkupSegment::Literal(text)))
                if text.starts_with([AMPERSAND, GRADIENT_OPEN_LEFT_CHAR])
        ) {
            tracing::debug!(
                message = "Marker left as literal text",
                input = %inline_string!("{input:?}")
            );
        }
    });

    it
}

/// Split the whole input into [`MarkupSegments`]. This never fails: anything that isn't
/// a well formed marker (per `policy`) ends up in a [`MarkupSegment::Literal`]. Adjacent
/// literal text is merged into a single segment.
#[must_use]
pub fn parse_markup(input: &str, policy: MarkupParsePolicy) -> MarkupSegments<'_> {
    let mut acc = MarkupSegments::new();
    let mut literal_start: Option<usize> = None;
    let mut rem = input;

    while !rem.is_empty() {
        let offset = input.len() - rem.len();
        match parse_markup_segment(rem, policy) {
            Ok((next_rem, MarkupSegment::Literal(_))) => {
                literal_start.get_or_insert(offset);
                rem = next_rem;
            }
            Ok((next_rem, segment)) => {
                if let Some(start) = literal_start.take() {
                    acc.push(MarkupSegment::Literal(&input[start..offset]));
                }
                acc.push(segment);
                rem = next_rem;
            }
            Err(error) => {
                DEBUG_CHAT_COLOR.then(|| {
                    tracing::debug!(message = "parse_markup gave up", error = ?error);
                });
                literal_start.get_or_insert(offset);
                rem = "";
            }
        }
    }

    if let Some(start) = literal_start {
        acc.push(MarkupSegment::Literal(&input[start..]));
    }

    acc
}
