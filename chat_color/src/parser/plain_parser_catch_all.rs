// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This is the lowest priority parser called by [`crate::parse_markup_segment`]. It
//! matches plain text, ie: anything that can't start a marker.

use nom::{IResult, Parser,
          branch::alt,
          bytes::complete::take_till1,
          character::complete::anychar,
          combinator::recognize};

use crate::{AMPERSAND, GRADIENT_OPEN_LEFT_CHAR};

/// Takes text up to the next character that could start a marker (`&` or `<`).
///
/// When the input itself starts with such a character, the specialized parsers have
/// already failed to match there. In this edge case exactly one character is taken, so
/// that the character after it gets a chance to start a marker, eg: `&&a` is the literal
/// `&` followed by the marker `&a`.
///
/// # Errors
///
/// Returns a nom parsing error only on empty input.
pub fn parse_plain_text(input: &str) -> IResult<&str, &str> {
    alt((take_till1(is_marker_start), recognize(anychar))).parse(input)
}

fn is_marker_start(ch: char) -> bool { ch == AMPERSAND || ch == GRADIENT_OPEN_LEFT_CHAR }
