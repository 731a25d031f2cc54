// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module contains a parser that parses a hex color string into a [`RgbValue`]
//! struct. The hex color string has to be in the following format: `#RRGGBB`, eg:
//! `#FF0000` for red. Hex digits are case insensitive.

use nom::{IResult, Parser,
          bytes::complete::{tag, take_while_m_n},
          combinator::map_res};

use crate::{HEX_PREFIX, RgbValue};

/// Parse function that generates an [`RgbValue`] struct from a valid hex color string.
/// Only the `#RRGGBB` prefix of the input is consumed, the rest is returned as the
/// remainder.
///
/// # Errors
///
/// Returns a nom parsing error if the input does not start with `#` followed by 6 hex
/// digits.
pub fn parse_hex_color(input: &str) -> IResult<&str, RgbValue> {
    let (input, _) = tag(HEX_PREFIX).parse(input)?;
    let (input, (red, green, blue)) =
        (parse_hex_seg, parse_hex_seg, parse_hex_seg).parse(input)?;
    Ok((input, RgbValue { red, green, blue }))
}

fn parse_hex_seg(input: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(2, 2, match_is_hex_digit), parse_str_to_hex_num)
        .parse(input)
}

fn match_is_hex_digit(c: char) -> bool { c.is_ascii_hexdigit() }

fn parse_str_to_hex_num(input: &str) -> Result<u8, std::num::ParseIntError> {
    u8::from_str_radix(input, 16)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use nom::{Err as NomErr,
              error::{Error, ErrorKind}};

    #[test]
    fn parse_valid_color() {
        let mut input = String::new();
        input.push_str("#2F14DF");
        input.push('🔅');

        let result = parse_hex_color(&input);

        let Ok((remainder, color)) = result else {
            panic!("expected a color, got: {result:?}");
        };
        assert_eq2!(remainder, "🔅");
        assert_eq2!(color, RgbValue::from_u8(47, 20, 223));
    }

    #[test]
    fn parse_lowercase_color() {
        assert_eq2!(
            parse_hex_color("#ff8000rest"),
            Ok(("rest", RgbValue::from_u8(255, 128, 0)))
        );
    }

    #[test]
    fn parse_invalid_color() {
        assert!(parse_hex_color("🔅#2F14DF").is_err());
        assert!(parse_hex_color("#ZZZZZZ").is_err());
        assert_eq2!(
            parse_hex_color("#FF00"),
            Err(NomErr::Error(Error {
                input: "",
                code: ErrorKind::TakeWhileMN
            }))
        );
    }
}
