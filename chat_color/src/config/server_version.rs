// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use nom::{IResult, Parser,
          bytes::complete::tag,
          character::complete::digit1,
          combinator::{map_res, opt},
          sequence::preceded};

use crate::{ChatColorError, ChatColorResult};

/// Game version of the server, eg: `1.20.4`. Anything after `major.minor[.patch]` (like
/// `-R0.1-SNAPSHOT`) is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServerVersion {
    pub major: u16,
    pub minor: u16,
    pub patch: u16,
}

impl ServerVersion {
    /// First version that renders `§x§r§r§g§g§b§b` hex colors.
    pub const FIRST_WITH_HEX: ServerVersion = ServerVersion::new(1, 16, 0);

    #[must_use]
    pub const fn new(major: u16, minor: u16, patch: u16) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// # Errors
    ///
    /// Returns [`ChatColorError::InvalidServerVersion`] if the input does not start with
    /// `major.minor`.
    pub fn try_parse(input: &str) -> ChatColorResult<ServerVersion> {
        match parse_server_version(input.trim()) {
            Ok((_, version)) => Ok(version),
            Err(_) => Err(ChatColorError::InvalidServerVersion {
                input: input.to_string(),
            }
            .into()),
        }
    }

    #[must_use]
    pub fn supports_hex(&self) -> bool { *self >= Self::FIRST_WITH_HEX }
}

/// Parses `major.minor[.patch]` and returns the rest of the input as the remainder.
///
/// # Errors
///
/// Returns a nom parsing error if the input does not start with `major.minor`.
#[rustfmt::skip]
pub fn parse_server_version(input: &str) -> IResult<&str, ServerVersion> {
    let (rem, (major, _, minor, patch)) = (
        parse_number,
        tag("."),
        parse_number,
        opt(preceded(tag("."), parse_number)),
    )
        .parse(input)?;
    Ok((rem, ServerVersion::new(major, minor, patch.unwrap_or(0))))
}

fn parse_number(input: &str) -> IResult<&str, u16> {
    map_res(digit1, str::parse::<u16>).parse(input)
}
