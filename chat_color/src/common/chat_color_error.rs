// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors for the fallible constructors in this crate. The colorize and uncolorize
//! operations themselves never fail; they leave malformed markup in place instead.
//!
//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

use miette::Diagnostic;

/// Type alias to make it easy to work with [`miette::Result`] and [`miette::Report`].
/// Works hand in hand w/ [`ChatColorError`].
pub type ChatColorResult<T> = miette::Result<T>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Diagnostic)]
pub enum ChatColorError {
    #[error("Invalid hex color: {input:?}")]
    #[diagnostic(
        code(r3bl_chat_color::invalid_hex_color),
        help("Use the `#RRGGBB` format, eg: `#FF8000`")
    )]
    InvalidHexColor { input: String },

    #[error("Invalid legacy color code: {0:?}")]
    #[diagnostic(
        code(r3bl_chat_color::invalid_legacy_code),
        help("Valid codes are `0-9`, `a-f`, `k-o`, `r` and `x`")
    )]
    InvalidLegacyCode(char),

    #[error("Invalid server version: {input:?}")]
    #[diagnostic(
        code(r3bl_chat_color::invalid_server_version),
        help("Use the `major.minor[.patch]` format, eg: `1.20.4`")
    )]
    InvalidServerVersion { input: String },
}
