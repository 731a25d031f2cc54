// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{InlineVec, LegacyCode, RgbValue};

/// One piece of tokenized markup. Literal text borrows from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupSegment<'a> {
    Literal(&'a str),
    /// `&X`.
    Legacy(LegacyCode),
    /// `&#RRGGBB`.
    Hex(RgbValue),
    /// `<#RRGGBB>content</#RRGGBB>`.
    Gradient(GradientSpan<'a>),
}

pub type MarkupSegments<'a> = InlineVec<MarkupSegment<'a>>;

/// The two endpoint colors of a gradient tag and the text between them. Only lives for
/// the duration of a single colorize call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientSpan<'a> {
    pub start: RgbValue,
    pub end: RgbValue,
    pub content: &'a str,
}

/// Which markers [`crate::parse_markup`] recognizes. Markers that are not recognized are
/// returned as literal text.
///
/// Colorizing runs in passes: first [`MarkupParsePolicy::GradientsOnly`] on the input,
/// then [`MarkupParsePolicy::HexAndLegacy`] on the result. So the raw content of a
/// gradient span is split into units before any `&` markup in it is expanded, and
/// markup that is formed across a span boundary still gets expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupParsePolicy {
    /// Only gradient spans.
    GradientsOnly,
    /// Hex colors and legacy codes.
    HexAndLegacy,
    /// Only legacy codes. Used when the platform can't render hex colors at all.
    LegacyOnly,
}
