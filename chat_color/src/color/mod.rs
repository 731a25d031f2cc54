// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Color primitives: [`RgbValue`] (24-bit color parsed from `#RRGGBB`) and
//! [`LegacyCode`] (the 16 colors and 6 formats of the legacy `&X` codes).

// Attach.
mod hex_color_parser;
mod legacy_code;
mod rgb_value;

// Re-export.
pub use hex_color_parser::*;
pub use legacy_code::*;
pub use rgb_value::*;
