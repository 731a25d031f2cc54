// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Print colorized chat text on a terminal, eg: the server console, which doesn't
//! understand `§` escapes.

// Attach sources.
pub mod sgr_code;
pub mod to_ansi;

// Re-export.
pub use sgr_code::*;
pub use to_ansi::*;
