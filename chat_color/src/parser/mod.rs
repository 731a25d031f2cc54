// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Tokenizers built with [`nom`].
//!
//! - [`parse_markup`] splits user markup (`&a`, `&#RRGGBB`, `<#RRGGBB>..</#RRGGBB>`) into
//!   [`MarkupSegment`]s.
//! - [`parse_native_escapes`] splits already colorized text (`§a`, `§x§r§r§g§g§b§b`) into
//!   [`NativeSegment`]s.
//!
//! Neither can fail: anything that isn't a well formed marker is returned as literal
//! text.

// Attach sources.
pub mod markup_segment;
pub mod native_escape_parser;
pub mod parse_markup;
pub mod plain_parser_catch_all;
pub mod specialized_parsers;

// Re-export.
pub use markup_segment::*;
pub use native_escape_parser::*;
pub use parse_markup::*;
pub use plain_parser_catch_all::*;
pub use specialized_parsers::*;
