// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Set this to `true` to get `tracing::debug!` events from the markup parser and the
/// renderer, eg: when a marker is skipped because it is malformed.
pub const DEBUG_CHAT_COLOR: bool = false;

/// The platform's native color escape character.
pub const SECTION_SIGN: char = '§';

/// The shorthand escape character that users type.
pub const AMPERSAND: char = '&';
pub const AMPERSAND_STR: &str = "&";

pub const HEX_PREFIX: &str = "#";

pub const GRADIENT_OPEN_LEFT: &str = "<";
pub const GRADIENT_CLOSE_LEFT: &str = "</";
pub const GRADIENT_RIGHT: &str = ">";
pub const GRADIENT_OPEN_LEFT_CHAR: char = '<';

pub const NEW_LINE: char = '\n';
pub const CARRIAGE_RETURN: char = '\r';
pub const NEXT_LINE: char = '\u{0085}';
pub const LINE_SEPARATOR: char = '\u{2028}';
pub const PARAGRAPH_SEPARATOR: char = '\u{2029}';

/// A gradient span can't cross any of these.
pub const LINE_TERMINATORS: [char; 5] = [
    NEW_LINE,
    CARRIAGE_RETURN,
    NEXT_LINE,
    LINE_SEPARATOR,
    PARAGRAPH_SEPARATOR,
];
