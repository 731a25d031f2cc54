// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// A wrapper for `pretty_assertions::assert_eq!` macro.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// Replacement for [`std::format!`] that writes into an [`crate::InlineString`], which
/// stays on the stack for short strings like hex colors and escape codes.
#[macro_export]
macro_rules! inline_string {
    ($($format:tt)*) => {{
        use std::fmt::Write as _;
        let mut acc = $crate::InlineString::new();
        _ = write!(acc, $($format)*);
        acc
    }};
}
