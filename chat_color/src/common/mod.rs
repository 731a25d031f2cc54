// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod chat_color_error;
pub mod constants;
pub mod decl_macros;
pub mod sizes;

// Re-export.
pub use chat_color_error::*;
pub use constants::*;
pub use sizes::*;
