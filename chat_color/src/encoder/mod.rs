// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod chat_color_encoder;
pub mod section_sign_encoder;

// Re-export.
pub use chat_color_encoder::*;
pub use section_sign_encoder::*;
