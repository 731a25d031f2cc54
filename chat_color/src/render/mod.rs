// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod colorizer;
pub mod escape_removal;
pub mod gradient;

// Re-export.
pub use colorizer::*;
pub use escape_removal::*;
pub use gradient::*;
