// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Configuration of the colorizer. The platform capability ([`HexSupport`]) is resolved
//! once at startup and then passed in explicitly via [`ColorizerConfig`].

// Attach sources.
pub mod colorizer_config;
pub mod hex_support;
pub mod server_version;

// Re-export.
pub use colorizer_config::*;
pub use hex_support::*;
pub use server_version::*;
