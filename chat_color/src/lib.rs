// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_chat_color
//!
//! Expand chat color markup into the section sign (`§`) escapes that Minecraft servers
//! and proxies understand, and go back again.
//!
//! Three kinds of markup are supported:
//!
//! | Markup                          | Example                   | Output                           |
//! | ------------------------------- | ------------------------- | -------------------------------- |
//! | Legacy code `&X`                | `&aHello`                 | `§aHello`                        |
//! | Hex color `&#RRGGBB`            | `&#FF8000Hi`              | `§x§f§f§8§0§0§0Hi`               |
//! | Gradient `<#RRGGBB>..</#RRGGBB>` | `<#FF0000>AB</#00FF00>`   | `§x§f§f§0§0§0§0A§x§0§0§f§f§0§0B` |
//!
//! Malformed markup is never an error. It is simply left in the output as literal text.
//!
//! # Usage
//!
//! ```rust
//! use r3bl_chat_color::{Colorizer, ColorizerConfig, HexSupport};
//!
//! // Resolve the platform capability once, at startup.
//! let colorizer = Colorizer::new(ColorizerConfig::default());
//!
//! assert_eq!(colorizer.colorize("&aHello"), "§aHello");
//! assert_eq!(colorizer.uncolorize("§aHello"), "&aHello");
//!
//! // Platforms that predate hex colors leave hex markup alone.
//! let legacy = Colorizer::new(
//!     ColorizerConfig::default().with_hex_support(HexSupport::Unsupported),
//! );
//! assert_eq!(legacy.colorize("&#FF0000red"), "&#FF0000red");
//! ```
//!
//! # Gradients
//!
//! Gradient tags are matched non-greedily on a single line: the content runs up to the
//! first valid closing tag. Nesting is not supported, an inner opening tag simply
//! becomes part of the outer span's content. Gradients are expanded before any `&` markup,
//! so `&l` inside a span is two visible characters. Native escapes already inside the
//! span (`§o`, ...) are kept, attached to the character that follows them.
//!
//! # Console output
//!
//! [`Colorizer::to_ansi`] turns colorized text into ANSI SGR escape sequences so that the
//! same message can be printed to a server console.

// Enforce strict error handling in production library code only. Tests and examples are
// allowed to use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod color;
pub mod common;
pub mod config;
pub mod console;
pub mod encoder;
pub mod parser;
pub mod render;

// Re-export.
pub use color::*;
pub use common::*;
pub use config::*;
pub use console::*;
pub use encoder::*;
pub use parser::*;
pub use render::*;
