// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{HexSupport, global_hex_support};

/// What to do with `&#RRGGBB` and gradient markup when the platform has no
/// [`HexSupport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HexFallback {
    /// Leave the markup in the output as literal text.
    #[default]
    Literal,
    /// Render each color with the closest of the 16 legacy colors.
    NearestLegacy,
}

/// Immutable configuration for [`crate::Colorizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorizerConfig {
    pub hex_support: HexSupport,
    pub hex_fallback: HexFallback,
}

impl ColorizerConfig {
    #[must_use]
    pub fn new(hex_support: HexSupport, hex_fallback: HexFallback) -> Self {
        Self {
            hex_support,
            hex_fallback,
        }
    }

    /// Resolve the hex support using [`global_hex_support::detect()`], ie: an override
    /// if one is set, otherwise the environment. Call this once at startup.
    #[must_use]
    pub fn from_env() -> Self {
        let hex_support = global_hex_support::detect();
        // % is Display, ? is Debug.
        tracing::debug!(message = "Resolved chat color hex support", hex_support = ?hex_support);
        Self {
            hex_support,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_hex_support(mut self, hex_support: HexSupport) -> Self {
        self.hex_support = hex_support;
        self
    }

    #[must_use]
    pub fn with_hex_fallback(mut self, hex_fallback: HexFallback) -> Self {
        self.hex_fallback = hex_fallback;
        self
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_default() {
        let config = ColorizerConfig::default();
        assert_eq2!(config.hex_support, HexSupport::Supported);
        assert_eq2!(config.hex_fallback, HexFallback::Literal);
    }

    #[test]
    fn test_builder_methods() {
        let config = ColorizerConfig::default()
            .with_hex_support(HexSupport::Unsupported)
            .with_hex_fallback(HexFallback::NearestLegacy);
        assert_eq2!(
            config,
            ColorizerConfig::new(HexSupport::Unsupported, HexFallback::NearestLegacy)
        );
    }

    #[test]
    #[serial]
    fn test_from_env_respects_override() {
        global_hex_support::set_override(HexSupport::Unsupported);
        assert_eq2!(
            ColorizerConfig::from_env().hex_support,
            HexSupport::Unsupported
        );
        global_hex_support::clear_override();
    }
}
