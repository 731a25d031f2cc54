// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{env,
          sync::atomic::{AtomicI8, Ordering}};

use strum_macros::{Display, EnumString};

use crate::ServerVersion;

/// Whether the target platform can render arbitrary RGB colors (`§x§r§r§g§g§b§b`).
/// Platforms older than 1.16 only know the 16 legacy colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HexSupport {
    #[default]
    Supported,
    Unsupported,
}

impl HexSupport {
    #[must_use]
    pub fn is_supported(self) -> bool { matches!(self, HexSupport::Supported) }
}

impl From<bool> for HexSupport {
    fn from(value: bool) -> Self {
        if value {
            HexSupport::Supported
        } else {
            HexSupport::Unsupported
        }
    }
}

/// These trait implementations allow us to use [`HexSupport`] and `i8` interchangeably,
/// so that the value can be stored in an [`AtomicI8`].
mod convert_between_hex_support_and_i8 {
    impl TryFrom<i8> for super::HexSupport {
        type Error = ();

        fn try_from(value: i8) -> Result<Self, Self::Error> {
            match value {
                1 => Ok(super::HexSupport::Supported),
                2 => Ok(super::HexSupport::Unsupported),
                _ => Err(()),
            }
        }
    }

    impl From<super::HexSupport> for i8 {
        fn from(value: super::HexSupport) -> Self {
            match value {
                super::HexSupport::Supported => 1,
                super::HexSupport::Unsupported => 2,
            }
        }
    }
}

/// Environment variables that are examined by
/// [`examine_env_vars_to_determine_hex_support`].
#[derive(Debug, Display, EnumString, Copy, Clone, PartialEq, Eq)]
pub enum EnvKeys {
    /// `0`, `false`, `off`, `no` or `1`, `true`, `on`, `yes`. Wins over everything else.
    #[strum(serialize = "R3BL_CHAT_HEX")]
    HexOverride,
    /// Version of the game the server runs, eg: `1.20.4` or `1.12.2-R0.1-SNAPSHOT`.
    #[strum(serialize = "MINECRAFT_VERSION")]
    ServerVersion,
}

/// Global state which can be used to:
/// 1. Override the hex support (eg: in tests, or from a plugin's own config file).
/// 2. Memoize the result of running [`examine_env_vars_to_determine_hex_support`].
///
/// Resolve this once at startup and pass the result to the colorizer via
/// [`crate::ColorizerConfig`]. The colorizer never looks at this state on its own.
pub mod global_hex_support {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    static HEX_SUPPORT_OVERRIDE: AtomicI8 = AtomicI8::new(NOT_SET_VALUE);
    static HEX_SUPPORT_CACHED: AtomicI8 = AtomicI8::new(NOT_SET_VALUE);
    const NOT_SET_VALUE: i8 = -1;

    /// - If the value has been set using [`set_override`], then that value is returned.
    /// - Otherwise the cached detection result is returned.
    /// - Otherwise [`examine_env_vars_to_determine_hex_support`] runs, and its result is
    ///   cached.
    #[must_use]
    pub fn detect() -> HexSupport {
        if let Some(it) = try_get_override() {
            return it;
        }

        if let Ok(it) = HexSupport::try_from(HEX_SUPPORT_CACHED.load(Ordering::Acquire)) {
            return it;
        }

        let it = examine_env_vars_to_determine_hex_support();
        HEX_SUPPORT_CACHED.store(i8::from(it), Ordering::Release);
        it
    }

    /// Regardless of the environment, the value you set here will be returned by
    /// [`detect()`].
    ///
    /// # Testing support
    ///
    /// In any test in which this function is called, please use the `#[serial]`
    /// attribute from the [serial_test](https://crates.io/crates/serial_test) crate.
    /// Otherwise there will be flakiness in the test results (tests are run in parallel
    /// using many threads).
    pub fn set_override(value: HexSupport) {
        HEX_SUPPORT_OVERRIDE.store(i8::from(value), Ordering::Release);
    }

    pub fn clear_override() { HEX_SUPPORT_OVERRIDE.store(NOT_SET_VALUE, Ordering::Release); }

    #[must_use]
    pub fn try_get_override() -> Option<HexSupport> {
        HexSupport::try_from(HEX_SUPPORT_OVERRIDE.load(Ordering::Acquire)).ok()
    }

    /// Forget the memoized detection result, so the next [`detect()`] examines the
    /// environment again.
    pub fn clear_cache() { HEX_SUPPORT_CACHED.store(NOT_SET_VALUE, Ordering::Release); }
}

/// Determine hex support from the process environment. See [`EnvKeys`].
#[must_use]
pub fn examine_env_vars_to_determine_hex_support() -> HexSupport {
    examine_env_vars_to_determine_hex_support_with(|key| env::var(key.to_string()).ok())
}

/// Same as [`examine_env_vars_to_determine_hex_support`], with the environment lookup
/// passed in.
///
/// 1. [`EnvKeys::HexOverride`], when it holds a recognized flag value.
/// 2. [`EnvKeys::ServerVersion`], when it parses: hex is supported from 1.16 onward.
/// 3. Otherwise hex is supported.
pub fn examine_env_vars_to_determine_hex_support_with<F>(lookup: F) -> HexSupport
where
    F: Fn(EnvKeys) -> Option<String>,
{
    if let Some(it) = lookup(EnvKeys::HexOverride).and_then(|it| parse_flag(&it)) {
        return HexSupport::from(it);
    }

    if let Some(version) = lookup(EnvKeys::ServerVersion)
        .and_then(|it| ServerVersion::try_parse(&it).ok())
    {
        return HexSupport::from(version.supports_hex());
    }

    HexSupport::Supported
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    fn lookup_from(
        pairs: &'static [(EnvKeys, &'static str)],
    ) -> impl Fn(EnvKeys) -> Option<String> {
        move |key| {
            pairs
                .iter()
                .find(|(it, _)| *it == key)
                .map(|(_, value)| (*value).to_string())
        }
    }

    #[test]
    fn test_env_keys_names() {
        assert_eq2!(EnvKeys::HexOverride.to_string(), "R3BL_CHAT_HEX");
        assert_eq2!(EnvKeys::ServerVersion.to_string(), "MINECRAFT_VERSION");
    }

    #[test_case(&[], HexSupport::Supported)]
    #[test_case(&[(EnvKeys::HexOverride, "0")], HexSupport::Unsupported)]
    #[test_case(&[(EnvKeys::HexOverride, " OFF ")], HexSupport::Unsupported)]
    #[test_case(&[(EnvKeys::HexOverride, "true")], HexSupport::Supported)]
    #[test_case(&[(EnvKeys::ServerVersion, "1.12.2")], HexSupport::Unsupported)]
    #[test_case(&[(EnvKeys::ServerVersion, "1.16")], HexSupport::Supported)]
    #[test_case(&[(EnvKeys::ServerVersion, "1.20.4-R0.1-SNAPSHOT")], HexSupport::Supported)]
    #[test_case(&[(EnvKeys::ServerVersion, "garbage")], HexSupport::Supported)]
    #[test_case(
        &[(EnvKeys::HexOverride, "yes"), (EnvKeys::ServerVersion, "1.8.8")],
        HexSupport::Supported
    )]
    #[test_case(
        &[(EnvKeys::HexOverride, "maybe"), (EnvKeys::ServerVersion, "1.8.8")],
        HexSupport::Unsupported
    )]
    fn test_examine_env_vars(
        pairs: &'static [(EnvKeys, &'static str)],
        expected: HexSupport,
    ) {
        assert_eq2!(
            examine_env_vars_to_determine_hex_support_with(lookup_from(pairs)),
            expected
        );
    }

    #[test]
    #[serial]
    fn test_override_cycle() {
        global_hex_support::set_override(HexSupport::Unsupported);
        assert_eq2!(
            global_hex_support::try_get_override(),
            Some(HexSupport::Unsupported)
        );
        assert_eq2!(global_hex_support::detect(), HexSupport::Unsupported);

        global_hex_support::set_override(HexSupport::Supported);
        assert_eq2!(global_hex_support::detect(), HexSupport::Supported);

        global_hex_support::clear_override();
        assert_eq2!(global_hex_support::try_get_override(), None);
    }

    #[test]
    #[serial]
    fn test_detect_is_memoized() {
        global_hex_support::clear_override();
        global_hex_support::clear_cache();
        let first = global_hex_support::detect();
        assert_eq2!(global_hex_support::detect(), first);
        global_hex_support::clear_cache();
    }

    #[test]
    fn test_i8_conversion() {
        for it in [HexSupport::Supported, HexSupport::Unsupported] {
            assert_eq2!(HexSupport::try_from(i8::from(it)), Ok(it));
        }
        assert_eq2!(HexSupport::try_from(-1_i8), Err(()));
    }
}
