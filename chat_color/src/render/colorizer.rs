// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ChatColorEncoder, ColorizerConfig, HexFallback, LegacyCode, MarkupParsePolicy,
            MarkupSegment, RgbValue, SectionSignEncoder, convert_to_ansi, parse_markup,
            render_gradient, strip_colors, uncolorize};

/// Expands chat color markup into native escapes. See the crate docs for the markup.
///
/// This is a plain value with no interior state. Build it once at startup (the hex
/// support of the platform is baked in) and share it freely between threads.
///
/// ```rust
/// use r3bl_chat_color::{Colorizer, ColorizerConfig, HexFallback, HexSupport};
///
/// let colorizer = Colorizer::new(ColorizerConfig::new(
///     HexSupport::Unsupported,
///     HexFallback::NearestLegacy,
/// ));
/// assert_eq!(colorizer.colorize("&#FF5555Hi"), "§cHi");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colorizer<E = SectionSignEncoder> {
    encoder: E,
    hex_fallback: HexFallback,
}

impl Colorizer<SectionSignEncoder> {
    #[must_use]
    pub fn new(config: ColorizerConfig) -> Self {
        Self {
            encoder: SectionSignEncoder::new(config.hex_support),
            hex_fallback: config.hex_fallback,
        }
    }

    /// Shortcut for [`ColorizerConfig::from_env()`].
    #[must_use]
    pub fn from_env() -> Self { Self::new(ColorizerConfig::from_env()) }
}

impl Default for Colorizer<SectionSignEncoder> {
    fn default() -> Self { Self::new(ColorizerConfig::default()) }
}

impl<E: ChatColorEncoder> Colorizer<E> {
    #[must_use]
    pub fn with_encoder(encoder: E, hex_fallback: HexFallback) -> Self {
        Self {
            encoder,
            hex_fallback,
        }
    }

    #[must_use]
    pub fn encoder(&self) -> &E { &self.encoder }

    /// Hex and gradient markup is only recognized when it can be rendered.
    fn recognizes_hex_markup(&self) -> bool {
        self.encoder.supports_hex() || self.hex_fallback == HexFallback::NearestLegacy
    }

    /// Expand all the markup in `text`. This never fails: malformed markers are left in
    /// the output as they are.
    ///
    /// Gradients are expanded first, on the raw text. Then hex colors and legacy codes
    /// are expanded in the result, so `&` markup inside a gradient span is split into
    /// colored units like any other text.
    #[must_use]
    pub fn colorize(&self, text: &str) -> String {
        let mut acc = String::with_capacity(text.len());
        if self.recognizes_hex_markup() {
            let mut with_gradients = String::with_capacity(text.len());
            self.render(text, MarkupParsePolicy::GradientsOnly, &mut with_gradients);
            self.render(&with_gradients, MarkupParsePolicy::HexAndLegacy, &mut acc);
        } else {
            self.render(text, MarkupParsePolicy::LegacyOnly, &mut acc);
        }
        acc
    }

    #[must_use]
    pub fn colorize_opt(&self, text: Option<&str>) -> Option<String> {
        text.map(|it| self.colorize(it))
    }

    /// Element-wise [`Self::colorize`], in order.
    #[must_use]
    pub fn colorize_all<I, S>(&self, texts: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        texts
            .into_iter()
            .map(|it| self.colorize(it.as_ref()))
            .collect()
    }

    /// Element-wise [`Self::colorize`]. A missing list stays missing, and missing
    /// elements stay missing, so the output has the same length as the input.
    #[must_use]
    pub fn colorize_list<S: AsRef<str>>(
        &self,
        texts: Option<&[Option<S>]>,
    ) -> Option<Vec<Option<String>>> {
        map_list(texts, |it| self.colorize(it))
    }

    /// See [`uncolorize()`].
    #[must_use]
    pub fn uncolorize(&self, text: &str) -> String {
        uncolorize(text, self.encoder.escape_char())
    }

    #[must_use]
    pub fn uncolorize_opt(&self, text: Option<&str>) -> Option<String> {
        text.map(|it| self.uncolorize(it))
    }

    /// Same list contract as [`Self::colorize_list`].
    #[must_use]
    pub fn uncolorize_list<S: AsRef<str>>(
        &self,
        texts: Option<&[Option<S>]>,
    ) -> Option<Vec<Option<String>>> {
        map_list(texts, |it| self.uncolorize(it))
    }

    /// See [`strip_colors()`].
    #[must_use]
    pub fn strip_colors(&self, text: &str) -> String {
        strip_colors(text, self.encoder.escape_char())
    }

    #[must_use]
    pub fn strip_colors_opt(&self, text: Option<&str>) -> Option<String> {
        text.map(|it| self.strip_colors(it))
    }

    /// Same list contract as [`Self::colorize_list`].
    #[must_use]
    pub fn strip_colors_list<S: AsRef<str>>(
        &self,
        texts: Option<&[Option<S>]>,
    ) -> Option<Vec<Option<String>>> {
        map_list(texts, |it| self.strip_colors(it))
    }

    /// Colorized text (the output of [`Self::colorize`]) as ANSI escape sequences, eg:
    /// for the server console. See [`convert_to_ansi()`].
    #[must_use]
    pub fn to_ansi(&self, colorized: &str) -> String {
        convert_to_ansi(colorized, self.encoder.escape_char())
    }

    fn render(&self, text: &str, policy: MarkupParsePolicy, acc: &mut String) {
        for segment in parse_markup(text, policy) {
            match segment {
                MarkupSegment::Literal(it) => acc.push_str(it),
                MarkupSegment::Legacy(code) => self.encoder.write_legacy(code, acc),
                MarkupSegment::Hex(color) => self.write_color(color, acc),
                MarkupSegment::Gradient(span) => {
                    render_gradient(
                        span.content,
                        span.start,
                        span.end,
                        self.encoder.escape_char(),
                        |color, acc| self.write_color(color, acc),
                        acc,
                    );
                }
            }
        }
    }

    fn write_color(&self, color: RgbValue, acc: &mut String) {
        if self.encoder.supports_hex() {
            self.encoder.write_rgb(color, acc);
        } else {
            self.encoder
                .write_legacy(LegacyCode::nearest_color(color), acc);
        }
    }
}

fn map_list<S: AsRef<str>>(
    texts: Option<&[Option<S>]>,
    f: impl Fn(&str) -> String,
) -> Option<Vec<Option<String>>> {
    texts.map(|list| {
        list.iter()
            .map(|item| item.as_ref().map(|it| f(it.as_ref())))
            .collect()
    })
}
