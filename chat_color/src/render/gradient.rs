// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Gradient rendering. The content of a gradient span is split into
//! [`CharacterUnit`]s, and each one is painted with a color that is linearly
//! interpolated between the start and end colors of the span.

use unicode_segmentation::UnicodeSegmentation;

use crate::{DEBUG_CHAT_COLOR, InlineString, RgbValue};

/// One visible grapheme cluster, plus the escapes (eg: `§l`) that came right before it
/// in the content. The prefix is re-emitted after the gradient color, so formatting that
/// was already applied isn't lost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterUnit<'a> {
    pub prefix: InlineString,
    pub visible: &'a str,
}

pub type CharacterUnits<'a> = Vec<CharacterUnit<'a>>;

/// Walk the grapheme clusters of `text`, attaching each `escape_char` + code pair to the
/// next visible grapheme. An `escape_char` at the very end of the text has nothing to
/// pair with, so it is a visible unit itself. Escape pairs at the very end of the text
/// have no visible grapheme to attach to, and are dropped.
#[must_use]
pub fn split_character_units(text: &str, escape_char: char) -> CharacterUnits<'_> {
    let mut units = Vec::new();
    let mut prefix = InlineString::new();
    let mut graphemes = text.graphemes(true);

    while let Some(grapheme) = graphemes.next() {
        if is_escape_char(grapheme, escape_char) {
            if let Some(code) = graphemes.next() {
                prefix.push_str(grapheme);
                prefix.push_str(code);
                continue;
            }
        }
        units.push(CharacterUnit {
            prefix: std::mem::take(&mut prefix),
            visible: grapheme,
        });
    }

    units
}

fn is_escape_char(grapheme: &str, escape_char: char) -> bool {
    let mut chars = grapheme.chars();
    chars.next() == Some(escape_char) && chars.next().is_none()
}

/// Position of a unit along the gradient, from `0.0` to `1.0`. A single unit sits at
/// the start.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn calc_ratio(index: usize, last_index: usize) -> f32 {
    if last_index == 0 {
        0.0
    } else {
        index as f32 / last_index as f32
    }
}

/// Paint `content` with a gradient from `start` to `end` and append it to `acc`. For
/// each unit: the escape for its color (written by `write_color`), then its prefix, then
/// the visible grapheme. Content without any visible grapheme (empty, or only escape
/// pairs) is appended unchanged.
pub fn render_gradient(
    content: &str,
    start: RgbValue,
    end: RgbValue,
    escape_char: char,
    mut write_color: impl FnMut(RgbValue, &mut String),
    acc: &mut String,
) {
    let units = split_character_units(content, escape_char);
    if units.is_empty() {
        acc.push_str(content);
        return;
    }

    DEBUG_CHAT_COLOR.then(|| {
        tracing::debug!(
            message = "render_gradient",
            start = %start,
            end = %end,
            unit_count = units.len()
        );
    });

    let last_index = units.len().saturating_sub(1);
    for (index, unit) in units.iter().enumerate() {
        let color = RgbValue::lerp(start, end, calc_ratio(index, last_index));
        write_color(color, acc);
        acc.push_str(&unit.prefix);
        acc.push_str(unit.visible);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ChatColorEncoder, SECTION_SIGN, SectionSignEncoder, assert_eq2};

    fn render(content: &str, start: RgbValue, end: RgbValue) -> String {
        let encoder = SectionSignEncoder::default();
        let mut acc = String::new();
        render_gradient(
            content,
            start,
            end,
            SECTION_SIGN,
            |color, acc| encoder.write_rgb(color, acc),
            &mut acc,
        );
        acc
    }

    fn unit(prefix: &str, visible: &'static str) -> CharacterUnit<'static> {
        CharacterUnit {
            prefix: prefix.into(),
            visible,
        }
    }

    #[test]
    fn test_split_plain_text() {
        let it = split_character_units("ab", SECTION_SIGN);
        assert_eq2!(it, vec![unit("", "a"), unit("", "b")]);
    }

    #[test]
    fn test_split_attaches_prefix_to_next_visible() {
        let it = split_character_units("§l§oa§cb", SECTION_SIGN);
        assert_eq2!(it, vec![unit("§l§o", "a"), unit("§c", "b")]);
    }

    #[test]
    fn test_split_drops_trailing_escape_pairs() {
        let it = split_character_units("ab§n§l", SECTION_SIGN);
        assert_eq2!(it, vec![unit("", "a"), unit("", "b")]);
    }

    #[test]
    fn test_split_lone_trailing_escape_is_visible() {
        let it = split_character_units("a§", SECTION_SIGN);
        assert_eq2!(it, vec![unit("", "a"), unit("", "§")]);
    }

    #[test]
    fn test_split_grapheme_clusters() {
        // Family emoji (ZWJ sequence) and a combining accent are one unit each.
        let it = split_character_units("👨‍👩‍👧e\u{301}", SECTION_SIGN);
        assert_eq2!(it.len(), 2);
        assert_eq2!(it[0].visible, "👨‍👩‍👧");
        assert_eq2!(it[1].visible, "e\u{301}");
    }

    #[test]
    fn test_calc_ratio() {
        assert_eq2!(calc_ratio(0, 0), 0.0);
        assert_eq2!(calc_ratio(0, 4), 0.0);
        assert_eq2!(calc_ratio(2, 4), 0.5);
        assert_eq2!(calc_ratio(4, 4), 1.0);
    }

    #[test]
    fn test_render_two_units() {
        assert_eq2!(
            render("AB", (255, 0, 0).into(), (0, 255, 0).into()),
            "§x§f§f§0§0§0§0A§x§0§0§f§f§0§0B"
        );
    }

    #[test]
    fn test_render_single_unit_uses_start_color() {
        assert_eq2!(
            render("A", (255, 0, 0).into(), (0, 255, 0).into()),
            "§x§f§f§0§0§0§0A"
        );
    }

    #[test]
    fn test_render_three_units_midpoint() {
        assert_eq2!(
            render("ABC", (0, 0, 0).into(), (255, 255, 255).into()),
            "§x§0§0§0§0§0§0A§x§7§f§7§f§7§fB§x§f§f§f§f§f§fC"
        );
    }

    #[test]
    fn test_render_keeps_prefix_after_color() {
        assert_eq2!(
            render("§lA", (255, 0, 0).into(), (0, 255, 0).into()),
            "§x§f§f§0§0§0§0§lA"
        );
    }

    #[test]
    fn test_render_drops_trailing_escape_pairs() {
        assert_eq2!(
            render("AB§l", (255, 0, 0).into(), (0, 255, 0).into()),
            "§x§f§f§0§0§0§0A§x§0§0§f§f§0§0B"
        );
    }

    #[test]
    fn test_render_content_without_visible_graphemes_is_unchanged() {
        assert_eq2!(render("", (0, 0, 0).into(), (0, 0, 0).into()), "");
        assert_eq2!(render("§l§o", (0, 0, 0).into(), (0, 0, 0).into()), "§l§o");
    }
}
