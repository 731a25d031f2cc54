// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! End to end checks of the public API, from markup to native escapes and back.

use r3bl_chat_color::{Colorizer, ColorizerConfig, HexFallback, HexSupport, RgbValue,
                      SectionSignEncoder, assert_eq2, parse_native_escapes,
                      NativeSegment, SECTION_SIGN};
use test_case::test_case;

fn modern() -> Colorizer { Colorizer::new(ColorizerConfig::default()) }

fn legacy() -> Colorizer {
    Colorizer::new(ColorizerConfig::default().with_hex_support(HexSupport::Unsupported))
}

/// The colors of the hex runs in `colorized`, in order.
fn rgb_runs(colorized: &str) -> Vec<RgbValue> {
    parse_native_escapes(colorized, SECTION_SIGN)
        .into_iter()
        .filter_map(|it| match it {
            NativeSegment::Rgb(color) => Some(color),
            _ => None,
        })
        .collect()
}

#[test]
fn test_absent_input_stays_absent() {
    assert_eq2!(modern().colorize_opt(None), None);
    assert_eq2!(modern().colorize_list::<String>(None), None);
    assert_eq2!(modern().uncolorize_opt(None), None);
}

#[test]
fn test_empty_list_stays_empty() {
    let empty: Vec<Option<String>> = vec![];
    assert_eq2!(modern().colorize_list(Some(&empty[..])), Some(vec![]));
    assert!(modern().colorize_all(Vec::<String>::new()).is_empty());
}

#[test]
fn test_list_keeps_order_length_and_missing_elements() {
    let input = vec![Some("&a1".to_string()), None, Some("&#FF0000".to_string()), None];
    let output = modern().colorize_list(Some(&input[..])).unwrap();
    assert_eq2!(output.len(), input.len());
    assert_eq2!(
        output,
        vec![
            Some("§a1".to_string()),
            None,
            Some("§x§f§f§0§0§0§0".to_string()),
            None
        ]
    );
}

#[test_case("")]
#[test_case("no markers at all")]
#[test_case("a & b, 1 < 2 > 0")]
#[test_case("unicode: héllo 👋 世界")]
#[test_case("multi\nline\r\ntext")]
fn test_text_without_markers_is_unchanged(text: &str) {
    assert_eq2!(modern().colorize(text), text);
    assert_eq2!(legacy().colorize(text), text);
}

#[test]
fn test_legacy_code_prefix() {
    let it = modern().colorize("&aHello");
    assert!(it.starts_with("§a"));
    assert_eq2!(it, "§aHello");
}

#[test]
fn test_hex_color_with_and_without_support() {
    assert_eq2!(modern().colorize("&#FF0000"), "§x§f§f§0§0§0§0");
    assert_eq2!(
        rgb_runs(&modern().colorize("&#FF0000")),
        vec![RgbValue::from_u8(255, 0, 0)]
    );
    assert_eq2!(legacy().colorize("&#FF0000"), "&#FF0000");
}

#[test]
fn test_two_unit_gradient() {
    let it = modern().colorize("<#FF0000>AB</#00FF00>");
    assert_eq2!(
        rgb_runs(&it),
        vec![RgbValue::from_u8(255, 0, 0), RgbValue::from_u8(0, 255, 0)]
    );
    assert_eq2!(modern().strip_colors(&it), "AB");
}

#[test]
fn test_single_unit_gradient_uses_start_color() {
    let it = modern().colorize("<#FF0000>A</#00FF00>");
    assert_eq2!(it, "§x§f§f§0§0§0§0A");
}

#[test]
fn test_ampersand_markup_inside_gradient_is_split_into_units() {
    let it = modern().colorize("<#FF0000>&lAB</#0000FF>");
    // Four units, and `&l` stays visible text.
    assert_eq2!(
        rgb_runs(&it),
        vec![
            RgbValue::from_u8(255, 0, 0),
            RgbValue::from_u8(170, 0, 85),
            RgbValue::from_u8(85, 0, 170),
            RgbValue::from_u8(0, 0, 255),
        ]
    );
    assert_eq2!(modern().strip_colors(&it), "&lAB");
}

#[test]
fn test_legacy_code_formed_across_gradient_end() {
    assert_eq2!(
        modern().colorize("<#FF0000>A&</#00FF00>b"),
        "§x§f§f§0§0§0§0A§x§0§0§f§f§0§0§b"
    );
}

#[test]
fn test_trailing_escape_inside_gradient_is_dropped() {
    assert_eq2!(
        modern().colorize("<#FF0000>AB§l</#00FF00>x"),
        "§x§f§f§0§0§0§0A§x§0§0§f§f§0§0Bx"
    );
}

#[test_case("<#FF0000>a\u{0085}b</#00FF00>"; "next line")]
#[test_case("<#FF0000>a\u{2028}b</#00FF00>"; "line separator")]
#[test_case("<#FF0000>a\u{2029}b</#00FF00>"; "paragraph separator")]
fn test_gradient_does_not_cross_unicode_line_terminators(text: &str) {
    assert_eq2!(modern().colorize(text), text);
}

#[test]
fn test_malformed_gradient_is_unchanged() {
    let text = "<#ZZZZZZ>text</#FF0000>";
    assert_eq2!(modern().colorize(text), text);
}

#[test]
fn test_unclosed_gradient_keeps_inner_markup_working() {
    assert_eq2!(modern().colorize("<#FF0000>&aHi"), "<#FF0000>§aHi");
}

#[test]
fn test_nested_gradient_is_not_supported() {
    let it = modern().colorize("<#FF0000>a<#00FF00>b</#0000FF>c</#FFFFFF>");
    // The inner opening tag is content of the outer span, the outer closing tag is text.
    assert_eq2!(
        modern().strip_colors(&it),
        "a<#00FF00>bc</#FFFFFF>"
    );
}

#[test]
fn test_uncolorize_round_trip() {
    let it = modern().uncolorize(&modern().colorize("&aHello"));
    assert!(it.contains("&a"));
    assert_eq2!(it, "&aHello");
}

#[test]
fn test_nearest_legacy_fallback() {
    let colorizer = Colorizer::new(ColorizerConfig::new(
        HexSupport::Unsupported,
        HexFallback::NearestLegacy,
    ));
    assert_eq2!(colorizer.colorize("&#FFAA00gold"), "§6gold");
    assert!(rgb_runs(&colorizer.colorize("<#FF0000>AB</#00FF00>")).is_empty());
}

#[test]
fn test_custom_encoder() {
    let colorizer = Colorizer::with_encoder(
        SectionSignEncoder::new(HexSupport::Unsupported),
        HexFallback::Literal,
    );
    assert_eq2!(colorizer.colorize("&#FF0000&cx"), "&#FF0000§cx");
}

#[test]
fn test_to_ansi() {
    let colorizer = modern();
    let it = colorizer.to_ansi(&colorizer.colorize("&lBold"));
    assert_eq2!(it, "\x1b[1mBold\x1b[0m");
}

#[test]
fn test_colorizer_is_shareable_between_threads() {
    let colorizer = modern();
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || colorizer.colorize("&aHi")))
        .collect();
    for handle in handles {
        assert_eq2!(handle.join().unwrap(), "§aHi");
    }
}
