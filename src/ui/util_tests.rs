#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::util::*;

// ── format_amount ─────────────────────────────────────────────

#[test]
fn test_format_basic() {
    assert_eq!(format_amount(dec!(0)), "$0.00");
    assert_eq!(format_amount(dec!(5)), "$5.00");
    assert_eq!(format_amount(dec!(45.5)), "$45.50");
}

#[test]
fn test_format_thousand_separators() {
    assert_eq!(format_amount(dec!(1234.56)), "$1,234.56");
    assert_eq!(format_amount(dec!(1234567.89)), "$1,234,567.89");
    assert_eq!(format_amount(dec!(999)), "$999.00");
    assert_eq!(format_amount(dec!(1000)), "$1,000.00");
}

#[test]
fn test_format_negative() {
    assert_eq!(format_amount(dec!(-42.99)), "-$42.99");
    assert_eq!(format_amount(dec!(-1234.5)), "-$1,234.50");
}

#[test]
fn test_format_rounds_to_cents() {
    assert_eq!(format_amount(dec!(3.999)), "$4.00");
    assert_eq!(format_amount(Decimal::new(1, 4)), "$0.00");
}

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_short_string_unchanged() {
    assert_eq!(truncate("hello", 10), "hello");
    assert_eq!(truncate("hello", 5), "hello");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate("hello world", 8), "hello w…");
    assert_eq!(truncate("hello", 1), "…");
}

#[test]
fn test_truncate_zero_max() {
    assert_eq!(truncate("hello", 0), "");
}

#[test]
fn test_truncate_multibyte() {
    assert_eq!(truncate("日本語のテキスト", 4), "日本語…");
    assert_eq!(truncate("日本語", 3), "日本語");
}

// ── scroll helpers ────────────────────────────────────────────

#[test]
fn test_scroll_down_stops_at_end() {
    let (mut index, mut scroll) = (0, 0);
    scroll_down(&mut index, &mut scroll, 3, 10);
    scroll_down(&mut index, &mut scroll, 3, 10);
    scroll_down(&mut index, &mut scroll, 3, 10);
    assert_eq!(index, 2);
    assert_eq!(scroll, 0);
}

#[test]
fn test_scroll_down_advances_window() {
    let (mut index, mut scroll) = (0, 0);
    for _ in 0..5 {
        scroll_down(&mut index, &mut scroll, 10, 3);
    }
    assert_eq!(index, 5);
    assert_eq!(scroll, 3);
}

#[test]
fn test_scroll_up_clamps_at_zero() {
    let (mut index, mut scroll) = (1, 1);
    scroll_up(&mut index, &mut scroll);
    scroll_up(&mut index, &mut scroll);
    assert_eq!(index, 0);
    assert_eq!(scroll, 0);
}

#[test]
fn test_scroll_to_bottom_positions_window() {
    let (mut index, mut scroll) = (0, 0);
    scroll_to_bottom(&mut index, &mut scroll, 10, 3);
    assert_eq!(index, 9);
    assert_eq!(scroll, 7);

    scroll_to_top(&mut index, &mut scroll);
    assert_eq!(index, 0);
    assert_eq!(scroll, 0);
}

#[test]
fn test_scroll_to_bottom_empty_list() {
    let (mut index, mut scroll) = (0, 0);
    scroll_to_bottom(&mut index, &mut scroll, 0, 3);
    assert_eq!(index, 0);
    assert_eq!(scroll, 0);
}
