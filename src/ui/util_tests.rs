#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::util::*;

#[test]
fn test_format_amount_basic() {
    assert_eq!(format_amount(dec!(0)), "₹0.00");
    assert_eq!(format_amount(dec!(5)), "₹5.00");
    assert_eq!(format_amount(dec!(42.5)), "₹42.50");
    assert_eq!(format_amount(dec!(0.01)), "₹0.01");
}

#[test]
fn test_format_amount_thousands() {
    assert_eq!(format_amount(dec!(1234.56)), "₹1,234.56");
    assert_eq!(format_amount(dec!(1234567.89)), "₹1,234,567.89");
    assert_eq!(format_amount(dec!(1000)), "₹1,000.00");
}

#[test]
fn test_format_amount_negative() {
    assert_eq!(format_amount(dec!(-42.99)), "-₹42.99");
    assert_eq!(format_amount(dec!(-1234.56)), "-₹1,234.56");
}

#[test]
fn test_truncate_short_strings_untouched() {
    assert_eq!(truncate("hello", 10), "hello");
    assert_eq!(truncate("hello", 5), "hello");
}

#[test]
fn test_truncate_long_strings() {
    assert_eq!(truncate("hello world", 5), "hell…");
    assert_eq!(truncate("abc", 0), "");
}

#[test]
fn test_truncate_multibyte() {
    assert_eq!(truncate("₹₹₹₹₹₹", 3), "₹₹…");
}

#[test]
fn test_scroll_down_and_up() {
    let mut index = 0;
    let mut scroll = 0;

    scroll_down(&mut index, &mut scroll, 10, 5);
    assert_eq!((index, scroll), (1, 0));

    for _ in 0..10 {
        scroll_down(&mut index, &mut scroll, 10, 5);
    }
    // Clamped at the end, scroll keeps cursor on screen.
    assert_eq!(index, 9);
    assert_eq!(scroll, 5);

    for _ in 0..10 {
        scroll_up(&mut index, &mut scroll);
    }
    assert_eq!((index, scroll), (0, 0));
}

#[test]
fn test_scroll_jumps() {
    let mut index = 3;
    let mut scroll = 2;
    scroll_to_top(&mut index, &mut scroll);
    assert_eq!((index, scroll), (0, 0));

    scroll_to_bottom(&mut index, &mut scroll, 20, 5);
    assert_eq!((index, scroll), (19, 15));

    // Empty list leaves the cursor alone.
    let mut index = 0;
    let mut scroll = 0;
    scroll_to_bottom(&mut index, &mut scroll, 0, 5);
    assert_eq!((index, scroll), (0, 0));
}
