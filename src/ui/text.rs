// Display-width helpers for labels

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Fit `text` into `max_width` terminal columns, ending with an ellipsis
/// when something was cut
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 1 {
        return ELLIPSIS.to_string();
    }

    let budget = max_width - 1;
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push(ELLIPSIS);
    out
}

/// Horizontal bar of `width` cells with `fraction` of it filled
///
/// Returns (filled, empty) segments so callers can colour them separately.
pub fn bar_segments(fraction: f64, width: usize) -> (String, String) {
    let fraction = if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) };
    let filled = ((width as f64) * fraction).round() as usize;
    let filled = filled.min(width);
    ("█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_unchanged() {
        assert_eq!(truncate_to_width("Haven", 10), "Haven");
        assert_eq!(truncate_to_width("Haven", 5), "Haven");
    }

    #[test]
    fn test_long_text_gets_ellipsis() {
        assert_eq!(truncate_to_width("Partner Lab A", 8), "Partner…");
        assert_eq!(truncate_to_width("Partner Lab A", 1), "…");
        assert_eq!(truncate_to_width("Partner Lab A", 0), "");
    }

    #[test]
    fn test_wide_chars_measured_by_columns() {
        assert_eq!(truncate_to_width("漢字テスト", 5), "漢字…");
        assert_eq!(truncate_to_width("漢字テスト", 4), "漢…");
    }

    #[test]
    fn test_bar_segments() {
        let (filled, empty) = bar_segments(0.82, 10);
        assert_eq!(filled.chars().count(), 8);
        assert_eq!(empty.chars().count(), 2);

        let (filled, empty) = bar_segments(1.7, 4);
        assert_eq!((filled.chars().count(), empty.chars().count()), (4, 0));

        let (filled, empty) = bar_segments(f64::NAN, 4);
        assert_eq!((filled.chars().count(), empty.chars().count()), (0, 4));
    }
}
