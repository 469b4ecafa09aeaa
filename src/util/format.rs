use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// `m:ss` rendering of a track duration, seconds zero-padded.
pub fn format_duration(ms: u64) -> String {
    let minutes = ms / 60_000;
    let seconds = (ms % 60_000) / 1_000;
    format!("{}:{:02}", minutes, seconds)
}

/// Cut `text` down to `max_width` terminal columns, appending an ellipsis
/// when something was dropped. Width-aware, so CJK titles don't overflow
/// their column.
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width.saturating_sub(1) {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_is_zero_padded_minutes_seconds() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(65_000), "1:05");
        assert_eq!(format_duration(599_999), "9:59");
        assert_eq!(format_duration(3_601_000), "60:01");
    }

    #[test]
    fn truncate_keeps_short_text_untouched() {
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn truncate_appends_ellipsis() {
        assert_eq!(truncate("a very long track title", 10), "a very lo…");
    }

    #[test]
    fn truncate_respects_wide_characters() {
        let cut = truncate("ミュージック", 5);
        assert!(cut.ends_with('…'));
        assert!(UnicodeWidthStr::width(cut.as_str()) <= 5);
    }
}
