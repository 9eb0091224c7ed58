//! Pure text layout calculations for preview images.
//!
//! All functions here are pure and testable without any I/O. Text width is
//! estimated from character counts, not measured: every character is assumed
//! to be `0.55 × font-size` wide, which is close enough for proportional
//! sans-serif fonts at banner sizes.

/// Title font size in px.
pub const TITLE_SIZE: u32 = 52;
/// Description font size in px.
pub const DESCRIPTION_SIZE: u32 = 30;
/// Horizontal margin on each side, in px.
pub const MARGIN: u32 = 80;
/// Vertical gap between the title and description blocks, in px.
pub const BLOCK_GAP: i64 = 28;

const AVG_CHAR_WIDTH: f64 = 0.55;
const TITLE_LINE_HEIGHT: f64 = 1.25;
const DESCRIPTION_LINE_HEIGHT: f64 = 1.45;
const MIN_LINE_CHARS: usize = 8;

/// Maximum characters per line for a font size on a canvas `width` px wide.
///
/// Never less than 8, however narrow the canvas.
pub fn max_line_chars(font_size: u32, width: u32, margin: u32) -> usize {
    let avg_char_width = f64::from(font_size) * AVG_CHAR_WIDTH;
    let usable = f64::from(width) - 2.0 * f64::from(margin);
    let chars = (usable / avg_char_width).floor();
    if chars.is_finite() && chars > 0.0 {
        (chars as usize).max(MIN_LINE_CHARS)
    } else {
        MIN_LINE_CHARS
    }
}

/// Greedily pack whitespace-separated words into lines.
///
/// A line never exceeds the character budget unless a single word does on its
/// own; every line holds at least one word. Empty text yields no lines.
pub fn wrap_by_width(text: &str, font_size: u32, width: u32, margin: u32) -> Vec<String> {
    let max_chars = max_line_chars(font_size, width, margin);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= max_chars {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Positioned text for one preview image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLayout {
    pub title_lines: Vec<String>,
    pub description_lines: Vec<String>,
    /// Horizontal center; every line is anchored here.
    pub center_x: u32,
    /// Baseline of the first title line.
    pub title_y: i64,
    /// Baseline of the first description line.
    pub description_y: i64,
    pub title_line_height: u32,
    pub description_line_height: u32,
}

/// Wrap both texts and center the stacked blocks vertically.
///
/// ```text
/// stack = title_lines × 65 + (28 if description) + description_lines × 43
/// title_y = (height − stack) / 2 + 52
/// ```
pub fn layout_text(title: &str, description: &str, width: u32, height: u32) -> TextLayout {
    let title_line_height = (f64::from(TITLE_SIZE) * TITLE_LINE_HEIGHT) as u32;
    let description_line_height = (f64::from(DESCRIPTION_SIZE) * DESCRIPTION_LINE_HEIGHT) as u32;

    let title_lines = wrap_by_width(title, TITLE_SIZE, width, MARGIN);
    let description_lines = wrap_by_width(description, DESCRIPTION_SIZE, width, MARGIN);

    let gap = if description_lines.is_empty() { 0 } else { BLOCK_GAP };
    let title_block = title_lines.len() as i64 * i64::from(title_line_height);
    let description_block = description_lines.len() as i64 * i64::from(description_line_height);
    let stack = title_block + gap + description_block;

    // Truncate toward zero, as the baseline is an integer pixel offset.
    let title_y = ((f64::from(height) - stack as f64) / 2.0 + f64::from(TITLE_SIZE)) as i64;
    let description_y = title_y + title_block + gap;

    TextLayout {
        title_lines,
        description_lines,
        center_x: width / 2,
        title_y,
        description_y,
        title_line_height,
        description_line_height,
    }
}
