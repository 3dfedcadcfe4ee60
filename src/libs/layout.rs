//! Fixed-width boxed text layout for terminal output.
//!
//! Every command presents its result through this module so that free text
//! (feedback, summaries) and lists (goals, subgoals, activities) share the
//! same framed look. Rendering is pure: functions return a [`DisplayBlock`]
//! and printing is left to the caller.
//!
//! ## Block Shape
//!
//! ```text
//! ┏━━━━━━━━━━━━━━━━━━━━━━━┓
//! ┃ Optional title        ┃
//! ┣━━━━━━━━━━━━━━━━━━━━━━━┫
//! ┃ Word-wrapped body     ┃
//! ┃ text padded to width  ┃
//! ┗━━━━━━━━━━━━━━━━━━━━━━━┛
//! ```
//!
//! Content rows are padded to the content width and surrounded by one space
//! on each side plus the vertical border glyphs. Borders and titles use the
//! frame color, body rows use the body color.
//!
//! ## Word Wrapping
//!
//! Wrapping is greedy: words are appended to the current line while
//! `len(line) + len(word) + 1 <= width`, otherwise the line is flushed. Words
//! are never split, so a word longer than the width gets a line of its own
//! and overflows it. Widths are display columns, so wide characters count
//! twice. Whitespace inside titles is collapsed to single spaces so a title
//! always stays on its own row.
//!
//! ## Examples
//!
//! ```rust
//! use ritual::libs::layout::{DisplayItem, Layout};
//! use ritual::libs::style::Style;
//!
//! let layout = Layout::new(Style::Plain).with_width(20);
//! let block = layout.item_list(Some("Goals"), &[DisplayItem::new("Run", "Three times a week")]);
//! assert_eq!(block.lines().len(), 6);
//! println!("{}", block);
//! ```

use super::style::Style;
use std::fmt;
use unicode_width::UnicodeWidthStr;

/// Content width of a rendered block, excluding borders and padding.
pub const CONTENT_WIDTH: usize = 80;

const HORIZONTAL: &str = "━";
const VERTICAL: &str = "┃";
const FRAME_COLOR: &str = "yellow";
const BODY_COLOR: &str = "white";

/// Normalized shape for list-like responses.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayItem {
    pub title: String,
    /// May be empty, in which case only the title row is rendered.
    pub description: String,
}

impl DisplayItem {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Rendered, framed lines ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayBlock {
    lines: Vec<String>,
}

impl DisplayBlock {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl fmt::Display for DisplayBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}

/// Renderer holding the width and colors used for every block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    width: usize,
    style: Style,
    frame: &'static str,
    body: &'static str,
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(Style::default())
    }
}

impl Layout {
    pub fn new(style: Style) -> Self {
        Self {
            width: CONTENT_WIDTH,
            style,
            frame: FRAME_COLOR,
            body: BODY_COLOR,
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Renders `body` as wrapped paragraphs under an optional title.
    ///
    /// An empty title is treated the same as no title.
    pub fn text_block(&self, title: Option<&str>, body: &str) -> DisplayBlock {
        let mut lines = vec![self.top_border()];
        self.push_title(&mut lines, title);

        lines.extend(wrap_words(body, self.width).iter().map(|line| self.body_row(line)));

        lines.push(self.bottom_border());
        DisplayBlock { lines }
    }

    /// Renders `items` as title rows followed by their wrapped descriptions.
    ///
    /// Consecutive items are separated by one blank row. With no items only
    /// the frame (and title, if given) is rendered.
    pub fn item_list(&self, title: Option<&str>, items: &[DisplayItem]) -> DisplayBlock {
        let mut lines = vec![self.top_border()];
        self.push_title(&mut lines, title);

        for (index, item) in items.iter().enumerate() {
            if index > 0 {
                lines.push(self.frame_row(""));
            }
            lines.push(self.frame_row(&single_line(&item.title)));
            lines.extend(wrap_words(&item.description, self.width).iter().map(|line| self.body_row(line)));
        }

        lines.push(self.bottom_border());
        DisplayBlock { lines }
    }

    fn push_title(&self, lines: &mut Vec<String>, title: Option<&str>) {
        let title = title.map(single_line).filter(|title| !title.is_empty());
        if let Some(title) = title {
            lines.push(self.frame_row(&title));
            lines.push(self.rule("┣", "┫"));
        }
    }

    fn top_border(&self) -> String {
        self.rule("┏", "┓")
    }

    fn bottom_border(&self) -> String {
        self.rule("┗", "┛")
    }

    fn rule(&self, left: &str, right: &str) -> String {
        let rule = format!("{}{}{}", left, HORIZONTAL.repeat(self.width + 2), right);
        self.style.paint_named(&rule, self.frame)
    }

    fn frame_row(&self, text: &str) -> String {
        let row = format!("{} {} {}", VERTICAL, pad(text, self.width), VERTICAL);
        self.style.paint_named(&row, self.frame)
    }

    fn body_row(&self, text: &str) -> String {
        format!(
            "{}{}{}",
            self.style.paint_named(VERTICAL, self.frame),
            self.style.paint_named(&format!(" {} ", pad(text, self.width)), self.body),
            self.style.paint_named(VERTICAL, self.frame)
        )
    }
}

/// Pads `text` with spaces to `width` display columns.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

/// Collapses tabs, newlines and runs of spaces into single spaces.
fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Greedily wraps whitespace-separated words into lines of at most `width`
/// display columns. A single word longer than `width` is kept whole on its own line.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.width();
        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + word_len + 1 <= width {
            current.push(' ');
            current.push_str(word);
            current_len += word_len + 1;
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_breaks_on_width() {
        assert_eq!(wrap_words("aaa bbb ccc", 7), vec!["aaa bbb", "ccc"]);
        assert_eq!(wrap_words("aaa bbb ccc", 6), vec!["aaa", "bbb", "ccc"]);
    }

    #[test]
    fn test_wrap_keeps_long_word_whole() {
        assert_eq!(wrap_words("a abcdefghij b", 5), vec!["a", "abcdefghij", "b"]);
    }

    #[test]
    fn test_wrap_empty_text() {
        assert!(wrap_words("", 10).is_empty());
        assert!(wrap_words("   \n\t ", 10).is_empty());
    }

    #[test]
    fn test_wrap_counts_characters() {
        assert_eq!(wrap_words("héllo wörld", 11), vec!["héllo wörld"]);
    }

    #[test]
    fn test_wrap_counts_display_columns() {
        assert_eq!(wrap_words("日本 語", 5), vec!["日本", "語"]);
        assert_eq!(wrap_words("日本 語", 7), vec!["日本 語"]);
    }

    #[test]
    fn test_pad_uses_display_width() {
        assert_eq!(pad("日本", 6), "日本  ");
        assert_eq!(pad("toolong", 3), "toolong");
    }

    #[test]
    fn test_single_line_collapses_whitespace() {
        assert_eq!(single_line("  Morning\troutine\n(daily) "), "Morning routine (daily)");
        assert_eq!(single_line("\n\t"), "");
    }

    #[test]
    fn test_ansi_body_row_colors_border_and_text_separately() {
        let layout = Layout::new(Style::Ansi).with_width(4);
        let block = layout.text_block(None, "hi");
        assert_eq!(block.lines()[1], "\x1b[33m┃\x1b[0m\x1b[1;37m hi   \x1b[0m\x1b[33m┃\x1b[0m");
        assert_eq!(block.lines()[0], "\x1b[33m┏━━━━━━┓\x1b[0m");
    }
}
