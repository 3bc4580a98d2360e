use fltk::enums::{Color, Font};
use fltk::text::StyleTableEntry;
use syntect::highlighting::{
    Color as SyntectColor, HighlightIterator, HighlightState, Highlighter, ThemeSet,
};
use syntect::parsing::{ParseState, ScopeStack, SyntaxSet};
use syntect::util::LinesWithEndings;

use super::language::Language;

const DARK_THEME: &str = "base16-ocean.dark";
const LIGHT_THEME: &str = "base16-ocean.light";

// FLTK style chars run 'A'..'Z'; 'A' is the default, leaving 25 theme colors.
const MAX_PALETTE_COLORS: usize = 25;

/// Foreground colors seen while highlighting with the current theme, in
/// first-seen order. Index 0 of the emitted style table is always the
/// default foreground ('A'); colors map to 'B' onward. One theme uses a
/// handful of colors, so a linear scan beats a map here.
struct StylePalette {
    colors: Vec<(u8, u8, u8)>,
    font: Font,
    font_size: i32,
}

impl StylePalette {
    fn new(font: Font, font_size: i32) -> Self {
        Self {
            colors: Vec::new(),
            font,
            font_size,
        }
    }

    fn style_char(&mut self, color: SyntectColor) -> char {
        let key = (color.r, color.g, color.b);
        let idx = match self.colors.iter().position(|&c| c == key) {
            Some(i) => i + 1,
            None if self.colors.len() < MAX_PALETTE_COLORS => {
                self.colors.push(key);
                self.colors.len()
            }
            // Palette exhausted: reuse the last slot.
            None => MAX_PALETTE_COLORS,
        };
        (b'A' + idx as u8) as char
    }

    fn table(&self) -> Vec<StyleTableEntry> {
        let mut entries = Vec::with_capacity(self.colors.len() + 1);
        entries.push(StyleTableEntry {
            color: Color::Foreground,
            font: self.font,
            size: self.font_size,
        });
        entries.extend(self.colors.iter().map(|&(r, g, b)| StyleTableEntry {
            color: Color::from_rgb(r, g, b),
            font: self.font,
            size: self.font_size,
        }));
        entries
    }

    fn reset(&mut self) {
        self.colors.clear();
    }

    fn set_font(&mut self, font: Font, size: i32) {
        self.font = font;
        self.font_size = size;
    }
}

/// Syntect-backed highlighter for the two diff panes.
///
/// Diff pastes are small, so both panes are always highlighted in full; no
/// incremental or chunked machinery. The output is an FLTK style string
/// (one style char per byte) plus the matching style table.
pub struct SyntaxHighlighter {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
    palette: StylePalette,
}

impl SyntaxHighlighter {
    pub fn new(is_dark: bool, font: Font, font_size: i32) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: if is_dark { DARK_THEME } else { LIGHT_THEME }.to_string(),
            palette: StylePalette::new(font, font_size),
        }
    }

    /// Full highlight of one pane's text for the given language.
    /// Unknown syntaxes and plaintext yield an all-default style string.
    pub fn highlight_full(&mut self, text: &str, language: Language) -> String {
        let Some(syntax) = language
            .syntect_name()
            .and_then(|name| self.syntax_set.find_syntax_by_name(name))
            .cloned()
        else {
            return make_default_style(text);
        };

        let theme = &self.theme_set.themes[&self.theme_name];
        let highlighter = Highlighter::new(theme);
        let mut parse_state = ParseState::new(&syntax);
        let mut highlight_state = HighlightState::new(&highlighter, ScopeStack::new());
        let mut style_string = String::with_capacity(text.len());

        for line in LinesWithEndings::from(text) {
            let ops = parse_state
                .parse_line(line, &self.syntax_set)
                .unwrap_or_default();
            let iter = HighlightIterator::new(&mut highlight_state, &ops, line, &highlighter);
            for (style, piece) in iter {
                let ch = self.palette.style_char(style.foreground);
                // One style char per byte (not per char) for UTF-8 correctness
                for _ in 0..piece.len() {
                    style_string.push(ch);
                }
            }
        }

        style_string
    }

    /// Switch theme for dark/light mode. Resets the palette.
    pub fn set_dark_mode(&mut self, is_dark: bool) {
        self.theme_name = if is_dark { DARK_THEME } else { LIGHT_THEME }.to_string();
        self.palette.reset();
    }

    /// Update the font used in style table entries.
    pub fn set_font(&mut self, font: Font, size: i32) {
        self.palette.set_font(font, size);
    }

    /// Get the style table for FLTK's set_highlight_data.
    pub fn style_table(&self) -> Vec<StyleTableEntry> {
        self.palette.table()
    }
}

fn make_default_style(text: &str) -> String {
    "A".repeat(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_string_covers_every_byte() {
        let mut hl = SyntaxHighlighter::new(true, Font::Courier, 14);
        let text = "{\"key\": [1, true]}\n";
        let styles = hl.highlight_full(text, Language::Json);
        assert_eq!(styles.len(), text.len());
    }

    #[test]
    fn test_plaintext_gets_default_style() {
        let mut hl = SyntaxHighlighter::new(false, Font::Courier, 14);
        let styles = hl.highlight_full("abc", Language::Plaintext);
        assert_eq!(styles, "AAA");
        assert_eq!(hl.style_table().len(), 1);
    }

    #[test]
    fn test_json_uses_more_than_one_style() {
        let mut hl = SyntaxHighlighter::new(true, Font::Courier, 14);
        let styles = hl.highlight_full("{\"key\": 1}\n", Language::Json);
        let distinct: std::collections::HashSet<char> = styles.chars().collect();
        assert!(distinct.len() > 1, "expected multiple styles, got {:?}", distinct);
    }

    #[test]
    fn test_theme_switch_resets_style_table() {
        let mut hl = SyntaxHighlighter::new(true, Font::Courier, 14);
        hl.highlight_full("{\"key\": 1}\n", Language::Json);
        assert!(hl.style_table().len() > 1);
        hl.set_dark_mode(false);
        assert_eq!(hl.style_table().len(), 1);
    }

    #[test]
    fn test_same_color_reuses_its_style_char() {
        let mut hl = SyntaxHighlighter::new(true, Font::Courier, 14);
        hl.highlight_full("{\"a\": 1}\n", Language::Json);
        let before = hl.style_table().len();
        hl.highlight_full("{\"a\": 1}\n", Language::Json);
        assert_eq!(hl.style_table().len(), before);
    }

    #[test]
    fn test_font_change_applies_to_whole_table() {
        let mut hl = SyntaxHighlighter::new(true, Font::Courier, 14);
        hl.highlight_full("{\"a\": 1}\n", Language::Json);
        hl.set_font(Font::Screen, 18);
        for entry in hl.style_table() {
            assert_eq!(entry.font, Font::Screen);
            assert_eq!(entry.size, 18);
        }
    }

    #[test]
    fn test_multibyte_text_styled_per_byte() {
        let mut hl = SyntaxHighlighter::new(true, Font::Courier, 14);
        let text = "\"caf\u{e9}\"\n";
        let styles = hl.highlight_full(text, Language::Json);
        assert_eq!(styles.len(), text.len());
    }
}
