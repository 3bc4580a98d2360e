use fltk::{
    app::Sender,
    enums::{Color, Event, Font},
    group::Flex,
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
};

use crate::app::document::Side;
use crate::app::editor::DiffPanes;
use crate::app::language::Language;
use crate::app::messages::Message;
use crate::app::syntax::SyntaxHighlighter;
use crate::app::text_ops::offset_to_line_col;

/// The two live FLTK editors making up the diff view.
///
/// This is the production implementation of the `DiffPanes` seam. Each pane
/// owns a text buffer plus a parallel style buffer for highlighting; modify
/// callbacks keep the style buffer length in sync on every keystroke and
/// forward `PaneEdited` to the dispatch loop.
pub struct EditorPanes {
    editors: [TextEditor; 2],
    buffers: [TextBuffer; 2],
    style_buffers: [TextBuffer; 2],
}

impl EditorPanes {
    /// Build both editors inside `row` (must be the current group).
    pub fn new(row: &mut Flex, sender: &Sender<Message>) -> Self {
        let original = build_pane(Side::Original, sender);
        let modified = build_pane(Side::Modified, sender);
        row.end();

        // Cursor tracking for the modified pane only, like the status bar shows.
        let mut modified_editor = modified.0.clone();
        let modified_buf = modified.1.clone();
        let s = *sender;
        modified_editor.handle(move |ed, ev| {
            match ev {
                Event::KeyUp | Event::Released | Event::Drag => {
                    let pos = ed.insert_position();
                    let text = buffer_text(&modified_buf);
                    let (line, col) = offset_to_line_col(&text, pos as usize);
                    s.send(Message::CursorMoved { line, col });
                }
                _ => {}
            }
            false
        });

        Self {
            editors: [original.0, modified.0],
            buffers: [original.1, modified.1],
            style_buffers: [original.2, modified.2],
        }
    }

    pub fn editor_mut(&mut self, side: Side) -> &mut TextEditor {
        &mut self.editors[side.index()]
    }

    /// Re-highlight both panes and push the style data into the editors.
    /// With highlighting disabled (or plaintext) every byte gets the
    /// default style.
    pub fn apply_highlight(
        &mut self,
        highlighter: &mut SyntaxHighlighter,
        language: Language,
        enabled: bool,
    ) {
        for side in Side::BOTH {
            let text = self.text(side);
            let styles = if enabled {
                highlighter.highlight_full(&text, language)
            } else {
                "A".repeat(text.len())
            };
            self.style_buffers[side.index()].set_text(&styles);
            self.editors[side.index()].set_highlight_data(
                self.style_buffers[side.index()].clone(),
                highlighter.style_table(),
            );
            self.editors[side.index()].redraw();
        }
    }

    pub fn set_line_numbers(&mut self, enabled: bool) {
        for editor in &mut self.editors {
            editor.set_linenumber_width(if enabled { 40 } else { 0 });
            editor.redraw();
        }
    }

    pub fn set_word_wrap(&mut self, enabled: bool) {
        let mode = if enabled { WrapMode::AtBounds } else { WrapMode::None };
        for editor in &mut self.editors {
            editor.wrap_mode(mode, 0);
            editor.redraw();
        }
    }

    pub fn set_font(&mut self, font: Font) {
        for editor in &mut self.editors {
            editor.set_text_font(font);
            editor.redraw();
        }
    }

    pub fn set_font_size(&mut self, size: i32) {
        for editor in &mut self.editors {
            editor.set_text_size(size);
            editor.redraw();
        }
    }
}

impl DiffPanes for EditorPanes {
    fn text(&self, side: Side) -> String {
        buffer_text(&self.buffers[side.index()])
    }

    fn set_text(&mut self, side: Side, text: &str) {
        self.buffers[side.index()].set_text(text);
    }

    fn cursor(&self, side: Side) -> Option<i32> {
        Some(self.editors[side.index()].insert_position())
    }

    fn set_cursor(&mut self, side: Side, pos: i32) {
        self.editors[side.index()].set_insert_position(pos);
        self.editors[side.index()].show_insert_position();
    }
}

fn build_pane(
    side: Side,
    sender: &Sender<Message>,
) -> (TextEditor, TextBuffer, TextBuffer) {
    let mut buffer = TextBuffer::default();
    let style_buffer = TextBuffer::default();
    let mut editor = TextEditor::new(0, 0, 0, 0, "");
    editor.set_buffer(buffer.clone());
    editor.set_linenumber_width(40);
    editor.set_linenumber_bgcolor(Color::from_rgb(240, 240, 240));
    editor.set_linenumber_fgcolor(Color::from_rgb(100, 100, 100));

    let s = *sender;
    let mut style_buf = style_buffer.clone();
    buffer.add_modify_callback(move |pos, inserted, deleted, _restyled, _deleted_text| {
        if inserted > 0 || deleted > 0 {
            // Keep the style buffer the same length as the text buffer
            if inserted > 0 {
                let filler = "A".repeat(inserted as usize);
                style_buf.insert(pos, &filler);
            }
            if deleted > 0 {
                style_buf.remove(pos, pos + deleted);
            }
            s.send(Message::PaneEdited(side));
        }
    });

    (editor, buffer, style_buffer)
}

/// Read text from an FLTK TextBuffer without leaking the C-allocated copy.
///
/// fltk-rs's `TextBuffer::text()` copies a `malloc()`'d C string into a Rust
/// String but never frees the original pointer, leaking the full buffer size
/// on every call. This calls the FFI directly and frees the allocation.
fn buffer_text(buf: &TextBuffer) -> String {
    unsafe extern "C" {
        fn Fl_Text_Buffer_text(buf: *mut std::ffi::c_void) -> *mut std::ffi::c_char;
        fn free(ptr: *mut std::ffi::c_void);
    }

    // SAFETY: buf is a valid TextBuffer, so Fl_Text_Buffer_text returns a
    // malloc'd, null-terminated C string (or null when empty). We copy it
    // into a Rust String and free the C allocation ourselves.
    unsafe {
        let inner = buf.as_ptr() as *mut std::ffi::c_void;
        let ptr = Fl_Text_Buffer_text(inner);
        if ptr.is_null() {
            return String::new();
        }
        let cstr = std::ffi::CStr::from_ptr(ptr);
        let result = cstr.to_string_lossy().into_owned();
        free(ptr as *mut std::ffi::c_void);
        result
    }
}
