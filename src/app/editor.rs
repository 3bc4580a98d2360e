use super::document::Side;

/// Seam between the controllers and the embedded diff widget.
///
/// The FLTK implementation lives in `ui::panes`; tests use `FakePanes`.
/// Cursor positions are byte offsets into the pane text, matching FLTK's
/// `insert_position`.
pub trait DiffPanes {
    fn text(&self, side: Side) -> String;
    fn set_text(&mut self, side: Side, text: &str);
    fn cursor(&self, side: Side) -> Option<i32>;
    fn set_cursor(&mut self, side: Side, pos: i32);
}

#[cfg(test)]
pub mod testing {
    use super::*;

    /// In-memory pane pair for controller tests. Records programmatic
    /// writes so tests can assert which sides were touched.
    pub struct FakePanes {
        texts: [String; 2],
        cursors: [Option<i32>; 2],
        pub writes: Vec<(Side, String)>,
        pub cursor_writes: Vec<(Side, i32)>,
    }

    impl FakePanes {
        pub fn new(original: &str, modified: &str) -> Self {
            Self {
                texts: [original.to_string(), modified.to_string()],
                cursors: [None, None],
                writes: Vec::new(),
                cursor_writes: Vec::new(),
            }
        }

        /// Simulate the user typing into one pane (no write recorded).
        pub fn user_edit(&mut self, side: Side, text: &str) {
            self.texts[side.index()] = text.to_string();
        }

        pub fn place_cursor(&mut self, side: Side, pos: i32) {
            self.cursors[side.index()] = Some(pos);
        }
    }

    impl DiffPanes for FakePanes {
        fn text(&self, side: Side) -> String {
            self.texts[side.index()].clone()
        }

        fn set_text(&mut self, side: Side, text: &str) {
            self.texts[side.index()] = text.to_string();
            self.writes.push((side, text.to_string()));
        }

        fn cursor(&self, side: Side) -> Option<i32> {
            self.cursors[side.index()]
        }

        fn set_cursor(&mut self, side: Side, pos: i32) {
            self.cursors[side.index()] = Some(pos);
            self.cursor_writes.push((side, pos));
        }
    }
}
