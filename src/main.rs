use fltk::{app, dialog, enums::Font, prelude::*};
use std::fs;

use ferris_diff::app::detect_controller::DetectController;
use ferris_diff::app::document::Side;
use ferris_diff::app::format_controller::FormatController;
use ferris_diff::app::language::Language;
use ferris_diff::app::messages::Message;
use ferris_diff::app::services::detect::ContentClassifier;
use ferris_diff::app::services::diff_stats;
use ferris_diff::app::services::format::PrettyPrinter;
use ferris_diff::app::settings::{AppSettings, FontChoice, ThemeMode};
use ferris_diff::app::state::AppState;
use ferris_diff::app::sync_controller::SyncController;
use ferris_diff::app::syntax::SyntaxHighlighter;
use ferris_diff::app::text_ops::extract_filename;
use ferris_diff::ui::file_dialogs::{native_open_dialog, native_save_dialog};
use ferris_diff::ui::main_window::{build_main_window, MainWidgets};
use ferris_diff::ui::{menu, status_bar, theme, FltkScheduler};

/// Everything the dispatch loop needs, in one place.
struct FerrisDiff {
    widgets: MainWidgets,
    state: AppState,
    sync: SyncController,
    detect: DetectController,
    format: FormatController,
    classifier: ContentClassifier,
    formatter: PrettyPrinter,
    highlighter: SyntaxHighlighter,
    scheduler: FltkScheduler,
    settings: AppSettings,
    dark_mode: bool,
    last_open_directory: Option<String>,
}

impl FerrisDiff {
    fn handle(&mut self, msg: Message) -> bool {
        match msg {
            Message::PaneEdited(side) => {
                if self.sync.on_pane_edit(side, &self.widgets.panes, &mut self.state) {
                    self.detect.schedule(&self.scheduler);
                    self.refresh_status();
                }
            }
            Message::CursorMoved { line, col } => {
                self.state.cursor.line = line;
                self.state.cursor.col = col;
                self.refresh_status();
            }
            Message::ReleaseSyncGuard(side) => {
                self.sync.release_guard(side);
            }
            Message::RunDetection(generation) => {
                if self.detect.run(generation, &mut self.state, &self.classifier) {
                    self.refresh_status();
                }
                // Re-highlight once per settled quiet period even when the
                // tag did not change, so freshly typed text gets styled.
                if self.detect.is_current(generation) {
                    self.apply_highlight();
                }
            }
            Message::FormatBoth => {
                if self.format.request(&mut self.state, &self.scheduler) {
                    self.refresh_status();
                }
            }
            Message::RunFormat => {
                let applied = self.format.run(
                    &mut self.state,
                    &mut self.sync,
                    &mut self.widgets.panes,
                    &self.scheduler,
                    &self.formatter,
                );
                if applied {
                    self.apply_highlight();
                }
                self.refresh_status();
            }
            Message::ClearAll => self.clear_all(),
            Message::FileOpenInto(side) => self.open_into(side),
            Message::FileSaveModified => self.save_modified(),
            Message::FileQuit => return true,
            Message::ToggleDarkMode => self.toggle_dark_mode(),
            Message::ToggleLineNumbers => {
                self.settings.line_numbers_enabled = !self.settings.line_numbers_enabled;
                self.widgets.panes.set_line_numbers(self.settings.line_numbers_enabled);
                self.save_settings();
            }
            Message::ToggleWordWrap => {
                self.settings.word_wrap_enabled = !self.settings.word_wrap_enabled;
                self.widgets.panes.set_word_wrap(self.settings.word_wrap_enabled);
                self.save_settings();
            }
            Message::ToggleHighlighting => {
                self.settings.highlighting_enabled = !self.settings.highlighting_enabled;
                self.apply_highlight();
                self.save_settings();
            }
            Message::SetFont(font) => {
                self.widgets.panes.set_font(font);
                self.highlighter.set_font(font, self.settings.font_size as i32);
                self.settings.font = font_choice(font);
                self.apply_highlight();
                self.save_settings();
            }
            Message::SetFontSize(size) => {
                self.widgets.panes.set_font_size(size);
                self.settings.font_size = size as u32;
                self.highlighter.set_font(font_of(self.settings.font), size);
                self.apply_highlight();
                self.save_settings();
            }
            Message::ShowAbout => {
                dialog::message_default(&format!(
                    "FerrisDiff {}\n\nA fast side-by-side code diff editor.\nPaste code into either pane; the language is detected automatically.",
                    env!("CARGO_PKG_VERSION")
                ));
            }
        }
        false
    }

    fn clear_all(&mut self) {
        self.state.document.clear();
        self.state.set_language(Language::Plaintext);
        self.state.set_status("Cleared");
        self.sync.apply_external(
            &self.state.document,
            &mut self.widgets.panes,
            &self.scheduler,
        );
        self.apply_highlight();
        self.refresh_status();
    }

    fn open_into(&mut self, side: Side) {
        let Some(path) = native_open_dialog(self.last_open_directory.as_deref()) else {
            return;
        };
        if let Some(parent) = std::path::Path::new(&path).parent() {
            self.last_open_directory = Some(parent.to_string_lossy().to_string());
        }
        match fs::read_to_string(&path) {
            Ok(content) => {
                self.state.document.set_side(side, content);
                self.sync.apply_external(
                    &self.state.document,
                    &mut self.widgets.panes,
                    &self.scheduler,
                );
                self.detect.schedule(&self.scheduler);
                self.state
                    .set_status(format!("Opened {}", extract_filename(&path)));
                self.apply_highlight();
                self.refresh_status();
            }
            Err(e) => dialog::alert_default(&format!("Error opening file: {}", e)),
        }
    }

    fn save_modified(&mut self) {
        let Some(path) = native_save_dialog(self.last_open_directory.as_deref()) else {
            return;
        };
        match fs::write(&path, &self.state.document.modified) {
            Ok(_) => {
                self.state
                    .set_status(format!("Saved {}", extract_filename(&path)));
                self.refresh_status();
            }
            Err(e) => dialog::alert_default(&format!("Error saving file: {}", e)),
        }
    }

    fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        self.settings.theme_mode = if self.dark_mode { ThemeMode::Dark } else { ThemeMode::Light };
        theme::apply_theme(&mut self.widgets, self.dark_mode);
        self.highlighter.set_dark_mode(self.dark_mode);
        self.apply_highlight();
        self.save_settings();
    }

    fn apply_highlight(&mut self) {
        self.widgets.panes.apply_highlight(
            &mut self.highlighter,
            self.state.language,
            self.settings.highlighting_enabled,
        );
    }

    fn refresh_status(&mut self) {
        let stats = diff_stats::line_stats(
            &self.state.document.original,
            &self.state.document.modified,
        );
        status_bar::refresh(&mut self.widgets.status_frame, &self.state, stats);
    }

    fn save_settings(&self) {
        if let Err(e) = self.settings.save() {
            log::warn!("Failed to save settings: {}", e);
        }
    }
}

fn font_of(choice: FontChoice) -> Font {
    match choice {
        FontChoice::ScreenBold => Font::ScreenBold,
        FontChoice::Courier => Font::Courier,
        FontChoice::HelveticaMono => Font::Screen,
    }
}

fn font_choice(font: Font) -> FontChoice {
    match font {
        Font::ScreenBold => FontChoice::ScreenBold,
        Font::Screen => FontChoice::HelveticaMono,
        _ => FontChoice::Courier,
    }
}

fn main() {
    env_logger::init();

    let fltk_app = app::App::default();
    let settings = AppSettings::load();
    let dark_mode = settings.theme_mode == ThemeMode::Dark;

    let (sender, receiver) = app::channel::<Message>();
    let mut widgets = build_main_window(&sender);
    menu::build_menu(&mut widgets.menu, &sender, &settings, dark_mode);

    let font = font_of(settings.font);
    let font_size = settings.font_size as i32;
    widgets.panes.set_font(font);
    widgets.panes.set_font_size(font_size);
    widgets.panes.set_line_numbers(settings.line_numbers_enabled);
    widgets.panes.set_word_wrap(settings.word_wrap_enabled);
    theme::apply_theme(&mut widgets, dark_mode);

    widgets.wind.end();
    widgets.wind.show();

    let mut ferris = FerrisDiff {
        widgets,
        state: AppState::new(),
        sync: SyncController::new(),
        detect: DetectController::new(),
        format: FormatController::new(),
        classifier: ContentClassifier::new(),
        formatter: PrettyPrinter::new(),
        highlighter: SyntaxHighlighter::new(dark_mode, font, font_size),
        scheduler: FltkScheduler::new(sender),
        settings,
        dark_mode,
        last_open_directory: None,
    };
    ferris.refresh_status();

    while fltk_app.wait() {
        if let Some(msg) = receiver.recv() {
            if ferris.handle(msg) {
                break;
            }
        }
    }
}
