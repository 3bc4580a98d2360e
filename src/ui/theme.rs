use fltk::{
    enums::Color,
    frame::Frame,
    menu::MenuBar,
    prelude::*,
    text::TextEditor,
    window::Window,
};

use crate::app::document::Side;
use super::main_window::MainWidgets;

pub fn apply_theme(widgets: &mut MainWidgets, is_dark: bool) {
    for side in Side::BOTH {
        apply_editor_theme(widgets.panes.editor_mut(side), is_dark);
    }
    apply_chrome_theme(
        &mut widgets.wind,
        &mut widgets.menu,
        [&mut widgets.header_original, &mut widgets.header_modified],
        is_dark,
    );
    widgets.wind.redraw();
}

fn apply_editor_theme(editor: &mut TextEditor, is_dark: bool) {
    if is_dark {
        editor.set_color(Color::from_rgb(30, 30, 30));
        editor.set_text_color(Color::from_rgb(220, 220, 220));
        editor.set_cursor_color(Color::from_rgb(255, 255, 255));
        editor.set_selection_color(Color::from_rgb(70, 70, 100));
        editor.set_linenumber_bgcolor(Color::from_rgb(40, 40, 40));
        editor.set_linenumber_fgcolor(Color::from_rgb(150, 150, 150));
    } else {
        editor.set_color(Color::White);
        editor.set_text_color(Color::Black);
        editor.set_cursor_color(Color::Black);
        editor.set_selection_color(Color::from_rgb(173, 216, 230));
        editor.set_linenumber_bgcolor(Color::from_rgb(240, 240, 240));
        editor.set_linenumber_fgcolor(Color::from_rgb(100, 100, 100));
    }
    editor.redraw();
}

fn apply_chrome_theme(
    window: &mut Window,
    menu: &mut MenuBar,
    headers: [&mut Frame; 2],
    is_dark: bool,
) {
    if is_dark {
        window.set_color(Color::from_rgb(25, 25, 25));
        window.set_label_color(Color::from_rgb(220, 220, 220));
        menu.set_color(Color::from_rgb(35, 35, 35));
        menu.set_text_color(Color::from_rgb(220, 220, 220));
        menu.set_selection_color(Color::from_rgb(60, 60, 60)); // Hover color
        for header in headers {
            header.set_color(Color::from_rgb(37, 37, 38));
            header.set_label_color(Color::from_rgb(180, 180, 180));
            header.redraw();
        }
    } else {
        window.set_color(Color::from_rgb(240, 240, 240));
        window.set_label_color(Color::Black);
        menu.set_color(Color::from_rgb(240, 240, 240));
        menu.set_text_color(Color::Black);
        menu.set_selection_color(Color::from_rgb(200, 200, 200)); // Hover color
        for header in headers {
            header.set_color(Color::from_rgb(225, 225, 225));
            header.set_label_color(Color::from_rgb(60, 60, 60));
            header.redraw();
        }
    }
    menu.redraw();
}
