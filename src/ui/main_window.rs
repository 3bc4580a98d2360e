use fltk::{
    app::Sender,
    enums::{Align, Color, FrameType},
    frame::Frame,
    group::Flex,
    menu::MenuBar,
    prelude::*,
    window::Window,
};

use crate::app::messages::Message;
use super::panes::EditorPanes;

pub const MENU_HEIGHT: i32 = 30;
pub const HEADER_HEIGHT: i32 = 24;
pub const STATUS_HEIGHT: i32 = 24;

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub header_original: Frame,
    pub header_modified: Frame,
    pub panes: EditorPanes,
    pub status_frame: Frame,
}

pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, 1024, 640, "Diff: Original \u{2194} Modified - FerrisDiff");
    wind.set_xclass("FerrisDiff");

    let mut flex = Flex::new(0, 0, 1024, 640, None);
    flex.set_type(fltk::group::FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, MENU_HEIGHT, "");
    flex.fixed(&menu, MENU_HEIGHT);

    // Pane headers
    let mut header_row = Flex::new(0, 0, 0, HEADER_HEIGHT, None);
    header_row.set_type(fltk::group::FlexType::Row);
    let mut header_original = Frame::new(0, 0, 0, 0, "Original");
    let mut header_modified = Frame::new(0, 0, 0, 0, "Modified");
    for header in [&mut header_original, &mut header_modified] {
        header.set_frame(FrameType::FlatBox);
        header.set_label_size(12);
        header.set_align(Align::Inside | Align::Left);
    }
    header_row.end();
    flex.fixed(&header_row, HEADER_HEIGHT);

    // The two editor panes, side by side
    let mut panes_row = Flex::new(0, 0, 0, 0, None);
    panes_row.set_type(fltk::group::FlexType::Row);
    let panes = EditorPanes::new(&mut panes_row, sender);

    // Status bar
    let mut status_frame = Frame::new(0, 0, 0, STATUS_HEIGHT, "");
    status_frame.set_frame(FrameType::FlatBox);
    status_frame.set_color(Color::from_rgb(14, 99, 156));
    status_frame.set_label_color(Color::White);
    status_frame.set_label_size(12);
    status_frame.set_align(Align::Inside | Align::Left);
    flex.fixed(&status_frame, STATUS_HEIGHT);

    flex.end();
    wind.resizable(&flex);

    MainWidgets {
        wind,
        flex,
        menu,
        header_original,
        header_modified,
        panes,
        status_frame,
    }
}
