//! FLTK layer: window construction, menu wiring, the pane pair behind the
//! `DiffPanes` trait, theming, and the status bar.

pub mod file_dialogs;
pub mod main_window;
pub mod menu;
pub mod panes;
pub mod status_bar;
pub mod theme;

use fltk::app::Sender;

use crate::app::messages::Message;
use crate::app::scheduler::Scheduler;

/// Production scheduler: immediate sends go through the FLTK channel,
/// deferred sends through `add_timeout3` on the event loop.
#[derive(Clone, Copy)]
pub struct FltkScheduler {
    sender: Sender<Message>,
}

impl FltkScheduler {
    pub fn new(sender: Sender<Message>) -> Self {
        Self { sender }
    }
}

impl Scheduler for FltkScheduler {
    fn send(&self, msg: Message) {
        self.sender.send(msg);
    }

    fn send_after(&self, delay: f64, msg: Message) {
        let s = self.sender;
        fltk::app::add_timeout3(delay, move |_| {
            s.send(msg);
        });
    }
}
