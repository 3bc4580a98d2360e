use super::messages::Message;

/// Seam over the FLTK channel + timeout machinery so controllers can defer
/// work without depending on a running event loop. The production
/// implementation (`ui::FltkScheduler`) wraps `app::Sender` and
/// `app::add_timeout3`; tests use `RecordingScheduler`.
pub trait Scheduler {
    fn send(&self, msg: Message);

    /// Deliver `msg` after `delay` seconds. A delay of 0.0 means "next
    /// event-loop turn", after already-queued messages.
    fn send_after(&self, delay: f64, msg: Message);
}

#[cfg(test)]
pub mod testing {
    use std::cell::RefCell;

    use super::*;

    /// Captures scheduled messages; tests drain and replay them to drive
    /// the event loop by hand.
    #[derive(Default)]
    pub struct RecordingScheduler {
        pub sent: RefCell<Vec<Message>>,
        pub timed: RefCell<Vec<(f64, Message)>>,
    }

    impl RecordingScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        /// Remove and return all deferred messages, oldest first.
        pub fn drain_timed(&self) -> Vec<(f64, Message)> {
            self.timed.borrow_mut().drain(..).collect()
        }
    }

    impl Scheduler for RecordingScheduler {
        fn send(&self, msg: Message) {
            self.sent.borrow_mut().push(msg);
        }

        fn send_after(&self, delay: f64, msg: Message) {
            self.timed.borrow_mut().push((delay, msg));
        }
    }
}
