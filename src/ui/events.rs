use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::event::{self, Event};

use crate::input::IntentMailbox;
use crate::shutdown::ShutdownHandle;
use crate::ui::keymap::{map_key, KeyAction};

/// Poll interval of the input thread; bounds how late it notices shutdown.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Events the frame loop handles itself. Controller input bypasses this
/// channel and goes straight into the [`IntentMailbox`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    Resize(u16, u16),
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    input_thread: Option<JoinHandle<()>>,
}

impl EventHandler {
    /// Spawns the input thread. It reduces key presses into `mailbox` as they
    /// arrive, independent of the frame rate.
    pub fn new(mailbox: IntentMailbox, shutdown: ShutdownHandle) -> Self {
        let (tx, rx) = mpsc::channel();

        let spawned = thread::Builder::new()
            .name("input".to_string())
            .spawn(move || {
                while !shutdown.is_shutting_down() {
                    match event::poll(POLL_INTERVAL) {
                        Ok(false) => continue,
                        Ok(true) => {}
                        Err(err) => {
                            tracing::error!(error = %err, "input poll failed");
                            break;
                        }
                    }

                    let forwarded = match event::read() {
                        Ok(Event::Key(key)) => match map_key(key) {
                            Some(KeyAction::Controller(controller)) => {
                                tracing::trace!(?controller, "controller event");
                                mailbox.dispatch(controller);
                                None
                            }
                            Some(KeyAction::Quit) => Some(AppEvent::Quit),
                            None => None,
                        },
                        Ok(Event::Resize(cols, rows)) => Some(AppEvent::Resize(cols, rows)),
                        Ok(_) => None,
                        Err(err) => {
                            tracing::error!(error = %err, "input read failed");
                            break;
                        }
                    };

                    if let Some(app_event) = forwarded {
                        if tx.send(app_event).is_err() {
                            break;
                        }
                    }
                }
            });

        let input_thread = match spawned {
            Ok(handle) => Some(handle),
            Err(err) => {
                tracing::error!(error = %err, "failed to spawn input thread");
                None
            }
        };

        Self { rx, input_thread }
    }

    /// Waits for the input thread to notice shutdown, so it no longer reads
    /// the terminal once it is restored. Signal shutdown first.
    pub fn join(mut self) {
        if let Some(handle) = self.input_thread.take() {
            if handle.join().is_err() {
                tracing::error!("input thread panicked");
            }
        }
    }

    /// Next queued event without blocking the frame loop.
    pub fn try_next(&self) -> Option<AppEvent> {
        match self.rx.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(AppEvent::Quit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Color;

    #[test]
    fn join_returns_once_shutdown_is_signalled() {
        let shutdown = ShutdownHandle::new();
        shutdown.signal();
        let events = EventHandler::new(IntentMailbox::new(Color::MIN), shutdown);
        events.join();
    }

    #[test]
    fn closed_channel_reads_as_quit() {
        let shutdown = ShutdownHandle::new();
        shutdown.signal();
        let events = EventHandler::new(IntentMailbox::new(Color::MIN), shutdown);
        while events
            .input_thread
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
        {
            thread::sleep(Duration::from_millis(1));
        }
        assert_eq!(events.try_next(), Some(AppEvent::Quit));
        events.join();
    }
}
