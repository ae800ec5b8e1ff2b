use crossterm::event::Event;
use crossterm::event::KeyEvent;

use crate::app_event_sender::AppEventSender;

/// Events flowing from the input thread (and UI code itself) into the
/// main loop. All state transitions happen synchronously on the
/// receiving side; no shared mutable state crosses threads.
#[derive(Clone, Debug)]
pub(crate) enum AppEvent {
    KeyEvent(KeyEvent),
    Resize,
    ExitRequest,
}

/// Read crossterm events on a dedicated thread and forward them as
/// `AppEvent`s. The thread ends when reading fails or the receiver is
/// gone (process shutdown).
pub(crate) fn spawn_input_thread(tx: AppEventSender) {
    std::thread::spawn(move || {
        loop {
            match crossterm::event::read() {
                Ok(Event::Key(key)) => tx.send(AppEvent::KeyEvent(key)),
                Ok(Event::Resize(..)) => tx.send(AppEvent::Resize),
                Ok(_) => {}
                Err(err) => {
                    tracing::error!("input thread failed to read event: {err}");
                    tx.send(AppEvent::ExitRequest);
                    break;
                }
            }
        }
    });
}
