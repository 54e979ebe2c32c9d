//! Session-expiry notification channel.
//!
//! SYSTEM CONTEXT
//! ==============
//! The request layer detects a rejected token (any 401) but owns no UI
//! state and must not reach into the reactive graph. It reports expiry
//! through this single-listener channel instead; the app shell registers
//! a listener at mount that resets the session signal and sends the
//! browser back to the login screen.
//!
//! Single-threaded by construction (the client runs on the browser main
//! thread), so a thread-local slot is all the synchronization needed.

use std::cell::RefCell;

thread_local! {
    static LISTENER: RefCell<Option<Box<dyn Fn()>>> = const { RefCell::new(None) };
}

/// Install the expiry listener, replacing any previous one.
pub fn on_session_expired<F: Fn() + 'static>(listener: F) {
    LISTENER.with(|slot| {
        *slot.borrow_mut() = Some(Box::new(listener));
    });
}

/// Drop the installed listener. Further expiries become no-ops.
pub fn clear_session_expired_listener() {
    LISTENER.with(|slot| {
        slot.borrow_mut().take();
    });
}

/// Invoke the installed listener, if any.
///
/// The listener is moved out of the slot for the duration of the call,
/// so a listener that re-registers from inside the callback never hits
/// a double borrow; its replacement wins over the restore.
pub fn notify_session_expired() {
    let listener = LISTENER.with(|slot| slot.borrow_mut().take());
    let Some(listener) = listener else {
        return;
    };
    listener();
    LISTENER.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_none() {
            *slot = Some(listener);
        }
    });
}

#[cfg(test)]
#[path = "expiry_test.rs"]
mod expiry_test;
