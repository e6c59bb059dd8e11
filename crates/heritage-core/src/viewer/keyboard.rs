use std::cell::Cell;
use std::rc::Rc;

use tracing::debug;

/// Tracks which parts of the viewer currently listen to the keyboard.
///
/// Listening is only possible through a [`KeyboardLease`], which detaches
/// itself when dropped. Cloning the hub shares the same listener count.
#[derive(Clone, Debug, Default)]
pub struct KeyboardHub {
    listeners: Rc<Cell<usize>>,
}

impl KeyboardHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a listener. It stays attached until the lease is dropped.
    pub fn acquire(&self) -> KeyboardLease {
        self.listeners.set(self.listeners.get() + 1);
        debug!(listeners = self.listeners.get(), "keyboard listener attached");
        KeyboardLease {
            listeners: Rc::clone(&self.listeners),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.listeners.get() > 0
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.get()
    }
}

/// An attached keyboard listener. Released on drop, on every exit path.
#[derive(Debug)]
pub struct KeyboardLease {
    listeners: Rc<Cell<usize>>,
}

impl Drop for KeyboardLease {
    fn drop(&mut self) {
        self.listeners.set(self.listeners.get().saturating_sub(1));
        debug!(listeners = self.listeners.get(), "keyboard listener released");
    }
}
