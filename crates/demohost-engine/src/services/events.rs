use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::path::PathBuf;

/// Events the host forwards to the active application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// A watched content file changed on disk.
    ContentChanged(PathBuf),
    /// Application-defined event identifier.
    Custom(u32),
}

/// Event bus as seen by the manager.
pub trait EventService {
    /// Tells the bus whether an application is attached and able to receive events.
    fn set_app_attached(&self, attached: bool);

    /// Removes and returns every pending event.
    fn drain(&self) -> Vec<HostEvent>;
}

/// FIFO event bus that only queues while an application is attached.
#[derive(Debug, Default)]
pub struct EventQueue {
    attached: Cell<bool>,
    pending: RefCell<VecDeque<HostEvent>>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `event`; it is dropped when no application is attached.
    pub fn post(&self, event: HostEvent) {
        if !self.attached.get() {
            log::trace!("dropping {event:?}: no application attached");
            return;
        }
        self.pending.borrow_mut().push_back(event);
    }

    pub fn is_attached(&self) -> bool {
        self.attached.get()
    }

    pub fn len(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.borrow().is_empty()
    }
}

impl EventService for EventQueue {
    fn set_app_attached(&self, attached: bool) {
        self.attached.set(attached);
        if !attached {
            self.pending.borrow_mut().clear();
        }
    }

    fn drain(&self) -> Vec<HostEvent> {
        self.pending.borrow_mut().drain(..).collect()
    }
}
