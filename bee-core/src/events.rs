use bee_types::AttemptRecord;

/// Notifications emitted by a play session as it advances.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    WordPresented {
        word_id: String,
    },
    AttemptScored {
        record: AttemptRecord,
    },
    SelectionReset,
    TeamAdded {
        team_id: String,
        name: String,
    },
    HistoryCleared,
}

/// Handler trait for observing session events.
pub trait SessionEventHandler {
    fn handle_event(&mut self, event: SessionEvent);
}

/// Simple fan-out bus for session events.
pub struct SessionEventBus {
    handlers: Vec<Box<dyn SessionEventHandler>>,
}

impl SessionEventBus {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn add_handler(&mut self, handler: Box<dyn SessionEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn publish(&mut self, event: SessionEvent) {
        for handler in &mut self.handlers {
            handler.handle_event(event.clone());
        }
    }
}

impl Default for SessionEventBus {
    fn default() -> Self {
        Self::new()
    }
}
