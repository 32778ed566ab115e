use crate::input::bindings::Key;

/// Commands issued by the UI layer (buttons).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Restart,
}

/// Input event types the simulation understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A bound key was pressed.
    KeyDown(Key),
    /// A bound key was released.
    KeyUp(Key),
    /// A UI button was clicked.
    Command(Command),
}

/// A queue of input events.
/// JS writes events into the queue; Rust reads them each tick and drains them each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Push the key behind a DOM key code. Unbound codes are dropped.
    pub fn push_key(&mut self, code: &str, down: bool) -> bool {
        match Key::from_code(code) {
            Some(key) if down => {
                self.push(InputEvent::KeyDown(key));
                true
            }
            Some(key) => {
                self.push(InputEvent::KeyUp(key));
                true
            }
            None => false,
        }
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
