use alloc::collections::VecDeque;

use super::{InputEvent, InputProvider};

/// FIFO the host pushes gestures into between ticks.
#[derive(Default, Debug, Clone)]
pub struct QueuedInput {
    pending: VecDeque<InputEvent>,
}

impl QueuedInput {
    pub const fn new() -> Self {
        Self {
            pending: VecDeque::new(),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.pending.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl InputProvider for QueuedInput {
    type Error = core::convert::Infallible;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        Ok(self.pending.pop_front())
    }
}
