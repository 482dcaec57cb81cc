use std::cell::Cell;

/// Identifies one invocation of a controller operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl Ticket {
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Monotonic ticket dispenser. Only the most recently issued ticket is
/// current; work holding an older one must not touch its container.
#[derive(Debug, Default)]
pub struct Sequence {
    latest: Cell<u64>,
}

impl Sequence {
    pub const fn new() -> Self {
        Self {
            latest: Cell::new(0),
        }
    }

    pub fn begin(&self) -> Ticket {
        let next = self.latest.get().wrapping_add(1);
        self.latest.set(next);
        Ticket(next)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.get() == ticket.0
    }
}
