//! Cancellable one-shot timers owned by the widget
//!
//! The widget never sleeps itself. It arms a slot and hands the resulting
//! ticket to the UI layer, which spawns the delayed task and binds its
//! [`AbortHandle`] back to the slot. Re-arming or cancelling aborts the
//! previous task; a task that fires with a stale ticket is ignored.

use futures_util::future::AbortHandle;

/// Which deferred job a ticket belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Tooltip visibility pass after a render
    TooltipPass,
    /// Page scroll to an event's linked essay section
    SectionScroll,
}

/// Identifies one arming of a timer slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerTicket {
    kind: TimerKind,
    generation: u64,
}

impl TimerTicket {
    pub fn kind(&self) -> TimerKind {
        self.kind
    }
}

/// A single-slot deferred timer
#[derive(Debug)]
pub struct DeferredTimer {
    kind: TimerKind,
    generation: u64,
    armed: Option<TimerTicket>,
    task: Option<AbortHandle>,
}

impl DeferredTimer {
    pub fn new(kind: TimerKind) -> Self {
        Self {
            kind,
            generation: 0,
            armed: None,
            task: None,
        }
    }

    /// Cancel whatever is pending and arm a fresh ticket
    pub fn arm(&mut self) -> TimerTicket {
        self.cancel();
        self.generation += 1;
        let ticket = TimerTicket {
            kind: self.kind,
            generation: self.generation,
        };
        self.armed = Some(ticket);
        ticket
    }

    /// Attach the spawned task for `ticket`.
    ///
    /// A task for a ticket that is no longer armed is aborted right away.
    pub fn bind(&mut self, ticket: TimerTicket, task: AbortHandle) {
        if self.is_pending(ticket) {
            if let Some(previous) = self.task.replace(task) {
                previous.abort();
            }
        } else {
            task.abort();
        }
    }

    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.armed = None;
    }

    pub fn is_pending(&self, ticket: TimerTicket) -> bool {
        self.armed == Some(ticket)
    }

    /// Consume the armed ticket. Returns false for stale tickets.
    pub fn fire(&mut self, ticket: TimerTicket) -> bool {
        if !self.is_pending(ticket) {
            return false;
        }
        self.armed = None;
        self.task = None;
        true
    }
}
