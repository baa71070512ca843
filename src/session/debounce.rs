use std::time::Duration;

use crate::foundation::core::TimestampMs;

/// Cancellable delayed task with last-write-wins semantics.
///
/// At most one task is pending. Scheduling while a task is pending replaces it and restarts the
/// delay, so a burst of schedules fires once, `delay` after the last one. The caller drives time
/// by passing timestamps to [`Debouncer::schedule`] and [`Debouncer::poll`].
#[derive(Clone, Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

#[derive(Clone, Debug)]
struct Pending<T> {
    due: TimestampMs,
    task: T,
}

impl<T> Debouncer<T> {
    /// Debouncer that fires `delay` after the most recent schedule.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Configured idle window.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `task` to fire at `now + delay`. Returns the task it replaced, if any.
    pub fn schedule(&mut self, now: TimestampMs, task: T) -> Option<T> {
        let due = now.after(self.delay);
        let replaced = self.pending.replace(Pending { due, task }).map(|p| p.task);
        if replaced.is_some() {
            tracing::debug!(due = due.0, "debounced task replaced");
        }
        replaced
    }

    /// Drop the pending task without firing it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.task)
    }

    /// Take the pending task if it is due at `now`.
    pub fn poll(&mut self, now: TimestampMs) -> Option<T> {
        if self.pending.as_ref().is_some_and(|p| p.due <= now) {
            self.pending.take().map(|p| p.task)
        } else {
            None
        }
    }

    /// When the pending task fires, if one is pending.
    pub fn due_at(&self) -> Option<TimestampMs> {
        self.pending.as_ref().map(|p| p.due)
    }

    /// True while a task is waiting to fire.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/debounce.rs"]
mod tests;
