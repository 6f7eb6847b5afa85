//! Cyclic auto-rotation with interaction-aware pause and debounced resume.

use log::debug;

use crate::notify::RotationSink;

/// Timing knobs for automatic advancement.
///
/// Defaults match the showcase page this was generalized from: one advance
/// every three seconds, resuming two seconds after interaction stops.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RotationConfig {
    pub interval_ms: u32,
    pub resume_delay_ms: u32,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            interval_ms: 3_000,
            resume_delay_ms: 2_000,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RotationConfigError {
    ZeroInterval,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SelectError {
    OutOfRange,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum DeadlineKind {
    Advance,
    Resume,
}

/// A host-visible timer: one scheduled callback, tagged with the generation
/// that was current when it was armed. A deadline whose generation no longer
/// matches the controller's has been cancelled and must fire as a no-op.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Deadline {
    kind: DeadlineKind,
    due_ms: u64,
    generation: u32,
}

/// Owns the selected index of a fixed cyclic item collection.
///
/// At most one deadline (advance or resume) is pending at a time: exactly one
/// while running and unsuspended or while a resume cooldown is counting down,
/// zero while suspended, inert, or disposed.
pub struct RotationController<S: RotationSink> {
    sink: S,
    item_count: usize,
    config: RotationConfig,
    selected: usize,
    running: bool,
    suspended: bool,
    pending: Option<Deadline>,
    generation: u32,
    disposed: bool,
}

impl<S: RotationSink> RotationController<S> {
    /// An `item_count` of zero yields an inert controller: every operation is
    /// a no-op and `select` reports `OutOfRange` for any index.
    pub fn new(
        item_count: usize,
        config: RotationConfig,
        sink: S,
    ) -> Result<Self, RotationConfigError> {
        if config.interval_ms == 0 {
            return Err(RotationConfigError::ZeroInterval);
        }

        Ok(Self {
            sink,
            item_count,
            config,
            selected: 0,
            running: false,
            suspended: false,
            pending: None,
            generation: 0,
            disposed: false,
        })
    }

    pub fn selected_index(&self) -> Option<usize> {
        if self.item_count == 0 {
            return None;
        }
        Some(self.selected)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Begins automatic advancement from the current index. Idempotent;
    /// calling while already running changes nothing.
    pub fn start(&mut self, now_ms: u64) {
        if self.disposed || self.item_count == 0 || self.running {
            return;
        }

        self.running = true;
        debug!(
            "rotation: start selected={}/{} interval_ms={}",
            self.selected, self.item_count, self.config.interval_ms
        );
        self.sink.selection_changed(self.selected);
        self.schedule(
            DeadlineKind::Advance,
            now_ms.saturating_add(self.config.interval_ms as u64),
        );
    }

    /// Selects `index` and reports the change. Re-selecting the current index
    /// is a silent no-op. Leaves the suspension state untouched.
    pub fn select(&mut self, index: usize) -> Result<(), SelectError> {
        if index >= self.item_count {
            return Err(SelectError::OutOfRange);
        }
        if self.disposed || index == self.selected {
            return Ok(());
        }

        self.selected = index;
        self.sink.selection_changed(index);
        Ok(())
    }

    /// Suspends advancement for the duration of a user interaction. Repeated
    /// calls coalesce; a pending resume cooldown is cancelled, so the last
    /// interaction always wins over an earlier scheduled resume.
    pub fn notify_interaction_start(&mut self) {
        if self.disposed || self.item_count == 0 || !self.running {
            return;
        }

        if !self.suspended {
            debug!("rotation: suspend selected={}", self.selected);
            self.suspended = true;
        }
        self.cancel_pending();
    }

    /// Arms the resume cooldown: after `resume_delay_ms` without a further
    /// `notify_interaction_start`, advancement restarts at the configured
    /// interval. Each call restarts the window. Ignored while not suspended.
    pub fn notify_interaction_end(&mut self, now_ms: u64) {
        if self.disposed || !self.running || !self.suspended {
            return;
        }

        self.cancel_pending();
        let due_ms = now_ms.saturating_add(self.config.resume_delay_ms as u64);
        debug!("rotation: resume armed due_ms={due_ms}");
        self.schedule(DeadlineKind::Resume, due_ms);
    }

    /// Fires the pending deadline if it is due. Late ticks catch up one
    /// advance per elapsed interval so the observable cadence stays exact.
    pub fn tick(&mut self, now_ms: u64) {
        if self.disposed {
            return;
        }
        let Some(deadline) = self.pending else {
            return;
        };
        if deadline.generation != self.generation {
            // Stale callback from before a cancellation.
            self.pending = None;
            return;
        }
        if now_ms < deadline.due_ms {
            return;
        }

        match deadline.kind {
            DeadlineKind::Advance => {
                if self.suspended {
                    return;
                }

                let interval = self.config.interval_ms as u64;
                let mut due_ms = deadline.due_ms;
                while due_ms <= now_ms {
                    self.advance();
                    due_ms = due_ms.saturating_add(interval);
                }
                self.pending = Some(Deadline {
                    kind: DeadlineKind::Advance,
                    due_ms,
                    generation: self.generation,
                });
            }
            DeadlineKind::Resume => {
                debug!("rotation: resume selected={}", self.selected);
                self.suspended = false;
                self.schedule(
                    DeadlineKind::Advance,
                    deadline.due_ms.saturating_add(self.config.interval_ms as u64),
                );
            }
        }
    }

    /// Absolute time of the next scheduled callback, for hosts that sleep
    /// between ticks rather than polling.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.pending
            .filter(|deadline| deadline.generation == self.generation)
            .map(|deadline| deadline.due_ms)
    }

    /// Cancels everything pending; the controller is permanently inert
    /// afterwards. A deadline already handed to the host ticks as a no-op.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }

        debug!("rotation: dispose selected={}", self.selected);
        self.cancel_pending();
        self.running = false;
        self.disposed = true;
    }

    fn advance(&mut self) {
        self.selected = (self.selected + 1) % self.item_count;
        debug!(
            "rotation: advance selected={}/{}",
            self.selected, self.item_count
        );
        self.sink.selection_changed(self.selected);
    }

    fn schedule(&mut self, kind: DeadlineKind, due_ms: u64) {
        self.pending = Some(Deadline {
            kind,
            due_ms,
            generation: self.generation,
        });
    }

    fn cancel_pending(&mut self) {
        if self.pending.take().is_some() {
            self.generation = self.generation.wrapping_add(1);
        }
    }
}

#[cfg(test)]
mod tests;
