//! Suspended operations advanced by elapsed time
//!
//! Waiting (transition delays, clip playback) is a list of records carrying the
//! remaining duration and the generation of the session that created them. The
//! session bumps its generation on every level start or reset; records from an
//! older generation are handed back as stale so the caller can drop their effect.

/// Session generation stamp
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Generation(u64);

impl Generation {
    /// The generation that follows this one
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// A pending operation
#[derive(Debug, Clone, PartialEq)]
struct Suspended<T> {
    generation: Generation,
    remaining: f32,
    task: T,
}

/// A task whose wait has elapsed
#[derive(Debug, Clone, PartialEq)]
pub struct Due<T> {
    pub generation: Generation,
    pub task: T,
}

/// Time-driven queue of suspended tasks
#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    pending: Vec<Suspended<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self { pending: Vec::new() }
    }
}

impl<T> Scheduler<T> {
    /// Suspend `task` for `delay` seconds on behalf of `generation`
    pub fn schedule(&mut self, generation: Generation, delay: f32, task: T) {
        self.pending.push(Suspended { generation, remaining: delay.max(0.0), task });
    }

    /// Advance every record by `dt` seconds and return those that came due, in
    /// scheduling order
    pub fn advance(&mut self, dt: f32) -> Vec<Due<T>> {
        let dt = dt.max(0.0);
        let mut due = Vec::new();
        let mut still_pending = Vec::with_capacity(self.pending.len());

        for mut record in self.pending.drain(..) {
            record.remaining -= dt;
            if record.remaining <= 0.0 {
                due.push(Due { generation: record.generation, task: record.task });
            } else {
                still_pending.push(record);
            }
        }

        self.pending = still_pending;
        due
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
