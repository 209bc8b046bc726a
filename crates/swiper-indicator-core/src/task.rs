//! Deferred UI task queue.
//!
//! Work that must not run inline (for example re-evaluating content
//! language after a configuration change) is posted here and executed later
//! on the UI thread, strictly in posting order. Each task receives mutable
//! access to the UI context it was queued for.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::logging::targets;

/// Identifies a deferred task in trace output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TaskId(u64);

/// Global counter for generating unique task IDs.
static NEXT_TASK_ID: AtomicU64 = AtomicU64::new(1);

fn next_task_id() -> TaskId {
    TaskId(NEXT_TASK_ID.fetch_add(1, Ordering::Relaxed))
}

/// A boxed task closure over the UI context `C`.
type BoxedTask<C> = Box<dyn FnOnce(&mut C) + Send + 'static>;

struct TaskData<C> {
    id: TaskId,
    name: &'static str,
    task: BoxedTask<C>,
}

/// FIFO queue of tasks posted for the UI thread.
pub struct TaskQueue<C> {
    tasks: VecDeque<TaskData<C>>,
}

impl<C> TaskQueue<C> {
    /// Create a new task queue.
    pub fn new() -> Self {
        Self {
            tasks: VecDeque::new(),
        }
    }

    /// Post a task to run on the next flush.
    pub fn post<F>(&mut self, name: &'static str, task: F)
    where
        F: FnOnce(&mut C) + Send + 'static,
    {
        let id = next_task_id();
        tracing::trace!(target: targets::TASK, ?id, name, "posted task");
        self.tasks.push_back(TaskData {
            id,
            name,
            task: Box::new(task),
        });
    }

    /// Get the number of pending tasks.
    pub fn pending_count(&self) -> usize {
        self.tasks.len()
    }

    /// Remove the oldest pending task and return a runnable closure for it.
    ///
    /// Owners that keep the queue inside `C` itself pop one task at a time,
    /// release their borrow of the queue, then run it against the context.
    pub fn pop(&mut self) -> Option<BoxedTask<C>> {
        self.tasks.pop_front().map(|data| {
            tracing::trace!(target: targets::TASK, id = ?data.id, name = data.name, "running task");
            data.task
        })
    }
}

impl<C> Default for TaskQueue<C> {
    fn default() -> Self {
        Self::new()
    }
}
