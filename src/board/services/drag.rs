//! Drag controller: turns pointer gestures into board store moves.
//!
//! A gesture is drag-start, any number of drag-over steps, then drag-end or
//! cancel. Each drag-over mutates the store live, so drag-end is simply the
//! last drag-over followed by closing the gesture. Collision detection is the
//! renderer's job; the controller only sees resolved target ids.

use mockable::Clock;
use tracing::debug;

use crate::board::{
    config::DragPersistence,
    domain::{BoardState, MoveOutcome, Task, TaskId},
    ports::KeyValueStore,
    services::store::BoardStore,
};

/// A pointer gesture event forwarded by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEvent {
    /// The pointer picked up a card.
    Start {
        /// Id of the dragged task.
        active: String,
    },
    /// The pointer moved over a droppable, or off every droppable.
    Over {
        /// Id of the dragged task.
        active: String,
        /// Id of the task or column under the pointer.
        over: Option<String>,
    },
    /// The pointer released the card.
    End {
        /// Id of the dragged task.
        active: String,
        /// Id of the task or column under the pointer.
        over: Option<String>,
    },
    /// The gesture was abandoned (for example, Escape pressed).
    Cancel,
}

#[derive(Debug)]
struct DragSession {
    active: TaskId,
    snapshot: BoardState,
}

/// Tracks the gesture in progress and applies its steps to a store.
#[derive(Debug, Default)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    /// Creates an idle controller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether a gesture is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Returns the id of the task being dragged.
    #[must_use]
    pub fn active_id(&self) -> Option<&TaskId> {
        self.session.as_ref().map(|session| &session.active)
    }

    /// Returns the task being dragged, for the drag overlay.
    #[must_use]
    pub fn active_task<'a, S, C>(&self, store: &'a BoardStore<S, C>) -> Option<&'a Task>
    where
        S: KeyValueStore,
        C: Clock,
    {
        self.active_id().and_then(|id| store.task(id.as_str()))
    }

    /// Dispatches an event to the matching handler.
    pub fn handle<S, C>(&mut self, store: &mut BoardStore<S, C>, event: &DragEvent) -> MoveOutcome
    where
        S: KeyValueStore,
        C: Clock,
    {
        match event {
            DragEvent::Start { active } => {
                self.drag_start(store, active);
                MoveOutcome::Unchanged
            }
            DragEvent::Over { active, over } => self.drag_over(store, active, over.as_deref()),
            DragEvent::End { active, over } => self.drag_end(store, active, over.as_deref()),
            DragEvent::Cancel => {
                self.cancel(store);
                MoveOutcome::Unchanged
            }
        }
    }

    /// Begins a gesture for `active_id`. Returns `false`, starting nothing,
    /// when the task does not exist.
    pub fn drag_start<S, C>(&mut self, store: &mut BoardStore<S, C>, active_id: &str) -> bool
    where
        S: KeyValueStore,
        C: Clock,
    {
        let Some(task) = store.task(active_id) else {
            debug!(task_id = active_id, "drag started on unknown task");
            return false;
        };
        let active = task.id().clone();
        if self.session.is_some() {
            self.finish(store);
        }

        debug!(task_id = %active, "drag started");
        self.session = Some(DragSession {
            active,
            snapshot: store.snapshot(),
        });
        store.end_gesture();
        if store.config().drag_persistence == DragPersistence::OnDrop {
            store.defer_persistence();
        }
        true
    }

    /// Applies one drag-over step.
    pub fn drag_over<S, C>(
        &mut self,
        store: &mut BoardStore<S, C>,
        active_id: &str,
        over: Option<&str>,
    ) -> MoveOutcome
    where
        S: KeyValueStore,
        C: Clock,
    {
        if self
            .active_id()
            .is_some_and(|id| id.as_str() != active_id)
        {
            debug!(task_id = active_id, "drag-over for a task other than the one picked up");
        }
        store.move_task(active_id, over)
    }

    /// Applies the final resolution and closes the gesture. Releasing over
    /// nothing keeps whatever the last drag-over produced.
    pub fn drag_end<S, C>(
        &mut self,
        store: &mut BoardStore<S, C>,
        active_id: &str,
        over: Option<&str>,
    ) -> MoveOutcome
    where
        S: KeyValueStore,
        C: Clock,
    {
        let outcome = store.move_task(active_id, over);
        debug!(task_id = active_id, ?outcome, "drag ended");
        self.finish(store);
        outcome
    }

    /// Abandons the gesture, restoring the board as it was at drag-start.
    /// Returns `false` when no gesture was in progress.
    pub fn cancel<S, C>(&mut self, store: &mut BoardStore<S, C>) -> bool
    where
        S: KeyValueStore,
        C: Clock,
    {
        let Some(session) = self.session.take() else {
            return false;
        };
        debug!(task_id = %session.active, "drag cancelled");
        store.restore(session.snapshot);
        store.end_gesture();
        store.resume_persistence();
        true
    }

    fn finish<S, C>(&mut self, store: &mut BoardStore<S, C>)
    where
        S: KeyValueStore,
        C: Clock,
    {
        self.session = None;
        store.end_gesture();
        store.resume_persistence();
    }
}
