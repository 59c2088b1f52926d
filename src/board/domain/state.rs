//! Board state: the global task list, the column list, and the ordering
//! primitives that keep the two consistent.
//!
//! Position in the single task list encodes both column membership order and
//! intra-column order. A column's visible slice is the task list filtered by
//! `column`, so every reorder is a move within that one list.

use super::{Column, ColumnId, Task, TaskId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Complete set of columns and tasks at a point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    #[serde(default)]
    tasks: Vec<Task>,
    #[serde(default)]
    columns: Vec<Column>,
}

/// Where a task dropped directly onto a column lands within that column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnDropPolicy {
    /// Only the column changes; the task keeps its place in the global list.
    #[default]
    KeepPosition,
    /// The task is placed after the last task already in the column.
    AppendToColumn,
}

/// What to do with the tasks of a column being deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnRemoval {
    /// Delete the column's tasks with it.
    DeleteTasks,
    /// Reassign the column's tasks to another existing column, keeping their
    /// global order.
    MoveTasksTo(ColumnId),
}

/// A resolved drop target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// The pointer is over another task's card.
    Task(TaskId),
    /// The pointer is over empty column space.
    Column(ColumnId),
}

/// Effect of a move request on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Nothing changed.
    Unchanged,
    /// The task changed position within its column.
    Reordered,
    /// The task changed column (and possibly position).
    MovedToColumn {
        /// Column the task left.
        from: ColumnId,
        /// Column the task joined.
        to: ColumnId,
    },
}

impl MoveOutcome {
    /// Returns whether the board changed.
    #[must_use]
    pub const fn is_changed(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// A column together with its tasks in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lane<'a> {
    /// The column.
    pub column: &'a Column,
    /// Tasks in the column, in global-list order.
    pub tasks: Vec<&'a Task>,
}

/// Summary of the fixes applied to a loaded board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepairReport {
    /// Tasks dropped because an earlier task had the same id.
    pub duplicates_dropped: usize,
    /// Tasks moved off a missing column.
    pub orphans_reassigned: usize,
    /// Tasks dropped because no column was left to hold them.
    pub orphans_dropped: usize,
}

impl RepairReport {
    /// Returns whether any fix was applied.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.duplicates_dropped == 0 && self.orphans_reassigned == 0 && self.orphans_dropped == 0
    }
}

enum Located {
    Task { index: usize, column: ColumnId },
    Column(ColumnId),
}

impl BoardState {
    /// Creates a board from its parts, as given.
    #[must_use]
    pub const fn new(tasks: Vec<Task>, columns: Vec<Column>) -> Self {
        Self { tasks, columns }
    }

    /// Creates an empty board.
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    /// Returns the global task list.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the columns, left to right.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Splits the board into its task list and column list.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Task>, Vec<Column>) {
        (self.tasks, self.columns)
    }

    /// Returns whether the board has neither tasks nor columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty() && self.columns.is_empty()
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id().as_str() == id)
    }

    /// Returns the global index of a task.
    #[must_use]
    pub fn task_index(&self, id: &str) -> Option<usize> {
        self.tasks.iter().position(|task| task.id().as_str() == id)
    }

    /// Looks up a column by id.
    #[must_use]
    pub fn column(&self, id: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.id().as_str() == id)
    }

    /// Returns whether a column with this id exists.
    #[must_use]
    pub fn has_column(&self, id: &str) -> bool {
        self.column(id).is_some()
    }

    /// Returns a column's tasks in display order.
    #[must_use]
    pub fn tasks_in_column(&self, id: &str) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| task.column().as_str() == id)
            .collect()
    }

    /// Returns every column with its tasks, in render order.
    #[must_use]
    pub fn lanes(&self) -> Vec<Lane<'_>> {
        self.columns
            .iter()
            .map(|column| Lane {
                column,
                tasks: self.tasks_in_column(column.id().as_str()),
            })
            .collect()
    }

    /// Resolves a gesture identifier to a task or column. Task ids win over
    /// column ids.
    #[must_use]
    pub fn resolve_target(&self, id: &str) -> Option<DropTarget> {
        if let Some(task) = self.task(id) {
            return Some(DropTarget::Task(task.id().clone()));
        }
        self.column(id)
            .map(|column| DropTarget::Column(column.id().clone()))
    }

    /// Returns whether ids are unique and every task references an existing
    /// column.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let mut seen = HashSet::new();
        self.tasks.iter().all(|task| {
            seen.insert(task.id().as_str()) && self.has_column(task.column().as_str())
        })
    }

    pub(crate) fn push_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub(crate) fn push_column(&mut self, column: Column) {
        self.columns.push(column);
    }

    pub(crate) fn task_mut(&mut self, id: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id().as_str() == id)
    }

    pub(crate) fn remove_task(&mut self, id: &str) -> Option<Task> {
        let index = self.task_index(id)?;
        Some(self.tasks.remove(index))
    }

    /// Removes a column and deals with its tasks. Returns `None`, changing
    /// nothing, when the column is missing or the reassignment target is
    /// missing or the column itself.
    pub(crate) fn remove_column(&mut self, id: &str, removal: &ColumnRemoval) -> Option<Column> {
        let index = self
            .columns
            .iter()
            .position(|column| column.id().as_str() == id)?;

        match removal {
            ColumnRemoval::DeleteTasks => {
                self.tasks.retain(|task| task.column().as_str() != id);
            }
            ColumnRemoval::MoveTasksTo(target) => {
                if target.as_str() == id || !self.has_column(target.as_str()) {
                    return None;
                }
                for task in &mut self.tasks {
                    if task.column().as_str() == id {
                        task.set_column(target.clone());
                    }
                }
            }
        }

        Some(self.columns.remove(index))
    }

    /// Applies one drag resolution step.
    ///
    /// Dropping on a task moves the active task to that task's index and
    /// adopts its column. Dropping on a column only changes the column,
    /// unless `policy` asks to append. Unknown ids and self-targets are
    /// no-ops.
    pub(crate) fn apply_move(
        &mut self,
        active_id: &str,
        over: Option<&str>,
        policy: ColumnDropPolicy,
    ) -> MoveOutcome {
        let Some(over_id) = over.filter(|target| *target != active_id) else {
            return MoveOutcome::Unchanged;
        };
        let Some(active_index) = self.task_index(active_id) else {
            return MoveOutcome::Unchanged;
        };
        match self.locate(over_id) {
            Some(Located::Task { index, column }) => {
                self.move_onto_task(active_index, index, column)
            }
            Some(Located::Column(column)) => self.move_into_column(active_index, column, policy),
            None => MoveOutcome::Unchanged,
        }
    }

    /// Fixes invariant violations in loaded data: keeps the first task of
    /// each id and moves tasks off missing columns onto `fallback` (or the
    /// first column when `fallback` is missing too).
    pub(crate) fn repair(&mut self, fallback: &ColumnId) -> RepairReport {
        let mut report = RepairReport::default();

        let mut seen = HashSet::new();
        let before = self.tasks.len();
        self.tasks.retain(|task| seen.insert(task.id().clone()));
        report.duplicates_dropped = before - self.tasks.len();

        let home = self
            .column(fallback.as_str())
            .or_else(|| self.columns.first())
            .map(|column| column.id().clone());
        let known: HashSet<ColumnId> = self
            .columns
            .iter()
            .map(|column| column.id().clone())
            .collect();

        match home {
            Some(home) => {
                for task in &mut self.tasks {
                    if !known.contains(task.column()) {
                        task.set_column(home.clone());
                        report.orphans_reassigned += 1;
                    }
                }
            }
            None => {
                let before_drop = self.tasks.len();
                self.tasks.clear();
                report.orphans_dropped = before_drop;
            }
        }

        report
    }

    fn locate(&self, id: &str) -> Option<Located> {
        if let Some(index) = self.task_index(id) {
            let column = self.tasks.get(index)?.column().clone();
            return Some(Located::Task { index, column });
        }
        self.column(id)
            .map(|column| Located::Column(column.id().clone()))
    }

    fn move_onto_task(
        &mut self,
        active_index: usize,
        over_index: usize,
        column: ColumnId,
    ) -> MoveOutcome {
        let Some(active) = self.tasks.get_mut(active_index) else {
            return MoveOutcome::Unchanged;
        };
        let from = active.column().clone();
        let crossed = from != column;
        if crossed {
            active.set_column(column.clone());
        }
        array_move(&mut self.tasks, active_index, over_index);

        if crossed {
            MoveOutcome::MovedToColumn { from, to: column }
        } else {
            MoveOutcome::Reordered
        }
    }

    fn move_into_column(
        &mut self,
        active_index: usize,
        column: ColumnId,
        policy: ColumnDropPolicy,
    ) -> MoveOutcome {
        let Some(active) = self.tasks.get_mut(active_index) else {
            return MoveOutcome::Unchanged;
        };
        if active.column() == &column {
            return MoveOutcome::Unchanged;
        }
        let from = active.column().clone();
        active.set_column(column.clone());

        if policy == ColumnDropPolicy::AppendToColumn {
            let last_in_column = self.tasks.iter().enumerate().rposition(|(index, task)| {
                index != active_index && task.column() == &column
            });
            if let Some(last) = last_in_column {
                let to = if last > active_index { last } else { last + 1 };
                array_move(&mut self.tasks, active_index, to);
            }
        }

        MoveOutcome::MovedToColumn { from, to: column }
    }
}

/// Moves the element at `from` so that it ends up at index `to`, shifting the
/// elements in between by one. Out-of-range indices leave the slice as is.
pub(crate) fn array_move<T>(items: &mut [T], from: usize, to: usize) {
    if from < to {
        if let Some(span) = items.get_mut(from..=to) {
            span.rotate_left(1);
        }
    } else if to < from {
        if let Some(span) = items.get_mut(to..=from) {
            span.rotate_right(1);
        }
    }
}
