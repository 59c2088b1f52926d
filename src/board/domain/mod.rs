//! Domain model for the task board.
//!
//! Tasks and columns, the single global task ordering, and the text codec.
//! Nothing here touches storage or the clock directly; services inject both.

mod codec;
mod column;
mod error;
mod ids;
mod state;
mod tags;
mod task;
pub mod timestamp;

pub use codec::{
    deserialize_board, deserialize_columns, deserialize_tasks, serialize_board,
    serialize_columns, serialize_tasks,
};
pub use column::{Column, default_columns};
pub use error::{BoardCodecError, ParseTaskPriorityError};
pub use ids::{ColumnId, TaskId};
pub use state::{
    BoardState, ColumnDropPolicy, ColumnRemoval, DropTarget, Lane, MoveOutcome, RepairReport,
};
pub use tags::TaskTags;
pub use task::{PersistedTaskData, Task, TaskDraft, TaskPatch, TaskPriority};

#[cfg(test)]
pub(crate) use state::array_move;
