//! Domain model for task tracking.
//!
//! The task domain models validated task data, assignment, and status
//! changes, keeping all infrastructure concerns outside of the domain
//! boundary.

mod error;
mod ids;
mod status;
mod task;
mod title;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use status::TaskStatus;
pub use task::{NewTaskData, PersistedTaskData, Task};
pub use title::TaskTitle;
