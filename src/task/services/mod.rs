//! Application services for task tracking.

mod board;

pub use board::{
    CreateTaskRequest, TaskBoardError, TaskBoardResult, TaskBoardService, TaskDetail, TaskQuery,
    UpdateTaskRequest,
};
