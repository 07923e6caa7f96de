pub mod task;

// Export the task types for use throughout the app
pub use task::{tasks_in_column, MoveDirection, Task, TaskStatus};
