use serde::{Deserialize, Serialize};

/// Column order is fixed: a task only ever moves one step left or right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    /// All statuses in board order, left to right.
    pub fn all() -> Vec<TaskStatus> {
        vec![TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done]
    }

    /// Column title shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "A Fazer",
            TaskStatus::InProgress => "Em Progresso",
            TaskStatus::Done => "Concluídas",
        }
    }

    /// Status one column to the left, None at the left edge.
    pub fn prev(self) -> Option<TaskStatus> {
        match self {
            TaskStatus::Todo => None,
            TaskStatus::InProgress => Some(TaskStatus::Todo),
            TaskStatus::Done => Some(TaskStatus::InProgress),
        }
    }

    /// Status one column to the right, None at the right edge.
    pub fn next(self) -> Option<TaskStatus> {
        match self {
            TaskStatus::Todo => Some(TaskStatus::InProgress),
            TaskStatus::InProgress => Some(TaskStatus::Done),
            TaskStatus::Done => None,
        }
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self::Todo
    }
}

/// Direction of a one-step move between columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Left,
    Right,
}

impl MoveDirection {
    /// The status a task in `from` would land on, None when the move
    /// would fall off either end of the board.
    pub fn target(self, from: TaskStatus) -> Option<TaskStatus> {
        match self {
            MoveDirection::Left => from.prev(),
            MoveDirection::Right => from.next(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: i64,
    pub title: String,
    // The backend always serializes the description; tolerate its
    // absence anyway and treat missing as empty.
    #[serde(default)]
    pub description: String,
    pub status: TaskStatus,
}

/// Tasks belonging to one column, in the order the backend returned them.
pub fn tasks_in_column(tasks: &[Task], status: TaskStatus) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| task.status == status)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: i64, title: &str, status: TaskStatus) -> Task {
        Task {
            id,
            title: title.to_string(),
            description: String::new(),
            status,
        }
    }

    #[test]
    fn status_order_is_todo_in_progress_done() {
        assert_eq!(
            TaskStatus::all(),
            vec![TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done]
        );
    }

    #[test]
    fn left_move_is_only_blocked_on_the_first_column() {
        assert_eq!(MoveDirection::Left.target(TaskStatus::Todo), None);
        assert_eq!(
            MoveDirection::Left.target(TaskStatus::InProgress),
            Some(TaskStatus::Todo)
        );
        assert_eq!(
            MoveDirection::Left.target(TaskStatus::Done),
            Some(TaskStatus::InProgress)
        );
    }

    #[test]
    fn right_move_is_only_blocked_on_the_last_column() {
        assert_eq!(
            MoveDirection::Right.target(TaskStatus::Todo),
            Some(TaskStatus::InProgress)
        );
        assert_eq!(
            MoveDirection::Right.target(TaskStatus::InProgress),
            Some(TaskStatus::Done)
        );
        assert_eq!(MoveDirection::Right.target(TaskStatus::Done), None);
    }

    #[test]
    fn moving_right_then_left_restores_the_status() {
        for status in [TaskStatus::Todo, TaskStatus::InProgress] {
            let moved = MoveDirection::Right.target(status).unwrap();
            assert_eq!(MoveDirection::Left.target(moved), Some(status));
        }
    }

    #[test]
    fn statuses_use_snake_case_on_the_wire() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        assert_eq!(
            serde_json::from_str::<TaskStatus>("\"done\"").unwrap(),
            TaskStatus::Done
        );
    }

    #[test]
    fn new_tasks_default_to_the_first_column() {
        assert_eq!(TaskStatus::default(), TaskStatus::Todo);
    }

    #[test]
    fn a_task_without_description_deserializes_as_empty() {
        let parsed: Task =
            serde_json::from_str(r#"{"id":1,"title":"A","status":"todo"}"#).unwrap();
        assert_eq!(parsed.description, "");
        assert_eq!(parsed.status, TaskStatus::Todo);
    }

    #[test]
    fn single_todo_task_lands_in_the_first_column_only() {
        let tasks = vec![task(1, "A", TaskStatus::Todo)];
        assert_eq!(tasks_in_column(&tasks, TaskStatus::Todo).len(), 1);
        assert!(tasks_in_column(&tasks, TaskStatus::InProgress).is_empty());
        assert!(tasks_in_column(&tasks, TaskStatus::Done).is_empty());
    }

    #[test]
    fn columns_keep_the_order_the_backend_returned() {
        let tasks = vec![
            task(3, "C", TaskStatus::Done),
            task(1, "A", TaskStatus::Todo),
            task(2, "B", TaskStatus::Todo),
        ];
        let todo = tasks_in_column(&tasks, TaskStatus::Todo);
        assert_eq!(todo.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2]);
    }
}
