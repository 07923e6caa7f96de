//! HTTP client for the task backend.
//!
//! Four operations, one round trip each: list, create, update, delete.
//! On wasm32 reqwest delegates to the browser `fetch` API.

use reqwest::{Client, StatusCode};
use serde::Serialize;
use thiserror::Error;

use crate::models::{Task, TaskStatus};

/// Origin of the task backend.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// The four backend operations, used to pick the user-facing failure text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Fixed message shown when the backend answers with a non-success
    /// status. Never derived from the response body.
    pub fn error_message(self) -> &'static str {
        match self {
            Operation::List => "Erro ao listar tarefas",
            Operation::Create => "Erro ao criar tarefa",
            Operation::Update => "Erro ao atualizar tarefa",
            Operation::Delete => "Erro ao excluir tarefa",
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a usable HTTP response (connection
    /// refused, interrupted body, invalid JSON).
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    /// The backend answered with a non-success status. The code is kept
    /// for console logging; the displayed text stays generic.
    #[error("{}", .op.error_message())]
    Status { op: Operation, code: StatusCode },
}

/// Fields sent when creating a task. The client always pins the status
/// to `todo` even though the backend would default it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
}

/// Fields sent on update. Title and description are always resent:
/// the backend replaces the description with whatever arrives, and
/// omitting it would clear it. The status is only present on moves;
/// edits leave it out and the backend keeps the current column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskPatch {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

#[derive(Clone)]
pub struct TaskApi {
    client: Client,
    base_url: String,
}

impl TaskApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn tasks_url(&self) -> String {
        format!("{}/tasks", self.base_url)
    }

    fn task_url(&self, id: i64) -> String {
        format!("{}/tasks/{}", self.base_url, id)
    }

    /// GET /tasks — the full list, in backend order.
    pub async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        let res = self.client.get(self.tasks_url()).send().await?;
        if !res.status().is_success() {
            return Err(ApiError::Status {
                op: Operation::List,
                code: res.status(),
            });
        }
        Ok(res.json().await?)
    }

    /// POST /tasks — returns the created task with its backend id.
    pub async fn create_task(&self, fields: &NewTask) -> Result<Task, ApiError> {
        let res = self
            .client
            .post(self.tasks_url())
            .json(fields)
            .send()
            .await?;
        if !res.status().is_success() {
            return Err(ApiError::Status {
                op: Operation::Create,
                code: res.status(),
            });
        }
        Ok(res.json().await?)
    }

    /// PUT /tasks/{id} — returns the updated task.
    pub async fn update_task(&self, id: i64, patch: &TaskPatch) -> Result<Task, ApiError> {
        let res = self
            .client
            .put(self.task_url(id))
            .json(patch)
            .send()
            .await?;
        if !res.status().is_success() {
            return Err(ApiError::Status {
                op: Operation::Update,
                code: res.status(),
            });
        }
        Ok(res.json().await?)
    }

    /// DELETE /tasks/{id} — the backend answers 204 with no body.
    pub async fn delete_task(&self, id: i64) -> Result<(), ApiError> {
        let res = self.client.delete(self.task_url(id)).send().await?;
        if !res.status().is_success() {
            return Err(ApiError::Status {
                op: Operation::Delete,
                code: res.status(),
            });
        }
        Ok(())
    }
}

impl Default for TaskApi {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_follow_the_rest_contract() {
        let api = TaskApi::new("http://localhost:8080");
        assert_eq!(api.tasks_url(), "http://localhost:8080/tasks");
        assert_eq!(api.task_url(7), "http://localhost:8080/tasks/7");
    }

    #[test]
    fn create_payload_pins_the_status_to_todo() {
        let fields = NewTask {
            title: "Comprar café".to_string(),
            description: String::new(),
            status: TaskStatus::default(),
        };
        let json = serde_json::to_value(&fields).unwrap();
        assert_eq!(json["title"], "Comprar café");
        assert_eq!(json["description"], "");
        assert_eq!(json["status"], "todo");
    }

    #[test]
    fn move_payload_resends_title_and_description_with_the_status() {
        let patch = TaskPatch {
            title: "A".to_string(),
            description: "detalhes".to_string(),
            status: Some(TaskStatus::InProgress),
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json["title"], "A");
        assert_eq!(json["description"], "detalhes");
        assert_eq!(json["status"], "in_progress");
    }

    #[test]
    fn edit_payload_leaves_the_status_out() {
        let patch = TaskPatch {
            title: "A".to_string(),
            description: String::new(),
            status: None,
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert!(json.get("status").is_none());
    }

    #[test]
    fn status_errors_display_the_fixed_operation_message() {
        let err = ApiError::Status {
            op: Operation::List,
            code: StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert_eq!(err.to_string(), "Erro ao listar tarefas");

        let err = ApiError::Status {
            op: Operation::Delete,
            code: StatusCode::NOT_FOUND,
        };
        assert_eq!(err.to_string(), "Erro ao excluir tarefa");
    }

    #[test]
    fn every_operation_has_its_own_message() {
        let messages = [
            Operation::List,
            Operation::Create,
            Operation::Update,
            Operation::Delete,
        ]
        .map(Operation::error_message);
        for (i, message) in messages.iter().enumerate() {
            assert!(messages[i + 1..].iter().all(|other| other != message));
            assert!(!message.is_empty());
        }
    }
}
