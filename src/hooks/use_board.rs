use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{NewTask, TaskApi, TaskPatch};
use crate::browser;
use crate::models::{MoveDirection, Task, TaskStatus};

/// Board state and the handlers that mutate it, owned by `use_board`.
///
/// Components only ever see read-only signals; every mutation goes
/// through the backend and becomes visible via the next full reload.
pub struct BoardHook {
    pub tasks: ReadSignal<Vec<Task>>,
    pub loading: ReadSignal<bool>,
    pub error: ReadSignal<Option<String>>,
    /// New-task form fields, bound two-way by the form component.
    pub title: RwSignal<String>,
    pub description: RwSignal<String>,
    pub create: Callback<()>,
    pub move_task: Callback<(Task, MoveDirection)>,
    pub edit: Callback<Task>,
    pub delete: Callback<Task>,
    pub start_drag: Callback<Task>,
    pub end_drag: Callback<()>,
    pub drop_on: Callback<TaskStatus>,
}

/// Trimmed title, or None when the submission must be blocked.
fn normalized_title(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Fetch the full list and replace the local copy. A failure leaves the
/// previous list on screen and raises the persistent error banner.
async fn reload_tasks(
    api: &TaskApi,
    tasks: RwSignal<Vec<Task>>,
    loading: RwSignal<bool>,
    error: RwSignal<Option<String>>,
) {
    error.set(None);
    loading.set(true);
    match api.list_tasks().await {
        Ok(list) => tasks.set(list),
        Err(err) => {
            web_sys::console::error_1(&format!("Failed to load tasks: {err:?}").into());
            error.set(Some(err.to_string()));
        }
    }
    loading.set(false);
}

// The handlers below capture signals only; the HTTP client is created
// inside each async block because it is not Send on wasm.
pub fn use_board() -> BoardHook {
    let tasks = RwSignal::new(Vec::<Task>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let dragging = RwSignal::new(None::<Task>);

    // Load the board on mount
    spawn_local(async move {
        reload_tasks(&TaskApi::default(), tasks, loading, error).await;
    });

    let create = Callback::new(move |_: ()| {
        let Some(new_title) = normalized_title(&title.get_untracked()) else {
            browser::alert("Título é obrigatório");
            return;
        };
        let fields = NewTask {
            title: new_title,
            description: description.get_untracked().trim().to_string(),
            status: TaskStatus::Todo,
        };
        spawn_local(async move {
            let api = TaskApi::default();
            loading.set(true);
            match api.create_task(&fields).await {
                Ok(_) => {
                    // The form only clears on success; a failed
                    // submission keeps the text for a retry.
                    title.set(String::new());
                    description.set(String::new());
                    reload_tasks(&api, tasks, loading, error).await;
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("Failed to create task: {err:?}").into());
                    browser::alert(&err.to_string());
                }
            }
            loading.set(false);
        });
    });

    let move_task = Callback::new(move |(task, direction): (Task, MoveDirection)| {
        // Already at the edge of the board, nothing to do.
        let Some(next_status) = direction.target(task.status) else {
            return;
        };
        spawn_local(async move {
            let api = TaskApi::default();
            let patch = TaskPatch {
                title: task.title,
                description: task.description,
                status: Some(next_status),
            };
            match api.update_task(task.id, &patch).await {
                Ok(_) => reload_tasks(&api, tasks, loading, error).await,
                Err(err) => {
                    web_sys::console::error_1(&format!("Failed to move task: {err:?}").into());
                    browser::alert(&err.to_string());
                }
            }
        });
    });

    let start_drag = Callback::new(move |task: Task| {
        dragging.set(Some(task));
    });

    let end_drag = Callback::new(move |_: ()| {
        dragging.set(None);
    });

    let drop_on = Callback::new(move |target: TaskStatus| {
        let Some(task) = dragging.get_untracked() else {
            return;
        };
        // Dropped back onto its own column: no request, just let go.
        if task.status == target {
            dragging.set(None);
            return;
        }
        spawn_local(async move {
            let api = TaskApi::default();
            let patch = TaskPatch {
                title: task.title,
                description: task.description,
                status: Some(target),
            };
            match api.update_task(task.id, &patch).await {
                Ok(_) => reload_tasks(&api, tasks, loading, error).await,
                Err(err) => {
                    web_sys::console::error_1(&format!("Failed to move task: {err:?}").into());
                    browser::alert(&err.to_string());
                }
            }
            dragging.set(None);
        });
    });

    let edit = Callback::new(move |task: Task| {
        // Two blocking prompts; dismissing either aborts the edit
        // before any request is made.
        let Some(new_title) = browser::prompt("Novo título:", &task.title) else {
            return;
        };
        let Some(new_title) = normalized_title(&new_title) else {
            browser::alert("Título não pode ser vazio");
            return;
        };
        let Some(new_description) = browser::prompt("Nova descrição (opcional):", &task.description)
        else {
            return;
        };
        spawn_local(async move {
            let api = TaskApi::default();
            // No status here: the backend keeps the current column.
            let patch = TaskPatch {
                title: new_title,
                description: new_description,
                status: None,
            };
            match api.update_task(task.id, &patch).await {
                Ok(_) => reload_tasks(&api, tasks, loading, error).await,
                Err(err) => {
                    web_sys::console::error_1(&format!("Failed to edit task: {err:?}").into());
                    browser::alert(&err.to_string());
                }
            }
        });
    });

    let delete = Callback::new(move |task: Task| {
        if !browser::confirm("Tem certeza que deseja excluir esta tarefa?") {
            return;
        }
        spawn_local(async move {
            let api = TaskApi::default();
            match api.delete_task(task.id).await {
                Ok(_) => reload_tasks(&api, tasks, loading, error).await,
                Err(err) => {
                    web_sys::console::error_1(&format!("Failed to delete task: {err:?}").into());
                    browser::alert(&err.to_string());
                }
            }
        });
    });

    BoardHook {
        tasks: tasks.read_only(),
        loading: loading.read_only(),
        error: error.read_only(),
        title,
        description,
        create,
        move_task,
        edit,
        delete,
        start_drag,
        end_drag,
        drop_on,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_titles_never_reach_the_network() {
        assert_eq!(normalized_title(""), None);
        assert_eq!(normalized_title("   "), None);
        assert_eq!(normalized_title("\t\n"), None);
    }

    #[test]
    fn titles_are_trimmed_before_submission() {
        assert_eq!(
            normalized_title("  Comprar café  "),
            Some("Comprar café".to_string())
        );
    }
}
