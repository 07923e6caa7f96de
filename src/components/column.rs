use leptos::prelude::*;

use crate::components::TaskCard;
use crate::models::{tasks_in_column, MoveDirection, Task, TaskStatus};

/// One status column. The whole column body is the drop target, so a
/// card can be released anywhere inside it.
#[component]
pub fn KanbanColumn(
    status: TaskStatus,
    #[prop(into)] tasks: ReadSignal<Vec<Task>>,
    #[prop(into)] on_move: Callback<(Task, MoveDirection)>,
    #[prop(into)] on_edit: Callback<Task>,
    #[prop(into)] on_delete: Callback<Task>,
    #[prop(into)] on_drag_start: Callback<Task>,
    #[prop(into)] on_drag_end: Callback<()>,
    #[prop(into)] on_drop: Callback<TaskStatus>,
) -> impl IntoView {
    view! {
        <div
            class="kanban-column"
            // Without this the browser refuses the drop
            on:dragover=move |ev| ev.prevent_default()
            on:drop=move |_| on_drop.run(status)
        >
            <div class="column-header">
                <h2>{status.label()}</h2>
                // Reactive task count - updates automatically when tasks change
                <span class="task-count">
                    {move || tasks.with(|tasks| tasks_in_column(tasks, status).len())}
                </span>
            </div>
            <div class="column-content">
                {move || {
                    tasks
                        .with(|tasks| tasks_in_column(tasks, status))
                        .into_iter()
                        .map(|task| {
                            view! {
                                <TaskCard
                                    task=task
                                    on_move=on_move
                                    on_edit=on_edit
                                    on_delete=on_delete
                                    on_drag_start=on_drag_start
                                    on_drag_end=on_drag_end
                                />
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
