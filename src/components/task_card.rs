use leptos::prelude::*;

use crate::models::{MoveDirection, Task};

#[component]
pub fn TaskCard(
    task: Task,
    #[prop(into)] on_move: Callback<(Task, MoveDirection)>,
    #[prop(into)] on_edit: Callback<Task>,
    #[prop(into)] on_delete: Callback<Task>,
    #[prop(into)] on_drag_start: Callback<Task>,
    #[prop(into)] on_drag_end: Callback<()>,
) -> impl IntoView {
    let status = task.status;
    let title = task.title.clone();
    let description = task.description.clone();

    // Clone the task for each closure that hands it back to the board
    let task_for_drag = task.clone();
    let task_for_left = task.clone();
    let task_for_right = task.clone();
    let task_for_edit = task.clone();
    let task_for_delete = task;

    view! {
        <div
            class="task-card"
            draggable="true"
            on:dragstart=move |_| on_drag_start.run(task_for_drag.clone())
            on:dragend=move |_| on_drag_end.run(())
        >
            <strong class="task-title">{title}</strong>
            {(!description.is_empty())
                .then(|| view! { <p class="task-description">{description.clone()}</p> })}
            <div class="task-move-actions">
                <button
                    class="move-btn"
                    disabled=status.prev().is_none()
                    on:click=move |_| on_move.run((task_for_left.clone(), MoveDirection::Left))
                >
                    "←"
                </button>
                <button
                    class="move-btn"
                    disabled=status.next().is_none()
                    on:click=move |_| on_move.run((task_for_right.clone(), MoveDirection::Right))
                >
                    "→"
                </button>
            </div>
            <div class="task-actions">
                <button
                    class="task-action-btn edit-btn"
                    on:click=move |_| on_edit.run(task_for_edit.clone())
                >
                    "Editar"
                </button>
                <button
                    class="task-action-btn delete-btn"
                    on:click=move |_| on_delete.run(task_for_delete.clone())
                >
                    "Excluir"
                </button>
            </div>
        </div>
    }
}
