use leptos::prelude::*;

use crate::components::KanbanColumn;
use crate::models::{MoveDirection, Task, TaskStatus};

/// The three fixed columns in board order, sharing one task list and
/// one set of board handlers.
#[component]
pub fn KanbanBoard(
    #[prop(into)] tasks: ReadSignal<Vec<Task>>,
    #[prop(into)] on_move: Callback<(Task, MoveDirection)>,
    #[prop(into)] on_edit: Callback<Task>,
    #[prop(into)] on_delete: Callback<Task>,
    #[prop(into)] on_drag_start: Callback<Task>,
    #[prop(into)] on_drag_end: Callback<()>,
    #[prop(into)] on_drop: Callback<TaskStatus>,
) -> impl IntoView {
    view! {
        <div class="kanban-board">
            {TaskStatus::all()
                .into_iter()
                .map(|status| {
                    view! {
                        <KanbanColumn
                            status=status
                            tasks=tasks
                            on_move=on_move
                            on_edit=on_edit
                            on_delete=on_delete
                            on_drag_start=on_drag_start
                            on_drag_end=on_drag_end
                            on_drop=on_drop
                        />
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
