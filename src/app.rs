use leptos::prelude::*;

use crate::components::{ErrorBanner, KanbanBoard, TaskForm};
use crate::hooks::use_board;

#[component]
pub fn App() -> impl IntoView {
    // The hook owns every piece of board state; the components below
    // only read signals and call back into its handlers.
    let board = use_board();

    view! {
        <main class="app">
            <header class="app-header">
                <h1>"Mini Kanban"</h1>
                <p>"Este é o quadro com 3 colunas: A Fazer, Em Progresso e Concluídas."</p>
            </header>
            <TaskForm
                title=board.title
                description=board.description
                loading=board.loading
                on_submit=board.create
            />
            <ErrorBanner error=board.error />
            <KanbanBoard
                tasks=board.tasks
                on_move=board.move_task
                on_edit=board.edit
                on_delete=board.delete
                on_drag_start=board.start_drag
                on_drag_end=board.end_drag
                on_drop=board.drop_on
            />
        </main>
    }
}
