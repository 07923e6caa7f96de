use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn TaskForm(
    title: RwSignal<String>,
    description: RwSignal<String>,
    #[prop(into)] loading: ReadSignal<bool>,
    #[prop(into)] on_submit: Callback<()>,
) -> impl IntoView {
    let handle_submit = move |ev: ev::SubmitEvent| {
        // Prevent the default form submission behavior (page reload)
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <form class="task-form" on:submit=handle_submit>
            <input
                type="text"
                placeholder="Título da tarefa"
                on:input=move |ev| title.set(event_target_value(&ev))
                prop:value=move || title.get()
            />
            <input
                type="text"
                placeholder="Descrição (opcional)"
                on:input=move |ev| description.set(event_target_value(&ev))
                prop:value=move || description.get()
            />
            <button type="submit" class="btn-primary" disabled=move || loading.get()>
                {move || if loading.get() { "Salvando..." } else { "Adicionar" }}
            </button>
        </form>
    }
}
