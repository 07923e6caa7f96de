use leptos::prelude::*;

/// Persistent banner for the last list-load failure. Renders nothing
/// while there is no error; the next successful load clears it.
#[component]
pub fn ErrorBanner(#[prop(into)] error: ReadSignal<Option<String>>) -> impl IntoView {
    view! {
        {move || {
            error
                .get()
                .map(|message| view! { <div class="error-banner">{message}</div> })
        }}
    }
}
