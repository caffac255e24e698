//! Button with an in-flight state.

use leptos::prelude::*;

/// A button that swaps its label for a spinner while `busy` is set.
#[component]
pub fn BusyButton(
    /// Label shown when idle.
    #[prop(into)]
    label: String,
    /// Label shown next to the spinner.
    #[prop(into)]
    busy_label: String,
    #[prop(into)]
    busy: Signal<bool>,
    #[prop(default = "btn btn-primary")]
    class: &'static str,
    /// `submit` inside forms, `button` otherwise.
    #[prop(default = "submit")]
    kind: &'static str,
    #[prop(optional, into)]
    on_click: Option<Callback<()>>,
) -> impl IntoView {
    let click = move |_| {
        if let Some(on_click) = on_click {
            on_click.run(());
        }
    };

    view! {
        <button type=kind class=class disabled=move || busy.get() on:click=click>
            {move || {
                if busy.get() {
                    view! {
                        <span class="spinner"></span>
                        <span>{busy_label.clone()}</span>
                    }
                        .into_any()
                } else {
                    view! { <span>{label.clone()}</span> }.into_any()
                }
            }}
        </button>
    }
}
