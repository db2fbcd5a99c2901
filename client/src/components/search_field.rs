use leptos::prelude::*;

/// Free-text search box. Every keystroke is forwarded; list actions ignore
/// unchanged terms.
#[component]
pub fn SearchField(
    #[prop(into)] value: Signal<String>,
    on_search: Callback<String>,
    #[prop(default = "Search...")] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="search-field">
            <input
                class="search-field__input"
                type="search"
                placeholder=placeholder
                aria-label=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_search.run(event_target_value(&ev))
            />
        </div>
    }
}
