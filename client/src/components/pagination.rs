//! Page navigation and page-size controls shared by every list page.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use leptos::prelude::*;

pub const PAGE_SIZE_OPTIONS: [u32; 4] = [5, 10, 25, 50];

/// One slot in the page button strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Gap,
}

/// Buttons to show for `current` of `total` pages: first, last, and
/// `span` pages either side of the current one, with gaps between.
#[must_use]
pub fn page_window(current: u32, total: u32, span: u32) -> Vec<PageItem> {
    let total = total.max(1);
    let current = current.clamp(1, total);
    let start = current.saturating_sub(span).max(1);
    let end = current.saturating_add(span).min(total);

    let mut items = Vec::new();
    if start > 1 {
        items.push(PageItem::Page(1));
        if start > 2 {
            items.push(PageItem::Gap);
        }
    }
    items.extend((start..=end).map(PageItem::Page));
    if end < total {
        if end + 1 < total {
            items.push(PageItem::Gap);
        }
        items.push(PageItem::Page(total));
    }
    items
}

#[component]
pub fn Pagination(
    #[prop(into)] page: Signal<u32>,
    #[prop(into)] total_pages: Signal<u32>,
    on_page: Callback<u32>,
) -> impl IntoView {
    let prev_disabled = move || page.get() <= 1;
    let next_disabled = move || page.get() >= total_pages.get();

    view! {
        <nav class="pagination" aria-label="Pagination">
            <button
                class="btn pagination__prev"
                disabled=prev_disabled
                on:click=move |_| on_page.run(page.get_untracked().saturating_sub(1).max(1))
            >
                "‹"
            </button>
            {move || {
                page_window(page.get(), total_pages.get(), 2)
                    .into_iter()
                    .map(|item| match item {
                        PageItem::Page(n) => {
                            view! {
                                <button
                                    class="btn pagination__page"
                                    class:pagination__page--active=move || page.get() == n
                                    on:click=move |_| on_page.run(n)
                                >
                                    {n}
                                </button>
                            }
                                .into_any()
                        }
                        PageItem::Gap => view! { <span class="pagination__gap">"…"</span> }.into_any(),
                    })
                    .collect::<Vec<_>>()
            }}
            <button
                class="btn pagination__next"
                disabled=next_disabled
                on:click=move |_| on_page.run(page.get_untracked().saturating_add(1))
            >
                "›"
            </button>
        </nav>
    }
}

#[component]
pub fn PageSizeSelect(#[prop(into)] limit: Signal<u32>, on_change: Callback<u32>) -> impl IntoView {
    view! {
        <label class="page-size">
            "Rows per page"
            <select
                class="page-size__select"
                on:change=move |ev| {
                    if let Ok(value) = event_target_value(&ev).parse::<u32>() {
                        on_change.run(value);
                    }
                }
            >
                {PAGE_SIZE_OPTIONS
                    .into_iter()
                    .map(|n| view! { <option value=n.to_string() selected=move || limit.get() == n>{n}</option> })
                    .collect::<Vec<_>>()}
            </select>
        </label>
    }
}
