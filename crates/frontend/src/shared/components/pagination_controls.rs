use crate::shared::icons::icon;
use crate::shared::pagination::{page_links, PageLink};
use leptos::prelude::*;

/// Pages shown around the current one
const PAGE_RANGE_DISPLAYED: usize = 3;
/// Pages always shown at each edge
const MARGIN_PAGES_DISPLAYED: usize = 3;

/// PaginationControls component - "< Previous", page links with gaps, "Next >".
///
/// Only ever emits pages in `1..=total_pages`; renders nothing while there
/// are no pages.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let go_to = move |page: usize| {
        let total = total_pages.get_untracked();
        if (1..=total).contains(&page) && page != current_page.get_untracked() {
            on_page_change.run(page);
        }
    };

    let is_first = move || current_page.get() <= 1;
    let is_last = move || current_page.get() >= total_pages.get();

    view! {
        <Show when=move || { total_pages.get() > 0 }>
            <nav class="pagination-controls" aria-label="Pagination">
                <button
                    class="pagination-btn"
                    on:click=move |_| go_to(current_page.get_untracked().saturating_sub(1))
                    disabled=is_first
                    title="Previous page"
                >
                    {icon("chevron-left")}
                    "Previous"
                </button>
                {move || {
                    let current = current_page.get();
                    page_links(total_pages.get(), current, PAGE_RANGE_DISPLAYED, MARGIN_PAGES_DISPLAYED)
                        .into_iter()
                        .map(|link| match link {
                            PageLink::Page(page) => {
                                let active = page == current;
                                view! {
                                    <button
                                        class="pagination-page"
                                        class:pagination-page--active=active
                                        aria-current=active.then_some("page")
                                        on:click=move |_| go_to(page)
                                    >
                                        {page.to_string()}
                                    </button>
                                }.into_any()
                            }
                            PageLink::Gap => view! {
                                <span class="pagination-gap">"..."</span>
                            }.into_any(),
                        })
                        .collect_view()
                }}
                <button
                    class="pagination-btn"
                    on:click=move |_| go_to(current_page.get_untracked() + 1)
                    disabled=is_last
                    title="Next page"
                >
                    "Next"
                    {icon("chevron-right")}
                </button>
            </nav>
        </Show>
    }
}
