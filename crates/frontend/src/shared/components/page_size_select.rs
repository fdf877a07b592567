use contracts::shared::PageSize;
use leptos::prelude::*;

/// Rows-per-page selector offering every [`PageSize`]
#[component]
pub fn PageSizeSelect(
    /// Current page size
    #[prop(into)]
    page_size: Signal<PageSize>,

    /// Callback when page size changes
    on_change: Callback<PageSize>,
) -> impl IntoView {
    view! {
        <label class="page-size-select">
            <span class="page-size-select__label">"Rows"</span>
            <select
                class="page-size-select__input"
                on:change=move |ev| {
                    match event_target_value(&ev).parse::<PageSize>() {
                        Ok(size) => on_change.run(size),
                        Err(err) => log::warn!("{}", err),
                    }
                }
                prop:value=move || page_size.get().to_string()
            >
                {PageSize::ALL
                    .into_iter()
                    .map(|size| {
                        view! {
                            <option value=size.to_string() selected=move || page_size.get() == size>
                                {size.to_string()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}
