use crate::domain::a001_product::ui::list::ProductList;
use crate::shared::config::CatalogConfig;
use crate::shared::notifications::{NotificationHost, NotificationService};
use leptos::prelude::*;

#[component]
pub fn App(config: CatalogConfig) -> impl IntoView {
    provide_context(config);

    // Toasts for the whole app
    provide_context(NotificationService::new());

    view! {
        <main class="app">
            <ProductList />
        </main>
        <NotificationHost />
    }
}
