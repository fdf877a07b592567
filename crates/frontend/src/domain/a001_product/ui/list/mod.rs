pub mod state;

use self::state::{create_state, dispatch, CatalogEvent};
use crate::domain::a001_product::api::fetch_products;
use crate::domain::a001_product::ui::details::ProductPreview;
use crate::shared::components::page_size_select::PageSizeSelect;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::TableCellPrice;
use crate::shared::config::CatalogConfig;
use crate::shared::fetch_guard::FetchGeneration;
use crate::shared::icons::icon;
use crate::shared::notifications::NotificationService;
use contracts::domain::a001_product::Product;
use contracts::shared::PageSize;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn ProductList() -> impl IntoView {
    let config = use_context::<CatalogConfig>().unwrap_or_default();
    let notifications =
        use_context::<NotificationService>().expect("NotificationService not provided in context");
    let state = create_state();
    let generation = FetchGeneration::new();

    {
        let generation = generation.clone();
        on_cleanup(move || generation.invalidate());
    }

    let load_products = move || {
        let ticket = generation.begin();
        let endpoint = config.endpoint.clone();
        let generation = generation.clone();
        dispatch(state, CatalogEvent::FetchStarted, &notifications);
        log::debug!("Fetching catalog from {}", endpoint);

        spawn_local(async move {
            let outcome = fetch_products(&endpoint).await;
            if !generation.is_current(ticket) {
                log::debug!("Discarding catalog response for a torn-down view");
                return;
            }
            let event = match outcome {
                Ok(products) => {
                    log::info!("Loaded {} products", products.len());
                    CatalogEvent::FetchSucceeded(products)
                }
                Err(err) => {
                    log::error!("Error fetching products: {}", err);
                    CatalogEvent::FetchFailed(err)
                }
            };
            dispatch(state, event, &notifications);
        });
    };

    load_products();

    let is_loading = Memo::new(move |_| state.with(|s| s.is_loading));
    let page_number = Memo::new(move |_| state.with(|s| s.page_number));
    let page_size = Memo::new(move |_| state.with(|s| s.page_size));
    let total_pages = Memo::new(move |_| state.with(|s| s.total_pages()));
    let rows = Memo::new(move |_| state.with(|s| s.rows()));
    let dialog_open = Memo::new(move |_| state.with(|s| s.dialog_open));
    let selected = Memo::new(move |_| state.with(|s| s.selected.clone()));

    let go_to_page = move |page: usize| dispatch(state, CatalogEvent::ChangePage(page), &notifications);
    let change_page_size =
        move |size: PageSize| dispatch(state, CatalogEvent::ChangePageSize(size), &notifications);
    let open_preview =
        move |product: Product| dispatch(state, CatalogEvent::RequestPreview(product), &notifications);
    let close_preview = move |_: ()| dispatch(state, CatalogEvent::ClosePreview, &notifications);

    view! {
        <div class="page catalog">
            {move || {
                if is_loading.get() {
                    view! {
                        <div class="catalog__loader">
                            <Spinner />
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="page__header">
                            <div class="page__header-left">
                                {icon("products")}
                                <h1 class="page__title">"Products"</h1>
                            </div>
                            <div class="page__header-right">
                                <PageSizeSelect
                                    page_size=page_size
                                    on_change=Callback::new(change_page_size)
                                />
                            </div>
                        </div>
                        <hr class="page__divider" />

                        <div class="table-wrapper">
                            <Table attr:style="width: 100%; max-width: 1024px; margin: 0 auto;">
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell min_width=70.0>"Sr. No"</TableHeaderCell>
                                        <TableHeaderCell min_width=100.0>"Image"</TableHeaderCell>
                                        <TableHeaderCell min_width=200.0>"Title"</TableHeaderCell>
                                        <TableHeaderCell min_width=90.0>"Price"</TableHeaderCell>
                                        <TableHeaderCell min_width=140.0>"Category"</TableHeaderCell>
                                        <TableHeaderCell min_width=90.0>"Action"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    <Show
                                        when=move || !rows.with(|r| r.is_empty())
                                        fallback=|| view! {
                                            <TableRow>
                                                <TableCell attr:colspan="6">
                                                    <div class="table__empty">"No Data Available"</div>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    >
                                        <For
                                            each=move || rows.get()
                                            key=|(serial, product)| (*serial, product.id)
                                            children=move |(serial, product)| {
                                                let title = product.title.clone();
                                                let tooltip = product.title.clone();
                                                let image = product.image.clone();
                                                let category = product.category.clone();
                                                let price = product.price;
                                                view! {
                                                    <TableRow>
                                                        <TableCell>{serial.to_string()}</TableCell>
                                                        <TableCell>
                                                            <img
                                                                class="table__thumbnail"
                                                                src=image
                                                                alt="Product"
                                                            />
                                                        </TableCell>
                                                        <TableCell>
                                                            <TableCellLayout truncate=true>
                                                                <span title=tooltip>{title}</span>
                                                            </TableCellLayout>
                                                        </TableCell>
                                                        <TableCellPrice value=price />
                                                        <TableCell>{category}</TableCell>
                                                        <TableCell>
                                                            <Button
                                                                appearance=ButtonAppearance::Primary
                                                                size=ButtonSize::Small
                                                                on_click=move |_| open_preview(product.clone())
                                                            >
                                                                "Preview"
                                                            </Button>
                                                        </TableCell>
                                                    </TableRow>
                                                }
                                            }
                                        />
                                    </Show>
                                </TableBody>
                            </Table>
                        </div>

                        <div class="catalog__pager">
                            <PaginationControls
                                current_page=page_number
                                total_pages=total_pages
                                on_page_change=Callback::new(go_to_page)
                            />
                        </div>
                    }
                    .into_any()
                }
            }}

            <ProductPreview
                open=dialog_open
                product=selected
                on_close=Callback::new(close_preview)
            />
        </div>
    }
}
