use crate::domain::a001_product::api::FetchError;
use crate::shared::notifications::{Notice, NotificationSink};
use crate::shared::pagination;
use contracts::domain::a001_product::Product;
use contracts::shared::PageSize;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct CatalogState {
    /// Full catalog, ascending by id. Empty until a fetch succeeds.
    pub items: Vec<Product>,
    pub page_size: PageSize,
    /// 1-based
    pub page_number: usize,
    /// Last previewed product; kept after the dialog closes
    pub selected: Option<Product>,
    pub dialog_open: bool,
    pub is_loading: bool,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page_size: PageSize::default(),
            page_number: 1,
            selected: None,
            dialog_open: false,
            is_loading: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum CatalogEvent {
    FetchStarted,
    FetchSucceeded(Vec<Product>),
    FetchFailed(FetchError),
    ChangePage(usize),
    ChangePageSize(PageSize),
    RequestPreview(Product),
    ClosePreview,
}

impl CatalogState {
    /// Applies one event. Returns the notice to show, if the event calls for one.
    pub fn apply(&mut self, event: CatalogEvent) -> Option<Notice> {
        match event {
            CatalogEvent::FetchStarted => {
                self.is_loading = true;
            }
            CatalogEvent::FetchSucceeded(mut products) => {
                products.sort_by_key(|p| p.id);
                self.items = products;
                self.is_loading = false;
            }
            CatalogEvent::FetchFailed(err) => {
                self.items.clear();
                self.is_loading = false;
                return Some(Notice::error(err.user_message()));
            }
            CatalogEvent::ChangePage(page) => {
                if self.items.is_empty() {
                    return None;
                }
                let total = self.total_pages();
                if (1..=total).contains(&page) {
                    self.page_number = page;
                } else {
                    log::warn!("Ignoring request for page {} of {}", page, total);
                }
            }
            CatalogEvent::ChangePageSize(size) => {
                self.page_size = size;
                self.page_number = 1;
            }
            CatalogEvent::RequestPreview(product) => {
                self.selected = Some(product);
                self.dialog_open = true;
            }
            CatalogEvent::ClosePreview => {
                self.dialog_open = false;
            }
        }
        None
    }

    /// Applies an event and hands any resulting notice to `sink`.
    pub fn handle(&mut self, event: CatalogEvent, sink: &impl NotificationSink) {
        if let Some(notice) = self.apply(event) {
            sink.notify(notice);
        }
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.items.len(), self.page_size.get())
    }

    pub fn visible_items(&self) -> &[Product] {
        pagination::slice(&self.items, self.page_number, self.page_size.get())
    }

    /// Rows of the current page paired with their running serial number
    pub fn rows(&self) -> Vec<(usize, Product)> {
        self.visible_items()
            .iter()
            .enumerate()
            .map(|(index, product)| {
                (
                    pagination::serial_number(self.page_number, self.page_size.get(), index),
                    product.clone(),
                )
            })
            .collect()
    }

    /// Product to render in the preview dialog, if it is open
    pub fn preview(&self) -> Option<Product> {
        if self.dialog_open {
            self.selected.clone()
        } else {
            None
        }
    }
}

pub fn create_state() -> RwSignal<CatalogState> {
    RwSignal::new(CatalogState::default())
}

/// Applies `event` to the live state and forwards any notice to `sink`.
///
/// Does nothing if the state has already been disposed.
pub fn dispatch(state: RwSignal<CatalogState>, event: CatalogEvent, sink: &impl NotificationSink) {
    let notice = state.try_update(|s| s.apply(event)).flatten();
    if let Some(notice) = notice {
        sink.notify(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::{ProductId, Rating};
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSink {
        notices: RefCell<Vec<Notice>>,
    }

    impl NotificationSink for RecordingSink {
        fn notify(&self, notice: Notice) {
            self.notices.borrow_mut().push(notice);
        }
    }

    fn product(id: u64) -> Product {
        Product {
            id: ProductId(id),
            title: format!("Product {}", id),
            price: id as f64 * 1.5,
            category: "electronics".to_string(),
            image: format!("https://example.com/{}.jpg", id),
            description: String::new(),
            rating: Rating { rate: 4.0, count: 10 },
        }
    }

    fn loaded(count: u64) -> CatalogState {
        let mut state = CatalogState::default();
        state.apply(CatalogEvent::FetchSucceeded((1..=count).map(product).collect()));
        state
    }

    fn ids(products: &[Product]) -> Vec<u64> {
        products.iter().map(|p| p.id.value()).collect()
    }

    #[test]
    fn test_initial_state() {
        let state = CatalogState::default();
        assert!(state.items.is_empty());
        assert_eq!(state.page_number, 1);
        assert_eq!(state.page_size, PageSize::Twenty);
        assert!(!state.dialog_open);
        assert!(state.selected.is_none());
        assert_eq!(state.total_pages(), 0);
        assert!(state.visible_items().is_empty());
    }

    #[test]
    fn test_fetch_success_sorts_by_id() {
        let mut state = CatalogState::default();
        state.apply(CatalogEvent::FetchStarted);
        assert!(state.is_loading);

        let notice =
            state.apply(CatalogEvent::FetchSucceeded(vec![product(3), product(1), product(2)]));

        assert!(notice.is_none());
        assert!(!state.is_loading);
        assert_eq!(ids(&state.items), vec![1, 2, 3]);
    }

    #[test]
    fn test_fetch_success_keeps_pagination() {
        let mut state = CatalogState::default();
        state.apply(CatalogEvent::ChangePageSize(PageSize::Five));
        state.apply(CatalogEvent::FetchSucceeded((1..=12).map(product).collect()));
        assert_eq!(state.page_size, PageSize::Five);
        assert_eq!(state.page_number, 1);
        assert_eq!(state.total_pages(), 3);
    }

    #[test]
    fn test_fetch_failure_notifies_once() {
        let sink = RecordingSink::default();
        let mut state = CatalogState::default();
        state.handle(CatalogEvent::FetchStarted, &sink);
        state.handle(
            CatalogEvent::FetchFailed(FetchError::Network("network error".to_string())),
            &sink,
        );

        assert!(state.items.is_empty());
        assert!(!state.is_loading);
        assert_eq!(
            *sink.notices.borrow(),
            vec![Notice::error("Failed to fetch products")]
        );
        // still usable afterwards
        state.handle(CatalogEvent::ChangePage(2), &sink);
        assert_eq!(state.page_number, 1);
        assert_eq!(sink.notices.borrow().len(), 1);
    }

    #[test]
    fn test_change_page_size_resets_page() {
        let mut state = loaded(45);
        state.apply(CatalogEvent::ChangePage(3));
        assert_eq!(state.page_number, 3);

        state.apply(CatalogEvent::ChangePageSize(PageSize::Ten));
        assert_eq!(state.page_number, 1);
        assert_eq!(state.page_size, PageSize::Ten);

        // same size again still resets
        state.apply(CatalogEvent::ChangePage(2));
        state.apply(CatalogEvent::ChangePageSize(PageSize::Ten));
        assert_eq!(state.page_number, 1);
    }

    #[test]
    fn test_forty_five_items_scenario() {
        let mut state = loaded(45);
        assert_eq!(state.total_pages(), 3);
        assert_eq!(ids(state.visible_items()), (1..=20).collect::<Vec<_>>());

        state.apply(CatalogEvent::ChangePage(3));
        assert_eq!(ids(state.visible_items()), (41..=45).collect::<Vec<_>>());

        let serials: Vec<usize> = state.rows().iter().map(|(n, _)| *n).collect();
        assert_eq!(serials, vec![41, 42, 43, 44, 45]);
    }

    #[test]
    fn test_change_page_out_of_range_is_ignored() {
        let mut state = loaded(45);
        state.apply(CatalogEvent::ChangePage(2));
        state.apply(CatalogEvent::ChangePage(4));
        assert_eq!(state.page_number, 2);
        state.apply(CatalogEvent::ChangePage(0));
        assert_eq!(state.page_number, 2);
    }

    #[test]
    fn test_change_page_on_empty_catalog_is_noop() {
        let mut state = CatalogState::default();
        state.apply(CatalogEvent::ChangePage(1));
        assert_eq!(state.page_number, 1);
        assert!(state.visible_items().is_empty());
    }

    #[test]
    fn test_preview_open_close_reopen() {
        let mut state = loaded(3);
        let p = product(1);
        let q = product(2);

        state.apply(CatalogEvent::RequestPreview(p.clone()));
        assert!(state.dialog_open);
        assert_eq!(state.preview(), Some(p.clone()));

        state.apply(CatalogEvent::ClosePreview);
        assert!(!state.dialog_open);
        assert_eq!(state.preview(), None);
        // selection survives closing
        assert_eq!(state.selected, Some(p));

        state.apply(CatalogEvent::RequestPreview(q.clone()));
        assert!(state.dialog_open);
        assert_eq!(state.selected, Some(q.clone()));
        assert_eq!(state.preview(), Some(q));
    }

    #[test]
    fn test_page_past_end_after_refetch_renders_empty() {
        let mut state = loaded(45);
        state.apply(CatalogEvent::ChangePage(3));
        state.apply(CatalogEvent::FetchSucceeded((1..=10).map(product).collect()));
        assert_eq!(state.page_number, 3);
        assert!(state.visible_items().is_empty());
        assert!(state.rows().is_empty());
    }

    #[test]
    fn test_dispatch_after_teardown_is_noop() {
        let sink = RecordingSink::default();
        let owner = Owner::new();
        let state = owner.with(create_state);

        dispatch(state, CatalogEvent::FetchStarted, &sink);
        assert_eq!(state.try_with_untracked(|s| s.is_loading), Some(true));

        owner.cleanup();
        dispatch(
            state,
            CatalogEvent::FetchFailed(FetchError::Network("late response".to_string())),
            &sink,
        );

        assert!(sink.notices.borrow().is_empty());
        assert_eq!(state.try_with_untracked(|s| s.is_loading), None);
    }
}
