use crate::shared::components::table::format_price_with_currency;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a001_product::{Product, MAX_STARS};
use leptos::prelude::*;
use thaw::*;

/// Detail dialog for one product. Renders nothing while closed or when no
/// product has been selected.
#[component]
pub fn ProductPreview(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] product: Signal<Option<Product>>,
    on_close: Callback<()>,
) -> impl IntoView {
    move || {
        if !open.get() {
            return None;
        }
        product.get().map(|product| {
            view! {
                <Modal
                    title="Product Details".to_string()
                    on_close=on_close
                    footer=move || view! {
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                            "Close"
                        </Button>
                        <Button appearance=ButtonAppearance::Primary disabled=true>
                            "Add to Cart"
                        </Button>
                    }
                >
                    <ProductDetails product=product />
                </Modal>
            }
        })
    }
}

#[component]
fn ProductDetails(product: Product) -> impl IntoView {
    let filled = product.rating.filled_stars();

    view! {
        <div class="product-details">
            <div class="product-details__image">
                <img src=product.image.clone() alt=product.title.clone() />
            </div>
            <div class="product-details__info">
                <h3 class="product-details__title">{product.title.clone()}</h3>
                <div class="product-details__id">
                    <strong>"Product ID: "</strong>
                    {product.id.to_string()}
                </div>
                <div class="product-details__rating" title=format!("{:.1} / {}", product.rating.rate, MAX_STARS)>
                    {(0..MAX_STARS)
                        .map(|i| if i < filled { icon("star") } else { icon("star-outline") })
                        .collect_view()}
                    <span class="product-details__reviews">
                        {format!("({} reviews)", product.rating.count)}
                    </span>
                </div>
                <div class="product-details__description">
                    <h4>"Description:"</h4>
                    <p>{product.description.clone()}</p>
                </div>
                <div class="product-details__price">
                    "Price: "
                    <span class="product-details__price-value">
                        {format_price_with_currency(product.price)}
                    </span>
                </div>
            </div>
        </div>
    }
}
