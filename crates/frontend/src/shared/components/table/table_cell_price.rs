use super::number_format::format_price_with_currency;
use leptos::prelude::*;
use thaw::*;

/// Right-aligned table cell showing a price with currency and two decimals
#[component]
pub fn TableCellPrice(
    /// Price to show
    value: f64,
) -> impl IntoView {
    view! {
        <TableCell class="text-right">
            <span class="table__price">{format_price_with_currency(value)}</span>
        </TableCell>
    }
}
