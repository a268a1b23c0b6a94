use leptos::*;
use crate::models::Restaurant;

/// "Price Range: …" line, or nothing when the restaurant has no (or a blank) price range.
pub fn price_label(restaurant: &Restaurant) -> Option<String> {
    restaurant
        .price_range
        .as_deref()
        .filter(|price| !price.is_empty())
        .map(|price| format!("Price Range: {}", price))
}

/// Summary card for one restaurant. Clicking it hands the restaurant id to `on_select`.
#[component]
pub fn RestaurantCard(restaurant: Restaurant, on_select: Callback<String>) -> impl IntoView {
    let id = restaurant.id.clone();
    let price = price_label(&restaurant);

    view! {
        <div
            class="card restaurant-card hover:shadow-lg transition-shadow cursor-pointer"
            on:click=move |_| on_select.call(id.clone())
        >
            <div class="card-header">
                <h3 class="card-title">{ restaurant.name }</h3>
            </div>
            <div class="card-content">
                <p class="text-sm text-gray-600 mb-2">{ restaurant.cuisine_type }</p>
                <p class="text-sm text-gray-500">{ restaurant.address }</p>
                { price.map(|price| view! {
                    <p class="text-sm text-gray-600 mt-2">{ price }</p>
                }) }
            </div>
        </div>
    }
}
