use hbnb_client::view::ListingCard;
use leptos::prelude::*;

use crate::dom;

#[component]
pub(crate) fn ListingCards(cards: Vec<ListingCard>) -> impl IntoView {
    cards
        .into_iter()
        .map(|card| {
            let href = card.href;
            view! {
                <div class="place-card">
                    <h3>{card.title}</h3>
                    <p>{card.price_label}</p>
                    <button class="details-button" on:click=move |_| dom::navigate(&href)>
                        "View Details"
                    </button>
                </div>
            }
        })
        .collect_view()
}
