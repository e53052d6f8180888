use hbnb_client::view::ReviewCard;
use leptos::prelude::*;

#[component]
pub(crate) fn ReviewCards(cards: Vec<ReviewCard>) -> impl IntoView {
    cards
        .into_iter()
        .map(|card| {
            let byline = card.byline();
            view! {
                <div class="review-card">
                    <p>{card.comment}</p>
                    <small>{byline}</small>
                </div>
            }
        })
        .collect_view()
}
