use hbnb_client::view::PlaceDetailView;
use leptos::prelude::*;

#[component]
pub(crate) fn PlaceInfo(detail: PlaceDetailView) -> impl IntoView {
    view! {
        <div class="place-info">
            <h1>{detail.title}</h1>
            <p><strong>"Price: "</strong>{detail.price_label}</p>
            <p><strong>"Location: "</strong>{detail.location}</p>
            <p>{detail.description}</p>
            <p><strong>"Host: "</strong>{detail.host}</p>
        </div>
    }
}
