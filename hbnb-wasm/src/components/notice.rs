use leptos::prelude::*;

use crate::dom;

/// Строка состояния области: загрузка, пустой результат или ошибка.
#[component]
pub(crate) fn Notice(message: String, #[prop(optional)] error: bool) -> impl IntoView {
    let style = if error { "color:#b00" } else { "" };
    view! { <p style=style>{message}</p> }
}

#[component]
pub(crate) fn AddReviewButton(href: String) -> impl IntoView {
    view! {
        <button class="details-button" on:click=move |_| dom::navigate(&href)>
            "Add Review"
        </button>
    }
}
