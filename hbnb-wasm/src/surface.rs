use std::any::Any;

use hbnb_client::Page;
use hbnb_client::view::{
    LOGGED_IN, ListingsView, MISSING_PLACE_ID, NO_REVIEWS, PlaceView, ReviewsView, Surface,
};
use leptos::prelude::*;

use crate::components::listing_cards::ListingCards;
use crate::components::notice::{AddReviewButton, Notice};
use crate::components::place_info::PlaceInfo;
use crate::components::review_cards::ReviewCards;
use crate::dom::{self, ids};
use crate::slots::Slots;

/// Рисует view-модели в существующие элементы страницы.
///
/// Каждая область перерисовывается целиком; если элемента нет
/// (страница уже уходит), вызов ничего не делает.
#[derive(Default)]
pub(crate) struct DomSurface {
    /// `UnmountHandle` текущего содержимого каждой области: его drop
    /// размонтирует вид и освобождает owner вместе с обработчиками.
    mounted: Slots<Box<dyn Any>>,
}

impl DomSurface {
    fn mount_region<F, N>(&self, id: &'static str, view: F)
    where
        F: FnOnce() -> N + 'static,
        N: IntoView + 'static,
    {
        self.mounted.release(id);
        let Some(el) = dom::html_element(id) else {
            tracing::debug!(id, "region is gone, skipping render");
            return;
        };
        el.set_inner_html("");
        let handle = leptos::mount::mount_to(el, view);
        self.mounted.hold(id, Box::new(handle));
    }

    fn set_text(&self, id: &'static str, text: &str) {
        self.mounted.release(id);
        dom::set_text(id, text);
    }

    fn clear(&self, id: &'static str) {
        self.mounted.release(id);
        dom::clear(id);
    }
}

impl Surface for DomSurface {
    fn show_listings(&self, view: ListingsView) {
        match view {
            ListingsView::Cards(cards) => self.mount_region(ids::PLACES_LIST, move || {
                view! { <ListingCards cards=cards /> }
            }),
            ListingsView::Failed(message) => self.mount_region(ids::PLACES_LIST, move || {
                view! { <Notice message=message error=true /> }
            }),
            other => {
                let message = other.message().unwrap_or_default().to_string();
                self.mount_region(ids::PLACES_LIST, move || view! { <Notice message=message /> })
            }
        }
    }

    fn set_country_options(&self, countries: &[String]) {
        for country in countries {
            dom::append_option(ids::COUNTRY_FILTER, country);
        }
    }

    fn show_place(&self, view: PlaceView) {
        match view {
            PlaceView::MissingId => self.set_text(ids::PLACE, MISSING_PLACE_ID),
            PlaceView::Failed(message) => self.set_text(ids::PLACE, &message),
            PlaceView::Detail(detail) => {
                self.mount_region(ids::PLACE, move || view! { <PlaceInfo detail=detail /> })
            }
        }
    }

    fn show_reviews(&self, view: ReviewsView) {
        match view {
            ReviewsView::Cards(cards) => {
                self.mount_region(ids::REVIEWS, move || view! { <ReviewCards cards=cards /> })
            }
            ReviewsView::Empty => self.mount_region(ids::REVIEWS, move || {
                view! { <Notice message=NO_REVIEWS.to_string() /> }
            }),
            ReviewsView::Failed(message) => self.mount_region(ids::REVIEWS, move || {
                view! { <Notice message=message error=true /> }
            }),
        }
    }

    fn show_add_review_cta(&self, target: Option<Page>) {
        match target {
            Some(page) => {
                let href = page.href();
                self.mount_region(ids::ADD_REVIEW_CTA, move || {
                    view! { <AddReviewButton href=href /> }
                })
            }
            None => self.clear(ids::ADD_REVIEW_CTA),
        }
    }

    fn mark_logged_in(&self) {
        dom::set_text(ids::LOGIN_LINK, LOGGED_IN);
    }
}
