//! View-модели страниц и область отрисовки.
//!
//! Контроллеры строят данные для показа, а реализация `Surface`
//! решает, как их нарисовать (DOM через Leptos или текст в терминале).

use crate::models::{Listing, Review, format_number};
use crate::routes::Page;

pub const LOADING_PLACES: &str = "Loading places…";
pub const NO_MATCHING_PLACES: &str = "No places match the filter.";
pub const MISSING_PLACE_ID: &str = "Missing place id";
pub const NO_REVIEWS: &str = "No reviews yet.";
pub const ANONYMOUS: &str = "Anonymous";
pub const PLACEHOLDER: &str = "—";
pub const LOGGED_IN: &str = "Logged In";

#[derive(Debug, Clone, PartialEq)]
pub struct ListingCard {
    pub id: String,
    pub title: String,
    pub price_label: String,
    pub href: String,
}

impl From<&Listing> for ListingCard {
    fn from(listing: &Listing) -> Self {
        Self {
            id: listing.id.clone(),
            title: listing.title.clone(),
            price_label: listing.price_label(),
            href: Page::Place {
                id: listing.id.clone(),
            }
            .href(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListingsView {
    Loading,
    Cards(Vec<ListingCard>),
    /// Фильтр отсёк всё: показываем явное сообщение, а не пустой контейнер.
    Empty,
    Failed(String),
}

impl ListingsView {
    /// Текст для состояний без карточек.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Loading => Some(LOADING_PLACES),
            Self::Cards(_) => None,
            Self::Empty => Some(NO_MATCHING_PLACES),
            Self::Failed(message) => Some(message),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaceDetailView {
    pub title: String,
    pub price_label: String,
    pub location: String,
    pub description: String,
    pub host: String,
}

impl From<&Listing> for PlaceDetailView {
    fn from(listing: &Listing) -> Self {
        Self {
            title: listing.title.clone(),
            price_label: listing.price_label(),
            location: listing.location(),
            description: listing.description.clone().unwrap_or_default(),
            host: listing
                .owner
                .as_ref()
                .and_then(|owner| owner.full_name())
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlaceView {
    MissingId,
    Detail(PlaceDetailView),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewCard {
    pub comment: String,
    pub author: String,
    pub rating_label: String,
}

impl ReviewCard {
    /// `By Ada Lovelace — Rating: 5`
    pub fn byline(&self) -> String {
        format!("By {} — Rating: {}", self.author, self.rating_label)
    }
}

impl From<&Review> for ReviewCard {
    fn from(review: &Review) -> Self {
        Self {
            comment: review.comment.clone().unwrap_or_default(),
            author: review
                .user
                .as_ref()
                .and_then(|user| user.full_name())
                .unwrap_or_else(|| ANONYMOUS.to_string()),
            rating_label: review
                .rating
                .map(format_number)
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReviewsView {
    Cards(Vec<ReviewCard>),
    Empty,
    Failed(String),
}

/// Области страницы, в которые пишут контроллеры.
///
/// Каждый метод меняет только свою область. Если области уже нет
/// (пользователь ушёл со страницы), вызов должен быть безопасным no-op.
pub trait Surface {
    fn show_listings(&self, view: ListingsView);

    /// Заполняет фильтр стран; вариант «все страны» уже есть в разметке.
    fn set_country_options(&self, countries: &[String]);

    fn show_place(&self, view: PlaceView);

    fn show_reviews(&self, view: ReviewsView);

    /// `None` очищает слот кнопки «Add Review».
    fn show_add_review_cta(&self, target: Option<Page>);

    fn mark_logged_in(&self);
}
