//! Отрисовка страниц в терминал.

use std::cell::RefCell;

use hbnb_client::view::{
    LOGGED_IN, ListingsView, MISSING_PLACE_ID, NO_REVIEWS, PlaceView, ReviewsView, Surface,
};
use hbnb_client::{Browser, Page};
use tracing::info;

/// Навигация в CLI только запоминается: следующую «страницу» выбирает команда.
#[derive(Debug, Default)]
pub struct TerminalBrowser {
    last_page: RefCell<Option<Page>>,
}

impl TerminalBrowser {
    pub fn last_page(&self) -> Option<Page> {
        self.last_page.borrow().clone()
    }
}

impl Browser for TerminalBrowser {
    fn navigate(&self, page: &Page) {
        info!(href = %page.href(), "navigate");
        *self.last_page.borrow_mut() = Some(page.clone());
    }

    fn alert(&self, message: &str) {
        eprintln!("! {message}");
    }
}

#[derive(Debug, Default)]
pub struct TerminalSurface;

impl Surface for TerminalSurface {
    fn show_listings(&self, view: ListingsView) {
        print!("{}", render_listings(&view));
    }

    fn set_country_options(&self, countries: &[String]) {
        if !countries.is_empty() {
            println!("Страны: {}", countries.join(", "));
        }
    }

    fn show_place(&self, view: PlaceView) {
        print!("{}", render_place(&view));
    }

    fn show_reviews(&self, view: ReviewsView) {
        print!("{}", render_reviews(&view));
    }

    fn show_add_review_cta(&self, target: Option<Page>) {
        if let Some(Page::AddReview { id }) = target {
            println!("Оставить отзыв: hbnb-cli review --id {id} --rating <1-5> --comment <text>");
        }
    }

    fn mark_logged_in(&self) {
        println!("[{LOGGED_IN}]");
    }
}

pub fn render_listings(view: &ListingsView) -> String {
    match view {
        ListingsView::Cards(cards) => cards
            .iter()
            .map(|card| {
                format!(
                    "- [{}] {} — {}\n",
                    card.id, card.title, card.price_label
                )
            })
            .collect(),
        other => format!("{}\n", other.message().unwrap_or_default()),
    }
}

pub fn render_place(view: &PlaceView) -> String {
    match view {
        PlaceView::MissingId => format!("{MISSING_PLACE_ID}\n"),
        PlaceView::Failed(message) => format!("{message}\n"),
        PlaceView::Detail(detail) => {
            let mut out = format!("{}\n", detail.title);
            out.push_str(&format!("Price: {}\n", detail.price_label));
            out.push_str(&format!("Location: {}\n", detail.location));
            if !detail.description.is_empty() {
                out.push_str(&format!("{}\n", detail.description));
            }
            out.push_str(&format!("Host: {}\n", detail.host));
            out
        }
    }
}

pub fn render_reviews(view: &ReviewsView) -> String {
    match view {
        ReviewsView::Empty => format!("{NO_REVIEWS}\n"),
        ReviewsView::Failed(message) => format!("{message}\n"),
        ReviewsView::Cards(cards) => cards
            .iter()
            .map(|card| format!("* {}\n  {}\n", card.comment, card.byline()))
            .collect(),
    }
}
