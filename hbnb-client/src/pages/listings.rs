use std::sync::Arc;

use tracing::{debug, warn};

use super::{PLACES_PATH, PageContext};
use crate::error::HbnbClientError;
use crate::filter::{FilterState, country_facets};
use crate::models::Listing;
use crate::routes::Page;
use crate::view::{ListingCard, ListingsView};

/// Коллекция, загруженная один раз за жизнь страницы.
///
/// Не меняется после загрузки: фильтрация строит новое видимое подмножество.
#[derive(Debug, Clone)]
pub struct ListingBoard {
    listings: Arc<[Listing]>,
}

impl ListingBoard {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self {
            listings: listings.into(),
        }
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn country_facets(&self) -> Vec<String> {
        country_facets(&self.listings)
    }

    /// Чистая функция: состояние фильтров -> что показать.
    pub fn render(&self, filter: &FilterState) -> ListingsView {
        let cards: Vec<ListingCard> = filter
            .apply(&self.listings)
            .into_iter()
            .map(ListingCard::from)
            .collect();

        if cards.is_empty() {
            return ListingsView::Empty;
        }
        ListingsView::Cards(cards)
    }
}

pub struct ListingsPage {
    ctx: PageContext,
}

impl ListingsPage {
    pub fn new(ctx: PageContext) -> Self {
        Self { ctx }
    }

    /// Загружает коллекцию и делает первую отрисовку.
    ///
    /// Без сессии сразу уводит на логин и не делает запросов.
    /// `current` читает фильтры уже после загрузки: пока идёт запрос,
    /// пользователь может успеть их поменять.
    /// Возвращает доску для перерисовок при смене фильтров.
    pub async fn open(&self, current: impl Fn() -> FilterState) -> Option<ListingBoard> {
        if !self.ctx.session.is_authenticated() {
            debug!("no session, redirecting to login");
            self.ctx.browser.navigate(&Page::Login);
            return None;
        }

        self.ctx.surface.show_listings(ListingsView::Loading);

        match self.ctx.gateway.fetch_json::<Vec<Listing>>(PLACES_PATH).await {
            Ok(listings) => {
                debug!(count = listings.len(), "listings loaded");
                let board = ListingBoard::new(listings);
                self.ctx.surface.set_country_options(&board.country_facets());
                self.show(&board, &current());
                Some(board)
            }
            Err(HbnbClientError::Unauthorized) => None,
            Err(err) => {
                warn!(error = %err, "failed to load listings");
                let message = match err {
                    HbnbClientError::Http { status, .. } => {
                        format!("Failed to load places: {status}")
                    }
                    other => other.to_string(),
                };
                self.ctx
                    .surface
                    .show_listings(ListingsView::Failed(format!("Error: {message}")));
                None
            }
        }
    }

    /// Перерисовка при изменении любого из фильтров.
    pub fn show(&self, board: &ListingBoard, filter: &FilterState) {
        self.ctx.surface.show_listings(board.render(filter));
    }
}
