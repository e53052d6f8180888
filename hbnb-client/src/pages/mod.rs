//! Контроллеры страниц.
//!
//! На одной загрузке документа работает ровно один контроллер,
//! выбранный по `Route`.

use std::rc::Rc;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::browser::Browser;
use crate::config::ApiConfig;
use crate::gateway::Gateway;
use crate::routes::Route;
use crate::session::CredentialStore;
use crate::transport::Transport;
use crate::view::Surface;

pub mod listings;
pub mod login;
pub mod place;
pub mod review;

pub use listings::{ListingBoard, ListingsPage};
pub use login::{LoginOutcome, LoginPage};
pub use place::PlacePage;
pub use review::{ReviewForm, ReviewOutcome, ReviewPage};

pub(crate) const LOGIN_PATH: &str = "/api/v1/auth/login";
pub(crate) const PLACES_PATH: &str = "/api/v1/places/";
pub(crate) const REVIEWS_PATH: &str = "/api/v1/reviews/";

const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub(crate) fn place_path(id: &str) -> String {
    format!("/api/v1/places/{}/", utf8_percent_encode(id, PATH_SEGMENT))
}

pub(crate) fn place_reviews_path(id: &str) -> String {
    format!(
        "/api/v1/reviews/places/{}/reviews",
        utf8_percent_encode(id, PATH_SEGMENT)
    )
}

/// Возможности, которые контроллер получает снаружи.
#[derive(Clone)]
pub struct PageContext {
    pub session: Rc<dyn CredentialStore>,
    pub browser: Rc<dyn Browser>,
    pub surface: Rc<dyn Surface>,
    pub gateway: Gateway,
}

impl PageContext {
    pub fn new(
        config: ApiConfig,
        session: Rc<dyn CredentialStore>,
        transport: Rc<dyn Transport>,
        browser: Rc<dyn Browser>,
        surface: Rc<dyn Surface>,
    ) -> Self {
        let gateway = Gateway::new(config, session.clone(), transport, browser.clone());
        Self {
            session,
            browser,
            surface,
            gateway,
        }
    }
}

/// Контроллер текущей страницы вместе с его параметрами.
pub enum Controller {
    Login(LoginPage),
    Listings(ListingsPage),
    PlaceDetail(PlacePage),
    AddReview(ReviewPage),
}

impl Controller {
    pub fn for_route(route: Route, ctx: PageContext) -> Self {
        match route {
            Route::Login => Self::Login(LoginPage::new(ctx)),
            Route::Listings => Self::Listings(ListingsPage::new(ctx)),
            Route::PlaceDetail { id } => Self::PlaceDetail(PlacePage::new(ctx, id)),
            Route::AddReview { id } => Self::AddReview(ReviewPage::new(ctx, id)),
        }
    }

    /// Выбирает контроллер по адресу страницы; `None`, если у страницы нет логики.
    pub fn dispatch(pathname: &str, search: &str, ctx: PageContext) -> Option<Self> {
        let route = Route::resolve(pathname, search)?;
        tracing::debug!(?route, "page controller selected");
        Some(Self::for_route(route, ctx))
    }
}
