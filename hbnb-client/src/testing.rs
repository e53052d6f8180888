//! Фейки для unit-тестов контроллеров.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;

use crate::browser::Browser;
use crate::config::ApiConfig;
use crate::error::{HbnbClientError, HbnbClientResult};
use crate::pages::PageContext;
use crate::routes::Page;
use crate::session::MemoryCredentialStore;
use crate::transport::{HttpRequest, HttpResponse, Method, Transport};
use crate::view::{ListingsView, PlaceView, ReviewsView, Surface};

pub(crate) const BASE: &str = "http://api.test";

#[derive(Default)]
pub(crate) struct FakeTransport {
    routes: RefCell<HashMap<(Method, String), HbnbClientResult<HttpResponse>>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl FakeTransport {
    pub(crate) fn respond(&self, method: Method, url: &str, status: u16, body: &str) {
        self.routes.borrow_mut().insert(
            (method, url.to_string()),
            Ok(HttpResponse::new(status, body)),
        );
    }

    pub(crate) fn fail(&self, method: Method, url: &str, message: &str) {
        self.routes.borrow_mut().insert(
            (method, url.to_string()),
            Err(HbnbClientError::Network(message.to_string())),
        );
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub(crate) fn last_request(&self) -> Option<HttpRequest> {
        self.requests.borrow().last().cloned()
    }
}

#[async_trait(?Send)]
impl Transport for FakeTransport {
    async fn send(&self, request: HttpRequest) -> HbnbClientResult<HttpResponse> {
        self.requests.borrow_mut().push(request.clone());
        self.routes
            .borrow()
            .get(&(request.method, request.url))
            .cloned()
            .unwrap_or_else(|| Ok(HttpResponse::new(404, "not scripted")))
    }
}

#[derive(Default)]
pub(crate) struct RecordingBrowser {
    navigations: RefCell<Vec<Page>>,
    alerts: RefCell<Vec<String>>,
}

impl RecordingBrowser {
    pub(crate) fn navigations(&self) -> Vec<Page> {
        self.navigations.borrow().clone()
    }

    pub(crate) fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl Browser for RecordingBrowser {
    fn navigate(&self, page: &Page) {
        self.navigations.borrow_mut().push(page.clone());
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

#[derive(Default)]
pub(crate) struct RecordingSurface {
    pub(crate) listings: RefCell<Vec<ListingsView>>,
    pub(crate) countries: RefCell<Vec<String>>,
    pub(crate) place: RefCell<Vec<PlaceView>>,
    pub(crate) reviews: RefCell<Vec<ReviewsView>>,
    pub(crate) cta: RefCell<Vec<Option<Page>>>,
    pub(crate) logged_in: Cell<bool>,
}

impl RecordingSurface {
    pub(crate) fn last_listings(&self) -> Option<ListingsView> {
        self.listings.borrow().last().cloned()
    }

    pub(crate) fn last_place(&self) -> Option<PlaceView> {
        self.place.borrow().last().cloned()
    }

    pub(crate) fn last_reviews(&self) -> Option<ReviewsView> {
        self.reviews.borrow().last().cloned()
    }
}

impl Surface for RecordingSurface {
    fn show_listings(&self, view: ListingsView) {
        self.listings.borrow_mut().push(view);
    }

    fn set_country_options(&self, countries: &[String]) {
        *self.countries.borrow_mut() = countries.to_vec();
    }

    fn show_place(&self, view: PlaceView) {
        self.place.borrow_mut().push(view);
    }

    fn show_reviews(&self, view: ReviewsView) {
        self.reviews.borrow_mut().push(view);
    }

    fn show_add_review_cta(&self, target: Option<Page>) {
        self.cta.borrow_mut().push(target);
    }

    fn mark_logged_in(&self) {
        self.logged_in.set(true);
    }
}

/// Контекст страницы на фейках плюс ручки для проверок.
pub(crate) struct Harness {
    pub(crate) session: Rc<MemoryCredentialStore>,
    pub(crate) transport: Rc<FakeTransport>,
    pub(crate) browser: Rc<RecordingBrowser>,
    pub(crate) surface: Rc<RecordingSurface>,
    pub(crate) ctx: PageContext,
}

impl Harness {
    pub(crate) fn new(token: Option<&str>) -> Self {
        let session = Rc::new(match token {
            Some(token) => MemoryCredentialStore::with_token(token),
            None => MemoryCredentialStore::new(),
        });
        let transport = Rc::new(FakeTransport::default());
        let browser = Rc::new(RecordingBrowser::default());
        let surface = Rc::new(RecordingSurface::default());
        let ctx = PageContext::new(
            ApiConfig::new(BASE),
            session.clone(),
            transport.clone(),
            browser.clone(),
            surface.clone(),
        );

        Self {
            session,
            transport,
            browser,
            surface,
            ctx,
        }
    }

    pub(crate) fn url(path: &str) -> String {
        format!("{BASE}{path}")
    }
}
