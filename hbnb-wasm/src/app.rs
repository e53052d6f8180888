use std::rc::Rc;

use hbnb_client::filter::FilterState;
use hbnb_client::pages::listings::ListingsPage;
use hbnb_client::pages::login::LoginPage;
use hbnb_client::pages::review::{ReviewForm, ReviewPage};
use hbnb_client::pages::{Controller, PageContext};
use hbnb_client::{ApiConfig, CredentialStore, Page};

use crate::api::{API_BASE_URL, GlooTransport};
use crate::browser::WindowBrowser;
use crate::dom::{self, ids};
use crate::storage::CookieCredentialStore;
use crate::surface::DomSurface;

/// Точка входа: ждёт готовности документа и запускает контроллер страницы.
pub(crate) fn start() {
    if dom::is_loading() {
        dom::on_document("DOMContentLoaded", |_| run());
    } else {
        run();
    }
}

fn context() -> PageContext {
    PageContext::new(
        ApiConfig::new(API_BASE_URL),
        Rc::new(CookieCredentialStore),
        Rc::new(GlooTransport),
        Rc::new(WindowBrowser),
        Rc::new(DomSurface::default()),
    )
}

fn run() {
    let Some((pathname, search)) = dom::location() else {
        tracing::error!("window location is not available");
        return;
    };
    let ctx = context();
    bind_logout(&ctx);

    match Controller::dispatch(&pathname, &search, ctx) {
        Some(Controller::Login(page)) => bind_login(page),
        Some(Controller::Listings(page)) => bind_listings(page),
        Some(Controller::PlaceDetail(page)) => {
            leptos::task::spawn_local(async move { page.open().await });
        }
        Some(Controller::AddReview(page)) => {
            if page.open() {
                bind_review(page);
            }
        }
        None => tracing::debug!(pathname, "no controller for this page"),
    }
}

fn bind_login(page: LoginPage) {
    let page = Rc::new(page);
    let bound = dom::on(ids::LOGIN_FORM, "submit", move |event| {
        event.prevent_default();
        let email = dom::field_value(ids::EMAIL);
        let password = dom::field_value(ids::PASSWORD);
        let page = page.clone();
        leptos::task::spawn_local(async move {
            page.submit(&email, &password).await;
        });
    });
    if !bound {
        tracing::warn!("login form is missing");
    }
}

fn current_filter() -> FilterState {
    FilterState::from_controls(
        &dom::field_value(ids::COUNTRY_FILTER),
        &dom::field_value(ids::PRICE_FILTER),
    )
}

fn bind_listings(page: ListingsPage) {
    leptos::task::spawn_local(async move {
        let Some(board) = page.open(current_filter).await else {
            return;
        };
        let page = Rc::new(page);
        let board = Rc::new(board);
        for id in [ids::COUNTRY_FILTER, ids::PRICE_FILTER] {
            let page = page.clone();
            let board = board.clone();
            dom::on(id, "change", move |_| page.show(&board, &current_filter()));
        }
    });
}

fn bind_review(page: ReviewPage) {
    let page = Rc::new(page);
    let bound = dom::on(ids::REVIEW_FORM, "submit", move |event| {
        event.prevent_default();
        let form = ReviewForm {
            rating: dom::field_value(ids::RATING),
            comment: dom::field_value(ids::COMMENT),
        };
        let page = page.clone();
        leptos::task::spawn_local(async move {
            let outcome = page.submit(&form).await;
            tracing::debug!(?outcome, "review submission finished");
        });
    });
    if !bound {
        tracing::warn!("review form is missing");
    }
}

/// Ссылка выхода есть не на всех страницах.
fn bind_logout(ctx: &PageContext) {
    let session = ctx.session.clone();
    let browser = ctx.browser.clone();
    dom::on(ids::LOGOUT_LINK, "click", move |event| {
        event.prevent_default();
        if let Err(err) = session.clear() {
            tracing::warn!(error = %err, "failed to clear session");
        }
        browser.navigate(&Page::Login);
    });
}
