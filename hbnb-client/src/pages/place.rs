use tracing::{debug, warn};

use super::{PageContext, place_path, place_reviews_path};
use crate::error::HbnbClientError;
use crate::models::{Listing, Review};
use crate::routes::Page;
use crate::view::{PlaceDetailView, PlaceView, ReviewCard, ReviewsView};

/// Страница объявления: детали и отзывы грузятся независимо.
pub struct PlacePage {
    ctx: PageContext,
    id: Option<String>,
}

impl PlacePage {
    pub fn new(ctx: PageContext, id: Option<String>) -> Self {
        Self { ctx, id }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Без `id` страница показывает ошибку и не ходит в сеть.
    /// Смотреть объявление можно и без сессии.
    pub async fn open(&self) {
        let Some(id) = self.id() else {
            self.ctx.surface.show_place(PlaceView::MissingId);
            return;
        };

        if self.ctx.session.is_authenticated() {
            self.ctx.surface.mark_logged_in();
        }

        let (place_redirected, reviews_redirected) =
            futures::join!(self.load_place(id), self.load_reviews(id));
        if place_redirected || reviews_redirected {
            debug!(id, "session rejected, add-review link skipped");
            return;
        }

        let cta = self
            .ctx
            .session
            .is_authenticated()
            .then(|| Page::AddReview { id: id.to_string() });
        self.ctx.surface.show_add_review_cta(cta);
    }

    /// `true`, если сервер отверг сессию и начат переход на логин.
    async fn load_place(&self, id: &str) -> bool {
        let view = match self.ctx.gateway.fetch_json::<Listing>(&place_path(id)).await {
            Ok(listing) => PlaceView::Detail(PlaceDetailView::from(&listing)),
            Err(err) if err.is_unauthorized() => return true,
            Err(HbnbClientError::Http { status, .. }) => {
                warn!(status, id, "failed to load place");
                PlaceView::Failed(format!("Error {status}"))
            }
            Err(err) => {
                warn!(error = %err, id, "failed to load place");
                PlaceView::Failed(format!("Failed to load place: {err}"))
            }
        };
        self.ctx.surface.show_place(view);
        false
    }

    async fn load_reviews(&self, id: &str) -> bool {
        let view = match self
            .ctx
            .gateway
            .fetch_json::<Vec<Review>>(&place_reviews_path(id))
            .await
        {
            Ok(reviews) if reviews.is_empty() => ReviewsView::Empty,
            Ok(reviews) => {
                debug!(count = reviews.len(), id, "reviews loaded");
                ReviewsView::Cards(reviews.iter().map(ReviewCard::from).collect())
            }
            Err(err) if err.is_unauthorized() => return true,
            Err(HbnbClientError::Http { status, .. }) => {
                ReviewsView::Failed(format!("Couldn’t load reviews ({status})."))
            }
            Err(err) => ReviewsView::Failed(format!("Error loading reviews: {err}")),
        };
        self.ctx.surface.show_reviews(view);
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Harness;
    use crate::transport::Method;

    const PLACE: &str = r#"{
        "id": "42", "title": "Loft", "price": 120, "city": "Paris", "country": "France",
        "description": "Sunny", "owner": {"first_name": "Ada", "last_name": "Lovelace"}
    }"#;

    fn script(harness: &Harness, place: (u16, &str), reviews: (u16, &str)) {
        harness.transport.respond(
            Method::Get,
            &Harness::url(&place_path("42")),
            place.0,
            place.1,
        );
        harness.transport.respond(
            Method::Get,
            &Harness::url(&place_reviews_path("42")),
            reviews.0,
            reviews.1,
        );
    }

    #[tokio::test]
    async fn missing_id_renders_terminal_state_without_requests() {
        let harness = Harness::new(Some("abc"));

        PlacePage::new(harness.ctx.clone(), None).open().await;

        assert_eq!(harness.surface.last_place(), Some(PlaceView::MissingId));
        assert!(harness.transport.requests().is_empty());
        assert!(harness.surface.reviews.borrow().is_empty());
    }

    #[tokio::test]
    async fn place_failure_does_not_suppress_reviews() {
        let harness = Harness::new(None);
        script(&harness, (500, "oops"), (200, "[]"));

        PlacePage::new(harness.ctx.clone(), Some("42".to_string()))
            .open()
            .await;

        assert_eq!(
            harness.surface.last_place(),
            Some(PlaceView::Failed("Error 500".to_string()))
        );
        assert_eq!(harness.surface.last_reviews(), Some(ReviewsView::Empty));
        assert_eq!(harness.transport.requests().len(), 2);
    }

    #[tokio::test]
    async fn reviews_failure_does_not_suppress_place() {
        let harness = Harness::new(None);
        script(&harness, (200, PLACE), (503, ""));

        PlacePage::new(harness.ctx.clone(), Some("42".to_string()))
            .open()
            .await;

        match harness.surface.last_place() {
            Some(PlaceView::Detail(detail)) => {
                assert_eq!(detail.title, "Loft");
                assert_eq!(detail.price_label, "$120 / night");
                assert_eq!(detail.location, "Paris, France");
                assert_eq!(detail.host, "Ada Lovelace");
            }
            other => panic!("expected detail, got {other:?}"),
        }
        assert_eq!(
            harness.surface.last_reviews(),
            Some(ReviewsView::Failed(
                "Couldn’t load reviews (503).".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn reviews_render_with_fallbacks() {
        let harness = Harness::new(None);
        script(
            &harness,
            (200, PLACE),
            (
                200,
                r#"[
                    {"comment": "Lovely", "rating": 5, "user": {"first_name": "Ada", "last_name": "L"}},
                    {"comment": "Meh", "rating": null, "user": null}
                ]"#,
            ),
        );

        PlacePage::new(harness.ctx.clone(), Some("42".to_string()))
            .open()
            .await;

        match harness.surface.last_reviews() {
            Some(ReviewsView::Cards(cards)) => {
                assert_eq!(cards.len(), 2);
                assert_eq!(cards[0].byline(), "By Ada L — Rating: 5");
                assert_eq!(cards[1].byline(), "By Anonymous — Rating: —");
            }
            other => panic!("expected review cards, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn transport_faults_render_inline_per_region() {
        let harness = Harness::new(None);
        harness.transport.fail(
            Method::Get,
            &Harness::url(&place_path("42")),
            "offline",
        );
        harness.transport.fail(
            Method::Get,
            &Harness::url(&place_reviews_path("42")),
            "offline",
        );

        PlacePage::new(harness.ctx.clone(), Some("42".to_string()))
            .open()
            .await;

        assert_eq!(
            harness.surface.last_place(),
            Some(PlaceView::Failed(
                "Failed to load place: network error: offline".to_string()
            ))
        );
        assert_eq!(
            harness.surface.last_reviews(),
            Some(ReviewsView::Failed(
                "Error loading reviews: network error: offline".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn session_shows_add_review_cta_and_login_state() {
        let harness = Harness::new(Some("abc"));
        script(&harness, (200, PLACE), (200, "[]"));

        PlacePage::new(harness.ctx.clone(), Some("42".to_string()))
            .open()
            .await;

        assert!(harness.surface.logged_in.get());
        assert_eq!(
            *harness.surface.cta.borrow(),
            vec![Some(Page::AddReview {
                id: "42".to_string()
            })]
        );
        let request = harness.transport.last_request().expect("request recorded");
        assert_eq!(request.header("Authorization"), Some("Bearer abc"));
    }

    #[tokio::test]
    async fn anonymous_visitor_gets_empty_cta_slot_and_no_redirect() {
        let harness = Harness::new(None);
        script(&harness, (200, PLACE), (200, "[]"));

        PlacePage::new(harness.ctx.clone(), Some("42".to_string()))
            .open()
            .await;

        assert!(!harness.surface.logged_in.get());
        assert_eq!(*harness.surface.cta.borrow(), vec![None]);
        assert!(harness.browser.navigations().is_empty());
    }

    #[tokio::test]
    async fn stale_session_redirects_once_and_skips_cta() {
        let harness = Harness::new(Some("expired"));
        script(&harness, (401, ""), (401, ""));

        PlacePage::new(harness.ctx.clone(), Some("42".to_string()))
            .open()
            .await;

        assert_eq!(harness.browser.navigations(), vec![Page::Login]);
        assert!(harness.surface.cta.borrow().is_empty());
        assert!(harness.surface.place.borrow().is_empty());
        assert!(harness.surface.reviews.borrow().is_empty());
    }

    #[tokio::test]
    async fn rejected_reviews_alone_still_skip_cta() {
        let harness = Harness::new(Some("expired"));
        script(&harness, (200, PLACE), (401, ""));

        PlacePage::new(harness.ctx.clone(), Some("42".to_string()))
            .open()
            .await;

        assert_eq!(harness.browser.navigations(), vec![Page::Login]);
        assert!(matches!(harness.surface.last_place(), Some(PlaceView::Detail(_))));
        assert!(harness.surface.cta.borrow().is_empty());
    }
}
