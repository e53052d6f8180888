use tracing::{debug, info, warn};

use super::{PageContext, REVIEWS_PATH};
use crate::error::{HbnbClientError, HbnbClientResult};
use crate::gateway::RequestOptions;
use crate::models::{ErrorBody, NewReview, coerce_number};
use crate::routes::Page;
use crate::transport::HttpResponse;

/// Сырые значения полей формы отзыва.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewForm {
    pub rating: String,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewOutcome {
    /// Отзыв принят, начат переход на страницу объявления.
    Posted,
    /// Запрос не отправлялся или сессия отвергнута: начат редирект.
    Redirected,
    /// Сервер отказал; сообщение показано пользователю, форма осталась.
    Rejected(String),
    /// Сбой сети; сообщение показано пользователю, форма осталась.
    Failed(String),
}

pub struct ReviewPage {
    ctx: PageContext,
    id: Option<String>,
}

impl ReviewPage {
    pub fn new(ctx: PageContext, id: Option<String>) -> Self {
        Self { ctx, id }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Проверка при загрузке страницы: отзыв пишут только с сессией.
    ///
    /// `false` означает, что начат переход на список и форму привязывать не нужно.
    pub fn open(&self) -> bool {
        self.ensure_ready().is_some()
    }

    /// Обработчик отправки формы.
    pub async fn submit(&self, form: &ReviewForm) -> ReviewOutcome {
        let Some(id) = self.ensure_ready() else {
            return ReviewOutcome::Redirected;
        };

        let payload = NewReview {
            place_id: id.to_string(),
            rating: coerce_number(&form.rating),
            comment: form.comment.trim().to_string(),
        };

        match self.post(&payload).await {
            Ok(response) if response.is_success() => {
                info!(place_id = id, "review posted");
                self.ctx.browser.navigate(&Page::Place { id: id.to_string() });
                ReviewOutcome::Posted
            }
            Ok(response) => {
                let message = rejection_message(&response);
                warn!(status = response.status, %message, "review rejected");
                self.ctx.browser.alert(&message);
                ReviewOutcome::Rejected(message)
            }
            Err(HbnbClientError::Unauthorized) => ReviewOutcome::Redirected,
            Err(err) => {
                warn!(error = %err, "review submission failed");
                let message = format!("Failed: {err}");
                self.ctx.browser.alert(&message);
                ReviewOutcome::Failed(message)
            }
        }
    }

    fn ensure_ready(&self) -> Option<&str> {
        match self.id() {
            Some(id) if self.ctx.session.is_authenticated() => Some(id),
            _ => {
                debug!(has_id = self.id.is_some(), "review page not usable, redirecting to index");
                self.ctx.browser.navigate(&Page::Index);
                None
            }
        }
    }

    async fn post(&self, payload: &NewReview) -> HbnbClientResult<HttpResponse> {
        let options = RequestOptions::post_json(payload)?;
        self.ctx.gateway.send(REVIEWS_PATH, options).await
    }
}

fn rejection_message(response: &HttpResponse) -> String {
    response
        .json::<ErrorBody>()
        .ok()
        .and_then(|body| body.human_message())
        .unwrap_or_else(|| format!("Error {}", response.status))
}
