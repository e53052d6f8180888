use tracing::{info, warn};

use super::{LOGIN_PATH, PageContext};
use crate::error::{HbnbClientError, HbnbClientResult};
use crate::gateway::RequestOptions;
use crate::models::{LoginRequest, LoginResponse};
use crate::routes::Page;
use crate::session::normalize_token;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Токен сохранён, начат переход на список.
    SignedIn,
    /// Сервер отказал; содержит сырое тело ответа.
    Rejected(String),
    /// Сбой сети, разбора ответа или записи токена.
    Failed(String),
}

pub struct LoginPage {
    ctx: PageContext,
}

impl LoginPage {
    pub fn new(ctx: PageContext) -> Self {
        Self { ctx }
    }

    /// Обработчик отправки формы логина.
    ///
    /// При отказе сессия не меняется и пользователь остаётся на странице.
    pub async fn submit(&self, email: &str, password: &str) -> LoginOutcome {
        let result = match self.request_token(email.trim(), password).await {
            Ok(token) => self.ctx.session.set(&token),
            Err(err) => Err(err),
        };

        let outcome = match result {
            Ok(()) => {
                info!("signed in");
                self.ctx.browser.navigate(&Page::Index);
                return LoginOutcome::SignedIn;
            }
            Err(HbnbClientError::Http { status, message }) => {
                warn!(status, "login rejected");
                LoginOutcome::Rejected(message)
            }
            Err(err) => {
                warn!(error = %err, "login failed");
                LoginOutcome::Failed(err.to_string())
            }
        };

        match &outcome {
            LoginOutcome::Rejected(body) => {
                self.ctx.browser.alert(&format!("Login failed: {body}"))
            }
            LoginOutcome::Failed(message) => {
                self.ctx.browser.alert(&format!("Login error: {message}"))
            }
            LoginOutcome::SignedIn => {}
        }
        outcome
    }

    async fn request_token(&self, email: &str, password: &str) -> HbnbClientResult<String> {
        let options = RequestOptions::post_json(&LoginRequest { email, password })?;
        let response = self.ctx.gateway.send_public(LOGIN_PATH, options).await?;
        if !response.is_success() {
            return Err(HbnbClientError::Http {
                status: response.status,
                message: response.body,
            });
        }

        let body: LoginResponse = response.json()?;
        normalize_token(&body.access_token)
            .ok_or_else(|| HbnbClientError::Decode("access_token is blank".to_string()))
    }
}
