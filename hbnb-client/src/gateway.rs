//! Шлюз авторизованных запросов.
//!
//! Все запросы к API идут через `Gateway::send`: он подставляет
//! `Content-Type: application/json` и `Authorization: Bearer <token>`,
//! а на 401 уводит пользователя на страницу логина.

use std::cell::Cell;
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::browser::Browser;
use crate::config::ApiConfig;
use crate::error::{HbnbClientError, HbnbClientResult};
use crate::routes::Page;
use crate::session::CredentialStore;
use crate::transport::{HttpRequest, HttpResponse, Method, Transport};

const CONTENT_TYPE: &str = "Content-Type";
const AUTHORIZATION: &str = "Authorization";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Что делать с ответом 401.
pub enum AuthFailurePolicy {
    /// Перейти на логин и вернуть `HbnbClientError::Unauthorized`.
    #[default]
    Redirect,
    /// Отдать ответ вызывающему как есть.
    PassThrough,
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Параметры одного запроса: метод, тело и дополнительные заголовки.
pub struct RequestOptions {
    pub method: Option<Method>,
    pub body: Option<String>,
    /// Перекрывают заголовки по умолчанию с тем же именем.
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post_json<T: Serialize>(payload: &T) -> HbnbClientResult<Self> {
        Ok(Self {
            method: Some(Method::Post),
            body: Some(serde_json::to_string(payload)?),
            headers: Vec::new(),
        })
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

#[derive(Clone)]
pub struct Gateway {
    config: ApiConfig,
    session: Rc<dyn CredentialStore>,
    transport: Rc<dyn Transport>,
    browser: Rc<dyn Browser>,
    auth_failure: AuthFailurePolicy,
    /// Общий для клонов: страница уходит на логин не больше одного раза.
    redirected: Rc<Cell<bool>>,
}

impl Gateway {
    pub fn new(
        config: ApiConfig,
        session: Rc<dyn CredentialStore>,
        transport: Rc<dyn Transport>,
        browser: Rc<dyn Browser>,
    ) -> Self {
        Self {
            config,
            session,
            transport,
            browser,
            auth_failure: AuthFailurePolicy::default(),
            redirected: Rc::new(Cell::new(false)),
        }
    }

    pub fn with_auth_failure(mut self, policy: AuthFailurePolicy) -> Self {
        self.auth_failure = policy;
        self
    }

    /// Запрос от имени текущей сессии.
    pub async fn send(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> HbnbClientResult<HttpResponse> {
        let token = self.session.get();
        let request = self.build_request(path, options, token.as_deref());
        debug!(
            method = request.method.as_str(),
            url = %request.url,
            authenticated = token.is_some(),
            "sending request"
        );

        let response = self.transport.send(request).await?;
        if response.status == 401 && self.auth_failure == AuthFailurePolicy::Redirect {
            if self.redirected.replace(true) {
                debug!(path, "request rejected with 401, redirect already started");
            } else {
                warn!(path, "request rejected with 401, redirecting to login");
                self.browser.navigate(&Page::Login);
            }
            return Err(HbnbClientError::Unauthorized);
        }
        Ok(response)
    }

    /// Запрос без токена и без перехвата 401 (вход в систему).
    pub async fn send_public(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> HbnbClientResult<HttpResponse> {
        let request = self.build_request(path, options, None);
        debug!(method = request.method.as_str(), url = %request.url, "sending public request");
        self.transport.send(request).await
    }

    /// `GET` с разбором JSON; не-2xx превращается в `HbnbClientError::Http`.
    pub async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> HbnbClientResult<T> {
        let response = self.send(path, RequestOptions::get()).await?;
        if !response.is_success() {
            return Err(HbnbClientError::Http {
                status: response.status,
                message: response.body,
            });
        }
        response.json()
    }

    fn build_request(
        &self,
        path: &str,
        options: RequestOptions,
        token: Option<&str>,
    ) -> HttpRequest {
        let mut headers = vec![(CONTENT_TYPE.to_string(), "application/json".to_string())];
        for (name, value) in options.headers {
            set_header(&mut headers, name, value);
        }
        if let Some(token) = token {
            set_header(
                &mut headers,
                AUTHORIZATION.to_string(),
                format!("Bearer {token}"),
            );
        }

        HttpRequest {
            method: options.method.unwrap_or(Method::Get),
            url: self.config.endpoint(path),
            headers,
            body: options.body,
        }
    }
}

fn set_header(headers: &mut Vec<(String, String)>, name: String, value: String) {
    headers.retain(|(key, _)| !key.eq_ignore_ascii_case(&name));
    headers.push((name, value));
}
