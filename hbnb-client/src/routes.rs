//! Маршрутизация по страницам.
//!
//! Каждая страница загружается отдельным документом, клиентского роутинга нет.
//! Маршрут вычисляется один раз при готовности страницы.

use url::form_urlencoded;

pub const LOGIN_PAGE: &str = "login.html";
pub const INDEX_PAGE: &str = "index.html";
pub const PLACE_PAGE: &str = "place.html";
pub const ADD_REVIEW_PAGE: &str = "add_review.html";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Какой контроллер обслуживает текущую страницу.
pub enum Route {
    Login,
    Listings,
    /// `id` отсутствует, если его нет в query или он пустой.
    PlaceDetail { id: Option<String> },
    AddReview { id: Option<String> },
}

impl Route {
    /// Определяет маршрут по `location.pathname` и `location.search`.
    ///
    /// `None` означает страницу без контроллера.
    pub fn resolve(pathname: &str, search: &str) -> Option<Self> {
        if pathname.ends_with(LOGIN_PAGE) {
            return Some(Self::Login);
        }
        if pathname.ends_with("/index.html")
            || pathname.ends_with("/client/")
            || pathname.ends_with("/client")
        {
            return Some(Self::Listings);
        }

        let id = query_param(search, "id");
        if pathname.ends_with(ADD_REVIEW_PAGE) {
            return Some(Self::AddReview { id });
        }
        if pathname.ends_with(PLACE_PAGE) {
            return Some(Self::PlaceDetail { id });
        }
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Куда можно перейти со страницы.
pub enum Page {
    Login,
    Index,
    Place { id: String },
    AddReview { id: String },
}

impl Page {
    pub fn href(&self) -> String {
        match self {
            Self::Login => LOGIN_PAGE.to_string(),
            Self::Index => INDEX_PAGE.to_string(),
            Self::Place { id } => format!("{PLACE_PAGE}?{}", id_query(id)),
            Self::AddReview { id } => format!("{ADD_REVIEW_PAGE}?{}", id_query(id)),
        }
    }
}

fn id_query(id: &str) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair("id", id)
        .finish()
}

/// Первое непустое значение параметра `name` в query-строке.
pub fn query_param(search: &str, name: &str) -> Option<String> {
    form_urlencoded::parse(search.trim_start_matches('?').as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}
