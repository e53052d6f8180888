//! Контроллер клиентской части HBnB: сессия, запросы к API и отрисовка страниц.
//!
//! Библиотека не зависит от браузера. Токен, сеть, навигация и DOM приходят
//! снаружи через трейты [`CredentialStore`], [`Transport`], [`Browser`] и
//! [`Surface`], поэтому одни и те же контроллеры работают в `hbnb-wasm`,
//! в `hbnb-cli` и в тестах.

mod browser;
mod config;
mod error;
pub mod filter;
mod gateway;
pub mod models;
pub mod pages;
pub mod routes;
pub mod session;
mod transport;
pub mod view;

#[cfg(test)]
mod testing;

pub use browser::Browser;
pub use config::ApiConfig;
pub use error::{HbnbClientError, HbnbClientResult};
pub use gateway::{AuthFailurePolicy, Gateway, RequestOptions};
pub use pages::{Controller, PageContext};
pub use routes::{Page, Route};
pub use session::{CredentialStore, MemoryCredentialStore};
pub use transport::{HttpRequest, HttpResponse, Method, Transport};
pub use view::Surface;
