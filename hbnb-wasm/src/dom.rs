use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, HtmlDocument, HtmlElement};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

/// Идентификаторы элементов, к которым привязываются контроллеры.
pub(crate) mod ids {
    pub(crate) const LOGIN_FORM: &str = "login-form";
    pub(crate) const EMAIL: &str = "email";
    pub(crate) const PASSWORD: &str = "password";
    pub(crate) const PLACES_LIST: &str = "places-list";
    pub(crate) const COUNTRY_FILTER: &str = "country-filter";
    pub(crate) const PRICE_FILTER: &str = "price-filter";
    pub(crate) const PLACE: &str = "place";
    pub(crate) const REVIEWS: &str = "reviews";
    pub(crate) const ADD_REVIEW_CTA: &str = "addReviewCta";
    pub(crate) const LOGIN_LINK: &str = "loginLink";
    pub(crate) const LOGOUT_LINK: &str = "logout-link";
    pub(crate) const REVIEW_FORM: &str = "revForm";
    pub(crate) const RATING: &str = "rating";
    pub(crate) const COMMENT: &str = "comment";
}

pub(crate) fn document() -> Option<Document> {
    web_sys::window()?.document()
}

pub(crate) fn element(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub(crate) fn html_element(id: &str) -> Option<HtmlElement> {
    element(id)?.dyn_into::<HtmlElement>().ok()
}

pub(crate) fn is_loading() -> bool {
    document().is_some_and(|doc| doc.ready_state() == "loading")
}

/// `pathname` и `search` текущего адреса.
pub(crate) fn location() -> Option<(String, String)> {
    let location = web_sys::window()?.location();
    Some((location.pathname().ok()?, location.search().ok()?))
}

pub(crate) fn navigate(href: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if window.location().set_href(href).is_err() {
        tracing::warn!(href, "navigation failed");
    }
}

pub(crate) fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Текст элемента; пропавший элемент игнорируется.
pub(crate) fn set_text(id: &str, text: &str) {
    if let Some(el) = element(id) {
        el.set_text_content(Some(text));
    }
}

pub(crate) fn clear(id: &str) {
    if let Some(el) = element(id) {
        el.set_inner_html("");
    }
}

/// Значение поля ввода, textarea или select; пустая строка, если поля нет.
pub(crate) fn field_value(id: &str) -> String {
    let Some(el) = element(id) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        return area.value();
    }
    if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        return select.value();
    }
    String::new()
}

pub(crate) fn append_option(select_id: &str, value: &str) {
    let (Some(doc), Some(select)) = (document(), element(select_id)) else {
        return;
    };
    let Ok(option) = doc.create_element("option") else {
        return;
    };
    let _ = option.set_attribute("value", value);
    option.set_text_content(Some(value));
    let _ = select.append_child(&option);
}

/// Вешает обработчик на элемент по id. Обработчик живёт до конца страницы.
pub(crate) fn on<F>(id: &str, event: &str, handler: F) -> bool
where
    F: FnMut(Event) + 'static,
{
    let Some(el) = element(id) else {
        return false;
    };
    listen(&el, event, handler)
}

pub(crate) fn on_document<F>(event: &str, handler: F) -> bool
where
    F: FnMut(Event) + 'static,
{
    let Some(doc) = document() else {
        return false;
    };
    listen(&doc, event, handler)
}

fn listen<F>(target: &web_sys::EventTarget, event: &str, handler: F) -> bool
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    let callback = closure.as_ref().unchecked_ref::<js_sys::Function>();
    let bound = target
        .add_event_listener_with_callback(event, callback)
        .is_ok();
    closure.forget();
    bound
}

pub(crate) fn cookie() -> Option<String> {
    document()?.dyn_into::<HtmlDocument>().ok()?.cookie().ok()
}

pub(crate) fn set_cookie(value: &str) -> Result<(), String> {
    let doc = document()
        .ok_or_else(|| "document is not available".to_string())?
        .dyn_into::<HtmlDocument>()
        .map_err(|_| "document is not an HTML document".to_string())?;
    doc.set_cookie(value)
        .map_err(|_| "failed to write cookie".to_string())
}
