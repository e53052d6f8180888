use hbnb_client::{Browser, Page};

use crate::dom;

pub(crate) struct WindowBrowser;

impl Browser for WindowBrowser {
    fn navigate(&self, page: &Page) {
        dom::navigate(&page.href());
    }

    fn alert(&self, message: &str) {
        dom::alert(message);
    }
}
