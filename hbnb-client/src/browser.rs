use crate::routes::Page;

/// Навигация и блокирующие уведомления окна.
pub trait Browser {
    /// Переход на другую страницу (новая загрузка документа).
    fn navigate(&self, page: &Page);

    /// Модальное уведомление; используется только для ошибок отправки форм.
    fn alert(&self, message: &str);
}
