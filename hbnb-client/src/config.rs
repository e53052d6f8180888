/// Куда шлюз отправляет запросы.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiConfig {
    /// Базовый URL бэкенда; пустая строка означает тот же origin, что и у страницы.
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Склеивает базовый URL и путь, не теряя и не удваивая `/`.
    /// Хвостовой слэш пути сохраняется: для `/api/v1/places/` он значим.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
