use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Ошибки контроллеров `hbnb-client`.
pub enum HbnbClientError {
    /// Сетевой сбой: запрос не дошёл или ответ не прочитан.
    #[error("network error: {0}")]
    Network(String),

    /// Сервер ответил 401: токен отсутствует или истёк.
    #[error("Unauthorized")]
    Unauthorized,

    /// Сервер ответил не-2xx статусом.
    #[error("http error {status}: {message}")]
    Http {
        /// HTTP-статус ответа.
        status: u16,
        /// Тело ответа или сообщение по умолчанию.
        message: String,
    },

    /// Тело ответа не удалось разобрать как ожидаемый JSON.
    #[error("decode error: {0}")]
    Decode(String),

    /// Не удалось прочитать или записать токен.
    #[error("storage error: {0}")]
    Storage(String),
}

/// Результат операций `hbnb-client`.
pub type HbnbClientResult<T> = Result<T, HbnbClientError>;

impl HbnbClientError {
    /// Возвращает `true`, если ошибка уже обработана редиректом на логин.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

impl From<serde_json::Error> for HbnbClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_unauthorized_counts_as_handled_redirect() {
        assert!(HbnbClientError::Unauthorized.is_unauthorized());
        assert!(
            !HbnbClientError::Http {
                status: 401,
                message: String::new(),
            }
            .is_unauthorized()
        );
    }
}
