//! Хранилище единственного токена сессии.
//!
//! Пользователь считается вошедшим, только если токен есть.
//! Срок действия локально не проверяется: протухший токен обнаруживается
//! только по 401 от сервера.

use std::sync::Mutex;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use crate::error::{HbnbClientError, HbnbClientResult};

/// Имя cookie, в которой браузерная версия хранит токен.
pub const TOKEN_COOKIE: &str = "token";

// Тот же набор, что оставляет нетронутым `encodeURIComponent`.
const COOKIE_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Источник и приёмник токена сессии.
pub trait CredentialStore {
    /// Текущий токен, если он есть.
    fn get(&self) -> Option<String>;

    /// Сохраняет токен, заменяя предыдущий.
    fn set(&self, token: &str) -> HbnbClientResult<()>;

    /// Удаляет токен (logout).
    fn clear(&self) -> HbnbClientResult<()>;

    fn is_authenticated(&self) -> bool {
        self.get().is_some()
    }
}

/// Токен в памяти процесса.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    token: Mutex<Option<String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(normalize_token(token)),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self) -> Option<String> {
        self.token.lock().ok()?.clone()
    }

    fn set(&self, token: &str) -> HbnbClientResult<()> {
        let token = normalize_token(token)
            .ok_or_else(|| HbnbClientError::Storage("token must not be blank".to_string()))?;
        let mut slot = self
            .token
            .lock()
            .map_err(|_| HbnbClientError::Storage("token lock poisoned".to_string()))?;
        *slot = Some(token);
        Ok(())
    }

    fn clear(&self) -> HbnbClientResult<()> {
        let mut slot = self
            .token
            .lock()
            .map_err(|_| HbnbClientError::Storage("token lock poisoned".to_string()))?;
        *slot = None;
        Ok(())
    }
}

/// Обрезает пробелы; пустой токен считается отсутствующим.
pub fn normalize_token(raw: &str) -> Option<String> {
    let token = raw.trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}

/// Достаёт значение cookie `name` из строки `document.cookie`.
///
/// Если ключ встречается несколько раз, побеждает последнее вхождение.
pub fn read_cookie(cookie_header: &str, name: &str) -> Option<String> {
    cookie_header
        .split(';')
        .filter_map(|pair| {
            let (key, value) = pair.trim().split_once('=')?;
            (key == name).then(|| {
                percent_decode_str(value)
                    .decode_utf8_lossy()
                    .into_owned()
            })
        })
        .last()
        .and_then(|value| normalize_token(&value))
}

/// Строка для записи токена в `document.cookie`.
pub fn token_cookie(token: &str) -> String {
    format!(
        "{TOKEN_COOKIE}={}; path=/",
        utf8_percent_encode(token, COOKIE_VALUE)
    )
}

/// Строка, удаляющая cookie с токеном.
pub fn expired_token_cookie() -> String {
    format!("{TOKEN_COOKIE}=; path=/; max-age=0")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_cookie_finds_token_among_others() {
        let header = "theme=dark; token=abc.def.ghi; lang=en";
        assert_eq!(
            read_cookie(header, TOKEN_COOKIE).as_deref(),
            Some("abc.def.ghi")
        );
    }

    #[test]
    fn read_cookie_last_occurrence_wins() {
        let header = "token=old; token=new";
        assert_eq!(read_cookie(header, TOKEN_COOKIE).as_deref(), Some("new"));
    }

    #[test]
    fn read_cookie_treats_blank_value_as_absent() {
        assert!(read_cookie("token=", TOKEN_COOKIE).is_none());
        assert!(read_cookie("", TOKEN_COOKIE).is_none());
        assert!(read_cookie("tokens=abc", TOKEN_COOKIE).is_none());
    }

    #[test]
    fn token_cookie_encodes_like_encode_uri_component() {
        assert_eq!(token_cookie("a b=c"), "token=a%20b%3Dc; path=/");
        assert_eq!(token_cookie("abc.DEF-1_2"), "token=abc.DEF-1_2; path=/");
    }

    #[test]
    fn written_cookie_reads_back() {
        let written = token_cookie("x+y/z");
        let (pair, _) = written.split_once(';').expect("cookie has attributes");
        assert_eq!(read_cookie(pair, TOKEN_COOKIE).as_deref(), Some("x+y/z"));
    }

    #[test]
    fn memory_store_set_get_clear() {
        let store = MemoryCredentialStore::new();
        assert!(!store.is_authenticated());

        store.set("  abc  ").expect("set should succeed");
        assert_eq!(store.get().as_deref(), Some("abc"));

        store.clear().expect("clear should succeed");
        assert!(store.get().is_none());
    }

    #[test]
    fn memory_store_rejects_blank_token() {
        let store = MemoryCredentialStore::with_token("old");
        assert!(store.set("   ").is_err());
        assert_eq!(store.get().as_deref(), Some("old"));
    }
}
