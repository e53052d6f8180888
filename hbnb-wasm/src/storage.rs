use hbnb_client::session::{
    TOKEN_COOKIE, expired_token_cookie, normalize_token, read_cookie, token_cookie,
};
use hbnb_client::{CredentialStore, HbnbClientError, HbnbClientResult};

use crate::dom;

/// Токен в cookie `token`, доступной всем страницам origin.
pub(crate) struct CookieCredentialStore;

impl CredentialStore for CookieCredentialStore {
    fn get(&self) -> Option<String> {
        let header = dom::cookie()?;
        read_cookie(&header, TOKEN_COOKIE)
    }

    fn set(&self, token: &str) -> HbnbClientResult<()> {
        let token = normalize_token(token)
            .ok_or_else(|| HbnbClientError::Storage("token must not be blank".to_string()))?;
        dom::set_cookie(&token_cookie(&token)).map_err(HbnbClientError::Storage)
    }

    fn clear(&self) -> HbnbClientResult<()> {
        dom::set_cookie(&expired_token_cookie()).map_err(HbnbClientError::Storage)
    }
}
