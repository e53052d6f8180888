use std::fs;
use std::io;
use std::path::PathBuf;

use hbnb_client::session::normalize_token;
use hbnb_client::{CredentialStore, HbnbClientError, HbnbClientResult};

/// Токен в файле: CLI-аналог cookie `token`.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CredentialStore for FileCredentialStore {
    fn get(&self) -> Option<String> {
        let raw = fs::read_to_string(&self.path).ok()?;
        normalize_token(&raw)
    }

    fn set(&self, token: &str) -> HbnbClientResult<()> {
        let token = normalize_token(token)
            .ok_or_else(|| HbnbClientError::Storage("token must not be blank".to_string()))?;
        fs::write(&self.path, token).map_err(|err| storage_error("save", err))
    }

    fn clear(&self) -> HbnbClientResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(storage_error("remove", err)),
        }
    }
}

fn storage_error(action: &str, err: io::Error) -> HbnbClientError {
    HbnbClientError::Storage(format!("failed to {action} token file: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_means_no_session() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = FileCredentialStore::new(dir.path().join(".hbnb_token"));
        assert!(store.get().is_none());
        assert!(store.clear().is_ok());
    }

    #[test]
    fn set_then_get_trims_token() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(".hbnb_token");
        let store = FileCredentialStore::new(&path);

        store.set("  abc.def.ghi \n").expect("set should succeed");

        assert_eq!(store.get().as_deref(), Some("abc.def.ghi"));
        assert_eq!(
            fs::read_to_string(&path).expect("file written"),
            "abc.def.ghi"
        );
    }

    #[test]
    fn blank_file_is_no_session() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(".hbnb_token");
        fs::write(&path, "   \n").expect("file written");

        assert!(FileCredentialStore::new(path).get().is_none());
    }

    #[test]
    fn clear_removes_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(".hbnb_token");
        let store = FileCredentialStore::new(&path);
        store.set("abc").expect("set should succeed");

        store.clear().expect("clear should succeed");

        assert!(!path.exists());
        assert!(store.get().is_none());
    }
}
