//! Map credential storage and resolution.
//!
//! The mapping SDK needs an API credential before any surface can be
//! created. The credential is injected explicitly: the shell resolves
//! it from a [`CredentialStore`] at startup and falls back to a
//! credential-entry screen when none is stored.

use std::fs;
use std::io;
use std::path::PathBuf;

/// A non-empty mapping SDK credential.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapCredential(String);

impl MapCredential {
    /// Wrap a credential string. Returns `None` for empty or
    /// whitespace-only input.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The credential as handed to the SDK.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Outcome of resolving the stored credential at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MapAccess {
    /// A credential is available; the map can mount.
    Ready(MapCredential),
    /// No stored credential; show the credential-entry fallback.
    NeedsCredential,
}

/// Persistent storage for the map credential.
pub trait CredentialStore {
    /// Load the stored credential, if any.
    fn load(&self) -> Option<MapCredential>;

    /// Persist a credential for future sessions.
    fn save(&mut self, credential: &MapCredential) -> io::Result<()>;
}

/// Resolve map access from a store.
pub fn resolve(store: &dyn CredentialStore) -> MapAccess {
    match store.load() {
        Some(credential) => MapAccess::Ready(credential),
        None => MapAccess::NeedsCredential,
    }
}

/// File-backed credential store.
///
/// The credential is stored as the bare file contents. A missing or
/// unreadable file means no credential.
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Store backed by `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> Option<MapCredential> {
        let contents = fs::read_to_string(&self.path).ok()?;
        MapCredential::new(&contents)
    }

    fn save(&mut self, credential: &MapCredential) -> io::Result<()> {
        fs::write(&self.path, credential.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticStore(Option<MapCredential>);

    impl CredentialStore for StaticStore {
        fn load(&self) -> Option<MapCredential> {
            self.0.clone()
        }

        fn save(&mut self, credential: &MapCredential) -> io::Result<()> {
            self.0 = Some(credential.clone());
            Ok(())
        }
    }

    #[test]
    fn empty_input_is_not_a_credential() {
        assert_eq!(MapCredential::new(""), None);
        assert_eq!(MapCredential::new("   "), None);
        assert_eq!(
            MapCredential::new("  abc-123  ").map(|c| c.as_str().to_string()),
            Some("abc-123".to_string())
        );
    }

    #[test]
    fn missing_credential_falls_back_to_entry() {
        assert_eq!(resolve(&StaticStore(None)), MapAccess::NeedsCredential);

        let credential = MapCredential::new("abc-123").unwrap();
        assert_eq!(
            resolve(&StaticStore(Some(credential.clone()))),
            MapAccess::Ready(credential)
        );
    }

    #[test]
    fn save_then_load_roundtrips() {
        let mut store = StaticStore(None);
        let credential = MapCredential::new("abc-123").unwrap();
        store.save(&credential).unwrap();
        assert_eq!(store.load(), Some(credential));
    }
}
